//! Top-down merge sort.
//!
//! Splits recursively, then merges with O(n) scratch copies of both
//! halves. The merge loop reports a comparison event `(k, mid+1+j)`
//! before each choice (the write cursor against the right-half read
//! cursor) and a placement event `(k, k)` after each write. Draining a
//! leftover half reports only the placement events. Ties take the left
//! element, so equal keys keep their relative order.

use super::StepSink;

/// Sort `values` in place, reporting steps to `sink`.
pub fn sort_with<S: StepSink>(values: &mut [i32], sink: &mut S) {
    let n = values.len();
    if n < 2 {
        return;
    }
    sort_range(values, 0, n - 1, sink);
}

/// Sort `values` in place without reporting.
pub fn sort(values: &mut [i32]) {
    sort_with(values, &mut super::NoopSink);
}

fn sort_range<S: StepSink>(values: &mut [i32], left: usize, right: usize, sink: &mut S) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(values, left, mid, sink);
    sort_range(values, mid + 1, right, sink);
    merge(values, left, mid, right, sink);
}

fn merge<S: StepSink>(values: &mut [i32], left: usize, mid: usize, right: usize, sink: &mut S) {
    let lhs = values[left..=mid].to_vec();
    let rhs = values[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < lhs.len() && j < rhs.len() {
        sink.on_step(values, k, mid + 1 + j);
        if lhs[i] <= rhs[j] {
            values[k] = lhs[i];
            i += 1;
        } else {
            values[k] = rhs[j];
            j += 1;
        }
        sink.on_step(values, k, k);
        k += 1;
    }
    while i < lhs.len() {
        values[k] = lhs[i];
        i += 1;
        k += 1;
        sink.on_step(values, k - 1, k - 1);
    }
    while j < rhs.len() {
        values[k] = rhs[j];
        j += 1;
        k += 1;
        sink.on_step(values, k - 1, k - 1);
    }
}
