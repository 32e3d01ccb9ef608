//! Bubble sort.
//!
//! Scans adjacent pairs, bubbling the largest remaining value to the
//! end of the unsorted prefix. Reports a comparison event `(j, j+1)`
//! for every scanned pair and a second `(j, j+1)` event after a swap.

use super::StepSink;

/// Sort `values` in place, reporting steps to `sink`.
pub fn sort_with<S: StepSink>(values: &mut [i32], sink: &mut S) {
    let n = values.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            sink.on_step(values, j, j + 1);
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                sink.on_step(values, j, j + 1);
            }
        }
    }
}

/// Sort `values` in place without reporting.
pub fn sort(values: &mut [i32]) {
    sort_with(values, &mut super::NoopSink);
}
