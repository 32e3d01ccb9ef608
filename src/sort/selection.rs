//! Selection sort.
//!
//! For each position, scans the unsorted tail for the minimum. Reports
//! a comparison event `(current_min, j)` for every candidate scanned,
//! and a swap event `(i, min)` after committing a swap. Equal keys keep
//! the earlier index (strict `<`), so no swap happens on ties.

use super::StepSink;

/// Sort `values` in place, reporting steps to `sink`.
pub fn sort_with<S: StepSink>(values: &mut [i32], sink: &mut S) {
    let n = values.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            sink.on_step(values, min, j);
            if values[j] < values[min] {
                min = j;
            }
        }
        if min != i {
            values.swap(i, min);
            sink.on_step(values, i, min);
        }
    }
}

/// Sort `values` in place without reporting.
pub fn sort(values: &mut [i32]) {
    sort_with(values, &mut super::NoopSink);
}
