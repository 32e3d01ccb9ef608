//! Quicksort, Lomuto partition with the last element as pivot.
//!
//! During partition, reports a comparison event `(j, high)` for every
//! scanned index, a swap event `(dest, j)` when the partition boundary
//! advances, and the pivot placement event `(dest, high)` after the
//! final swap. Recurses left then right. Recursion depth is bounded by
//! the arrangement of the input (worst case O(n) on adversarial
//! arrangements), which is acceptable for the supported sample sizes.

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

fn sort_range<S: StepSink>(values: &mut [i32], low: usize, high: usize, sink: &mut S) {
    if low >= high {
        return;
    }
    let pivot = values[high];
    // Next destination for an element smaller than the pivot.
    let mut dest = low;
    for j in low..high {
        sink.on_step(values, j, high);
        if values[j] < pivot {
            values.swap(dest, j);
            sink.on_step(values, dest, j);
            dest += 1;
        }
    }
    values.swap(dest, high);
    sink.on_step(values, dest, high);

    if dest > low {
        sort_range(values, low, dest - 1, sink);
    }
    if dest + 1 < high {
        sort_range(values, dest + 1, high, sink);
    }
}
