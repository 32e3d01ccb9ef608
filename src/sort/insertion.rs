//! Insertion sort.
//!
//! Grows a sorted prefix by inserting each element at its place. For
//! the element at `i`, reports a comparison event `(slot-1, i)` for
//! every candidate it is checked against, a shift event `(slot, slot+1)`
//! after each element moved over the gap, and a final placement event
//! `(slot, i)` once the key is written. Shifting copies the candidate
//! over the gap, so snapshots taken mid-insertion contain a duplicate
//! where the key has been lifted out.

use super::StepSink;

/// Sort `values` in place, reporting steps to `sink`.
pub fn sort_with<S: StepSink>(values: &mut [i32], sink: &mut S) {
    let n = values.len();
    if n < 2 {
        return;
    }
    for i in 1..n {
        let key = values[i];
        // `slot` is the open position; the candidate sits at slot - 1.
        let mut slot = i;
        while slot > 0 {
            sink.on_step(values, slot - 1, i);
            if values[slot - 1] > key {
                values[slot] = values[slot - 1];
                slot -= 1;
                sink.on_step(values, slot, slot + 1);
            } else {
                break;
            }
        }
        values[slot] = key;
        sink.on_step(values, slot, i);
    }
}

/// Sort `values` in place without reporting.
pub fn sort(values: &mut [i32]) {
    sort_with(values, &mut super::NoopSink);
}
