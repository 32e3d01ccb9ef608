//! Instrumented sort engines.
//!
//! Each algorithm sorts a slice of `i32` in place and, in its
//! instrumented form, reports every observable event (comparison, swap
//! or placement) through a [`StepSink`] as a pair of indices plus the
//! current sequence state. The silent form is the same generic code
//! instantiated with [`NoopSink`], which monomorphizes away all
//! reporting.
//!
//! Event order is the regression oracle for the whole crate: tests pin
//! it per algorithm, including the idiosyncratic pairings quicksort and
//! merge sort emit during partition and merge.

use serde::{Deserialize, Serialize};

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

/// Capability to receive step events from an instrumented engine.
///
/// The engine and the sink run on the same call stack; the sink may
/// block (pacing, pause) before returning control to the engine.
pub trait StepSink {
    /// Called with the full current sequence and the one or two indices
    /// involved in the step. `a == b` marks a single-position placement.
    fn on_step(&mut self, values: &[i32], a: usize, b: usize);
}

/// Sink that discards every event. Instantiating an engine with this
/// sink yields the silent variant with no reporting overhead.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl StepSink for NoopSink {
    fn on_step(&mut self, _values: &[i32], _a: usize, _b: usize) {}
}

/// One recorded step event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// First reported index.
    pub a: usize,
    /// Second reported index.
    pub b: usize,
    /// Sequence state at the time of the event.
    pub values: Vec<i32>,
}

/// Sink that records every event, for tests and oracles.
#[derive(Debug, Default, Clone)]
pub struct StepLog {
    /// Recorded events, in emission order.
    pub records: Vec<StepRecord>,
}

impl StepLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no events were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The recorded index pairs, without the sequence snapshots.
    #[must_use]
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.records.iter().map(|r| (r.a, r.b)).collect()
    }
}

impl StepSink for StepLog {
    fn on_step(&mut self, values: &[i32], a: usize, b: usize) {
        self.records.push(StepRecord {
            a,
            b,
            values: values.to_vec(),
        });
    }
}

/// The five supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Selection sort.
    Selection,
    /// Bubble sort.
    Bubble,
    /// Insertion sort.
    Insertion,
    /// Quicksort, Lomuto partition with the last element as pivot.
    Quick,
    /// Top-down merge sort with O(n) scratch per merge.
    Merge,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Selection,
        Self::Bubble,
        Self::Insertion,
        Self::Quick,
        Self::Merge,
    ];

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Selection => "Selection sort",
            Self::Bubble => "Bubble sort",
            Self::Insertion => "Insertion sort",
            Self::Quick => "Quicksort",
            Self::Merge => "Merge sort",
        }
    }

    /// Map a 1-based menu index to an algorithm.
    #[must_use]
    pub fn from_menu_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(Self::Selection),
            2 => Some(Self::Bubble),
            3 => Some(Self::Insertion),
            4 => Some(Self::Quick),
            5 => Some(Self::Merge),
            _ => None,
        }
    }

    /// Sort silently.
    pub fn sort(self, values: &mut [i32]) {
        self.sort_with(values, &mut NoopSink);
    }

    /// Sort while reporting step events to `sink`.
    pub fn sort_with<S: StepSink>(self, values: &mut [i32], sink: &mut S) {
        match self {
            Self::Selection => selection::sort_with(values, sink),
            Self::Bubble => bubble::sort_with(values, sink),
            Self::Insertion => insertion::sort_with(values, sink),
            Self::Quick => quick::sort_with(values, sink),
            Self::Merge => merge::sort_with(values, sink),
        }
    }

    /// Upper bound on the number of events emitted for a sample of
    /// length `n`. Loose for well-arranged inputs, tight for the
    /// per-algorithm worst case.
    #[must_use]
    pub fn max_events(self, n: usize) -> usize {
        if n < 2 {
            return 0;
        }
        match self {
            // One comparison per scanned candidate plus at most one
            // swap per outer position.
            Self::Selection => n * (n - 1) / 2 + (n - 1),
            // Comparison plus possible swap for every adjacent pair.
            Self::Bubble => n * (n - 1),
            // Comparison and shift event per scanned slot plus a final
            // placement per element.
            Self::Insertion => n * (n - 1) + (n - 1),
            // Scan comparison, boundary swap and pivot placement.
            Self::Quick => n * (n - 1) + n,
            // At most two events per copied element, per merge level.
            Self::Merge => {
                let levels = usize::BITS as usize - (n - 1).leading_zeros() as usize;
                2 * n * (levels + 1)
            }
        }
    }
}
