//! End-to-end event-sequence oracles.
//!
//! Pins the exact step events every algorithm emits for small fixed
//! inputs, plus the sample arrangements that feed them. These sequences
//! are the crate's observable behavior; a change here is a breaking
//! change for anything replaying recorded runs.

use sortviz::prelude::*;

fn events(algorithm: Algorithm, input: &[i32]) -> (Vec<i32>, Vec<(usize, usize)>) {
    let mut values = input.to_vec();
    let mut log = StepLog::new();
    algorithm.sort_with(&mut values, &mut log);
    (values, log.pairs())
}

#[test]
fn test_selection_oracle() {
    let (sorted, pairs) = events(Algorithm::Selection, &[2, 3, 1]);
    assert_eq!(sorted, [1, 2, 3]);
    assert_eq!(pairs, [(0, 1), (0, 2), (0, 2), (1, 2), (1, 2)]);
}

#[test]
fn test_bubble_oracle() {
    let (sorted, pairs) = events(Algorithm::Bubble, &[3, 1, 2]);
    assert_eq!(sorted, [1, 2, 3]);
    assert_eq!(pairs, [(0, 1), (0, 1), (1, 2), (1, 2), (0, 1)]);
}

#[test]
fn test_insertion_oracle() {
    let (sorted, pairs) = events(Algorithm::Insertion, &[3, 1, 2]);
    assert_eq!(sorted, [1, 2, 3]);
    assert_eq!(
        pairs,
        [(0, 1), (0, 1), (0, 1), (1, 2), (1, 2), (0, 2), (1, 2)]
    );
}

#[test]
fn test_quick_oracle() {
    let (sorted, pairs) = events(Algorithm::Quick, &[3, 1, 2]);
    assert_eq!(sorted, [1, 2, 3]);
    assert_eq!(pairs, [(0, 2), (1, 2), (0, 1), (1, 2)]);
}

#[test]
fn test_merge_oracle() {
    let (sorted, pairs) = events(Algorithm::Merge, &[3, 1, 2]);
    assert_eq!(sorted, [1, 2, 3]);
    assert_eq!(
        pairs,
        [
            (0, 1),
            (0, 0),
            (1, 1),
            (0, 2),
            (0, 0),
            (1, 2),
            (1, 1),
            (2, 2)
        ]
    );
}

#[test]
fn test_reverse_input_hits_worst_case_bounds() {
    for algorithm in [Algorithm::Bubble, Algorithm::Insertion] {
        let (sorted, pairs) = events(algorithm, &[3, 2, 1]);
        assert_eq!(sorted, [1, 2, 3]);
        assert_eq!(pairs.len(), algorithm.max_events(3));
    }
}

#[test]
fn test_silent_and_instrumented_agree_on_generated_samples() {
    let mut samples = SampleSource::new(42);
    for mode in ShuffleMode::ALL {
        let input = samples.generate(50, mode);
        for algorithm in Algorithm::ALL {
            let mut silent = input.clone();
            let mut instrumented = input.clone();
            algorithm.sort(&mut silent);
            algorithm.sort_with(&mut instrumented, &mut StepLog::new());
            assert_eq!(silent, instrumented, "{} diverged", algorithm.name());
        }
    }
}

#[test]
fn test_sorted_sample_sorts_without_swaps_in_selection() {
    let mut samples = SampleSource::new(42);
    let input = samples.generate(10, ShuffleMode::Sorted);
    assert_eq!(input, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let (sorted, pairs) = events(Algorithm::Selection, &input);
    assert_eq!(sorted, input);
    // n(n-1)/2 comparisons and nothing else.
    assert_eq!(pairs.len(), 45);
}

#[test]
fn test_reverse_sample_round_trips() {
    let mut samples = SampleSource::new(42);
    let input = samples.generate(5, ShuffleMode::ReverseSorted);
    assert_eq!(input, [5, 4, 3, 2, 1]);
    for algorithm in Algorithm::ALL {
        let (sorted, pairs) = events(algorithm, &input);
        assert_eq!(sorted, [1, 2, 3, 4, 5], "{}", algorithm.name());
        assert!(pairs.len() <= algorithm.max_events(5), "{}", algorithm.name());
    }
}

#[test]
fn test_event_counts_are_deterministic() {
    let mut samples = SampleSource::new(7);
    let input = samples.generate(32, ShuffleMode::Random);
    for algorithm in Algorithm::ALL {
        let (_, first) = events(algorithm, &input);
        let (_, second) = events(algorithm, &input);
        assert_eq!(first, second, "{}", algorithm.name());
    }
}
