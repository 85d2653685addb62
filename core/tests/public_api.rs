//! Integration tests for the public API.
//!
//! These tests drive the sequence and its cursors together, the way a host
//! program would.

use arrayish_core::{IndexedSequence, SequenceError, Spread, ValueCursor};
use pretty_assertions::assert_eq;

#[test]
fn test_cursors_are_independent() {
    let seq = IndexedSequence::of(["a", "b", "c"]);
    let mut first = seq.keys();
    let mut second = seq.values();

    assert_eq!(first.next(), Some(0));
    assert_eq!(first.next(), Some(1));
    assert_eq!(second.next(), Some(Some("a")));
    assert_eq!(first.position(), 2);
    assert_eq!(second.position(), 1);
}

#[test]
fn test_entries_pair_keys_with_get() {
    let seq = IndexedSequence::from_slots([Some(5), None, Some(7)]);
    for (key, value) in seq.entries() {
        assert_eq!(value, seq.get(key));
    }
}

#[test]
fn test_cursor_outlives_mutation_burst() {
    let seq = IndexedSequence::of([1, 2, 3]);
    let mut cursor: ValueCursor<'_, i32> = seq.values();
    assert_eq!(cursor.next(), Some(Some(1)));

    seq.unshift([0]);
    seq.reverse();
    // Position 1 now holds what was at index 2 before the reverse.
    assert_eq!(cursor.next(), Some(Some(2)));
    assert_eq!(cursor.to_string(), "ValueCursor { index: 2, array: 3,2,1,0 }");
}

#[test]
fn test_work_queue() {
    // Tasks spawn follow-ups while a cursor drains the queue.
    let queue = IndexedSequence::of([3u32]);
    let mut order = Vec::new();
    for task in queue.values().flatten() {
        order.push(task);
        if task > 0 {
            queue.push([task - 1]);
        }
    }
    assert_eq!(order, vec![3, 2, 1, 0]);
    assert_eq!(queue.len(), 4);
}

#[test]
fn test_pipeline() {
    let words = IndexedSequence::of(["pear", "fig", "apple", "kiwi"].map(String::from));

    let lengths = words.map(|w, _, _| w.len());
    assert_eq!(lengths.to_string(), "4,3,5,4");

    let long = words.filter(|w, _, _| w.len() > 3);
    long.sort();
    assert_eq!(long.join(" "), "apple kiwi pear");

    let letters = words.flat_map(|w, _, _| Spread::sequence(w.chars().take(2).collect::<Vec<_>>()));
    assert_eq!(letters.join(""), "pefiapki");

    let total = lengths.reduce(|a, b, _, _| a + b);
    assert_eq!(total, Ok(16));
}

#[test]
fn test_holes_through_the_api() {
    let seq = IndexedSequence::<i32>::with_length(2);
    assert_eq!(seq.to_string(), ",");
    assert_eq!(seq.find(|_, _, _| true), None);
    assert_eq!(seq.reduce(|a, b, _, _| a + b), Err(SequenceError::EmptySequenceReduce));
    assert_eq!(seq.reduce_with(1, |a, b, _, _| a + b), 1);

    seq.push([4]);
    assert_eq!(seq.index_of(&4, 0), Some(2));
    assert_eq!(seq.concat([Spread::element(5)]).to_string(), ",,4,5");
}

#[test]
fn test_nested_sequences() {
    let inner = IndexedSequence::of([1, 2]);
    let outer = IndexedSequence::of([inner.clone(), IndexedSequence::of([3])]);
    assert!(IndexedSequence::<IndexedSequence<i32>>::is_sequence(&outer));
    assert_eq!(outer.flat(), IndexedSequence::of([1, 2, 3]));

    // Elements are copies; changing the original does not reach into `outer`.
    inner.push([9]);
    assert_eq!(outer.to_string(), "1,2,3");
}

#[test]
fn test_error_is_a_diagnostic() {
    use miette::Diagnostic;

    let err = IndexedSequence::of([1, 2])
        .sort_by(|_, _| f64::NAN)
        .unwrap_err();
    assert_eq!(
        err.code().map(|code| code.to_string()),
        Some("arrayish::invalid_comparator".to_string())
    );
    assert!(err.help().is_some());
    assert!(err.to_string().starts_with("comparator returned NaN"));
}
