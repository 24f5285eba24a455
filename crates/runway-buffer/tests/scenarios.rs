//! Integration test: end-to-end usage scenarios.
//!
//! Each test builds a small sequence the way a caller would (empty then
//! appended, pre-sized then appended, from literal values, re-sliced, as a
//! jagged table, filling explicit headroom before doubling) and checks the
//! resulting contents.

use runway_buffer::{GrowableSequence, JaggedTable};
use runway_core::SequenceError;

#[test]
fn append_to_empty() {
    let mut seq: GrowableSequence<String> = GrowableSequence::with_len(0);
    assert_eq!(seq.len(), 0);
    for word in ["abacus", "charlie", "zeta"] {
        seq.append(word.to_string());
    }
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.to_vec(), vec!["abacus", "charlie", "zeta"]);
}

#[test]
fn append_after_defaults() {
    let mut seq: GrowableSequence<String> = GrowableSequence::with_len(3);
    assert_eq!(seq.to_string(), "[  ]");
    seq.extend(["uno", "dos", "tres"].map(String::from));
    assert_eq!(seq.len(), 6);
    assert_eq!(seq.to_vec(), vec!["", "", "", "uno", "dos", "tres"]);
    assert_eq!(seq.capacity(), 6);
}

#[test]
fn slice_of_literal() {
    let seq = GrowableSequence::from_values(vec![1, 2, 3, 4, 5]);
    assert_eq!(seq.to_string(), "[1 2 3 4 5]");
    let view = seq.slice(1, 3).unwrap();
    assert_eq!(view.to_vec(), vec![2, 3]);
}

#[test]
fn shared_view_mutation_until_reallocation() {
    let mut seq: GrowableSequence<i32> = (1..=5).collect();
    let mut view = seq.slice(1, 3).unwrap();

    view.set(1, 30).unwrap();
    assert_eq!(seq.get(2).unwrap(), 30);
    seq.set(1, 20).unwrap();
    assert_eq!(view.get(0).unwrap(), 20);

    // Headroom append through the view lands in the parent's slot 3.
    view.append(40);
    assert_eq!(seq.to_vec(), vec![1, 20, 30, 40, 5]);

    // Parent reallocates; the two no longer alias.
    seq.append(6);
    seq.set(1, 0).unwrap();
    assert_eq!(view.get(0).unwrap(), 20);
}

#[test]
fn triangular_table() {
    let table = JaggedTable::triangular(3, |i, j| (i + j) as i64);
    assert_eq!(
        table.to_nested_vec(),
        vec![vec![0], vec![1, 2], vec![2, 3, 4]]
    );
    assert_eq!(table.to_string(), "[[0] [1 2] [2 3 4]]");
}

#[test]
fn len2_cap3_headroom_then_double() {
    let mut seq: GrowableSequence<String> = GrowableSequence::with_len_and_capacity(2, 3).unwrap();
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.capacity(), 3);

    seq.set(0, "rick".to_string()).unwrap();
    seq.set(1, "morty".to_string()).unwrap();
    assert_eq!(
        seq.set(2, "summer".to_string()),
        Err(SequenceError::IndexOutOfRange { index: 2, len: 2 })
    );

    let first = seq.address_of(0).unwrap();
    seq.append("summer".to_string());
    assert_eq!(seq.capacity(), 3);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.address_of(0).unwrap(), first);

    seq.append("new_element".to_string());
    assert_eq!(seq.capacity(), 6);
    assert_eq!(seq.len(), 4);
    assert_ne!(seq.address_of(0).unwrap(), first);
    assert_eq!(seq.to_vec(), vec!["rick", "morty", "summer", "new_element"]);
}
