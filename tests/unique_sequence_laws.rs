//! Property-based tests for UniqueSequence laws.
//!
//! These tests drive the sequence with random operation scripts and compare
//! it against a plain `Vec` model after every step.

use proptest::prelude::*;
use unique_sequence::{SequenceError, UniqueSequence};

#[derive(Debug, Clone)]
enum Operation {
    Add(u8),
    Remove(u8),
    MoveFirst(u8),
    MoveLast(u8),
    MoveAfter(u8, u8),
    MoveBefore(u8, u8),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    // A small value domain keeps collisions and present operands frequent
    let value = 0u8..16;
    prop_oneof![
        4 => value.clone().prop_map(Operation::Add),
        2 => value.clone().prop_map(Operation::Remove),
        1 => value.clone().prop_map(Operation::MoveFirst),
        1 => value.clone().prop_map(Operation::MoveLast),
        2 => (value.clone(), value.clone()).prop_map(|(v, a)| Operation::MoveAfter(v, a)),
        2 => (value.clone(), value).prop_map(|(v, a)| Operation::MoveBefore(v, a)),
        1 => Just(Operation::Clear),
    ]
}

fn position(model: &[u8], value: u8) -> Option<usize> {
    model.iter().position(|v| *v == value)
}

/// Applies `operation` to a `Vec` that stands in for the sequence.
fn apply_to_model(model: &mut Vec<u8>, operation: &Operation) {
    match *operation {
        Operation::Add(value) => {
            if position(model, value).is_none() {
                model.push(value);
            }
        }
        Operation::Remove(value) => {
            model.retain(|v| *v != value);
        }
        Operation::MoveFirst(value) => {
            model.retain(|v| *v != value);
            model.insert(0, value);
        }
        Operation::MoveLast(value) => {
            model.retain(|v| *v != value);
            model.push(value);
        }
        Operation::MoveAfter(value, anchor) => {
            if value != anchor
                && position(model, value).is_some()
                && position(model, anchor).is_some()
            {
                model.retain(|v| *v != value);
                let anchor_position = position(model, anchor).unwrap_or(model.len());
                model.insert((anchor_position + 1).min(model.len()), value);
            }
        }
        Operation::MoveBefore(value, anchor) => {
            if value != anchor
                && position(model, value).is_some()
                && position(model, anchor).is_some()
            {
                model.retain(|v| *v != value);
                let anchor_position = position(model, anchor).unwrap_or(model.len());
                model.insert(anchor_position, value);
            }
        }
        Operation::Clear => model.clear(),
    }
}

fn apply_to_sequence(sequence: &mut UniqueSequence<u8>, operation: &Operation) {
    match *operation {
        Operation::Add(value) => {
            sequence.add(value);
        }
        Operation::Remove(value) => {
            sequence.remove(&value);
        }
        Operation::MoveFirst(value) => sequence.move_first(value),
        Operation::MoveLast(value) => sequence.move_last(value),
        Operation::MoveAfter(value, anchor) => {
            let _ = sequence.move_after(&value, &anchor);
        }
        Operation::MoveBefore(value, anchor) => {
            let _ = sequence.move_before(&value, &anchor);
        }
        Operation::Clear => sequence.clear(),
    }
}

// =============================================================================
// Model Law
// Description: Every operation script yields the same order as the Vec model
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_vec_model(operations in prop::collection::vec(operation(), 0..200)) {
        let mut sequence = UniqueSequence::new();
        let mut model = Vec::new();

        for operation in &operations {
            apply_to_sequence(&mut sequence, operation);
            apply_to_model(&mut model, operation);

            prop_assert_eq!(sequence.to_vec(), model.clone());
            prop_assert_eq!(sequence.len(), model.len());
        }
    }
}

// =============================================================================
// Uniqueness Law
// Description: contains(x) holds iff x appears exactly once in the snapshot
// =============================================================================

proptest! {
    #[test]
    fn prop_uniqueness_invariant(operations in prop::collection::vec(operation(), 0..100)) {
        let mut sequence = UniqueSequence::new();
        for operation in &operations {
            apply_to_sequence(&mut sequence, operation);
        }

        let snapshot = sequence.to_vec();
        for value in 0u8..16 {
            let occurrences = snapshot.iter().filter(|v| **v == value).count();
            prop_assert!(occurrences <= 1);
            prop_assert_eq!(sequence.contains(&value), occurrences == 1);
        }
    }
}

// =============================================================================
// Add Idempotence Law
// Description: add(x); add(x) is indistinguishable from add(x)
// =============================================================================

proptest! {
    #[test]
    fn prop_add_idempotence(elements in prop::collection::vec(any::<i32>(), 0..50), value: i32) {
        let mut once: UniqueSequence<i32> = elements.iter().copied().collect();
        let mut twice = once.clone();

        once.add(value);
        twice.add(value);
        twice.add(value);

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.to_vec(), twice.to_vec());
    }
}

// =============================================================================
// Remove Absent Law
// Description: Removing an absent value returns false and changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_absent_is_noop(elements in prop::collection::vec(any::<i32>(), 0..50), value: i32) {
        let mut sequence: UniqueSequence<i32> = elements.iter().copied().collect();
        prop_assume!(!sequence.contains(&value));
        let before = sequence.to_vec();

        prop_assert!(!sequence.remove(&value));
        prop_assert_eq!(sequence.to_vec(), before);
    }
}

// =============================================================================
// Copy Independence Law
// Description: Mutating a clone never affects the source, and vice versa
// =============================================================================

proptest! {
    #[test]
    fn prop_copy_independence(
        elements in prop::collection::vec(0u8..16, 0..30),
        source_operations in prop::collection::vec(operation(), 0..30),
        copy_operations in prop::collection::vec(operation(), 0..30),
    ) {
        let mut source: UniqueSequence<u8> = elements.iter().copied().collect();
        let mut copy = source.clone();
        let mut source_model = source.to_vec();
        let mut copy_model = copy.to_vec();

        for operation in &copy_operations {
            apply_to_sequence(&mut copy, operation);
            apply_to_model(&mut copy_model, operation);
        }
        prop_assert_eq!(source.to_vec(), source_model.clone());

        for operation in &source_operations {
            apply_to_sequence(&mut source, operation);
            apply_to_model(&mut source_model, operation);
        }
        prop_assert_eq!(copy.to_vec(), copy_model);
        prop_assert_eq!(source.to_vec(), source_model);
    }
}

// =============================================================================
// Concat Law
// Description: concat is plain concatenation of both snapshots
// =============================================================================

proptest! {
    #[test]
    fn prop_concat_is_snapshot_concatenation(
        left in prop::collection::vec(0u8..16, 0..30),
        right in prop::collection::vec(0u8..16, 0..30),
    ) {
        let left: UniqueSequence<u8> = left.into_iter().collect();
        let right: UniqueSequence<u8> = right.into_iter().collect();

        let mut expected = left.to_vec();
        expected.extend(right.to_vec());

        prop_assert_eq!(left.concat(&right), expected);
    }
}

// =============================================================================
// Tolerant Move Law
// Description: move_first / move_last always place the value at the end
// =============================================================================

proptest! {
    #[test]
    fn prop_move_first_totality(elements in prop::collection::vec(0u8..16, 0..30), value in 0u8..16) {
        let mut sequence: UniqueSequence<u8> = elements.into_iter().collect();
        sequence.move_first(value);
        prop_assert_eq!(sequence.element_at(0), Ok(&value));
    }

    #[test]
    fn prop_move_last_totality(elements in prop::collection::vec(0u8..16, 0..30), value in 0u8..16) {
        let mut sequence: UniqueSequence<u8> = elements.into_iter().collect();
        sequence.move_last(value);
        prop_assert_eq!(sequence.element_at(sequence.len() - 1), Ok(&value));
    }
}

// =============================================================================
// Strict Move Law
// Description: A strict move with an absent operand fails and changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_strict_move_with_absent_operand_is_atomic(
        elements in prop::collection::vec(0u8..16, 1..30),
        value in 0u8..32,
        anchor in 0u8..32,
        after: bool,
    ) {
        let mut sequence: UniqueSequence<u8> = elements.into_iter().collect();
        prop_assume!(!sequence.contains(&value) || !sequence.contains(&anchor));
        let before = sequence.to_vec();

        let result = if after {
            sequence.move_after(&value, &anchor)
        } else {
            sequence.move_before(&value, &anchor)
        };

        prop_assert!(
            matches!(result, Err(SequenceError::ElementNotFound { .. })),
            "unexpected result: {:?}",
            result
        );
        prop_assert_eq!(sequence.to_vec(), before);
    }
}

// =============================================================================
// Positional Law
// Description: element_at agrees with iteration order
// =============================================================================

proptest! {
    #[test]
    fn prop_element_at_agrees_with_iter(operations in prop::collection::vec(operation(), 0..100)) {
        let mut sequence = UniqueSequence::new();
        for operation in &operations {
            apply_to_sequence(&mut sequence, operation);
        }

        for (index, value) in sequence.iter().enumerate() {
            prop_assert_eq!(sequence.element_at(index), Ok(value));
        }
        let reversed: Vec<u8> = sequence.iter().rev().copied().collect();
        let mut forward = sequence.to_vec();
        forward.reverse();
        prop_assert_eq!(reversed, forward);
    }
}
