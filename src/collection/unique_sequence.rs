//! Insertion-ordered collection of unique values.
//!
//! This module provides [`UniqueSequence`], a mutable collection that keeps
//! elements in the order they were added, rejects duplicates in O(1), and
//! supports relocating elements without disturbing the order of the rest.
//!
//! # Overview
//!
//! A `UniqueSequence` is made of two structures that are updated together by
//! every operation:
//!
//! - **Order**: an arena of slots threaded into a doubly-linked list by
//!   `previous`/`next` slot indices
//! - **Index**: a hash map from each value to the slot that holds it
//!
//! Slots vacated by `remove` are chained into a free list and handed out again
//! by the next insertion, so a slot index is only meaningful while its value is
//! present. Slot indices never leave this module.
//!
//! # Time Complexity
//!
//! | Operation                      | Complexity         |
//! |--------------------------------|--------------------|
//! | `add`                          | O(1) amortized     |
//! | `remove`                       | O(1)               |
//! | `contains`                     | O(1)               |
//! | `first` / `last`               | O(1)               |
//! | `element_at`                   | O(min(i, n - i))   |
//! | `move_first` / `move_last`     | O(1) amortized     |
//! | `move_after` / `move_before`   | O(1)               |
//! | `to_vec` / `clone` / `concat`  | O(n)               |
//!
//! # Tolerant and Strict Moves
//!
//! `move_first` and `move_last` always succeed: a present value is relocated,
//! an absent one is inserted. `move_after` and `move_before` require both the
//! moved value and the anchor to be present and fail with
//! [`SequenceError::ElementNotFound`] otherwise.
//!
//! # Examples
//!
//! ```rust
//! use unique_sequence::UniqueSequence;
//!
//! let mut sequence: UniqueSequence<char> = "abc".chars().collect();
//!
//! // Duplicates are ignored
//! assert!(!sequence.add('b'));
//! assert_eq!(sequence.len(), 3);
//!
//! assert!(sequence.remove(&'b'));
//! sequence.move_first('c');
//! assert_eq!(sequence.to_vec(), vec!['c', 'a']);
//!
//! // Already last: nothing changes
//! sequence.move_last('a');
//! assert_eq!(sequence.to_vec(), vec!['c', 'a']);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::DefaultHashBuilder;
use super::error::{Operand, SequenceError};

/// A value together with its neighbours in the Order list.
#[derive(Clone)]
struct Link<T> {
    value: T,
    previous: Option<usize>,
    next: Option<usize>,
}

/// One arena cell: either part of the Order list or part of the free list.
#[derive(Clone)]
enum Slot<T> {
    Occupied(Link<T>),
    Vacant { next_free: Option<usize> },
}

impl<T> Slot<T> {
    #[inline]
    fn link(&self) -> &Link<T> {
        match self {
            Self::Occupied(link) => link,
            Self::Vacant { .. } => unreachable!("linked slot is vacant"),
        }
    }

    #[inline]
    fn link_mut(&mut self) -> &mut Link<T> {
        match self {
            Self::Occupied(link) => link,
            Self::Vacant { .. } => unreachable!("linked slot is vacant"),
        }
    }
}

/// An insertion-ordered collection of unique values.
///
/// Elements are kept in the order they were first added (or last moved).
/// Adding a value that is already present does nothing; membership tests,
/// removal, and relocation are O(1).
///
/// # Type Parameters
///
/// * `T` - The element type. Lookups and insertions need `Clone`, `Eq`, and
///   `Hash`; no ordering relation is required.
/// * `S` - The hash builder for the membership index.
///
/// # Examples
///
/// ```rust
/// use unique_sequence::UniqueSequence;
///
/// let mut sequence = UniqueSequence::new();
/// sequence.add("red");
/// sequence.add("green");
/// sequence.add("blue");
///
/// sequence.move_before(&"blue", &"red").unwrap();
/// assert_eq!(sequence.to_vec(), vec!["blue", "red", "green"]);
/// ```
#[derive(Clone)]
pub struct UniqueSequence<T, S = DefaultHashBuilder> {
    slots: Vec<Slot<T>>,
    index: HashMap<T, usize, S>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
}

impl<T> UniqueSequence<T, DefaultHashBuilder> {
    /// Creates a new empty sequence using [`DefaultHashBuilder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let sequence: UniqueSequence<i32> = UniqueSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty sequence with room for `capacity` elements before
    /// either the arena or the index reallocates.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> UniqueSequence<T, S> {
    /// Creates an empty sequence whose index uses `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use unique_sequence::UniqueSequence;
    ///
    /// let mut sequence = UniqueSequence::with_hasher(RandomState::new());
    /// sequence.add(1);
    /// assert!(sequence.contains(&1));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::with_hasher(hash_builder),
            head: None,
            tail: None,
            free_head: None,
        }
    }

    /// Creates an empty sequence with the given capacity and hash builder.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            head: None,
            tail: None,
            free_head: None,
        }
    }

    /// Returns a reference to the index's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.index.hasher()
    }

    /// Returns the number of elements in the sequence.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the sequence contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let mut sequence = UniqueSequence::new();
    /// assert!(sequence.is_empty());
    ///
    /// sequence.add(42);
    /// assert!(!sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes every element.
    ///
    /// The arena and the free list are dropped along with the elements; the
    /// allocated capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
    }

    /// Returns the element at the front of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyContainer`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::{SequenceError, UniqueSequence};
    ///
    /// let mut sequence = UniqueSequence::new();
    /// assert_eq!(sequence.first(), Err(SequenceError::EmptyContainer));
    ///
    /// sequence.add(7);
    /// sequence.add(8);
    /// assert_eq!(sequence.first(), Ok(&7));
    /// ```
    #[inline]
    pub fn first(&self) -> Result<&T, SequenceError> {
        self.head
            .map(|slot| &self.link(slot).value)
            .ok_or(SequenceError::EmptyContainer)
    }

    /// Returns the element at the back of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyContainer`] if the sequence is empty.
    #[inline]
    pub fn last(&self) -> Result<&T, SequenceError> {
        self.tail
            .map(|slot| &self.link(slot).value)
            .ok_or(SequenceError::EmptyContainer)
    }

    /// Returns the element at position `index`, counting from the front.
    ///
    /// The list is walked from whichever end is closer to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(min(index, len - index))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::{SequenceError, UniqueSequence};
    ///
    /// let sequence: UniqueSequence<i32> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(sequence.element_at(1), Ok(&20));
    /// assert_eq!(
    ///     sequence.element_at(3),
    ///     Err(SequenceError::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        let len = self.len();
        let out_of_range = SequenceError::IndexOutOfRange { index, len };
        if index >= len {
            return Err(out_of_range);
        }

        let element = if index <= len / 2 {
            self.iter().nth(index)
        } else {
            self.iter().nth_back(len - 1 - index)
        };
        element.ok_or(out_of_range)
    }

    /// Returns an iterator over the elements from front to back.
    ///
    /// The iterator is double-ended, so `.rev()` walks from back to front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let sequence: UniqueSequence<i32> = [3, 1, 2].into_iter().collect();
    /// let forward: Vec<&i32> = sequence.iter().collect();
    /// let backward: Vec<&i32> = sequence.iter().rev().collect();
    /// assert_eq!(forward, vec![&3, &1, &2]);
    /// assert_eq!(backward, vec![&2, &1, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> UniqueSequenceIterator<'_, T> {
        UniqueSequenceIterator {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns the elements in order as a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns this sequence's elements followed by `other`'s elements.
    ///
    /// The two inputs are not deduplicated against each other: a value present
    /// in both appears twice in the result. Neither sequence is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let left: UniqueSequence<i32> = [1, 2].into_iter().collect();
    /// let right: UniqueSequence<i32> = [2, 3].into_iter().collect();
    /// assert_eq!(left.concat(&right), vec![1, 2, 2, 3]);
    /// ```
    #[must_use]
    pub fn concat<S2>(&self, other: &UniqueSequence<T, S2>) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = Vec::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }

    // =========================================================================
    // Arena and link maintenance
    // =========================================================================

    #[inline]
    fn link(&self, slot: usize) -> &Link<T> {
        self.slots[slot].link()
    }

    #[inline]
    fn link_mut(&mut self, slot: usize) -> &mut Link<T> {
        self.slots[slot].link_mut()
    }

    /// Stores `value` in a detached slot, reusing the free list first.
    fn allocate(&mut self, value: T) -> usize {
        let occupied = Slot::Occupied(Link {
            value,
            previous: None,
            next: None,
        });

        if let Some(slot) = self.free_head {
            self.free_head = match &self.slots[slot] {
                Slot::Vacant { next_free } => *next_free,
                Slot::Occupied(_) => unreachable!("free slot {slot} is occupied"),
            };
            self.slots[slot] = occupied;
            trace_event!(trace, slot, "reused vacant slot");
            slot
        } else {
            let slot = self.slots.len();
            self.slots.push(occupied);
            trace_event!(trace, slot, "grew slot arena");
            slot
        }
    }

    /// Drops the value in a detached slot and pushes the slot on the free list.
    fn release(&mut self, slot: usize) {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        let released = std::mem::replace(&mut self.slots[slot], vacant);
        debug_assert!(matches!(released, Slot::Occupied(_)), "slot {slot} released twice");
        self.free_head = Some(slot);
    }

    /// Unlinks `slot` from the Order list, joining its neighbours.
    fn detach(&mut self, slot: usize) {
        let (previous, next) = {
            let link = self.link_mut(slot);
            (link.previous.take(), link.next.take())
        };

        match previous {
            Some(previous) => self.link_mut(previous).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.link_mut(next).previous = previous,
            None => self.tail = previous,
        }
    }

    fn attach_front(&mut self, slot: usize) {
        let old_head = self.head;
        {
            let link = self.link_mut(slot);
            link.previous = None;
            link.next = old_head;
        }
        match old_head {
            Some(old_head) => self.link_mut(old_head).previous = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    fn attach_back(&mut self, slot: usize) {
        let old_tail = self.tail;
        {
            let link = self.link_mut(slot);
            link.previous = old_tail;
            link.next = None;
        }
        match old_tail {
            Some(old_tail) => self.link_mut(old_tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    fn attach_after(&mut self, slot: usize, anchor: usize) {
        let next = self.link(anchor).next;
        {
            let link = self.link_mut(slot);
            link.previous = Some(anchor);
            link.next = next;
        }
        self.link_mut(anchor).next = Some(slot);
        match next {
            Some(next) => self.link_mut(next).previous = Some(slot),
            None => self.tail = Some(slot),
        }
    }

    fn attach_before(&mut self, slot: usize, anchor: usize) {
        let previous = self.link(anchor).previous;
        {
            let link = self.link_mut(slot);
            link.previous = previous;
            link.next = Some(anchor);
        }
        self.link_mut(anchor).previous = Some(slot);
        match previous {
            Some(previous) => self.link_mut(previous).next = Some(slot),
            None => self.head = Some(slot),
        }
    }
}

impl<T, S> UniqueSequence<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the sequence contains `value`.
    ///
    /// Accepts any borrowed form of the element type, so a
    /// `UniqueSequence<String>` can be queried with `&str`.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let mut sequence = UniqueSequence::new();
    /// sequence.add("hello".to_string());
    /// assert!(sequence.contains("hello"));
    /// assert!(!sequence.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Appends `value` at the back unless it is already present.
    ///
    /// Returns `true` if the value was inserted. A value that is already
    /// present keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let mut sequence = UniqueSequence::new();
    /// assert!(sequence.add(1));
    /// assert!(sequence.add(2));
    /// assert!(!sequence.add(1));
    /// assert_eq!(sequence.to_vec(), vec![1, 2]);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }

        let slot = self.allocate(value.clone());
        self.attach_back(slot);
        self.index.insert(value, slot);
        true
    }

    /// Removes `value` from the sequence.
    ///
    /// Returns `true` if the value was present. Removing an absent value
    /// leaves the sequence untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let mut sequence: UniqueSequence<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(sequence.remove(&2));
    /// assert!(!sequence.remove(&2));
    /// assert_eq!(sequence.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.remove(value) {
            Some(slot) => {
                self.detach(slot);
                self.release(slot);
                true
            }
            None => false,
        }
    }

    /// Makes `value` the first element.
    ///
    /// A present value is relocated to the front; an absent value is inserted
    /// at the front. This never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let mut sequence: UniqueSequence<i32> = [1, 2, 3].into_iter().collect();
    /// sequence.move_first(3);
    /// assert_eq!(sequence.to_vec(), vec![3, 1, 2]);
    ///
    /// sequence.move_first(0);
    /// assert_eq!(sequence.to_vec(), vec![0, 3, 1, 2]);
    /// ```
    pub fn move_first(&mut self, value: T) {
        let existing = self.index.get(&value).copied();
        match existing {
            Some(slot) if self.head == Some(slot) => {}
            Some(slot) => {
                self.detach(slot);
                self.attach_front(slot);
            }
            None => {
                let slot = self.allocate(value.clone());
                self.attach_front(slot);
                self.index.insert(value, slot);
            }
        }
    }

    /// Makes `value` the last element.
    ///
    /// A present value is relocated to the back; an absent value is appended.
    /// This never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let mut sequence: UniqueSequence<i32> = [1, 2, 3].into_iter().collect();
    /// sequence.move_last(1);
    /// assert_eq!(sequence.to_vec(), vec![2, 3, 1]);
    /// ```
    pub fn move_last(&mut self, value: T) {
        let existing = self.index.get(&value).copied();
        match existing {
            Some(slot) if self.tail == Some(slot) => {}
            Some(slot) => {
                self.detach(slot);
                self.attach_back(slot);
            }
            None => {
                let slot = self.allocate(value.clone());
                self.attach_back(slot);
                self.index.insert(value, slot);
            }
        }
    }

    /// Relocates `value` to immediately follow `anchor`.
    ///
    /// The relative order of every other element is preserved. Moving a value
    /// after itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ElementNotFound`] if `value` or `anchor` is
    /// absent. The sequence is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::{Operand, SequenceError, UniqueSequence};
    ///
    /// let mut sequence: UniqueSequence<char> = "abcd".chars().collect();
    /// sequence.move_after(&'a', &'c').unwrap();
    /// assert_eq!(sequence.to_vec(), vec!['b', 'c', 'a', 'd']);
    ///
    /// assert_eq!(
    ///     sequence.move_after(&'a', &'z'),
    ///     Err(SequenceError::ElementNotFound { operand: Operand::Anchor })
    /// );
    /// assert_eq!(sequence.to_vec(), vec!['b', 'c', 'a', 'd']);
    /// ```
    pub fn move_after<Q>(&mut self, value: &Q, anchor: &Q) -> Result<(), SequenceError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (slot, anchor_slot) = self.resolve_operands(value, anchor, "move_after")?;
        if slot != anchor_slot {
            self.detach(slot);
            self.attach_after(slot, anchor_slot);
        }
        Ok(())
    }

    /// Relocates `value` to immediately precede `anchor`.
    ///
    /// The relative order of every other element is preserved. Moving a value
    /// before itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ElementNotFound`] if `value` or `anchor` is
    /// absent. The sequence is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sequence::UniqueSequence;
    ///
    /// let mut sequence: UniqueSequence<char> = "abcd".chars().collect();
    /// sequence.move_before(&'d', &'b').unwrap();
    /// assert_eq!(sequence.to_vec(), vec!['a', 'd', 'b', 'c']);
    /// ```
    pub fn move_before<Q>(&mut self, value: &Q, anchor: &Q) -> Result<(), SequenceError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (slot, anchor_slot) = self.resolve_operands(value, anchor, "move_before")?;
        if slot != anchor_slot {
            self.detach(slot);
            self.attach_before(slot, anchor_slot);
        }
        Ok(())
    }

    /// Looks up both operands of a strict move before anything is touched.
    fn resolve_operands<Q>(
        &self,
        value: &Q,
        anchor: &Q,
        operation: &'static str,
    ) -> Result<(usize, usize), SequenceError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self
            .index
            .get(value)
            .copied()
            .ok_or_else(|| missing_operand(Operand::Element, operation))?;
        let anchor_slot = self
            .index
            .get(anchor)
            .copied()
            .ok_or_else(|| missing_operand(Operand::Anchor, operation))?;
        Ok((slot, anchor_slot))
    }

    /// Walks the whole structure and panics on any inconsistency between the
    /// Order list, the Index, and the free list.
    #[cfg(test)]
    fn assert_consistent(&self) {
        let mut visited = 0;
        let mut previous = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let link = self.link(slot);
            assert_eq!(link.previous, previous, "broken previous link at {slot}");
            assert_eq!(self.index.get(&link.value), Some(&slot));
            visited += 1;
            assert!(visited <= self.slots.len(), "cycle in order list");
            previous = cursor;
            cursor = link.next;
        }
        assert_eq!(self.tail, previous);
        assert_eq!(visited, self.index.len());

        let mut vacant = 0;
        let mut cursor = self.free_head;
        while let Some(slot) = cursor {
            match &self.slots[slot] {
                Slot::Vacant { next_free } => cursor = *next_free,
                Slot::Occupied(_) => panic!("occupied slot {slot} on free list"),
            }
            vacant += 1;
            assert!(vacant <= self.slots.len(), "cycle in free list");
        }
        assert_eq!(visited + vacant, self.slots.len());
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn missing_operand(operand: Operand, operation: &'static str) -> SequenceError {
    trace_event!(debug, %operand, operation, "rejected move: operand is absent");
    SequenceError::ElementNotFound { operand }
}

impl<T, S: Default> Default for UniqueSequence<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: fmt::Debug, S> fmt::Debug for UniqueSequence<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Two sequences are equal when they hold equal elements in the same order.
impl<T: PartialEq, S> PartialEq for UniqueSequence<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S> Eq for UniqueSequence<T, S> {}

impl<T, S> Extend<T> for UniqueSequence<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, S> FromIterator<T> for UniqueSequence<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::default();
        sequence.extend(iter);
        sequence
    }
}

impl<'a, T, S> IntoIterator for &'a UniqueSequence<T, S> {
    type Item = &'a T;
    type IntoIter = UniqueSequenceIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for UniqueSequence<T, S> {
    type Item = T;
    type IntoIter = UniqueSequenceIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let remaining = self.len();
        UniqueSequenceIntoIterator {
            slots: self.slots,
            front: self.head,
            back: self.tail,
            remaining,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`UniqueSequence`].
pub struct UniqueSequenceIterator<'a, T> {
    slots: &'a [Slot<T>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<T> Clone for UniqueSequenceIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for UniqueSequenceIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slots = self.slots;
        let link = slots[self.front?].link();
        self.front = link.next;
        self.remaining -= 1;
        Some(&link.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for UniqueSequenceIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slots = self.slots;
        let link = slots[self.back?].link();
        self.back = link.previous;
        self.remaining -= 1;
        Some(&link.value)
    }
}

impl<T> ExactSizeIterator for UniqueSequenceIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for UniqueSequenceIterator<'_, T> {}

/// Owning iterator over the elements of a [`UniqueSequence`].
pub struct UniqueSequenceIntoIterator<T> {
    slots: Vec<Slot<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<T> UniqueSequenceIntoIterator<T> {
    fn take(&mut self, slot: usize) -> Link<T> {
        let vacant = Slot::Vacant { next_free: None };
        match std::mem::replace(&mut self.slots[slot], vacant) {
            Slot::Occupied(link) => link,
            Slot::Vacant { .. } => unreachable!("slot {slot} yielded twice"),
        }
    }
}

impl<T> Iterator for UniqueSequenceIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.take(self.front?);
        self.front = link.next;
        self.remaining -= 1;
        Some(link.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for UniqueSequenceIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.take(self.back?);
        self.back = link.previous;
        self.remaining -= 1;
        Some(link.value)
    }
}

impl<T> ExactSizeIterator for UniqueSequenceIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for UniqueSequenceIntoIterator<T> {}
