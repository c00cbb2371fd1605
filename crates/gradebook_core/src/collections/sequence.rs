//! Owned, append-only singly linked sequence.
//!
//! # Responsibility
//! - Store a deep copy of every inserted element, in insertion order.
//! - Expose read-only cursors whose validity is tied to a borrow of the
//!   sequence.
//!
//! # Invariants
//! - After `append` returns, the caller's element and the stored copy have
//!   independent lifetimes.
//! - A failed copy leaves the sequence exactly as it was.
//! - `len()` always equals the number of elements reachable by a cursor.
//! - Dropping the sequence drops every stored element exactly once.

use serde::ser::{Serialize, Serializer};
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Storage for an element copy could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocError(TryReserveError);

impl Display for AllocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to allocate element storage: {}", self.0)
    }
}

impl Error for AllocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<TryReserveError> for AllocError {
    fn from(value: TryReserveError) -> Self {
        Self(value)
    }
}

/// Value-semantics capability required from sequence elements.
///
/// Release is plain `Drop`; only the copy step needs to be spelled out,
/// because it has to report allocation failure instead of aborting.
pub trait DeepCopy: Sized {
    /// Produces a copy that shares no storage with `self`.
    fn deep_copy(&self) -> Result<Self, AllocError>;
}

impl DeepCopy for String {
    fn deep_copy(&self) -> Result<Self, AllocError> {
        copy_text(self)
    }
}

/// Copies text into freshly reserved storage.
pub fn copy_text(value: &str) -> Result<String, AllocError> {
    let mut copy = String::new();
    copy.try_reserve_exact(value.len())?;
    copy.push_str(value);
    Ok(copy)
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Ordered collection owning one deep copy per appended element.
pub struct Sequence<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a cursor at the first element, or `None` when empty.
    pub fn begin(&self) -> Option<Cursor<'_, T>> {
        self.head.as_deref().map(|node| Cursor { node })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Mutable traversal for the owning aggregate.
    ///
    /// Element contents may change; the chain itself cannot, so no cursor
    /// can observe a relinked node.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Linear scan from the head; stops at the first match.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.begin();
        while let Some(current) = cursor {
            if predicate(current.get()) {
                return Some(current.get());
            }
            cursor = current.advance();
        }
        None
    }

    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter_mut().find(|value| predicate(&**value))
    }

    fn link_tail(&mut self, value: T) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }
}

impl<T: DeepCopy> Sequence<T> {
    /// Appends a deep copy of `element` as the new tail.
    ///
    /// # Errors
    /// - Returns `AllocError` when the copy cannot be made; nothing is linked.
    pub fn append(&mut self, element: &T) -> Result<(), AllocError> {
        let copy = element.deep_copy()?;
        self.link_tail(copy);
        Ok(())
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse through Box::drop.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: DeepCopy> DeepCopy for Sequence<T> {
    fn deep_copy(&self) -> Result<Self, AllocError> {
        let mut copies = Vec::new();
        copies.try_reserve_exact(self.len)?;
        for element in self {
            copies.push(element.deep_copy()?);
        }

        let mut head = None;
        for value in copies.into_iter().rev() {
            head = Some(Box::new(Node { value, next: head }));
        }
        Ok(Self {
            head,
            len: self.len,
        })
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-only position inside a sequence.
///
/// The exhausted state is represented by `None` from `begin`/`advance`, so a
/// live `Cursor` always points at an element.
pub struct Cursor<'a, T> {
    node: &'a Node<T>,
}

impl<'a, T> Cursor<'a, T> {
    /// Borrows the sequence-owned element under the cursor.
    pub fn get(&self) -> &'a T {
        &self.node.value
    }

    /// Moves to the next element, or `None` past the tail.
    pub fn advance(self) -> Option<Cursor<'a, T>> {
        self.node.next.as_deref().map(|node| Cursor { node })
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::{AllocError, DeepCopy, Sequence};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Probe {
        label: String,
        copies: Rc<Cell<usize>>,
        drops: Rc<Cell<usize>>,
    }

    impl Probe {
        fn new(label: &str, copies: &Rc<Cell<usize>>, drops: &Rc<Cell<usize>>) -> Self {
            Self {
                label: label.to_string(),
                copies: Rc::clone(copies),
                drops: Rc::clone(drops),
            }
        }
    }

    impl DeepCopy for Probe {
        fn deep_copy(&self) -> Result<Self, AllocError> {
            self.copies.set(self.copies.get() + 1);
            Ok(Self {
                label: self.label.deep_copy()?,
                copies: Rc::clone(&self.copies),
                drops: Rc::clone(&self.drops),
            })
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    struct Uncopyable;

    impl DeepCopy for Uncopyable {
        fn deep_copy(&self) -> Result<Self, AllocError> {
            let mut probe = Vec::<u8>::new();
            match probe.try_reserve(usize::MAX) {
                Err(err) => Err(err.into()),
                Ok(()) => Ok(Uncopyable),
            }
        }
    }

    #[test]
    fn append_stores_one_copy_and_drop_releases_each_once() {
        let copies = Rc::new(Cell::new(0));
        let drops = Rc::new(Cell::new(0));
        let mut sequence = Sequence::new();
        for label in ["a", "b", "c"] {
            let original = Probe::new(label, &copies, &drops);
            sequence.append(&original).expect("probe copy");
        }
        assert_eq!(copies.get(), 3);
        // Only the caller-side originals are gone so far.
        assert_eq!(drops.get(), 3);

        drop(sequence);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn failed_copy_leaves_sequence_unchanged() {
        let mut sequence = Sequence::new();
        let err = sequence
            .append(&Uncopyable)
            .expect_err("capacity overflow must surface");
        assert!(err.to_string().contains("failed to allocate"));
        assert!(sequence.is_empty());
        assert!(sequence.begin().is_none());
    }

    #[test]
    fn cursor_walks_in_insertion_order_and_matches_len() {
        let mut sequence = Sequence::new();
        for value in ["first", "second", "third"] {
            sequence.append(&value.to_string()).expect("append");
        }

        let mut seen = Vec::new();
        let mut cursor = sequence.begin();
        while let Some(current) = cursor {
            seen.push(current.get().as_str());
            cursor = current.advance();
        }
        assert_eq!(seen, vec!["first", "second", "third"]);
        assert_eq!(seen.len(), sequence.len());
        assert_eq!(sequence.iter().len(), 3);
    }

    #[test]
    fn find_mut_reaches_stored_copy() {
        let mut sequence = Sequence::new();
        sequence.append(&"x".to_string()).expect("append");
        sequence.append(&"y".to_string()).expect("append");

        let found = sequence.find_mut(|value| value == "y").expect("y present");
        found.push('!');
        assert_eq!(
            sequence.find(|value| value.starts_with('y')).map(String::as_str),
            Some("y!")
        );
        assert!(sequence.find(|value| value == "z").is_none());
    }

    #[test]
    fn deep_copy_preserves_order_with_independent_storage() {
        let mut original = Sequence::new();
        for value in ["1", "2", "3"] {
            original.append(&value.to_string()).expect("append");
        }

        let mut copy = original.deep_copy().expect("copy");
        assert_eq!(copy, original);

        copy.append(&"4".to_string()).expect("append");
        assert_eq!(original.len(), 3);
        assert_eq!(copy.len(), 4);
    }

    #[test]
    fn dropping_long_sequence_does_not_recurse() {
        let mut sequence = Sequence::new();
        for value in 0..10_000u32 {
            sequence.link_tail(value);
        }
        assert_eq!(sequence.len(), 10_000);
        drop(sequence);
    }
}
