use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use super::{Cursor, CursorMut, Iter, IterMut, Link, Position, unsplice};
use crate::util::fmt::DebugIter;

/// A list with links in one direction, headed by a permanent sentinel. See also: [`Cursor`] and
/// [`CursorMut`] for traversal, insertion and removal.
///
/// The sentinel is the position before the first element. It never holds a value and exists even
/// when the list is empty, so inserting or erasing at the front is the same operation as doing so
/// anywhere else: [`CursorMut::insert_after`] and [`CursorMut::erase_after`] on the cursor
/// returned by [`ForwardList::before_begin_mut`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `insert_after` | `O(1)` |
/// | `erase_after` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `clone` | `O(n)` |
///
/// Finding the position to insert or erase at is `O(n)`, because a cursor can only move forward.
pub struct ForwardList<T> {
    // The sentinel's link: owns the first node, if there is one.
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<T>>,
}

impl<T> ForwardList<T> {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            head: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a ForwardList from an iterator of fallible values, in order. If any value is an
    /// [`Err`], every value already added is dropped and the error is returned.
    pub fn try_from_fallible<E, I>(iter: I) -> Result<ForwardList<T>, E>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let mut list = ForwardList::new();
        let mut cursor = list.before_begin_mut();
        for value in iter {
            cursor.insert_after(value?);
        }
        Ok(list)
    }

    /// Returns the length of the ForwardList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ForwardList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| node.value())
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| node.value_mut())
    }

    /// Adds the provided element to the front of the ForwardList.
    pub fn push_front(&mut self, value: T) {
        self.before_begin_mut().insert_after(value);
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = unsplice(&mut self.head)?;
        self.len -= 1;
        Some(value)
    }

    /// Drops every element in the list, leaving the sentinel pointing to nothing.
    pub fn clear(&mut self) {
        // Iterative, so that long lists can't overflow the stack while dropping.
        while self.pop_front().is_some() {}
    }

    /// Swaps the contents of this list with `other`, without moving any nodes.
    pub fn swap(&mut self, other: &mut ForwardList<T>) {
        mem::swap(self, other);
    }

    /// Returns an iterator over references to the elements of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator over mutable references to the elements of the list, from front to
    /// back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Returns a cursor at the sentinel before the first element. Valid for every list, including
    /// an empty one.
    pub const fn before_begin(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: Position::BeforeBegin,
        }
    }

    /// Returns a cursor at the first element, or at the end if the list is empty.
    pub const fn begin(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: Position::from_link(self.head),
        }
    }

    /// Returns a cursor past the last element.
    pub const fn end(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: Position::End,
        }
    }

    /// Returns a mutable cursor at the sentinel before the first element.
    pub const fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            list: self,
            pos: Position::BeforeBegin,
        }
    }

    /// Returns a mutable cursor at the first element, or at the end if the list is empty.
    pub const fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let pos = Position::from_link(self.head);
        CursorMut { list: self, pos }
    }

    /// Returns the link owned by `pos`: the head for the sentinel, or a node's next link. The end
    /// position owns no link.
    pub(crate) fn link_after(&mut self, pos: Position<T>) -> Option<&mut Link<T>> {
        match pos {
            Position::BeforeBegin => Some(&mut self.head),
            Position::Node(node) => Some(node.next_mut()),
            Position::End => None,
        }
    }

    /// Returns the node following `pos`, if there is one.
    pub(crate) fn successor(&self, pos: Position<T>) -> Link<T> {
        match pos {
            Position::BeforeBegin => self.head,
            Position::Node(node) => *node.next(),
            Position::End => None,
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        let mut cursor = list.before_begin_mut();
        for value in iter {
            cursor.insert_after(value);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        // A panicking clone unwinds through collect, which drops the partial copy.
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        // The copy is complete before self is touched, so a panic leaves self as it was.
        let copy = source.clone();
        *self = copy;
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "({first})")?;
            for value in iter {
                write!(f, " -> ({value})")?;
            }
        }
        Ok(())
    }
}

// SAFETY: ForwardList owns its nodes exclusively, so it is as thread safe as T.
unsafe impl<T: Send> Send for ForwardList<T> {}

// SAFETY: As above, shared access never mutates anything.
unsafe impl<T: Sync> Sync for ForwardList<T> {}
