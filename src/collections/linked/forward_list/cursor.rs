use std::convert::Infallible;
use std::fmt::{self, Debug, Formatter};
use std::ptr;

use super::{CursorAtEnd, ForwardList, NoSuccessor, Position, splice, unsplice};
use crate::util::result::ResultExtension;

/// A read-only position within a [`ForwardList`]: the sentinel before the first element, one of
/// the elements, or the end. Cursors only move forward. See [`ForwardList::before_begin`],
/// [`ForwardList::begin`] and [`ForwardList::end`].
///
/// Two cursors are equal if they are in the same list, at the same position.
pub struct Cursor<'a, T> {
    pub(crate) list: &'a ForwardList<T>,
    pub(crate) pos: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the element at the cursor, or [`None`] at the sentinel or the end.
    pub fn current(&self) -> Option<&'a T> {
        match self.pos {
            Position::Node(node) => Some(node.value()),
            _ => None,
        }
    }

    /// Returns the element after the cursor, if there is one.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.list.successor(self.pos).map(|node| node.value())
    }

    /// Moves the cursor to the next position. Moving from the last element reaches the end, and
    /// moving from the end stays there.
    pub fn move_next(&mut self) {
        self.pos = Position::from_link(self.list.successor(self.pos));
    }

    /// Returns true if the cursor is at the sentinel before the first element.
    pub const fn is_before_begin(&self) -> bool {
        matches!(self.pos, Position::BeforeBegin)
    }

    /// Returns true if the cursor is past the last element.
    pub const fn is_end(&self) -> bool {
        matches!(self.pos, Position::End)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        debug_position(f, "Cursor", self.pos)
    }
}

/// A position within a [`ForwardList`] that can insert and erase the element after it. See
/// [`ForwardList::before_begin_mut`] and [`ForwardList::begin_mut`].
///
/// Insertion and removal always happen after the cursor, because a singly linked node can only
/// change its own successor. Starting at the sentinel makes the first element reachable the same
/// way as every other.
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut ForwardList<T>,
    pub(crate) pos: Position<T>,
}

impl<T> CursorMut<'_, T> {
    /// Returns a reference to the element at the cursor, or [`None`] at the sentinel or the end.
    pub fn current(&self) -> Option<&T> {
        match self.pos {
            Position::Node(node) => Some(node.value()),
            _ => None,
        }
    }

    /// Returns a mutable reference to the element at the cursor, or [`None`] at the sentinel or
    /// the end.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.pos {
            Position::Node(node) => Some(node.value_mut()),
            _ => None,
        }
    }

    /// Returns the element after the cursor, if there is one.
    pub fn peek_next(&self) -> Option<&T> {
        self.list.successor(self.pos).map(|node| node.value())
    }

    /// Moves the cursor to the next position. Moving from the last element reaches the end, and
    /// moving from the end stays there.
    pub fn move_next(&mut self) {
        self.pos = Position::from_link(self.list.successor(self.pos));
    }

    /// Returns true if the cursor is at the sentinel before the first element.
    pub const fn is_before_begin(&self) -> bool {
        matches!(self.pos, Position::BeforeBegin)
    }

    /// Returns true if the cursor is past the last element.
    pub const fn is_end(&self) -> bool {
        matches!(self.pos, Position::End)
    }

    /// Returns a read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: &*self.list,
            pos: self.pos,
        }
    }

    /// Inserts `value` after the cursor and moves the cursor onto it.
    ///
    /// # Panics
    /// Panics if the cursor is at the end of the list.
    pub fn insert_after(&mut self, value: T) {
        self.try_insert_after(value).throw()
    }

    /// Inserts `value` after the cursor and moves the cursor onto it, returning an [`Err`] if the
    /// cursor is at the end of the list rather than panicking. The value is dropped in that case.
    pub fn try_insert_after(&mut self, value: T) -> Result<(), CursorAtEnd> {
        let link = self.list.link_after(self.pos).ok_or(CursorAtEnd)?;
        self.pos = Position::Node(splice(link, value));
        self.list.len += 1;
        Ok(())
    }

    /// Inserts the value produced by `f` after the cursor and moves the cursor onto it. The list
    /// isn't modified until `f` returns, so a panic in `f` leaves it as it was.
    ///
    /// # Panics
    /// Panics if the cursor is at the end of the list, without calling `f`.
    pub fn insert_after_with<F: FnOnce() -> T>(&mut self, f: F) {
        self.try_insert_after_with(|| Ok::<T, Infallible>(f())).throw()
    }

    /// Inserts the value produced by `f` after the cursor and moves the cursor onto it. If `f`
    /// returns an [`Err`], the list is left unmodified and the error is returned.
    ///
    /// # Panics
    /// Panics if the cursor is at the end of the list, without calling `f`.
    pub fn try_insert_after_with<E, F>(&mut self, f: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let link = self.list.link_after(self.pos).ok_or(CursorAtEnd).throw();
        let value = f()?;
        self.pos = Position::Node(splice(link, value));
        self.list.len += 1;
        Ok(())
    }

    /// Removes the element after the cursor and returns it. The cursor stays where it is, so its
    /// new successor is the element that followed the removed one.
    ///
    /// # Panics
    /// Panics if there is no element after the cursor.
    pub fn erase_after(&mut self) -> T {
        self.try_erase_after().throw()
    }

    /// Removes the element after the cursor and returns it, returning an [`Err`] if there is no
    /// element after the cursor rather than panicking.
    pub fn try_erase_after(&mut self) -> Result<T, NoSuccessor> {
        let link = self.list.link_after(self.pos).ok_or(NoSuccessor)?;
        let value = unsplice(link).ok_or(NoSuccessor)?;
        self.list.len -= 1;
        Ok(value)
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        debug_position(f, "CursorMut", self.pos)
    }
}

fn debug_position<T: Debug>(f: &mut Formatter<'_>, name: &str, pos: Position<T>) -> fmt::Result {
    match pos {
        Position::BeforeBegin => write!(f, "{name}(BeforeBegin)"),
        Position::Node(node) => f.debug_tuple(name).field(node.value()).finish(),
        Position::End => write!(f, "{name}(End)"),
    }
}
