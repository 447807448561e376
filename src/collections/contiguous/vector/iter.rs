use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Take the allocation and leave an empty Vector behind to be dropped as a no-op.
        let end = mem::replace(&mut self.len, 0);
        IntoIter {
            arr: mem::take(&mut self.arr),
            start: 0,
            end,
        }
    }
}

/// An owned iterator over the values of a [`Vector`]. See [`Vector::into_iter`].
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    // Values in [start, end) are initialized and haven't been yielded yet.
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the values that haven't been yielded yet as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is initialized and inside the allocation.
        unsafe {
            slice::from_raw_parts(
                self.arr.ptr.as_ptr().add(self.start).cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the value is initialized. Incrementing start afterwards moves
        // it out of the range that will be dropped.
        let value = unsafe { self.arr[self.start].assume_init_read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The old end - 1 was initialized and is now outside of the remaining range.
        Some(unsafe { self.arr[self.end].assume_init_read() })
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        // SAFETY: Only the values that haven't been yielded are dropped. The Array then releases
        // the allocation without touching its contents.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.as_ptr().add(self.start).cast::<T>(),
                remaining,
            ));
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
