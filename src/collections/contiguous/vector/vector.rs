use std::borrow::{Borrow, BorrowMut};
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous sequence, based on [`Array<T>`].
///
/// Growth is by doubling: when a Vector with capacity `c` runs out of space, it is reallocated
/// with capacity `max(1, c * 2)` (or `max(len + 1, c * 2)` for a positional insert). The capacity
/// only ever changes when it has to, or when it is explicitly [`reserve`](Vector::reserve)d, so it
/// never shrinks: [`clear`](Vector::clear) and a shrinking [`resize`](Vector::resize) keep the
/// allocation.
///
/// Positions into a Vector are plain indices. An index is only meaningful until the next
/// operation that shifts elements; references can't outlive such an operation at all.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)`, `O(n)` |
/// | `erase` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized. If the Vector doesn't have enough capacity for the new element, `push_back` will
/// take `O(n)` to move every element to the new allocation.
///
/// \** If the Vector already has at least the requested capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new, empty Vector with capacity exactly equal to `cap`, allowing that many values
    /// to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!((vec.len(), vec.cap()), (0, 5));
    /// vec.extend([1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is always exactly
    /// the value that the growth rules (or an explicit reservation) produced.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Appends `value` to the end of the Vector, doubling the capacity first if it is full.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or its memory layout would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push_back(1);
    /// assert_eq!(vec.cap(), 1);
    /// vec.push_back(2);
    /// vec.push_back(3);
    /// assert_eq!(vec.cap(), 4);
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.realloc(cmp::max(1, self.doubled_cap()));
        }

        // SAFETY: There is now at least one free slot past len.
        unsafe { self.write_unchecked(self.len, value) };
        self.len += 1;
    }

    /// Removes the last element and returns it, or [`None`] if the Vector is empty. The capacity
    /// is unchanged.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The value at the old last index is initialized, and decrementing len first means
        // it is no longer considered part of the Vector, so it is read out exactly once.
        Some(unsafe { self.read_unchecked(self.len) })
    }

    /// Inserts `value` at `index`, shifting every element after it one position to the right, and
    /// returns the index of the inserted value. An `index` equal to the length appends, exactly
    /// like [`push_back`](Vector::push_back).
    ///
    /// # Panics
    /// Panics if `index > len`, or if growing the Vector overflows.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// assert_eq!(vec.insert(1, 9), 1);
    /// assert_eq!(&*vec, &[1, 9, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking if `index` is out of
    /// bounds. The value is dropped in that case.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if index == self.len {
            self.push_back(value);
            return Ok(index);
        }

        if self.len == self.cap() {
            self.realloc(cmp::max(self.len + 1, self.doubled_cap()));
        }

        // SAFETY: index < len < cap, so both ranges are inside the allocation. ptr::copy handles
        // the overlap, moving the tail one slot right starting from the back.
        unsafe {
            let base = self.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            self.write_unchecked(index, value);
        }
        self.len += 1;

        Ok(index)
    }

    /// Removes the element at `index` and returns it, shifting every element after it one position
    /// to the left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 9, 2]);
    /// assert_eq!(vec.erase(1), 9);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn erase(&mut self, index: usize) -> T {
        self.try_erase(index).throw()
    }

    /// Removes the element at `index`, returning an [`Err`] rather than panicking if `index` is
    /// out of bounds.
    pub fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value is initialized and read out exactly once before the
        // tail is moved over its slot.
        let value = unsafe {
            let value = self.read_unchecked(index);
            let base = self.as_mut_ptr();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Ensures that the capacity is at least `new_cap`, reallocating to exactly `new_cap` if it is
    /// currently smaller. The length and contents never change.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(4);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.cap() {
            self.realloc(new_cap);
        }
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if it is out of bounds.
    ///
    /// Indexing with `vec[index]` is also available through the slice this Vector dereferences
    /// to, and panics instead.
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if it is out of
    /// bounds.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Swaps the contents (and capacities) of two Vectors without moving any elements.
    pub fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Shortens the Vector to `new_len`, dropping the removed elements. Does nothing if `new_len`
    /// isn't less than the current length.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail_len = self.len - new_len;
        // Shorten first, so that a panicking drop can't cause a double drop.
        self.len = new_len;

        // SAFETY: The range [new_len, new_len + tail_len) was initialized and is no longer part of
        // the Vector.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.as_mut_ptr().add(new_len),
                tail_len,
            ));
        }
    }

    /// Reallocates the internal Array with the provided capacity.
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        self.arr.realloc(new_cap);
    }

    /// Returns the current capacity multiplied by the growth factor.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if the multiplication overflows.
    pub(crate) fn doubled_cap(&self) -> usize {
        self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw()
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.arr.ptr.as_ptr().cast()
    }

    /// Writes `value` into the slot at `index` without reading or dropping the previous contents.
    ///
    /// # Safety
    /// `index` must be less than the capacity. Any value previously in the slot is forgotten.
    pub(crate) unsafe fn write_unchecked(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that index is within the allocation.
        unsafe { self.as_mut_ptr().add(index).write(value) }
    }

    /// Reads the value out of the slot at `index`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// The slot at `index` must be initialized, and must be treated as uninitialized afterwards.
    pub(crate) unsafe fn read_unchecked(&mut self, index: usize) -> T {
        // SAFETY: The caller guarantees that the slot is initialized.
        unsafe { self.as_mut_ptr().add(index).read() }
    }
}

impl<T: Default> Vector<T> {
    /// Creates a Vector holding `len` default values, with capacity exactly `len`.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_len(3);
    /// assert_eq!(&*vec, &[0, 0, 0]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn with_len(len: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(len);
        vec.fill_to_with(len, T::default);
        vec
    }

    /// Changes the length of the Vector to `new_size`.
    ///
    /// - Shrinking drops the removed elements but keeps the capacity.
    /// - Growing within the capacity fills the new positions with default values in place.
    /// - Growing past the capacity reallocates to `max(new_size, cap * 2)` first.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or its memory layout would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.resize(5);
    /// assert_eq!(&*vec, &[1, 2, 3, 0, 0]);
    /// assert_eq!(vec.cap(), 6);
    /// vec.resize(1);
    /// assert_eq!(&*vec, &[1]);
    /// assert_eq!(vec.cap(), 6);
    /// ```
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.len {
            self.truncate(new_size);
            return;
        }

        if new_size > self.cap() {
            self.realloc(cmp::max(new_size, self.doubled_cap()));
        }

        self.fill_to_with(new_size, T::default);
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector holding `len` clones of `value`, with capacity exactly `len`.
    pub fn from_elem(value: T, len: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(len);
        vec.fill_to_with(len, || value.clone());
        vec
    }
}

impl<T> Vector<T> {
    /// Pushes values produced by `f` until the length reaches `new_len`, which must not exceed
    /// the capacity. The length is updated after every write, so a panic in `f` leaves only
    /// initialized values inside the Vector.
    pub(crate) fn fill_to_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        debug_assert!(new_len <= self.cap());

        while self.len < new_len {
            // SAFETY: len < new_len <= cap.
            unsafe { self.write_unchecked(self.len, f()) };
            self.len += 1;
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.truncate(0);

        // The Array is dropped implicitly, it only holds MaybeUninit values so this just releases
        // the allocation.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len values are initialized and the pointer is non-null and aligned.
        // MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As above, with the unique borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: A Vector uniquely owns its values, so it can be sent when T can.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API has no interior mutability, so shared access only hands out &T.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    /// Clones every element into a new Vector with capacity equal to the length. If a clone
    /// panics, the partially built Vector is dropped and `self` is untouched.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.len);
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector with length and capacity `N`, like an initializer list.
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
