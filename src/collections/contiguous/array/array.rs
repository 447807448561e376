use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A buffer of `size` values allocated on the heap, similar to a [`Box<[T]>`](Box<T>) but with
/// the ability to be reallocated in place.
///
/// On its own, an Array is always fully initialized. [`Vector`](super::super::Vector) uses an
/// `Array<MaybeUninit<T>>` as its capacity and tracks which prefix is initialized itself.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `repeat_with` | `O(n)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The global allocator may be able to grow the allocation in place, in which case nothing is
/// copied.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert!(arr.is_empty());
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);

        Array {
            ptr: Array::<MaybeUninit<T>>::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of `count` values, each produced by calling `f`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`]. If `f` panics, the allocation is
    /// released but the values already produced are leaked rather than dropped.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Array;
    /// let mut next = 0;
    /// let arr = Array::repeat_with(|| { next += 2; next }, 3);
    /// assert_eq!(&*arr, &[2, 4, 6]);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(mut f: F, count: usize) -> Array<T> {
        let mut arr = Self::new_uninit(count);

        for slot in arr.iter_mut() {
            slot.write(f());
        }

        // SAFETY: Every slot has just been written.
        unsafe { arr.assume_init() }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a [`Layout`] for `size` values of `T`.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if the layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// Allocates memory for `layout`, or returns a dangling pointer if the layout is zero-sized.
    ///
    /// # Errors
    /// In the event of an allocation failure, this method calls [`alloc::handle_alloc_error`]
    /// rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            return NonNull::dangling();
        }

        // SAFETY: Zero-sized layouts are handled above.
        let raw_ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assumes that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every value in the Array is initialized. Failing
    /// to do so is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let arr = ManuallyDrop::new(self);

        // MaybeUninit<T> has the same layout as T, so the allocation can be reinterpreted as is.
        Array {
            ptr: arr.ptr.cast(),
            size: arr.size,
            _phantom: PhantomData,
        }
    }

    /// Reallocates the Array to hold exactly `new_size` values. Existing values up to
    /// `min(size, new_size)` keep their position and contents; new positions are uninitialized.
    /// Values beyond `new_size` are not dropped, because an uninitialized Array can't know which
    /// of them are initialized.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }

        let old_layout = Self::make_layout(self.size);
        let new_layout = Self::make_layout(new_size);

        self.ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types or an empty Array becoming another empty Array, nothing to manage.
            (0, 0) => NonNull::dangling(),
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: The old layout has a non-zero size, so ptr was allocated in the global
                // allocator using exactly that layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: ptr was allocated with old_layout in the global allocator, new_bytes is
                // non-zero and make_layout has checked that it doesn't exceed isize::MAX.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes)
                };
                NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: The Array holds size initialized values starting at ptr, which are dropped
        // exactly once here. For Array<MaybeUninit<T>> this is a no-op.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Self::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator with this layout when the
            // layout isn't zero-sized.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is non-null, aligned and valid for size initialized values (or dangling with
        // size 0). The returned borrow prevents mutation through self.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As above, with the unique borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: An Array uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array has no interior mutability, shared access only hands out &T.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
