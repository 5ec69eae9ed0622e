use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut, RangeBounds};
use std::ptr::NonNull;
use std::slice;

use super::Slice;
use crate::collections::contiguous::{Vector, bounds};
use crate::panic::{IndexOutOfBounds, Panic};

/// A read-write view of `len` contiguous values, exclusively borrowed for `'a`.
///
/// Only one MutSlice of any given storage can be alive at a time, and while it is, the storage
/// can't be read through any other view either:
///
/// ```compile_fail
/// # use contain::collections::contiguous::Vector;
/// let mut vec = Vector::from([1, 2, 3]);
/// let mut first = vec.mutslice_of(..2);
/// let second = vec.slice_of(1..);
/// first.set(1, 20);
/// assert_eq!(second.at(0), &2);
/// ```
pub struct MutSlice<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _phantom: PhantomData<&'a mut [T]>,
}

impl<'a, T> MutSlice<'a, T> {
    /// Creates a MutSlice from a pointer and a number of elements.
    ///
    /// # Safety
    /// Nothing is checked during construction. For the produced value to be valid:
    /// - `ptr` needs to be properly aligned and point to `len` consecutive, initialized values of
    ///   `T`. It may dangle if `len` is 0 or `T` is zero-sized.
    /// - The values must not be accessed through anything other than the MutSlice, nor freed, for
    ///   the whole of `'a`.
    /// - `len * size_of::<T>()` must not exceed [`isize::MAX`].
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> MutSlice<'a, T> {
        MutSlice {
            ptr,
            len,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the MutSlice.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the MutSlice contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        match self.try_at(index) {
            Ok(value) => value,
            Err(err) => err.panic(),
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        if let Err(err) = bounds::check_index(index, self.len) {
            err.panic()
        }
        // SAFETY: index < len and self is borrowed mutably.
        unsafe { self.ptr.add(index).as_mut() }
    }

    /// Returns a reference to the element at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        bounds::check_index(index, self.len)?;
        // SAFETY: index < len and self is borrowed.
        Ok(unsafe { self.ptr.add(index).as_ref() })
    }

    /// Replaces the element at `index` with `value`, dropping the old element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::MutSlice;
    /// let mut arr = [1, 2, 3];
    /// let mut view = MutSlice::from(&mut arr);
    /// view.set(0, 10);
    /// assert_eq!(arr, [10, 2, 3]);
    /// ```
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        *self.at_mut(index) = value;
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn replace(&mut self, index: usize, value: T) -> T {
        mem::replace(self.at_mut(index), value)
    }

    /// Borrows the elements in `range` as a read-only [`Slice`].
    ///
    /// # Panics
    /// Panics if the range ends before it starts or extends past the length of the MutSlice.
    #[track_caller]
    pub fn slice_of<R: RangeBounds<usize>>(&self, range: R) -> Slice<'_, T> {
        let range = bounds::resolve(range, self.len);
        // SAFETY: The range is within self, which stays borrowed for the lifetime of the Slice.
        unsafe { Slice::from_raw_parts(self.ptr.add(range.start), range.len()) }
    }

    /// Reborrows the elements in `range` as a narrower MutSlice. self can't be used until the
    /// returned MutSlice is dropped.
    ///
    /// # Panics
    /// Panics if the range ends before it starts or extends past the length of the MutSlice.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4]);
    /// let mut outer = vec.mutslice_of(1..);
    /// outer.mutslice_of(1..2).set(0, 30);
    /// assert_eq!(&*outer, &[2, 30, 4]);
    /// ```
    #[track_caller]
    pub fn mutslice_of<R: RangeBounds<usize>>(&mut self, range: R) -> MutSlice<'_, T> {
        let range = bounds::resolve(range, self.len);
        // SAFETY: The range is within self, which stays mutably borrowed for the lifetime of the
        // new MutSlice.
        unsafe { MutSlice::from_raw_parts(self.ptr.add(range.start), range.len()) }
    }

    /// Borrows the whole MutSlice as a read-only [`Slice`].
    pub fn as_slice(&self) -> Slice<'_, T> {
        self.slice_of(..)
    }

    /// Gives up write access, turning self into a [`Slice`] with the full lifetime `'a`.
    pub const fn into_slice(self) -> Slice<'a, T> {
        // SAFETY: self is consumed, so the exclusive borrow becomes a shared one.
        unsafe { Slice::from_raw_parts(self.ptr, self.len) }
    }

    /// Converts the MutSlice into a standard mutable slice with the same lifetime.
    pub const fn into_std(self) -> &'a mut [T] {
        // SAFETY: The pointer is valid and exclusive for len initialized values for all of 'a, and
        // self is consumed.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Deref for MutSlice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The pointer is valid for len initialized values, and self is borrowed.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for MutSlice<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The pointer is valid for len initialized values, and self is borrowed mutably.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for MutSlice<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for MutSlice<'_, T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<'a, T> From<&'a mut [T]> for MutSlice<'a, T> {
    fn from(value: &'a mut [T]) -> Self {
        let len = value.len();
        // SAFETY: A mutable reference to a slice upholds all requirements for its lifetime.
        unsafe { MutSlice::from_raw_parts(NonNull::from(value).cast(), len) }
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for MutSlice<'a, T> {
    fn from(value: &'a mut [T; N]) -> Self {
        MutSlice::from(value.as_mut_slice())
    }
}

impl<'a, T> From<&'a mut Vector<T>> for MutSlice<'a, T> {
    fn from(value: &'a mut Vector<T>) -> Self {
        value.as_mut_slice()
    }
}

impl<'a, T> From<MutSlice<'a, T>> for Slice<'a, T> {
    fn from(value: MutSlice<'a, T>) -> Self {
        value.into_slice()
    }
}

impl<'a, T> IntoIterator for MutSlice<'a, T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std().iter_mut()
    }
}

impl<'b, T> IntoIterator for &'b MutSlice<'_, T> {
    type Item = &'b T;

    type IntoIter = slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'b, T> IntoIterator for &'b mut MutSlice<'_, T> {
    type Item = &'b mut T;

    type IntoIter = slice::IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq<MutSlice<'_, T>> for MutSlice<'_, T> {
    fn eq(&self, other: &MutSlice<'_, T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for MutSlice<'_, T> {}

impl<T: Debug> Debug for MutSlice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutSlice")
            .field("contents", &&**self)
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: A MutSlice is an exclusive borrow, equivalent to &mut [T], which is Send when T: Send.
unsafe impl<T: Send> Send for MutSlice<'_, T> {}
// SAFETY: Shared access to a MutSlice only provides shared access to its values.
unsafe impl<T: Sync> Sync for MutSlice<'_, T> {}
