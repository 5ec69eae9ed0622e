use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, RangeBounds};
use std::ptr::NonNull;
use std::slice;

use crate::collections::contiguous::{Vector, bounds};
use crate::panic::{IndexOutOfBounds, Panic};

/// A read-only view of `len` contiguous values, borrowed for `'a` from a [`Vector`], an array or
/// any other contiguous storage.
///
/// A Slice is `Copy`, so any number of them may coexist. The storage they point into stays
/// borrowed for as long as any of them is alive, which means it can be neither mutated nor resized
/// underneath them.
pub struct Slice<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _phantom: PhantomData<&'a [T]>,
}

impl<'a, T> Slice<'a, T> {
    /// Creates a Slice from a pointer and a number of elements.
    ///
    /// # Safety
    /// Nothing is checked during construction. For the produced value to be valid:
    /// - `ptr` needs to be properly aligned and point to `len` consecutive, initialized values of
    ///   `T`. It may dangle if `len` is 0 or `T` is zero-sized.
    /// - The values must not be mutated or freed for the whole of `'a`.
    /// - `len * size_of::<T>()` must not exceed [`isize::MAX`].
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Slice<'a, T> {
        Slice {
            ptr,
            len,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the Slice.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Slice contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at `index`, valid for the whole borrow `'a`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Slice;
    /// let slice = Slice::from(&[1, 2, 3]);
    /// assert_eq!(slice.at(2), &3);
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> &'a T {
        match self.try_at(index) {
            Ok(value) => value,
            Err(err) => err.panic(),
        }
    }

    /// Returns a reference to the element at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_at(&self, index: usize) -> Result<&'a T, IndexOutOfBounds> {
        bounds::check_index(index, self.len)?;
        // SAFETY: index < len and the values are borrowed for 'a.
        Ok(unsafe { self.ptr.add(index).as_ref() })
    }

    /// Narrows the Slice to the elements in `range`, keeping the same borrow.
    ///
    /// # Panics
    /// Panics if the range ends before it starts or extends past the length of the Slice.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Slice;
    /// let slice = Slice::from(&[1, 2, 3, 4]);
    /// assert_eq!(&*slice.slice_of(1..), &[2, 3, 4]);
    /// assert!(slice.slice_of(4..).is_empty());
    /// ```
    #[track_caller]
    pub fn slice_of<R: RangeBounds<usize>>(&self, range: R) -> Slice<'a, T> {
        let range = bounds::resolve(range, self.len);
        // SAFETY: The range is within self, which is valid for 'a.
        unsafe { Slice::from_raw_parts(self.ptr.add(range.start), range.len()) }
    }

    /// Converts the Slice into a standard slice with the same lifetime.
    pub const fn into_std(self) -> &'a [T] {
        // SAFETY: The pointer is valid for len initialized values for all of 'a.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<T> Deref for Slice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.into_std()
    }
}

impl<T> AsRef<[T]> for Slice<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(value: &'a [T]) -> Self {
        // SAFETY: A reference to a slice upholds all requirements for its lifetime.
        unsafe { Slice::from_raw_parts(NonNull::from(value).cast(), value.len()) }
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Slice<'a, T> {
    fn from(value: &'a [T; N]) -> Self {
        Slice::from(value.as_slice())
    }
}

impl<'a, T> From<&'a Vector<T>> for Slice<'a, T> {
    fn from(value: &'a Vector<T>) -> Self {
        value.as_slice()
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std().iter()
    }
}

impl<'b, T> IntoIterator for &'b Slice<'_, T> {
    type Item = &'b T;

    type IntoIter = slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq<Slice<'_, T>> for Slice<'_, T> {
    fn eq(&self, other: &Slice<'_, T>) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Slice<'_, T> {}

impl<T: Debug> Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("contents", &&**self)
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: A Slice is a shared borrow, equivalent to &[T], which is Send when T: Sync.
unsafe impl<T: Sync> Send for Slice<'_, T> {}
// SAFETY: A Slice only provides shared access to its values, so sharing it requires T: Sync.
unsafe impl<T: Sync> Sync for Slice<'_, T> {}
