use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, RangeBounds};
use std::ptr;
use std::slice;

use super::OutOfCapacity;
use crate::collections::contiguous::bounds;
use crate::collections::contiguous::buffer::Buffer;
use crate::collections::contiguous::{MutSlice, Slice};
use crate::panic::{CapacityOverflow, IndexOutOfBounds, Panic};

/// The smallest number of slots added when [`push`](Vector::push) has to grow a Vector. Past
/// this, growth adds the current capacity again, doubling it.
pub const MIN_GROWTH: usize = 8;

/// An owned, growable, contiguous collection.
///
/// A Vector owns its elements and is moved rather than copied, so a Vector can't be used after it
/// has been moved or dropped. Borrowed views into it are created with
/// [`slice_of`](Vector::slice_of) and [`mutslice_of`](Vector::mutslice_of); while a view is alive
/// the Vector can't be resized:
///
/// ```compile_fail
/// # use contain::collections::contiguous::Vector;
/// let mut vec = Vector::from([1, 2, 3]);
/// let view = vec.slice_of(0..2);
/// vec.push(4);
/// assert_eq!(view.at(0), &1);
/// ```
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_within_capacity` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `set` | `O(1)` |
/// | `reserve` | `O(n)` |
/// | `append` | `O(n+m)`**, `O(m)` |
/// | `slice_of` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `append` only copies
/// the `m` new items.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_capacity(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    #[track_caller]
    pub fn with_capacity(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is always exactly
    /// the value requested through [`with_capacity`](Vector::with_capacity) and
    /// [`reserve`](Vector::reserve), or the result of growth during [`push`](Vector::push).
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Pushes the provided value onto the end of the Vector if there is spare capacity for it.
    /// This method never allocates.
    ///
    /// # Errors
    /// If the Vector is full, the value is handed back inside an [`OutOfCapacity`] and the Vector
    /// is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::{OutOfCapacity, Vector};
    /// let mut vec = Vector::with_capacity(1);
    /// assert_eq!(vec.push_within_capacity('a'), Ok(()));
    /// assert_eq!(vec.push_within_capacity('b'), Err(OutOfCapacity('b')));
    /// assert_eq!((vec.len(), vec.cap()), (1, 1));
    /// ```
    pub const fn push_within_capacity(&mut self, value: T) -> Result<(), OutOfCapacity<T>> {
        if self.len < self.cap() {
            // SAFETY: We have just checked that there is room for one more value.
            unsafe { self.push_unchecked(value) }
            Ok(())
        } else {
            Err(OutOfCapacity(value))
        }
    }

    /// Pushes the provided value onto the end of the Vector, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or
    /// [`with_capacity`](Vector::with_capacity) to do so. Using this method on a Vector without
    /// enough capacity is undefined behavior.
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.buf.ptr.add(self.len).write(value) }
        self.len += 1;
    }

    /// Grows the capacity of the Vector by exactly `additional` slots. Unlike [`Vec::reserve`],
    /// this is relative to the current capacity rather than the length.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`] or the memory layout of the Vector would
    /// have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.reserve(3);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    #[track_caller]
    pub fn reserve(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }

        match self.cap().checked_add(additional) {
            Some(new_cap) => self.buf.realloc(new_cap),
            None => CapacityOverflow.panic(),
        }
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    /// When growing, the capacity increases by the larger of [`MIN_GROWTH`] and the current
    /// capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    #[track_caller]
    pub fn push(&mut self, value: T) {
        if let Err(OutOfCapacity(value)) = self.push_within_capacity(value) {
            self.reserve(cmp::max(MIN_GROWTH, self.cap()));
            // SAFETY: The capacity has just grown by at least one slot.
            unsafe { self.push_unchecked(value) }
        }
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), Some(0));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, the slot is no longer considered initialized.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector, and
            // all values < old len are initialized. Reading the value bitwise and forgetting the
            // slot moves the value off the heap.
            Some(unsafe { self.buf.ptr.add(self.len).read() })
        }
    }

    /// Moves all elements from `other` onto the end of self, leaving `other` empty. The capacity
    /// of `other` is kept.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut a = Vector::from([1, 2]);
    /// let mut b = Vector::from([3, 4, 5]);
    /// a.append(&mut b);
    /// assert_eq!(&*a, &[1, 2, 3, 4, 5]);
    /// assert!(b.is_empty());
    /// ```
    #[track_caller]
    pub fn append(&mut self, other: &mut Vector<T>) {
        let count = other.len;
        let spare = self.cap() - self.len;
        if count > spare {
            self.reserve(count - spare);
        }

        // SAFETY: self is valid for writes from len to len + count and other is valid for reads
        // from 0 to count. Both are properly aligned and, being separately owned, don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                other.buf.ptr.as_ptr().cast_const(),
                self.buf.ptr.add(self.len).as_ptr(),
                count,
            );
        }

        // The values now belong to self, other must forget about them without dropping.
        other.len = 0;
        self.len += count;
    }

    /// Drops every element of the Vector, leaving its capacity unchanged.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec = Vector::from(["a".to_string(), "b".to_string()]);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so a panicking drop leaks values rather than dropping them twice.
        self.len = 0;

        // SAFETY: The first len values are initialized and no longer reachable through self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr(), len));
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let vec = Vector::from([10, 20]);
    /// assert_eq!(vec.at(1), &20);
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.check_index(index);
        // SAFETY: index < len, so the value is initialized.
        unsafe { self.buf.ptr.add(index).as_ref() }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        // SAFETY: index < len, so the value is initialized, and self is borrowed mutably.
        unsafe { self.buf.ptr.add(index).as_mut() }
    }

    /// Returns a reference to the element at `index`, or an error if it is out of bounds. The
    /// `get` method, available through [`Deref`], returns an [`Option`] instead.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        bounds::check_index(index, self.len)?;
        // SAFETY: index < len, so the value is initialized.
        Ok(unsafe { self.buf.ptr.add(index).as_ref() })
    }

    /// Replaces the element at `index` with `value`, dropping the old element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.set(1, 20);
    /// assert_eq!(&*vec, &[1, 20, 3]);
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

    /// Borrows the elements in `range` as a [`Slice`].
    ///
    /// # Panics
    /// Panics if the range ends before it starts or extends past the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3, 4]);
    /// let slice = vec.slice_of(1..3);
    /// assert_eq!(&*slice, &[2, 3]);
    /// ```
    #[track_caller]
    pub fn slice_of<R: RangeBounds<usize>>(&self, range: R) -> Slice<'_, T> {
        let range = bounds::resolve(range, self.len);
        // SAFETY: The range is within the initialized part of the Vector, which stays borrowed
        // for the lifetime of the Slice.
        unsafe { Slice::from_raw_parts(self.buf.ptr.add(range.start), range.len()) }
    }

    /// Mutably borrows the elements in `range` as a [`MutSlice`].
    ///
    /// # Panics
    /// Panics if the range ends before it starts or extends past the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use contain::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4]);
    /// let mut view = vec.mutslice_of(2..);
    /// view.set(0, 30);
    /// assert_eq!(&*vec, &[1, 2, 30, 4]);
    /// ```
    #[track_caller]
    pub fn mutslice_of<R: RangeBounds<usize>>(&mut self, range: R) -> MutSlice<'_, T> {
        let range = bounds::resolve(range, self.len);
        // SAFETY: The range is within the initialized part of the Vector, which stays mutably
        // borrowed for the lifetime of the MutSlice.
        unsafe { MutSlice::from_raw_parts(self.buf.ptr.add(range.start), range.len()) }
    }

    /// Borrows the whole Vector as a [`Slice`].
    pub fn as_slice(&self) -> Slice<'_, T> {
        self.slice_of(..)
    }

    /// Mutably borrows the whole Vector as a [`MutSlice`].
    pub fn as_mut_slice(&mut self) -> MutSlice<'_, T> {
        self.mutslice_of(..)
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if let Err(err) = bounds::check_index(index, self.len) {
            err.panic()
        }
    }

    /// Takes the allocation and length out of self without dropping anything.
    pub(crate) fn into_parts(self) -> (Buffer<T>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        // SAFETY: this is never used or dropped again, so the Buffer is moved out exactly once.
        let buf = unsafe { ptr::read(&this.buf) };
        (buf, mem::take(&mut this.len))
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_capacity(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_capacity(N);

        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        self.clear();

        // Implicitly drop self.buf, which deallocates the memory without touching any values.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't mutated due to this function taking a &self.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't accessed due to this function taking a
        // &mut self. The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_capacity(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self and receives at most len values.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Vector<T> {}

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
