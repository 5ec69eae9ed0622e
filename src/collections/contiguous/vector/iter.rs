use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::buffer::Buffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_parts();
        IntoIter {
            buf,
            start: 0,
            end: len,
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

/// An owned type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Values in `start..end` of the buffer are still initialized and owned by the iterator.
pub struct IntoIter<T> {
    buf: Buffer<T>,
    start: usize,
    end: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only values in start..end remain initialized and they haven't been yielded. The
        // Buffer is deallocated afterwards, without touching any values.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the value is initialized. We increment start next so that the
            // value is effectively moved off of the heap.
            let value = unsafe { self.buf.ptr.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is >= start, so the value is initialized and is
            // forgotten by the iterator from here on.
            let value = unsafe { self.buf.ptr.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// SAFETY: IntoIter uniquely owns its remaining values, just like the Vector it came from.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: IntoIter provides no shared access to its values at all.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

// Borrowed iteration uses the iter and iter_mut definitions provided by Deref<Target=[T]>.
