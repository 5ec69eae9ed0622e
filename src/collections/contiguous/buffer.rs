use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::panic::{CapacityOverflow, Panic};
use crate::util::trace::trace_event;

/// An owned, uninitialized allocation with room for `cap` values of `T`. A Buffer never reads,
/// writes or drops its contents, it only manages the memory; tracking which slots are initialized
/// is left to the owner.
///
/// A Buffer with capacity 0, or any Buffer of a zero-sized type, holds a dangling pointer and no
/// allocation.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    pub(crate) const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a Buffer with capacity for exactly `cap` values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    #[track_caller]
    pub(crate) fn with_cap(cap: usize) -> Buffer<T> {
        let layout = Self::make_layout(cap);
        trace_event!(cap, bytes = layout.size(), "allocating buffer");

        Buffer {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// Reallocates the Buffer to hold exactly `new_cap` values. The first `min(cap, new_cap)`
    /// slots keep their contents, the rest are uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    #[track_caller]
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        trace_event!(old_cap = self.cap, new_cap, "reallocating buffer");

        let new_ptr = match (self.cap, new_cap) {
            // Zero-sized types never need memory, the dangling pointer is valid for any count.
            _ if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return,
            (0, _) => Self::make_ptr(Self::make_layout(new_cap)),
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with this exact layout, and
                // the layout has a non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap)) }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.cap);
                let new_layout = Self::make_layout(new_cap);

                // SAFETY: ptr was allocated in the global allocator with old_layout. The new size
                // is non-zero and, having passed Layout::array, doesn't exceed isize::MAX when
                // rounded up to the alignment.
                let raw_ptr: *mut T = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// A helper function to create a [`Layout`] for `cap` values of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    #[track_caller]
    fn make_layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => CapacityOverflow.panic(),
        }
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::alloc::ZeroSizedType;
    use crate::util::panic::assert_panics;

    #[test]
    fn test_realloc_keeps_contents() {
        let mut buf = Buffer::<u32>::with_cap(4);
        for i in 0..4 {
            // SAFETY: i < cap.
            unsafe { buf.ptr.add(i).write(i as u32 * 10) }
        }

        buf.realloc(16);
        assert_eq!(buf.cap(), 16);
        for i in 0..4 {
            // SAFETY: The first 4 slots were written before growing.
            assert_eq!(unsafe { buf.ptr.add(i).read() }, i as u32 * 10);
        }

        buf.realloc(0);
        assert_eq!(buf.cap(), 0);
        assert_eq!(buf.ptr, NonNull::dangling(), "An empty Buffer should be dangling.");
    }

    #[test]
    fn test_zst_never_allocates() {
        let mut buf = Buffer::<ZeroSizedType>::with_cap(10);
        let old_ptr = buf.ptr;
        buf.realloc(100);
        assert_eq!(buf.cap(), 100);
        assert_eq!(buf.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    }

    #[test]
    #[cfg_attr(feature = "abort", ignore = "fatal conditions abort the process")]
    fn test_capacity_overflow() {
        assert_panics!({
            Buffer::<u64>::with_cap(isize::MAX as usize);
        }, raises CapacityOverflow);
    }
}
