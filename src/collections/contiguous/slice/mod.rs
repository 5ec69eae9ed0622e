//! A module containing the borrowed views [`Slice`] and [`MutSlice`].
//!
//! Both are non-owning views into contiguous storage, created from a
//! [`Vector`](super::Vector), an array or a standard slice. Their lifetime ties them to the storage
//! they borrow, so the usual borrowing rules apply: many Slices or exactly one MutSlice, and no
//! resizing of the source while any of them is alive.
//!
//! Borrowed iteration is provided by [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut).

mod mut_slice;
mod slice;

pub use mut_slice::*;
pub use slice::*;
