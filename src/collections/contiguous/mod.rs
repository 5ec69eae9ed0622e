//! Contiguous collection types. [`Vector`] owns and grows its storage, while [`Slice`] and
//! [`MutSlice`] borrow storage owned by something else.
#![warn(missing_docs)]

pub(crate) mod bounds;
pub(crate) mod buffer;
pub mod slice;
pub mod vector;

#[doc(inline)]
pub use slice::{MutSlice, Slice};
#[doc(inline)]
pub use vector::{IntoIter, MIN_GROWTH, OutOfCapacity, Vector};
