//! A module containing [`Vector`] and associated types.
//!
//! Other included types are [`IntoIter`] for owned iteration over a Vector and [`OutOfCapacity`],
//! the error returned when pushing into a full Vector without growing it.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used
//! for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod error;
mod iter;
mod vector;

pub use error::*;
pub use iter::*;
pub use vector::*;
