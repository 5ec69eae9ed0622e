//! Fail-fast extensions for the standard [`Option`] and [`Result`].
//!
//! The standard types already are the optional value and success/failure union this crate needs,
//! with equality, debug printing and payload dropping all provided by their trait impls. What they
//! lack is a way of unwrapping that goes through this crate's [`Panic`](crate::panic::Panic)
//! path, so that a missing value is reported (or aborts, with the `abort` feature) the same way as
//! every other fatal condition.

mod option;
mod result;

pub use option::*;
pub use result::*;
