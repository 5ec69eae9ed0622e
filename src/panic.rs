//! Fatal conditions and the single path by which this crate terminates.
//!
//! Every condition here represents a programmer error (or an unrecoverable resource problem)
//! rather than something a caller is expected to handle. They are still proper [`Error`] types so
//! that they can be displayed, compared in tests and reused by callers who'd rather check first.
//! The only recoverable error in the crate is
//! [`OutOfCapacity`](crate::collections::contiguous::OutOfCapacity).
//!
//! By default [`Panic::panic`] unwinds with the condition's message. With the `abort` feature
//! enabled, it prints `fatal: <message>` to stderr and aborts the process instead.

use std::error::Error;
use std::process;

use derive_more::{Display, Error};

use crate::util::trace::error_event;

/// A condition that terminates the current thread (or the whole process, with the `abort`
/// feature) when raised.
pub trait Panic: Error {
    /// Raises this condition. Never returns.
    #[track_caller]
    fn panic(&self) -> ! {
        error_event!("fatal: {}", self);

        if cfg!(feature = "abort") {
            eprintln!("fatal: {}", self);
            process::abort()
        }

        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}
impl Panic for IndexOutOfBounds {}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("range {start}..{end} is invalid for collection with {len} elements")]
pub struct InvalidRange {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}
impl Panic for InvalidRange {}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;
impl Panic for CapacityOverflow {}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("called throw on a None value")]
pub struct UnwrapOnNone;
impl Panic for UnwrapOnNone {}

/// Raised by [`ResultExtension::throw`](crate::ext::ResultExtension::throw), holding the rendered
/// error that was found in place of a value.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("called throw on an Err value: {_0}")]
pub struct UnwrapOnErr(#[error(not(source))] pub String);
impl Panic for UnwrapOnErr {}
