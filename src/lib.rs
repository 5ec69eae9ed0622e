//! This crate is a small core of owned and borrowed contiguous containers, along with a fail-fast
//! way of unwrapping [`Option`] and [`Result`].
//!
//! # Purpose
//! Everything here exists to make a handful of invariants hold without relying on the discipline
//! of the caller: a [`Vector`](collections::contiguous::Vector) has exactly one owner and can't be
//! used once moved, a [`MutSlice`](collections::contiguous::MutSlice) is the only way to reach the
//! storage it borrows while it lives, and no view outlives or observes a resize of its source.
//! All of these are checked by the compiler, through ownership and lifetimes.
//!
//! # Method
//! The containers are generic over their element type, so each element type gets its own
//! monomorphised copy of the code. The capabilities an element needs for a given operation are
//! expressed as trait bounds: [`PartialEq`] for equality, [`Debug`](std::fmt::Debug) for debug
//! printing, [`Display`](std::fmt::Display) for describing an error and [`Drop`] (which every type
//! has) for destruction. Using an operation with an element type that lacks the capability is a
//! compile error.
//!
//! # Error Handling
//! Only one condition is considered recoverable: pushing into a full Vector without allowing it to
//! grow, reported through
//! [`OutOfCapacity`](collections::contiguous::OutOfCapacity). Everything else, out of bounds
//! indices, invalid ranges, capacity overflow and unwrapping a missing value, is a programmer
//! error and terminates immediately through [`Panic`](panic::Panic). Allocation failure goes
//! through [`handle_alloc_error`](std::alloc::handle_alloc_error), which aborts.
//!
//! Panicking variants come with non-panicking counterparts where a caller might reasonably want to
//! check first, e.g. `try_at` next to `at`.
//!
//! # Features
//! - `trace`: emits [`tracing`](https://docs.rs/tracing) events for (re)allocations and fatal
//!   conditions.
//! - `abort`: fatal conditions print a diagnostic to stderr and abort the process instead of
//!   unwinding.
//!
//! # Concurrency
//! Nothing in this crate synchronizes. The containers are [`Send`] and [`Sync`] under the same
//! conditions as their standard counterparts, so sharing them across threads is only possible
//! where the borrow checker can prove it sound.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod ext;
pub mod panic;

pub(crate) mod util;
