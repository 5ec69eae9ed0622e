//! Thin wrappers over [`tracing`](https://docs.rs/tracing) that compile to nothing unless the
//! `trace` feature is enabled.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! error_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        ::tracing::error!($($arg)*);
    };
}

pub(crate) use error_event;
pub(crate) use trace_event;
