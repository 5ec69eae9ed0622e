use std::fmt::Display;

use crate::panic::{Panic, UnwrapOnErr};

pub trait ResultExtension<T, E: Display> {
    /// A method similar to [`Result::unwrap`], except that it only requires the error to be
    /// [`Display`] and terminates with the rendered error as its message.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    ///
    /// # Examples
    /// ```
    /// # use contain::ext::ResultExtension;
    /// let res: Result<u8, String> = Ok(1);
    /// assert_eq!(res.throw(), 1);
    /// ```
    fn throw(self) -> T;
}

impl<T, E: Display> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => UnwrapOnErr(error.to_string()).panic(),
        }
    }
}
