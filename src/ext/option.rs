use crate::panic::{Panic, UnwrapOnNone};

pub trait OptionExtension<T> {
    /// Returns the contained value, raising [`UnwrapOnNone`] if there is none.
    ///
    /// # Panics
    /// Panics if the [`Option`] is [`None`].
    ///
    /// # Examples
    /// ```
    /// # use contain::ext::OptionExtension;
    /// assert_eq!(Some(3).throw(), 3);
    /// ```
    fn throw(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Some(val) => val,
            None => UnwrapOnNone.panic(),
        }
    }
}
