use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// The error returned by [`Vector::push_within_capacity`](super::Vector::push_within_capacity)
/// when the Vector is full. It hands back the value that couldn't be pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfCapacity<T>(
    /// The value that couldn't be pushed.
    pub T,
);

impl<T> OutOfCapacity<T> {
    /// Returns the value that was rejected.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Display for OutOfCapacity<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vector is out of capacity to push more items")
    }
}

impl<T: Debug> Error for OutOfCapacity<T> {}
