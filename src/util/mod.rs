#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod panic;
pub mod trace;
