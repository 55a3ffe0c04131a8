pub mod error;
pub mod fmt;
pub mod num;
pub mod panic;
pub mod result;

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod hash;
