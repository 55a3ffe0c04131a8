use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A required argument, such as a capacity, was below its minimum allowed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument {
    pub argument: &'static str,
    pub value: usize,
    pub min: usize,
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Argument `{}` must be at least {}, but {} was provided!",
            self.argument, self.min, self.value
        )
    }
}

impl Error for InvalidArgument {}

/// An index-based operation referred to a position outside of `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfRange {}

/// A collection can't grow any further because it has reached its absolute maximum capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExhausted {
    pub requested: usize,
    pub available: usize,
}

impl Display for CapacityExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Capacity exhausted: {} more elements requested, but only {} can be added!",
            self.requested, self.available
        )
    }
}

impl Error for CapacityExhausted {}

/// A node or value referenced by a structural operation isn't a member of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The referenced node isn't a member of this collection!")
    }
}

impl Error for NotFound {}

/// An element was requested from an empty stack or queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The collection is empty!")
    }
}

impl Error for EmptyCollection {}

/// Returned by positional insertion, which can fail on either the index or the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrExhausted {
    IndexOutOfRange(IndexOutOfRange),
    CapacityExhausted(CapacityExhausted),
}

/// More values share a single hash code than a bucket can hold. No table size can separate them,
/// so rehashing can't make room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionOverflow {
    pub hash: u64,
    pub limit: usize,
}

impl Display for CollisionOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "More than {} distinct values share the hash {}!", self.limit, self.hash)
    }
}

impl Error for CollisionOverflow {}
