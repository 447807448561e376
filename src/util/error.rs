//! Errors shared between the collection types.

use derive_more::{Display, Error};

/// An index was outside of the valid range for the collection it was used with.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A capacity calculation overflowed, or the resulting allocation would exceed [`isize::MAX`]
/// bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
