//! Contiguous collection types. [`Vector`] is the growable sequence, built on the fixed-size
//! [`Array`] which owns the actual allocation.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
