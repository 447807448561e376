//! A module containing [`Array`], a heap allocated buffer with a size that only changes when it is
//! explicitly reallocated.
//!
//! [`Array`] has no iterator types of its own, borrowed iteration comes from
//! [`Deref<Target = [T]>`](std::ops::Deref).
//!
//! [`Array`] is also re-exported under the parent module.

mod array;

pub use array::*;
