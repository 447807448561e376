//! A module containing [`ChainedMap`] and associated types.
//!
//! Besides the map itself, this module provides the [`IdentityHash`] trait for keys and a borrowed
//! iterator over entries.
//!
//! [`ChainedMap`] is also re-exported under the parent module.

mod chained_map;
mod error;
mod identity;
mod iter;
mod tests;

pub use chained_map::*;
pub use error::*;
pub use identity::*;
pub use iter::*;
