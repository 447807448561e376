//! Hash-based collection types. Currently just [`ChainedMap`], a fixed-size table of integer keys
//! chained through [`ForwardList`](crate::collections::linked::ForwardList) buckets.

pub mod chained;

#[doc(inline)]
pub use chained::ChainedMap;
