//! Three textbook containers, written from scratch on top of raw allocations, plus a small command
//! loop that drives one of them.
//!
//! # Contents
//! - [`Vector`](collections::contiguous::Vector): a contiguous, growable sequence that doubles its
//!   capacity when it runs out, with positional insertion and removal.
//! - [`ForwardList`](collections::linked::ForwardList): a singly linked list with a permanent
//!   sentinel before its first element, so that insertion and removal at the front use the same
//!   cursor operations as everywhere else.
//! - [`ChainedMap`](collections::hash::ChainedMap): a map of integer keys with a fixed number of
//!   buckets, each of which is a ForwardList.
//! - [`driver`]: reads `get`, `put` and `delete` commands and runs them against a ChainedMap. The
//!   `bucket-map` binary wraps it around stdin and stdout.
//!
//! # Error Handling
//! It is more ergonomic for a collection to panic in some cases, because users don't want to
//! handle an error every time they invoke a method. For example, imagine having to handle the
//! possibility of a capacity overflow every time you push into a Vector. Where a method can fail
//! because of its arguments, it comes in two forms: one that panics with the error's message, and
//! a `try_` variant that returns the error instead.
//!
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). Absence is never an error: looking up
//! a missing key returns [`None`].
//!
//! # Dependencies
//! None of the collections use [`Vec`], or any other collection from [`std`], internally. They
//! depend on `derive_more` for error boilerplate. The driver logs through `tracing`.
//!
//! # Features
//! Each component sits behind a Cargo feature: `contiguous`, `linked`, `hash` (which needs the
//! other two) and `driver` (which needs `hash`). All of them are enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "driver")]
pub mod driver;

pub(crate) mod util;
