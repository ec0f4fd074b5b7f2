//! This crate is my take on a handful of the collection helpers found in utility libraries:
//! iteration, mapping, reduction, search, filtering, size, slicing, sorting, flattening and
//! key/value extraction.
//!
//! # Purpose
//! This is a learning project, with no expectation for it to be used in production. Each helper
//! is small, but writing them against Rust's type system makes some questions that are easy to
//! gloss over in a dynamic language (what does "not found" look like, what happens when you
//! reduce nothing) impossible to ignore.
//!
//! # Collections
//! Every traversal accepts a [`Collection`](collection::Collection): either an ordered sequence
//! (anything that can be viewed as a slice) or a [`Record`](collection::Record), which maps string
//! keys to values and remembers the order they were inserted in. Traversals only look at the
//! values, in order, through [`normalize`](collection::normalize). Collections are only ever
//! borrowed, so a callback can't modify a collection while it is being traversed.
//!
//! # Error Handling
//! Nothing here panics on its own account. Absence is expressed with [`Option`]: [`find`] and
//! friends return [`None`] for "no match", which can't be confused with finding a value that
//! happens to be empty, and [`reduce`] returns [`None`] when there is nothing to reduce and no
//! initial value.
//!
//! Where a caller wants a loud failure instead, [`try_reduce`] returns a [`ReduceError`].
//! Callback failures are never caught: `try_*` functions return a callback's `Err` as-is, and a
//! panicking callback unwinds straight through to the caller.
//!
//! # Dependencies
//! `indexmap` stores [`Record`](collection::Record)s, `tracing` reports the (rare) events worth
//! reporting, and `derive_more` removes some repetitive error boilerplate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collection;
pub mod keyed;
pub mod nested;
pub mod slice;
pub mod sort;
pub mod traverse;

pub(crate) mod util;

pub use collection::{Collection, Record, normalize};
pub use keyed::{keys, values};
pub use nested::{Depth, Nested, flatten, flatten_deep, flatten_into};
pub use slice::{first, first_n, last, last_n};
pub use sort::sort_by;
pub use traverse::*;
pub use util::error::{EmptyCollection, ReduceError};
