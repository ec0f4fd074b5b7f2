//! Whole-collection traversals: iteration, mapping, reduction, search, filtering and size.
//!
//! Every function here accepts anything that converts into a
//! [`Collection`](crate::collection::Collection) and works on its
//! normalized values. Each has an infallible form and, where a callback could reasonably fail, a
//! `try_` form that stops at the first error and hands it back unchanged.

mod traverse;

pub use traverse::*;
