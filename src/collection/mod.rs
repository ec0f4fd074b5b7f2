//! The [`Collection`] type, which every traversal accepts, and [`Record`], the keyed half of it.
//!
//! A Collection is either an ordered sequence (a borrowed slice) or a [`Record`]. Traversals only
//! ever see the *values* of a Collection, in order, through [`normalize`]. For a Record, that
//! order is the order its keys were inserted in.

mod collection;
mod record;

pub use collection::*;
pub use record::*;
