//! Nested sequences and flattening them.
//!
//! [`Nested`] models a sequence whose elements may themselves be sequences, to any depth. The
//! [`nested!`](crate::nested!) macro writes one out literally:
//!
//! ```
//! # use collection_utils::nested;
//! # use collection_utils::nested::{flatten, Depth, Nested};
//! let array = nested![1, [2, [3]], 4];
//! assert_eq!(flatten(&array, Depth::Deep), nested![1, 2, 3, 4]);
//! assert_eq!(flatten(&array, Depth::Shallow), nested![1, 2, [3], 4]);
//! ```

mod flatten;
mod nested;
mod tests;

pub use flatten::*;
pub use nested::*;
