use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, IsVariant};

/// An error indicating that a collection had no values to seed a reduction with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unable to reduce an empty collection without an initial value!")]
pub struct EmptyCollection;

/// The error returned by [`try_reduce`](crate::traverse::try_reduce), either because there was
/// nothing to reduce or because the callback itself failed.
///
/// The callback's error is carried as-is, so it can be recovered with a match and no conversion.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum ReduceError<E> {
    NoValues(EmptyCollection),
    Callback(E),
}

impl<E> ReduceError<E> {
    /// Returns the callback's error, if that is what caused the reduction to fail.
    pub fn into_callback(self) -> Option<E> {
        match self {
            ReduceError::Callback(error) => Some(error),
            ReduceError::NoValues(_) => None,
        }
    }
}

impl<E> From<EmptyCollection> for ReduceError<E> {
    fn from(value: EmptyCollection) -> Self {
        ReduceError::NoValues(value)
    }
}

impl<E: Display> Display for ReduceError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::NoValues(empty) => write!(f, "{}", empty),
            ReduceError::Callback(error) => write!(f, "Reduction callback failed: {}", error),
        }
    }
}

impl<E: Error + 'static> Error for ReduceError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReduceError::NoValues(empty) => Some(empty),
            ReduceError::Callback(error) => Some(error),
        }
    }
}
