use tracing::trace;

use crate::collection::{Collection, normalize};
use crate::util::error::{EmptyCollection, ReduceError};

/// Invokes `f` with each value of the `collection`, in order, and then returns the `collection`
/// exactly as it was provided.
///
/// Returning the original argument (rather than its values) allows for chaining on the caller's
/// own reference.
pub fn for_each<'a, C, V, F>(collection: C, mut f: F) -> C
where
    C: Into<Collection<'a, V>> + Copy,
    V: 'a,
    F: FnMut(&'a V),
{
    for value in normalize(collection) {
        f(value);
    }

    collection
}

/// Like [`for_each`], but stops at the first `Err` returned by `f` and returns it.
pub fn try_for_each<'a, C, V, E, F>(collection: C, mut f: F) -> Result<C, E>
where
    C: Into<Collection<'a, V>> + Copy,
    V: 'a,
    F: FnMut(&'a V) -> Result<(), E>,
{
    for value in normalize(collection) {
        f(value)?;
    }

    Ok(collection)
}

/// Creates a new [`Vec`] by invoking `f` on each value of the `collection`, along with the
/// value's index and the collection itself.
///
/// The result always has the same length and order as the collection's values.
pub fn map<'a, V, U, F>(collection: impl Into<Collection<'a, V>>, mut f: F) -> Vec<U>
where
    V: 'a,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> U,
{
    let collection = collection.into();
    let mut result = Vec::with_capacity(collection.len());

    for (index, value) in collection.values().enumerate() {
        result.push(f(value, index, collection));
    }

    result
}

/// Like [`map`], but stops at the first `Err` returned by `f` and returns it. No partial result
/// is produced.
pub fn try_map<'a, V, U, E, F>(
    collection: impl Into<Collection<'a, V>>,
    mut f: F,
) -> Result<Vec<U>, E>
where
    V: 'a,
    F: FnMut(&'a V, usize, Collection<'a, V>) -> Result<U, E>,
{
    let collection = collection.into();
    let mut result = Vec::with_capacity(collection.len());

    for (index, value) in collection.values().enumerate() {
        result.push(f(value, index, collection)?);
    }

    Ok(result)
}

/// Folds the `collection` from left to right, starting from `initial`.
///
/// `f` is invoked as `f(accumulator, value, collection)` and its return value becomes the next
/// accumulator.
pub fn fold<'a, V, A, F>(collection: impl Into<Collection<'a, V>>, initial: A, mut f: F) -> A
where
    V: 'a,
    F: FnMut(A, &'a V, Collection<'a, V>) -> A,
{
    let collection = collection.into();
    let mut acc = initial;

    for value in collection.values() {
        acc = f(acc, value, collection);
    }

    acc
}

/// Reduces the `collection` to a single value, folding from left to right.
///
/// If `initial` is [`None`], a clone of the first value seeds the accumulator and folding starts
/// from the second value. Returns `None` only when there is neither an initial value nor any
/// values in the collection; see [`try_reduce`] for a version that treats this as an error.
pub fn reduce<'a, V, F>(
    collection: impl Into<Collection<'a, V>>,
    mut f: F,
    initial: Option<V>,
) -> Option<V>
where
    V: Clone + 'a,
    F: FnMut(V, &'a V, Collection<'a, V>) -> V,
{
    let collection = collection.into();
    let mut values = collection.values();

    let Some(mut acc) = initial.or_else(|| values.next().cloned()) else {
        trace!("reduced an empty collection with no initial value");
        return None;
    };

    for value in values {
        acc = f(acc, value, collection);
    }

    Some(acc)
}

/// Like [`reduce`], but with a fallible callback, and failing loudly with
/// [`ReduceError::NoValues`] when there is nothing to reduce.
///
/// # Errors
/// - [`ReduceError::NoValues`]: `initial` is [`None`] and the collection has no values.
/// - [`ReduceError::Callback`]: `f` returned an error, which is passed through as-is.
pub fn try_reduce<'a, V, E, F>(
    collection: impl Into<Collection<'a, V>>,
    mut f: F,
    initial: Option<V>,
) -> Result<V, ReduceError<E>>
where
    V: Clone + 'a,
    F: FnMut(V, &'a V, Collection<'a, V>) -> Result<V, E>,
{
    let collection = collection.into();
    let mut values = collection.values();

    let mut acc = initial
        .or_else(|| values.next().cloned())
        .ok_or(EmptyCollection)?;

    for value in values {
        acc = f(acc, value, collection).map_err(ReduceError::Callback)?;
    }

    Ok(acc)
}

/// Returns the first value in the `collection` that satisfies the `predicate`, or [`None`] if
/// there isn't one.
///
/// The predicate isn't invoked again after the first match.
pub fn find<'a, V, P>(collection: impl Into<Collection<'a, V>>, mut predicate: P) -> Option<&'a V>
where
    V: 'a,
    P: FnMut(&'a V) -> bool,
{
    normalize(collection).find(|value| predicate(*value))
}

/// Returns every value in the `collection` that satisfies the `predicate`, in their original
/// order.
pub fn filter<'a, V, P>(collection: impl Into<Collection<'a, V>>, mut predicate: P) -> Vec<&'a V>
where
    V: 'a,
    P: FnMut(&'a V) -> bool,
{
    let mut result = Vec::new();

    for value in normalize(collection) {
        if predicate(value) {
            result.push(value);
        }
    }

    result
}

/// Returns the number of values in the `collection`: the length of a sequence or the number of
/// keys in a [`Record`](crate::collection::Record).
pub fn size<'a, V: 'a>(collection: impl Into<Collection<'a, V>>) -> usize {
    collection.into().len()
}
