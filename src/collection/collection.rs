use std::iter::FusedIterator;
use std::slice;

use indexmap::map;

use super::Record;

/// A borrowed view of either an ordered sequence or a [`Record`].
///
/// Every traversal in this crate accepts `impl Into<Collection>`, so slices, arrays, [`Vec`]s
/// and Records can be passed by reference directly.
///
/// The collection is shared-borrowed for as long as the Collection exists, so a callback can't
/// mutate it partway through a traversal.
#[derive(Debug)]
pub enum Collection<'a, V> {
    Sequence(&'a [V]),
    Keyed(&'a Record<V>),
}

impl<'a, V> Collection<'a, V> {
    /// Returns an iterator over the values of the Collection, in order. This doesn't copy
    /// anything: a sequence is iterated in place and a Record yields its values in key-insertion
    /// order.
    pub fn values(self) -> Values<'a, V> {
        match self {
            Collection::Sequence(slice) => Values::Sequence(slice.iter()),
            Collection::Keyed(record) => Values::Keyed(record.values()),
        }
    }

    /// Returns the number of values in the Collection.
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(slice) => slice.len(),
            Collection::Keyed(record) => record.len(),
        }
    }

    /// Returns true if the Collection contains no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Derives would require V: Clone / V: Copy, which the references don't need.
impl<V> Clone for Collection<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Collection<'_, V> {}

impl<'a, V> From<&'a [V]> for Collection<'a, V> {
    fn from(value: &'a [V]) -> Self {
        Collection::Sequence(value)
    }
}

impl<'a, V, const N: usize> From<&'a [V; N]> for Collection<'a, V> {
    fn from(value: &'a [V; N]) -> Self {
        Collection::Sequence(value)
    }
}

impl<'a, V> From<&'a Vec<V>> for Collection<'a, V> {
    fn from(value: &'a Vec<V>) -> Self {
        Collection::Sequence(value)
    }
}

impl<'a, V> From<&'a Record<V>> for Collection<'a, V> {
    fn from(value: &'a Record<V>) -> Self {
        Collection::Keyed(value)
    }
}

impl<'a, V> IntoIterator for Collection<'a, V> {
    type Item = &'a V;

    type IntoIter = Values<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

/// Produces the normalized view of `collection`: its values, in order.
///
/// This is the first step of every traversal in the crate.
pub fn normalize<'a, V>(collection: impl Into<Collection<'a, V>>) -> Values<'a, V>
where
    V: 'a,
{
    collection.into().values()
}

/// An iterator over the values of a [`Collection`], created by [`Collection::values`] or
/// [`normalize`].
#[derive(Debug)]
pub enum Values<'a, V> {
    Sequence(slice::Iter<'a, V>),
    Keyed(map::Values<'a, String, V>),
}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        match self {
            Values::Sequence(inner) => Values::Sequence(inner.clone()),
            Values::Keyed(inner) => Values::Keyed(inner.clone()),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Values::Sequence(inner) => inner.next(),
            Values::Keyed(inner) => inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Values::Sequence(inner) => inner.size_hint(),
            Values::Keyed(inner) => inner.size_hint(),
        }
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Values::Sequence(inner) => inner.next_back(),
            Values::Keyed(inner) => inner.next_back(),
        }
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<V> FusedIterator for Values<'_, V> {}
