use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, Keys, Values};

/// A mapping of string keys to values which remembers the order that keys were first inserted
/// in.
///
/// Enumerating a Record (via [`iter`](Record::iter), [`keys`](Record::keys) or
/// [`values`](Record::values)) always follows insertion order. Replacing the value of an existing
/// key keeps that key where it was, and removing a key keeps the order of everything else.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Record.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `get` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `remove` | `O(n)` |
///
/// \* Amortized and on average, lookups are hash-based.
#[derive(Clone)]
pub struct Record<V> {
    pub(crate) inner: IndexMap<String, V>,
}

impl<V> Record<V> {
    /// Creates a new, empty Record.
    pub fn new() -> Record<V> {
        Record {
            inner: IndexMap::new(),
        }
    }

    /// Creates a new Record with space for at least `cap` entries.
    pub fn with_cap(cap: usize) -> Record<V> {
        Record {
            inner: IndexMap::with_capacity(cap),
        }
    }

    /// Returns the number of entries in the Record.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Record contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts the provided `key`-`value` pair. If the key was already present, its value is
    /// replaced and returned, and the key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.inner.insert(key.into(), value)
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key)
    }

    /// Returns true if the Record contains an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Removes the entry for `key`, returning its value. All entries after it shift forward by
    /// one, so enumeration order is otherwise unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.shift_remove(key)
    }

    /// Returns an iterator over all entries, in insertion order.
    pub fn iter(&self) -> Iter<'_, String, V> {
        self.inner.iter()
    }

    /// Returns an iterator over all keys, in insertion order.
    pub fn keys(&self) -> Keys<'_, String, V> {
        self.inner.keys()
    }

    /// Returns an iterator over all values, in the same order as [`keys`](Record::keys).
    pub fn values(&self) -> Values<'_, String, V> {
        self.inner.values()
    }
}

/// Two Records are equal if they hold equal entries in the same order.
impl<V: PartialEq> PartialEq for Record<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Record<V> {}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut record = Record::with_cap(iter.size_hint().0);

        for (key, value) in iter {
            record.insert(key, value);
        }

        record
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for Record<V> {
    fn from(value: [(K, V); N]) -> Self {
        Record::from_iter(value)
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);

    type IntoIter = IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = (&'a String, &'a V);

    type IntoIter = Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Debug> Debug for Record<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("entries", &self.inner)
            .field("len", &self.len())
            .finish()
    }
}

impl<V: Debug> Display for Record<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Creates a [`Record`] from `key => value` pairs, keeping the order they are written in.
///
/// ```
/// # use collection_utils::record;
/// let record = record! { "one" => 1, "two" => 2 };
/// assert_eq!(record.get("two"), Some(&2));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::collection::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::collection::Record::from([$(($key, $value)),+])
    };
}
