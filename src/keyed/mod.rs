//! Extracting the keys or values of a [`Record`] as sequences.

use crate::collection::Record;


/// Returns the keys of the `record`, in insertion order.
pub fn keys<V>(record: &Record<V>) -> Vec<&str> {
    record.keys().map(String::as_str).collect()
}

/// Returns the values of the `record`, in the same order as [`keys`].
pub fn values<V>(record: &Record<V>) -> Vec<&V> {
    record.values().collect()
}
