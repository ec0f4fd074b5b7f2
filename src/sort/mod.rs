//! Stable, non-mutating sorting by a derived key.


/// Returns a sorted copy of the `array`, ordered ascending by the key that `key_fn` derives from
/// each element.
///
/// The sort is stable: elements with equal keys keep their original relative order. `key_fn` is
/// invoked exactly once per element, and the `array` itself is never modified.
pub fn sort_by<T, K, F>(array: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(K, &T)> = array.iter().map(|el| (key_fn(el), el)).collect();

    // sort_by is stable, which sort_unstable_by wouldn't be.
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    keyed.into_iter().map(|(_, el)| el.clone()).collect()
}
