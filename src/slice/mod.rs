//! Taking elements from either end of a sequence.
//!
//! Whether a count was given is part of which function is called: [`first`] and [`last`] return
//! a single element, while [`first_n`] and [`last_n`] return a sub-slice, even for a count of 0.

mod tests;

/// Returns the first element of the `array`, or [`None`] if it is empty.
pub const fn first<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// Returns up to the first `n` elements of the `array`. If the array is shorter than `n`, the
/// whole array is returned.
pub fn first_n<T>(array: &[T], n: usize) -> &[T] {
    &array[..n.min(array.len())]
}

/// Returns the last element of the `array`, or [`None`] if it is empty.
pub const fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

/// Returns up to the last `n` elements of the `array`. If the array is shorter than `n`, the
/// whole array is returned, and if `n` is 0, the result is always empty.
pub fn last_n<T>(array: &[T], n: usize) -> &[T] {
    &array[array.len().saturating_sub(n)..]
}
