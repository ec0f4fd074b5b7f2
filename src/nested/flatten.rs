use std::slice;

use tracing::trace;

use super::Nested;

/// How far [`flatten`] should expand nested lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Depth {
    /// Expand only the lists directly inside the array, keeping any lists inside those intact.
    Shallow,
    /// Expand lists at every depth, leaving only items.
    #[default]
    Deep,
}

/// `true` is treated as [`Depth::Shallow`], matching a "shallow" flag.
impl From<bool> for Depth {
    fn from(shallow: bool) -> Self {
        if shallow { Depth::Shallow } else { Depth::Deep }
    }
}

/// Returns a new [`Vec`] with the elements of the `array`, with nested lists expanded to the
/// given `depth`.
pub fn flatten<T: Clone>(array: &[Nested<T>], depth: Depth) -> Vec<Nested<T>> {
    let mut acc = Vec::with_capacity(array.len());
    flatten_into(array, depth, &mut acc);
    acc
}

/// Appends the elements of the `array` to `acc`, with nested lists expanded to the given
/// `depth`. Anything already in `acc` is kept.
pub fn flatten_into<T: Clone>(array: &[Nested<T>], depth: Depth, acc: &mut Vec<Nested<T>>) {
    match depth {
        Depth::Shallow => {
            for element in array {
                match element {
                    Nested::List(list) => acc.extend_from_slice(list),
                    item => acc.push(item.clone()),
                }
            }
        },
        Depth::Deep => {
            for_each_item(array, |item| acc.push(Nested::Item(item.clone())));
        },
    }
}

/// Returns every item in the `array`, at any depth, in order.
///
/// This is [`flatten`] with [`Depth::Deep`], but without the [`Nested`] wrapping that is no
/// longer needed once every list is gone.
pub fn flatten_deep<T: Clone>(array: &[Nested<T>]) -> Vec<T> {
    let mut acc = Vec::with_capacity(array.len());
    for_each_item(array, |item| acc.push(item.clone()));
    acc
}

/// Visits every item in `array` depth-first and in order. Descending into a list pushes the rest
/// of the current level onto an explicit stack, so arbitrarily deep input can't overflow the
/// call stack.
fn for_each_item<'a, T, F: FnMut(&'a T)>(array: &'a [Nested<T>], mut f: F) {
    let mut stack: Vec<slice::Iter<'a, Nested<T>>> = vec![array.iter()];

    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Item(item)) => f(item),
            Some(Nested::List(list)) => {
                stack.push(list.iter());
                trace!(depth = stack.len(), "descending into nested list");
            },
            None => {
                stack.pop();
            },
        }
    }
}
