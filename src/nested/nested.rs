use std::fmt::{self, Debug, Formatter};

use derive_more::IsVariant;

/// An element of a nested sequence: either a plain item or another sequence of elements.
#[derive(Clone, PartialEq, Eq, Hash, IsVariant)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns the item, if this is a [`Nested::Item`].
    pub fn into_item(self) -> Option<T> {
        match self {
            Nested::Item(item) => Some(item),
            Nested::List(_) => None,
        }
    }

    /// Returns how many levels of lists this element contains. An item has depth 0 and an empty
    /// list has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0)];

        while let Some((element, depth)) = stack.pop() {
            if let Nested::List(list) = element {
                max = max.max(depth + 1);
                stack.extend(list.iter().map(|inner| (inner, depth + 1)));
            }
        }

        max
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(value: Vec<Nested<T>>) -> Self {
        Nested::List(value)
    }
}

/// Items print bare and lists print as lists, so `[1, [2]]` reads the way it was written.
impl<T: Debug> Debug for Nested<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Item(item) => item.fmt(f),
            Nested::List(list) => f.debug_list().entries(list).finish(),
        }
    }
}

/// Creates a [`Vec`] of [`Nested`] elements, where bracketed groups become
/// [`Nested::List`]s and anything else becomes a [`Nested::Item`].
///
/// Each element must be a single token tree, so expressions other than literals and
/// identifiers need to be wrapped in parentheses: `nested![(a + b), [c]]`.
#[macro_export]
macro_rules! nested {
    (@element [$($inner:tt)*]) => {
        $crate::nested::Nested::List($crate::nested![$($inner)*])
    };
    (@element $item:expr) => {
        $crate::nested::Nested::Item($item)
    };
    ($($element:tt),* $(,)?) => {
        ::std::vec::Vec::from([$($crate::nested!(@element $element)),*])
    };
}
