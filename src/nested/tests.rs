#![cfg(test)]

use super::*;
use crate::nested;

#[test]
fn test_macro_shape() {
    assert_eq!(
        nested![1, [2, [3]], 4],
        vec![
            Nested::Item(1),
            Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
            Nested::Item(4),
        ]
    );
    assert_eq!(nested![[], (1 + 1)], vec![Nested::List(vec![]), Nested::Item(2)]);
    assert_eq!(format!("{:?}", nested![1, [2, [3]], 4]), "[1, [2, [3]], 4]");

    let empty: Vec<Nested<u8>> = nested![];
    assert!(empty.is_empty(), "An empty invocation should produce an empty Vec.");
}

#[test]
fn test_flatten_deep() {
    assert_eq!(flatten(&nested![1, [2, [3]], 4], Depth::Deep), nested![1, 2, 3, 4]);
    assert_eq!(
        flatten(&nested![[[[]]], [[1], [], [[2, 3]]], 4], Depth::Deep),
        nested![1, 2, 3, 4],
        "Empty lists at any depth should contribute nothing."
    );
    assert_eq!(flatten(&nested![[[["x"]]]], Depth::default()), nested!["x"]);
}

#[test]
fn test_flatten_shallow() {
    assert_eq!(
        flatten(&nested![1, [2, [3]], 4], Depth::Shallow),
        nested![1, 2, [3], 4],
        "Lists inside lists should be kept as single elements."
    );
    assert_eq!(
        flatten(&nested![[[1, [2]]], [], 3], true.into()),
        nested![[1, [2]], 3]
    );
}

#[test]
fn test_flatten_flat_input() {
    let flat = nested![5, 6, 7];

    assert_eq!(
        flatten(&flat, Depth::Deep),
        flat,
        "Flattening an array with no lists should produce an equal array."
    );
    assert_eq!(flatten(&flat, Depth::Shallow), flat);
    assert!(flatten::<u8>(&[], Depth::Deep).is_empty());
}

#[test]
fn test_flatten_into_keeps_accumulator() {
    let mut acc = nested!["start"];

    flatten_into(&nested![["a"], [["b"]]], Depth::Deep, &mut acc);
    flatten_into(&nested![["c", ["d"]]], Depth::Shallow, &mut acc);

    assert_eq!(acc, nested!["start", "a", "b", "c", ["d"]]);
}

#[test]
fn test_flatten_deep_items() {
    assert_eq!(flatten_deep(&nested![1, [2, [3]], 4]), [1, 2, 3, 4]);
    assert!(flatten_deep::<u8>(&nested![[], [[]]]).is_empty());
}

#[test]
fn test_flatten_very_deep() {
    let mut element = Nested::Item(42);
    for _ in 0..100_000 {
        element = Nested::List(vec![element]);
    }
    let array = vec![Nested::Item(0), element, Nested::Item(1)];

    assert_eq!(
        flatten_deep(&array),
        [0, 42, 1],
        "Deep nesting shouldn't exhaust the call stack."
    );

    // Dropping is recursive, so unwrap the levels by hand.
    let mut element = array.into_iter().nth(1);
    while let Some(Nested::List(mut list)) = element {
        element = list.pop();
    }
}

#[test]
fn test_depth() {
    assert_eq!(Nested::Item(1).depth(), 0);
    assert_eq!(Nested::<u8>::List(vec![]).depth(), 1);
    assert_eq!(Nested::from(nested![1, [2, [3]], [4]]).depth(), 3);

    assert!(Nested::Item(()).is_item());
    assert!(Nested::<()>::List(vec![]).is_list());
    assert_eq!(Nested::Item('a').into_item(), Some('a'));
    assert_eq!(Nested::<char>::List(vec![]).into_item(), None);
}

#[test]
fn test_depth_from_flag() {
    assert_eq!(Depth::from(true), Depth::Shallow);
    assert_eq!(Depth::from(false), Depth::Deep);
    assert_eq!(Depth::default(), Depth::Deep);
}
