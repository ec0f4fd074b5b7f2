#![cfg(test)]

use super::*;

#[test]
fn test_first() {
    assert_eq!(first(&[10, 20, 30]), Some(&10));
    assert_eq!(first::<u8>(&[]), None);

    assert_eq!(first_n(&[10, 20, 30], 2), [10, 20]);
    assert_eq!(
        first_n(&[10, 20, 30], 5),
        [10, 20, 30],
        "Asking for more elements than exist should return them all."
    );
    assert!(first_n(&[10, 20, 30], 0).is_empty());
    assert!(first_n::<u8>(&[], 3).is_empty());
}

#[test]
fn test_last() {
    assert_eq!(last(&[10, 20, 30]), Some(&30));
    assert_eq!(last::<u8>(&[]), None);

    assert_eq!(last_n(&[10, 20, 30], 2), [20, 30]);
    assert_eq!(last_n(&[10, 20, 30], 3), [10, 20, 30]);
    assert_eq!(last_n(&[10, 20, 30], usize::MAX), [10, 20, 30]);
    assert!(last_n::<u8>(&[], 1).is_empty());
}

#[test]
fn test_last_zero_is_empty() {
    assert_eq!(
        last_n(&[10, 20, 30], 0),
        [0; 0],
        "A count of 0 should return nothing, not the whole array."
    );
}

#[test]
fn test_slices_borrow_input() {
    let vec = vec![1, 2, 3, 4];

    let head = first_n(&vec, 2);
    let tail = last_n(&vec, 2);

    assert!(std::ptr::eq(head.as_ptr(), vec.as_ptr()));
    assert!(std::ptr::eq(tail.as_ptr(), &vec[2]));
    assert_eq!(vec, [1, 2, 3, 4], "The input should be left unchanged.");
}
