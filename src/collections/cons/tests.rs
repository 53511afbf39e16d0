#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_structural_sharing() {
    let base = [2, 3].into_iter().collect::<ConsList<_>>();
    let one = base.cons(1);
    let nine = base.cons(9);

    assert!(
        one.tail().ptr_eq(&base),
        "The tail of a consed list should be the original list's nodes."
    );
    assert_eq!(one.tail(), nine.tail());
    assert_eq!(one.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(nine.iter().copied().collect::<Vec<_>>(), [9, 2, 3]);
    assert_eq!(base.len(), 2, "Consing shouldn't modify the original list.");
}

#[test]
fn test_head_and_tail() {
    let list = ConsList::new().cons("b").cons("a");
    assert_eq!(list.head(), Some(&"a"));
    assert_eq!(list.tail().head(), Some(&"b"));
    assert!(list.tail().tail().is_empty());

    let empty = ConsList::<u8>::new();
    assert_eq!(empty.head(), None);
    assert_eq!(empty.try_tail(), Err(EmptySequence));
    assert_panics!({
        empty.tail();
    }, with "Sequence is empty!");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let list = iter::repeat_with(|| counter.clone())
        .take(100_000)
        .collect::<ConsList<_>>();

    drop(list);

    assert_eq!(
        counter.get(),
        100_000,
        "Every element of a long list should be dropped without overflowing the stack."
    );

    let counter = CountedDrop::new(0);
    let list = iter::repeat_with(|| counter.clone()).take(10).collect::<ConsList<_>>();
    let tail = list.tail();

    drop(list);
    assert_eq!(counter.get(), 1, "Nodes still shared by another list should survive.");

    drop(tail);
    assert_eq!(counter.get(), 10);
}

#[test]
fn test_equality_and_hash() {
    let list = (0..5).collect::<ConsList<_>>();
    let state = RandomState::new();

    assert_eq!(
        list,
        ConsList::new().cons(4).cons(3).cons(2).cons(1).cons(0),
        "Different construction methods should produce equal results."
    );
    assert_ne!(list, (0..4).collect::<ConsList<_>>());
    assert_eq!(state.hash_one(&list), state.hash_one(list.clone()));
    assert!(list.contains(&3));
    assert!(!list.contains(&7));
}

#[test]
fn test_formatting() {
    let list = (1..=3).collect::<ConsList<_>>();
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "ConsList([1, 2, 3])");
    assert_eq!(format!("{}", ConsList::<i32>::new()), "()");
}

#[cfg(feature = "thunk")]
#[test]
fn test_lazy_view() {
    use crate::collections::thunk::Thunk;

    let list = (1..=3).collect::<ConsList<_>>();
    assert_eq!(list.to_thunk().map(|x| x * 2).to_vec(), [2, 4, 6]);
    assert_eq!(Thunk::from(list.cons(0)).take(2).to_vec(), [0, 1]);
    assert_eq!(list.len(), 3, "Viewing a list lazily shouldn't consume it.");
}
