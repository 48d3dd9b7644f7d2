//! Shared-contract tests run against both deque variants.

use crate::{ArrayDeque, Deque, LinkedDeque};

fn check_fifo<D: Deque<i32>>(mut d: D) {
    for i in 0..10 {
        d.push_back(i);
    }
    for i in 0..10 {
        assert_eq!(d.pop_front(), Some(i));
    }
    assert_eq!(d.pop_front(), None);
}

fn check_reversed<D: Deque<i32>>(mut d: D) {
    for i in 0..10 {
        d.push_front(i);
    }
    for i in 0..10 {
        assert_eq!(d.pop_back(), Some(i));
    }
    assert_eq!(d.pop_back(), None);
}

fn check_empty_accessors<D: Deque<i32>>(mut d: D) {
    assert_eq!(d.len(), 0);
    assert!(d.is_empty());

    assert_eq!(d.front(), None);
    assert_eq!(d.back(), None);
    assert_eq!(d.pop_front(), None);
    assert_eq!(d.pop_back(), None);

    assert_eq!(d.front_or_default(), 0);
    assert_eq!(d.back_or_default(), 0);
    assert_eq!(d.pop_front_or_default(), 0);
    assert_eq!(d.pop_back_or_default(), 0);
}

fn check_or_default_with_values<D: Deque<i32>>(mut d: D) {
    d.push_back(7);
    d.push_back(9);
    assert_eq!(d.front_or_default(), 7);
    assert_eq!(d.back_or_default(), 9);
    assert_eq!(d.pop_front_or_default(), 7);
    assert_eq!(d.pop_back_or_default(), 9);
    assert_eq!(d.pop_back_or_default(), 0);
}

fn check_peek_each<D: Deque<i32>>(mut d: D) {
    for i in 0..5 {
        d.push_back(i);
    }

    let mut from_front = Vec::new();
    d.peek_each_front(|&x| {
        from_front.push(x);
        true
    });
    assert_eq!(from_front, vec![0, 1, 2, 3, 4]);

    let mut from_back = Vec::new();
    d.peek_each_back(|&x| {
        from_back.push(x);
        x > 2
    });
    assert_eq!(from_back, vec![4, 3, 2]);

    // Peeking is non-destructive.
    assert_eq!(d.len(), 5);
}

fn check_peek_each_empty<D: Deque<i32>>(d: D) {
    d.peek_each_front(|_| panic!("must not be called on an empty deque"));
    d.peek_each_back(|_| panic!("must not be called on an empty deque"));
}

fn check_pop_each<D: Deque<i32>>(mut d: D) {
    for i in 0..5 {
        d.push_back(i);
    }

    let mut drained = Vec::new();
    d.pop_each_front(|x| {
        drained.push(x);
        x < 2
    });
    assert_eq!(drained, vec![0, 1, 2]);
    assert_eq!(d.len(), 2);

    let mut rest = Vec::new();
    d.pop_each_back(|x| {
        rest.push(x);
        true
    });
    assert_eq!(rest, vec![4, 3]);
    assert!(d.is_empty());
}

#[test]
fn test_fifo_round_trip() {
    check_fifo(ArrayDeque::new());
    check_fifo(LinkedDeque::new());
}

#[test]
fn test_push_front_pop_back_round_trip() {
    check_reversed(ArrayDeque::new());
    check_reversed(LinkedDeque::new());
}

#[test]
fn test_empty_accessors() {
    check_empty_accessors(ArrayDeque::new());
    check_empty_accessors(LinkedDeque::new());
}

#[test]
fn test_or_default_accessors() {
    check_or_default_with_values(ArrayDeque::new());
    check_or_default_with_values(LinkedDeque::new());
}

#[test]
fn test_peek_each() {
    check_peek_each(ArrayDeque::new());
    check_peek_each(LinkedDeque::new());
}

#[test]
fn test_peek_each_on_empty_is_noop() {
    check_peek_each_empty(ArrayDeque::new());
    check_peek_each_empty(LinkedDeque::new());
}

#[test]
fn test_pop_each() {
    check_pop_each(ArrayDeque::new());
    check_pop_each(LinkedDeque::new());
}

#[test]
fn test_len_tracks_mutations() {
    fn check<D: Deque<i32>>(mut d: D) {
        assert_eq!(d.len(), 0);
        d.push_front(1);
        d.push_back(2);
        assert_eq!(d.len(), 2);
        d.pop_front();
        assert_eq!(d.len(), 1);
        d.pop_back();
        assert_eq!(d.len(), 0);
    }
    check(ArrayDeque::new());
    check(LinkedDeque::new());
}
