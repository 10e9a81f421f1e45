//! Tests for the iterator algebra.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

use pretty_assertions::assert_eq;

use super::*;
use crate::tuple::{Tuple2, Tuple3};

#[test]
fn filter_then_map_pipeline() {
    let source = vec![1, 2, 3, 4, 5];
    let evens = filter(source.into_iter(), |n| n % 2 == 0);
    let scaled = map(evens, |n| n * 10);
    assert_eq!(to_vec(scaled), vec![20, 40]);
}

#[test]
fn filter_not_inverts() {
    let odds = filter_not(vec![1, 2, 3, 4, 5].into_iter(), |n| n % 2 == 0);
    assert_eq!(to_vec(odds), vec![1, 3, 5]);
}

#[test]
fn filter_map_drops_absent() {
    let parsed = filter_map(vec!["1", "x", "3"].into_iter(), |s| s.parse::<i32>().ok());
    assert_eq!(to_vec(parsed), vec![1, 3]);
}

#[test]
fn flat_map_concatenates_subiterators() {
    let doubled = flat_map(vec![1, 2, 3].into_iter(), |n| vec![n, n]);
    assert_eq!(to_vec(doubled), vec![1, 1, 2, 2, 3, 3]);
}

#[test]
fn concat_skips_empty_sources() {
    let sources = vec![
        vec![1, 2].into_iter(),
        Vec::new().into_iter(),
        vec![3].into_iter(),
    ];
    assert_eq!(to_vec(concat_all(sources)), vec![1, 2, 3]);
}

#[test]
fn concat_two_heterogeneous_adapters() {
    let first = map(vec![1, 2].into_iter(), |n| n * 10);
    let second = vec![3].into_iter();
    let chained = concat(first, second);
    assert_eq!(to_vec(chained), vec![10, 20, 3]);
}

#[test]
fn take_is_bounded() {
    // An endless source: take must never pull more than requested.
    let pulls = Cell::new(0usize);
    let endless = core::iter::repeat_with(|| {
        pulls.set(pulls.get() + 1);
        7
    });
    let taken = to_vec(take(endless, 3));
    assert_eq!(taken, vec![7, 7, 7]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn take_past_the_end_stops_at_the_end() {
    assert_eq!(to_vec(take(vec![1, 2].into_iter(), 10)), vec![1, 2]);
    assert_eq!(to_vec(take(vec![1, 2].into_iter(), 0)), Vec::<i32>::new());
}

#[test]
fn take_while_stops_at_first_failure() {
    let prefix = take_while(vec![1, 2, 9, 1].into_iter(), |n| *n < 3);
    assert_eq!(to_vec(prefix), vec![1, 2]);
}

#[test]
fn drop_advances_eagerly() {
    let mut it = drop(vec![1, 2, 3, 4].into_iter(), 2);
    assert_eq!(it.next(), Some(3));
    assert_eq!(to_vec(it), vec![4]);
}

#[test]
fn drop_past_the_end_is_empty() {
    assert_eq!(to_vec(drop(vec![1, 2].into_iter(), 5)), Vec::<i32>::new());
}

#[test]
fn drop_while_reinjects_the_boundary_element() {
    let suffix = drop_while(vec![1, 2, 3, 4, 1].into_iter(), |n| *n < 4);
    assert_eq!(to_vec(suffix), vec![4, 1]);
}

#[test]
fn drop_while_on_all_matching_is_empty() {
    let suffix = drop_while(vec![1, 2].into_iter(), |n| *n < 10);
    assert_eq!(to_vec(suffix), Vec::<i32>::new());
}

#[test]
fn span_splits_at_the_boundary() {
    let (prefix, remainder) = span(vec![1, 2, 3, 4, 1].into_iter(), |n| *n < 4);
    assert_eq!(prefix, vec![1, 2, 3]);
    assert_eq!(to_vec(remainder), vec![4, 1]);
}

#[test]
fn span_reconstructs_the_original() {
    let source = vec![1, 2, 3, 4, 1];
    let (prefix, remainder) = span(source.clone().into_iter(), |n| *n < 4);
    let rebuilt = to_vec(concat(prefix.into_iter(), remainder));
    assert_eq!(rebuilt, source);
}

#[test]
fn zip_stops_at_the_shorter_source() {
    let pairs = zip(vec![1, 2, 3].into_iter(), vec!["a", "b", "c", "d", "e"].into_iter());
    assert_eq!(
        to_vec(pairs),
        vec![Tuple2(1, "a"), Tuple2(2, "b"), Tuple2(3, "c")]
    );
}

#[test]
fn zip_with_combines() {
    let sums = zip_with(vec![1, 2].into_iter(), vec![10, 20].into_iter(), |a, b| a + b);
    assert_eq!(to_vec(sums), vec![11, 22]);
}

#[test]
fn zip3_triples() {
    let triples = zip3(
        vec![1, 2].into_iter(),
        vec!["a", "b"].into_iter(),
        vec![true, false, true].into_iter(),
    );
    assert_eq!(
        to_vec(triples),
        vec![Tuple3(1, "a", true), Tuple3(2, "b", false)]
    );
}

#[test]
fn prepended_and_appended() {
    assert_eq!(to_vec(prepended(vec![2, 3].into_iter(), 1)), vec![1, 2, 3]);
    assert_eq!(to_vec(appended(vec![1, 2].into_iter(), 3)), vec![1, 2, 3]);
}

#[test]
fn updated_replaces_one_position() {
    assert_eq!(
        to_vec(updated(vec![1, 2, 3].into_iter(), 1, 9)),
        vec![1, 9, 3]
    );
    assert_eq!(
        to_vec(updated(vec![1, 2, 3].into_iter(), 7, 9)),
        vec![1, 2, 3]
    );
}

#[test]
fn folds_left_and_right() {
    let diff_left = fold_left(vec![1, 2, 3].into_iter(), 0, |acc, n| acc - n);
    assert_eq!(diff_left, -6);
    let diff_right = fold_right(vec![1, 2, 3].into_iter(), 0, |n, acc| n - acc);
    assert_eq!(diff_right, 2); // 1 - (2 - (3 - 0))
}

#[test]
fn reduce_fails_on_empty() {
    assert_eq!(
        reduce(Vec::<i32>::new().into_iter(), |a, b| a + b),
        Err(crate::Error::EmptySource)
    );
    assert_eq!(reduce(vec![1, 2, 3].into_iter(), |a, b| a + b), Ok(6));
    assert_eq!(reduce_option(Vec::<i32>::new().into_iter(), |a, b| a + b), None);
}

#[test]
fn extrema() {
    assert_eq!(max(vec![3, 1, 4].into_iter()), Ok(4));
    assert_eq!(min(vec![3, 1, 4].into_iter()), Ok(1));
    assert_eq!(max_option(Vec::<i32>::new().into_iter()), None);
    assert_eq!(min(Vec::<i32>::new().into_iter()), Err(crate::Error::EmptySource));
}

#[test]
fn first_and_last() {
    assert_eq!(first(vec![1, 2].into_iter()), Ok(1));
    assert_eq!(last(vec![1, 2].into_iter()), Ok(2));
    assert_eq!(first(Vec::<i32>::new().into_iter()), Err(crate::Error::EmptySource));
    assert_eq!(last_option(Vec::<i32>::new().into_iter()), None);
}

#[test]
fn searching() {
    assert_eq!(index_of(vec![5, 6, 7].into_iter(), &6), Some(1));
    assert_eq!(index_of(vec![5, 6, 7].into_iter(), &9), None);
    assert_eq!(index_where(vec![5, 6, 7].into_iter(), |n| *n > 5), Some(1));
    assert!(contains(vec![5, 6, 7].into_iter(), &7));
    assert!(all(vec![2, 4].into_iter(), |n| n % 2 == 0));
    assert!(any(vec![1, 4].into_iter(), |n| n % 2 == 0));
    assert!(none(vec![1, 3].into_iter(), |n| n % 2 == 0));
}

#[test]
fn join_streams_in_one_pass() {
    let mut out = String::new();
    join_to(&mut out, vec![1, 2, 3].into_iter(), ", ", "[", "]").unwrap();
    assert_eq!(out, "[1, 2, 3]");
    assert_eq!(join_to_string(vec![1, 2, 3].into_iter(), "-"), "1-2-3");
    assert_eq!(join_to_string(Vec::<i32>::new().into_iter(), "-"), "");
}

#[test]
fn adapters_are_lazy_until_consumed() {
    let calls = Cell::new(0usize);
    let mapped = map(vec![1, 2, 3].into_iter(), |n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    // Construction alone must not invoke the transform.
    assert_eq!(calls.get(), 0);
    let collected = to_vec(mapped);
    assert_eq!(collected, vec![2, 4, 6]);
    assert_eq!(calls.get(), 3);
}
