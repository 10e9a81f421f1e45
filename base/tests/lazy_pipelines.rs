//! End-to-end pipelines through the iterator algebra.

use std::cell::Cell;

use pretty_assertions::assert_eq;

use vantage_base::iter;
use vantage_base::primitive::{BitSeq, NumSliceExt};
use vantage_base::tuple::Tuple2;

#[test]
fn composed_pipeline_runs_once_per_element() {
    let filter_calls = Cell::new(0usize);
    let map_calls = Cell::new(0usize);

    let source = vec![1, 2, 3, 4, 5, 6];
    let pipeline = iter::take(
        iter::map(
            iter::filter(source.into_iter(), |n| {
                filter_calls.set(filter_calls.get() + 1);
                n % 2 == 0
            }),
            |n| {
                map_calls.set(map_calls.get() + 1);
                n * 10
            },
        ),
        2,
    );
    // Nothing has been pulled yet.
    assert_eq!(filter_calls.get(), 0);
    assert_eq!(map_calls.get(), 0);

    let result = iter::to_vec(pipeline);
    assert_eq!(result, vec![20, 40]);
    // take(2) stopped the filter after the second hit.
    assert_eq!(filter_calls.get(), 4);
    assert_eq!(map_calls.get(), 2);
}

#[test]
fn concat_of_mixed_emptiness() {
    let chained = iter::concat_all(vec![
        vec![1, 2].into_iter(),
        Vec::new().into_iter(),
        vec![3].into_iter(),
    ]);
    assert_eq!(iter::to_vec(chained), vec![1, 2, 3]);
}

#[test]
fn drop_while_then_concat_reconstructs_suffix_split() {
    let source = vec![1, 2, 3, 4, 1];
    let prefix = iter::to_vec(iter::take_while(source.clone().into_iter(), |n| *n < 4));
    let suffix = iter::drop_while(source.clone().into_iter(), |n| *n < 4);
    let rebuilt = iter::to_vec(iter::concat(prefix.into_iter(), suffix));
    assert_eq!(rebuilt, source);
}

#[test]
fn zip_length_mismatch() {
    let pairs = iter::zip(vec![1, 2, 3].into_iter(), vec![10, 20, 30, 40, 50].into_iter());
    let pairs = iter::to_vec(pairs);
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[2], Tuple2(3, 30));
}

#[test]
fn flat_map_feeds_fold() {
    let expanded = iter::flat_map(vec![1, 2, 3].into_iter(), |n| 0..n);
    let total = iter::fold_left(expanded, 0, |acc, n| acc + n);
    assert_eq!(total, 0 + (0 + 1) + (0 + 1 + 2));
}

#[test]
fn packed_bits_feed_the_generic_algebra() {
    let seq: BitSeq = (0..10).map(|i| i % 2 == 0).collect();
    assert_eq!(seq.count_ones(), 5);
    let as_ints = iter::map(seq.iter(), |bit| if bit { 1 } else { 0 });
    assert_eq!(iter::to_vec(as_ints), vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 0]);
}

#[test]
fn specialized_slice_terminals_agree_with_generic_ones() {
    let values = vec![3i64, 1, 4, 1, 5];
    assert_eq!(
        values.as_slice().max_value().unwrap(),
        iter::max(values.iter().copied()).unwrap()
    );
    assert_eq!(
        values.as_slice().sum_all(),
        iter::fold_left(values.iter().copied(), 0, |a, b| a + b)
    );
}
