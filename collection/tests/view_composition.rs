//! View chains the way downstream code composes them.

use std::cell::Cell;

use pretty_assertions::assert_eq;

use vantage_base::tuple::Tuple2;
use vantage_collection::array_seq::ArraySeq;
use vantage_collection::factory::VecFactory;
use vantage_collection::like::CollectionLike;
use vantage_collection::view::{CollectionView, Indexed, SeqView, View};
use vantage_collection::traverse::Traversable;

#[test]
fn long_chain_stays_lazy_until_materialized() {
    let source: ArraySeq<i32> = (0..100).collect();
    let work = Cell::new(0usize);

    let view = source
        .view()
        .map(|n| {
            work.set(work.get() + 1);
            n * 2
        })
        .filter(|n| n % 3 == 0)
        .drop(2)
        .take(4);

    assert_eq!(work.get(), 0);
    // map runs only as far as the chain pulls: filter keeps multiples of
    // six; drop(2) discards 0 and 6; take(4) keeps 12, 18, 24, 30.
    assert_eq!(view.to_vec(), vec![12, 18, 24, 30]);
    assert_eq!(work.get(), 16);
}

#[test]
fn chains_are_reusable_values() {
    let source: ArraySeq<i32> = (1..=4).collect();
    let doubled = source.view().map(|n| n * 2);

    // A view is a value: it can be traversed, then traversed again, and
    // composed further each time.
    assert_eq!(doubled.to_vec(), vec![2, 4, 6, 8]);
    let sum = doubled.fold(0, |acc, n| acc + n);
    assert_eq!(sum, 20);
    assert_eq!(doubled.take(2).to_vec(), vec![2, 4]);
}

#[test]
fn collect_with_alternate_factory() {
    let source: ArraySeq<i32> = (1..=3).collect();
    let vec = source.view().map(|n| n * 10).collect_with(&VecFactory::new());
    assert_eq!(vec, vec![10, 20, 30]);
}

#[test]
fn sorted_then_indexed_take() {
    let source: ArraySeq<i32> = [5, 1, 4, 2, 3].into_iter().collect();
    let smallest_two = source.view().sorted().take(2).to_vec();
    assert_eq!(smallest_two, vec![1, 2]);
}

#[test]
fn random_access_survives_a_full_ordered_chain() {
    let source: ArraySeq<i32> = (0..10).collect();
    let chain = source
        .view()
        .slice(1, 9) // 1..=8
        .reversed() // 8..=1
        .updated(0, 100) // 100, 7, 6, ..., 1
        .map(|n| n + 1); // 101, 8, 7, ..., 2

    assert_eq!(chain.len(), 8);
    assert_eq!(chain.get(0), Some(101));
    assert_eq!(chain.get(1), Some(8));
    assert_eq!(chain.get(7), Some(2));
    assert_eq!(chain.get(8), None);
    assert_eq!(
        chain.to_vec(),
        vec![101, 8, 7, 6, 5, 4, 3, 2]
    );
}

#[test]
fn zip_of_indexed_views_is_indexed() {
    let a: ArraySeq<i32> = (0..5).collect();
    let b: ArraySeq<i32> = (0..3).map(|n| n * 10).collect();
    let zipped = a.view().zip(b.view());
    assert_eq!(zipped.len(), 3);
    assert_eq!(zipped.get(2), Some(Tuple2(2, 20)));
    assert_eq!(zipped.get(3), None);
}

#[test]
fn distinct_then_sorted_pipeline() {
    let source: ArraySeq<i32> = [3, 1, 3, 2, 1].into_iter().collect();
    let cleaned = source.view().distinct().sorted().to_vec();
    assert_eq!(cleaned, vec![1, 2, 3]);
}

#[test]
fn flat_map_over_views() {
    let source: ArraySeq<i32> = (1..=3).collect();
    let repeated = source.view().flat_map(|n| vec![n; n as usize]).to_vec();
    assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
}

#[test]
fn empty_source_short_circuits_everything() {
    let source = ArraySeq::<i32>::empty();
    let sized = source.view().map(|n| n * 2).take(10);
    // Size-preserving wrappers keep the zero size statically known.
    assert_eq!(sized.known_size(), Some(0));

    let filtered = source.view().map(|n| n * 2).filter(|_| true).take(10);
    // A filter gives up the static size, but traversal still yields
    // nothing.
    assert_eq!(filtered.known_size(), None);
    assert!(filtered.to_vec().is_empty());
}
