//! Exercises the re-exported surface end to end, the way a downstream
//! crate would use it.

use pretty_assertions::assert_eq;

use vantage::Error;
use vantage::base::iter;
use vantage::base::tuple::{Tuple2, Tuple3};
use vantage::collection::ArraySeq;
use vantage::prelude::*;
use vantage::tuple;

#[test]
fn tuple_surface() {
    let t = tuple!(1i64, "a", true);
    assert_eq!(t.arity(), 3);
    assert_eq!(t, Tuple3(1i64, "a", true));
    assert_eq!(
        t.element(3).unwrap_err(),
        Error::IndexOutOfBounds { index: 3, len: 3 }
    );

    let grown = t.cons(0u8);
    assert_eq!(grown.arity(), 4);
    assert_eq!(grown.tail(), Tuple3(1i64, "a", true));
}

#[test]
fn view_pipeline_surface() {
    let seq: ArraySeq<i32> = (1..=10).collect();
    let result = seq
        .view()
        .filter(|n| n % 2 == 0)
        .map(|n| n * n)
        .take(3)
        .to_seq();
    assert_eq!(result.as_slice(), &[4, 16, 36]);
}

#[test]
fn collection_ops_surface() {
    let seq: ArraySeq<i32> = (1..=5).collect();
    assert_eq!(seq.map(|n| n + 1).as_slice(), &[2, 3, 4, 5, 6]);
    assert_eq!(seq.filter(|n| *n > 3).as_slice(), &[4, 5]);
    assert_eq!(seq.first(), Ok(1));
    assert_eq!(seq.index_of(&4), Some(3));
    assert_eq!(seq.binary_search(&3), Ok(2));
    assert_eq!(seq.binary_search(&6), Err(5));
}

#[test]
fn zip_yields_library_tuples() {
    let numbers: ArraySeq<i32> = (1..=3).collect();
    let letters: ArraySeq<&str> = ["a", "b"].into_iter().collect();
    let pairs = numbers.zip(&letters);
    assert_eq!(pairs.as_slice(), &[Tuple2(1, "a"), Tuple2(2, "b")]);
}

#[test]
fn algebra_surface() {
    let joined = iter::join_to_string(
        iter::map([1, 2, 3].into_iter(), |n| n * 2),
        ", ",
    );
    assert_eq!(joined, "2, 4, 6");

    assert_eq!(
        iter::reduce(std::iter::empty::<i32>(), |a, b| a + b),
        Err(Error::EmptySource)
    );
}
