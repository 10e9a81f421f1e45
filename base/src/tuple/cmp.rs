//! Tuple comparator combinators.
//!
//! The fixed arities already order lexicographically through their derived
//! `Ord` when every element type is `Ord`. The combinators here cover the
//! other cases: building an ordering out of per-position comparators
//! (`lex1`..`lex9`), and comparing type-erased tuples position by position
//! (`compare_dyn`).

use core::any::Any;
use core::cmp::Ordering;

use super::{AnyTuple, Element};
use super::{Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8, Tuple9};
use crate::Error;

macro_rules! lex_comparators {
    ($(
        $(#[$doc:meta])*
        $fname:ident => $tuple:ident ($(($c:ident $T:ident $i:tt))+);
    )+) => {
        $(
            $(#[$doc])*
            pub fn $fname<$($T),+>(
                $($c: impl Fn(&$T, &$T) -> Ordering),+
            ) -> impl Fn(&$tuple<$($T),+>, &$tuple<$($T),+>) -> Ordering {
                move |a, b| {
                    $(
                        let ordering = $c(&a.$i, &b.$i);
                        if ordering != Ordering::Equal {
                            return ordering;
                        }
                    )+
                    Ordering::Equal
                }
            }
        )+
    };
}

lex_comparators! {
    /// Compare [`Tuple1`]s with the given element comparator.
    lex1 => Tuple1 ((c1 T1 0));
    /// Compare [`Tuple2`]s lexicographically with per-position comparators.
    lex2 => Tuple2 ((c1 T1 0) (c2 T2 1));
    /// Compare [`Tuple3`]s lexicographically with per-position comparators.
    lex3 => Tuple3 ((c1 T1 0) (c2 T2 1) (c3 T3 2));
    /// Compare [`Tuple4`]s lexicographically with per-position comparators.
    lex4 => Tuple4 ((c1 T1 0) (c2 T2 1) (c3 T3 2) (c4 T4 3));
    /// Compare [`Tuple5`]s lexicographically with per-position comparators.
    lex5 => Tuple5 ((c1 T1 0) (c2 T2 1) (c3 T3 2) (c4 T4 3) (c5 T5 4));
    /// Compare [`Tuple6`]s lexicographically with per-position comparators.
    lex6 => Tuple6 ((c1 T1 0) (c2 T2 1) (c3 T3 2) (c4 T4 3) (c5 T5 4) (c6 T6 5));
    /// Compare [`Tuple7`]s lexicographically with per-position comparators.
    lex7 => Tuple7 ((c1 T1 0) (c2 T2 1) (c3 T3 2) (c4 T4 3) (c5 T5 4) (c6 T6 5) (c7 T7 6));
    /// Compare [`Tuple8`]s lexicographically with per-position comparators.
    lex8 => Tuple8 ((c1 T1 0) (c2 T2 1) (c3 T3 2) (c4 T4 3) (c5 T5 4) (c6 T6 5) (c7 T7 6) (c8 T8 7));
    /// Compare [`Tuple9`]s lexicographically with per-position comparators.
    lex9 => Tuple9 ((c1 T1 0) (c2 T2 1) (c3 T3 2) (c4 T4 3) (c5 T5 4) (c6 T6 5) (c7 T7 6) (c8 T8 7) (c9 T9 8));
}

/// A per-position comparator over erased elements.
///
/// Returns `None` when the runtime types at that position are not the ones
/// the comparator was built for.
pub type ElementCmp<'a> = &'a dyn Fn(&dyn Element, &dyn Element) -> Option<Ordering>;

/// Build an [`ElementCmp`]-compatible comparator from a type's `Ord`.
pub fn ord_cmp<T: Ord + Any>() -> impl Fn(&dyn Element, &dyn Element) -> Option<Ordering> {
    |a, b| {
        let a = a.as_any().downcast_ref::<T>()?;
        let b = b.as_any().downcast_ref::<T>()?;
        Some(a.cmp(b))
    }
}

/// Build an [`ElementCmp`]-compatible comparator from an arbitrary typed
/// comparison function.
pub fn cmp_by<T: Any>(
    cmp: impl Fn(&T, &T) -> Ordering,
) -> impl Fn(&dyn Element, &dyn Element) -> Option<Ordering> {
    move |a, b| {
        let a = a.as_any().downcast_ref::<T>()?;
        let b = b.as_any().downcast_ref::<T>()?;
        Some(cmp(a, b))
    }
}

/// Compare two erased tuples lexicographically with one comparator per
/// position.
///
/// Both tuples and the comparator list must agree on arity; a disagreement
/// is reported as [`Error::ArityMismatch`] rather than coerced or allowed
/// to surface as a downcast failure. A comparator that rejects the runtime
/// types at its position reports [`Error::TypeMismatch`].
pub fn compare_dyn(
    a: &dyn AnyTuple,
    b: &dyn AnyTuple,
    positions: &[ElementCmp<'_>],
) -> Result<Ordering, Error> {
    if a.arity() != b.arity() {
        return Err(Error::ArityMismatch {
            left: a.arity(),
            right: b.arity(),
        });
    }
    if positions.len() != a.arity() {
        return Err(Error::ArityMismatch {
            left: a.arity(),
            right: positions.len(),
        });
    }
    for (index, cmp) in positions.iter().enumerate() {
        let ordering = cmp(a.element(index)?, b.element(index)?)
            .ok_or(Error::TypeMismatch { index })?;
        if ordering != Ordering::Equal {
            return Ok(ordering);
        }
    }
    Ok(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::Tuple2;

    #[test]
    fn lex2_short_circuits_on_first_position() {
        let cmp = lex2(i64::cmp, i64::cmp);
        assert_eq!(cmp(&Tuple2(1, 9), &Tuple2(2, 0)), Ordering::Less);
        assert_eq!(cmp(&Tuple2(3, 0), &Tuple2(2, 9)), Ordering::Greater);
    }

    #[test]
    fn lex2_falls_through_to_second_position() {
        let cmp = lex2(i64::cmp, i64::cmp);
        assert_eq!(cmp(&Tuple2(1, 2), &Tuple2(1, 3)), Ordering::Less);
        assert_eq!(cmp(&Tuple2(1, 3), &Tuple2(1, 3)), Ordering::Equal);
    }

    #[test]
    fn compare_dyn_orders_by_position() {
        let a = Tuple2(1i64, "b");
        let b = Tuple2(1i64, "c");
        let by_int = ord_cmp::<i64>();
        let by_str = ord_cmp::<&str>();
        let result = compare_dyn(&a, &b, &[&by_int, &by_str]);
        assert_eq!(result, Ok(Ordering::Less));
    }

    #[test]
    fn compare_dyn_rejects_arity_mismatch() {
        let a = Tuple2(1i64, 2i64);
        let b = crate::tuple::Tuple3(1i64, 2i64, 3i64);
        let by_int = ord_cmp::<i64>();
        let result = compare_dyn(&a, &b, &[&by_int, &by_int]);
        assert_eq!(
            result,
            Err(Error::ArityMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn compare_dyn_reports_type_mismatch() {
        let a = Tuple2(1i64, "x");
        let b = Tuple2(1i64, "x");
        let by_int = ord_cmp::<i64>();
        let result = compare_dyn(&a, &b, &[&by_int, &by_int]);
        assert_eq!(result, Err(Error::TypeMismatch { index: 1 }));
    }
}
