//! The wrapper types returned by the view transforms.
//!
//! Each is a thin value holding its source view (and, where applicable, a
//! `Fn` closure, so the chain stays re-iterable). The [`Traversable`]
//! impls delegate to the iterator algebra in `vantage_base::iter`; the
//! ladder impls ([`View`]/[`CollectionView`]/[`SeqView`]) are empty, since
//! every operation is a trait default. [`Indexed`] is implemented only
//! where the wrapper's shape keeps random access intact.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::Hash;

use hashbrown::HashSet;
use vantage_base::iter;
use vantage_base::tuple::Tuple2;

use super::{CollectionView, Indexed, SeqView, View};
use crate::traverse::Traversable;

/// See [`CollectionView::map`].
#[derive(Clone)]
pub struct Mapped<S, F> {
    pub(crate) source: S,
    pub(crate) f: F,
}

impl<B, S: Traversable, F: Fn(S::Item) -> B> Traversable for Mapped<S, F> {
    type Item = B;

    fn iter(&self) -> impl Iterator<Item = B> {
        iter::map(self.source.iter(), &self.f)
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

impl<B, S: View, F: Fn(S::Item) -> B> View for Mapped<S, F> {}
impl<B, S: CollectionView, F: Fn(S::Item) -> B> CollectionView for Mapped<S, F> {}
impl<B, S: SeqView, F: Fn(S::Item) -> B> SeqView for Mapped<S, F> {}

impl<B, S: Indexed, F: Fn(S::Item) -> B> Indexed for Mapped<S, F> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<B> {
        self.source.get(index).map(|value| (self.f)(value))
    }
}

/// See [`CollectionView::filter`].
#[derive(Clone)]
pub struct Filtered<S, P> {
    pub(crate) source: S,
    pub(crate) pred: P,
}

impl<S: Traversable, P: Fn(&S::Item) -> bool> Traversable for Filtered<S, P> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::filter(self.source.iter(), &self.pred)
    }
}

impl<S: View, P: Fn(&S::Item) -> bool> View for Filtered<S, P> {}
impl<S: CollectionView, P: Fn(&S::Item) -> bool> CollectionView for Filtered<S, P> {}
impl<S: SeqView, P: Fn(&S::Item) -> bool> SeqView for Filtered<S, P> {}

/// See [`CollectionView::filter_not`].
#[derive(Clone)]
pub struct FilteredNot<S, P> {
    pub(crate) source: S,
    pub(crate) pred: P,
}

impl<S: Traversable, P: Fn(&S::Item) -> bool> Traversable for FilteredNot<S, P> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::filter_not(self.source.iter(), &self.pred)
    }
}

impl<S: View, P: Fn(&S::Item) -> bool> View for FilteredNot<S, P> {}
impl<S: CollectionView, P: Fn(&S::Item) -> bool> CollectionView for FilteredNot<S, P> {}
impl<S: SeqView, P: Fn(&S::Item) -> bool> SeqView for FilteredNot<S, P> {}

/// See [`CollectionView::filter_map`].
#[derive(Clone)]
pub struct FilterMapped<S, F> {
    pub(crate) source: S,
    pub(crate) f: F,
}

impl<B, S: Traversable, F: Fn(S::Item) -> Option<B>> Traversable for FilterMapped<S, F> {
    type Item = B;

    fn iter(&self) -> impl Iterator<Item = B> {
        iter::filter_map(self.source.iter(), &self.f)
    }
}

impl<B, S: View, F: Fn(S::Item) -> Option<B>> View for FilterMapped<S, F> {}
impl<B, S: CollectionView, F: Fn(S::Item) -> Option<B>> CollectionView for FilterMapped<S, F> {}
impl<B, S: SeqView, F: Fn(S::Item) -> Option<B>> SeqView for FilterMapped<S, F> {}

/// See [`CollectionView::flat_map`].
#[derive(Clone)]
pub struct FlatMapped<S, F> {
    pub(crate) source: S,
    pub(crate) f: F,
}

impl<S, F, J> Traversable for FlatMapped<S, F>
where
    S: Traversable,
    F: Fn(S::Item) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    fn iter(&self) -> impl Iterator<Item = J::Item> {
        iter::flat_map(self.source.iter(), &self.f)
    }
}

impl<S: View, F: Fn(S::Item) -> J, J: IntoIterator> View for FlatMapped<S, F> {}
impl<S: CollectionView, F: Fn(S::Item) -> J, J: IntoIterator> CollectionView for FlatMapped<S, F> {}
impl<S: SeqView, F: Fn(S::Item) -> J, J: IntoIterator> SeqView for FlatMapped<S, F> {}

/// See [`CollectionView::zip`].
#[derive(Clone)]
pub struct Zipped<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
}

impl<A: Traversable, B: Traversable> Traversable for Zipped<A, B> {
    type Item = Tuple2<A::Item, B::Item>;

    fn iter(&self) -> impl Iterator<Item = Self::Item> {
        iter::zip(self.a.iter(), self.b.iter())
    }

    fn known_size(&self) -> Option<usize> {
        match (self.a.known_size(), self.b.known_size()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            _ => None,
        }
    }
}

impl<A: View, B: Traversable> View for Zipped<A, B> {}
impl<A: CollectionView, B: Traversable> CollectionView for Zipped<A, B> {}
impl<A: SeqView, B: Traversable> SeqView for Zipped<A, B> {}

impl<A: Indexed, B: Indexed> Indexed for Zipped<A, B> {
    fn len(&self) -> usize {
        self.a.len().min(self.b.len())
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        Some(Tuple2(self.a.get(index)?, self.b.get(index)?))
    }
}

/// See [`CollectionView::zip3`].
#[derive(Clone)]
pub struct Zipped3<A, B, C> {
    pub(crate) a: A,
    pub(crate) b: B,
    pub(crate) c: C,
}

impl<A, B, C> Traversable for Zipped3<A, B, C>
where
    A: Traversable,
    B: Traversable,
    C: Traversable,
{
    type Item = vantage_base::tuple::Tuple3<A::Item, B::Item, C::Item>;

    fn iter(&self) -> impl Iterator<Item = Self::Item> {
        iter::zip3(self.a.iter(), self.b.iter(), self.c.iter())
    }
}

impl<A: View, B: Traversable, C: Traversable> View for Zipped3<A, B, C> {}
impl<A: CollectionView, B: Traversable, C: Traversable> CollectionView for Zipped3<A, B, C> {}
impl<A: SeqView, B: Traversable, C: Traversable> SeqView for Zipped3<A, B, C> {}

/// See [`CollectionView::concat`].
#[derive(Clone)]
pub struct Concat<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
}

impl<A, B> Traversable for Concat<A, B>
where
    A: Traversable,
    B: Traversable<Item = A::Item>,
{
    type Item = A::Item;

    fn iter(&self) -> impl Iterator<Item = A::Item> {
        iter::concat(self.a.iter(), self.b.iter())
    }

    fn known_size(&self) -> Option<usize> {
        match (self.a.known_size(), self.b.known_size()) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        }
    }
}

impl<A: View, B: Traversable<Item = A::Item>> View for Concat<A, B> {}
impl<A: CollectionView, B: Traversable<Item = A::Item>> CollectionView for Concat<A, B> {}
impl<A: SeqView, B: Traversable<Item = A::Item>> SeqView for Concat<A, B> {}

impl<A: Indexed, B: Indexed<Item = A::Item>> Indexed for Concat<A, B> {
    fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    fn get(&self, index: usize) -> Option<A::Item> {
        let split = self.a.len();
        if index < split {
            self.a.get(index)
        } else {
            self.b.get(index - split)
        }
    }
}

/// See [`CollectionView::distinct`].
#[derive(Clone)]
pub struct Distinct<S> {
    pub(crate) source: S,
}

impl<S> Traversable for Distinct<S>
where
    S: Traversable,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        let mut seen = HashSet::new();
        iter::filter(self.source.iter(), move |value| seen.insert(value.clone()))
    }
}

impl<S: View> View for Distinct<S> where S::Item: Eq + Hash + Clone {}
impl<S: CollectionView> CollectionView for Distinct<S> where S::Item: Eq + Hash + Clone {}
impl<S: SeqView> SeqView for Distinct<S> where S::Item: Eq + Hash + Clone {}

/// See [`CollectionView::on_each`].
#[derive(Clone)]
pub struct OnEach<S, F> {
    pub(crate) source: S,
    pub(crate) f: F,
}

impl<S: Traversable, F: Fn(&S::Item)> Traversable for OnEach<S, F> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::map(self.source.iter(), move |value| {
            (self.f)(&value);
            value
        })
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

impl<S: View, F: Fn(&S::Item)> View for OnEach<S, F> {}
impl<S: CollectionView, F: Fn(&S::Item)> CollectionView for OnEach<S, F> {}
impl<S: SeqView, F: Fn(&S::Item)> SeqView for OnEach<S, F> {}

/// See [`SeqView::appended`].
pub struct Appended<S: Traversable> {
    pub(crate) source: S,
    pub(crate) value: S::Item,
}

impl<S: Traversable> Traversable for Appended<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::appended(self.source.iter(), self.value.clone())
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size().and_then(|n| n.checked_add(1))
    }
}

impl<S: View> View for Appended<S> where S::Item: Clone {}
impl<S: CollectionView> CollectionView for Appended<S> where S::Item: Clone {}
impl<S: SeqView> SeqView for Appended<S> where S::Item: Clone {}

impl<S: Indexed> Indexed for Appended<S>
where
    S::Item: Clone,
{
    fn len(&self) -> usize {
        self.source.len() + 1
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        match index.cmp(&self.source.len()) {
            Ordering::Less => self.source.get(index),
            Ordering::Equal => Some(self.value.clone()),
            Ordering::Greater => None,
        }
    }
}

/// See [`SeqView::prepended`].
pub struct Prepended<S: Traversable> {
    pub(crate) source: S,
    pub(crate) value: S::Item,
}

impl<S: Traversable> Traversable for Prepended<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::prepended(self.source.iter(), self.value.clone())
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size().and_then(|n| n.checked_add(1))
    }
}

impl<S: View> View for Prepended<S> where S::Item: Clone {}
impl<S: CollectionView> CollectionView for Prepended<S> where S::Item: Clone {}
impl<S: SeqView> SeqView for Prepended<S> where S::Item: Clone {}

impl<S: Indexed> Indexed for Prepended<S>
where
    S::Item: Clone,
{
    fn len(&self) -> usize {
        self.source.len() + 1
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        if index == 0 {
            Some(self.value.clone())
        } else {
            self.source.get(index - 1)
        }
    }
}

/// See [`SeqView::take`].
#[derive(Clone)]
pub struct Taken<S> {
    pub(crate) source: S,
    pub(crate) n: usize,
}

impl<S: Traversable> Traversable for Taken<S> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::take(self.source.iter(), self.n)
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size().map(|size| size.min(self.n))
    }
}

impl<S: View> View for Taken<S> {}
impl<S: CollectionView> CollectionView for Taken<S> {}
impl<S: SeqView> SeqView for Taken<S> {}

impl<S: Indexed> Indexed for Taken<S> {
    fn len(&self) -> usize {
        self.source.len().min(self.n)
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        if index < self.n {
            self.source.get(index)
        } else {
            None
        }
    }
}

/// See [`SeqView::take_while`].
#[derive(Clone)]
pub struct TakenWhile<S, P> {
    pub(crate) source: S,
    pub(crate) pred: P,
}

impl<S: Traversable, P: Fn(&S::Item) -> bool> Traversable for TakenWhile<S, P> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::take_while(self.source.iter(), &self.pred)
    }
}

impl<S: View, P: Fn(&S::Item) -> bool> View for TakenWhile<S, P> {}
impl<S: CollectionView, P: Fn(&S::Item) -> bool> CollectionView for TakenWhile<S, P> {}
impl<S: SeqView, P: Fn(&S::Item) -> bool> SeqView for TakenWhile<S, P> {}

/// See [`SeqView::drop`].
#[derive(Clone)]
pub struct Dropped<S> {
    pub(crate) source: S,
    pub(crate) n: usize,
}

impl<S: Traversable> Traversable for Dropped<S> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::drop(self.source.iter(), self.n)
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size().map(|size| size.saturating_sub(self.n))
    }
}

impl<S: View> View for Dropped<S> {}
impl<S: CollectionView> CollectionView for Dropped<S> {}
impl<S: SeqView> SeqView for Dropped<S> {}

impl<S: Indexed> Indexed for Dropped<S> {
    fn len(&self) -> usize {
        self.source.len().saturating_sub(self.n)
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        self.source.get(index.checked_add(self.n)?)
    }
}

/// See [`SeqView::drop_while`].
#[derive(Clone)]
pub struct DroppedWhile<S, P> {
    pub(crate) source: S,
    pub(crate) pred: P,
}

impl<S: Traversable, P: Fn(&S::Item) -> bool> Traversable for DroppedWhile<S, P> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::drop_while(self.source.iter(), &self.pred)
    }
}

impl<S: View, P: Fn(&S::Item) -> bool> View for DroppedWhile<S, P> {}
impl<S: CollectionView, P: Fn(&S::Item) -> bool> CollectionView for DroppedWhile<S, P> {}
impl<S: SeqView, P: Fn(&S::Item) -> bool> SeqView for DroppedWhile<S, P> {}

/// See [`SeqView::slice`].
#[derive(Clone)]
pub struct Sliced<S> {
    pub(crate) source: S,
    pub(crate) lo: usize,
    pub(crate) hi: usize,
}

impl<S: Traversable> Traversable for Sliced<S> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::take(
            iter::drop(self.source.iter(), self.lo),
            self.hi.saturating_sub(self.lo),
        )
    }

    fn known_size(&self) -> Option<usize> {
        self.source
            .known_size()
            .map(|size| size.min(self.hi).saturating_sub(self.lo))
    }
}

impl<S: View> View for Sliced<S> {}
impl<S: CollectionView> CollectionView for Sliced<S> {}
impl<S: SeqView> SeqView for Sliced<S> {}

impl<S: Indexed> Indexed for Sliced<S> {
    fn len(&self) -> usize {
        self.source.len().min(self.hi).saturating_sub(self.lo)
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        if index < self.len() {
            self.source.get(self.lo + index)
        } else {
            None
        }
    }
}

/// See [`SeqView::updated`].
pub struct Updated<S: Traversable> {
    pub(crate) source: S,
    pub(crate) index: usize,
    pub(crate) value: S::Item,
}

impl<S: Traversable> Traversable for Updated<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        iter::updated(self.source.iter(), self.index, self.value.clone())
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

impl<S: View> View for Updated<S> where S::Item: Clone {}
impl<S: CollectionView> CollectionView for Updated<S> where S::Item: Clone {}
impl<S: SeqView> SeqView for Updated<S> where S::Item: Clone {}

impl<S: Indexed> Indexed for Updated<S>
where
    S::Item: Clone,
{
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        if index == self.index && index < self.source.len() {
            Some(self.value.clone())
        } else {
            self.source.get(index)
        }
    }
}

/// See [`SeqView::reversed`].
#[derive(Clone)]
pub struct Reversed<S> {
    pub(crate) source: S,
}

impl<S: Traversable> Traversable for Reversed<S> {
    type Item = S::Item;

    // Reversing a forward-only traversal needs the whole sequence, so
    // generic iteration materializes. Random-access chains should prefer
    // the Indexed path.
    fn iter(&self) -> impl Iterator<Item = S::Item> {
        let mut elements = self.source.to_vec();
        elements.reverse();
        elements.into_iter()
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

impl<S: View> View for Reversed<S> {}
impl<S: CollectionView> CollectionView for Reversed<S> {}
impl<S: SeqView> SeqView for Reversed<S> {}

impl<S: Indexed> Indexed for Reversed<S> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        let len = self.source.len();
        if index < len {
            self.source.get(len - 1 - index)
        } else {
            None
        }
    }
}

/// See [`SeqView::sorted`] and [`SeqView::sorted_by`].
#[derive(Clone)]
pub struct Sorted<S, C> {
    pub(crate) source: S,
    pub(crate) cmp: C,
}

impl<S, C> Traversable for Sorted<S, C>
where
    S: Traversable,
    C: Fn(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    // Eager at iteration time: materialize, sort, yield.
    fn iter(&self) -> impl Iterator<Item = S::Item> {
        let mut elements: Vec<S::Item> = self.source.to_vec();
        elements.sort_by(|a, b| (self.cmp)(a, b));
        elements.into_iter()
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

impl<S: View, C: Fn(&S::Item, &S::Item) -> Ordering> View for Sorted<S, C> {}
impl<S: CollectionView, C: Fn(&S::Item, &S::Item) -> Ordering> CollectionView for Sorted<S, C> {}
impl<S: SeqView, C: Fn(&S::Item, &S::Item) -> Ordering> SeqView for Sorted<S, C> {}

/// See [`SeqView::zip_with_index`].
#[derive(Clone)]
pub struct ZippedWithIndex<S> {
    pub(crate) source: S,
}

impl<S: Traversable> Traversable for ZippedWithIndex<S> {
    type Item = Tuple2<S::Item, usize>;

    fn iter(&self) -> impl Iterator<Item = Self::Item> {
        iter::zip(self.source.iter(), 0usize..)
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

impl<S: View> View for ZippedWithIndex<S> {}
impl<S: CollectionView> CollectionView for ZippedWithIndex<S> {}
impl<S: SeqView> SeqView for ZippedWithIndex<S> {}

impl<S: Indexed> Indexed for ZippedWithIndex<S> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        self.source.get(index).map(|value| Tuple2(value, index))
    }
}
