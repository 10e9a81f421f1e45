//! The base collection capability.

use core::hash::Hash;

use vantage_base::tuple::{Tuple2, Tuple3};

use crate::array_seq::ArraySeq;
use crate::factory::CollectionFactory;
use crate::traverse::Traversable;
use crate::view::{CollectionView, Of, View};

/// Operations every collection supports, independent of ordering.
///
/// Every transform delegates to the view layer and materializes: the
/// convenience forms land in an [`ArraySeq`], the `*_to` forms in
/// whatever the given [`CollectionFactory`] builds.
pub trait CollectionLike: Traversable {
    /// A lazy, re-iterable view over this collection.
    fn view(&self) -> Of<'_, Self>
    where
        Self: Sized,
    {
        Of::new(self)
    }

    fn filter<P: Fn(&Self::Item) -> bool>(&self, pred: P) -> ArraySeq<Self::Item>
    where
        Self: Sized,
    {
        self.view().filter(pred).to_seq()
    }

    fn filter_not<P: Fn(&Self::Item) -> bool>(&self, pred: P) -> ArraySeq<Self::Item>
    where
        Self: Sized,
    {
        self.view().filter_not(pred).to_seq()
    }

    fn filter_map<B, F: Fn(Self::Item) -> Option<B>>(&self, f: F) -> ArraySeq<B>
    where
        Self: Sized,
    {
        self.view().filter_map(f).to_seq()
    }

    fn map<B, F: Fn(Self::Item) -> B>(&self, f: F) -> ArraySeq<B>
    where
        Self: Sized,
    {
        self.view().map(f).to_seq()
    }

    /// Transform through `factory` instead of the default [`ArraySeq`].
    fn map_to<B, F, Fct>(&self, f: F, factory: &Fct) -> Fct::Output
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
        Fct: CollectionFactory<B>,
    {
        self.view().map(f).collect_with(factory)
    }

    /// Filter through `factory` instead of the default [`ArraySeq`].
    fn filter_to<P, Fct>(&self, pred: P, factory: &Fct) -> Fct::Output
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
        Fct: CollectionFactory<Self::Item>,
    {
        self.view().filter(pred).collect_with(factory)
    }

    fn flat_map<J, F>(&self, f: F) -> ArraySeq<J::Item>
    where
        Self: Sized,
        J: IntoIterator,
        F: Fn(Self::Item) -> J,
    {
        self.view().flat_map(f).to_seq()
    }

    /// Flat-map through `factory` instead of the default [`ArraySeq`].
    fn flat_map_to<J, F, Fct>(&self, f: F, factory: &Fct) -> Fct::Output
    where
        Self: Sized,
        J: IntoIterator,
        F: Fn(Self::Item) -> J,
        Fct: CollectionFactory<J::Item>,
    {
        self.view().flat_map(f).collect_with(factory)
    }

    /// Pair positionally with `other`, stopping at the shorter side.
    fn zip<O: Traversable>(&self, other: &O) -> ArraySeq<Tuple2<Self::Item, O::Item>>
    where
        Self: Sized,
    {
        self.view().zip(Of::new(other)).to_seq()
    }

    /// Triple positionally, stopping at the shortest side.
    fn zip3<B: Traversable, C: Traversable>(
        &self,
        b: &B,
        c: &C,
    ) -> ArraySeq<Tuple3<Self::Item, B::Item, C::Item>>
    where
        Self: Sized,
    {
        self.view().zip3(Of::new(b), Of::new(c)).to_seq()
    }

    /// The distinct elements, first occurrence of each kept.
    fn distinct(&self) -> ArraySeq<Self::Item>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        self.view().distinct().to_seq()
    }
}
