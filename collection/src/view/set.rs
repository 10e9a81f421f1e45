//! Lazy views over sets.

use super::{CollectionView, View};
use crate::like::SetLike;
use crate::traverse::Traversable;

/// The root view over a borrowed set.
///
/// A set's elements are already distinct, so `distinct()` on this view is
/// the identity transform (at the cost of an idle seen-set); the other
/// collection transforms behave as on any view, with the usual caveat
/// that `map` may merge elements and the result is a sequence-shaped
/// view, not a set.
pub struct SetView<'a, S> {
    source: &'a S,
}

impl<'a, S> SetView<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }
}

impl<S> Clone for SetView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SetView<'_, S> {}

impl<S: SetLike> SetView<'_, S> {
    /// Membership test, delegated to the set's own lookup.
    pub fn has(&self, value: &S::Item) -> bool {
        self.source.has(value)
    }
}

impl<S: SetLike> Traversable for SetView<'_, S> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = S::Item> {
        self.source.iter()
    }

    fn known_size(&self) -> Option<usize> {
        self.source.known_size()
    }
}

impl<S: SetLike> View for SetView<'_, S> {}
impl<S: SetLike> CollectionView for SetView<'_, S> {}
