//! The set capability.

use core::hash::{BuildHasher, Hash};

use vantage_base::iter;

use crate::traverse::Traversable;
use crate::view::set::SetView;

/// A collection of distinct elements with its own membership lookup.
pub trait SetLike: Traversable {
    /// Membership test, using the set's lookup structure rather than a
    /// scan.
    fn has(&self, value: &Self::Item) -> bool;

    /// Whether every element of `self` is in `other`.
    fn subset_of<S: SetLike<Item = Self::Item>>(&self, other: &S) -> bool {
        iter::all(self.iter(), |value| other.has(value))
    }

    /// Set equality: equal size and mutual containment. Traversal order
    /// does not matter.
    fn eq_set<S: SetLike<Item = Self::Item>>(&self, other: &S) -> bool {
        self.size() == other.size() && self.subset_of(other)
    }

    /// A lazy, re-iterable view over this set.
    fn view(&self) -> SetView<'_, Self>
    where
        Self: Sized,
    {
        SetView::new(self)
    }
}

impl<T, S> Traversable for hashbrown::HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = T> {
        hashbrown::HashSet::iter(self).cloned()
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> SetLike for hashbrown::HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }
}
