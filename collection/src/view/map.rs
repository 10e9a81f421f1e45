//! Lazy views over maps.
//!
//! Map traversal goes through the [`MapIterator`] cursor (`next_key()`
//! then `value()`), so the wrappers here can walk entries without
//! allocating a pair per step. [`MapView::entries`] is the bridge out:
//! it pairs the cursor's halves into [`Tuple2`]s for the generic
//! algebra.

use vantage_base::tuple::Tuple2;

use super::{CollectionView, View};
use crate::like::{MapIterator, MapLike};
use crate::traverse::Traversable;

/// The root view over a borrowed map.
pub struct MapView<'a, M> {
    source: &'a M,
}

impl<'a, M> MapView<'a, M> {
    pub fn new(source: &'a M) -> Self {
        Self { source }
    }
}

impl<M> Clone for MapView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for MapView<'_, M> {}

impl<'a, M: MapLike> MapView<'a, M> {
    /// The keys, in the map's traversal order.
    pub fn keys(self) -> MapKeys<'a, M> {
        MapKeys {
            source: self.source,
        }
    }

    /// The values, in the map's traversal order.
    pub fn values(self) -> MapValues<'a, M> {
        MapValues {
            source: self.source,
        }
    }

    /// Key/value pairs as [`Tuple2`]s.
    pub fn entries(self) -> MapEntries<'a, M> {
        MapEntries {
            source: self.source,
        }
    }

    /// Entries with each value transformed by `f`.
    pub fn mapped_values<W, F: Fn(M::Value) -> W>(self, f: F) -> MappedValues<'a, M, F> {
        MappedValues {
            source: self.source,
            f,
        }
    }

    /// Entries whose key satisfies `pred`.
    pub fn filtered_keys<P: Fn(&M::Key) -> bool>(self, pred: P) -> FilteredKeys<'a, M, P> {
        FilteredKeys {
            source: self.source,
            pred,
        }
    }
}

/// A [`MapView`] traverses as its entries.
impl<M: MapLike> Traversable for MapView<'_, M> {
    type Item = Tuple2<M::Key, M::Value>;

    fn iter(&self) -> impl Iterator<Item = Self::Item> {
        EntryIter {
            cursor: self.source.map_iter(),
        }
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.source.size())
    }
}

impl<M: MapLike> View for MapView<'_, M> {}
impl<M: MapLike> CollectionView for MapView<'_, M> {}

/// See [`MapView::keys`].
pub struct MapKeys<'a, M> {
    source: &'a M,
}

impl<M: MapLike> Traversable for MapKeys<'_, M> {
    type Item = M::Key;

    fn iter(&self) -> impl Iterator<Item = M::Key> {
        KeyIter {
            cursor: self.source.map_iter(),
        }
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.source.size())
    }
}

impl<M: MapLike> View for MapKeys<'_, M> {}
impl<M: MapLike> CollectionView for MapKeys<'_, M> {}

/// See [`MapView::values`].
pub struct MapValues<'a, M> {
    source: &'a M,
}

impl<M: MapLike> Traversable for MapValues<'_, M> {
    type Item = M::Value;

    fn iter(&self) -> impl Iterator<Item = M::Value> {
        ValueIter {
            cursor: self.source.map_iter(),
        }
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.source.size())
    }
}

impl<M: MapLike> View for MapValues<'_, M> {}
impl<M: MapLike> CollectionView for MapValues<'_, M> {}

/// See [`MapView::entries`].
pub struct MapEntries<'a, M> {
    source: &'a M,
}

impl<M: MapLike> Traversable for MapEntries<'_, M> {
    type Item = Tuple2<M::Key, M::Value>;

    fn iter(&self) -> impl Iterator<Item = Self::Item> {
        EntryIter {
            cursor: self.source.map_iter(),
        }
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.source.size())
    }
}

impl<M: MapLike> View for MapEntries<'_, M> {}
impl<M: MapLike> CollectionView for MapEntries<'_, M> {}

/// See [`MapView::mapped_values`].
pub struct MappedValues<'a, M, F> {
    source: &'a M,
    f: F,
}

impl<W, M: MapLike, F: Fn(M::Value) -> W> Traversable for MappedValues<'_, M, F> {
    type Item = Tuple2<M::Key, W>;

    fn iter(&self) -> impl Iterator<Item = Self::Item> {
        let entries = EntryIter {
            cursor: self.source.map_iter(),
        };
        vantage_base::iter::map(entries, move |Tuple2(key, value)| Tuple2(key, (self.f)(value)))
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.source.size())
    }
}

impl<W, M: MapLike, F: Fn(M::Value) -> W> View for MappedValues<'_, M, F> {}
impl<W, M: MapLike, F: Fn(M::Value) -> W> CollectionView for MappedValues<'_, M, F> {}

/// See [`MapView::filtered_keys`].
pub struct FilteredKeys<'a, M, P> {
    source: &'a M,
    pred: P,
}

impl<M: MapLike, P: Fn(&M::Key) -> bool> Traversable for FilteredKeys<'_, M, P> {
    type Item = Tuple2<M::Key, M::Value>;

    fn iter(&self) -> impl Iterator<Item = Self::Item> {
        let entries = EntryIter {
            cursor: self.source.map_iter(),
        };
        vantage_base::iter::filter(entries, move |Tuple2(key, _)| (self.pred)(key))
    }
}

impl<M: MapLike, P: Fn(&M::Key) -> bool> View for FilteredKeys<'_, M, P> {}
impl<M: MapLike, P: Fn(&M::Key) -> bool> CollectionView for FilteredKeys<'_, M, P> {}

// ============================================================================
// Cursor bridges
// ============================================================================

struct KeyIter<C> {
    cursor: C,
}

impl<C: MapIterator> Iterator for KeyIter<C> {
    type Item = C::Key;

    fn next(&mut self) -> Option<C::Key> {
        self.cursor.next_key()
    }
}

struct ValueIter<C> {
    cursor: C,
}

impl<C: MapIterator> Iterator for ValueIter<C> {
    type Item = C::Value;

    fn next(&mut self) -> Option<C::Value> {
        self.cursor.next_key()?;
        Some(self.cursor.value())
    }
}

struct EntryIter<C> {
    cursor: C,
}

impl<C: MapIterator> Iterator for EntryIter<C> {
    type Item = Tuple2<C::Key, C::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor.next_key()?;
        Some(Tuple2(key, self.cursor.value()))
    }
}
