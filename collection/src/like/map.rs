//! The map capability.

use core::hash::{BuildHasher, Hash};

use crate::view::map::MapView;

/// A cursor over map entries that never allocates a pair.
///
/// `next_key()` advances and yields the key; `value()` reads the value at
/// the cursor's current entry. Calling `value()` before the first
/// `next_key()`, or after it has returned `None`, is a contract violation
/// and panics.
pub trait MapIterator {
    type Key;
    type Value;

    /// Advance to the next entry and yield its key, or `None` when done.
    fn next_key(&mut self) -> Option<Self::Key>;

    /// The value of the entry the cursor is currently on.
    fn value(&self) -> Self::Value;
}

/// Operations every map supports, defined over the [`MapIterator`]
/// cursor.
pub trait MapLike {
    type Key;
    type Value;

    /// A fresh cursor over the entries. Traversal order is the map's own.
    fn map_iter(&self) -> impl MapIterator<Key = Self::Key, Value = Self::Value>;

    /// Number of entries.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The value under `key`, or `None`.
    fn get(&self, key: &Self::Key) -> Option<Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Whether `key` maps to exactly `value`.
    fn contains(&self, key: &Self::Key, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        match self.get(key) {
            Some(found) => found == *value,
            None => false,
        }
    }

    /// Map equality: equal size, and every entry of `self` is contained
    /// in `other`. Traversal order does not matter.
    fn eq_map<M>(&self, other: &M) -> bool
    where
        M: MapLike<Key = Self::Key, Value = Self::Value>,
        Self::Value: PartialEq,
    {
        if self.size() != other.size() {
            return false;
        }
        let mut cursor = self.map_iter();
        while let Some(key) = cursor.next_key() {
            let value = cursor.value();
            if !other.contains(&key, &value) {
                return false;
            }
        }
        true
    }

    /// A lazy, re-iterable view over this map.
    fn view(&self) -> MapView<'_, Self>
    where
        Self: Sized,
    {
        MapView::new(self)
    }
}

/// [`MapIterator`] over a `hashbrown` map.
pub struct HashMapCursor<'a, K, V> {
    entries: hashbrown::hash_map::Iter<'a, K, V>,
    current: Option<&'a V>,
}

impl<K: Clone, V: Clone> MapIterator for HashMapCursor<'_, K, V> {
    type Key = K;
    type Value = V;

    fn next_key(&mut self) -> Option<K> {
        match self.entries.next() {
            Some((key, value)) => {
                self.current = Some(value);
                Some(key.clone())
            }
            None => {
                self.current = None;
                None
            }
        }
    }

    fn value(&self) -> V {
        self.current
            .expect("value() called with no current entry")
            .clone()
    }
}

impl<K, V, S> MapLike for hashbrown::HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn map_iter(&self) -> impl MapIterator<Key = K, Value = V> {
        HashMapCursor {
            entries: self.iter(),
            current: None,
        }
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, key: &K) -> Option<V> {
        hashbrown::HashMap::get(self, key).cloned()
    }
}
