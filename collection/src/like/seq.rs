//! The ordered collection capability.

use core::cmp::Ordering;

use vantage_base::{Error, iter};

use crate::array_seq::ArraySeq;
use crate::like::CollectionLike;
use crate::view::{SeqView, View};

/// A collection with a stable element order and positional access.
///
/// `get` is the only required method; it may be O(n). Containers that can
/// promise O(1) access implement [`IndexedSeqLike`] as well, which lets
/// view chains over them keep random access.
pub trait SeqLike: CollectionLike {
    /// The element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// The element at `index`, failing with [`Error::IndexOutOfBounds`].
    fn element(&self, index: usize) -> Result<Self::Item, Error> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.size(),
        })
    }

    /// The first element, failing with [`Error::EmptySource`] when empty.
    fn first(&self) -> Result<Self::Item, Error> {
        iter::first(self.iter())
    }

    /// The first element, or `None` when empty.
    fn first_option(&self) -> Option<Self::Item> {
        iter::first_option(self.iter())
    }

    /// The last element, failing with [`Error::EmptySource`] when empty.
    fn last(&self) -> Result<Self::Item, Error> {
        iter::last(self.iter())
    }

    /// The last element, or `None` when empty.
    fn last_option(&self) -> Option<Self::Item> {
        iter::last_option(self.iter())
    }

    /// Position of the first element equal to `value`. Linear scan.
    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        iter::index_of(self.iter(), value)
    }

    /// Position of the first element satisfying `pred`. Linear scan.
    fn index_where<P: FnMut(&Self::Item) -> bool>(&self, pred: P) -> Option<usize> {
        iter::index_where(self.iter(), pred)
    }

    /// Position of the last element equal to `value`. Linear scan.
    fn last_index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        let mut found = None;
        for (index, candidate) in self.iter().enumerate() {
            if candidate == *value {
                found = Some(index);
            }
        }
        found
    }

    /// Binary search for `value`.
    ///
    /// The caller guarantees the sequence is sorted ascending; on an
    /// unsorted sequence the result is unspecified. Returns `Ok(position)`
    /// on a hit and `Err(insertion_point)` on a miss.
    fn binary_search(&self, value: &Self::Item) -> Result<usize, usize>
    where
        Self::Item: Ord,
    {
        self.binary_search_by(|probe| probe.cmp(value))
    }

    /// Binary search with a caller-supplied probe, under the same
    /// sortedness contract as [`binary_search`](SeqLike::binary_search).
    ///
    /// `compare` reports how the probed element orders relative to the
    /// target.
    fn binary_search_by<F: FnMut(&Self::Item) -> Ordering>(
        &self,
        mut compare: F,
    ) -> Result<usize, usize> {
        let mut lo = 0usize;
        let mut hi = self.size();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let probe = self
                .get(mid)
                .expect("Bug: get() failed inside the search range");
            match compare(&probe) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(lo)
    }

    /// The elements in reverse order, materialized.
    fn reversed(&self) -> ArraySeq<Self::Item>
    where
        Self: Sized,
    {
        self.view().reversed().to_seq()
    }

    /// The elements in ascending order, materialized.
    fn sorted(&self) -> ArraySeq<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.view().sorted().to_seq()
    }
}

/// A sequence whose `get` and `len` are O(1).
///
/// This is a promise, not new behavior: the view layer keys its
/// random-access threading ([`Indexed`]) off this trait.
///
/// [`Indexed`]: crate::view::Indexed
pub trait IndexedSeqLike: SeqLike {
    /// Element count, O(1).
    fn len(&self) -> usize;
}
