//! The materialization seam.
//!
//! Transform results need to land in some concrete container; which one is
//! the caller's business, not the algebra's. A [`CollectionFactory`]
//! encapsulates that choice: the collection hierarchy's `map`/`filter`/
//! `flat_map` and the views' `collect_with` drive any factory the caller
//! hands them.

use alloc::vec::Vec;

use crate::array_seq::ArraySeq;

/// Builds some concrete collection out of a stream of elements.
pub trait CollectionFactory<E> {
    /// Accumulator for elements while building.
    type Builder;
    /// The finished collection.
    type Output;

    fn new_builder(&self) -> Self::Builder;

    /// Advisory element count, called before the first [`add`] when the
    /// source size is known. Default: ignored.
    ///
    /// [`add`]: CollectionFactory::add
    fn size_hint(&self, _builder: &mut Self::Builder, _size: usize) {}

    fn add(&self, builder: &mut Self::Builder, element: E);

    fn build(&self, builder: Self::Builder) -> Self::Output;

    /// The empty collection of this factory's kind.
    fn empty(&self) -> Self::Output {
        self.build(self.new_builder())
    }

    /// Drain `elements` into a fresh collection.
    fn from_iter<I: IntoIterator<Item = E>>(&self, elements: I) -> Self::Output {
        let elements = elements.into_iter();
        let mut builder = self.new_builder();
        let (lower, _) = elements.size_hint();
        if lower > 0 {
            self.size_hint(&mut builder, lower);
        }
        for element in elements {
            self.add(&mut builder, element);
        }
        self.build(builder)
    }
}

/// Factory for [`ArraySeq`], the library's preferred immutable
/// materialization target.
pub struct ArraySeqFactory<E> {
    _marker: core::marker::PhantomData<E>,
}

impl<E> ArraySeqFactory<E> {
    pub fn new() -> Self {
        Self {
            _marker: core::marker::PhantomData,
        }
    }
}

impl<E> Default for ArraySeqFactory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CollectionFactory<E> for ArraySeqFactory<E> {
    type Builder = Vec<E>;
    type Output = ArraySeq<E>;

    fn new_builder(&self) -> Vec<E> {
        Vec::new()
    }

    fn size_hint(&self, builder: &mut Vec<E>, size: usize) {
        builder.reserve(size);
    }

    fn add(&self, builder: &mut Vec<E>, element: E) {
        builder.push(element);
    }

    fn build(&self, builder: Vec<E>) -> ArraySeq<E> {
        ArraySeq::from_vec(builder)
    }
}

/// Factory for plain vectors, when the caller wants the raw buffer.
pub struct VecFactory<E> {
    _marker: core::marker::PhantomData<E>,
}

impl<E> VecFactory<E> {
    pub fn new() -> Self {
        Self {
            _marker: core::marker::PhantomData,
        }
    }
}

impl<E> Default for VecFactory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CollectionFactory<E> for VecFactory<E> {
    type Builder = Vec<E>;
    type Output = Vec<E>;

    fn new_builder(&self) -> Vec<E> {
        Vec::new()
    }

    fn size_hint(&self, builder: &mut Vec<E>, size: usize) {
        builder.reserve(size);
    }

    fn add(&self, builder: &mut Vec<E>, element: E) {
        builder.push(element);
    }

    fn build(&self, builder: Vec<E>) -> Vec<E> {
        builder
    }
}
