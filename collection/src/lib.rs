//! Collection abstractions for the Vantage library: the re-iterable
//! [`Traversable`] capability, the lazy view composition layer, the
//! `*Like` capability hierarchy concrete containers implement, and the
//! [`ArraySeq`] sequence everything materializes into by default.
//!
//! [`Traversable`]: traverse::Traversable
//! [`ArraySeq`]: array_seq::ArraySeq

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod array_seq;
pub mod factory;
pub mod like;
pub mod traverse;
pub mod view;

pub use array_seq::ArraySeq;
pub use factory::{ArraySeqFactory, CollectionFactory, VecFactory};
pub use like::{CollectionLike, IndexedSeqLike, MapIterator, MapLike, SeqLike, SetLike};
pub use traverse::Traversable;
