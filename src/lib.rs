//! Vantage, a general-purpose collections and tuple library.
//!
//! This crate is the facade over the workspace:
//!
//! - [`base`] carries the tuple family (`Tuple0`..`Tuple9`, the boxed
//!   overflow `TupleXXL`, the `AnyTuple` capability), the lazy iterator
//!   algebra, and packed primitive iteration.
//! - [`collection`] carries the re-iterable `Traversable` capability, the
//!   composable view layer, the `CollectionLike`/`SeqLike`/`MapLike`/
//!   `SetLike` hierarchy, and the `ArraySeq` materialization target.
//!
//! # Example
//!
//! ```
//! use vantage::collection::ArraySeq;
//! use vantage::prelude::*;
//!
//! let seq: ArraySeq<i32> = (1..=5).collect();
//! let result = seq
//!     .view()
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .to_seq();
//! assert_eq!(result.as_slice(), &[20, 40]);
//!
//! let t = vantage::tuple!(1i64, "a", true);
//! assert_eq!(t.arity(), 3);
//! ```

#![cfg_attr(not(test), no_std)]

pub use vantage_base as base;
pub use vantage_collection as collection;

pub use vantage_base::{Error, tuple};

/// The traits a caller usually wants in scope.
pub mod prelude {
    pub use vantage_base::tuple::AnyTuple;
    pub use vantage_collection::like::{
        CollectionLike, IndexedSeqLike, MapIterator, MapLike, SeqLike, SetLike,
    };
    pub use vantage_collection::traverse::Traversable;
    pub use vantage_collection::view::{CollectionView, Indexed, SeqView, View};
}
