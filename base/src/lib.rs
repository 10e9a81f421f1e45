//! Foundation layer of the Vantage collections library.
//!
//! This crate carries the pieces everything else builds on:
//!
//! - [`tuple`]: fixed-arity heterogeneous tuples ([`tuple::Tuple0`] through
//!   [`tuple::Tuple9`]), the boxed overflow representation
//!   [`tuple::TupleXXL`], and the [`tuple::AnyTuple`] capability that gives
//!   them a common structural equality and hashing contract.
//! - [`iter`]: the lazy iterator algebra, free functions that wrap any
//!   [`Iterator`] in composable, demand-driven adapters, plus the terminal
//!   operations (folds, reductions, joining).
//! - [`primitive`]: boxing-free iteration over packed primitive storage.
//!
//! The crate is `no_std` + `alloc`; nothing here performs I/O or holds
//! global state.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// Exported so that macros can always refer to these, regardless of the
// caller's own prelude.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, vec::Vec};
}

mod error;

pub mod iter;
pub mod primitive;
pub mod tuple;

pub use error::Error;
