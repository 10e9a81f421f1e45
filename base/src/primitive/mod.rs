//! Boxing-free iteration over primitive storage.
//!
//! Generic code in this library monomorphizes, so primitives never box the
//! way they would behind a uniform object representation. What remains
//! worth specializing is *storage*: [`BitSeq`] packs booleans 64 to a word
//! and iterates them with word-level operations, and [`NumSliceExt`] gives
//! primitive slices the algebra's terminal operations without going
//! through a generic cursor.

mod bits;
mod num;

pub use bits::{BitIter, BitSeq};
pub use num::NumSliceExt;
