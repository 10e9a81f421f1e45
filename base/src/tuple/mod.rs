//! Heterogeneous tuples of arity 0 through 9, with a boxed overflow
//! representation beyond that.
//!
//! The fixed arities ([`Tuple0`]..[`Tuple9`]) are plain generic structs with
//! public positional fields; they cost nothing over a native Rust tuple and
//! convert to and from one. [`TupleXXL`] holds type-erased elements behind
//! [`Element`] and covers both arity ≥ 10 and tuples whose arity is only
//! known at runtime.
//!
//! All representations share the [`AnyTuple`] capability: arity, indexed
//! element access, structural equality and a structural hash. Equality is
//! defined over the capability, not the concrete type: a [`Tuple3`] and a
//! [`TupleXXL`] holding the same three elements compare equal and hash
//! equal.
//!
//! # Example
//!
//! ```
//! use vantage_base::tuple;
//! use vantage_base::tuple::AnyTuple;
//!
//! let t = tuple!(1i64, "a", true);
//! assert_eq!(t.arity(), 3);
//! assert_eq!(t.head(), &1i64);
//! let longer = t.cons(7u8);
//! assert_eq!(longer.arity(), 4);
//! ```

mod element;
mod fixed;
mod xxl;

pub mod cmp;

pub use element::Element;
pub use fixed::{Tuple0, Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8, Tuple9};
pub use xxl::TupleXXL;

use alloc::vec::Vec;

use crate::Error;
use element::element_hash;

/// Per-arity seeds mixed into the structural hash, so that tuples of
/// different arities land apart even when their element hashes collide.
const HASH_MAGIC: [u64; 10] = [
    0xa8f6_0c19,
    0x56f3_2a7d,
    0xde1f_8b03,
    0x1b94_e5c7,
    0x73c2_9f41,
    0xc05d_17e9,
    0x3e8a_d2b5,
    0x9127_64ff,
    0x6fd0_3a8b,
    0xe44b_c961,
];

/// Seed for the overflow representation (arity 10 and beyond).
const HASH_MAGIC_XXL: u64 = 0x2b7e_1516_28ae_d2a5;

fn hash_magic(arity: usize) -> u64 {
    match HASH_MAGIC.get(arity) {
        Some(magic) => *magic,
        None => HASH_MAGIC_XXL,
    }
}

/// The capability every tuple representation provides: a fixed arity and
/// indexed access to erased elements.
///
/// Equality and hashing are defined here, as default methods, so that
/// different representations of the same logical tuple agree.
pub trait AnyTuple {
    /// Number of elements. Constant for the life of the value.
    fn arity(&self) -> usize;

    /// The element at `index`, or `None` outside `[0, arity)`.
    fn get(&self, index: usize) -> Option<&dyn Element>;

    /// The element at `index`, failing with [`Error::IndexOutOfBounds`]
    /// outside `[0, arity)`.
    fn element(&self, index: usize) -> Result<&dyn Element, Error> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.arity(),
        })
    }

    /// Iterate the elements in positional order.
    fn elements(&self) -> impl Iterator<Item = &dyn Element>
    where
        Self: Sized,
    {
        (0..self.arity()).map(move |index| {
            self.get(index)
                .expect("Bug: arity() and get() disagree")
        })
    }

    /// Collect the erased elements into a vector, in positional order.
    fn to_vec(&self) -> Vec<&dyn Element> {
        let mut elements = Vec::with_capacity(self.arity());
        for index in 0..self.arity() {
            elements.push(
                self.get(index)
                    .expect("Bug: arity() and get() disagree"),
            );
        }
        elements
    }

    /// Structural equality over the capability: arities match and every
    /// corresponding pair of elements is [`Element::dyn_eq`]-equal.
    fn eq_tuple(&self, other: &dyn AnyTuple) -> bool {
        let arity = self.arity();
        if arity != other.arity() {
            return false;
        }
        for index in 0..arity {
            match (self.get(index), other.get(index)) {
                (Some(a), Some(b)) if a.dyn_eq(b) => {}
                _ => return false,
            }
        }
        true
    }

    /// Order-sensitive structural hash: a base-31 polynomial over the
    /// per-element hashes, offset by a per-arity magic constant.
    ///
    /// Representations agree: equal tuples hash equal regardless of
    /// whether they are fixed-arity or overflow values.
    fn structural_hash(&self) -> u64 {
        let mut hash: u64 = 0;
        for index in 0..self.arity() {
            let element = self
                .get(index)
                .expect("Bug: arity() and get() disagree");
            hash = hash.wrapping_mul(31).wrapping_add(element_hash(element));
        }
        hash.wrapping_add(hash_magic(self.arity()))
    }
}

/// Construct a tuple from 0 to 9 positional expressions, or a [`TupleXXL`]
/// beyond that.
///
/// This is the variadic front door: argument counts 0–9 expand to the
/// matching fixed-arity type, and 10 or more to the boxed overflow
/// representation (whose elements must then be `'static`).
///
/// ```
/// use vantage_base::tuple;
/// use vantage_base::tuple::AnyTuple;
///
/// let pair = tuple!(1, 2);
/// assert_eq!(pair.0, 1);
///
/// let wide = tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
/// assert_eq!(wide.arity(), 11);
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::tuple::Tuple0()
    };
    ($e1:expr $(,)?) => {
        $crate::tuple::Tuple1($e1)
    };
    ($e1:expr, $e2:expr $(,)?) => {
        $crate::tuple::Tuple2($e1, $e2)
    };
    ($e1:expr, $e2:expr, $e3:expr $(,)?) => {
        $crate::tuple::Tuple3($e1, $e2, $e3)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr $(,)?) => {
        $crate::tuple::Tuple4($e1, $e2, $e3, $e4)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr $(,)?) => {
        $crate::tuple::Tuple5($e1, $e2, $e3, $e4, $e5)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr $(,)?) => {
        $crate::tuple::Tuple6($e1, $e2, $e3, $e4, $e5, $e6)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr $(,)?) => {
        $crate::tuple::Tuple7($e1, $e2, $e3, $e4, $e5, $e6, $e7)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr $(,)?) => {
        $crate::tuple::Tuple8($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8)
    };
    ($e1:expr, $e2:expr, $e3:expr, $e4:expr, $e5:expr, $e6:expr, $e7:expr, $e8:expr, $e9:expr $(,)?) => {
        $crate::tuple::Tuple9($e1, $e2, $e3, $e4, $e5, $e6, $e7, $e8, $e9)
    };
    ($($e:expr),+ $(,)?) => {{
        let mut __elements: $crate::shim::Vec<$crate::shim::Box<dyn $crate::tuple::Element>> =
            $crate::shim::Vec::new();
        $(
            __elements.push($crate::shim::Box::new($e));
        )+
        $crate::tuple::TupleXXL::from_elements(__elements)
    }};
}
