//! Type erasure for heterogeneous tuple elements.
//!
//! Fixed-arity tuples know their element types statically; the overflow
//! representation and the dynamic capability surface do not. [`Element`]
//! is the bridge: any `'static` value that is debuggable, comparable and
//! hashable can be handled behind `&dyn Element`, and two erased values
//! compare equal exactly when they have the same runtime type and their
//! typed comparison agrees.

use core::any::Any;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// A tuple element viewed through type erasure.
///
/// Implemented for every `T: Any + Debug + PartialEq + Hash` via the
/// blanket impl below; user code never implements this by hand.
pub trait Element: Any + Debug {
    /// Upcast for downcasting in [`Element::dyn_eq`] and comparators.
    fn as_any(&self) -> &dyn Any;

    /// Structural equality across erased values.
    ///
    /// Values of different runtime types are never equal, mirroring the
    /// typed `PartialEq` they erase.
    fn dyn_eq(&self, other: &dyn Element) -> bool;

    /// Feed this value into a hasher, equivalently to its typed `Hash`.
    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T: Any + Debug + PartialEq + Hash> Element for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Element) -> bool {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self == other,
            None => false,
        }
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }
}

/// Hash a single erased element to a stable 64-bit value.
///
/// Used by the tuple structural hash; deterministic for a given value
/// within one build of the library.
pub(crate) fn element_hash(element: &dyn Element) -> u64 {
    let mut hasher = FxHasher::default();
    element.dyn_hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_type_equal_values() {
        let a: &dyn Element = &42i64;
        let b: &dyn Element = &42i64;
        assert!(a.dyn_eq(b));
    }

    #[test]
    fn same_type_different_values() {
        let a: &dyn Element = &1i64;
        let b: &dyn Element = &2i64;
        assert!(!a.dyn_eq(b));
    }

    #[test]
    fn different_types_never_equal() {
        // 1i32 and 1i64 are distinct runtime types, so erased equality
        // must reject them even though the values "look" the same.
        let a: &dyn Element = &1i32;
        let b: &dyn Element = &1i64;
        assert!(!a.dyn_eq(b));
    }

    #[test]
    fn hash_agrees_with_typed_hash() {
        let a: &dyn Element = &"hello";
        let b: &dyn Element = &"hello";
        assert_eq!(element_hash(a), element_hash(b));
    }
}
