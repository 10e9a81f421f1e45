//! The fixed-arity tuple types.
//!
//! One `macro_rules!` definition, nine expansions. Each arity is a plain
//! tuple struct with public positional fields, so `t.0`, `t.1`, … work as
//! they do on native tuples, and pattern matching destructures as usual.
//! Everything a native tuple cannot do (`cons`, `head`/`tail`, the
//! [`AnyTuple`] capability) is generated here.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use super::{AnyTuple, Element, TupleXXL};

/// The empty tuple.
///
/// Zero-sized; exists so that `tail()` on a [`Tuple1`] has somewhere to
/// land and `cons` chains have somewhere to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tuple0();

static_assertions::assert_eq_size!(Tuple0, ());

impl Tuple0 {
    /// Number of elements.
    pub const ARITY: usize = 0;

    pub fn new() -> Self {
        Tuple0()
    }

    /// Prepend an element, producing the next arity up.
    pub fn cons<H0>(self, head: H0) -> Tuple1<H0> {
        Tuple1(head)
    }
}

impl From<()> for Tuple0 {
    fn from((): ()) -> Self {
        Tuple0()
    }
}

impl AnyTuple for Tuple0 {
    fn arity(&self) -> usize {
        Self::ARITY
    }

    fn get(&self, _index: usize) -> Option<&dyn Element> {
        None
    }
}

impl PartialEq<TupleXXL> for Tuple0 {
    fn eq(&self, other: &TupleXXL) -> bool {
        self.eq_tuple(other)
    }
}

impl PartialEq<Tuple0> for TupleXXL {
    fn eq(&self, other: &Tuple0) -> bool {
        self.eq_tuple(other)
    }
}

impl fmt::Display for Tuple0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}

macro_rules! tuples {
    ($(
        $(#[$doc:meta])*
        $name:ident => prev $prev:ident, next $next:tt,
            head($h:ident $H:ident $hi:tt) rest($(($t:ident $T:ident $i:tt))*);
    )+) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            pub struct $name<$H, $($T),*>(pub $H, $(pub $T),*);

            impl<$H, $($T),*> $name<$H, $($T),*> {
                /// Number of elements.
                pub const ARITY: usize = 1 + tuples!(@count $($T)*);

                pub fn new($h: $H, $($t: $T),*) -> Self {
                    Self($h, $($t),*)
                }

                /// The first element.
                pub fn head(&self) -> &$H {
                    &self.0
                }

                /// Everything but the first element, one arity down.
                pub fn tail(self) -> $prev<$($T),*> {
                    $prev($(self.$i),*)
                }

                tuples!(@cons $next, $H, ($($T)*), ($($i)*));
            }

            impl<$H, $($T),*> From<($H, $($T),*)> for $name<$H, $($T),*> {
                fn from(value: ($H, $($T),*)) -> Self {
                    let ($h, $($t),*) = value;
                    Self($h, $($t),*)
                }
            }

            impl<$H, $($T),*> From<$name<$H, $($T),*>> for ($H, $($T),*) {
                fn from(value: $name<$H, $($T),*>) -> Self {
                    (value.0, $(value.$i),*)
                }
            }

            impl<$H: Element, $($T: Element),*> AnyTuple for $name<$H, $($T),*> {
                fn arity(&self) -> usize {
                    Self::ARITY
                }

                fn get(&self, index: usize) -> Option<&dyn Element> {
                    match index {
                        $hi => Some(&self.0),
                        $($i => Some(&self.$i),)*
                        _ => None,
                    }
                }
            }

            impl<$H: Element, $($T: Element),*> PartialEq<TupleXXL> for $name<$H, $($T),*> {
                fn eq(&self, other: &TupleXXL) -> bool {
                    self.eq_tuple(other)
                }
            }

            impl<$H: Element, $($T: Element),*> PartialEq<$name<$H, $($T),*>> for TupleXXL {
                fn eq(&self, other: &$name<$H, $($T),*>) -> bool {
                    self.eq_tuple(other)
                }
            }

            impl<$H: fmt::Display, $($T: fmt::Display),*> fmt::Display for $name<$H, $($T),*> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "({}", self.0)?;
                    $(write!(f, ", {}", self.$i)?;)*
                    write!(f, ")")
                }
            }
        )+
    };

    (@count) => { 0 };
    (@count $head:ident $($rest:ident)*) => { 1 + tuples!(@count $($rest)*) };

    (@cons xxl, $H:ident, ($($T:ident)*), ($($i:tt)*)) => {
        /// Prepend an element; the result overflows into [`TupleXXL`].
        pub fn cons<H0: Element>(self, head: H0) -> TupleXXL
        where
            $H: Element,
            $($T: Element,)*
        {
            let mut elements: Vec<Box<dyn Element>> = Vec::with_capacity(1 + Self::ARITY);
            elements.push(Box::new(head));
            elements.push(Box::new(self.0));
            $(elements.push(Box::new(self.$i));)*
            TupleXXL::from_elements(elements)
        }
    };
    (@cons $next:ident, $H:ident, ($($T:ident)*), ($($i:tt)*)) => {
        /// Prepend an element, producing the next arity up.
        pub fn cons<H0>(self, head: H0) -> $next<H0, $H, $($T),*> {
            $next(head, self.0, $(self.$i),*)
        }
    };
}

tuples! {
    /// A tuple of 1 element.
    Tuple1 => prev Tuple0, next Tuple2,
        head(t1 T1 0) rest();
    /// A tuple of 2 elements.
    Tuple2 => prev Tuple1, next Tuple3,
        head(t1 T1 0) rest((t2 T2 1));
    /// A tuple of 3 elements.
    Tuple3 => prev Tuple2, next Tuple4,
        head(t1 T1 0) rest((t2 T2 1) (t3 T3 2));
    /// A tuple of 4 elements.
    Tuple4 => prev Tuple3, next Tuple5,
        head(t1 T1 0) rest((t2 T2 1) (t3 T3 2) (t4 T4 3));
    /// A tuple of 5 elements.
    Tuple5 => prev Tuple4, next Tuple6,
        head(t1 T1 0) rest((t2 T2 1) (t3 T3 2) (t4 T4 3) (t5 T5 4));
    /// A tuple of 6 elements.
    Tuple6 => prev Tuple5, next Tuple7,
        head(t1 T1 0) rest((t2 T2 1) (t3 T3 2) (t4 T4 3) (t5 T5 4) (t6 T6 5));
    /// A tuple of 7 elements.
    Tuple7 => prev Tuple6, next Tuple8,
        head(t1 T1 0) rest((t2 T2 1) (t3 T3 2) (t4 T4 3) (t5 T5 4) (t6 T6 5) (t7 T7 6));
    /// A tuple of 8 elements.
    Tuple8 => prev Tuple7, next Tuple9,
        head(t1 T1 0) rest((t2 T2 1) (t3 T3 2) (t4 T4 3) (t5 T5 4) (t6 T6 5) (t7 T7 6) (t8 T8 7));
    /// A tuple of 9 elements.
    Tuple9 => prev Tuple8, next xxl,
        head(t1 T1 0) rest((t2 T2 1) (t3 T3 2) (t4 T4 3) (t5 T5 4) (t6 T6 5) (t7 T7 6) (t8 T8 7) (t9 T9 8));
}
