//! The lazy adapter types returned by the functions in [`crate::iter`].
//!
//! Every adapter owns its upstream iterator(s) and pulls from them only
//! when advanced. None of them allocate, with the documented exception of
//! the buffer inside multi-way concatenation's source queue.

use smallvec::SmallVec;

use crate::tuple::{Tuple2, Tuple3};

/// See [`map`](crate::iter::map).
pub struct Mapped<I, F> {
    pub(crate) it: I,
    pub(crate) f: F,
}

impl<B, I: Iterator, F: FnMut(I::Item) -> B> Iterator for Mapped<I, F> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.it.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// See [`filter`](crate::iter::filter).
pub struct Filtered<I, P> {
    pub(crate) it: I,
    pub(crate) pred: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for Filtered<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let value = self.it.next()?;
            if (self.pred)(&value) {
                return Some(value);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.it.size_hint().1)
    }
}

/// See [`filter_not`](crate::iter::filter_not).
pub struct FilteredNot<I, P> {
    pub(crate) it: I,
    pub(crate) pred: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for FilteredNot<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let value = self.it.next()?;
            if !(self.pred)(&value) {
                return Some(value);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.it.size_hint().1)
    }
}

/// See [`filter_map`](crate::iter::filter_map).
pub struct FilterMapped<I, F> {
    pub(crate) it: I,
    pub(crate) f: F,
}

impl<B, I: Iterator, F: FnMut(I::Item) -> Option<B>> Iterator for FilterMapped<I, F> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        loop {
            let value = self.it.next()?;
            if let Some(mapped) = (self.f)(value) {
                return Some(mapped);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.it.size_hint().1)
    }
}

/// See [`flat_map`](crate::iter::flat_map).
pub struct FlatMapped<I, F, J: IntoIterator> {
    pub(crate) it: I,
    pub(crate) f: F,
    pub(crate) current: Option<J::IntoIter>,
}

impl<I, F, J> Iterator for FlatMapped<I, F, J>
where
    I: Iterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(value) = current.next() {
                    return Some(value);
                }
                self.current = None;
            }
            let value = self.it.next()?;
            self.current = Some((self.f)(value).into_iter());
        }
    }
}

/// See [`concat`](crate::iter::concat).
pub struct Concatenated<A, B> {
    pub(crate) first: Option<A>,
    pub(crate) second: B,
}

impl<A, B> Iterator for Concatenated<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = &mut self.first {
            if let Some(value) = first.next() {
                return Some(value);
            }
            // Exhausted sources are dropped as soon as they are observed
            // empty, not when the whole chain finishes.
            self.first = None;
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lo, first_hi) = match &self.first {
            Some(first) => first.size_hint(),
            None => (0, Some(0)),
        };
        let (second_lo, second_hi) = self.second.size_hint();
        let hi = match (first_hi, second_hi) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (first_lo.saturating_add(second_lo), hi)
    }
}

/// See [`concat_all`](crate::iter::concat_all).
pub struct ConcatAll<I> {
    pub(crate) sources: SmallVec<[I; 4]>,
}

impl<I: Iterator> Iterator for ConcatAll<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let front = self.sources.first_mut()?;
            if let Some(value) = front.next() {
                return Some(value);
            }
            self.sources.remove(0);
        }
    }
}

/// See [`prepended`](crate::iter::prepended), [`drop_while`](crate::iter::drop_while)
/// and [`span`](crate::iter::span).
pub struct Prepended<I: Iterator> {
    pub(crate) head: Option<I::Item>,
    pub(crate) it: I,
}

impl<I: Iterator> Iterator for Prepended<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.head.take() {
            Some(head) => Some(head),
            None => self.it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.head.is_some());
        let (lo, hi) = self.it.size_hint();
        (lo.saturating_add(extra), hi.and_then(|h| h.checked_add(extra)))
    }
}

/// See [`appended`](crate::iter::appended).
pub struct Appended<I: Iterator> {
    pub(crate) it: I,
    pub(crate) tail: Option<I::Item>,
}

impl<I: Iterator> Iterator for Appended<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.it.next() {
            Some(value) => Some(value),
            None => self.tail.take(),
        }
    }
}

/// See [`updated`](crate::iter::updated).
pub struct Updated<I: Iterator> {
    pub(crate) it: I,
    pub(crate) index: usize,
    pub(crate) value: Option<I::Item>,
    pub(crate) position: usize,
}

impl<I: Iterator> Iterator for Updated<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let upstream = self.it.next()?;
        let position = self.position;
        self.position += 1;
        if position == self.index {
            if let Some(replacement) = self.value.take() {
                return Some(replacement);
            }
        }
        Some(upstream)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// See [`take`](crate::iter::take).
pub struct Taken<I> {
    pub(crate) it: I,
    pub(crate) remaining: usize,
}

impl<I: Iterator> Iterator for Taken<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.it.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.it.size_hint();
        let hi = match hi {
            Some(h) => Some(h.min(self.remaining)),
            None => Some(self.remaining),
        };
        (lo.min(self.remaining), hi)
    }
}

/// See [`take_while`](crate::iter::take_while).
pub struct TakenWhile<I, P> {
    pub(crate) it: I,
    pub(crate) pred: P,
    pub(crate) done: bool,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Iterator for TakenWhile<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.it.next() {
            Some(value) if (self.pred)(&value) => Some(value),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.it.size_hint().1)
        }
    }
}

/// See [`zip`](crate::iter::zip).
pub struct Zipped<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
}

impl<A: Iterator, B: Iterator> Iterator for Zipped<A, B> {
    type Item = Tuple2<A::Item, B::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(Tuple2(self.a.next()?, self.b.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        zip_size_hint(self.a.size_hint(), self.b.size_hint())
    }
}

/// See [`zip_with`](crate::iter::zip_with).
pub struct ZippedWith<A, B, F> {
    pub(crate) a: A,
    pub(crate) b: B,
    pub(crate) f: F,
}

impl<A, B, F, R> Iterator for ZippedWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let a = self.a.next()?;
        let b = self.b.next()?;
        Some((self.f)(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        zip_size_hint(self.a.size_hint(), self.b.size_hint())
    }
}

/// See [`zip3`](crate::iter::zip3).
pub struct Zipped3<A, B, C> {
    pub(crate) a: A,
    pub(crate) b: B,
    pub(crate) c: C,
}

impl<A: Iterator, B: Iterator, C: Iterator> Iterator for Zipped3<A, B, C> {
    type Item = Tuple3<A::Item, B::Item, C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(Tuple3(self.a.next()?, self.b.next()?, self.c.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let ab = zip_size_hint(self.a.size_hint(), self.b.size_hint());
        zip_size_hint(ab, self.c.size_hint())
    }
}

fn zip_size_hint(
    (a_lo, a_hi): (usize, Option<usize>),
    (b_lo, b_hi): (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let hi = match (a_hi, b_hi) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };
    (a_lo.min(b_lo), hi)
}
