use std::cmp;
use std::iter::Fuse;

use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::{IntoView, RandomAccessView, SizedView, View};

/// A view that alternates between the elements of two views.
///
/// Without extension, elements are produced in pairs: one from the first
/// view, then one from the second. The view ends at the first pair that
/// can't be completed, so an element of the first view with no partner in
/// the second is never produced.
///
/// With extension, once either side runs out, the rest of the other side
/// follows.
#[derive(Clone, Debug)]
pub struct Interleave<A, B> {
    a: A,
    b: B,
    extend: bool,
}

impl<A, B> Interleave<A, B> {
    pub(crate) fn new(a: A, b: B, extend: bool) -> Interleave<A, B> {
        Interleave { a, b, extend }
    }
}

impl<A, B> View for Interleave<A, B>
where
    A: View,
    B: View<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = InterleaveCursor<A::Cursor, B::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        InterleaveCursor {
            a: self.a.into_cursor().fuse(),
            b: self.b.into_cursor().fuse(),
            extend: self.extend,
            pending: None,
            b_turn: false,
            done: false,
        }
    }
}

impl<A, B> SizedView for Interleave<A, B>
where
    A: SizedView,
    B: SizedView<Item = A::Item>,
{
    fn size(&self) -> usize {
        let (n, m) = (self.a.size(), self.b.size());
        if self.extend {
            n + m
        } else {
            2 * cmp::min(n, m)
        }
    }
}

impl<A, B> RandomAccessView for Interleave<A, B>
where
    A: RandomAccessView,
    B: RandomAccessView<Item = A::Item>,
{
    fn get(&self, index: usize) -> Option<A::Item> {
        let (n, m) = (self.a.size(), self.b.size());
        let paired = 2 * cmp::min(n, m);
        if index < paired {
            return if index % 2 == 0 {
                self.a.get(index / 2)
            } else {
                self.b.get(index / 2)
            };
        }
        if !self.extend {
            return None;
        }
        let rest = index - paired / 2;
        if n > m {
            self.a.get(rest)
        } else {
            self.b.get(rest)
        }
    }
}

impl_view_ops!([A, B,] Interleave<A, B>);

/// The cursor of an [`Interleave`](struct.Interleave.html).
#[derive(Clone, Debug)]
pub struct InterleaveCursor<A: Iterator, B> {
    a: Fuse<A>,
    b: Fuse<B>,
    extend: bool,
    /// The second half of a pair whose first half was already produced.
    pending: Option<A::Item>,
    b_turn: bool,
    done: bool,
}

impl<A, B> Iterator for InterleaveCursor<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if self.extend {
            return if self.b_turn {
                self.b_turn = false;
                self.b.next().or_else(|| self.a.next())
            } else {
                self.b_turn = true;
                self.a.next().or_else(|| self.b.next())
            };
        }
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        if self.done {
            return None;
        }
        match (self.a.next(), self.b.next()) {
            (Some(x), Some(y)) => {
                self.pending = Some(y);
                Some(x)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (alo, ahi) = self.a.size_hint();
        let (blo, bhi) = self.b.size_hint();
        if self.extend {
            let hi = match (ahi, bhi) {
                (Some(x), Some(y)) => x.checked_add(y),
                _ => None,
            };
            return (alo.saturating_add(blo), hi);
        }
        let pending = self.pending.is_some() as usize;
        if self.done {
            return (pending, Some(pending));
        }
        let lo = cmp::min(alo, blo).saturating_mul(2).saturating_add(pending);
        let hi = match (ahi, bhi) {
            (Some(x), Some(y)) => Some(cmp::min(x, y)),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        let hi = hi
            .and_then(|h| h.checked_mul(2))
            .and_then(|h| h.checked_add(pending));
        (lo, hi)
    }
}

impl<A, B> ExactSizeIterator for InterleaveCursor<A, B>
where
    A: ExactSizeIterator,
    B: ExactSizeIterator<Item = A::Item>,
{}

/// A partially applied `interleave` or `interleave_extend`.
#[derive(Clone, Copy, Debug)]
pub struct InterleaveFn<O> {
    other: O,
    extend: bool,
}

impl<V, O> Adaptor<V> for InterleaveFn<O>
where
    V: View,
    O: IntoView<Item = V::Item>,
{
    type Output = Interleave<V, O::View>;

    #[inline]
    fn apply(self, view: V) -> Interleave<V, O::View> {
        Interleave::new(view, self.other.into_view(), self.extend)
    }
}

impl_adaptor_ops!([O,] InterleaveFn<O>);

/// Alternate with the elements of `other`, stopping at the first pair that
/// can't be completed.
#[inline]
pub fn interleave<O: IntoView>(other: O) -> InterleaveFn<O> {
    InterleaveFn { other, extend: false }
}

/// Alternate with the elements of `other`. Once either side runs out, the
/// rest of the other follows.
#[inline]
pub fn interleave_extend<O: IntoView>(other: O) -> InterleaveFn<O> {
    InterleaveFn { other, extend: true }
}

/// A view that inserts a separator between every two consecutive elements.
#[derive(Clone, Debug)]
pub struct Intersperse<V: View> {
    view: V,
    sep: V::Item,
}

impl<V: View> Intersperse<V> {
    pub(crate) fn new(view: V, sep: V::Item) -> Intersperse<V> {
        Intersperse { view, sep }
    }
}

impl<V> View for Intersperse<V>
where
    V: View,
    V::Item: Clone,
{
    type Item = V::Item;
    type Cursor = IntersperseCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        IntersperseCursor {
            iter: self.view.into_cursor(),
            sep: self.sep,
            peeked: None,
            sep_next: false,
        }
    }
}

impl<V> SizedView for Intersperse<V>
where
    V: SizedView,
    V::Item: Clone,
{
    #[inline]
    fn size(&self) -> usize {
        (2 * self.view.size()).saturating_sub(1)
    }
}

impl<V> RandomAccessView for Intersperse<V>
where
    V: RandomAccessView,
    V::Item: Clone,
{
    fn get(&self, index: usize) -> Option<V::Item> {
        if index >= self.size() {
            None
        } else if index % 2 == 0 {
            self.view.get(index / 2)
        } else {
            Some(self.sep.clone())
        }
    }
}

impl_view_ops!([V,] Intersperse<V> where [V: View,]);

/// The cursor of an [`Intersperse`](struct.Intersperse.html).
#[derive(Clone, Debug)]
pub struct IntersperseCursor<I: Iterator> {
    iter: I,
    sep: I::Item,
    /// An element read ahead to decide that a separator is due.
    peeked: Option<I::Item>,
    sep_next: bool,
}

impl<I> Iterator for IntersperseCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.sep_next {
            let item = self.iter.next()?;
            self.peeked = Some(item);
            self.sep_next = false;
            return Some(self.sep.clone());
        }
        let item = match self.peeked.take() {
            Some(item) => item,
            None => self.iter.next()?,
        };
        self.sep_next = true;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let peeked = self.peeked.is_some() as usize;
        let (lo, hi) = self.iter.size_hint();
        let count = |n: usize| -> Option<usize> {
            if self.sep_next {
                n.checked_mul(2)
            } else {
                n.checked_add(peeked)?
                    .checked_mul(2)
                    .map(|m| m.saturating_sub(1))
            }
        };
        (count(lo).unwrap_or(usize::MAX), hi.and_then(count))
    }
}

impl<I> ExactSizeIterator for IntersperseCursor<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{}

/// A partially applied `intersperse`.
#[derive(Clone, Copy, Debug)]
pub struct IntersperseFn<T> {
    sep: T,
}

impl<V, T> Adaptor<V> for IntersperseFn<T>
where
    V: View<Item = T>,
    T: Clone,
{
    type Output = Intersperse<V>;

    #[inline]
    fn apply(self, view: V) -> Intersperse<V> {
        Intersperse::new(view, self.sep)
    }
}

impl_adaptor_ops!([T,] IntersperseFn<T>);

/// Insert `sep` between every two consecutive elements.
#[inline]
pub fn intersperse<T>(sep: T) -> IntersperseFn<T> {
    IntersperseFn { sep }
}
