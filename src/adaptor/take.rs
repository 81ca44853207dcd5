use std::cmp;
use std::fmt;
use std::mem;

use crate::capability::{Contiguous, Generic, Layout, Utf8};
use crate::func::{Predicate, TypeName};
use crate::pipe::Adaptor;
use crate::source::{Span, Text};
use crate::view::{RandomAccessView, SizedView, View};

/// How views of a particular layout are narrowed from either end.
///
/// This is implemented on the layout tags. Views over borrowed slices and
/// strings narrow into sub-slices and sub-strings; every other view
/// narrows into a wrapping view whose cursor counts elements.
pub trait SliceStrategy<V: View>: Layout {
    /// The result of `take`.
    type TakeOutput;
    /// The result of `drop`.
    type DropOutput;
    /// The result of `take_last`.
    type TakeLastOutput;
    /// The result of `drop_last`.
    type DropLastOutput;

    /// Keep at most the first `n` elements of `view`.
    fn take(view: V, n: usize) -> Self::TakeOutput;
    /// Skip the first `n` elements of `view`.
    fn drop(view: V, n: usize) -> Self::DropOutput;
    /// Keep at most the last `n` elements of `view`.
    fn take_last(view: V, n: usize) -> Self::TakeLastOutput;
    /// Skip the last `n` elements of `view`.
    fn drop_last(view: V, n: usize) -> Self::DropLastOutput;
}

impl<V: View> SliceStrategy<V> for Generic {
    type TakeOutput = Take<V>;
    type DropOutput = DropFirst<V>;
    type TakeLastOutput = TakeLast<V>;
    type DropLastOutput = DropLast<V>;

    #[inline]
    fn take(view: V, n: usize) -> Take<V> {
        Take { view, n }
    }

    #[inline]
    fn drop(view: V, n: usize) -> DropFirst<V> {
        DropFirst { view, n }
    }

    #[inline]
    fn take_last(view: V, n: usize) -> TakeLast<V> {
        TakeLast { view, n }
    }

    #[inline]
    fn drop_last(view: V, n: usize) -> DropLast<V> {
        DropLast { view, n }
    }
}

impl<'a, T> SliceStrategy<Span<'a, T>> for Contiguous {
    type TakeOutput = Span<'a, T>;
    type DropOutput = Span<'a, T>;
    type TakeLastOutput = Span<'a, T>;
    type DropLastOutput = Span<'a, T>;

    #[inline]
    fn take(view: Span<'a, T>, n: usize) -> Span<'a, T> {
        let s = view.as_slice();
        Span::new(&s[..cmp::min(n, s.len())])
    }

    #[inline]
    fn drop(view: Span<'a, T>, n: usize) -> Span<'a, T> {
        let s = view.as_slice();
        Span::new(&s[cmp::min(n, s.len())..])
    }

    #[inline]
    fn take_last(view: Span<'a, T>, n: usize) -> Span<'a, T> {
        let s = view.as_slice();
        Span::new(&s[s.len() - cmp::min(n, s.len())..])
    }

    #[inline]
    fn drop_last(view: Span<'a, T>, n: usize) -> Span<'a, T> {
        let s = view.as_slice();
        Span::new(&s[..s.len() - cmp::min(n, s.len())])
    }
}

impl<'a> SliceStrategy<Text<'a>> for Utf8 {
    type TakeOutput = Text<'a>;
    type DropOutput = Text<'a>;
    type TakeLastOutput = Text<'a>;
    type DropLastOutput = Text<'a>;

    #[inline]
    fn take(view: Text<'a>, n: usize) -> Text<'a> {
        Text::new(&view.as_str()[..view.offset_of(n)])
    }

    #[inline]
    fn drop(view: Text<'a>, n: usize) -> Text<'a> {
        Text::new(&view.as_str()[view.offset_of(n)..])
    }

    #[inline]
    fn take_last(view: Text<'a>, n: usize) -> Text<'a> {
        Text::new(&view.as_str()[view.offset_of_last(n)..])
    }

    #[inline]
    fn drop_last(view: Text<'a>, n: usize) -> Text<'a> {
        Text::new(&view.as_str()[..view.offset_of_last(n)])
    }
}

/// A view of at most the first `n` elements of another view.
#[derive(Clone, Debug)]
pub struct Take<V> {
    view: V,
    n: usize,
}

impl<V: View> View for Take<V> {
    type Item = V::Item;
    type Cursor = TakeCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        TakeCursor { iter: self.view.into_cursor(), n: self.n }
    }
}

impl<V: SizedView> SizedView for Take<V> {
    #[inline]
    fn size(&self) -> usize {
        cmp::min(self.n, self.view.size())
    }
}

impl<V: RandomAccessView> RandomAccessView for Take<V> {
    #[inline]
    fn get(&self, index: usize) -> Option<V::Item> {
        if index < self.n {
            self.view.get(index)
        } else {
            None
        }
    }
}

impl_view_ops!([V,] Take<V>);

/// The cursor of a [`Take`](struct.Take.html).
///
/// This never advances the cursor it wraps past the last element it
/// produces.
#[derive(Clone, Debug)]
pub struct TakeCursor<I> {
    iter: I,
    n: usize,
}

impl<I: Iterator> Iterator for TakeCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            return None;
        }
        self.n -= 1;
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.n == 0 {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        let hi = match hi {
            Some(hi) => cmp::min(hi, self.n),
            None => self.n,
        };
        (cmp::min(lo, self.n), Some(hi))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if n < self.n {
            self.n -= n + 1;
            self.iter.nth(n)
        } else {
            if self.n > 0 {
                self.iter.nth(self.n - 1);
                self.n = 0;
            }
            None
        }
    }
}

impl<I> DoubleEndedIterator for TakeCursor<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            return None;
        }
        let n = self.n;
        self.n -= 1;
        self.iter.nth_back(self.iter.len().saturating_sub(n))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for TakeCursor<I> {}

/// A view that skips the first `n` elements of another view.
#[derive(Clone, Debug)]
pub struct DropFirst<V> {
    view: V,
    n: usize,
}

impl<V: View> View for DropFirst<V> {
    type Item = V::Item;
    type Cursor = DropFirstCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        DropFirstCursor { iter: self.view.into_cursor(), n: self.n }
    }
}

impl<V: SizedView> SizedView for DropFirst<V> {
    #[inline]
    fn size(&self) -> usize {
        self.view.size().saturating_sub(self.n)
    }
}

impl<V: RandomAccessView> RandomAccessView for DropFirst<V> {
    #[inline]
    fn get(&self, index: usize) -> Option<V::Item> {
        self.view.get(index.checked_add(self.n)?)
    }
}

impl_view_ops!([V,] DropFirst<V>);

/// The cursor of a [`DropFirst`](struct.DropFirst.html).
///
/// The skipped prefix is stepped over by the first advance, in one jump.
#[derive(Clone, Debug)]
pub struct DropFirstCursor<I> {
    iter: I,
    n: usize,
}

impl<I: Iterator> Iterator for DropFirstCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n > 0 {
            let n = mem::replace(&mut self.n, 0);
            self.iter.nth(n)
        } else {
            self.iter.next()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        (lo.saturating_sub(self.n), hi.map(|hi| hi.saturating_sub(self.n)))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if self.n > 0 {
            let skip = mem::replace(&mut self.n, 0);
            match skip.checked_add(n) {
                Some(total) => self.iter.nth(total),
                None => {
                    self.iter.nth(skip - 1)?;
                    self.iter.nth(n)
                }
            }
        } else {
            self.iter.nth(n)
        }
    }
}

impl<I> DoubleEndedIterator for DropFirstCursor<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        if self.len() > 0 {
            self.iter.next_back()
        } else {
            None
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for DropFirstCursor<I> {}

/// A view of at most the last `n` elements of another view.
///
/// Unless the source is a borrowed slice or string, locating the boundary
/// means knowing how many elements the source has. A source cursor that
/// reports an exact length is skipped past the boundary without reading the
/// skipped elements. Any other source is counted on the first advance of
/// each cursor, on a copy of the source cursor, so the source must be
/// multi-pass.
#[derive(Clone, Debug)]
pub struct TakeLast<V> {
    view: V,
    n: usize,
}

impl<V> View for TakeLast<V>
where
    V: View,
    V::Cursor: Clone,
{
    type Item = V::Item;
    type Cursor = TakeLastCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        TakeLastCursor {
            iter: self.view.into_cursor(),
            n: self.n,
            bounds: None,
        }
    }
}

impl<V> SizedView for TakeLast<V>
where
    V: SizedView,
    V::Cursor: Clone,
{
    #[inline]
    fn size(&self) -> usize {
        cmp::min(self.n, self.view.size())
    }
}

impl<V> RandomAccessView for TakeLast<V>
where
    V: RandomAccessView,
    V::Cursor: Clone,
{
    #[inline]
    fn get(&self, index: usize) -> Option<V::Item> {
        let start = self.view.size().saturating_sub(self.n);
        self.view.get(start.checked_add(index)?)
    }
}

impl_view_ops!([V,] TakeLast<V>);

/// The cursor of a [`TakeLast`](struct.TakeLast.html).
#[derive(Clone, Debug)]
pub struct TakeLastCursor<I> {
    iter: I,
    n: usize,
    /// Once settled, the number of leading elements still to skip and the
    /// number of elements left to produce.
    bounds: Option<(usize, usize)>,
}

impl<I: Iterator + Clone> TakeLastCursor<I> {
    #[inline]
    fn settle(&mut self) -> (usize, usize) {
        match self.bounds {
            Some(bounds) => bounds,
            None => {
                let len = exact_len(&self.iter);
                let skip = len.saturating_sub(self.n);
                let bounds = (skip, cmp::min(len, self.n));
                self.bounds = Some(bounds);
                bounds
            }
        }
    }
}

impl<I: Iterator + Clone> Iterator for TakeLastCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let (skip, remaining) = self.settle();
        if remaining == 0 {
            return None;
        }
        self.bounds = Some((0, remaining - 1));
        if skip > 0 {
            self.iter.nth(skip)
        } else {
            self.iter.next()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.bounds {
            Some((_, remaining)) => (remaining, Some(remaining)),
            None => {
                let (lo, hi) = self.iter.size_hint();
                (cmp::min(lo, self.n), Some(hi.map_or(self.n, |hi| {
                    cmp::min(hi, self.n)
                })))
            }
        }
    }
}

impl<I> DoubleEndedIterator for TakeLastCursor<I>
where
    I: DoubleEndedIterator + Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let (skip, remaining) = self.settle();
        if remaining == 0 {
            return None;
        }
        self.bounds = Some((skip, remaining - 1));
        self.iter.next_back()
    }
}

impl<I: ExactSizeIterator + Clone> ExactSizeIterator for TakeLastCursor<I> {}

/// The number of elements left in `iter`, taken from its size hint when the
/// hint is exact and otherwise counted on a copy.
#[inline]
fn exact_len<I: Iterator + Clone>(iter: &I) -> usize {
    match iter.size_hint() {
        (lo, Some(hi)) if lo == hi => lo,
        _ => iter.clone().count(),
    }
}

/// A view that skips the last `n` elements of another view.
///
/// Like [`TakeLast`](struct.TakeLast.html), the boundary is located from
/// the source cursor's exact length when it reports one, and otherwise by
/// counting the source's elements on a copy of the source cursor.
#[derive(Clone, Debug)]
pub struct DropLast<V> {
    view: V,
    n: usize,
}

impl<V> View for DropLast<V>
where
    V: View,
    V::Cursor: Clone,
{
    type Item = V::Item;
    type Cursor = DropLastCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        DropLastCursor {
            iter: self.view.into_cursor(),
            n: self.n,
            remaining: None,
        }
    }
}

impl<V> SizedView for DropLast<V>
where
    V: SizedView,
    V::Cursor: Clone,
{
    #[inline]
    fn size(&self) -> usize {
        self.view.size().saturating_sub(self.n)
    }
}

impl<V> RandomAccessView for DropLast<V>
where
    V: RandomAccessView,
    V::Cursor: Clone,
{
    #[inline]
    fn get(&self, index: usize) -> Option<V::Item> {
        if index < self.size() {
            self.view.get(index)
        } else {
            None
        }
    }
}

impl_view_ops!([V,] DropLast<V>);

/// The cursor of a [`DropLast`](struct.DropLast.html).
#[derive(Clone, Debug)]
pub struct DropLastCursor<I> {
    iter: I,
    n: usize,
    remaining: Option<usize>,
}

impl<I: Iterator + Clone> DropLastCursor<I> {
    #[inline]
    fn settle(&mut self) -> usize {
        match self.remaining {
            Some(remaining) => remaining,
            None => {
                let remaining = exact_len(&self.iter).saturating_sub(self.n);
                self.remaining = Some(remaining);
                remaining
            }
        }
    }
}

impl<I: Iterator + Clone> Iterator for DropLastCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let remaining = self.settle();
        if remaining == 0 {
            return None;
        }
        self.remaining = Some(remaining - 1);
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => {
                let (lo, hi) = self.iter.size_hint();
                (
                    lo.saturating_sub(self.n),
                    hi.map(|hi| hi.saturating_sub(self.n)),
                )
            }
        }
    }
}

impl<I> DoubleEndedIterator for DropLastCursor<I>
where
    I: DoubleEndedIterator + ExactSizeIterator + Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let remaining = self.settle();
        if remaining == 0 {
            return None;
        }
        let skip = self.iter.len() - remaining;
        self.remaining = Some(remaining - 1);
        self.iter.nth_back(skip)
    }
}

impl<I: ExactSizeIterator + Clone> ExactSizeIterator for DropLastCursor<I> {}

/// A view of the leading elements of another view that satisfy a
/// predicate.
#[derive(Clone)]
pub struct TakeWhile<V, P> {
    view: V,
    pred: P,
}

impl<V, P> TakeWhile<V, P> {
    pub(crate) fn new(view: V, pred: P) -> TakeWhile<V, P> {
        TakeWhile { view, pred }
    }
}

impl<V: fmt::Debug, P> fmt::Debug for TakeWhile<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("view", &self.view)
            .field("pred", &TypeName::<P>::new())
            .finish()
    }
}

impl<V: View, P: Predicate<V::Item>> View for TakeWhile<V, P> {
    type Item = V::Item;
    type Cursor = TakeWhileCursor<V::Cursor, P>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        TakeWhileCursor {
            iter: self.view.into_cursor(),
            pred: self.pred,
            done: false,
        }
    }
}

impl_view_ops!([V, P,] TakeWhile<V, P>);

/// The cursor of a [`TakeWhile`](struct.TakeWhile.html).
#[derive(Clone)]
pub struct TakeWhileCursor<I, P> {
    iter: I,
    pred: P,
    done: bool,
}

impl<I: fmt::Debug, P> fmt::Debug for TakeWhileCursor<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhileCursor")
            .field("iter", &self.iter)
            .field("pred", &TypeName::<P>::new())
            .field("done", &self.done)
            .finish()
    }
}

impl<I: Iterator, P: Predicate<I::Item>> Iterator for TakeWhileCursor<I, P> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.next()?;
        if self.pred.test(&item) {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

/// A view that skips the leading elements of another view that satisfy a
/// predicate.
#[derive(Clone)]
pub struct DropWhile<V, P> {
    view: V,
    pred: P,
}

impl<V, P> DropWhile<V, P> {
    pub(crate) fn new(view: V, pred: P) -> DropWhile<V, P> {
        DropWhile { view, pred }
    }
}

impl<V: fmt::Debug, P> fmt::Debug for DropWhile<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropWhile")
            .field("view", &self.view)
            .field("pred", &TypeName::<P>::new())
            .finish()
    }
}

impl<V: View, P: Predicate<V::Item>> View for DropWhile<V, P> {
    type Item = V::Item;
    type Cursor = DropWhileCursor<V::Cursor, P>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        DropWhileCursor {
            iter: self.view.into_cursor(),
            pred: self.pred,
            settled: false,
        }
    }
}

impl_view_ops!([V, P,] DropWhile<V, P>);

/// The cursor of a [`DropWhile`](struct.DropWhile.html).
///
/// The skipped prefix is located by the first advance.
#[derive(Clone)]
pub struct DropWhileCursor<I, P> {
    iter: I,
    pred: P,
    settled: bool,
}

impl<I: fmt::Debug, P> fmt::Debug for DropWhileCursor<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropWhileCursor")
            .field("iter", &self.iter)
            .field("pred", &TypeName::<P>::new())
            .field("settled", &self.settled)
            .finish()
    }
}

impl<I: Iterator, P: Predicate<I::Item>> Iterator for DropWhileCursor<I, P> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.settled {
            return self.iter.next();
        }
        self.settled = true;
        loop {
            let item = self.iter.next()?;
            if !self.pred.test(&item) {
                return Some(item);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        if self.settled {
            (lo, hi)
        } else {
            (0, hi)
        }
    }
}

/// A partially applied `take`.
#[derive(Clone, Copy, Debug)]
pub struct TakeFn {
    n: usize,
}

impl<V: View> Adaptor<V> for TakeFn
where
    V::Layout: SliceStrategy<V>,
{
    type Output = <V::Layout as SliceStrategy<V>>::TakeOutput;

    #[inline]
    fn apply(self, view: V) -> Self::Output {
        <V::Layout as SliceStrategy<V>>::take(view, self.n)
    }
}

impl_adaptor_ops!([] TakeFn);

/// Keep at most the first `n` elements.
#[inline]
pub fn take(n: usize) -> TakeFn {
    TakeFn { n }
}

/// A partially applied `drop`.
#[derive(Clone, Copy, Debug)]
pub struct DropFn {
    n: usize,
}

impl<V: View> Adaptor<V> for DropFn
where
    V::Layout: SliceStrategy<V>,
{
    type Output = <V::Layout as SliceStrategy<V>>::DropOutput;

    #[inline]
    fn apply(self, view: V) -> Self::Output {
        <V::Layout as SliceStrategy<V>>::drop(view, self.n)
    }
}

impl_adaptor_ops!([] DropFn);

/// Skip the first `n` elements.
#[inline]
pub fn drop(n: usize) -> DropFn {
    DropFn { n }
}

/// A partially applied `take_last`.
#[derive(Clone, Copy, Debug)]
pub struct TakeLastFn {
    n: usize,
}

impl<V: View> Adaptor<V> for TakeLastFn
where
    V::Layout: SliceStrategy<V>,
{
    type Output = <V::Layout as SliceStrategy<V>>::TakeLastOutput;

    #[inline]
    fn apply(self, view: V) -> Self::Output {
        <V::Layout as SliceStrategy<V>>::take_last(view, self.n)
    }
}

impl_adaptor_ops!([] TakeLastFn);

/// Keep at most the last `n` elements.
#[inline]
pub fn take_last(n: usize) -> TakeLastFn {
    TakeLastFn { n }
}

/// A partially applied `drop_last`.
#[derive(Clone, Copy, Debug)]
pub struct DropLastFn {
    n: usize,
}

impl<V: View> Adaptor<V> for DropLastFn
where
    V::Layout: SliceStrategy<V>,
{
    type Output = <V::Layout as SliceStrategy<V>>::DropLastOutput;

    #[inline]
    fn apply(self, view: V) -> Self::Output {
        <V::Layout as SliceStrategy<V>>::drop_last(view, self.n)
    }
}

impl_adaptor_ops!([] DropLastFn);

/// Skip the last `n` elements.
#[inline]
pub fn drop_last(n: usize) -> DropLastFn {
    DropLastFn { n }
}

/// A partially applied `take_while`.
#[derive(Clone, Copy, Debug)]
pub struct TakeWhileFn<P> {
    pred: P,
}

impl<V: View, P: Predicate<V::Item>> Adaptor<V> for TakeWhileFn<P> {
    type Output = TakeWhile<V, P>;

    #[inline]
    fn apply(self, view: V) -> TakeWhile<V, P> {
        TakeWhile::new(view, self.pred)
    }
}

impl_adaptor_ops!([P,] TakeWhileFn<P>);

/// Keep elements up to the first one for which `pred` returns `false`.
#[inline]
pub fn take_while<P>(pred: P) -> TakeWhileFn<P> {
    TakeWhileFn { pred }
}

/// A partially applied `drop_while`.
#[derive(Clone, Copy, Debug)]
pub struct DropWhileFn<P> {
    pred: P,
}

impl<V: View, P: Predicate<V::Item>> Adaptor<V> for DropWhileFn<P> {
    type Output = DropWhile<V, P>;

    #[inline]
    fn apply(self, view: V) -> DropWhile<V, P> {
        DropWhile::new(view, self.pred)
    }
}

impl_adaptor_ops!([P,] DropWhileFn<P>);

/// Skip elements up to the first one for which `pred` returns `false`.
#[inline]
pub fn drop_while<P>(pred: P) -> DropWhileFn<P> {
    DropWhileFn { pred }
}

#[cfg(test)]
mod tests {
    use super::{drop, drop_last, take, take_last};
    use crate::source::{generate, iota, seq, Span, Text};
    use crate::view::{all, RandomAccessView, SizedView, View};

    #[test]
    fn contiguous_narrows_to_spans() {
        let v = vec![1, 2, 3, 4, 5];
        let s: Span<i32> = all(&v).take(2);
        assert_eq!(s.as_slice(), &[1, 2]);
        let s: Span<i32> = all(&v) | drop(3);
        assert_eq!(s.as_slice(), &[4, 5]);
        let s: Span<i32> = all(&v).take_last(2);
        assert_eq!(s.as_slice(), &[4, 5]);
        let s: Span<i32> = all(&v) | drop_last(4);
        assert_eq!(s.as_slice(), &[1]);
        assert!(all(&v).take_last(9).as_slice() == &v[..]);
        assert!(all(&v).drop_last(9).is_empty());
    }

    #[test]
    fn text_narrows_by_characters() {
        let t: Text = all("héllo").take(2);
        assert_eq!(t.as_str(), "hé");
        assert_eq!(all("héllo").drop(2).as_str(), "llo");
        assert_eq!(all("héllo").take_last(4).as_str(), "éllo");
        assert_eq!(all("héllo").drop_last(3).as_str(), "hé");
        assert_eq!(all("hé").drop(5).as_str(), "");
    }

    #[test]
    fn generic_take_does_not_overrun() {
        let mut calls = 0;
        let got = generate((), |_| {
            calls += 1;
            Some(calls)
        })
        .take(3)
        .to_vec();
        assert_eq!(got, vec![1, 2, 3]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn generic_narrowing() {
        let src = seq(vec![1, 2, 3, 4, 5].into_iter().filter(|x| x % 2 == 1));
        assert_eq!(src.clone().take(2).to_vec(), vec![1, 3]);
        assert_eq!(src.clone().drop(1).to_vec(), vec![3, 5]);
        assert_eq!(src.clone().take_last(2).to_vec(), vec![3, 5]);
        assert_eq!(src.clone().drop_last(1).to_vec(), vec![1, 3]);
        assert_eq!(src.drop_last(7).count(), 0);
    }

    #[test]
    fn generic_narrowing_is_random_access() {
        let view = iota(0, 10).drop(2).take(5);
        assert_eq!(view.size(), 5);
        assert_eq!(view.at(4), 6);
        assert_eq!(view.get(5), None);
        let view = iota(0, 10).take_last(3);
        assert_eq!(view.at(0), 7);
        let view = iota(0, 10).drop_last(3);
        assert_eq!(view.size(), 7);
        assert_eq!(view.get(7), None);
    }

    #[test]
    fn generic_narrowing_both_ends() {
        let got = (iota(0, 10) | take(4)).reverse().to_vec();
        assert_eq!(got, vec![3, 2, 1, 0]);
        let got = (iota(0, 10) | drop(7)).reverse().to_vec();
        assert_eq!(got, vec![9, 8, 7]);
        let got = (iota(0, 10) | take_last(2)).reverse().to_vec();
        assert_eq!(got, vec![9, 8]);
        let got = (iota(0, 10) | drop_last(8)).reverse().to_vec();
        assert_eq!(got, vec![1, 0]);

        let mut cur = iota(0, 6).drop_last(2).into_cursor();
        assert_eq!(cur.next_back(), Some(3));
        assert_eq!(cur.next(), Some(0));
        assert_eq!(cur.len(), 2);
        assert_eq!(cur.next_back(), Some(2));
        assert_eq!(cur.next_back(), Some(1));
        assert_eq!(cur.next_back(), None);
    }

    #[test]
    fn narrowing_the_tail_reads_only_what_it_produces() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let doubled = iota(0, 10).transform(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert_eq!(doubled.clone().take_last(2).to_vec(), vec![16, 18]);
        assert_eq!(calls.get(), 2);

        calls.set(0);
        assert_eq!(doubled.clone().drop_last(8).to_vec(), vec![0, 2]);
        assert_eq!(calls.get(), 2);

        calls.set(0);
        let mut cur = doubled.take_last(3).into_cursor();
        assert_eq!(cur.next_back(), Some(18));
        assert_eq!(cur.next(), Some(14));
        assert_eq!(cur.next(), Some(16));
        assert_eq!(cur.next_back(), None);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn while_variants() {
        let v = vec![1, 2, 3, 1, 2];
        assert_eq!(all(&v).take_while(|x| **x < 3).to_vec(), vec![&1, &2]);
        assert_eq!(
            all(&v).drop_while(|x| **x < 3).to_vec(),
            vec![&3, &1, &2]
        );
        assert_eq!(all(&v).drop_while(|_| true).count(), 0);
    }
}
