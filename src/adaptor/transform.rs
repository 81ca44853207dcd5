use std::fmt;

use crate::capability::Generic;
use crate::func::{Equals, Predicate, TypeName};
use crate::pipe::Adaptor;
use crate::view::{RandomAccessView, SizedView, View};

/// A view that applies a function to every element of another view.
///
/// The function is called each time an element is produced, so it is
/// called again for every additional traversal. Reading a position of a
/// random access `Transform` calls a copy of the function, so it requires
/// the function to be `Clone`.
#[derive(Clone)]
pub struct Transform<V, F> {
    view: V,
    f: F,
}

impl<V, F> Transform<V, F> {
    pub(crate) fn new(view: V, f: F) -> Transform<V, F> {
        Transform { view, f }
    }
}

impl<V: fmt::Debug, F> fmt::Debug for Transform<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("view", &self.view)
            .field("f", &TypeName::<F>::new())
            .finish()
    }
}

impl<V: View, F, B> View for Transform<V, F>
where
    F: FnMut(V::Item) -> B,
{
    type Item = B;
    type Cursor = TransformCursor<V::Cursor, F>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        TransformCursor { iter: self.view.into_cursor(), f: self.f }
    }
}

impl<V: SizedView, F, B> SizedView for Transform<V, F>
where
    F: FnMut(V::Item) -> B,
{
    #[inline]
    fn size(&self) -> usize {
        self.view.size()
    }
}

impl<V: RandomAccessView, F, B> RandomAccessView for Transform<V, F>
where
    F: FnMut(V::Item) -> B + Clone,
{
    #[inline]
    fn get(&self, index: usize) -> Option<B> {
        self.view.get(index).map(self.f.clone())
    }
}

impl_view_ops!([V, F,] Transform<V, F>);

/// The cursor of a [`Transform`](struct.Transform.html).
#[derive(Clone)]
pub struct TransformCursor<I, F> {
    iter: I,
    f: F,
}

impl<I: fmt::Debug, F> fmt::Debug for TransformCursor<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformCursor")
            .field("iter", &self.iter)
            .field("f", &TypeName::<F>::new())
            .finish()
    }
}

impl<I: Iterator, F, B> Iterator for TransformCursor<I, F>
where
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<B> {
        self.iter.nth(n).map(&mut self.f)
    }
}

impl<I: DoubleEndedIterator, F, B> DoubleEndedIterator
    for TransformCursor<I, F>
where
    F: FnMut(I::Item) -> B,
{
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.iter.next_back().map(&mut self.f)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<B> {
        self.iter.nth_back(n).map(&mut self.f)
    }
}

impl<I: ExactSizeIterator, F, B> ExactSizeIterator for TransformCursor<I, F>
where
    F: FnMut(I::Item) -> B,
{}

/// A partially applied `transform`.
#[derive(Clone, Copy, Debug)]
pub struct TransformFn<F> {
    f: F,
}

impl<V: View, F, B> Adaptor<V> for TransformFn<F>
where
    F: FnMut(V::Item) -> B,
{
    type Output = Transform<V, F>;

    #[inline]
    fn apply(self, view: V) -> Transform<V, F> {
        Transform::new(view, self.f)
    }
}

impl_adaptor_ops!([F,] TransformFn<F>);

/// Apply `f` to every element.
#[inline]
pub fn transform<F>(f: F) -> TransformFn<F> {
    TransformFn { f }
}

/// A view that substitutes a fixed value for the elements of another view
/// that satisfy a predicate.
#[derive(Clone)]
pub struct Replace<V: View, P> {
    view: V,
    pred: P,
    new: V::Item,
}

impl<V: View, P> Replace<V, P> {
    pub(crate) fn new(view: V, pred: P, new: V::Item) -> Replace<V, P> {
        Replace { view, pred, new }
    }
}

impl<V, P> fmt::Debug for Replace<V, P>
where
    V: View + fmt::Debug,
    V::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replace")
            .field("view", &self.view)
            .field("pred", &TypeName::<P>::new())
            .field("new", &self.new)
            .finish()
    }
}

impl<V, P> View for Replace<V, P>
where
    V: View,
    V::Item: Clone,
    P: Predicate<V::Item>,
{
    type Item = V::Item;
    type Cursor = ReplaceCursor<V::Cursor, P>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        ReplaceCursor {
            iter: self.view.into_cursor(),
            pred: self.pred,
            new: self.new,
        }
    }
}

impl<V, P> SizedView for Replace<V, P>
where
    V: SizedView,
    V::Item: Clone,
    P: Predicate<V::Item>,
{
    #[inline]
    fn size(&self) -> usize {
        self.view.size()
    }
}

impl_view_ops!([V, P,] Replace<V, P> where [V: View,]);

/// The cursor of a [`Replace`](struct.Replace.html).
#[derive(Clone)]
pub struct ReplaceCursor<I: Iterator, P> {
    iter: I,
    pred: P,
    new: I::Item,
}

impl<I, P> fmt::Debug for ReplaceCursor<I, P>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplaceCursor")
            .field("iter", &self.iter)
            .field("pred", &TypeName::<P>::new())
            .field("new", &self.new)
            .finish()
    }
}

impl<I, P> ReplaceCursor<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: Predicate<I::Item>,
{
    #[inline]
    fn substitute(&mut self, item: I::Item) -> I::Item {
        if self.pred.test(&item) {
            self.new.clone()
        } else {
            item
        }
    }
}

impl<I, P> Iterator for ReplaceCursor<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        Some(self.substitute(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        let item = self.iter.nth(n)?;
        Some(self.substitute(item))
    }
}

impl<I, P> DoubleEndedIterator for ReplaceCursor<I, P>
where
    I: DoubleEndedIterator,
    I::Item: Clone,
    P: Predicate<I::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let item = self.iter.next_back()?;
        Some(self.substitute(item))
    }
}

impl<I, P> ExactSizeIterator for ReplaceCursor<I, P>
where
    I: ExactSizeIterator,
    I::Item: Clone,
    P: Predicate<I::Item>,
{}

/// A partially applied `replace` or `replace_if`.
#[derive(Clone, Copy, Debug)]
pub struct ReplaceFn<P, T> {
    pred: P,
    new: T,
}

impl<V, P, T> Adaptor<V> for ReplaceFn<P, T>
where
    V: View<Item = T>,
    T: Clone,
    P: Predicate<T>,
{
    type Output = Replace<V, P>;

    #[inline]
    fn apply(self, view: V) -> Replace<V, P> {
        Replace::new(view, self.pred, self.new)
    }
}

impl_adaptor_ops!([P, T,] ReplaceFn<P, T>);

/// Substitute `new` for every element equal to `old`.
#[inline]
pub fn replace<D, T>(old: D, new: T) -> ReplaceFn<Equals<D>, T> {
    ReplaceFn { pred: Equals(old), new }
}

/// Substitute `new` for every element for which `pred` returns `true`.
#[inline]
pub fn replace_if<P, T>(pred: P, new: T) -> ReplaceFn<P, T> {
    ReplaceFn { pred, new }
}

/// A view that pairs every element of another view with its position.
#[derive(Clone, Debug)]
pub struct Enumerate<V> {
    view: V,
}

impl<V> Enumerate<V> {
    pub(crate) fn new(view: V) -> Enumerate<V> {
        Enumerate { view }
    }
}

impl<V: View> View for Enumerate<V> {
    type Item = (usize, V::Item);
    type Cursor = EnumerateCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        EnumerateCursor { iter: self.view.into_cursor(), index: 0 }
    }
}

impl<V: SizedView> SizedView for Enumerate<V> {
    #[inline]
    fn size(&self) -> usize {
        self.view.size()
    }
}

impl<V: RandomAccessView> RandomAccessView for Enumerate<V> {
    #[inline]
    fn get(&self, index: usize) -> Option<(usize, V::Item)> {
        self.view.get(index).map(|item| (index, item))
    }
}

impl_view_ops!([V,] Enumerate<V>);

/// The cursor of an [`Enumerate`](struct.Enumerate.html).
///
/// Retreating from the end requires knowing the remaining length, so this
/// cursor is only double ended over exact size cursors.
#[derive(Clone, Debug)]
pub struct EnumerateCursor<I> {
    iter: I,
    index: usize,
}

impl<I: Iterator> Iterator for EnumerateCursor<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<(usize, I::Item)> {
        let item = self.iter.next()?;
        self.index += 1;
        Some((self.index - 1, item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<(usize, I::Item)> {
        let item = self.iter.nth(n)?;
        self.index += n + 1;
        Some((self.index - 1, item))
    }
}

impl<I> DoubleEndedIterator for EnumerateCursor<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<(usize, I::Item)> {
        let item = self.iter.next_back()?;
        Some((self.index + self.iter.len(), item))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<(usize, I::Item)> {
        let item = self.iter.nth_back(n)?;
        Some((self.index + self.iter.len(), item))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for EnumerateCursor<I> {}

/// A partially applied `enumerate`.
#[derive(Clone, Copy, Debug)]
pub struct EnumerateFn(());

impl<V: View> Adaptor<V> for EnumerateFn {
    type Output = Enumerate<V>;

    #[inline]
    fn apply(self, view: V) -> Enumerate<V> {
        Enumerate::new(view)
    }
}

impl_adaptor_ops!([] EnumerateFn);

/// Pair every element with its zero-based position.
#[inline]
pub fn enumerate() -> EnumerateFn {
    EnumerateFn(())
}
