use std::fmt;

use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::{IntoView, View};

/// The cursor type of the view that `X` converts into.
type InnerCursor<X> = <<X as IntoView>::View as View>::Cursor;

/// A view that flattens a view of sequences.
///
/// Empty inner sequences are skipped.
#[derive(Clone, Debug)]
pub struct Join<V> {
    view: V,
}

impl<V> Join<V> {
    pub(crate) fn new(view: V) -> Join<V> {
        Join { view }
    }
}

impl<V> View for Join<V>
where
    V: View,
    V::Item: IntoView,
{
    type Item = <V::Item as IntoView>::Item;
    type Cursor = JoinCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        JoinCursor { outer: self.view.into_cursor(), inner: None }
    }
}

impl_view_ops!([V,] Join<V>);

/// The cursor of a [`Join`](struct.Join.html).
pub struct JoinCursor<I>
where
    I: Iterator,
    I::Item: IntoView,
{
    outer: I,
    inner: Option<InnerCursor<I::Item>>,
}

impl<I> Clone for JoinCursor<I>
where
    I: Iterator + Clone,
    I::Item: IntoView,
    InnerCursor<I::Item>: Clone,
{
    fn clone(&self) -> JoinCursor<I> {
        JoinCursor { outer: self.outer.clone(), inner: self.inner.clone() }
    }
}

impl<I> fmt::Debug for JoinCursor<I>
where
    I: Iterator + fmt::Debug,
    I::Item: IntoView,
    InnerCursor<I::Item>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinCursor")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<I> Iterator for JoinCursor<I>
where
    I: Iterator,
    I::Item: IntoView,
{
    type Item = <I::Item as IntoView>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(ref mut inner) = self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
            }
            let next = self.outer.next()?;
            self.inner = Some(next.into_view().into_cursor());
        }
    }
}

/// A view that flattens a view of sequences, with a separator between
/// every two consecutive non-empty sequences.
pub struct JoinWith<V>
where
    V: View,
    V::Item: IntoView,
{
    view: V,
    sep: <V::Item as IntoView>::Item,
}

impl<V> JoinWith<V>
where
    V: View,
    V::Item: IntoView,
{
    pub(crate) fn new(
        view: V,
        sep: <V::Item as IntoView>::Item,
    ) -> JoinWith<V> {
        JoinWith { view, sep }
    }
}

impl<V> Clone for JoinWith<V>
where
    V: View + Clone,
    V::Item: IntoView,
    <V::Item as IntoView>::Item: Clone,
{
    fn clone(&self) -> JoinWith<V> {
        JoinWith { view: self.view.clone(), sep: self.sep.clone() }
    }
}

impl<V> fmt::Debug for JoinWith<V>
where
    V: View + fmt::Debug,
    V::Item: IntoView,
    <V::Item as IntoView>::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinWith")
            .field("view", &self.view)
            .field("sep", &self.sep)
            .finish()
    }
}

impl<V> View for JoinWith<V>
where
    V: View,
    V::Item: IntoView,
    <V::Item as IntoView>::Item: Clone,
{
    type Item = <V::Item as IntoView>::Item;
    type Cursor = JoinWithCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        JoinWithCursor {
            outer: self.view.into_cursor(),
            inner: None,
            pending: None,
            sep: self.sep,
            started: false,
        }
    }
}

impl_view_ops!([V,] JoinWith<V> where [V: View, V::Item: IntoView,]);

/// The cursor of a [`JoinWith`](struct.JoinWith.html).
///
/// Whether a separator is due can only be known once the next non-empty
/// inner sequence has been found, so the first element of that sequence is
/// held back while the separator is produced.
pub struct JoinWithCursor<I>
where
    I: Iterator,
    I::Item: IntoView,
{
    outer: I,
    inner: Option<InnerCursor<I::Item>>,
    pending: Option<<I::Item as IntoView>::Item>,
    sep: <I::Item as IntoView>::Item,
    started: bool,
}

impl<I> Clone for JoinWithCursor<I>
where
    I: Iterator + Clone,
    I::Item: IntoView,
    InnerCursor<I::Item>: Clone,
    <I::Item as IntoView>::Item: Clone,
{
    fn clone(&self) -> JoinWithCursor<I> {
        JoinWithCursor {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            pending: self.pending.clone(),
            sep: self.sep.clone(),
            started: self.started,
        }
    }
}

impl<I> fmt::Debug for JoinWithCursor<I>
where
    I: Iterator + fmt::Debug,
    I::Item: IntoView,
    InnerCursor<I::Item>: fmt::Debug,
    <I::Item as IntoView>::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinWithCursor")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("pending", &self.pending)
            .field("sep", &self.sep)
            .field("started", &self.started)
            .finish()
    }
}

impl<I> Iterator for JoinWithCursor<I>
where
    I: Iterator,
    I::Item: IntoView,
    <I::Item as IntoView>::Item: Clone,
{
    type Item = <I::Item as IntoView>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        if let Some(ref mut inner) = self.inner {
            if let Some(item) = inner.next() {
                return Some(item);
            }
        }
        loop {
            let mut cursor = self.outer.next()?.into_view().into_cursor();
            if let Some(first) = cursor.next() {
                self.inner = Some(cursor);
                if self.started {
                    self.pending = Some(first);
                    return Some(self.sep.clone());
                }
                self.started = true;
                return Some(first);
            }
        }
    }
}

/// A partially applied `join`.
#[derive(Clone, Copy, Debug)]
pub struct JoinFn(());

impl<V> Adaptor<V> for JoinFn
where
    V: View,
    V::Item: IntoView,
{
    type Output = Join<V>;

    #[inline]
    fn apply(self, view: V) -> Join<V> {
        Join::new(view)
    }
}

impl_adaptor_ops!([] JoinFn);

/// Flatten a view of sequences.
#[inline]
pub fn join() -> JoinFn {
    JoinFn(())
}

/// A partially applied `join_with`.
#[derive(Clone, Copy, Debug)]
pub struct JoinWithFn<T> {
    sep: T,
}

impl<V, T> Adaptor<V> for JoinWithFn<T>
where
    V: View,
    V::Item: IntoView<Item = T>,
    T: Clone,
{
    type Output = JoinWith<V>;

    #[inline]
    fn apply(self, view: V) -> JoinWith<V> {
        JoinWith::new(view, self.sep)
    }
}

impl_adaptor_ops!([T,] JoinWithFn<T>);

/// Flatten a view of sequences, inserting `sep` between every two
/// consecutive non-empty sequences.
#[inline]
pub fn join_with<T>(sep: T) -> JoinWithFn<T> {
    JoinWithFn { sep }
}
