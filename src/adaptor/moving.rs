use std::mem;

use crate::adaptor::reverse::Reverse;
use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::{SizedView, View};

/// An element that owns a value which can be moved out of it.
///
/// This is implemented for mutable references to `Default` types: moving
/// out leaves the default value behind.
pub trait TakeOut {
    /// The type of the value moved out.
    type Value;

    /// Move the value out.
    fn take_out(self) -> Self::Value;
}

impl<'a, T: Default> TakeOut for &'a mut T {
    type Value = T;

    #[inline]
    fn take_out(self) -> T {
        mem::take(self)
    }
}

/// A view that moves every element out of a view of mutable references.
///
/// Traversing this view empties its source as it goes: once an element
/// has been produced, its slot holds `Default::default()`.
#[derive(Debug)]
pub struct MoveOut<V> {
    view: V,
}

impl<V> MoveOut<V> {
    pub(crate) fn new(view: V) -> MoveOut<V> {
        MoveOut { view }
    }
}

impl<V> View for MoveOut<V>
where
    V: View,
    V::Item: TakeOut,
{
    type Item = <V::Item as TakeOut>::Value;
    type Cursor = MoveOutCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        MoveOutCursor { iter: self.view.into_cursor() }
    }
}

impl<V> SizedView for MoveOut<V>
where
    V: SizedView,
    V::Item: TakeOut,
{
    #[inline]
    fn size(&self) -> usize {
        self.view.size()
    }
}

impl_view_ops!([V,] MoveOut<V>);

/// The cursor of a [`MoveOut`](struct.MoveOut.html).
#[derive(Debug)]
pub struct MoveOutCursor<I> {
    iter: I,
}

impl<I> Iterator for MoveOutCursor<I>
where
    I: Iterator,
    I::Item: TakeOut,
{
    type Item = <I::Item as TakeOut>::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(TakeOut::take_out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.iter.nth(n).map(TakeOut::take_out)
    }
}

impl<I> DoubleEndedIterator for MoveOutCursor<I>
where
    I: DoubleEndedIterator,
    I::Item: TakeOut,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(TakeOut::take_out)
    }
}

impl<I> ExactSizeIterator for MoveOutCursor<I>
where
    I: ExactSizeIterator,
    I::Item: TakeOut,
{}

/// A partially applied `move_out`.
#[derive(Clone, Copy, Debug)]
pub struct MoveOutFn(());

impl<V> Adaptor<V> for MoveOutFn
where
    V: View,
    V::Item: TakeOut,
{
    type Output = MoveOut<V>;

    #[inline]
    fn apply(self, view: V) -> MoveOut<V> {
        MoveOut::new(view)
    }
}

impl_adaptor_ops!([] MoveOutFn);

/// Move every element out of a view of mutable references.
#[inline]
pub fn move_out() -> MoveOutFn {
    MoveOutFn(())
}

/// A partially applied `move_reverse`.
#[derive(Clone, Copy, Debug)]
pub struct MoveReverseFn(());

impl<V> Adaptor<V> for MoveReverseFn
where
    V: View,
    V::Cursor: DoubleEndedIterator,
    V::Item: TakeOut,
{
    type Output = MoveOut<Reverse<V>>;

    #[inline]
    fn apply(self, view: V) -> MoveOut<Reverse<V>> {
        MoveOut::new(Reverse::new(view))
    }
}

impl_adaptor_ops!([] MoveReverseFn);

/// Move every element out of a view of mutable references, back to front.
#[inline]
pub fn move_reverse() -> MoveReverseFn {
    MoveReverseFn(())
}

#[cfg(test)]
mod tests {
    use super::{move_out, move_reverse};
    use crate::view::{all, View};

    #[test]
    fn moves_and_leaves_defaults() {
        let mut v = vec![String::from("a"), String::from("b")];
        let got: Vec<String> = (all(&mut v) | move_out()).to_vec();
        assert_eq!(got, vec!["a", "b"]);
        assert_eq!(v, vec!["", ""]);
    }

    #[test]
    fn moves_back_to_front() {
        let mut v = vec![vec![1], vec![2, 3]];
        let got = (all(&mut v) | move_reverse()).to_vec();
        assert_eq!(got, vec![vec![2, 3], vec![1]]);
        assert!(v.iter().all(|x| x.is_empty()));
    }

    #[test]
    fn partial_traversal_moves_only_what_was_read() {
        let mut v = vec![1, 2, 3];
        let first = all(&mut v).move_out().take(1).to_vec();
        assert_eq!(first, vec![1]);
        assert_eq!(v, vec![0, 2, 3]);
    }
}
