use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::{RandomAccessView, SizedView, View};

/// A view that traverses another view back to front.
///
/// The source's cursor must be double ended.
#[derive(Clone, Debug)]
pub struct Reverse<V> {
    view: V,
}

impl<V> Reverse<V> {
    pub(crate) fn new(view: V) -> Reverse<V> {
        Reverse { view }
    }
}

impl<V> View for Reverse<V>
where
    V: View,
    V::Cursor: DoubleEndedIterator,
{
    type Item = V::Item;
    type Cursor = ReverseCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        ReverseCursor { iter: self.view.into_cursor() }
    }
}

impl<V> SizedView for Reverse<V>
where
    V: SizedView,
    V::Cursor: DoubleEndedIterator,
{
    #[inline]
    fn size(&self) -> usize {
        self.view.size()
    }
}

impl<V> RandomAccessView for Reverse<V>
where
    V: RandomAccessView,
    V::Cursor: DoubleEndedIterator,
{
    #[inline]
    fn get(&self, index: usize) -> Option<V::Item> {
        let size = self.view.size();
        if index < size {
            self.view.get(size - 1 - index)
        } else {
            None
        }
    }
}

impl_view_ops!([V,] Reverse<V>);

/// The cursor of a [`Reverse`](struct.Reverse.html).
#[derive(Clone, Debug)]
pub struct ReverseCursor<I> {
    iter: I,
}

impl<I: DoubleEndedIterator> Iterator for ReverseCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next_back()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth_back(n)
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for ReverseCursor<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth(n)
    }
}

impl<I> ExactSizeIterator for ReverseCursor<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{}

/// A partially applied `reverse`.
#[derive(Clone, Copy, Debug)]
pub struct ReverseFn(());

impl<V> Adaptor<V> for ReverseFn
where
    V: View,
    V::Cursor: DoubleEndedIterator,
{
    type Output = Reverse<V>;

    #[inline]
    fn apply(self, view: V) -> Reverse<V> {
        Reverse::new(view)
    }
}

impl_adaptor_ops!([] ReverseFn);

/// Traverse back to front.
#[inline]
pub fn reverse() -> ReverseFn {
    ReverseFn(())
}

#[cfg(test)]
mod tests {
    use super::reverse;
    use crate::source::iota;
    use crate::view::{all, RandomAccessView, View};

    #[test]
    fn reverses() {
        let v = vec![1, 2, 3];
        assert_eq!((all(&v) | reverse()).to_vec(), vec![&3, &2, &1]);
        assert_eq!(all("abc").reverse().to::<String>(), "cba");
    }

    #[test]
    fn double_reverse_is_identity() {
        let got = iota(0, 5).reverse().reverse().to_vec();
        assert_eq!(got, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn reversed_random_access() {
        let view = iota(0, 5).reverse();
        assert_eq!(view.at(0), 4);
        assert_eq!(view.at(4), 0);
        assert_eq!(view.get(5), None);
        let mut cur = view.into_cursor();
        assert_eq!(cur.nth(1), Some(3));
        assert_eq!(cur.nth_back(1), Some(1));
    }
}
