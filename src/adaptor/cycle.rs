use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::View;

/// A view that repeats another view endlessly.
///
/// The source's cursor must be `Clone`: every repetition restarts from a
/// copy of the first cursor. An empty source produces an empty view rather
/// than looping forever.
#[derive(Clone, Debug)]
pub struct Cycle<V> {
    view: V,
}

impl<V> Cycle<V> {
    pub(crate) fn new(view: V) -> Cycle<V> {
        Cycle { view }
    }
}

impl<V> View for Cycle<V>
where
    V: View,
    V::Cursor: Clone,
{
    type Item = V::Item;
    type Cursor = CycleCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        let orig = self.view.into_cursor();
        CycleCursor { iter: orig.clone(), orig }
    }
}

impl_view_ops!([V,] Cycle<V>);

/// The cursor of a [`Cycle`](struct.Cycle.html).
#[derive(Clone, Debug)]
pub struct CycleCursor<I> {
    orig: I,
    iter: I,
}

impl<I: Iterator + Clone> Iterator for CycleCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.iter.next() {
            Some(item) => Some(item),
            None => {
                self.iter = self.orig.clone();
                self.iter.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.orig.size_hint() {
            (0, Some(0)) => (0, Some(0)),
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}

/// A partially applied `cycle`.
#[derive(Clone, Copy, Debug)]
pub struct CycleFn(());

impl<V> Adaptor<V> for CycleFn
where
    V: View,
    V::Cursor: Clone,
{
    type Output = Cycle<V>;

    #[inline]
    fn apply(self, view: V) -> Cycle<V> {
        Cycle::new(view)
    }
}

impl_adaptor_ops!([] CycleFn);

/// Repeat endlessly. An empty view stays empty.
#[inline]
pub fn cycle() -> CycleFn {
    CycleFn(())
}

#[cfg(test)]
mod tests {
    use super::cycle;
    use crate::adaptor::take;
    use crate::source::iota;
    use crate::view::{all, View};

    #[test]
    fn repeats() {
        let got = (iota(1, 4) | cycle() | take(7)).to_vec();
        assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 1]);
        let got: String = all("ab").cycle().take(5).to();
        assert_eq!(got, "ababa");
    }

    #[test]
    fn empty_stays_empty() {
        let v: Vec<i32> = vec![];
        assert_eq!(all(&v).cycle().count(), 0);
        assert_eq!(all(&v).cycle().into_cursor().size_hint(), (0, Some(0)));
    }

    #[test]
    fn unbounded_hint() {
        let cur = iota(0, 2).cycle().into_cursor();
        assert_eq!(cur.size_hint(), (usize::MAX, None));
    }
}
