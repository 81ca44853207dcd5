use std::fmt;

use crate::capability::Generic;
use crate::func::{Equals, Not, Predicate, TypeName};
use crate::pipe::Adaptor;
use crate::view::View;

/// A view of the elements of another view that satisfy a predicate.
///
/// This is the view produced by `filter`, `remove` and `remove_if`. Cursors
/// skip forward over invalid elements whenever they advance (and backward,
/// when retreating), so the first element is located lazily by the first
/// call to `next`.
#[derive(Clone)]
pub struct Filter<V, P> {
    view: V,
    pred: P,
}

impl<V, P> Filter<V, P> {
    pub(crate) fn new(view: V, pred: P) -> Filter<V, P> {
        Filter { view, pred }
    }
}

impl<V: fmt::Debug, P> fmt::Debug for Filter<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("view", &self.view)
            .field("pred", &TypeName::<P>::new())
            .finish()
    }
}

impl<V: View, P: Predicate<V::Item>> View for Filter<V, P> {
    type Item = V::Item;
    type Cursor = FilterCursor<V::Cursor, P>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        FilterCursor { iter: self.view.into_cursor(), pred: self.pred }
    }
}

impl_view_ops!([V, P,] Filter<V, P>);

/// The cursor of a [`Filter`](struct.Filter.html).
#[derive(Clone)]
pub struct FilterCursor<I, P> {
    iter: I,
    pred: P,
}

impl<I: fmt::Debug, P> fmt::Debug for FilterCursor<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCursor")
            .field("iter", &self.iter)
            .field("pred", &TypeName::<P>::new())
            .finish()
    }
}

impl<I: Iterator, P: Predicate<I::Item>> Iterator for FilterCursor<I, P> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next()?;
            if self.pred.test(&item) {
                return Some(item);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> DoubleEndedIterator for FilterCursor<I, P>
where
    I: DoubleEndedIterator,
    P: Predicate<I::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next_back()?;
            if self.pred.test(&item) {
                return Some(item);
            }
        }
    }
}

/// A partially applied `filter`, `remove` or `remove_if`.
#[derive(Clone, Copy, Debug)]
pub struct FilterFn<P> {
    pred: P,
}

impl<V: View, P: Predicate<V::Item>> Adaptor<V> for FilterFn<P> {
    type Output = Filter<V, P>;

    #[inline]
    fn apply(self, view: V) -> Filter<V, P> {
        Filter::new(view, self.pred)
    }
}

impl_adaptor_ops!([P,] FilterFn<P>);

/// Keep only the elements for which `pred` returns `true`.
#[inline]
pub fn filter<P>(pred: P) -> FilterFn<P> {
    FilterFn { pred }
}

/// Drop every element equal to `value`.
#[inline]
pub fn remove<D>(value: D) -> FilterFn<Not<Equals<D>>> {
    FilterFn { pred: Not(Equals(value)) }
}

/// Drop every element for which `pred` returns `true`.
#[inline]
pub fn remove_if<P>(pred: P) -> FilterFn<Not<P>> {
    FilterFn { pred: Not(pred) }
}

#[cfg(test)]
mod tests {
    use super::{filter, remove, remove_if};
    use crate::view::{all, View};

    #[test]
    fn keeps_valid_elements() {
        let v = vec![1, 2, 3, 4, 5, 6];
        let got = all(&v).filter(|x| **x % 2 == 0).to_vec();
        assert_eq!(got, vec![&2, &4, &6]);
    }

    #[test]
    fn partial_forms() {
        let v = vec![1, 2, 3, 2, 1];
        assert_eq!((all(&v) | remove(2)).to_vec(), vec![&1, &3, &1]);
        assert_eq!(
            (all(&v) | remove_if(|x: &&i32| **x < 3)).to_vec(),
            vec![&3]
        );
        assert_eq!(
            (all(&v) | filter(|x: &&i32| **x == 1)).count(),
            2
        );
    }

    #[test]
    fn retreats_over_invalid_elements() {
        let v = vec![1, 2, 3, 4, 5];
        let got = all(&v).filter(|x| **x != 5).reverse().to_vec();
        assert_eq!(got, vec![&4, &3, &2, &1]);
    }

    #[test]
    fn empty_when_nothing_valid() {
        let v = vec![1, 3, 5];
        assert_eq!(all(&v).filter(|x| **x % 2 == 0).count(), 0);
    }
}
