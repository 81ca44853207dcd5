use std::cmp;

use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::{IntoView, RandomAccessView, SizedView, View};

/// A tuple of values that each convert into a view.
///
/// This is implemented for tuples of two, three and four elements, and is
/// what lets [`zip_all`](fn.zip_all.html) and
/// [`concat_all`](fn.concat_all.html) accept slices, strings and views
/// alike.
pub trait IntoViews {
    /// The tuple of views.
    type Views;

    /// Convert every element of the tuple into a view.
    fn into_views(self) -> Self::Views;
}

/// A view over tuples of corresponding elements of several views.
///
/// The view ends with the shortest of its sources.
#[derive(Clone, Debug)]
pub struct Zip<T> {
    views: T,
}

impl<T> Zip<T> {
    pub(crate) fn new(views: T) -> Zip<T> {
        Zip { views }
    }
}

/// The cursor of a [`Zip`](struct.Zip.html).
#[derive(Clone, Debug)]
pub struct ZipCursor<T> {
    cursors: T,
}

#[inline]
fn min_hint(
    (alo, ahi): (usize, Option<usize>),
    (blo, bhi): (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let hi = match (ahi, bhi) {
        (Some(x), Some(y)) => Some(cmp::min(x, y)),
        (x, None) => x,
        (None, y) => y,
    };
    (cmp::min(alo, blo), hi)
}

macro_rules! zip_tuple {
    ($($v:ident . $idx:tt),+) => {
        impl<$($v: IntoView),+> IntoViews for ($($v,)+) {
            type Views = ($($v::View,)+);

            #[inline]
            fn into_views(self) -> Self::Views {
                ($(self.$idx.into_view(),)+)
            }
        }

        impl<$($v: View),+> View for Zip<($($v,)+)> {
            type Item = ($($v::Item,)+);
            type Cursor = ZipCursor<($($v::Cursor,)+)>;
            type Layout = Generic;

            #[inline]
            fn into_cursor(self) -> Self::Cursor {
                ZipCursor { cursors: ($(self.views.$idx.into_cursor(),)+) }
            }
        }

        impl<$($v: SizedView),+> SizedView for Zip<($($v,)+)> {
            #[inline]
            fn size(&self) -> usize {
                let mut size = usize::MAX;
                $(size = cmp::min(size, self.views.$idx.size());)+
                size
            }
        }

        impl<$($v: RandomAccessView),+> RandomAccessView
            for Zip<($($v,)+)>
        {
            #[inline]
            fn get(&self, index: usize) -> Option<Self::Item> {
                Some(($(self.views.$idx.get(index)?,)+))
            }
        }

        impl_view_ops!([$($v,)+] Zip<($($v,)+)>);

        impl<$($v: Iterator),+> Iterator for ZipCursor<($($v,)+)> {
            type Item = ($($v::Item,)+);

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                Some(($(self.cursors.$idx.next()?,)+))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let mut hint = (usize::MAX, None);
                $(hint = min_hint(hint, self.cursors.$idx.size_hint());)+
                hint
            }
        }

        impl<$($v),+> DoubleEndedIterator for ZipCursor<($($v,)+)>
        where
            $($v: DoubleEndedIterator + ExactSizeIterator),+
        {
            fn next_back(&mut self) -> Option<Self::Item> {
                let len = self.len();
                $(
                    let excess = self.cursors.$idx.len() - len;
                    if excess > 0 {
                        self.cursors.$idx.nth_back(excess - 1);
                    }
                )+
                Some(($(self.cursors.$idx.next_back()?,)+))
            }
        }

        impl<$($v: ExactSizeIterator),+> ExactSizeIterator
            for ZipCursor<($($v,)+)>
        {}
    }
}

zip_tuple!(A.0, B.1);
zip_tuple!(A.0, B.1, C.2);
zip_tuple!(A.0, B.1, C.2, D.3);

/// A partially applied `zip`.
#[derive(Clone, Copy, Debug)]
pub struct ZipFn<O> {
    other: O,
}

impl<V, O> Adaptor<V> for ZipFn<O>
where
    V: View,
    O: IntoView,
{
    type Output = Zip<(V, O::View)>;

    #[inline]
    fn apply(self, view: V) -> Zip<(V, O::View)> {
        Zip::new((view, self.other.into_view()))
    }
}

impl_adaptor_ops!([O,] ZipFn<O>);

/// Pair up elements with those of `other`, stopping at the end of the
/// shorter one.
#[inline]
pub fn zip<O: IntoView>(other: O) -> ZipFn<O> {
    ZipFn { other }
}

/// Zip two to four sources together.
///
/// ```rust
/// use seqview::adaptor::zip_all;
/// use seqview::View;
///
/// let nums = vec![1, 2, 3];
/// let got = zip_all((&nums, "ab", 10..20u8)).to_vec();
/// assert_eq!(got, vec![(&1, 'a', 10), (&2, 'b', 11)]);
/// ```
#[inline]
pub fn zip_all<T: IntoViews>(sources: T) -> Zip<T::Views> {
    Zip::new(sources.into_views())
}

#[cfg(test)]
mod tests {
    use super::{zip, zip_all};
    use crate::source::iota;
    use crate::view::{all, RandomAccessView, SizedView, View};

    #[test]
    fn stops_at_shortest() {
        let v = vec!['a', 'b', 'c'];
        let got = (iota(0, 10) | zip(&v)).to_vec();
        assert_eq!(got, vec![(0, &'a'), (1, &'b'), (2, &'c')]);
        assert_eq!(iota(0, 10).zip(&v).size(), 3);
    }

    #[test]
    fn random_access() {
        let view = zip_all((iota(0, 5), iota(10, 13), iota(20, 30)));
        assert_eq!(view.size(), 3);
        assert_eq!(view.at(2), (2, 12, 22));
        assert_eq!(view.get(3), None);
    }

    #[test]
    fn back_to_front_trims_to_shortest() {
        let got = iota(0, 5).zip(iota(10, 13)).reverse().to_vec();
        assert_eq!(got, vec![(2, 12), (1, 11), (0, 10)]);
    }

    #[test]
    fn zips_strings() {
        let got = all("abc").zip("xy").to_vec();
        assert_eq!(got, vec![('a', 'x'), ('b', 'y')]);
    }
}
