use crate::adaptor::zip::IntoViews;
use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::{IntoView, RandomAccessView, SizedView, View};

/// A view over the elements of several views, one after the other.
///
/// Every source must produce the same element type.
#[derive(Clone, Debug)]
pub struct Concat<T> {
    views: T,
}

impl<T> Concat<T> {
    pub(crate) fn new(views: T) -> Concat<T> {
        Concat { views }
    }
}

/// The cursor of a [`Concat`](struct.Concat.html).
///
/// The sources in `front..back` still have elements to produce. Both ends
/// share the source they meet in.
#[derive(Clone, Debug)]
pub struct ConcatCursor<T> {
    cursors: T,
    front: usize,
    back: usize,
}

macro_rules! concat_tuple {
    ($len:expr; $first:ident . $fidx:tt $(, $v:ident . $idx:tt)+) => {
        impl<$first, $($v),+> View for Concat<($first, $($v,)+)>
        where
            $first: View,
            $($v: View<Item = $first::Item>),+
        {
            type Item = $first::Item;
            type Cursor = ConcatCursor<(
                $first::Cursor, $($v::Cursor,)+
            )>;
            type Layout = Generic;

            #[inline]
            fn into_cursor(self) -> Self::Cursor {
                ConcatCursor {
                    cursors: (
                        self.views.$fidx.into_cursor(),
                        $(self.views.$idx.into_cursor(),)+
                    ),
                    front: 0,
                    back: $len,
                }
            }
        }

        impl<$first, $($v),+> SizedView for Concat<($first, $($v,)+)>
        where
            $first: SizedView,
            $($v: SizedView<Item = $first::Item>),+
        {
            #[inline]
            fn size(&self) -> usize {
                self.views.$fidx.size() $(+ self.views.$idx.size())+
            }
        }

        impl<$first, $($v),+> RandomAccessView for Concat<($first, $($v,)+)>
        where
            $first: RandomAccessView,
            $($v: RandomAccessView<Item = $first::Item>),+
        {
            fn get(&self, mut index: usize) -> Option<Self::Item> {
                let mut size = self.views.$fidx.size();
                if index < size {
                    return self.views.$fidx.get(index);
                }
                $(
                    index -= size;
                    size = self.views.$idx.size();
                    if index < size {
                        return self.views.$idx.get(index);
                    }
                )+
                None
            }
        }

        impl_view_ops!([$first, $($v,)+] Concat<($first, $($v,)+)>);

        impl<$first, $($v),+> ConcatCursor<($first, $($v,)+)>
        where
            $first: Iterator,
            $($v: Iterator<Item = $first::Item>),+
        {
            fn hint_of(&self, which: usize) -> (usize, Option<usize>) {
                match which {
                    $fidx => self.cursors.$fidx.size_hint(),
                    $($idx => self.cursors.$idx.size_hint(),)+
                    _ => (0, Some(0)),
                }
            }

            fn nth_of(
                &mut self,
                which: usize,
                n: usize,
            ) -> Option<$first::Item> {
                match which {
                    $fidx => self.cursors.$fidx.nth(n),
                    $($idx => self.cursors.$idx.nth(n),)+
                    _ => None,
                }
            }
        }

        impl<$first, $($v),+> Iterator for ConcatCursor<($first, $($v,)+)>
        where
            $first: Iterator,
            $($v: Iterator<Item = $first::Item>),+
        {
            type Item = $first::Item;

            fn next(&mut self) -> Option<Self::Item> {
                while self.front < self.back {
                    let item = match self.front {
                        $fidx => self.cursors.$fidx.next(),
                        $($idx => self.cursors.$idx.next(),)+
                        _ => None,
                    };
                    if item.is_some() {
                        return item;
                    }
                    self.front += 1;
                }
                None
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let (mut lo, mut hi) = (0usize, Some(0usize));
                for which in self.front..self.back {
                    let (l, h) = self.hint_of(which);
                    lo = lo.saturating_add(l);
                    hi = match (hi, h) {
                        (Some(x), Some(y)) => x.checked_add(y),
                        _ => None,
                    };
                }
                (lo, hi)
            }

            /// Sources whose remaining length is exactly known are skipped
            /// over whole.
            fn nth(&mut self, mut n: usize) -> Option<Self::Item> {
                while self.front < self.back {
                    let (lo, hi) = self.hint_of(self.front);
                    if hi != Some(lo) {
                        break;
                    }
                    if n < lo {
                        return self.nth_of(self.front, n);
                    }
                    n -= lo;
                    self.front += 1;
                }
                for _ in 0..n {
                    self.next()?;
                }
                self.next()
            }
        }

        impl<$first, $($v),+> DoubleEndedIterator
            for ConcatCursor<($first, $($v,)+)>
        where
            $first: DoubleEndedIterator,
            $($v: DoubleEndedIterator<Item = $first::Item>),+
        {
            fn next_back(&mut self) -> Option<Self::Item> {
                while self.front < self.back {
                    let item = match self.back - 1 {
                        $fidx => self.cursors.$fidx.next_back(),
                        $($idx => self.cursors.$idx.next_back(),)+
                        _ => None,
                    };
                    if item.is_some() {
                        return item;
                    }
                    self.back -= 1;
                }
                None
            }
        }

        impl<$first, $($v),+> ExactSizeIterator
            for ConcatCursor<($first, $($v,)+)>
        where
            $first: ExactSizeIterator,
            $($v: ExactSizeIterator<Item = $first::Item>),+
        {}
    }
}

concat_tuple!(2; A.0, B.1);
concat_tuple!(3; A.0, B.1, C.2);
concat_tuple!(4; A.0, B.1, C.2, D.3);

/// A partially applied `concat`.
#[derive(Clone, Copy, Debug)]
pub struct ConcatFn<O> {
    other: O,
}

impl<V, O> Adaptor<V> for ConcatFn<O>
where
    V: View,
    O: IntoView<Item = V::Item>,
{
    type Output = Concat<(V, O::View)>;

    #[inline]
    fn apply(self, view: V) -> Concat<(V, O::View)> {
        Concat::new((view, self.other.into_view()))
    }
}

impl_adaptor_ops!([O,] ConcatFn<O>);

/// Follow with the elements of `other`.
#[inline]
pub fn concat<O: IntoView>(other: O) -> ConcatFn<O> {
    ConcatFn { other }
}

/// Concatenate two to four sources producing the same element type.
///
/// ```rust
/// use seqview::adaptor::concat_all;
/// use seqview::View;
///
/// let got: String = concat_all(("ab", "", "cd")).to();
/// assert_eq!(got, "abcd");
/// ```
#[inline]
pub fn concat_all<T: IntoViews>(sources: T) -> Concat<T::Views> {
    Concat::new(sources.into_views())
}
