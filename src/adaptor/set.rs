/*!
Set algorithms over sorted views.

Each operation merges two views that are sorted with respect to the same
ordering, in a single pass over both, holding one element of lookahead per
side. The result is sorted too. Elements that compare equal are paired off
one for one, so views with repeated elements behave as multisets: a value
occurring three times on one side and once on the other is in the
intersection once and in the difference twice.

When a value is produced from both sides, the element from the first view
is the one kept.

Inputs that aren't sorted aren't detected. The result is then unspecified,
but traversal still ends.
*/

use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;

use crate::capability::Generic;
use crate::func::{ByKey, Compare, Natural, TypeName};
use crate::pipe::Adaptor;
use crate::view::{IntoView, View};

/// Which side holds the smallest head.
enum Head {
    A,
    B,
    Both,
}

/// The merge state shared by every sorted set cursor.
pub struct Merge<A: Iterator, B: Iterator, C> {
    a: Peekable<A>,
    b: Peekable<B>,
    cmp: C,
}

impl<A, B, C> Merge<A, B, C>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    C: Compare<A::Item>,
{
    fn new(a: A, b: B, cmp: C) -> Merge<A, B, C> {
        Merge { a: a.peekable(), b: b.peekable(), cmp }
    }

    fn head(&mut self) -> Option<Head> {
        let ord = match (self.a.peek(), self.b.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(x), Some(y)) => self.cmp.compare(x, y),
        };
        Some(match ord {
            Ordering::Less => Head::A,
            Ordering::Greater => Head::B,
            Ordering::Equal => Head::Both,
        })
    }
}

impl<A, B, C> Clone for Merge<A, B, C>
where
    A: Iterator + Clone,
    B: Iterator + Clone,
    A::Item: Clone,
    B::Item: Clone,
    C: Clone,
{
    fn clone(&self) -> Merge<A, B, C> {
        Merge { a: self.a.clone(), b: self.b.clone(), cmp: self.cmp.clone() }
    }
}

impl<A, B, C> fmt::Debug for Merge<A, B, C>
where
    A: Iterator + fmt::Debug,
    B: Iterator + fmt::Debug,
    A::Item: fmt::Debug,
    B::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Merge")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("cmp", &TypeName::<C>::new())
            .finish()
    }
}

macro_rules! sorted_set_op {
    (
        $(#[$vdoc:meta])*
        view $view:ident, cursor $cursor:ident, adaptor $func:ident;
        $(#[$ndoc:meta])*
        fn $natural:ident;
        $(#[$bdoc:meta])*
        fn $by:ident;
        $(#[$kdoc:meta])*
        fn $by_key:ident;
    ) => {
        $(#[$vdoc])*
        #[derive(Clone)]
        pub struct $view<A, B, C> {
            a: A,
            b: B,
            cmp: C,
        }

        impl<A, B, C> $view<A, B, C> {
            pub(crate) fn new(a: A, b: B, cmp: C) -> $view<A, B, C> {
                $view { a, b, cmp }
            }
        }

        impl<A: fmt::Debug, B: fmt::Debug, C> fmt::Debug for $view<A, B, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($view))
                    .field("a", &self.a)
                    .field("b", &self.b)
                    .field("cmp", &TypeName::<C>::new())
                    .finish()
            }
        }

        impl<A, B, C> View for $view<A, B, C>
        where
            A: View,
            B: View<Item = A::Item>,
            C: Compare<A::Item>,
        {
            type Item = A::Item;
            type Cursor = $cursor<A::Cursor, B::Cursor, C>;
            type Layout = Generic;

            #[inline]
            fn into_cursor(self) -> Self::Cursor {
                $cursor {
                    merge: Merge::new(
                        self.a.into_cursor(),
                        self.b.into_cursor(),
                        self.cmp,
                    ),
                }
            }
        }

        impl_view_ops!([A, B, C,] $view<A, B, C>);

        #[doc = concat!(
            "The cursor of a [`", stringify!($view), "`](struct.",
            stringify!($view), ".html)."
        )]
        pub struct $cursor<A: Iterator, B: Iterator, C> {
            merge: Merge<A, B, C>,
        }

        impl<A, B, C> Clone for $cursor<A, B, C>
        where
            A: Iterator,
            B: Iterator,
            Merge<A, B, C>: Clone,
        {
            fn clone(&self) -> $cursor<A, B, C> {
                $cursor { merge: self.merge.clone() }
            }
        }

        impl<A, B, C> fmt::Debug for $cursor<A, B, C>
        where
            A: Iterator,
            B: Iterator,
            Merge<A, B, C>: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field("merge", &self.merge)
                    .finish()
            }
        }

        #[doc = concat!("A partially applied `", stringify!($natural), "`.")]
        #[derive(Clone, Copy)]
        pub struct $func<O, C> {
            other: O,
            cmp: C,
        }

        impl<O: fmt::Debug, C> fmt::Debug for $func<O, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($func))
                    .field("other", &self.other)
                    .field("cmp", &TypeName::<C>::new())
                    .finish()
            }
        }

        impl<V, O, C> Adaptor<V> for $func<O, C>
        where
            V: View,
            O: IntoView<Item = V::Item>,
            C: Compare<V::Item>,
        {
            type Output = $view<V, O::View, C>;

            #[inline]
            fn apply(self, view: V) -> Self::Output {
                $view::new(view, self.other.into_view(), self.cmp)
            }
        }

        impl_adaptor_ops!([O, C,] $func<O, C>);

        $(#[$ndoc])*
        #[inline]
        pub fn $natural<O: IntoView>(other: O) -> $func<O, Natural> {
            $func { other, cmp: Natural }
        }

        $(#[$bdoc])*
        #[inline]
        pub fn $by<O: IntoView, F>(other: O, cmp: F) -> $func<O, F> {
            $func { other, cmp }
        }

        $(#[$kdoc])*
        #[inline]
        pub fn $by_key<O: IntoView, F>(
            other: O,
            key: F,
        ) -> $func<O, ByKey<F>> {
            $func { other, cmp: ByKey(key) }
        }
    }
}

sorted_set_op! {
    /// The sorted merge of two sorted views.
    ///
    /// Elements present on both sides are produced once.
    view Union, cursor UnionCursor, adaptor UnionFn;
    /// Merge with the sorted `other`.
    fn set_union;
    /// Merge with the sorted `other`, ordered by `cmp`.
    fn set_union_by;
    /// Merge with the sorted `other`, ordered by a projected key.
    fn set_union_by_key;
}

sorted_set_op! {
    /// The elements of a sorted view that are also in another.
    view Intersection, cursor IntersectionCursor, adaptor IntersectionFn;
    /// Keep the elements also in the sorted `other`.
    fn set_intersection;
    /// Keep the elements also in the sorted `other`, ordered by `cmp`.
    fn set_intersection_by;
    /// Keep the elements also in the sorted `other`, ordered by a projected
    /// key.
    fn set_intersection_by_key;
}

sorted_set_op! {
    /// The elements of a sorted view that are not in another.
    view Difference, cursor DifferenceCursor, adaptor DifferenceFn;
    /// Drop the elements that are in the sorted `other`.
    fn set_difference;
    /// Drop the elements that are in the sorted `other`, ordered by `cmp`.
    fn set_difference_by;
    /// Drop the elements that are in the sorted `other`, ordered by a
    /// projected key.
    fn set_difference_by_key;
}

sorted_set_op! {
    /// The sorted merge of the elements that are in exactly one of two
    /// sorted views.
    view SymmetricDifference,
    cursor SymmetricDifferenceCursor,
    adaptor SymmetricDifferenceFn;
    /// Merge with the sorted `other`, dropping elements on both sides.
    fn set_symmetric_difference;
    /// Like `set_symmetric_difference`, ordered by `cmp`.
    fn set_symmetric_difference_by;
    /// Like `set_symmetric_difference`, ordered by a projected key.
    fn set_symmetric_difference_by_key;
}

impl<A, B, C> Iterator for UnionCursor<A, B, C>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    C: Compare<A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        let m = &mut self.merge;
        match m.head()? {
            Head::A => m.a.next(),
            Head::B => m.b.next(),
            Head::Both => {
                m.b.next();
                m.a.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (alo, ahi) = self.merge.a.size_hint();
        let (blo, bhi) = self.merge.b.size_hint();
        let hi = match (ahi, bhi) {
            (Some(x), Some(y)) => x.checked_add(y),
            _ => None,
        };
        (std::cmp::max(alo, blo), hi)
    }
}

impl<A, B, C> Iterator for IntersectionCursor<A, B, C>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    C: Compare<A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        let m = &mut self.merge;
        loop {
            if m.a.peek().is_none() || m.b.peek().is_none() {
                return None;
            }
            match m.head()? {
                Head::A => {
                    m.a.next();
                }
                Head::B => {
                    m.b.next();
                }
                Head::Both => {
                    m.b.next();
                    return m.a.next();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, ahi) = self.merge.a.size_hint();
        let (_, bhi) = self.merge.b.size_hint();
        let hi = match (ahi, bhi) {
            (Some(x), Some(y)) => Some(std::cmp::min(x, y)),
            (x, None) => x,
            (None, y) => y,
        };
        (0, hi)
    }
}

impl<A, B, C> Iterator for DifferenceCursor<A, B, C>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    C: Compare<A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        let m = &mut self.merge;
        loop {
            m.a.peek()?;
            match m.head()? {
                Head::A => return m.a.next(),
                Head::B => {
                    m.b.next();
                }
                Head::Both => {
                    m.a.next();
                    m.b.next();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.merge.a.size_hint().1)
    }
}

impl<A, B, C> Iterator for SymmetricDifferenceCursor<A, B, C>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    C: Compare<A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        let m = &mut self.merge;
        loop {
            match m.head()? {
                Head::A => return m.a.next(),
                Head::B => return m.b.next(),
                Head::Both => {
                    m.a.next();
                    m.b.next();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, ahi) = self.merge.a.size_hint();
        let (_, bhi) = self.merge.b.size_hint();
        let hi = match (ahi, bhi) {
            (Some(x), Some(y)) => x.checked_add(y),
            _ => None,
        };
        (0, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        set_difference, set_intersection, set_symmetric_difference,
        set_union, set_union_by,
    };
    use crate::source::iota;
    use crate::view::{all, View};

    fn a() -> Vec<i32> {
        (0..10).collect()
    }

    fn b() -> Vec<i32> {
        (5..15).collect()
    }

    #[test]
    fn union() {
        let (a, b) = (a(), b());
        let got = (all(&a) | set_union(&b)).to_vec();
        let want: Vec<i32> = (0..15).collect();
        assert_eq!(got, want.iter().collect::<Vec<_>>());
    }

    #[test]
    fn intersection() {
        let (a, b) = (a(), b());
        let got = (all(&a) | set_intersection(&b)).to_vec();
        assert_eq!(got, vec![&5, &6, &7, &8, &9]);
    }

    #[test]
    fn difference() {
        let (a, b) = (a(), b());
        let got = (all(&a) | set_difference(&b)).to_vec();
        assert_eq!(got, vec![&0, &1, &2, &3, &4]);
        let got = all(&b).set_difference(&a).to_vec();
        assert_eq!(got, vec![&10, &11, &12, &13, &14]);
    }

    #[test]
    fn symmetric_difference() {
        let (a, b) = (a(), b());
        let got = (all(&a) | set_symmetric_difference(&b)).to_vec();
        let want: Vec<i32> = (0..5).chain(10..15).collect();
        assert_eq!(got, want.iter().collect::<Vec<_>>());
    }

    #[test]
    fn multisets_pair_off() {
        let a = vec![1, 1, 1, 2];
        let b = vec![1, 2, 2];
        assert_eq!(all(&a).set_intersection(&b).to_vec(), vec![&1, &2]);
        assert_eq!(all(&a).set_difference(&b).to_vec(), vec![&1, &1]);
        assert_eq!(all(&a).set_union(&b).to_vec(), vec![&1, &1, &1, &2, &2]);
        assert_eq!(
            all(&a).set_symmetric_difference(&b).to_vec(),
            vec![&1, &1, &2],
        );
    }

    #[test]
    fn custom_order() {
        let a = vec![9, 5, 1];
        let b = vec![6, 5, 4];
        let desc = |x: &&i32, y: &&i32| y.cmp(x);
        let got = (all(&a) | set_union_by(&b, desc)).to_vec();
        assert_eq!(got, vec![&9, &6, &5, &4, &1]);
    }

    #[test]
    fn by_key_keeps_first_side() {
        let a = vec![(1, 'a'), (3, 'a')];
        let b = vec![(1, 'b'), (2, 'b')];
        let got = all(&a).set_union_by_key(&b, |p| p.0).to_vec();
        assert_eq!(got, vec![&(1, 'a'), &(2, 'b'), &(3, 'a')]);
    }

    #[test]
    fn empty_sides() {
        let got = iota(0, 3).set_union(iota(0, 0)).to_vec();
        assert_eq!(got, vec![0, 1, 2]);
        assert_eq!(iota(0, 0).set_intersection(iota(0, 3)).count(), 0);
        assert_eq!(iota(0, 3).set_difference(iota(0, 0)).count(), 3);
    }
}
