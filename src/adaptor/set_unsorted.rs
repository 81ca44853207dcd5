/*!
Set algorithms over views that aren't sorted.

Only equality is needed. Membership is decided by scanning the other view
from the start, so each operation costs time proportional to the product of
the lengths of its inputs, and every view scanned must be multi-pass.

Repeated values inside the first view are never collapsed. Values taken from
the second view (by union and symmetric difference) are produced at most
once each.
*/

use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::{IntoView, View};

/// Returns true if and only if `view` produces an element equal to `item`.
fn contains<V>(view: &V, item: &V::Item) -> bool
where
    V: View + Clone,
    V::Item: PartialEq,
{
    view.cursor().any(|x| x == *item)
}

/// Like `contains`, but only looks at the first `n` elements.
fn prefix_contains<V>(view: &V, n: usize, item: &V::Item) -> bool
where
    V: View + Clone,
    V::Item: PartialEq,
{
    view.cursor().take(n).any(|x| x == *item)
}

macro_rules! unsorted_set_op {
    (
        $(#[$vdoc:meta])*
        view $view:ident, cursor $cursor:ident, adaptor $func:ident,
        where [$($bound:tt)*];
        $(#[$fdoc:meta])*
        fn $name:ident;
        |$this:ident| $ctor:expr
    ) => {
        $(#[$vdoc])*
        #[derive(Clone, Debug)]
        pub struct $view<A, B> {
            a: A,
            b: B,
        }

        impl<A, B> $view<A, B> {
            pub(crate) fn new(a: A, b: B) -> $view<A, B> {
                $view { a, b }
            }
        }

        impl<A, B> View for $view<A, B>
        where
            A: View,
            B: View<Item = A::Item> + Clone,
            A::Item: PartialEq,
            $($bound)*
        {
            type Item = A::Item;
            type Cursor = $cursor<A, B>;
            type Layout = Generic;

            #[inline]
            fn into_cursor(self) -> Self::Cursor {
                let $this = self;
                $ctor
            }
        }

        impl_view_ops!([A, B,] $view<A, B>);

        #[doc = concat!("A partially applied `", stringify!($name), "`.")]
        #[derive(Clone, Copy, Debug)]
        pub struct $func<O> {
            other: O,
        }

        impl<V, O> Adaptor<V> for $func<O>
        where
            V: View,
            O: IntoView<Item = V::Item>,
            O::View: Clone,
            V::Item: PartialEq,
            $view<V, O::View>: View,
        {
            type Output = $view<V, O::View>;

            #[inline]
            fn apply(self, view: V) -> Self::Output {
                $view::new(view, self.other.into_view())
            }
        }

        impl_adaptor_ops!([O,] $func<O>);

        $(#[$fdoc])*
        #[inline]
        pub fn $name<O: IntoView>(other: O) -> $func<O> {
            $func { other }
        }
    }
}

unsorted_set_op! {
    /// The elements of a view that are also in another.
    view IntersectionUnsorted,
    cursor ScanCursor,
    adaptor IntersectionUnsortedFn,
    where [];
    /// Keep the elements that are also in `other`.
    fn set_intersection_unsorted;
    |v| ScanCursor { iter: v.a.into_cursor(), other: v.b, keep: true }
}

unsorted_set_op! {
    /// The elements of a view that are not in another.
    view DifferenceUnsorted,
    cursor ScanCursor,
    adaptor DifferenceUnsortedFn,
    where [];
    /// Drop the elements that are in `other`.
    fn set_difference_unsorted;
    |v| ScanCursor { iter: v.a.into_cursor(), other: v.b, keep: false }
}

unsorted_set_op! {
    /// Every element of a view, followed by the elements of another that
    /// aren't in it.
    view UnionUnsorted,
    cursor MergeCursor,
    adaptor UnionUnsortedFn,
    where [A: Clone,];
    /// Follow with the elements of `other` that aren't in this view.
    fn set_union_unsorted;
    |v| MergeCursor::new(v.a, v.b, false)
}

unsorted_set_op! {
    /// The elements of a view that aren't in another, followed by the
    /// elements of the other that aren't in the first.
    view SymmetricDifferenceUnsorted,
    cursor MergeCursor,
    adaptor SymmetricDifferenceUnsortedFn,
    where [A: Clone,];
    /// Keep the elements that are in exactly one of this view and `other`.
    fn set_symmetric_difference_unsorted;
    |v| MergeCursor::new(v.a, v.b, true)
}

/// The cursor of an
/// [`IntersectionUnsorted`](struct.IntersectionUnsorted.html) or a
/// [`DifferenceUnsorted`](struct.DifferenceUnsorted.html).
pub struct ScanCursor<A: View, B> {
    iter: A::Cursor,
    other: B,
    /// Keep the elements found in `other` rather than the ones missing.
    keep: bool,
}

impl<A, B> Clone for ScanCursor<A, B>
where
    A: View,
    A::Cursor: Clone,
    B: Clone,
{
    fn clone(&self) -> ScanCursor<A, B> {
        ScanCursor {
            iter: self.iter.clone(),
            other: self.other.clone(),
            keep: self.keep,
        }
    }
}

impl<A, B> std::fmt::Debug for ScanCursor<A, B>
where
    A: View,
    A::Cursor: std::fmt::Debug,
    B: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanCursor")
            .field("iter", &self.iter)
            .field("other", &self.other)
            .field("keep", &self.keep)
            .finish()
    }
}

impl<A, B> Iterator for ScanCursor<A, B>
where
    A: View,
    B: View<Item = A::Item> + Clone,
    A::Item: PartialEq,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        loop {
            let item = self.iter.next()?;
            if contains(&self.other, &item) == self.keep {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// The cursor of a [`UnionUnsorted`](struct.UnionUnsorted.html) or a
/// [`SymmetricDifferenceUnsorted`](struct.SymmetricDifferenceUnsorted.html).
///
/// The first view is traversed first, then the second. `index` counts the
/// elements of the second view read so far, which is the prefix an element
/// of the second view is checked against for repeats.
pub struct MergeCursor<A: View, B: View> {
    a: A,
    b: B,
    a_iter: A::Cursor,
    b_iter: B::Cursor,
    index: usize,
    /// Drop the elements of the first view that are in the second.
    drop_common: bool,
}

impl<A, B> MergeCursor<A, B>
where
    A: View + Clone,
    B: View + Clone,
{
    fn new(a: A, b: B, drop_common: bool) -> MergeCursor<A, B> {
        MergeCursor {
            a_iter: a.cursor(),
            b_iter: b.cursor(),
            a,
            b,
            index: 0,
            drop_common,
        }
    }
}

impl<A, B> Clone for MergeCursor<A, B>
where
    A: View + Clone,
    B: View + Clone,
    A::Cursor: Clone,
    B::Cursor: Clone,
{
    fn clone(&self) -> MergeCursor<A, B> {
        MergeCursor {
            a: self.a.clone(),
            b: self.b.clone(),
            a_iter: self.a_iter.clone(),
            b_iter: self.b_iter.clone(),
            index: self.index,
            drop_common: self.drop_common,
        }
    }
}

impl<A, B> std::fmt::Debug for MergeCursor<A, B>
where
    A: View + std::fmt::Debug,
    B: View + std::fmt::Debug,
    A::Cursor: std::fmt::Debug,
    B::Cursor: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeCursor")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("a_iter", &self.a_iter)
            .field("b_iter", &self.b_iter)
            .field("index", &self.index)
            .field("drop_common", &self.drop_common)
            .finish()
    }
}

impl<A, B> Iterator for MergeCursor<A, B>
where
    A: View + Clone,
    B: View<Item = A::Item> + Clone,
    A::Item: PartialEq,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        while let Some(item) = self.a_iter.next() {
            if !self.drop_common || !contains(&self.b, &item) {
                return Some(item);
            }
        }
        loop {
            let item = self.b_iter.next()?;
            let seen = self.index;
            self.index += 1;
            if !contains(&self.a, &item)
                && !prefix_contains(&self.b, seen, &item)
            {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (alo, ahi) = self.a_iter.size_hint();
        let (_, bhi) = self.b_iter.size_hint();
        let lo = if self.drop_common { 0 } else { alo };
        let hi = match (ahi, bhi) {
            (Some(x), Some(y)) => x.checked_add(y),
            _ => None,
        };
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        set_difference_unsorted, set_intersection_unsorted,
        set_symmetric_difference_unsorted, set_union_unsorted,
    };
    use crate::view::{all, View};

    fn a() -> Vec<i32> {
        vec![0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9]
    }

    fn b() -> Vec<i32> {
        vec![5, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
    }

    fn owned<'a>(v: Vec<&'a i32>) -> Vec<i32> {
        v.into_iter().cloned().collect()
    }

    #[test]
    fn union_keeps_first_side_repeats() {
        let (a, b) = (a(), b());
        let got = owned((all(&a) | set_union_unsorted(&b)).to_vec());
        let want = vec![0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];
        assert_eq!(got, want);
    }

    #[test]
    fn union_drops_second_side_repeats() {
        let a = vec![1];
        let b = vec![3, 2, 3, 1, 2];
        let got = owned(all(&a).set_union_unsorted(&b).to_vec());
        assert_eq!(got, vec![1, 3, 2]);
    }

    #[test]
    fn intersection() {
        let (a, b) = (a(), b());
        let got = owned((all(&a) | set_intersection_unsorted(&b)).to_vec());
        assert_eq!(got, vec![5, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn difference() {
        let (a, b) = (a(), b());
        let got = owned((all(&a) | set_difference_unsorted(&b)).to_vec());
        assert_eq!(got, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn symmetric_difference() {
        let (a, b) = (a(), b());
        let got =
            owned((all(&a) | set_symmetric_difference_unsorted(&b)).to_vec());
        assert_eq!(got, vec![0, 1, 2, 3, 4, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn order_is_irrelevant() {
        let a = vec![3, 1, 2];
        let b = vec![2, 4, 3];
        let got = owned(all(&a).set_intersection_unsorted(&b).to_vec());
        assert_eq!(got, vec![3, 2]);
        let got: String = all("hello").set_difference_unsorted("lo").to();
        assert_eq!(got, "he");
    }
}
