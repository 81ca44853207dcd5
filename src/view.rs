use std::borrow::Borrow;
use std::convert::TryFrom;
use std::iter::FromIterator;

use num_traits::AsPrimitive;

use crate::adaptor::{
    AddressOf, CastDynamic, CastSmart, CastStatic, ChunkStrategy, Concat,
    Convert, Cycle, Difference, DifferenceUnsorted, DropWhile, Duplicates,
    Enumerate, Filter, Indirect, Interleave, Intersection,
    IntersectionUnsorted, Intersperse, Join, JoinWith, MoveOut, Ptr,
    Replace, Reverse, SliceStrategy, SplitStrategy, SymmetricDifference,
    SymmetricDifferenceUnsorted, TakeWhile, Transform, TryCastDynamic, Union,
    UnionUnsorted, Zip,
};
use crate::capability::{Downcast, DowncastRef, Layout, Scalar};
use crate::error::{Error, Result};
use crate::func::{ByKey, Equals, Natural, Not};

/// A lazy sequence of elements.
///
/// A view holds the *construction state* of a sequence: the source it reads
/// from and the arguments of every adaptor stacked on top of it. It does no
/// work until a cursor is derived from it. Cursors are ordinary iterators,
/// so a view's elements are traversed with the standard iterator protocol.
///
/// Two ways of deriving a cursor are provided:
///
/// * `into_cursor` consumes the view. This is the only way to traverse a
///   single-pass view (one built on a
///   [`Generator`](source/struct.Generator.html), for example).
/// * `cursor` derives a fresh cursor from a borrowed view. It is available
///   only on views that are `Clone`, which makes multi-pass traversal a
///   compile-time property: every cursor derived from the same view sees
///   the same elements, since each starts from a copy of the same
///   construction state.
///
/// The traversal strength of a view is the strength of its cursor: a cursor
/// that is `DoubleEndedIterator` can be reversed, and one that is also
/// `ExactSizeIterator` supports constant-time jumps. Views that know their
/// length without traversing additionally implement
/// [`SizedView`](trait.SizedView.html), and views that can read any
/// position without traversing implement
/// [`RandomAccessView`](trait.RandomAccessView.html).
///
/// Nearly all of the provided methods are adaptors. Each consumes the view
/// and wraps it in a new view; nothing is evaluated until the result is
/// traversed. The same adaptors are also available in partially applied
/// form in the [`adaptor`](adaptor/index.html) module, for use with `|`.
pub trait View: Sized {
    /// The type of the elements produced.
    type Item;

    /// The cursor that traverses this view.
    type Cursor: Iterator<Item = Self::Item>;

    /// The memory layout of this view. This is `Generic` for nearly every
    /// view; only the views that wrap borrowed slices and strings differ.
    type Layout: Layout;

    /// Consume the view and return a cursor positioned at its first
    /// element.
    fn into_cursor(self) -> Self::Cursor;

    /// Return a fresh cursor positioned at the first element of this view.
    #[inline]
    fn cursor(&self) -> Self::Cursor
    where
        Self: Clone,
    {
        self.clone().into_cursor()
    }

    /// Materialize every element of this view into a collection.
    #[inline]
    fn to<C: FromIterator<Self::Item>>(self) -> C {
        self.into_cursor().collect()
    }

    /// Materialize every element of this view into a `Vec`.
    #[inline]
    fn to_vec(self) -> Vec<Self::Item> {
        self.to()
    }

    /// Materialize this view into a fixed size array.
    ///
    /// If the view does not produce exactly `N` elements, then an error is
    /// returned. Traversal stops at the first surplus element, so this
    /// terminates on unbounded views.
    fn to_array<const N: usize>(self) -> Result<[Self::Item; N]> {
        let got: Vec<Self::Item> =
            self.into_cursor().take(N.saturating_add(1)).collect();
        <[Self::Item; N]>::try_from(got).map_err(|got| {
            Error::LengthMismatch { expected: N, got: got.len() }
        })
    }

    /// Traverse this view and return the number of elements it produced.
    #[inline]
    fn count(self) -> usize {
        self.into_cursor().count()
    }

    /// Traverse this view, calling `f` on each element.
    #[inline]
    fn for_each<F: FnMut(Self::Item)>(self, f: F) {
        self.into_cursor().for_each(f)
    }

    /// Keep only the elements for which `pred` returns `true`.
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Drop every element equal to `value`.
    #[inline]
    fn remove<D>(self, value: D) -> Filter<Self, Not<Equals<D>>>
    where
        Self::Item: Borrow<D>,
        D: PartialEq,
    {
        Filter::new(self, Not(Equals(value)))
    }

    /// Drop every element for which `pred` returns `true`.
    #[inline]
    fn remove_if<P>(self, pred: P) -> Filter<Self, Not<P>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, Not(pred))
    }

    /// Apply `f` to every element.
    ///
    /// `f` is called each time an element is produced. A view traversed
    /// twice calls `f` twice per element.
    #[inline]
    fn transform<F, B>(self, f: F) -> Transform<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        Transform::new(self, f)
    }

    /// Substitute `new` for every element equal to `old`.
    #[inline]
    fn replace<D>(self, old: D, new: Self::Item) -> Replace<Self, Equals<D>>
    where
        Self::Item: Borrow<D> + Clone,
        D: PartialEq,
    {
        Replace::new(self, Equals(old), new)
    }

    /// Substitute `new` for every element for which `pred` returns `true`.
    #[inline]
    fn replace_if<P>(self, pred: P, new: Self::Item) -> Replace<Self, P>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        Replace::new(self, pred, new)
    }

    /// Pair every element with its zero-based position.
    #[inline]
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Keep at most the first `n` elements.
    ///
    /// On borrowed slices and strings, this returns a shorter slice or
    /// string view rather than a wrapping view.
    #[inline]
    fn take(
        self,
        n: usize,
    ) -> <Self::Layout as SliceStrategy<Self>>::TakeOutput
    where
        Self::Layout: SliceStrategy<Self>,
    {
        <Self::Layout as SliceStrategy<Self>>::take(self, n)
    }

    /// Skip the first `n` elements.
    #[inline]
    fn drop(
        self,
        n: usize,
    ) -> <Self::Layout as SliceStrategy<Self>>::DropOutput
    where
        Self::Layout: SliceStrategy<Self>,
    {
        <Self::Layout as SliceStrategy<Self>>::drop(self, n)
    }

    /// Keep at most the last `n` elements.
    ///
    /// Views that don't know their length are traversed once, the first
    /// time the result is traversed, to locate the boundary.
    #[inline]
    fn take_last(
        self,
        n: usize,
    ) -> <Self::Layout as SliceStrategy<Self>>::TakeLastOutput
    where
        Self::Layout: SliceStrategy<Self>,
    {
        <Self::Layout as SliceStrategy<Self>>::take_last(self, n)
    }

    /// Skip the last `n` elements.
    #[inline]
    fn drop_last(
        self,
        n: usize,
    ) -> <Self::Layout as SliceStrategy<Self>>::DropLastOutput
    where
        Self::Layout: SliceStrategy<Self>,
    {
        <Self::Layout as SliceStrategy<Self>>::drop_last(self, n)
    }

    /// Keep elements up to, and not including, the first one for which
    /// `pred` returns `false`.
    #[inline]
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    /// Skip elements up to, and not including, the first one for which
    /// `pred` returns `false`.
    #[inline]
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, pred)
    }

    /// Group elements into consecutive chunks of `n`. The last chunk may be
    /// shorter.
    ///
    /// # Panics
    ///
    /// When `n` is zero. Use [`try_chunk`](#method.try_chunk) to get an
    /// error instead.
    #[inline]
    fn chunk(
        self,
        n: usize,
    ) -> <Self::Layout as ChunkStrategy<Self>>::Chunked
    where
        Self::Layout: ChunkStrategy<Self>,
    {
        assert!(n > 0, "chunk size must be greater than zero");
        <Self::Layout as ChunkStrategy<Self>>::chunk(self, n)
    }

    /// Like [`chunk`](#method.chunk), but returns an error when `n` is
    /// zero.
    #[inline]
    fn try_chunk(
        self,
        n: usize,
    ) -> Result<<Self::Layout as ChunkStrategy<Self>>::Chunked>
    where
        Self::Layout: ChunkStrategy<Self>,
    {
        if n == 0 {
            return Err(Error::ZeroChunkSize);
        }
        Ok(<Self::Layout as ChunkStrategy<Self>>::chunk(self, n))
    }

    /// Split this view into the pieces between occurrences of `delim`.
    ///
    /// A view containing `m` delimiters always produces `m + 1` pieces, so
    /// an empty view produces one empty piece and a trailing delimiter
    /// produces a trailing empty piece.
    #[inline]
    fn split<D>(
        self,
        delim: D,
    ) -> <Self::Layout as SplitStrategy<Self, D>>::Pieces
    where
        Self::Layout: SplitStrategy<Self, D>,
    {
        <Self::Layout as SplitStrategy<Self, D>>::split(self, delim)
    }

    /// Traverse this view back to front.
    #[inline]
    fn reverse(self) -> Reverse<Self>
    where
        Self::Cursor: DoubleEndedIterator,
    {
        Reverse::new(self)
    }

    /// Move every element out of a view of mutable references, leaving
    /// `Default::default()` in its place.
    #[inline]
    fn move_out(self) -> MoveOut<Self> {
        MoveOut::new(self)
    }

    /// Like [`move_out`](#method.move_out), but back to front.
    #[inline]
    fn move_reverse(self) -> MoveOut<Reverse<Self>>
    where
        Self::Cursor: DoubleEndedIterator,
    {
        MoveOut::new(Reverse::new(self))
    }

    /// Convert every element to `T` with an `as` cast.
    #[inline]
    fn cast_static<T>(self) -> CastStatic<Self, T>
    where
        Self::Item: Scalar,
        <Self::Item as Scalar>::Value: AsPrimitive<T>,
        T: Copy + 'static,
    {
        CastStatic::new(self)
    }

    /// Convert every element to `T` with `Into`.
    #[inline]
    fn convert<T>(self) -> Convert<Self, T>
    where
        Self::Item: Into<T>,
    {
        Convert::new(self)
    }

    /// Keep only the type-erased elements whose concrete type is `T`, as
    /// references to `T`.
    #[inline]
    fn cast_dynamic<T>(self) -> CastDynamic<Self, T>
    where
        Self::Item: DowncastRef<T>,
    {
        CastDynamic::new(self)
    }

    /// Downcast every type-erased element to a reference to `T`, producing
    /// `None` for the elements of any other type.
    #[inline]
    fn try_cast_dynamic<T>(self) -> TryCastDynamic<Self, T>
    where
        Self::Item: DowncastRef<T>,
    {
        TryCastDynamic::new(self)
    }

    /// Keep only the smart handles whose pointee is a `T`, downcasting
    /// each handle.
    #[inline]
    fn cast_smart<T>(self) -> CastSmart<Self, T>
    where
        Self::Item: Downcast<T>,
    {
        CastSmart::new(self)
    }

    /// Replace every borrowed element with its address.
    #[inline]
    fn address_of(self) -> AddressOf<Self> {
        AddressOf::new(self)
    }

    /// Replace every borrowed pointer-like element with the raw address of
    /// its pointee.
    #[inline]
    fn ptr(self) -> Ptr<Self> {
        Ptr::new(self)
    }

    /// Replace every borrowed pointer-like element with a reference to its
    /// pointee.
    #[inline]
    fn indirect(self) -> Indirect<Self> {
        Indirect::new(self)
    }

    /// Flatten a view of sequences.
    #[inline]
    fn join(self) -> Join<Self>
    where
        Self::Item: IntoView,
    {
        Join::new(self)
    }

    /// Flatten a view of sequences, inserting `sep` between every two
    /// consecutive non-empty sequences.
    #[inline]
    fn join_with(
        self,
        sep: <Self::Item as IntoView>::Item,
    ) -> JoinWith<Self>
    where
        Self::Item: IntoView,
        <Self::Item as IntoView>::Item: Clone,
    {
        JoinWith::new(self, sep)
    }

    /// Alternate between the elements of this view and `other`, starting
    /// with this one. Stops as soon as either side runs out before its
    /// turn is complete.
    #[inline]
    fn interleave<O>(self, other: O) -> Interleave<Self, O::View>
    where
        O: IntoView<Item = Self::Item>,
    {
        Interleave::new(self, other.into_view(), false)
    }

    /// Like [`interleave`](#method.interleave), but once one side runs out,
    /// the rest of the other side follows.
    #[inline]
    fn interleave_extend<O>(self, other: O) -> Interleave<Self, O::View>
    where
        O: IntoView<Item = Self::Item>,
    {
        Interleave::new(self, other.into_view(), true)
    }

    /// Insert `sep` between every two consecutive elements.
    #[inline]
    fn intersperse(self, sep: Self::Item) -> Intersperse<Self>
    where
        Self::Item: Clone,
    {
        Intersperse::new(self, sep)
    }

    /// Repeat this view endlessly. An empty view stays empty.
    #[inline]
    fn cycle(self) -> Cycle<Self>
    where
        Self::Cursor: Clone,
    {
        Cycle::new(self)
    }

    /// Pair up the elements of this view and `other`, stopping at the end
    /// of the shorter one.
    #[inline]
    fn zip<O: IntoView>(self, other: O) -> Zip<(Self, O::View)> {
        Zip::new((self, other.into_view()))
    }

    /// Follow this view with the elements of `other`.
    #[inline]
    fn concat<O>(self, other: O) -> Concat<(Self, O::View)>
    where
        O: IntoView<Item = Self::Item>,
    {
        Concat::new((self, other.into_view()))
    }

    /// Produce only the elements that have been seen before.
    ///
    /// The first repetition of a value produces that value twice, standing
    /// for the original and the repeat. Every later repetition produces it
    /// once.
    #[inline]
    fn duplicates(self) -> Duplicates<Self>
    where
        Self::Item: Clone + PartialEq,
    {
        Duplicates::new(self)
    }

    /// The sorted merge of this sorted view and `other`. Elements present
    /// in both are produced once, from this view.
    #[inline]
    fn set_union<O>(self, other: O) -> Union<Self, O::View, Natural>
    where
        O: IntoView<Item = Self::Item>,
        Self::Item: Ord,
    {
        Union::new(self, other.into_view(), Natural)
    }

    /// Like [`set_union`](#method.set_union), ordered by `cmp`.
    #[inline]
    fn set_union_by<O, F>(self, other: O, cmp: F) -> Union<Self, O::View, F>
    where
        O: IntoView<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> std::cmp::Ordering,
    {
        Union::new(self, other.into_view(), cmp)
    }

    /// Like [`set_union`](#method.set_union), ordered by a projected key.
    #[inline]
    fn set_union_by_key<O, F, K>(
        self,
        other: O,
        key: F,
    ) -> Union<Self, O::View, ByKey<F>>
    where
        O: IntoView<Item = Self::Item>,
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        Union::new(self, other.into_view(), ByKey(key))
    }

    /// The elements of this sorted view that are also in the sorted
    /// `other`.
    #[inline]
    fn set_intersection<O>(
        self,
        other: O,
    ) -> Intersection<Self, O::View, Natural>
    where
        O: IntoView<Item = Self::Item>,
        Self::Item: Ord,
    {
        Intersection::new(self, other.into_view(), Natural)
    }

    /// Like [`set_intersection`](#method.set_intersection), ordered by
    /// `cmp`.
    #[inline]
    fn set_intersection_by<O, F>(
        self,
        other: O,
        cmp: F,
    ) -> Intersection<Self, O::View, F>
    where
        O: IntoView<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> std::cmp::Ordering,
    {
        Intersection::new(self, other.into_view(), cmp)
    }

    /// Like [`set_intersection`](#method.set_intersection), ordered by a
    /// projected key.
    #[inline]
    fn set_intersection_by_key<O, F, K>(
        self,
        other: O,
        key: F,
    ) -> Intersection<Self, O::View, ByKey<F>>
    where
        O: IntoView<Item = Self::Item>,
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        Intersection::new(self, other.into_view(), ByKey(key))
    }

    /// The elements of this sorted view that are not in the sorted `other`.
    #[inline]
    fn set_difference<O>(self, other: O) -> Difference<Self, O::View, Natural>
    where
        O: IntoView<Item = Self::Item>,
        Self::Item: Ord,
    {
        Difference::new(self, other.into_view(), Natural)
    }

    /// Like [`set_difference`](#method.set_difference), ordered by `cmp`.
    #[inline]
    fn set_difference_by<O, F>(
        self,
        other: O,
        cmp: F,
    ) -> Difference<Self, O::View, F>
    where
        O: IntoView<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> std::cmp::Ordering,
    {
        Difference::new(self, other.into_view(), cmp)
    }

    /// Like [`set_difference`](#method.set_difference), ordered by a
    /// projected key.
    #[inline]
    fn set_difference_by_key<O, F, K>(
        self,
        other: O,
        key: F,
    ) -> Difference<Self, O::View, ByKey<F>>
    where
        O: IntoView<Item = Self::Item>,
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        Difference::new(self, other.into_view(), ByKey(key))
    }

    /// The sorted merge of the elements that are in exactly one of this
    /// sorted view and the sorted `other`.
    #[inline]
    fn set_symmetric_difference<O>(
        self,
        other: O,
    ) -> SymmetricDifference<Self, O::View, Natural>
    where
        O: IntoView<Item = Self::Item>,
        Self::Item: Ord,
    {
        SymmetricDifference::new(self, other.into_view(), Natural)
    }

    /// Like
    /// [`set_symmetric_difference`](#method.set_symmetric_difference),
    /// ordered by `cmp`.
    #[inline]
    fn set_symmetric_difference_by<O, F>(
        self,
        other: O,
        cmp: F,
    ) -> SymmetricDifference<Self, O::View, F>
    where
        O: IntoView<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> std::cmp::Ordering,
    {
        SymmetricDifference::new(self, other.into_view(), cmp)
    }

    /// Like
    /// [`set_symmetric_difference`](#method.set_symmetric_difference),
    /// ordered by a projected key.
    #[inline]
    fn set_symmetric_difference_by_key<O, F, K>(
        self,
        other: O,
        key: F,
    ) -> SymmetricDifference<Self, O::View, ByKey<F>>
    where
        O: IntoView<Item = Self::Item>,
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        SymmetricDifference::new(self, other.into_view(), ByKey(key))
    }

    /// The elements of this view that are also in `other`, neither of
    /// which needs to be sorted.
    ///
    /// `other` is scanned once per element of this view.
    #[inline]
    fn set_intersection_unsorted<O>(
        self,
        other: O,
    ) -> IntersectionUnsorted<Self, O::View>
    where
        O: IntoView<Item = Self::Item>,
        O::View: Clone,
        Self::Item: PartialEq,
    {
        IntersectionUnsorted::new(self, other.into_view())
    }

    /// The elements of this view that are not in `other`, neither of which
    /// needs to be sorted.
    #[inline]
    fn set_difference_unsorted<O>(
        self,
        other: O,
    ) -> DifferenceUnsorted<Self, O::View>
    where
        O: IntoView<Item = Self::Item>,
        O::View: Clone,
        Self::Item: PartialEq,
    {
        DifferenceUnsorted::new(self, other.into_view())
    }

    /// Every element of this view, followed by the elements of `other`
    /// that are not in this view. A value repeated in `other` is produced
    /// at most once from `other`.
    #[inline]
    fn set_union_unsorted<O>(self, other: O) -> UnionUnsorted<Self, O::View>
    where
        O: IntoView<Item = Self::Item>,
        O::View: Clone,
        Self: Clone,
        Self::Item: PartialEq,
    {
        UnionUnsorted::new(self, other.into_view())
    }

    /// The elements of this view that are not in `other`, followed by the
    /// elements of `other` that are not in this view.
    #[inline]
    fn set_symmetric_difference_unsorted<O>(
        self,
        other: O,
    ) -> SymmetricDifferenceUnsorted<Self, O::View>
    where
        O: IntoView<Item = Self::Item>,
        O::View: Clone,
        Self: Clone,
        Self::Item: PartialEq,
    {
        SymmetricDifferenceUnsorted::new(self, other.into_view())
    }
}

/// A view whose number of elements is known without traversing it.
pub trait SizedView: View {
    /// The number of elements this view produces.
    fn size(&self) -> usize;

    /// Returns true if and only if this view produces no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A view that can read the element at any position without traversing.
pub trait RandomAccessView: SizedView {
    /// Returns the element at position `index`, or `None` if `index` is
    /// out of bounds.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Returns the element at position `index`.
    ///
    /// # Panics
    ///
    /// When `index` is out of bounds.
    #[inline]
    fn at(&self, index: usize) -> Self::Item {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index {} out of bounds for view of length {}",
                index,
                self.size()
            ),
        }
    }

    /// Returns the element at position `index`, or an error if `index` is
    /// out of bounds.
    #[inline]
    fn try_at(&self, index: usize) -> Result<Self::Item> {
        self.get(index)
            .ok_or_else(|| Error::OutOfBounds { index, len: self.size() })
    }
}

/// Converts a value into a view.
///
/// Every view converts into itself. Borrowed slices, vectors and arrays
/// convert into [`Span`](source/struct.Span.html)s, borrowed strings into
/// [`Text`](source/struct.Text.html)s, borrowed standard collections into
/// [`Seq`](source/struct.Seq.html)s over their iterators and integer ranges
/// into [`Iota`](source/struct.Iota.html)s.
pub trait IntoView {
    /// The type of the elements produced by the view.
    type Item;

    /// The type of the view.
    type View: View<Item = Self::Item>;

    /// Convert this value into a view.
    fn into_view(self) -> Self::View;
}

impl<V: View> IntoView for V {
    type Item = V::Item;
    type View = V;

    #[inline]
    fn into_view(self) -> V {
        self
    }
}

/// Wraps any value convertible into a view, making every view operation
/// (including `|`) available on it.
///
/// ```rust
/// use seqview::adaptor::take;
/// use seqview::{all, View};
///
/// let s = String::from("hello");
/// assert_eq!((all(&s) | take(4)).as_str(), "hell");
/// ```
#[inline]
pub fn all<S: IntoView>(source: S) -> S::View {
    source.into_view()
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::view::{all, RandomAccessView, SizedView, View};

    #[test]
    fn cursors_are_independent() {
        let v = vec![1, 2, 3];
        let view = all(&v).transform(|x| x * 2);
        let mut a = view.cursor();
        a.next();
        assert_eq!(view.cursor().collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(a.collect::<Vec<_>>(), vec![4, 6]);
    }

    #[test]
    fn to_array_exact() {
        let v = vec![1, 2, 3];
        let got: [&i32; 3] = all(&v).to_array().unwrap();
        assert_eq!(got, [&1, &2, &3]);
    }

    #[test]
    fn to_array_mismatch() {
        let v = vec![1, 2, 3];
        let err = all(&v).to_array::<2>().unwrap_err();
        assert_eq!(err, Error::LengthMismatch { expected: 2, got: 3 });
        let err = all(&v).to_array::<5>().unwrap_err();
        assert_eq!(err, Error::LengthMismatch { expected: 5, got: 3 });
    }

    #[test]
    fn to_array_stops_on_unbounded() {
        let v = vec![1];
        let err = all(&v).cycle().to_array::<4>().unwrap_err();
        assert_eq!(err, Error::LengthMismatch { expected: 4, got: 5 });
    }

    #[test]
    fn try_at_reports_bounds() {
        let v = vec![10, 20];
        let view = all(&v);
        assert_eq!(view.try_at(1), Ok(&20));
        assert_eq!(
            view.try_at(2),
            Err(Error::OutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(view.size(), 2);
    }

    #[test]
    #[should_panic]
    fn at_panics_out_of_bounds() {
        let v = vec![10, 20];
        all(&v).at(5);
    }

    #[test]
    fn try_chunk_rejects_zero() {
        let v = vec![1, 2, 3];
        assert_eq!(all(&v).try_chunk(0).unwrap_err(), Error::ZeroChunkSize);
        assert_eq!(all(&v).try_chunk(2).unwrap().count(), 2);
    }
}
