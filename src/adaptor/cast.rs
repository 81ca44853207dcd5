use std::fmt;
use std::marker::PhantomData;

use num_traits::AsPrimitive;

use crate::capability::{Downcast, DowncastRef, Generic, Scalar};
use crate::func::TypeName;
use crate::pipe::Adaptor;
use crate::view::{RandomAccessView, SizedView, View};

/// A conversion applied to each element by a cast view.
///
/// Implementations are zero sized tags naming the target type. A
/// conversion that can fail has an `Option` output; the filtering cast
/// views drop the elements it fails on.
pub trait Caster<In> {
    /// The converted element.
    type Out;

    /// Convert one element.
    fn cast(item: In) -> Self::Out;
}

macro_rules! caster_tag {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            #[inline]
            fn new() -> $name<T> {
                $name(PhantomData)
            }
        }

        impl<T> Clone for $name<T> {
            #[inline]
            fn clone(&self) -> $name<T> {
                $name::new()
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&TypeName::<T>::new())
                    .finish()
            }
        }
    }
}

caster_tag! {
    /// Converts primitive values with `as`.
    AsCast
}

caster_tag! {
    /// Converts values with `Into`.
    IntoCast
}

caster_tag! {
    /// Downcasts borrowed type-erased values to references.
    DynCast
}

caster_tag! {
    /// Downcasts owning or shared smart handles.
    SmartCast
}

impl<In, T> Caster<In> for AsCast<T>
where
    In: Scalar,
    In::Value: AsPrimitive<T>,
    T: Copy + 'static,
{
    type Out = T;

    #[inline]
    fn cast(item: In) -> T {
        item.value().as_()
    }
}

impl<In: Into<T>, T> Caster<In> for IntoCast<T> {
    type Out = T;

    #[inline]
    fn cast(item: In) -> T {
        item.into()
    }
}

impl<In: DowncastRef<T>, T> Caster<In> for DynCast<T> {
    type Out = Option<In::Output>;

    #[inline]
    fn cast(item: In) -> Option<In::Output> {
        item.downcast_ref_to()
    }
}

impl<In: Downcast<T>, T> Caster<In> for SmartCast<T> {
    type Out = Option<In::Output>;

    #[inline]
    fn cast(item: In) -> Option<In::Output> {
        item.downcast_handle()
    }
}

/// The view produced by `cast_static`.
pub type CastStatic<V, T> = Cast<V, AsCast<T>>;
/// The view produced by `convert`.
pub type Convert<V, T> = Cast<V, IntoCast<T>>;
/// The view produced by `try_cast_dynamic`.
pub type TryCastDynamic<V, T> = Cast<V, DynCast<T>>;
/// The view produced by `cast_dynamic`.
pub type CastDynamic<V, T> = CastFilter<V, DynCast<T>>;
/// The view produced by `cast_smart`.
pub type CastSmart<V, T> = CastFilter<V, SmartCast<T>>;

/// A view that converts every element of another view.
///
/// Conversions don't depend on position, so this view keeps the traversal
/// strength and random access of its source.
pub struct Cast<V, C> {
    view: V,
    _caster: PhantomData<C>,
}

impl<V, C> Cast<V, C> {
    pub(crate) fn new(view: V) -> Cast<V, C> {
        Cast { view, _caster: PhantomData }
    }
}

impl<V: Clone, C> Clone for Cast<V, C> {
    fn clone(&self) -> Cast<V, C> {
        Cast::new(self.view.clone())
    }
}

impl<V: fmt::Debug, C> fmt::Debug for Cast<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cast")
            .field("view", &self.view)
            .field("caster", &TypeName::<C>::new())
            .finish()
    }
}

impl<V: View, C: Caster<V::Item>> View for Cast<V, C> {
    type Item = C::Out;
    type Cursor = CastCursor<V::Cursor, C>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        CastCursor { iter: self.view.into_cursor(), _caster: PhantomData }
    }
}

impl<V: SizedView, C: Caster<V::Item>> SizedView for Cast<V, C> {
    #[inline]
    fn size(&self) -> usize {
        self.view.size()
    }
}

impl<V: RandomAccessView, C: Caster<V::Item>> RandomAccessView for Cast<V, C> {
    #[inline]
    fn get(&self, index: usize) -> Option<C::Out> {
        self.view.get(index).map(C::cast)
    }
}

impl_view_ops!([V, C,] Cast<V, C>);

/// The cursor of a [`Cast`](struct.Cast.html).
pub struct CastCursor<I, C> {
    iter: I,
    _caster: PhantomData<C>,
}

impl<I: Clone, C> Clone for CastCursor<I, C> {
    fn clone(&self) -> CastCursor<I, C> {
        CastCursor { iter: self.iter.clone(), _caster: PhantomData }
    }
}

impl<I: fmt::Debug, C> fmt::Debug for CastCursor<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CastCursor").field("iter", &self.iter).finish()
    }
}

impl<I: Iterator, C: Caster<I::Item>> Iterator for CastCursor<I, C> {
    type Item = C::Out;

    #[inline]
    fn next(&mut self) -> Option<C::Out> {
        self.iter.next().map(C::cast)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<C::Out> {
        self.iter.nth(n).map(C::cast)
    }
}

impl<I, C> DoubleEndedIterator for CastCursor<I, C>
where
    I: DoubleEndedIterator,
    C: Caster<I::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<C::Out> {
        self.iter.next_back().map(C::cast)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<C::Out> {
        self.iter.nth_back(n).map(C::cast)
    }
}

impl<I, C> ExactSizeIterator for CastCursor<I, C>
where
    I: ExactSizeIterator,
    C: Caster<I::Item>,
{}

/// A view of the elements of another view that a fallible conversion
/// succeeds on, converted.
///
/// Each element is converted exactly once, as the cursor reaches it. For
/// smart handle downcasts this matters: a downcast consumes the handle.
pub struct CastFilter<V, C> {
    view: V,
    _caster: PhantomData<C>,
}

impl<V, C> CastFilter<V, C> {
    pub(crate) fn new(view: V) -> CastFilter<V, C> {
        CastFilter { view, _caster: PhantomData }
    }
}

impl<V: Clone, C> Clone for CastFilter<V, C> {
    fn clone(&self) -> CastFilter<V, C> {
        CastFilter::new(self.view.clone())
    }
}

impl<V: fmt::Debug, C> fmt::Debug for CastFilter<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CastFilter")
            .field("view", &self.view)
            .field("caster", &TypeName::<C>::new())
            .finish()
    }
}

impl<V, C, X> View for CastFilter<V, C>
where
    V: View,
    C: Caster<V::Item, Out = Option<X>>,
{
    type Item = X;
    type Cursor = CastFilterCursor<V::Cursor, C>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        CastFilterCursor {
            iter: self.view.into_cursor(),
            _caster: PhantomData,
        }
    }
}

impl_view_ops!([V, C,] CastFilter<V, C>);

/// The cursor of a [`CastFilter`](struct.CastFilter.html).
pub struct CastFilterCursor<I, C> {
    iter: I,
    _caster: PhantomData<C>,
}

impl<I: Clone, C> Clone for CastFilterCursor<I, C> {
    fn clone(&self) -> CastFilterCursor<I, C> {
        CastFilterCursor { iter: self.iter.clone(), _caster: PhantomData }
    }
}

impl<I: fmt::Debug, C> fmt::Debug for CastFilterCursor<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CastFilterCursor").field("iter", &self.iter).finish()
    }
}

impl<I, C, X> Iterator for CastFilterCursor<I, C>
where
    I: Iterator,
    C: Caster<I::Item, Out = Option<X>>,
{
    type Item = X;

    #[inline]
    fn next(&mut self) -> Option<X> {
        loop {
            if let Some(x) = C::cast(self.iter.next()?) {
                return Some(x);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, C, X> DoubleEndedIterator for CastFilterCursor<I, C>
where
    I: DoubleEndedIterator,
    C: Caster<I::Item, Out = Option<X>>,
{
    #[inline]
    fn next_back(&mut self) -> Option<X> {
        loop {
            if let Some(x) = C::cast(self.iter.next_back()?) {
                return Some(x);
            }
        }
    }
}

/// A partially applied cast that converts every element.
pub struct CastFn<C>(PhantomData<C>);

impl<C> Clone for CastFn<C> {
    fn clone(&self) -> CastFn<C> {
        CastFn(PhantomData)
    }
}

impl<C> Copy for CastFn<C> {}

impl<C> fmt::Debug for CastFn<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CastFn").field(&TypeName::<C>::new()).finish()
    }
}

impl<V: View, C: Caster<V::Item>> Adaptor<V> for CastFn<C> {
    type Output = Cast<V, C>;

    #[inline]
    fn apply(self, view: V) -> Cast<V, C> {
        Cast::new(view)
    }
}

impl_adaptor_ops!([C,] CastFn<C>);

/// A partially applied cast that drops the elements it fails on.
pub struct CastFilterFn<C>(PhantomData<C>);

impl<C> Clone for CastFilterFn<C> {
    fn clone(&self) -> CastFilterFn<C> {
        CastFilterFn(PhantomData)
    }
}

impl<C> Copy for CastFilterFn<C> {}

impl<C> fmt::Debug for CastFilterFn<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CastFilterFn").field(&TypeName::<C>::new()).finish()
    }
}

impl<V, C, X> Adaptor<V> for CastFilterFn<C>
where
    V: View,
    C: Caster<V::Item, Out = Option<X>>,
{
    type Output = CastFilter<V, C>;

    #[inline]
    fn apply(self, view: V) -> CastFilter<V, C> {
        CastFilter::new(view)
    }
}

impl_adaptor_ops!([C,] CastFilterFn<C>);

/// Convert every element to `T` with an `as` cast.
#[inline]
pub fn cast_static<T>() -> CastFn<AsCast<T>> {
    CastFn(PhantomData)
}

/// Convert every element to `T` with `Into`.
#[inline]
pub fn convert<T>() -> CastFn<IntoCast<T>> {
    CastFn(PhantomData)
}

/// Downcast every type-erased element to a reference to `T`, producing
/// `None` for elements of any other type.
#[inline]
pub fn try_cast_dynamic<T>() -> CastFn<DynCast<T>> {
    CastFn(PhantomData)
}

/// Keep only the type-erased elements whose concrete type is `T`, as
/// references to `T`.
#[inline]
pub fn cast_dynamic<T>() -> CastFilterFn<DynCast<T>> {
    CastFilterFn(PhantomData)
}

/// Keep only the smart handles whose pointee is a `T`, downcasting each.
#[inline]
pub fn cast_smart<T>() -> CastFilterFn<SmartCast<T>> {
    CastFilterFn(PhantomData)
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::rc::Rc;

    use super::{cast_dynamic, cast_smart, cast_static, convert};
    use crate::source::{iota, seq};
    use crate::view::{all, RandomAccessView, View};

    #[test]
    fn static_casts_round_trip() {
        let v = vec![1i32, 2, 3];
        let back = all(&v).cast_static::<f64>().cast_static::<i32>().to_vec();
        assert_eq!(back, v);
        let got = (iota(250u8, 255) | cast_static::<i8>()).to_vec();
        assert_eq!(got, vec![-6, -5, -4, -3, -2]);
    }

    #[test]
    fn static_casts_keep_random_access() {
        let view = iota(0, 10).cast_static::<f32>();
        assert_eq!(view.at(3), 3.0);
        let got = view.into_cursor().rev().next();
        assert_eq!(got, Some(9.0));
    }

    #[test]
    fn convert_uses_into() {
        let v = vec![1u8, 2];
        let got: Vec<u64> = (seq(v.into_iter()) | convert::<u64>()).to_vec();
        assert_eq!(got, vec![1, 2]);
    }

    #[test]
    fn dynamic_casts_filter_by_type() {
        let items: Vec<Box<dyn Any>> =
            vec![Box::new(1i32), Box::new("two"), Box::new(3i32)];
        let ints = (all(&items) | cast_dynamic::<i32>()).to_vec();
        assert_eq!(ints, vec![&1, &3]);
        let strs = all(&items).cast_dynamic::<&str>().to_vec();
        assert_eq!(strs, vec![&"two"]);
        let tried = all(&items).try_cast_dynamic::<i32>().to_vec();
        assert_eq!(tried, vec![Some(&1), None, Some(&3)]);
    }

    #[test]
    fn smart_casts_rehome_ownership() {
        let items: Vec<Box<dyn Any>> =
            vec![Box::new(1i32), Box::new('x'), Box::new(2i32)];
        let ints: Vec<Box<i32>> =
            (seq(items.into_iter()) | cast_smart::<i32>()).to_vec();
        assert_eq!(ints, vec![Box::new(1), Box::new(2)]);

        let shared: Vec<Rc<dyn Any>> = vec![Rc::new('a'), Rc::new(5u8)];
        let chars: Vec<Rc<char>> = all(&shared).cast_smart::<char>().to_vec();
        assert_eq!(*chars[0], 'a');
        assert_eq!(Rc::strong_count(&shared[0]), 2);
    }
}
