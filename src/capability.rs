/*!
Capability predicates over cursors, views and elements.

Every adaptor in this crate is conditionally specialized on the traits in
this module. They are resolved entirely at compile time: an adaptor that
needs a capability its source lacks (for example, `reverse` on a cursor that
is not a `DoubleEndedIterator`, or `cast_smart` on a source of borrowed
values) simply fails to typecheck.

There are two kinds of predicates here:

* Traversal strength, expressed as marker traits that are blanket
  implemented on top of the standard iterator traits. These are mostly
  useful as shorthand in bounds.
* Memory layout, expressed as a *layout tag* associated with every view.
  Adaptors with a cheaper representation for contiguous memory (a sub-span
  instead of a wrapping cursor) dispatch on this tag through a per-adaptor
  strategy trait implemented on each tag type.
*/

use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

use crate::view::View;

/// A cursor that can be copied and traversed more than once.
pub trait ForwardCursor: Iterator + Clone {}

impl<I: Iterator + Clone> ForwardCursor for I {}

/// A forward cursor that can also be retreated from its end.
pub trait BidirectionalCursor: ForwardCursor + DoubleEndedIterator {}

impl<I: ForwardCursor + DoubleEndedIterator> BidirectionalCursor for I {}

/// A bidirectional cursor whose remaining length is known in constant time.
///
/// Cursors in this crate that satisfy this predicate also override `nth`
/// and `nth_back` so that jumps are constant time whenever the cursor they
/// wrap jumps in constant time.
pub trait RandomAccessCursor: BidirectionalCursor + ExactSizeIterator {}

impl<I: BidirectionalCursor + ExactSizeIterator> RandomAccessCursor for I {}

/// A view that can be traversed any number of times.
///
/// A view is multi-pass exactly when it is `Clone`: calling
/// [`View::cursor`](../trait.View.html#method.cursor) clones the view's
/// construction state and derives a fresh cursor from it. Views over
/// single-pass producers are deliberately not `Clone`.
pub trait MultiPass: View + Clone {}

impl<V: View + Clone> MultiPass for V {}

/// A memory layout tag.
///
/// Every view names one of `Contiguous`, `Utf8` or `Generic` as its
/// `Layout`. The tag only carries type information; it is never
/// constructed.
pub trait Layout {
    /// Whether elements of views with this layout are laid out contiguously
    /// in memory.
    const CONTIGUOUS: bool;
}

/// The layout of views backed by a borrowed slice.
#[derive(Clone, Copy, Debug)]
pub enum Contiguous {}

/// The layout of views backed by a borrowed UTF-8 string.
#[derive(Clone, Copy, Debug)]
pub enum Utf8 {}

/// The layout of every other view.
#[derive(Clone, Copy, Debug)]
pub enum Generic {}

impl Layout for Contiguous {
    const CONTIGUOUS: bool = true;
}

impl Layout for Utf8 {
    const CONTIGUOUS: bool = true;
}

impl Layout for Generic {
    const CONTIGUOUS: bool = false;
}

/// A smart handle whose pointee can be downcast to a concrete type.
///
/// Downcasting consumes the handle. For uniquely owned handles (`Box`) a
/// failed downcast hands the original handle back; a successful one
/// re-homes ownership into a handle of the concrete type, so each element
/// can be cast only once. Borrowed shared handles (`&Rc`, `&Arc`) are
/// cloned first, which leaves the source untouched.
pub trait Downcast<T> {
    /// The handle type produced by a successful downcast.
    type Output;

    /// Attempt the downcast, returning `None` if the pointee is not a `T`.
    fn downcast_handle(self) -> Option<Self::Output>;
}

impl<T: Any> Downcast<T> for Box<dyn Any> {
    type Output = Box<T>;

    #[inline]
    fn downcast_handle(self) -> Option<Box<T>> {
        self.downcast::<T>().ok()
    }
}

impl<T: Any + Send> Downcast<T> for Box<dyn Any + Send> {
    type Output = Box<T>;

    #[inline]
    fn downcast_handle(self) -> Option<Box<T>> {
        self.downcast::<T>().ok()
    }
}

impl<T: Any> Downcast<T> for Rc<dyn Any> {
    type Output = Rc<T>;

    #[inline]
    fn downcast_handle(self) -> Option<Rc<T>> {
        self.downcast::<T>().ok()
    }
}

impl<'a, T: Any> Downcast<T> for &'a Rc<dyn Any> {
    type Output = Rc<T>;

    #[inline]
    fn downcast_handle(self) -> Option<Rc<T>> {
        Rc::clone(self).downcast::<T>().ok()
    }
}

impl<T: Any + Send + Sync> Downcast<T> for Arc<dyn Any + Send + Sync> {
    type Output = Arc<T>;

    #[inline]
    fn downcast_handle(self) -> Option<Arc<T>> {
        self.downcast::<T>().ok()
    }
}

impl<'a, T: Any + Send + Sync> Downcast<T> for &'a Arc<dyn Any + Send + Sync> {
    type Output = Arc<T>;

    #[inline]
    fn downcast_handle(self) -> Option<Arc<T>> {
        Arc::clone(self).downcast::<T>().ok()
    }
}

/// A value that can be read through at most one level of borrowing and
/// converted with `as`.
///
/// This lets `cast_static` work the same on views of `i32` and on views of
/// `&i32`, which is what a borrowed slice produces.
pub trait Scalar: Copy {
    /// The primitive type being read.
    type Value: Copy + 'static;

    /// Read the primitive value.
    fn value(self) -> Self::Value;
}

macro_rules! scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                type Value = $ty;

                #[inline]
                fn value(self) -> $ty {
                    self
                }
            }

            impl<'a> Scalar for &'a $ty {
                type Value = $ty;

                #[inline]
                fn value(self) -> $ty {
                    *self
                }
            }
        )*
    }
}

scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    bool, char
);

/// A borrowed type-erased value that can be downcast to `&T`.
///
/// Unlike [`Downcast`](trait.Downcast.html), this never touches ownership:
/// a successful downcast borrows the pointee for as long as the source
/// element was borrowed.
pub trait DowncastRef<T> {
    /// The reference produced by a successful downcast.
    type Output;

    /// Attempt the downcast, returning `None` if the pointee is not a `T`.
    fn downcast_ref_to(self) -> Option<Self::Output>;
}

macro_rules! downcast_ref {
    ($($src:ty),*) => {
        $(
            impl<'a, T: Any> DowncastRef<T> for &'a $src {
                type Output = &'a T;

                #[inline]
                fn downcast_ref_to(self) -> Option<&'a T> {
                    let any: &'a dyn Any = &**self;
                    any.downcast_ref::<T>()
                }
            }
        )*
    }
}

downcast_ref!(
    Box<dyn Any>,
    Box<dyn Any + Send>,
    Rc<dyn Any>,
    Arc<dyn Any + Send + Sync>
);

impl<'a, T: Any> DowncastRef<T> for &'a dyn Any {
    type Output = &'a T;

    #[inline]
    fn downcast_ref_to(self) -> Option<&'a T> {
        self.downcast_ref::<T>()
    }
}

impl<'a, 'b, T: Any> DowncastRef<T> for &'a &'b dyn Any {
    type Output = &'a T;

    #[inline]
    fn downcast_ref_to(self) -> Option<&'a T> {
        (**self).downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::rc::Rc;

    use super::{
        Contiguous, Downcast, DowncastRef, Generic, Layout, Scalar,
    };

    #[test]
    fn scalar_reads_through_references() {
        assert_eq!(Scalar::value(&7u8), 7u8);
        assert_eq!(Scalar::value(1.5f64), 1.5);
    }

    #[test]
    fn downcast_ref_borrows() {
        let items: Vec<Box<dyn Any>> = vec![Box::new(1i32), Box::new("x")];
        let got: Option<&i32> = DowncastRef::<i32>::downcast_ref_to(&items[0]);
        assert_eq!(got, Some(&1));
        let got: Option<&i32> = DowncastRef::<i32>::downcast_ref_to(&items[1]);
        assert_eq!(got, None);
    }

    #[test]
    fn layout_flags() {
        assert!(Contiguous::CONTIGUOUS);
        assert!(!Generic::CONTIGUOUS);
    }

    #[test]
    fn box_downcast_hands_back_ownership() {
        let b: Box<dyn Any> = Box::new(5i32);
        let got: Option<Box<i32>> = Downcast::<i32>::downcast_handle(b);
        assert_eq!(got.map(|b| *b), Some(5));

        let b: Box<dyn Any> = Box::new("nope");
        let got: Option<Box<i32>> = Downcast::<i32>::downcast_handle(b);
        assert!(got.is_none());
    }

    #[test]
    fn borrowed_rc_downcast_clones() {
        let rc: Rc<dyn Any> = Rc::new(1u8);
        let got: Option<Rc<u8>> = Downcast::<u8>::downcast_handle(&rc);
        assert_eq!(got.as_deref(), Some(&1));
        assert_eq!(Rc::strong_count(&rc), 2);
    }
}
