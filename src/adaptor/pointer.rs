use std::ops::Deref;

use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::{RandomAccessView, SizedView, View};

/// A borrowed element whose address can be taken.
pub trait Addressable {
    /// The raw pointer type of the address.
    type Address;

    /// The address of the borrowed element.
    fn address(self) -> Self::Address;
}

impl<'a, T: ?Sized> Addressable for &'a T {
    type Address = *const T;

    #[inline]
    fn address(self) -> *const T {
        self
    }
}

impl<'a, T: ?Sized> Addressable for &'a mut T {
    type Address = *mut T;

    #[inline]
    fn address(self) -> *mut T {
        self
    }
}

/// A borrowed pointer-like element that can be looked through.
pub trait Indirection {
    /// The type reached by looking through the element.
    type Target: ?Sized;
    /// A reference to the target, borrowed for as long as the element.
    type Ref;

    /// Look through the element.
    fn look_through(self) -> Self::Ref;
    /// The address of the target.
    fn target_address(self) -> *const Self::Target;
}

impl<'a, P: Deref> Indirection for &'a P {
    type Target = P::Target;
    type Ref = &'a P::Target;

    #[inline]
    fn look_through(self) -> &'a P::Target {
        &**self
    }

    #[inline]
    fn target_address(self) -> *const P::Target {
        &**self
    }
}

macro_rules! pointer_view {
    (
        $(#[$doc:meta])*
        $view:ident, $cursor:ident, $func:ident, $ctor:ident,
        $bound:ident, $out:ident, $method:ident
    ) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $view<V> {
            view: V,
        }

        impl<V> $view<V> {
            pub(crate) fn new(view: V) -> $view<V> {
                $view { view }
            }
        }

        impl<V> View for $view<V>
        where
            V: View,
            V::Item: $bound,
        {
            type Item = <V::Item as $bound>::$out;
            type Cursor = $cursor<V::Cursor>;
            type Layout = Generic;

            #[inline]
            fn into_cursor(self) -> Self::Cursor {
                $cursor { iter: self.view.into_cursor() }
            }
        }

        impl<V> SizedView for $view<V>
        where
            V: SizedView,
            V::Item: $bound,
        {
            #[inline]
            fn size(&self) -> usize {
                self.view.size()
            }
        }

        impl<V> RandomAccessView for $view<V>
        where
            V: RandomAccessView,
            V::Item: $bound,
        {
            #[inline]
            fn get(&self, index: usize) -> Option<Self::Item> {
                self.view.get(index).map($bound::$method)
            }
        }

        impl_view_ops!([V,] $view<V>);

        /// A cursor over a pointer view.
        #[derive(Clone, Debug)]
        pub struct $cursor<I> {
            iter: I,
        }

        impl<I> Iterator for $cursor<I>
        where
            I: Iterator,
            I::Item: $bound,
        {
            type Item = <I::Item as $bound>::$out;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter.next().map($bound::$method)
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter.size_hint()
            }

            #[inline]
            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.iter.nth(n).map($bound::$method)
            }
        }

        impl<I> DoubleEndedIterator for $cursor<I>
        where
            I: DoubleEndedIterator,
            I::Item: $bound,
        {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter.next_back().map($bound::$method)
            }

            #[inline]
            fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
                self.iter.nth_back(n).map($bound::$method)
            }
        }

        impl<I> ExactSizeIterator for $cursor<I>
        where
            I: ExactSizeIterator,
            I::Item: $bound,
        {}

        /// A partially applied pointer adaptor.
        #[derive(Clone, Copy, Debug)]
        pub struct $func(());

        impl<V> Adaptor<V> for $func
        where
            V: View,
            V::Item: $bound,
        {
            type Output = $view<V>;

            #[inline]
            fn apply(self, view: V) -> $view<V> {
                $view::new(view)
            }
        }

        impl_adaptor_ops!([] $func);

        $(#[$doc])*
        #[inline]
        pub fn $ctor() -> $func {
            $func(())
        }
    }
}

pointer_view! {
    /// Replace every borrowed element with its address.
    AddressOf, AddressOfCursor, AddressOfFn, address_of,
    Addressable, Address, address
}

pointer_view! {
    /// Replace every borrowed pointer-like element with a reference to its
    /// target.
    Indirect, IndirectCursor, IndirectFn, indirect,
    Indirection, Ref, look_through
}

/// A pointer view producing the addresses of the targets of pointer-like
/// elements.
#[derive(Clone, Debug)]
pub struct Ptr<V> {
    view: V,
}

impl<V> Ptr<V> {
    pub(crate) fn new(view: V) -> Ptr<V> {
        Ptr { view }
    }
}

impl<V> View for Ptr<V>
where
    V: View,
    V::Item: Indirection,
{
    type Item = *const <V::Item as Indirection>::Target;
    type Cursor = PtrCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        PtrCursor { iter: self.view.into_cursor() }
    }
}

impl<V> SizedView for Ptr<V>
where
    V: SizedView,
    V::Item: Indirection,
{
    #[inline]
    fn size(&self) -> usize {
        self.view.size()
    }
}

impl<V> RandomAccessView for Ptr<V>
where
    V: RandomAccessView,
    V::Item: Indirection,
{
    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        self.view.get(index).map(Indirection::target_address)
    }
}

impl_view_ops!([V,] Ptr<V>);

/// The cursor of a [`Ptr`](struct.Ptr.html).
#[derive(Clone, Debug)]
pub struct PtrCursor<I> {
    iter: I,
}

impl<I> Iterator for PtrCursor<I>
where
    I: Iterator,
    I::Item: Indirection,
{
    type Item = *const <I::Item as Indirection>::Target;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Indirection::target_address)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> DoubleEndedIterator for PtrCursor<I>
where
    I: DoubleEndedIterator,
    I::Item: Indirection,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(Indirection::target_address)
    }
}

impl<I> ExactSizeIterator for PtrCursor<I>
where
    I: ExactSizeIterator,
    I::Item: Indirection,
{}

/// A partially applied `ptr`.
#[derive(Clone, Copy, Debug)]
pub struct PtrFn(());

impl<V> Adaptor<V> for PtrFn
where
    V: View,
    V::Item: Indirection,
{
    type Output = Ptr<V>;

    #[inline]
    fn apply(self, view: V) -> Ptr<V> {
        Ptr::new(view)
    }
}

impl_adaptor_ops!([] PtrFn);

/// Replace every borrowed pointer-like element with the address of its
/// target.
#[inline]
pub fn ptr() -> PtrFn {
    PtrFn(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{address_of, indirect, ptr};
    use crate::view::{all, RandomAccessView, View};

    #[test]
    fn addresses_of_elements() {
        let v = vec![1, 2, 3];
        let addrs = (all(&v) | address_of()).to_vec();
        assert_eq!(addrs[1], &v[1] as *const i32);
        assert_eq!(all(&v).address_of().at(2), &v[2] as *const i32);
    }

    #[test]
    fn looks_through_pointers() {
        let boxes = vec![Box::new(1), Box::new(2)];
        assert_eq!((all(&boxes) | indirect()).to_vec(), vec![&1, &2]);

        let shared = vec![Rc::new(String::from("a"))];
        let got: Vec<&String> = all(&shared).indirect().to_vec();
        assert_eq!(got, vec!["a"]);
    }

    #[test]
    fn addresses_of_targets() {
        let boxes = vec![Box::new(7u8)];
        let got = (all(&boxes) | ptr()).to_vec();
        assert_eq!(got, vec![&*boxes[0] as *const u8]);
    }
}
