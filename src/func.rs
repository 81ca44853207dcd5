/*!
Callables bound into views: predicates, comparators and projections.

Views accept ordinary closures for every callable parameter. The traits in
this module exist so that a view can also be parameterized by a small named
callable (negation, equality against a value, natural ordering, ordering by
a projected key) without boxing. Each trait has a blanket implementation
for the matching closure signature.
*/

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A callable that decides whether an element is valid.
pub trait Predicate<T> {
    /// Evaluate the predicate on `item`.
    fn test(&mut self, item: &T) -> bool;
}

impl<T, F: FnMut(&T) -> bool> Predicate<T> for F {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Negates a predicate.
///
/// This is what turns `filter` into `remove_if`.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        !self.0.test(item)
    }
}

/// Tests elements for equality against a fixed value.
///
/// Any element type that can be borrowed as `D` is accepted, so the same
/// value works for views of `D` and views of `&D`.
#[derive(Clone, Copy, Debug)]
pub struct Equals<D>(pub D);

impl<T: Borrow<D>, D: PartialEq> Predicate<T> for Equals<D> {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        Borrow::<D>::borrow(item) == &self.0
    }
}

/// A strict weak ordering over elements.
pub trait Compare<T> {
    /// Compare `a` with `b`.
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

impl<T, F: FnMut(&T, &T) -> Ordering> Compare<T> for F {
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The ordering given by `Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The ordering given by `Ord` on a projected key.
///
/// The projection is invoked once per operand of every comparison.
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K: Ord, F: FnMut(&T) -> K> Compare<T> for ByKey<F> {
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        let ka = (self.0)(a);
        let kb = (self.0)(b);
        ka.cmp(&kb)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByKey").field(&TypeName::<F>::new()).finish()
    }
}

/// Renders a type's name in `Debug` output.
///
/// Closures have no useful `Debug` representation, so views that carry one
/// print the closure's type name instead.
pub(crate) struct TypeName<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> TypeName<T> {
    pub(crate) fn new() -> TypeName<T> {
        TypeName(PhantomData)
    }
}

impl<T: ?Sized> fmt::Debug for TypeName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::any::type_name::<T>())
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{ByKey, Compare, Equals, Natural, Not, Predicate};

    #[test]
    fn equals_accepts_borrowed_elements() {
        let mut eq = Equals(3);
        assert!(eq.test(&3));
        assert!(eq.test(&&3));
        assert!(!eq.test(&&4));
    }

    #[test]
    fn not_negates() {
        let mut odd = Not(|x: &i32| x % 2 == 0);
        assert!(odd.test(&1));
        assert!(!odd.test(&2));
    }

    #[test]
    fn by_key_projects() {
        let mut cmp = ByKey(|s: &&str| s.len());
        assert_eq!(cmp.compare(&"ab", &"c"), Ordering::Greater);
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
    }
}
