use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

use crate::func::TypeName;
use crate::pipe::Adaptor;
use crate::view::View;

/// A terminal adaptor that materializes a view into a collection.
pub struct ToFn<C> {
    _collection: PhantomData<fn() -> C>,
}

impl<C> Clone for ToFn<C> {
    fn clone(&self) -> ToFn<C> {
        ToFn { _collection: PhantomData }
    }
}

impl<C> Copy for ToFn<C> {}

impl<C> fmt::Debug for ToFn<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ToFn").field(&TypeName::<C>::new()).finish()
    }
}

impl<V, C> Adaptor<V> for ToFn<C>
where
    V: View,
    C: FromIterator<V::Item>,
{
    type Output = C;

    #[inline]
    fn apply(self, view: V) -> C {
        view.to()
    }
}

impl_adaptor_ops!([C,] ToFn<C>);

/// Materialize the view into a collection of type `C`.
///
/// This ends a pipeline:
///
/// ```rust
/// use seqview::adaptor::{filter, to};
/// use seqview::all;
///
/// let letters: String = all("a1b2")
///     | filter(|c: &char| c.is_alphabetic())
///     | to();
/// assert_eq!(letters, "ab");
/// ```
#[inline]
pub fn to<C>() -> ToFn<C> {
    ToFn { _collection: PhantomData }
}

/// A terminal adaptor that calls a closure on every element.
#[derive(Clone, Copy)]
pub struct ForEachFn<F> {
    f: F,
}

impl<F> fmt::Debug for ForEachFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEachFn")
            .field("f", &TypeName::<F>::new())
            .finish()
    }
}

impl<V, F> Adaptor<V> for ForEachFn<F>
where
    V: View,
    F: FnMut(V::Item),
{
    type Output = ();

    #[inline]
    fn apply(self, view: V) {
        view.for_each(self.f)
    }
}

impl_adaptor_ops!([F,] ForEachFn<F>);

/// Traverse the view, calling `f` on each element.
#[inline]
pub fn for_each<F>(f: F) -> ForEachFn<F> {
    ForEachFn { f }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{for_each, to};
    use crate::adaptor::{take, transform};
    use crate::source::iota;

    #[test]
    fn collects() {
        let got: BTreeSet<i32> = iota(0, 10) | transform(|x: i32| x % 3) | to();
        assert_eq!(got.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn visits() {
        let mut sum = 0;
        iota(1, 100) | take(4) | for_each(|x: i32| sum += x);
        assert_eq!(sum, 10);
    }

    #[test]
    fn composes_into_terminal() {
        let op = take(2) | to::<Vec<i32>>();
        assert_eq!(iota(5, 9) | op, vec![5, 6]);
    }
}
