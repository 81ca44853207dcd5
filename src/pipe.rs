/*!
Partially applied adaptors and the pipe operator.

Every adaptor can be used in two ways. The *full* form is a method on
[`View`](../trait.View.html), e.g., `view.take(3)`. The *partial* form is a
free function in [`adaptor`](../adaptor/index.html) that binds every argument
except the view, e.g., `take(3)`, and yields a value implementing
[`Adaptor`](trait.Adaptor.html). A partial adaptor is applied by
piping a view into it with `|`:

```rust
use seqview::adaptor::{filter, take, transform};
use seqview::{all, View};

let v = vec![1, 2, 3, 4, 5, 6];
let evens = all(&v)
    | filter(|x: &&i32| **x % 2 == 0)
    | transform(|x: &i32| x * 10)
    | take(2);
assert_eq!(evens.to_vec(), vec![20, 40]);
```

Partial adaptors compose with each other before meeting a view. The
composition is itself a partial adaptor:

```rust
use seqview::adaptor::{drop, reverse, take};
use seqview::{all, View};

let middle = drop(1) | take(3) | reverse();
let v = vec![1, 2, 3, 4, 5];
assert_eq!((all(&v) | middle).to_vec(), vec![&4, &3, &2]);
```

The `|` operator is implemented on every view type in this crate. For
sources that are not views yet (slices, strings, collections), either wrap
them with [`all`](../fn.all.html) or use the [`Pipe`](trait.Pipe.html)
extension trait, which accepts anything implementing `IntoView`.

Closures passed to partial adaptors need annotated parameter types: the
element type is not known until the adaptor meets its view. The full
method forms infer them.
*/

use crate::view::IntoView;

/// An adaptor with every argument bound except the view it applies to.
///
/// Applying an adaptor consumes it. Adaptor values are typically `Clone`
/// when their bound arguments are, so one composition can be applied to
/// several views.
pub trait Adaptor<V> {
    /// The result of applying this adaptor to `V`.
    type Output;

    /// Apply this adaptor to a view.
    fn apply(self, view: V) -> Self::Output;
}

/// The composition of two partial adaptors.
///
/// Applying `Then { first, second }` to a view applies `first` and then
/// `second`.
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub(crate) fn new(first: A, second: B) -> Then<A, B> {
        Then { first, second }
    }
}

impl<V, A, B> Adaptor<V> for Then<A, B>
where
    A: Adaptor<V>,
    B: Adaptor<A::Output>,
{
    type Output = B::Output;

    #[inline]
    fn apply(self, view: V) -> B::Output {
        self.second.apply(self.first.apply(view))
    }
}

/// Pipes any value that converts to a view into a partial adaptor.
///
/// This is blanket implemented for every type.
pub trait Pipe: Sized {
    /// Convert `self` into a view and apply `op` to it.
    fn pipe<Op>(self, op: Op) -> Op::Output
    where
        Self: IntoView,
        Op: Adaptor<<Self as IntoView>::View>,
    {
        op.apply(self.into_view())
    }
}

impl<T> Pipe for T {}

/// Implements `|` (apply a partial adaptor) and `IntoIterator` for a view
/// type.
///
/// Generic parameters are given in brackets, with a trailing comma when
/// non-empty, because the expansion appends its own parameter. Types whose
/// definition carries bounds repeat them in a bracketed `where` clause.
macro_rules! impl_view_ops {
    ([$($gen:tt)*] $ty:ty $(where [$($bound:tt)*])?) => {
        impl<$($gen)* Op> ::std::ops::BitOr<Op> for $ty
        where
            $($($bound)*)?
            $ty: $crate::view::View,
            Op: $crate::pipe::Adaptor<$ty>,
        {
            type Output = Op::Output;

            #[inline]
            fn bitor(self, op: Op) -> Op::Output {
                op.apply(self)
            }
        }

        impl<$($gen)*> ::std::iter::IntoIterator for $ty
        where
            $($($bound)*)?
            $ty: $crate::view::View,
        {
            type Item = <$ty as $crate::view::View>::Item;
            type IntoIter = <$ty as $crate::view::View>::Cursor;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                $crate::view::View::into_cursor(self)
            }
        }
    }
}

/// Implements `|` (compose) for a partial adaptor type.
macro_rules! impl_adaptor_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)* Rhs> ::std::ops::BitOr<Rhs> for $ty {
            type Output = $crate::pipe::Then<$ty, Rhs>;

            #[inline]
            fn bitor(self, rhs: Rhs) -> Self::Output {
                $crate::pipe::Then::new(self, rhs)
            }
        }
    }
}

impl_adaptor_ops!([A, B,] Then<A, B>);

#[cfg(test)]
mod tests {
    use crate::adaptor::{drop, take, transform};
    use crate::pipe::{Adaptor, Pipe};
    use crate::view::View;

    #[test]
    fn pipe_converts_sources() {
        let v = vec![1, 2, 3, 4];
        let got = (&v).pipe(drop(1) | take(2)).to_vec();
        assert_eq!(got, vec![&2, &3]);
    }

    #[test]
    fn composition_is_reusable() {
        let op = transform(|x: &i32| x + 1) | take(2);
        let a = vec![1, 2, 3];
        let b = vec![10, 20, 30];
        assert_eq!(op.clone().apply(crate::all(&a)).to_vec(), vec![2, 3]);
        assert_eq!(op.apply(crate::all(&b)).to_vec(), vec![11, 21]);
    }

    #[test]
    fn composition_associates() {
        let v: Vec<i32> = (0..10).collect();
        let left = (drop(1) | take(5)) | drop(2);
        let right = drop(1) | (take(5) | drop(2));
        assert_eq!(
            (&v).pipe(left).to_vec(),
            (&v).pipe(right).to_vec(),
        );
    }
}
