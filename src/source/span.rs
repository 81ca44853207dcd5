use std::fmt;
use std::slice;

use crate::capability::{Contiguous, Generic};
use crate::view::{IntoView, RandomAccessView, SizedView, View};

/// A view of a borrowed slice.
///
/// This is the view produced by `all` for slices, arrays, vectors and boxed
/// slices. It is the only view with a `Contiguous` layout, which lets
/// `take`, `drop`, `take_last`, `drop_last`, `chunk` and `split` produce
/// narrower spans instead of wrapping cursors.
pub struct Span<'a, T> {
    slice: &'a [T],
}

impl<'a, T> Span<'a, T> {
    /// Create a view of the given slice.
    #[inline]
    pub fn new(slice: &'a [T]) -> Span<'a, T> {
        Span { slice }
    }

    /// Returns the slice this view reads from.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<'a, T> Clone for Span<'a, T> {
    #[inline]
    fn clone(&self) -> Span<'a, T> {
        *self
    }
}

impl<'a, T> Copy for Span<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Span<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Span").field(&self.slice).finish()
    }
}

impl<'a, 'b, T: PartialEq> PartialEq<Span<'b, T>> for Span<'a, T> {
    fn eq(&self, other: &Span<'b, T>) -> bool {
        self.slice == other.slice
    }
}

impl<'a, T: PartialEq> PartialEq<[T]> for Span<'a, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.slice == other
    }
}

impl<'a, T: Eq> Eq for Span<'a, T> {}

impl<'a, T> View for Span<'a, T> {
    type Item = &'a T;
    type Cursor = slice::Iter<'a, T>;
    type Layout = Contiguous;

    #[inline]
    fn into_cursor(self) -> slice::Iter<'a, T> {
        self.slice.iter()
    }
}

impl<'a, T> SizedView for Span<'a, T> {
    #[inline]
    fn size(&self) -> usize {
        self.slice.len()
    }
}

impl<'a, T> RandomAccessView for Span<'a, T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&'a T> {
        self.slice.get(index)
    }
}

impl_view_ops!(['a, T,] Span<'a, T>);

/// A view of a mutably borrowed slice.
///
/// Its elements are mutable references, which makes it the natural source
/// for `move_out`. Since two cursors over the same elements would alias,
/// this view is single-pass: it is neither `Clone` nor random access.
pub struct SpanMut<'a, T> {
    slice: &'a mut [T],
}

impl<'a, T> SpanMut<'a, T> {
    /// Create a view of the given slice.
    #[inline]
    pub fn new(slice: &'a mut [T]) -> SpanMut<'a, T> {
        SpanMut { slice }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for SpanMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SpanMut").field(&self.slice).finish()
    }
}

impl<'a, T> View for SpanMut<'a, T> {
    type Item = &'a mut T;
    type Cursor = slice::IterMut<'a, T>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> slice::IterMut<'a, T> {
        self.slice.iter_mut()
    }
}

impl<'a, T> SizedView for SpanMut<'a, T> {
    #[inline]
    fn size(&self) -> usize {
        self.slice.len()
    }
}

impl_view_ops!(['a, T,] SpanMut<'a, T>);

impl<'a, T> IntoView for &'a [T] {
    type Item = &'a T;
    type View = Span<'a, T>;

    #[inline]
    fn into_view(self) -> Span<'a, T> {
        Span::new(self)
    }
}

impl<'a, T> IntoView for &'a Vec<T> {
    type Item = &'a T;
    type View = Span<'a, T>;

    #[inline]
    fn into_view(self) -> Span<'a, T> {
        Span::new(self)
    }
}

impl<'a, T> IntoView for &'a Box<[T]> {
    type Item = &'a T;
    type View = Span<'a, T>;

    #[inline]
    fn into_view(self) -> Span<'a, T> {
        Span::new(self)
    }
}

impl<'a, T, const N: usize> IntoView for &'a [T; N] {
    type Item = &'a T;
    type View = Span<'a, T>;

    #[inline]
    fn into_view(self) -> Span<'a, T> {
        Span::new(self)
    }
}

impl<'a, T> IntoView for &'a mut [T] {
    type Item = &'a mut T;
    type View = SpanMut<'a, T>;

    #[inline]
    fn into_view(self) -> SpanMut<'a, T> {
        SpanMut::new(self)
    }
}

impl<'a, T> IntoView for &'a mut Vec<T> {
    type Item = &'a mut T;
    type View = SpanMut<'a, T>;

    #[inline]
    fn into_view(self) -> SpanMut<'a, T> {
        SpanMut::new(self)
    }
}

impl<'a, T, const N: usize> IntoView for &'a mut [T; N] {
    type Item = &'a mut T;
    type View = SpanMut<'a, T>;

    #[inline]
    fn into_view(self) -> SpanMut<'a, T> {
        SpanMut::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Span;
    use crate::view::{all, RandomAccessView, SizedView, View};

    #[test]
    fn span_reads_in_order() {
        let v = vec![3, 1, 2];
        assert_eq!(all(&v).to_vec(), vec![&3, &1, &2]);
        assert_eq!(all(&[1u8, 2][..]).size(), 2);
        assert_eq!(all(&[7, 8, 9]).at(2), &9);
    }

    #[test]
    fn span_compares_by_contents() {
        let a = vec![1, 2];
        let b = [1, 2];
        assert_eq!(Span::new(&a), Span::new(&b));
        assert!(Span::new(&a) == b[..]);
    }

    #[test]
    fn span_mut_yields_mutable_references() {
        let mut v = vec![1, 2, 3];
        for x in all(&mut v) {
            *x *= 10;
        }
        assert_eq!(v, vec![10, 20, 30]);
    }
}
