use std::borrow::Borrow;

use memchr::{memchr, memrchr};

use crate::capability::{Contiguous, Generic, Layout, Utf8};
use crate::pipe::Adaptor;
use crate::source::{Span, Subrange, Text};
use crate::view::View;

/// How views of a particular layout are split on a delimiter.
pub trait SplitStrategy<V: View, D>: Layout {
    /// The view of pieces.
    type Pieces;

    /// Split `view` into the pieces between occurrences of `delim`.
    fn split(view: V, delim: D) -> Self::Pieces;
}

impl<V: View, D> SplitStrategy<V, D> for Generic {
    type Pieces = Split<V, D>;

    #[inline]
    fn split(view: V, delim: D) -> Split<V, D> {
        Split { view, delim }
    }
}

impl<'a, T, D> SplitStrategy<Span<'a, T>, D> for Contiguous {
    type Pieces = SplitSpan<'a, T, D>;

    #[inline]
    fn split(view: Span<'a, T>, delim: D) -> SplitSpan<'a, T, D> {
        SplitSpan { slice: view.as_slice(), delim }
    }
}

impl<'a> SplitStrategy<Text<'a>, char> for Utf8 {
    type Pieces = SplitText<'a>;

    #[inline]
    fn split(view: Text<'a>, delim: char) -> SplitText<'a> {
        SplitText { text: view.as_str(), delim }
    }
}

/// A view of the runs of elements of another view between occurrences of a
/// delimiter.
///
/// Every piece is a [`Subrange`](../source/struct.Subrange.html) starting
/// from a copy of the source cursor, so the source must be multi-pass.
#[derive(Clone, Debug)]
pub struct Split<V, D> {
    view: V,
    delim: D,
}

impl<V, D> View for Split<V, D>
where
    V: View,
    V::Cursor: Clone,
    V::Item: Borrow<D>,
    D: PartialEq,
{
    type Item = Subrange<V::Cursor>;
    type Cursor = SplitCursor<V::Cursor, D>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        SplitCursor {
            iter: self.view.into_cursor(),
            delim: self.delim,
            finished: false,
        }
    }
}

impl_view_ops!([V, D,] Split<V, D>);

/// The cursor of a [`Split`](struct.Split.html).
#[derive(Clone, Debug)]
pub struct SplitCursor<I, D> {
    iter: I,
    delim: D,
    finished: bool,
}

impl<I, D> Iterator for SplitCursor<I, D>
where
    I: Iterator + Clone,
    I::Item: Borrow<D>,
    D: PartialEq,
{
    type Item = Subrange<I>;

    fn next(&mut self) -> Option<Subrange<I>> {
        if self.finished {
            return None;
        }
        let start = self.iter.clone();
        let mut width = 0;
        loop {
            match self.iter.next() {
                None => {
                    self.finished = true;
                    break;
                }
                Some(ref item) if Borrow::<D>::borrow(item) == &self.delim => {
                    break
                }
                Some(_) => width += 1,
            }
        }
        Some(Subrange::new(start, width))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, self.iter.size_hint().1.map(|hi| hi.saturating_add(1)))
        }
    }
}

/// A view of the sub-slices of a borrowed slice between occurrences of a
/// delimiter.
#[derive(Debug)]
pub struct SplitSpan<'a, T, D> {
    slice: &'a [T],
    delim: D,
}

impl<'a, T, D: Clone> Clone for SplitSpan<'a, T, D> {
    #[inline]
    fn clone(&self) -> SplitSpan<'a, T, D> {
        SplitSpan { slice: self.slice, delim: self.delim.clone() }
    }
}

impl<'a, T, D> View for SplitSpan<'a, T, D>
where
    &'a T: Borrow<D>,
    D: PartialEq,
{
    type Item = Span<'a, T>;
    type Cursor = SplitSpanCursor<'a, T, D>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        SplitSpanCursor {
            rest: self.slice,
            delim: self.delim,
            finished: false,
        }
    }
}

impl_view_ops!(['a, T, D,] SplitSpan<'a, T, D>);

/// The cursor of a [`SplitSpan`](struct.SplitSpan.html).
#[derive(Debug)]
pub struct SplitSpanCursor<'a, T, D> {
    rest: &'a [T],
    delim: D,
    finished: bool,
}

impl<'a, T, D: Clone> Clone for SplitSpanCursor<'a, T, D> {
    #[inline]
    fn clone(&self) -> SplitSpanCursor<'a, T, D> {
        SplitSpanCursor {
            rest: self.rest,
            delim: self.delim.clone(),
            finished: self.finished,
        }
    }
}

impl<'a, T, D> SplitSpanCursor<'a, T, D>
where
    &'a T: Borrow<D>,
    D: PartialEq,
{
    #[inline]
    fn is_delim(&self, item: &'a T) -> bool {
        Borrow::<D>::borrow(&item) == &self.delim
    }
}

impl<'a, T, D> Iterator for SplitSpanCursor<'a, T, D>
where
    &'a T: Borrow<D>,
    D: PartialEq,
{
    type Item = Span<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Span<'a, T>> {
        if self.finished {
            return None;
        }
        let rest = self.rest;
        match rest.iter().position(|item| self.is_delim(item)) {
            Some(i) => {
                self.rest = &rest[i + 1..];
                Some(Span::new(&rest[..i]))
            }
            None => {
                self.finished = true;
                Some(Span::new(rest))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len() + 1))
        }
    }
}

impl<'a, T, D> DoubleEndedIterator for SplitSpanCursor<'a, T, D>
where
    &'a T: Borrow<D>,
    D: PartialEq,
{
    #[inline]
    fn next_back(&mut self) -> Option<Span<'a, T>> {
        if self.finished {
            return None;
        }
        let rest = self.rest;
        match rest.iter().rposition(|item| self.is_delim(item)) {
            Some(i) => {
                self.rest = &rest[..i];
                Some(Span::new(&rest[i + 1..]))
            }
            None => {
                self.finished = true;
                Some(Span::new(rest))
            }
        }
    }
}

/// A view of the sub-strings of a borrowed string between occurrences of a
/// delimiter character.
///
/// ASCII delimiters are searched for with `memchr`.
#[derive(Clone, Copy, Debug)]
pub struct SplitText<'a> {
    text: &'a str,
    delim: char,
}

impl<'a> View for SplitText<'a> {
    type Item = Text<'a>;
    type Cursor = SplitTextCursor<'a>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> SplitTextCursor<'a> {
        SplitTextCursor {
            rest: self.text,
            delim: self.delim,
            finished: false,
        }
    }
}

impl_view_ops!(['a,] SplitText<'a>);

/// The cursor of a [`SplitText`](struct.SplitText.html).
#[derive(Clone, Debug)]
pub struct SplitTextCursor<'a> {
    rest: &'a str,
    delim: char,
    finished: bool,
}

impl<'a> SplitTextCursor<'a> {
    #[inline]
    fn find_delim(&self) -> Option<usize> {
        if self.delim.is_ascii() {
            memchr(self.delim as u8, self.rest.as_bytes())
        } else {
            self.rest.find(self.delim)
        }
    }

    #[inline]
    fn rfind_delim(&self) -> Option<usize> {
        if self.delim.is_ascii() {
            memrchr(self.delim as u8, self.rest.as_bytes())
        } else {
            self.rest.rfind(self.delim)
        }
    }
}

impl<'a> Iterator for SplitTextCursor<'a> {
    type Item = Text<'a>;

    #[inline]
    fn next(&mut self) -> Option<Text<'a>> {
        if self.finished {
            return None;
        }
        let rest = self.rest;
        match self.find_delim() {
            Some(i) => {
                self.rest = &rest[i + self.delim.len_utf8()..];
                Some(Text::new(&rest[..i]))
            }
            None => {
                self.finished = true;
                Some(Text::new(rest))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len() + 1))
        }
    }
}

impl<'a> DoubleEndedIterator for SplitTextCursor<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Text<'a>> {
        if self.finished {
            return None;
        }
        let rest = self.rest;
        match self.rfind_delim() {
            Some(i) => {
                self.rest = &rest[..i];
                Some(Text::new(&rest[i + self.delim.len_utf8()..]))
            }
            None => {
                self.finished = true;
                Some(Text::new(rest))
            }
        }
    }
}

/// A partially applied `split`.
#[derive(Clone, Copy, Debug)]
pub struct SplitFn<D> {
    delim: D,
}

impl<V: View, D> Adaptor<V> for SplitFn<D>
where
    V::Layout: SplitStrategy<V, D>,
{
    type Output = <V::Layout as SplitStrategy<V, D>>::Pieces;

    #[inline]
    fn apply(self, view: V) -> Self::Output {
        <V::Layout as SplitStrategy<V, D>>::split(view, self.delim)
    }
}

impl_adaptor_ops!([D,] SplitFn<D>);

/// Split into the pieces between occurrences of `delim`.
#[inline]
pub fn split<D>(delim: D) -> SplitFn<D> {
    SplitFn { delim }
}

#[cfg(test)]
mod tests {
    use super::split;
    use crate::source::seq;
    use crate::view::{all, View};

    fn text_pieces(s: &str, delim: char) -> Vec<&str> {
        all(s).split(delim).into_cursor().map(|t| t.as_str()).collect()
    }

    #[test]
    fn text_split() {
        assert_eq!(text_pieces("a,b,,c", ','), vec!["a", "b", "", "c"]);
        assert_eq!(text_pieces("a,", ','), vec!["a", ""]);
        assert_eq!(text_pieces("", ','), vec![""]);
        assert_eq!(text_pieces("añbñ", 'ñ'), vec!["a", "b", ""]);
    }

    #[test]
    fn text_split_backwards() {
        let got: Vec<&str> = (all("x y  z") | split(' '))
            .into_cursor()
            .rev()
            .map(|t| t.as_str())
            .collect();
        assert_eq!(got, vec!["z", "", "y", "x"]);
    }

    #[test]
    fn text_split_matches_std_both_ways() {
        let cases = [("a-b--c-", '-'), ("€1€€2", '€'), ("none", '-')];
        for &(s, d) in &cases {
            let want: Vec<&str> = s.split(d).collect();
            assert_eq!(text_pieces(s, d), want);
            let back: Vec<&str> = all(s)
                .split(d)
                .into_cursor()
                .rev()
                .map(|t| t.as_str())
                .collect();
            let want_back: Vec<&str> = s.rsplit(d).collect();
            assert_eq!(back, want_back);
        }
    }

    #[test]
    fn span_split() {
        let v = vec![1, 0, 2, 3, 0];
        let got: Vec<&[i32]> = all(&v)
            .split(0)
            .into_cursor()
            .map(|s| s.as_slice())
            .collect();
        assert_eq!(got, vec![&[1][..], &[2, 3], &[]]);
    }

    #[test]
    fn span_split_meets_in_the_middle() {
        let v = vec![1, 0, 2];
        let mut cur = all(&v).split(0).into_cursor();
        assert_eq!(cur.next_back().map(|s| s.as_slice()), Some(&[2][..]));
        assert_eq!(cur.next().map(|s| s.as_slice()), Some(&[1][..]));
        assert!(cur.next().is_none());
        assert!(cur.next_back().is_none());
    }

    #[test]
    fn generic_split() {
        let src = seq(vec![1, 0, 0, 2].into_iter());
        let got: Vec<Vec<i32>> =
            src.split(0).into_cursor().map(|s| s.to_vec()).collect();
        assert_eq!(got, vec![vec![1], vec![], vec![2]]);

        let empty = seq(Vec::<i32>::new().into_iter());
        assert_eq!(empty.split(0).count(), 1);
    }
}
