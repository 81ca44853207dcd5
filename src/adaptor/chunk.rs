use std::cmp;

use crate::capability::{Contiguous, Generic, Layout, Utf8};
use crate::error::{Error, Result};
use crate::pipe::Adaptor;
use crate::source::{Span, Subrange, Text};
use crate::view::{RandomAccessView, SizedView, View};

/// How views of a particular layout are grouped into chunks.
///
/// Callers guarantee the chunk size is never zero.
pub trait ChunkStrategy<V: View>: Layout {
    /// The view of chunks.
    type Chunked;

    /// Group the elements of `view` into chunks of `n`.
    fn chunk(view: V, n: usize) -> Self::Chunked;
}

impl<V: View> ChunkStrategy<V> for Generic {
    type Chunked = Chunk<V>;

    #[inline]
    fn chunk(view: V, n: usize) -> Chunk<V> {
        Chunk { view, n }
    }
}

impl<'a, T> ChunkStrategy<Span<'a, T>> for Contiguous {
    type Chunked = ChunkSpan<'a, T>;

    #[inline]
    fn chunk(view: Span<'a, T>, n: usize) -> ChunkSpan<'a, T> {
        ChunkSpan { slice: view.as_slice(), n }
    }
}

impl<'a> ChunkStrategy<Text<'a>> for Utf8 {
    type Chunked = ChunkText<'a>;

    #[inline]
    fn chunk(view: Text<'a>, n: usize) -> ChunkText<'a> {
        ChunkText { text: view.as_str(), n }
    }
}

/// A view of consecutive runs of `n` elements of another view.
///
/// Each chunk is a [`Subrange`](../source/struct.Subrange.html) that starts
/// from a copy of the source cursor, so the source must be multi-pass.
/// When the source cursor reports an exact length, moving to the next chunk
/// reads only the last element of the chunk before it.
#[derive(Clone, Debug)]
pub struct Chunk<V> {
    view: V,
    n: usize,
}

impl<V> View for Chunk<V>
where
    V: View,
    V::Cursor: Clone,
{
    type Item = Subrange<V::Cursor>;
    type Cursor = ChunkCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        ChunkCursor { iter: self.view.into_cursor(), n: self.n, behind: 0 }
    }
}

impl<V> SizedView for Chunk<V>
where
    V: SizedView,
    V::Cursor: Clone,
{
    #[inline]
    fn size(&self) -> usize {
        div_ceil(self.view.size(), self.n)
    }
}

impl_view_ops!([V,] Chunk<V>);

/// The cursor of a [`Chunk`](struct.Chunk.html).
#[derive(Clone, Debug)]
pub struct ChunkCursor<I> {
    iter: I,
    n: usize,
    /// Elements of the last chunk produced that `iter` hasn't moved past.
    behind: usize,
}

impl<I: Iterator + Clone> Iterator for ChunkCursor<I> {
    type Item = Subrange<I>;

    #[inline]
    fn next(&mut self) -> Option<Subrange<I>> {
        if self.behind > 0 {
            if let (lo, Some(hi)) = self.iter.size_hint() {
                if lo == hi && lo <= self.behind {
                    return None;
                }
            }
            self.iter.nth(self.behind - 1);
            self.behind = 0;
        }
        let start = self.iter.clone();
        let width = match self.iter.size_hint() {
            (lo, Some(hi)) if lo == hi => {
                let width = cmp::min(lo, self.n);
                self.behind = width;
                width
            }
            _ => {
                let mut width = 0;
                while width < self.n && self.iter.next().is_some() {
                    width += 1;
                }
                width
            }
        };
        if width == 0 {
            None
        } else {
            Some(Subrange::new(start, width))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let lo = lo.saturating_sub(self.behind);
        let hi = hi.map(|hi| hi.saturating_sub(self.behind));
        (div_ceil(lo, self.n), hi.map(|hi| div_ceil(hi, self.n)))
    }
}

/// A view of consecutive sub-slices of `n` elements of a borrowed slice.
#[derive(Debug)]
pub struct ChunkSpan<'a, T> {
    slice: &'a [T],
    n: usize,
}

impl<'a, T> Clone for ChunkSpan<'a, T> {
    #[inline]
    fn clone(&self) -> ChunkSpan<'a, T> {
        ChunkSpan { slice: self.slice, n: self.n }
    }
}

impl<'a, T> View for ChunkSpan<'a, T> {
    type Item = Span<'a, T>;
    type Cursor = ChunkSpanCursor<'a, T>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> ChunkSpanCursor<'a, T> {
        ChunkSpanCursor { slice: self.slice, n: self.n }
    }
}

impl<'a, T> SizedView for ChunkSpan<'a, T> {
    #[inline]
    fn size(&self) -> usize {
        div_ceil(self.slice.len(), self.n)
    }
}

impl<'a, T> RandomAccessView for ChunkSpan<'a, T> {
    #[inline]
    fn get(&self, index: usize) -> Option<Span<'a, T>> {
        let start = index.checked_mul(self.n)?;
        if start >= self.slice.len() {
            return None;
        }
        let end = cmp::min(start.saturating_add(self.n), self.slice.len());
        Some(Span::new(&self.slice[start..end]))
    }
}

impl_view_ops!(['a, T,] ChunkSpan<'a, T>);

/// The cursor of a [`ChunkSpan`](struct.ChunkSpan.html).
///
/// When traversed from the back, the first chunk produced is the short
/// one, if any.
#[derive(Debug)]
pub struct ChunkSpanCursor<'a, T> {
    slice: &'a [T],
    n: usize,
}

impl<'a, T> Clone for ChunkSpanCursor<'a, T> {
    #[inline]
    fn clone(&self) -> ChunkSpanCursor<'a, T> {
        ChunkSpanCursor { slice: self.slice, n: self.n }
    }
}

impl<'a, T> Iterator for ChunkSpanCursor<'a, T> {
    type Item = Span<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Span<'a, T>> {
        if self.slice.is_empty() {
            return None;
        }
        let mid = cmp::min(self.n, self.slice.len());
        let (head, tail) = self.slice.split_at(mid);
        self.slice = tail;
        Some(Span::new(head))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = div_ceil(self.slice.len(), self.n);
        (n, Some(n))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Span<'a, T>> {
        match n.checked_mul(self.n) {
            Some(skip) if skip < self.slice.len() => {
                self.slice = &self.slice[skip..];
                self.next()
            }
            _ => {
                self.slice = &[];
                None
            }
        }
    }
}

impl<'a, T> DoubleEndedIterator for ChunkSpanCursor<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Span<'a, T>> {
        if self.slice.is_empty() {
            return None;
        }
        let rem = self.slice.len() % self.n;
        let width = if rem == 0 { self.n } else { rem };
        let (head, tail) = self.slice.split_at(self.slice.len() - width);
        self.slice = head;
        Some(Span::new(tail))
    }
}

impl<'a, T> ExactSizeIterator for ChunkSpanCursor<'a, T> {}

/// A view of consecutive sub-strings of `n` characters of a borrowed
/// string.
#[derive(Clone, Copy, Debug)]
pub struct ChunkText<'a> {
    text: &'a str,
    n: usize,
}

impl<'a> View for ChunkText<'a> {
    type Item = Text<'a>;
    type Cursor = ChunkTextCursor<'a>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> ChunkTextCursor<'a> {
        ChunkTextCursor { text: self.text, n: self.n }
    }
}

impl_view_ops!(['a,] ChunkText<'a>);

/// The cursor of a [`ChunkText`](struct.ChunkText.html).
#[derive(Clone, Debug)]
pub struct ChunkTextCursor<'a> {
    text: &'a str,
    n: usize,
}

impl<'a> Iterator for ChunkTextCursor<'a> {
    type Item = Text<'a>;

    #[inline]
    fn next(&mut self) -> Option<Text<'a>> {
        if self.text.is_empty() {
            return None;
        }
        let mid = Text::new(self.text).offset_of(self.n);
        let (head, tail) = self.text.split_at(mid);
        self.text = tail;
        Some(Text::new(head))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // A character takes between one and four bytes.
        let bytes = self.text.len();
        (div_ceil(div_ceil(bytes, 4), self.n), Some(div_ceil(bytes, self.n)))
    }
}

/// A partially applied `chunk`.
#[derive(Clone, Copy, Debug)]
pub struct ChunkFn {
    n: usize,
}

impl<V: View> Adaptor<V> for ChunkFn
where
    V::Layout: ChunkStrategy<V>,
{
    type Output = <V::Layout as ChunkStrategy<V>>::Chunked;

    #[inline]
    fn apply(self, view: V) -> Self::Output {
        <V::Layout as ChunkStrategy<V>>::chunk(view, self.n)
    }
}

impl_adaptor_ops!([] ChunkFn);

/// Group elements into consecutive chunks of `n`.
///
/// # Panics
///
/// When `n` is zero.
#[inline]
pub fn chunk(n: usize) -> ChunkFn {
    assert!(n > 0, "chunk size must be greater than zero");
    ChunkFn { n }
}

/// Group elements into consecutive chunks of `n`, or return an error if
/// `n` is zero.
#[inline]
pub fn try_chunk(n: usize) -> Result<ChunkFn> {
    if n == 0 {
        return Err(Error::ZeroChunkSize);
    }
    Ok(ChunkFn { n })
}

#[inline]
fn div_ceil(a: usize, b: usize) -> usize {
    a / b + if a % b == 0 { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::{chunk, try_chunk};
    use crate::error::Error;
    use crate::source::{iota, seq, Span, Text};
    use crate::view::{all, RandomAccessView, SizedView, View};

    #[test]
    fn contiguous_chunks_are_spans() {
        let v: Vec<i32> = (1..=7).collect();
        let chunks: Vec<Span<i32>> = (all(&v) | chunk(3)).to_vec();
        let slices: Vec<&[i32]> = chunks.iter().map(|c| c.as_slice()).collect();
        assert_eq!(slices, vec![&[1, 2, 3][..], &[4, 5, 6], &[7]]);
    }

    #[test]
    fn contiguous_chunks_random_access() {
        let v: Vec<i32> = (1..=7).collect();
        let view = all(&v).chunk(3);
        assert_eq!(view.size(), 3);
        assert_eq!(view.at(2).as_slice(), &[7]);
        assert!(view.get(3).is_none());
        let back: Vec<usize> = view
            .into_cursor()
            .rev()
            .map(|c| c.as_slice().len())
            .collect();
        assert_eq!(back, vec![1, 3, 3]);
    }

    #[test]
    fn generic_chunks_are_subranges() {
        let src = seq(vec![1, 2, 3, 4, 5].into_iter());
        let got: Vec<Vec<i32>> =
            src.chunk(2).into_cursor().map(|c| c.to_vec()).collect();
        assert_eq!(got, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn generic_chunks_of_unknown_length() {
        let src = seq((1..=7).filter(|x| x % 2 == 1));
        let got: Vec<Vec<i32>> =
            src.chunk(3).into_cursor().map(|c| c.to_vec()).collect();
        assert_eq!(got, vec![vec![1, 3, 5], vec![7]]);
    }

    #[test]
    fn moving_between_chunks_reads_one_element() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let got = iota(0, 6)
            .transform(|x| {
                calls.set(calls.get() + 1);
                x * 2
            })
            .chunk(2)
            .join()
            .to_vec();
        assert_eq!(got, vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(calls.get(), 8);

        calls.set(0);
        let view = iota(0, 5).transform(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(view.chunk(2).count(), 3);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn text_chunks_are_texts() {
        let got: Vec<&str> =
            all("abcde").chunk(2).into_cursor().map(|c| c.as_str()).collect();
        assert_eq!(got, vec!["ab", "cd", "e"]);

        let pieces: Vec<Text> = (all("h€llo wörld") | chunk(3)).to_vec();
        assert_eq!(pieces, vec!["h€l", "lo ", "wör", "ld"]);
        assert_eq!(all("").chunk(3).count(), 0);
    }

    #[test]
    fn empty_source_has_no_chunks() {
        let v: Vec<i32> = vec![];
        assert_eq!(all(&v).chunk(4).count(), 0);
        assert_eq!(seq(v.iter()).chunk(4).count(), 0);
    }

    #[test]
    fn zero_chunk_size() {
        assert_eq!(try_chunk(0).unwrap_err(), Error::ZeroChunkSize);
    }

    #[test]
    #[should_panic]
    fn zero_chunk_size_panics() {
        let v = vec![1];
        all(&v).chunk(0);
    }
}
