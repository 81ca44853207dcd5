use crate::capability::Generic;
use crate::pipe::Adaptor;
use crate::view::View;

/// A view over the elements of another view that repeat an earlier one.
///
/// The first repetition of a value produces the value twice, once for the
/// original occurrence and once for the repeat. Every later repetition
/// produces it once more. So `[1, 2, 1, 3, 1, 2]` gives `[1, 1, 1, 2, 2]`.
///
/// Elements are only required to be `PartialEq`, so every element is
/// compared against every distinct value seen so far.
#[derive(Clone, Debug)]
pub struct Duplicates<V> {
    view: V,
}

impl<V> Duplicates<V> {
    pub(crate) fn new(view: V) -> Duplicates<V> {
        Duplicates { view }
    }
}

impl<V> View for Duplicates<V>
where
    V: View,
    V::Item: Clone + PartialEq,
{
    type Item = V::Item;
    type Cursor = DuplicatesCursor<V::Cursor>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        DuplicatesCursor {
            iter: self.view.into_cursor(),
            seen: vec![],
            pending: None,
        }
    }
}

impl_view_ops!([V,] Duplicates<V>);

/// The cursor of a [`Duplicates`](struct.Duplicates.html).
#[derive(Clone, Debug)]
pub struct DuplicatesCursor<I: Iterator> {
    iter: I,
    /// Every distinct value seen, and whether it has repeated yet.
    seen: Vec<(I::Item, bool)>,
    pending: Option<I::Item>,
}

impl<I> Iterator for DuplicatesCursor<I>
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        loop {
            let item = self.iter.next()?;
            match self.seen.iter_mut().find(|(v, _)| *v == item) {
                None => self.seen.push((item, false)),
                Some((_, repeated)) if *repeated => return Some(item),
                Some((_, repeated)) => {
                    *repeated = true;
                    self.pending = Some(item.clone());
                    return Some(item);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending.is_some() as usize;
        let (_, hi) = self.iter.size_hint();
        (pending, hi.and_then(|h| h.checked_mul(2)?.checked_add(pending)))
    }
}

/// A partially applied `duplicates`.
#[derive(Clone, Copy, Debug)]
pub struct DuplicatesFn(());

impl<V> Adaptor<V> for DuplicatesFn
where
    V: View,
    V::Item: Clone + PartialEq,
{
    type Output = Duplicates<V>;

    #[inline]
    fn apply(self, view: V) -> Duplicates<V> {
        Duplicates::new(view)
    }
}

impl_adaptor_ops!([] DuplicatesFn);

/// Keep only the elements that repeat an earlier one.
#[inline]
pub fn duplicates() -> DuplicatesFn {
    DuplicatesFn(())
}
