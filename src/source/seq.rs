use std::collections::{
    btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque,
    BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque,
};
use std::iter;

use crate::capability::Generic;
use crate::view::{IntoView, SizedView, View};

/// A view over an arbitrary iterator.
///
/// The iterator is the view's construction state: every cursor derived from
/// a `Seq` starts from a clone of it. A `Seq` is therefore multi-pass
/// exactly when its iterator is `Clone`. Wrapping a consuming iterator (such
/// as `vec::IntoIter`) gives a view that owns its elements.
#[derive(Clone, Debug)]
pub struct Seq<I> {
    iter: I,
}

impl<I: Iterator> Seq<I> {
    /// Create a view from an iterator.
    #[inline]
    pub fn new(iter: I) -> Seq<I> {
        Seq { iter }
    }
}

impl<I: Iterator> View for Seq<I> {
    type Item = I::Item;
    type Cursor = I;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> I {
        self.iter
    }
}

impl<I: ExactSizeIterator> SizedView for Seq<I> {
    #[inline]
    fn size(&self) -> usize {
        self.iter.len()
    }
}

impl_view_ops!([I,] Seq<I>);

/// Create a view from anything that can be iterated.
///
/// ```rust
/// use seqview::source::seq;
/// use seqview::View;
///
/// let owned = seq(vec![String::from("a"), String::from("b")]);
/// assert_eq!(owned.reverse().to_vec(), vec!["b", "a"]);
/// ```
#[inline]
pub fn seq<T: IntoIterator>(iterable: T) -> Seq<T::IntoIter> {
    Seq::new(iterable.into_iter())
}

/// A contiguous run of elements inside another view.
///
/// This is the element type of `chunk` and `split` on views without a
/// contiguous layout. It records where the run starts and how long it is,
/// and is itself a view over those elements.
#[derive(Clone, Debug)]
pub struct Subrange<I> {
    start: I,
    len: usize,
}

impl<I: Iterator> Subrange<I> {
    pub(crate) fn new(start: I, len: usize) -> Subrange<I> {
        Subrange { start, len }
    }
}

impl<I: Iterator> View for Subrange<I> {
    type Item = I::Item;
    type Cursor = iter::Take<I>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> iter::Take<I> {
        self.start.take(self.len)
    }
}

impl<I: Iterator> SizedView for Subrange<I> {
    #[inline]
    fn size(&self) -> usize {
        self.len
    }
}

impl_view_ops!([I,] Subrange<I>);

macro_rules! collection_views {
    ($($coll:ident < $($param:ident),+ > => $iter:path;)*) => {
        $(
            impl<'a, $($param),+> IntoView for &'a $coll<$($param),+> {
                type Item = <$iter as Iterator>::Item;
                type View = Seq<$iter>;

                #[inline]
                fn into_view(self) -> Self::View {
                    Seq::new(self.iter())
                }
            }
        )*
    }
}

collection_views! {
    VecDeque<T> => vec_deque::Iter<'a, T>;
    LinkedList<T> => linked_list::Iter<'a, T>;
    BTreeSet<T> => btree_set::Iter<'a, T>;
    BTreeMap<K, V> => btree_map::Iter<'a, K, V>;
    HashSet<T, S> => hash_set::Iter<'a, T>;
    HashMap<K, V, S> => hash_map::Iter<'a, K, V>;
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, VecDeque};

    use super::{seq, Subrange};
    use crate::view::{all, SizedView, View};

    #[test]
    fn seq_is_multi_pass_when_iterator_clones() {
        let view = seq(vec![1, 2, 3]);
        assert_eq!(view.cursor().sum::<i32>(), 6);
        assert_eq!(view.cursor().sum::<i32>(), 6);
        assert_eq!(view.size(), 3);
    }

    #[test]
    fn collections_convert() {
        let d: VecDeque<i32> = vec![1, 2].into_iter().collect();
        assert_eq!(all(&d).to_vec(), vec![&1, &2]);

        let mut m = BTreeMap::new();
        m.insert("b", 2);
        m.insert("a", 1);
        assert_eq!(all(&m).to_vec(), vec![(&"a", &1), (&"b", &2)]);
    }

    #[test]
    fn subrange_limits_length() {
        let v = vec![1, 2, 3, 4];
        let sub = Subrange::new(v.iter().skip(1), 2);
        assert_eq!(sub.size(), 2);
        assert_eq!(sub.to_vec(), vec![&2, &3]);
    }
}
