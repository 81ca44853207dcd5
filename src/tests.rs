use std::collections::BTreeSet;

use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};
use rand::Rng;

use crate::adaptor::{chunk, drop, join, remove_if, take};
use crate::source::{iota, seq};
use crate::view::{all, RandomAccessView, SizedView, View};

/// A chunk size in `1..8`.
#[derive(Clone, Copy, Debug)]
struct ChunkSize(usize);

impl Arbitrary for ChunkSize {
    fn arbitrary<G: Gen>(g: &mut G) -> ChunkSize {
        ChunkSize(g.gen_range(1, 8))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = ChunkSize>> {
        Box::new((1..self.0).rev().map(ChunkSize))
    }
}

/// A small sequence over a small alphabet, so that delimiters and repeats
/// are common.
#[derive(Clone, Debug)]
struct Small(Vec<u8>);

impl Arbitrary for Small {
    fn arbitrary<G: Gen>(g: &mut G) -> Small {
        let size = g.gen_range(0, 20);
        Small((0..size).map(|_| g.gen_range(0, 4)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Small>> {
        Box::new(self.0.shrink().map(Small))
    }
}

#[test]
fn prop_filter_remove_duality() {
    fn p(v: Vec<i32>, m: u8) -> bool {
        let m = (m % 5 + 1) as i32;
        let kept = all(&v).filter(|x| **x % m == 0).to_vec();
        let removed = (all(&v) | remove_if(move |x: &&i32| **x % m != 0))
            .to_vec();
        kept == removed
    }
    quickcheck(p as fn(Vec<i32>, u8) -> bool)
}

#[test]
fn prop_take_drop_complement() {
    fn p(v: Vec<i32>, k: usize) -> bool {
        let k = k % (v.len() + 1);
        let front = (all(&v) | take(k)).to_vec();
        let back = (all(&v) | drop(k)).to_vec();
        let whole = seq(front.into_iter()).concat(seq(back.into_iter()));
        whole.to_vec() == v.iter().collect::<Vec<_>>()
    }
    quickcheck(p as fn(Vec<i32>, usize) -> bool)
}

#[test]
fn prop_take_drop_generic_matches_slice() {
    fn p(v: Vec<i32>, k: usize) -> bool {
        let k = k % (v.len() + 2);
        let slice = all(&v).take_last(k).to_vec();
        let generic = seq(v.iter()).take_last(k).to_vec();
        let dropped = all(&v).drop_last(k).to_vec();
        let generic_dropped = seq(v.iter()).drop_last(k).to_vec();
        slice == generic && dropped == generic_dropped
    }
    quickcheck(p as fn(Vec<i32>, usize) -> bool)
}

#[test]
fn prop_reverse_involution() {
    fn p(v: Vec<i32>) -> bool {
        let twice = all(&v).reverse().reverse().to_vec();
        twice == v.iter().collect::<Vec<_>>()
    }
    quickcheck(p as fn(Vec<i32>) -> bool)
}

#[test]
fn prop_transform_identity() {
    fn p(v: Vec<i32>) -> bool {
        let same = all(&v).transform(|x| x).to_vec();
        let back = iota(0, v.len()).transform(|i| i).reverse().to_vec();
        let at_each = (0..v.len())
            .all(|i| all(&v).transform(|x| x).get(i) == v.get(i));
        same == v.iter().collect::<Vec<_>>()
            && back == (0..v.len()).rev().collect::<Vec<_>>()
            && at_each
    }
    quickcheck(p as fn(Vec<i32>) -> bool)
}

#[test]
fn prop_chunk_coverage() {
    fn p(v: Vec<i32>, n: ChunkSize) -> bool {
        let n = n.0;
        let flat = (all(&v) | chunk(n) | join()).to_vec();
        let sizes = all(&v).chunk(n).transform(|c| c.size()).to_vec();
        let generic_sizes = seq(v.iter()).chunk(n).transform(|c| c.size());
        let full = sizes.iter().rev().skip(1).all(|&s| s == n);
        flat == v.iter().collect::<Vec<_>>()
            && full
            && generic_sizes.to_vec() == sizes
    }
    quickcheck(p as fn(Vec<i32>, ChunkSize) -> bool)
}

#[test]
fn prop_text_chunk_coverage() {
    fn p(s: String, n: ChunkSize) -> bool {
        let n = n.0;
        let pieces: Vec<&str> =
            all(&s).chunk(n).transform(|t| t.as_str()).to_vec();
        let widths: Vec<usize> =
            pieces.iter().map(|p| p.chars().count()).collect();
        pieces.concat() == s
            && widths.iter().all(|&w| w > 0 && w <= n)
            && widths.iter().rev().skip(1).all(|&w| w == n)
    }
    quickcheck(p as fn(String, ChunkSize) -> bool)
}

#[test]
fn prop_split_piece_count() {
    fn p(v: Small) -> bool {
        let delims = v.0.iter().filter(|&&x| x == 0).count();
        let pieces = all(&v.0).split(&0u8).count();
        let generic = seq(v.0.iter()).split(&0u8).count();
        pieces == delims + 1 && generic == delims + 1
    }
    quickcheck(p as fn(Small) -> bool)
}

#[test]
fn prop_split_text_matches_std() {
    fn p(s: String) -> bool {
        let got: Vec<String> = all(&s)
            .split('a')
            .transform(|piece| piece.as_str().to_string())
            .to_vec();
        let want: Vec<String> = s.split('a').map(String::from).collect();
        got == want
    }
    quickcheck(p as fn(String) -> bool)
}

#[test]
fn prop_enumerate_indices() {
    fn p(v: Vec<char>) -> bool {
        all(&v)
            .enumerate()
            .into_cursor()
            .all(|(i, c)| *c == v[i])
            && all(&v).enumerate().count() == v.len()
    }
    quickcheck(p as fn(Vec<char>) -> bool)
}

#[test]
fn prop_sorted_set_ops_match_btreeset() {
    fn p(a: BTreeSet<u8>, b: BTreeSet<u8>) -> bool {
        let (va, vb): (Vec<u8>, Vec<u8>) =
            (a.iter().cloned().collect(), b.iter().cloned().collect());
        let union = all(&va).set_union(&vb).to_vec();
        let inter = all(&va).set_intersection(&vb).to_vec();
        let diff = all(&va).set_difference(&vb).to_vec();
        let sym = all(&va).set_symmetric_difference(&vb).to_vec();
        union == a.union(&b).collect::<Vec<_>>()
            && inter == a.intersection(&b).collect::<Vec<_>>()
            && diff == a.difference(&b).collect::<Vec<_>>()
            && sym == a.symmetric_difference(&b).collect::<Vec<_>>()
    }
    quickcheck(p as fn(BTreeSet<u8>, BTreeSet<u8>) -> bool)
}

#[test]
fn prop_unsorted_agrees_with_sorted_on_sets() {
    fn p(a: BTreeSet<u8>, b: BTreeSet<u8>) -> bool {
        let (va, vb): (Vec<u8>, Vec<u8>) =
            (a.iter().cloned().collect(), b.iter().cloned().collect());
        let inter = all(&va).set_intersection_unsorted(&vb).to_vec();
        let diff = all(&va).set_difference_unsorted(&vb).to_vec();
        let union: BTreeSet<&u8> =
            all(&va).set_union_unsorted(&vb).to();
        let sym: BTreeSet<&u8> =
            all(&va).set_symmetric_difference_unsorted(&vb).to();
        inter == all(&va).set_intersection(&vb).to_vec()
            && diff == all(&va).set_difference(&vb).to_vec()
            && union == a.union(&b).collect::<BTreeSet<_>>()
            && sym == a.symmetric_difference(&b).collect::<BTreeSet<_>>()
    }
    quickcheck(p as fn(BTreeSet<u8>, BTreeSet<u8>) -> bool)
}

#[test]
fn prop_interleave_lengths() {
    fn p(a: Vec<u8>, b: Vec<u8>) -> bool {
        let short = all(&a).interleave(&b);
        let long = all(&a).interleave_extend(&b);
        short.size() == short.cursor().count()
            && long.size() == a.len() + b.len()
            && long.to_vec().len() == a.len() + b.len()
    }
    quickcheck(p as fn(Vec<u8>, Vec<u8>) -> bool)
}

#[test]
fn prop_intersperse_size() {
    fn p(v: Vec<u8>) -> bool {
        let view = all(&v).intersperse(&0);
        let want = (2 * v.len()).saturating_sub(1);
        view.size() == want && view.count() == want
    }
    quickcheck(p as fn(Vec<u8>) -> bool)
}

#[test]
fn prop_duplicates_only_repeats() {
    fn p(v: Small) -> bool {
        let dups = all(&v.0).duplicates().to_vec();
        let count = |x: u8| v.0.iter().filter(|&&y| y == x).count();
        let emitted = |x: u8| dups.iter().filter(|&&&y| y == x).count();
        (0..4).all(|x| {
            let n = count(x);
            emitted(x) == if n >= 2 { n } else { 0 }
        })
    }
    quickcheck(p as fn(Small) -> bool)
}

#[test]
fn prop_cycle_take_wraps() {
    fn p(v: Vec<u8>, k: u8) -> TestResult {
        if v.is_empty() {
            return TestResult::discard();
        }
        let k = k as usize;
        let got = all(&v).cycle().take(k).to_vec();
        let want: Vec<&u8> = v.iter().cycle().take(k).collect();
        TestResult::from_bool(got == want)
    }
    quickcheck(p as fn(Vec<u8>, u8) -> TestResult)
}
