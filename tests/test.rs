extern crate seqview;

use std::any::Any;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use seqview::adaptor::{
    cast_static, chunk, concat_all, drop_while, enumerate, filter, interleave,
    interleave_extend, join_with, remove, replace, reverse, set_difference,
    set_intersection, set_symmetric_difference, set_union,
    set_union_unsorted, split, take, take_while, to, transform, zip_all,
};
use seqview::source::{generate, iota, iota_step, seq};
use seqview::{all, Error, Pipe, RandomAccessView, SizedView, View};

fn sorted_a() -> Vec<i32> {
    (0..10).collect()
}

fn sorted_b() -> Vec<i32> {
    (5..15).collect()
}

fn unsorted_a() -> Vec<i32> {
    vec![0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9]
}

fn unsorted_b() -> Vec<i32> {
    vec![5, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
}

fn owned(v: Vec<&i32>) -> Vec<i32> {
    v.into_iter().cloned().collect()
}

#[test]
fn sorted_set_algorithms() {
    let (a, b) = (sorted_a(), sorted_b());
    assert_eq!(
        owned((all(&a) | set_union(&b)).to_vec()),
        (0..15).collect::<Vec<_>>(),
    );
    assert_eq!(
        owned((all(&a) | set_intersection(&b)).to_vec()),
        vec![5, 6, 7, 8, 9],
    );
    assert_eq!(
        owned((all(&a) | set_difference(&b)).to_vec()),
        vec![0, 1, 2, 3, 4],
    );
    assert_eq!(
        owned((all(&a) | set_symmetric_difference(&b)).to_vec()),
        vec![0, 1, 2, 3, 4, 10, 11, 12, 13, 14],
    );
}

#[test]
fn unsorted_union_regression() {
    let (a, b) = (unsorted_a(), unsorted_b());
    let got = owned((all(&a) | set_union_unsorted(&b)).to_vec());
    assert_eq!(
        got,
        vec![0, 1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
    );
}

#[test]
fn unsorted_set_algorithms() {
    let (a, b) = (unsorted_a(), unsorted_b());
    assert_eq!(
        owned(all(&a).set_intersection_unsorted(&b).to_vec()),
        vec![5, 5, 6, 7, 8, 9],
    );
    assert_eq!(
        owned(all(&a).set_difference_unsorted(&b).to_vec()),
        vec![0, 1, 2, 3, 4],
    );
    assert_eq!(
        owned(all(&a).set_symmetric_difference_unsorted(&b).to_vec()),
        vec![0, 1, 2, 3, 4, 10, 11, 12, 13, 14],
    );
}

#[test]
fn interleave_equal_lengths() {
    let a: Vec<i32> = (0..10).collect();
    let b: Vec<i32> = (0..10).rev().collect();
    let got = owned((all(&a) | interleave(&b)).to_vec());
    assert_eq!(got.len(), 20);
    assert_eq!(
        got,
        vec![
            0, 9, 1, 8, 2, 7, 3, 6, 4, 5, 5, 4, 6, 3, 7, 2, 8, 1, 9, 0,
        ],
    );
}

#[test]
fn interleave_unequal_lengths() {
    let short: Vec<i32> = (0..5).collect();
    let long: Vec<i32> = (10..20).collect();

    let got = owned(all(&short).interleave(&long).to_vec());
    assert_eq!(got, vec![0, 10, 1, 11, 2, 12, 3, 13, 4, 14]);
    let got = owned(all(&long).interleave(&short).to_vec());
    assert_eq!(got, vec![10, 0, 11, 1, 12, 2, 13, 3, 14, 4]);

    let got = owned((all(&short) | interleave_extend(&long)).to_vec());
    assert_eq!(
        got,
        vec![0, 10, 1, 11, 2, 12, 3, 13, 4, 14, 15, 16, 17, 18, 19],
    );
    let got = owned((all(&long) | interleave_extend(&short)).to_vec());
    assert_eq!(
        got,
        vec![10, 0, 11, 1, 12, 2, 13, 3, 14, 4, 15, 16, 17, 18, 19],
    );
}

#[test]
fn cycle_take_wraps() {
    let v = vec![1, 2, 3];
    let got = owned(all(&v).cycle().take(8).to_vec());
    assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 1, 2]);
}

#[test]
fn cast_round_trip() {
    let v: Vec<i32> = (0..10).collect();
    let got = (all(&v) | cast_static::<f64>() | cast_static::<i32>()).to_vec();
    assert_eq!(got, v);
    let halves = iota(1u8, 4).cast_static::<f32>().transform(|x| x / 2.0);
    assert_eq!(halves.to_vec(), vec![0.5, 1.0, 1.5]);
}

#[test]
fn dynamic_and_smart_casts() {
    let values: Vec<Box<dyn Any>> =
        vec![Box::new(1i32), Box::new("two"), Box::new(3i32)];
    let ints: Vec<&i32> = all(&values).cast_dynamic::<i32>().to_vec();
    assert_eq!(ints, vec![&1, &3]);
    let tried = all(&values).try_cast_dynamic::<&str>().to_vec();
    assert_eq!(tried, vec![None, Some(&"two"), None]);

    let shared: Vec<Rc<dyn Any>> = vec![Rc::new(1.5f64), Rc::new(2u8)];
    let floats = all(&shared).cast_smart::<f64>().to_vec();
    assert_eq!(floats.len(), 1);
    assert_eq!(*floats[0], 1.5);
}

#[test]
fn text_pipeline() {
    let csv = "name,,age\nada,36,\n";
    let lines: Vec<String> = all(csv)
        .split('\n')
        .filter(|line| !line.as_str().is_empty())
        .transform(|line| {
            line.split(',').filter(|f| !f.as_str().is_empty()).join_with('|')
                .to::<String>()
        })
        .to();
    assert_eq!(lines, vec!["name|age", "ada|36"]);
}

#[test]
fn partial_pipeline_is_reusable() {
    let words = split(' ') | filter(|w: &seqview::source::Text| {
        !w.as_str().is_empty()
    });
    let count = |s: &str| s.pipe(words.clone()).count();
    assert_eq!(count("a  b c"), 3);
    assert_eq!(count(""), 0);
}

#[test]
fn slices_stay_slices() {
    let v: Vec<i32> = (0..10).collect();
    let middle = all(&v).drop(2).take(5);
    assert_eq!(middle.as_slice(), &[2, 3, 4, 5, 6]);
    let chunks = (all(&v) | chunk(4)).to_vec();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[2].as_slice(), &[8, 9]);
    let s = all("hello, world").take(5);
    assert_eq!(s.as_str(), "hello");
}

#[test]
fn random_access_through_adaptors() {
    let v: Vec<i32> = (0..10).collect();
    let view = all(&v)
        .transform(|x| x * 3)
        .reverse()
        .drop(1)
        .take(4);
    assert_eq!(view.size(), 4);
    assert_eq!(view.at(0), 24);
    assert_eq!(view.try_at(4), Err(Error::OutOfBounds { index: 4, len: 4 }));
    assert_eq!(view.to_vec(), vec![24, 21, 18, 15]);
}

#[test]
fn enumerate_and_zip() {
    let names = vec!["a", "b", "c"];
    let got = (all(&names) | enumerate()).to_vec();
    assert_eq!(got, vec![(0, &"a"), (1, &"b"), (2, &"c")]);

    let got = zip_all((iota(0, 100), &names, "xyz")).to_vec();
    assert_eq!(got, vec![(0, &"a", 'x'), (1, &"b", 'y'), (2, &"c", 'z')]);
}

#[test]
fn concat_and_replace() {
    let a = vec![1, 0, 2];
    let b = vec![0, 3];
    let got = (concat_all((&a, &b)) | replace(0, &9) | remove(9)).to_vec();
    assert_eq!(owned(got), vec![1, 2, 3]);
}

#[test]
fn while_adaptors() {
    let v = vec![1, 2, 3, 10, 4, 5];
    let small = |x: &&i32| **x < 5;
    assert_eq!(owned((all(&v) | take_while(small)).to_vec()), vec![1, 2, 3]);
    assert_eq!(owned((all(&v) | drop_while(small)).to_vec()), vec![10, 4, 5]);
}

#[test]
fn generator_is_single_pass() {
    let evens = generate(0u32, |n| {
        let out = *n;
        *n += 2;
        Some(out)
    });
    let got = evens.take(4).to_vec();
    assert_eq!(got, vec![0, 2, 4, 6]);
}

#[test]
fn iota_steps() {
    assert_eq!(iota_step(0, 10, 3).to_vec(), vec![0, 3, 6, 9]);
    assert_eq!(iota_step(10, 0, -4).to_vec(), vec![10, 6, 2]);
    assert_eq!((iota(0, 5) | reverse() | take(2)).to_vec(), vec![4, 3]);
    assert_eq!((0..4).pipe(transform(|x: i32| x * x)).to_vec(), vec![0, 1, 4, 9]);
}

#[test]
fn collections_convert() {
    let dq: VecDeque<i32> = (1..4).collect();
    assert_eq!(owned(all(&dq).reverse().to_vec()), vec![3, 2, 1]);

    let mut map = BTreeMap::new();
    map.insert("b", 2);
    map.insert("a", 1);
    let keys: Vec<&&str> = all(&map).transform(|(k, _)| k).to_vec();
    assert_eq!(keys, vec![&"a", &"b"]);

    let got: Vec<u8> = seq(vec![3u8, 1, 2]) | transform(|x: u8| x + 1) | to();
    assert_eq!(got, vec![4, 2, 3]);
}

#[test]
fn fixed_size_arrays() {
    let v = vec![1, 2, 3];
    let arr: [i32; 3] = all(&v).transform(|x| *x).to_array().unwrap();
    assert_eq!(arr, [1, 2, 3]);
    assert_eq!(
        all(&v).to_array::<4>().unwrap_err(),
        Error::LengthMismatch { expected: 4, got: 3 },
    );
}
