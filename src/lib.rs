/*!
Lazy, composable views over sequences.

A [`View`](trait.View.html) is a sequence whose elements are computed on
demand. Views are built from a source (a borrowed slice or string, a
standard collection, an integer range, an arbitrary iterator or a
generator) and stacked adaptors (filter, transform, take, chunk, split,
join, zip, set algorithms and so on). Building a view does no work. Work
happens when a cursor derived from the view is driven, one element at a
time, through the standard `Iterator` protocol.

```rust
use seqview::{all, View};

let words = all("the quick  brown fox")
    .split(' ')
    .filter(|w| !w.as_str().is_empty())
    .transform(|w| w.as_str().len())
    .to_vec();
assert_eq!(words, vec![3, 5, 5, 3]);
```

The same pipeline can be assembled from partially applied adaptors joined
with `|`, and an adaptor chain can be built before it meets a view:

```rust
use seqview::adaptor::{chunk, join_with, transform};
use seqview::{all, View};

let digits = chunk(3) | join_with(',');
let v = all("1234567") | digits;
assert_eq!(v.to::<String>(), "123,456,7");

let squares = all(&[1, 2, 3]) | transform(|x: &i32| x * x);
assert_eq!(squares.to_vec(), vec![1, 4, 9]);
```

# Multi-pass and single-pass views

A view that is `Clone` is multi-pass: [`View::cursor`](trait.View.html#method.cursor)
derives a fresh cursor from it any number of times, and every cursor sees
the same elements. A view over a [`Generator`](source/struct.Generator.html)
(or any other single-pass source) is not `Clone`, so it can only be
consumed once with `into_cursor`. Traversing it twice does not compile.

# Traversal strength

What a view supports beyond forward traversal follows from its cursor.
Adaptors keep as much of their source's strength as they can: transforming
a slice keeps random access, filtering it keeps only double-ended
traversal, and joining keeps only forward traversal. Views that know their
length implement [`SizedView`](trait.SizedView.html), and views that can
read any position implement
[`RandomAccessView`](trait.RandomAccessView.html).

# Errors

Adaptor arguments that make no sense (a zero chunk size, a zero step) are
programmer errors and panic. Each of them also has a fallible constructor
returning [`Error`](enum.Error.html), as do positional reads and fixed size
materialization.
*/

extern crate memchr;
extern crate num_traits;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub use crate::error::{Error, Result};
pub use crate::pipe::{Adaptor, Pipe, Then};
pub use crate::view::{all, IntoView, RandomAccessView, SizedView, View};

#[macro_use]
pub mod pipe;

pub mod adaptor;
pub mod capability;
mod error;
pub mod func;
pub mod source;
#[cfg(test)]
mod tests;
mod view;
