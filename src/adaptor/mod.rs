/*!
Adaptor views and their partially applied forms.

Each adaptor comes as a view type (e.g., [`Filter`](struct.Filter.html)),
its cursor type (e.g., [`FilterCursor`](struct.FilterCursor.html)) and a
function that binds the adaptor's arguments without a view (e.g.,
[`filter`](fn.filter.html)). The view types are usually created with the
methods on [`View`](../trait.View.html); the functions exist for building
pipelines with `|`. See the [`pipe`](../pipe/index.html) module.

The view types are ordinary generic structs, so a pipeline's type spells
out every stage it is built from. Nothing is boxed and nothing is
evaluated until a cursor is driven.

# Strategies

A few adaptors pick their implementation from the memory layout of their
source. Taking, dropping, chunking and splitting a borrowed slice produce
borrowed sub-slices, and the same operations on a borrowed string produce
borrowed sub-strings (splitting on ASCII delimiters uses `memchr`). Every
other source gets a generic view that only relies on its cursor. The
choice is made at compile time by the
[`SliceStrategy`](trait.SliceStrategy.html),
[`ChunkStrategy`](trait.ChunkStrategy.html) and
[`SplitStrategy`](trait.SplitStrategy.html) traits, which are implemented
on the layout tags in [`capability`](../capability/index.html).
*/

pub use self::cast::{
    cast_dynamic, cast_smart, cast_static, convert, try_cast_dynamic,
    AsCast, Cast, CastCursor, CastDynamic, CastFilter, CastFilterCursor,
    CastFilterFn, CastFn, CastSmart, CastStatic, Caster, Convert, DynCast,
    IntoCast, SmartCast, TryCastDynamic,
};
pub use self::chunk::{
    chunk, try_chunk, Chunk, ChunkCursor, ChunkFn, ChunkSpan, ChunkSpanCursor,
    ChunkStrategy, ChunkText, ChunkTextCursor,
};
pub use self::concat::{concat, concat_all, Concat, ConcatCursor, ConcatFn};
pub use self::cycle::{cycle, Cycle, CycleCursor, CycleFn};
pub use self::duplicates::{
    duplicates, Duplicates, DuplicatesCursor, DuplicatesFn,
};
pub use self::filter::{
    filter, remove, remove_if, Filter, FilterCursor, FilterFn,
};
pub use self::interleave::{
    interleave, interleave_extend, intersperse, Interleave, InterleaveCursor,
    InterleaveFn, Intersperse, IntersperseCursor, IntersperseFn,
};
pub use self::join::{
    join, join_with, Join, JoinCursor, JoinFn, JoinWith, JoinWithCursor,
    JoinWithFn,
};
pub use self::moving::{
    move_out, move_reverse, MoveOut, MoveOutCursor, MoveOutFn,
    MoveReverseFn, TakeOut,
};
pub use self::pointer::{
    address_of, indirect, ptr, AddressOf, AddressOfCursor, AddressOfFn,
    Addressable, Indirect, IndirectCursor, IndirectFn, Indirection, Ptr,
    PtrCursor, PtrFn,
};
pub use self::reverse::{reverse, Reverse, ReverseCursor, ReverseFn};
pub use self::set::{
    set_difference, set_difference_by, set_difference_by_key,
    set_intersection, set_intersection_by, set_intersection_by_key,
    set_symmetric_difference, set_symmetric_difference_by,
    set_symmetric_difference_by_key, set_union, set_union_by,
    set_union_by_key, Difference, DifferenceCursor, DifferenceFn,
    Intersection, IntersectionCursor, IntersectionFn, SymmetricDifference,
    SymmetricDifferenceCursor, SymmetricDifferenceFn, Union, UnionCursor,
    UnionFn,
};
pub use self::set_unsorted::{
    set_difference_unsorted, set_intersection_unsorted,
    set_symmetric_difference_unsorted, set_union_unsorted,
    DifferenceUnsorted, DifferenceUnsortedFn, IntersectionUnsorted,
    IntersectionUnsortedFn, MergeCursor, ScanCursor,
    SymmetricDifferenceUnsorted, SymmetricDifferenceUnsortedFn,
    UnionUnsorted, UnionUnsortedFn,
};
pub use self::sink::{for_each, to, ForEachFn, ToFn};
pub use self::split::{
    split, Split, SplitCursor, SplitFn, SplitSpan, SplitSpanCursor,
    SplitStrategy, SplitText, SplitTextCursor,
};
pub use self::take::{
    drop, drop_last, drop_while, take, take_last, take_while, DropFirst,
    DropFirstCursor, DropFn, DropLast, DropLastCursor, DropLastFn, DropWhile,
    DropWhileCursor, DropWhileFn, SliceStrategy, Take, TakeCursor, TakeFn,
    TakeLast, TakeLastCursor, TakeLastFn, TakeWhile, TakeWhileCursor,
    TakeWhileFn,
};
pub use self::transform::{
    enumerate, replace, replace_if, transform, Enumerate, EnumerateCursor,
    EnumerateFn, Replace, ReplaceCursor, ReplaceFn, Transform,
    TransformCursor, TransformFn,
};
pub use self::zip::{zip, zip_all, IntoViews, Zip, ZipCursor, ZipFn};

mod cast;
mod chunk;
mod concat;
mod cycle;
mod duplicates;
mod filter;
mod interleave;
mod join;
mod moving;
mod pointer;
mod reverse;
mod set;
mod set_unsorted;
mod sink;
mod split;
mod take;
mod transform;
mod zip;
