/*!
Views that read from something other than another view.

Most sources are created implicitly: [`all`](../fn.all.html) converts
borrowed slices, strings and collections, and integer ranges, into the
matching view. The functions in this module create the sources that have
no natural conversion: [`seq`](fn.seq.html) for arbitrary iterators,
[`iota`](fn.iota.html) and [`iota_step`](fn.iota_step.html) for arithmetic
progressions and [`generate`](fn.generate.html) for single-pass
generators.
*/

pub use self::generator::{
    generate, FnProducer, Generator, GeneratorCursor, Producer,
};
pub use self::iota::{iota, iota_step, Counter, Iota, IotaCursor};
pub use self::seq::{seq, Seq, Subrange};
pub use self::span::{Span, SpanMut};
pub use self::text::Text;

mod generator;
mod iota;
mod seq;
mod span;
mod text;
