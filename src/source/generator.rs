use std::fmt;

use crate::capability::Generic;
use crate::func::TypeName;
use crate::view::View;

/// A resumable computation that produces values one at a time.
///
/// Each call to `resume` runs the computation until it produces its next
/// value, or returns `None` once it has finished. It is not specified what
/// a producer does when resumed after it has finished; [`Generator`]
/// guarantees it is never resumed again.
///
/// [`Generator`]: struct.Generator.html
pub trait Producer {
    /// The type of the values produced.
    type Output;

    /// Run until the next value is produced.
    fn resume(&mut self) -> Option<Self::Output>;
}

/// A single-pass view over a [`Producer`](trait.Producer.html).
///
/// A generator's state advances as it is traversed, so a generator is
/// neither `Clone` nor able to derive more than one cursor. Adaptors that
/// need to traverse their source more than once reject it at compile time.
pub struct Generator<P> {
    producer: P,
}

impl<P: Producer> Generator<P> {
    /// Wrap a producer.
    #[inline]
    pub fn new(producer: P) -> Generator<P> {
        Generator { producer }
    }
}

impl<P: fmt::Debug> fmt::Debug for Generator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").field("producer", &self.producer).finish()
    }
}

impl<P: Producer> View for Generator<P> {
    type Item = P::Output;
    type Cursor = GeneratorCursor<P>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> GeneratorCursor<P> {
        GeneratorCursor { producer: self.producer, done: false }
    }
}

impl_view_ops!([P,] Generator<P>);

/// The cursor of a [`Generator`](struct.Generator.html).
pub struct GeneratorCursor<P> {
    producer: P,
    done: bool,
}

impl<P: fmt::Debug> fmt::Debug for GeneratorCursor<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorCursor")
            .field("producer", &self.producer)
            .field("done", &self.done)
            .finish()
    }
}

impl<P: Producer> Iterator for GeneratorCursor<P> {
    type Item = P::Output;

    #[inline]
    fn next(&mut self) -> Option<P::Output> {
        if self.done {
            return None;
        }
        let out = self.producer.resume();
        self.done = out.is_none();
        out
    }
}

impl<P: Producer> std::iter::FusedIterator for GeneratorCursor<P> {}

/// A producer built from a state and a step function.
pub struct FnProducer<S, F> {
    state: S,
    step: F,
}

impl<S: fmt::Debug, F> fmt::Debug for FnProducer<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProducer")
            .field("state", &self.state)
            .field("step", &TypeName::<F>::new())
            .finish()
    }
}

impl<S, T, F> Producer for FnProducer<S, F>
where
    F: FnMut(&mut S) -> Option<T>,
{
    type Output = T;

    #[inline]
    fn resume(&mut self) -> Option<T> {
        (self.step)(&mut self.state)
    }
}

/// Create a generator from an initial state and a step function.
///
/// `step` is called with the state each time a value is needed, and
/// finishes the generator by returning `None`.
///
/// ```rust
/// use seqview::source::generate;
/// use seqview::View;
///
/// let fib = generate((0u64, 1u64), |s| {
///     let out = s.0;
///     *s = (s.1, s.0 + s.1);
///     Some(out)
/// });
/// assert_eq!(fib.take(7).to_vec(), vec![0, 1, 1, 2, 3, 5, 8]);
/// ```
#[inline]
pub fn generate<S, T, F>(state: S, step: F) -> Generator<FnProducer<S, F>>
where
    F: FnMut(&mut S) -> Option<T>,
{
    Generator::new(FnProducer { state, step })
}

#[cfg(test)]
mod tests {
    use super::{generate, Producer, Generator};
    use crate::view::View;

    struct Countdown(u32);

    impl Producer for Countdown {
        type Output = u32;

        fn resume(&mut self) -> Option<u32> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            Some(self.0)
        }
    }

    #[test]
    fn producer_runs_to_completion() {
        assert_eq!(Generator::new(Countdown(3)).to_vec(), vec![2, 1, 0]);
    }

    #[test]
    fn never_resumed_after_finishing() {
        let mut calls = 0;
        let mut cur = generate((), |_| {
            calls += 1;
            if calls < 3 { Some(calls) } else { None }
        })
        .into_cursor();
        assert_eq!(cur.by_ref().count(), 2);
        assert_eq!(cur.next(), None);
        assert_eq!(cur.next(), None);
        drop(cur);
        assert_eq!(calls, 3);
    }
}
