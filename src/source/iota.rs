use std::convert::TryFrom;
use std::fmt;
use std::ops::Range;

use num_traits::{AsPrimitive, PrimInt};

use crate::capability::Generic;
use crate::error::{Error, Result};
use crate::view::{IntoView, RandomAccessView, SizedView, View};

/// An integer type that can be counted with.
///
/// Progressions are computed in `i128`, so every primitive integer type is
/// supported, except that `u128` values beyond `i128::MAX` are not.
pub trait Counter: Copy + PartialOrd + fmt::Debug {
    /// Widen this value to `i128`.
    fn to_wide(self) -> i128;
    /// Narrow an `i128` known to be in range for this type.
    fn from_wide(wide: i128) -> Self;
}

impl<T> Counter for T
where
    T: PrimInt + AsPrimitive<i128> + fmt::Debug,
    i128: AsPrimitive<T>,
{
    #[inline]
    fn to_wide(self) -> i128 {
        self.as_()
    }

    #[inline]
    fn from_wide(wide: i128) -> T {
        wide.as_()
    }
}

/// A finite arithmetic progression.
///
/// With a positive step, the progression counts up from `from` for as long
/// as the count stays below `to`. With a negative step, it counts down for
/// as long as the count stays above `to`. So `iota_step(0, 10, 3)` produces
/// `0, 3, 6, 9` and `iota_step(10, 0, -3)` produces `10, 7, 4, 1`.
///
/// Since the number of elements is computed up front, an `Iota` is random
/// access and never overflows its element type while counting. A
/// progression with more than `usize::MAX` elements is cut short at
/// `usize::MAX` elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Iota<T> {
    from: T,
    step: T,
    len: usize,
}

impl<T: Counter> Iota<T> {
    /// Create a progression, or return an error if `step` is zero.
    pub fn try_new(from: T, to: T, step: T) -> Result<Iota<T>> {
        let (lo, hi, by) = (from.to_wide(), to.to_wide(), step.to_wide());
        if by == 0 {
            return Err(Error::ZeroStep);
        }
        let len = if by > 0 && lo < hi {
            count_steps(lo, hi, by.unsigned_abs())
        } else if by < 0 && lo > hi {
            count_steps(hi, lo, by.unsigned_abs())
        } else {
            0
        };
        Ok(Iota { from, step, len })
    }

    /// Every value the progression produces fits in `i128`, so wrapping
    /// arithmetic lands on it even when the offset from `from` does not fit.
    #[inline]
    fn nth_value(&self, index: usize) -> T {
        let offset = self.step.to_wide().wrapping_mul(index as i128);
        T::from_wide(self.from.to_wide().wrapping_add(offset))
    }
}

/// The number of steps of size `by` it takes to get from `lo` to at least
/// `hi`, saturated to `usize::MAX`. `lo` must be less than `hi`.
#[inline]
fn count_steps(lo: i128, hi: i128, by: u128) -> usize {
    let distance = (hi as u128).wrapping_sub(lo as u128);
    let steps = distance / by + if distance % by == 0 { 0 } else { 1 };
    usize::try_from(steps).unwrap_or(usize::MAX)
}

/// The progression `from, from + 1, ...` up to and not including `to`.
#[inline]
pub fn iota<T: Counter>(from: T, to: T) -> Iota<T> {
    let (lo, hi) = (from.to_wide(), to.to_wide());
    let len = if lo < hi { count_steps(lo, hi, 1) } else { 0 };
    Iota { from, step: T::from_wide(1), len }
}

/// The progression `from, from + step, ...` up to and not including `to`.
///
/// # Panics
///
/// When `step` is zero. Use [`Iota::try_new`](struct.Iota.html#method.try_new)
/// to get an error instead.
#[inline]
pub fn iota_step<T: Counter>(from: T, to: T, step: T) -> Iota<T> {
    match Iota::try_new(from, to, step) {
        Ok(iota) => iota,
        Err(err) => panic!("{}", err),
    }
}

impl<T: Counter> View for Iota<T> {
    type Item = T;
    type Cursor = IotaCursor<T>;
    type Layout = Generic;

    #[inline]
    fn into_cursor(self) -> IotaCursor<T> {
        IotaCursor { iota: self, front: 0, back: self.len }
    }
}

impl<T: Counter> SizedView for Iota<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len
    }
}

impl<T: Counter> RandomAccessView for Iota<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        if index < self.len {
            Some(self.nth_value(index))
        } else {
            None
        }
    }
}

impl_view_ops!([T,] Iota<T>);

impl<T: Counter> IntoView for Range<T> {
    type Item = T;
    type View = Iota<T>;

    #[inline]
    fn into_view(self) -> Iota<T> {
        iota(self.start, self.end)
    }
}

/// A cursor over an [`Iota`](struct.Iota.html).
#[derive(Clone, Debug)]
pub struct IotaCursor<T> {
    iota: Iota<T>,
    front: usize,
    back: usize,
}

impl<T: Counter> Iterator for IotaCursor<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.front += 1;
        Some(self.iota.nth_value(self.front - 1))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T: Counter> DoubleEndedIterator for IotaCursor<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.iota.nth_value(self.back))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<T: Counter> ExactSizeIterator for IotaCursor<T> {}
