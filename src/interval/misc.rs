//! Remaining univariate operations: exp, log, abs.

use super::arithmetic::neg;
use super::round::Rounding;
use super::value::Interval;

pub fn exp(x: &Interval, rnd: Rounding) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    Interval::new(rnd.lo(x.lo.exp()).max(0.0), rnd.hi(x.hi.exp()))
}

/// Natural logarithm over the non-negative part of the input.
pub fn log(x: &Interval, rnd: Rounding) -> Interval {
    if x.is_empty() || x.hi < 0.0 {
        return Interval::empty();
    }
    let lo = if x.lo <= 0.0 {
        f64::NEG_INFINITY
    } else {
        rnd.lo(x.lo.ln())
    };
    let hi = if x.hi == 0.0 {
        f64::NEG_INFINITY
    } else {
        rnd.hi(x.hi.ln())
    };
    Interval::new(lo, hi)
}

pub fn abs(x: &Interval, _rnd: Rounding) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    if x.lo >= 0.0 {
        *x
    } else if x.hi <= 0.0 {
        neg(x, Rounding::Exact)
    } else {
        Interval::new(0.0, (-x.lo).max(x.hi))
    }
}
