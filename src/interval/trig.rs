//! Trigonometric operations.
//!
//! Periodic functions are handled by extremum containment: if the input
//! range covers a point where the derivative vanishes, that extremum bounds
//! the result; otherwise the endpoint values do. Inputs wider than a full
//! period saturate immediately.

use super::round::Rounding;
use super::value::Interval;
use std::f64::consts::{FRAC_PI_2, PI};

const TWO_PI: f64 = 2.0 * PI;

/// Does `[lo, hi]` contain a point `offset + k * period` for integer `k`?
fn contains_multiple(lo: f64, hi: f64, offset: f64, period: f64) -> bool {
    let k = ((lo - offset) / period).ceil();
    offset + k * period <= hi
}

pub fn sin(x: &Interval, rnd: Rounding) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    let width = x.hi - x.lo;
    if !width.is_finite() || width >= TWO_PI {
        return Interval::new(-1.0, 1.0);
    }
    let lo = if contains_multiple(x.lo, x.hi, -FRAC_PI_2, TWO_PI) {
        -1.0
    } else {
        rnd.lo(x.lo.sin().min(x.hi.sin())).max(-1.0)
    };
    let hi = if contains_multiple(x.lo, x.hi, FRAC_PI_2, TWO_PI) {
        1.0
    } else {
        rnd.hi(x.lo.sin().max(x.hi.sin())).min(1.0)
    };
    Interval::new(lo, hi)
}

pub fn cos(x: &Interval, rnd: Rounding) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    let width = x.hi - x.lo;
    if !width.is_finite() || width >= TWO_PI {
        return Interval::new(-1.0, 1.0);
    }
    let lo = if contains_multiple(x.lo, x.hi, PI, TWO_PI) {
        -1.0
    } else {
        rnd.lo(x.lo.cos().min(x.hi.cos())).max(-1.0)
    };
    let hi = if contains_multiple(x.lo, x.hi, 0.0, TWO_PI) {
        1.0
    } else {
        rnd.hi(x.lo.cos().max(x.hi.cos())).min(1.0)
    };
    Interval::new(lo, hi)
}

/// Tangent. Any input containing an asymptote yields the whole line.
pub fn tan(x: &Interval, rnd: Rounding) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    let width = x.hi - x.lo;
    if !width.is_finite() || width >= PI {
        return Interval::whole();
    }
    if contains_multiple(x.lo, x.hi, FRAC_PI_2, PI) {
        return Interval::whole();
    }
    Interval::new(rnd.lo(x.lo.tan()), rnd.hi(x.hi.tan()))
}
