//! Core arithmetic: negation, addition, subtraction, multiplication,
//! division. Any empty operand propagates an empty result.

use super::round::Rounding;
use super::value::{classify, Interval, IntervalClass};

pub fn neg(x: &Interval, _rnd: Rounding) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    // Negation of f64 endpoints is exact; no rounding applied.
    Interval::new(-x.hi, -x.lo)
}

pub fn pos(x: &Interval, _rnd: Rounding) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    *x
}

pub fn add(a: &Interval, b: &Interval, rnd: Rounding) -> Interval {
    if a.is_empty() || b.is_empty() {
        return Interval::empty();
    }
    Interval::new(rnd.lo(a.lo + b.lo), rnd.hi(a.hi + b.hi))
}

pub fn sub(a: &Interval, b: &Interval, rnd: Rounding) -> Interval {
    if a.is_empty() || b.is_empty() {
        return Interval::empty();
    }
    Interval::new(rnd.lo(a.lo - b.hi), rnd.hi(a.hi - b.lo))
}

/// Endpoint product with the `0 * inf = 0` convention, so unbounded
/// operands with a zero endpoint stay well defined.
#[inline]
fn ep_mul(x: f64, y: f64) -> f64 {
    if x == 0.0 || y == 0.0 {
        0.0
    } else {
        x * y
    }
}

pub fn mul(a: &Interval, b: &Interval, rnd: Rounding) -> Interval {
    if a.is_empty() || b.is_empty() {
        return Interval::empty();
    }
    use IntervalClass::*;
    let (lo, hi) = match (classify(a, false), classify(b, false)) {
        (Pos, Pos) => (ep_mul(a.lo, b.lo), ep_mul(a.hi, b.hi)),
        (Pos, Neg) => (ep_mul(a.hi, b.lo), ep_mul(a.lo, b.hi)),
        (Pos, Mix) => (ep_mul(a.hi, b.lo), ep_mul(a.hi, b.hi)),
        (Neg, Pos) => (ep_mul(a.lo, b.hi), ep_mul(a.hi, b.lo)),
        (Neg, Neg) => (ep_mul(a.hi, b.hi), ep_mul(a.lo, b.lo)),
        (Neg, Mix) => (ep_mul(a.lo, b.hi), ep_mul(a.lo, b.lo)),
        (Mix, Pos) => (ep_mul(a.lo, b.hi), ep_mul(a.hi, b.hi)),
        (Mix, Neg) => (ep_mul(a.hi, b.lo), ep_mul(a.lo, b.lo)),
        (Mix, Mix) => (
            ep_mul(a.lo, b.hi).min(ep_mul(a.hi, b.lo)),
            ep_mul(a.lo, b.lo).max(ep_mul(a.hi, b.hi)),
        ),
    };
    Interval::new(rnd.lo(lo), rnd.hi(hi))
}

/// Division. A divisor of `[0, 0]`, or one straddling zero on both sides,
/// has no usable bound and yields the empty interval. A divisor touching
/// zero at one endpoint keeps the surviving bound and runs to infinity on
/// the other side.
pub fn div(a: &Interval, b: &Interval, rnd: Rounding) -> Interval {
    if a.is_empty() || b.is_empty() {
        return Interval::empty();
    }
    if b.lo == 0.0 && b.hi == 0.0 {
        return Interval::empty();
    }
    if b.lo < 0.0 && b.hi > 0.0 {
        return Interval::empty();
    }
    use IntervalClass::*;
    if b.lo == 0.0 {
        // b = [0, d], d > 0
        return match classify(a, true) {
            Pos => Interval::new(rnd.lo(a.lo / b.hi), f64::INFINITY),
            Neg => Interval::new(f64::NEG_INFINITY, rnd.hi(a.hi / b.hi)),
            Mix => Interval::whole(),
        };
    }
    if b.hi == 0.0 {
        // b = [d, 0], d < 0
        return match classify(a, true) {
            Pos => Interval::new(f64::NEG_INFINITY, rnd.hi(a.lo / b.lo)),
            Neg => Interval::new(rnd.lo(a.hi / b.lo), f64::INFINITY),
            Mix => Interval::whole(),
        };
    }
    let (lo, hi) = match (classify(a, true), classify(b, true)) {
        (_, Mix) => unreachable!("zero-straddling divisors handled above"),
        (Pos, Pos) => (a.lo / b.hi, a.hi / b.lo),
        (Pos, Neg) => (a.hi / b.hi, a.lo / b.lo),
        (Neg, Pos) => (a.lo / b.lo, a.hi / b.hi),
        (Neg, Neg) => (a.hi / b.lo, a.lo / b.hi),
        (Mix, Pos) => (a.lo / b.lo, a.hi / b.lo),
        (Mix, Neg) => (a.hi / b.hi, a.lo / b.hi),
    };
    Interval::new(rnd.lo(lo), rnd.hi(hi))
}
