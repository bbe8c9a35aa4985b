//! Integer powers and square roots.

use super::arithmetic::div;
use super::round::Rounding;
use super::value::Interval;

/// Raise an interval to an integer power. The exponent is a raw integer,
/// never an interval: parity decides how a zero-straddling base folds
/// (`[-3, 2]^2 = [0, 9]`), and that distinction only exists for integers.
pub fn pow(x: &Interval, n: i32, rnd: Rounding) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    if n == 0 {
        return Interval::singleton(1.0);
    }
    if n < 0 {
        let p = pow(x, -n, rnd);
        return div(&Interval::singleton(1.0), &p, rnd);
    }
    let even = n % 2 == 0;
    if x.lo >= 0.0 {
        Interval::new(rnd.lo(x.lo.powi(n)), rnd.hi(x.hi.powi(n)))
    } else if x.hi <= 0.0 {
        if even {
            Interval::new(rnd.lo(x.hi.powi(n)), rnd.hi(x.lo.powi(n)))
        } else {
            Interval::new(rnd.lo(x.lo.powi(n)), rnd.hi(x.hi.powi(n)))
        }
    } else if even {
        // Base straddles zero: the minimum is exactly zero.
        let m = (-x.lo).max(x.hi);
        Interval::new(0.0, rnd.hi(m.powi(n)))
    } else {
        Interval::new(rnd.lo(x.lo.powi(n)), rnd.hi(x.hi.powi(n)))
    }
}

/// Square root, restricted to the non-negative part of the input. An
/// entirely negative input yields the empty interval.
pub fn sqrt(x: &Interval, rnd: Rounding) -> Interval {
    if x.is_empty() || x.hi < 0.0 {
        return Interval::empty();
    }
    let lo = if x.lo <= 0.0 {
        0.0
    } else {
        rnd.lo(x.lo.sqrt()).max(0.0)
    };
    Interval::new(lo, rnd.hi(x.hi.sqrt()))
}
