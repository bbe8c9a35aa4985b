//! Named constants of the primitive library.
//!
//! Transcendental constants are one-ulp-outward enclosures of the nearest
//! f64, independent of the active rounding mode.

use super::value::Interval;

pub fn pi() -> Interval {
    Interval::new(std::f64::consts::PI.next_down(), std::f64::consts::PI.next_up())
}

pub fn e() -> Interval {
    Interval::new(std::f64::consts::E.next_down(), std::f64::consts::E.next_up())
}

pub fn zero() -> Interval {
    Interval::singleton(0.0)
}

pub fn one() -> Interval {
    Interval::singleton(1.0)
}

pub fn whole() -> Interval {
    Interval::whole()
}
