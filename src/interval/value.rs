use std::fmt;

/// A closed range `[lo, hi]` over the reals, or the empty interval.
///
/// Endpoints are stored exactly as given. Out-of-order bounds (`lo > hi`)
/// are a valid way to spell the empty interval; they are never reordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Interval { lo, hi }
    }

    /// The zero-width interval `[v, v]`.
    pub const fn singleton(v: f64) -> Self {
        Interval { lo: v, hi: v }
    }

    /// The canonical empty interval, `[+inf, -inf]`.
    pub const fn empty() -> Self {
        Interval {
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }

    /// The whole real line, `[-inf, +inf]`.
    pub const fn whole() -> Self {
        Interval {
            lo: f64::NEG_INFINITY,
            hi: f64::INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi || self.lo.is_nan() || self.hi.is_nan()
    }

    pub fn is_whole(&self) -> bool {
        self.lo == f64::NEG_INFINITY && self.hi == f64::INFINITY
    }

    pub fn is_singleton(&self) -> bool {
        self.lo == self.hi
    }

    pub fn contains(&self, v: f64) -> bool {
        !self.is_empty() && self.lo <= v && v <= self.hi
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.hi - self.lo
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[empty]")
        } else {
            write!(f, "[{}, {}]", self.lo, self.hi)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalClass {
    Pos,
    Neg,
    Mix,
}

/// Sign classification used to pick endpoint pairings in `mul` and `div`.
/// With `strict` an interval touching zero counts as `Mix`.
pub fn classify(x: &Interval, strict: bool) -> IntervalClass {
    if strict {
        if x.lo > 0.0 {
            IntervalClass::Pos
        } else if x.hi < 0.0 {
            IntervalClass::Neg
        } else {
            IntervalClass::Mix
        }
    } else if x.lo >= 0.0 {
        IntervalClass::Pos
    } else if x.hi <= 0.0 {
        IntervalClass::Neg
    } else {
        IntervalClass::Mix
    }
}
