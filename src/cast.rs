//! Casting of literal and scope-resolved values into intervals.

use crate::interval::Interval;
use crate::scope::ScopeValue;

/// A literal carried in a compiled node: a bare number or the two bounds of
/// an array literal, kept verbatim from the source text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Literal {
    Num(f64),
    Pair(f64, f64),
}

/// Cast a literal to interval form. Numbers become zero-width intervals;
/// pairs are used as bounds exactly as written, never sorted. Both forms
/// are exact for f64 input, independent of the rounding mode.
pub(crate) fn literal(lit: &Literal) -> Interval {
    match lit {
        Literal::Num(v) => Interval::singleton(*v),
        Literal::Pair(lo, hi) => Interval::new(*lo, *hi),
    }
}

/// Cast a scope-resolved value. Total over the closed [`ScopeValue`]
/// contract; an existing interval is returned unchanged, never re-derived.
pub(crate) fn scope_value(value: &ScopeValue) -> Interval {
    match value {
        ScopeValue::Interval(iv) => *iv,
        ScopeValue::Pair(lo, hi) => Interval::new(*lo, *hi),
        ScopeValue::Num(v) => Interval::singleton(*v),
        ScopeValue::Bounded(b) => Interval::new(b.lo(), b.hi()),
    }
}
