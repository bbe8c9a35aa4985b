use std::collections::HashMap;
use std::fmt;

use crate::interval::Interval;

/// Foreign-interval interop: any type exposing numeric low/high bounds can
/// be bound in a [`Scope`] without converting through [`Interval`] first.
pub trait Bounded: Send + Sync {
    fn lo(&self) -> f64;
    fn hi(&self) -> f64;
}

/// A value bound to an identifier in a [`Scope`].
///
/// The variant order is the casting precedence: an already-constructed
/// interval is used unchanged (its endpoints survive bit for bit), a pair is
/// taken as literal bounds (never sorted), a number becomes a zero-width
/// interval, and a [`Bounded`] implementation is read through its accessors.
pub enum ScopeValue {
    Interval(Interval),
    Pair(f64, f64),
    Num(f64),
    Bounded(Box<dyn Bounded>),
}

impl fmt::Debug for ScopeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeValue::Interval(iv) => write!(f, "Interval({})", iv),
            ScopeValue::Pair(lo, hi) => write!(f, "Pair({}, {})", lo, hi),
            ScopeValue::Num(v) => write!(f, "Num({})", v),
            ScopeValue::Bounded(b) => write!(f, "Bounded({}, {})", b.lo(), b.hi()),
        }
    }
}

impl From<f64> for ScopeValue {
    fn from(v: f64) -> Self {
        ScopeValue::Num(v)
    }
}

impl From<i32> for ScopeValue {
    fn from(v: i32) -> Self {
        ScopeValue::Num(f64::from(v))
    }
}

impl From<[f64; 2]> for ScopeValue {
    fn from(b: [f64; 2]) -> Self {
        ScopeValue::Pair(b[0], b[1])
    }
}

impl From<(f64, f64)> for ScopeValue {
    fn from((lo, hi): (f64, f64)) -> Self {
        ScopeValue::Pair(lo, hi)
    }
}

impl From<Interval> for ScopeValue {
    fn from(iv: Interval) -> Self {
        ScopeValue::Interval(iv)
    }
}

impl From<Box<dyn Bounded>> for ScopeValue {
    fn from(b: Box<dyn Bounded>) -> Self {
        ScopeValue::Bounded(b)
    }
}

/// Name-to-value bindings supplied per evaluation call. Not retained by the
/// compiled expression.
#[derive(Debug, Default)]
pub struct Scope {
    values: HashMap<String, ScopeValue>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ScopeValue>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ScopeValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
