/// Endpoint rounding mode, threaded through every primitive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Widen each computed endpoint one ulp outward. The default; results
    /// are guaranteed enclosures even when the underlying float operation
    /// rounded toward the interior.
    #[default]
    Outward,
    /// Keep endpoints exactly as computed. For deterministic tests and
    /// domains that must not widen bounds defensively.
    Exact,
}

impl Rounding {
    /// Round a computed lower bound.
    #[inline]
    pub fn lo(self, x: f64) -> f64 {
        match self {
            Rounding::Outward if x.is_finite() => x.next_down(),
            _ => x,
        }
    }

    /// Round a computed upper bound.
    #[inline]
    pub fn hi(self, x: f64) -> f64 {
        match self {
            Rounding::Outward if x.is_finite() => x.next_up(),
            _ => x,
        }
    }
}
