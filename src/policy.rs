use std::fmt;

use crate::interval::Rounding;

type IdentPredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Compile-time configuration: which identifiers an expression may
/// reference, and how interval endpoints are rounded.
///
/// A policy is passed explicitly to [`compile_with`](crate::compile_with)
/// rather than living in global state. The identifier predicate is
/// consulted once per identifier node, at compile time; the rounding mode
/// is captured into the resulting [`CompiledExpr`](crate::CompiledExpr), so
/// changing a policy afterwards affects later compiles only.
pub struct Policy {
    identifier_allowed: IdentPredicate,
    rounding: Rounding,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            identifier_allowed: Box::new(|_| true),
            rounding: Rounding::Outward,
        }
    }
}

impl Policy {
    /// Allow every identifier, outward rounding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a custom identifier-allow predicate. Identifiers it rejects
    /// fail compilation with `IdentifierNotAllowed`, even when the name
    /// would resolve in scope or in the primitive library.
    pub fn allow_identifiers(
        mut self,
        pred: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.identifier_allowed = Box::new(pred);
        self
    }

    /// Outward endpoint rounding (the default).
    pub fn enable_round(&mut self) {
        self.rounding = Rounding::Outward;
    }

    /// Exact endpoint arithmetic: results carry the raw f64 values with no
    /// defensive widening.
    pub fn disable_round(&mut self) {
        self.rounding = Rounding::Exact;
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub(crate) fn identifier_allowed(&self, name: &str) -> bool {
        (self.identifier_allowed)(name)
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("rounding", &self.rounding)
            .finish_non_exhaustive()
    }
}
