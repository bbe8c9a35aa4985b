use std::fmt;

use log::debug;

use crate::codegen::{codegen_expr, Node};
use crate::collect::collect_vars;
use crate::error::ExprError;
use crate::interval::{Interval, Rounding};
use crate::parser::Parser;
use crate::policy::Policy;
use crate::scope::Scope;

/// Compile a source expression under the default [`Policy`]: every
/// identifier allowed, outward rounding.
pub fn compile(src: &str) -> Result<CompiledExpr, ExprError> {
    compile_with(src, &Policy::default())
}

/// Compile a source expression under an explicit [`Policy`]. The policy is
/// read here, at compile time; the resulting artifact is self-contained.
pub fn compile_with(src: &str, policy: &Policy) -> Result<CompiledExpr, ExprError> {
    let ast = Parser::new(src)?.parse()?;
    let fragment = codegen_expr(&ast, policy)?;
    let vars = collect_vars(&fragment.node);
    debug!("compiled {:?} -> {}", src, fragment.text);
    Ok(CompiledExpr {
        node: fragment.node,
        text: fragment.text,
        vars,
        rounding: policy.rounding(),
    })
}

/// The reusable artifact of a successful compile: an executable evaluator
/// plus the textual form of the generated logic.
///
/// Immutable after creation; evaluating never mutates it, so one compiled
/// expression can serve any number of calls (or threads) with different
/// scopes.
#[derive(Debug)]
pub struct CompiledExpr {
    node: Node,
    text: String,
    vars: Vec<String>,
    rounding: Rounding,
}

impl CompiledExpr {
    /// Evaluate with an empty scope.
    pub fn eval(&self) -> Result<Interval, ExprError> {
        self.eval_with(&Scope::default())
    }

    /// Evaluate against the given scope. A failure aborts only this call;
    /// the expression stays reusable.
    pub fn eval_with(&self, scope: &Scope) -> Result<Interval, ExprError> {
        self.node.eval(scope, self.rounding)
    }

    /// The generated textual form, for inspection and snapshot testing.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct scope identifiers, in first-appearance order.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    /// The rounding mode captured from the compiling policy.
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
}

impl fmt::Display for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
