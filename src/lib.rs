//! Compile textual arithmetic expressions into reusable interval-arithmetic
//! evaluators.
//!
//! An expression is compiled once and then evaluated any number of times
//! against different variable scopes; every operation carries guaranteed
//! lower/upper bounds instead of a single float.
//!
//! ```
//! use interval_eval::{compile, Scope};
//!
//! let expr = compile("sqrt(x) + 1")?;
//! let mut scope = Scope::new();
//! scope.insert("x", [4.0, 9.0]);
//! let out = expr.eval_with(&scope)?;
//! assert!(out.lo <= 3.0 && out.hi >= 4.0);
//! # Ok::<(), interval_eval::ExprError>(())
//! ```
//!
//! The generated logic is also available in textual form for inspection:
//!
//! ```
//! # use interval_eval::compile;
//! let expr = compile("1 + [2, 3]")?;
//! assert_eq!(expr.text(), "add(interval(1), interval([2, 3]))");
//! # Ok::<(), interval_eval::ExprError>(())
//! ```

mod ast;
mod cast;
mod codegen;
mod collect;
mod engine;
mod error;
mod lexer;
mod parser;
mod policy;
mod scope;

pub mod interval;

pub use engine::{compile, compile_with, CompiledExpr};
pub use error::ExprError;
pub use interval::{Interval, Rounding};
pub use policy::Policy;
pub use scope::{Bounded, Scope, ScopeValue};
