use thiserror::Error;

/// Everything that can go wrong while compiling or evaluating an expression.
///
/// Compile-time failures abort the whole compilation; no partial artifact is
/// ever returned. Evaluation-time failures abort only that call and leave
/// the compiled expression reusable. An empty interval result is not an
/// error: it is a legitimate interval-arithmetic outcome.
#[derive(Debug, Error, PartialEq)]
pub enum ExprError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported literal: {0}")]
    UnsupportedLiteral(String),
    #[error("{name} is not defined")]
    UndefinedFunction { name: String },
    #[error("{name} is a constant and cannot be called")]
    NotCallable { name: String },
    #[error("unsupported operator: {token}")]
    UnsupportedOperator { token: String },
    #[error("identifier rejected by policy: {name}")]
    IdentifierNotAllowed { name: String },
    #[error("power exponent must be an integer literal, got {found}")]
    InvalidExponent { found: String },
    #[error("{name} expects {expected} argument(s), got {got}")]
    WrongArity {
        name: String,
        expected: u8,
        got: usize,
    },
    #[error("identifier not found in scope: {name}")]
    UnresolvedIdentifier { name: String },
    #[error("{name} is a function and does not evaluate to an interval")]
    FunctionAsValue { name: String },
}
