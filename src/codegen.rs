//! Per-node compilation rules.
//!
//! Each AST node kind compiles to an executable [`Node`] fragment plus its
//! textual form. Compilation is a single deterministic pass; the first
//! failure aborts the whole compile with no partial artifact.

use crate::ast::{Ast, BinaryToken, UnaryToken};
use crate::cast::{self, Literal};
use crate::error::ExprError;
use crate::interval::{arithmetic, constants, misc, pow, trig, Interval, Rounding};
use crate::policy::Policy;
use crate::scope::Scope;

pub(crate) type UnaryFn = fn(&Interval, Rounding) -> Interval;
pub(crate) type BinaryFn = fn(&Interval, &Interval, Rounding) -> Interval;
pub(crate) type ConstFn = fn() -> Interval;

/// A member of the primitive library addressable by name from source text.
pub(crate) enum Member {
    Constant(&'static str, ConstFn),
    Unary(&'static str, UnaryFn),
    Binary(&'static str, BinaryFn),
    /// Integer power; its exponent argument is special-cased and never cast.
    Pow,
}

/// The closed name-to-member table consulted for identifiers and calls.
pub(crate) fn lookup(name: &str) -> Option<Member> {
    let member = match name {
        "PI" => Member::Constant("PI", constants::pi),
        "E" => Member::Constant("E", constants::e),
        "ZERO" => Member::Constant("ZERO", constants::zero),
        "ONE" => Member::Constant("ONE", constants::one),
        "WHOLE" => Member::Constant("WHOLE", constants::whole),
        "negative" => Member::Unary("negative", arithmetic::neg),
        "positive" => Member::Unary("positive", arithmetic::pos),
        "sqrt" => Member::Unary("sqrt", pow::sqrt),
        "abs" => Member::Unary("abs", misc::abs),
        "exp" => Member::Unary("exp", misc::exp),
        "log" => Member::Unary("log", misc::log),
        "sin" => Member::Unary("sin", trig::sin),
        "cos" => Member::Unary("cos", trig::cos),
        "tan" => Member::Unary("tan", trig::tan),
        "add" => Member::Binary("add", arithmetic::add),
        "sub" => Member::Binary("sub", arithmetic::sub),
        "mul" => Member::Binary("mul", arithmetic::mul),
        "div" => Member::Binary("div", arithmetic::div),
        "pow" => Member::Pow,
        _ => return None,
    };
    Some(member)
}

/// Executable form of a compiled expression: a closed tree of primitive
/// invocations, casts and scope lookups.
#[derive(Debug)]
pub(crate) enum Node {
    Lit(Literal),
    Const(ConstFn),
    /// A bare primitive function identifier. Compiles fine and never
    /// consults the scope, but evaluating it is a usage error.
    FnRef(&'static str),
    /// Scope lookup, resolved and cast at evaluation time.
    Scope(String),
    Unary(UnaryFn, Box<Node>),
    Binary(BinaryFn, Box<Node>, Box<Node>),
    /// Integer power with the raw exponent.
    PowInt(Box<Node>, i32),
}

impl Node {
    pub(crate) fn eval(&self, scope: &Scope, rnd: Rounding) -> Result<Interval, ExprError> {
        match self {
            Node::Lit(lit) => Ok(cast::literal(lit)),
            Node::Const(f) => Ok(f()),
            Node::FnRef(name) => Err(ExprError::FunctionAsValue {
                name: (*name).to_string(),
            }),
            Node::Scope(name) => {
                let value = scope
                    .get(name)
                    .ok_or_else(|| ExprError::UnresolvedIdentifier { name: name.clone() })?;
                Ok(cast::scope_value(value))
            }
            Node::Unary(f, x) => Ok(f(&x.eval(scope, rnd)?, rnd)),
            Node::Binary(f, a, b) => Ok(f(&a.eval(scope, rnd)?, &b.eval(scope, rnd)?, rnd)),
            Node::PowInt(x, n) => Ok(pow::pow(&x.eval(scope, rnd)?, *n, rnd)),
        }
    }
}

/// A compiled fragment: the executable node plus its textual form.
pub(crate) struct Fragment {
    pub(crate) node: Node,
    pub(crate) text: String,
}

impl Fragment {
    fn new(node: Node, text: String) -> Self {
        Fragment { node, text }
    }
}

pub(crate) fn codegen_expr(ast: &Ast, policy: &Policy) -> Result<Fragment, ExprError> {
    match ast {
        Ast::Num(v) => Ok(Fragment::new(
            Node::Lit(Literal::Num(*v)),
            format!("interval({})", v),
        )),
        Ast::Array(items) => {
            let (lo, hi) = array_bounds(items)?;
            Ok(Fragment::new(
                Node::Lit(Literal::Pair(lo, hi)),
                format!("interval([{}, {}])", lo, hi),
            ))
        }
        Ast::Var(name) => {
            if !policy.identifier_allowed(name) {
                return Err(ExprError::IdentifierNotAllowed { name: name.clone() });
            }
            match lookup(name) {
                Some(Member::Constant(n, f)) => Ok(Fragment::new(Node::Const(f), n.to_string())),
                Some(Member::Unary(n, _)) | Some(Member::Binary(n, _)) => {
                    Ok(Fragment::new(Node::FnRef(n), n.to_string()))
                }
                Some(Member::Pow) => Ok(Fragment::new(Node::FnRef("pow"), "pow".to_string())),
                None => Ok(Fragment::new(
                    Node::Scope(name.clone()),
                    format!("cast(scope[\"{}\"])", name),
                )),
            }
        }
        Ast::Unary { op, expr } => {
            let (name, f): (&str, UnaryFn) = match op {
                UnaryToken::Neg => ("negative", arithmetic::neg),
                UnaryToken::Pos => ("positive", arithmetic::pos),
                UnaryToken::Not => {
                    return Err(ExprError::UnsupportedOperator {
                        token: op.symbol().to_string(),
                    })
                }
            };
            let inner = codegen_expr(expr, policy)?;
            Ok(Fragment::new(
                Node::Unary(f, Box::new(inner.node)),
                format!("{}({})", name, inner.text),
            ))
        }
        Ast::Binary { op, lhs, rhs } => {
            if matches!(op, BinaryToken::Pow) {
                let n = int_literal(rhs)?;
                let base = codegen_expr(lhs, policy)?;
                return Ok(Fragment::new(
                    Node::PowInt(Box::new(base.node), n),
                    format!("pow({}, {})", base.text, n),
                ));
            }
            let (name, f): (&str, BinaryFn) = match op {
                BinaryToken::Add => ("add", arithmetic::add),
                BinaryToken::Sub => ("sub", arithmetic::sub),
                BinaryToken::Mul => ("mul", arithmetic::mul),
                BinaryToken::Div => ("div", arithmetic::div),
                BinaryToken::Rem => {
                    return Err(ExprError::UnsupportedOperator {
                        token: op.symbol().to_string(),
                    })
                }
                BinaryToken::Pow => unreachable!("handled above"),
            };
            let l = codegen_expr(lhs, policy)?;
            let r = codegen_expr(rhs, policy)?;
            Ok(Fragment::new(
                Node::Binary(f, Box::new(l.node), Box::new(r.node)),
                format!("{}({}, {})", name, l.text, r.text),
            ))
        }
        Ast::Call { name, args } => match lookup(name) {
            None => Err(ExprError::UndefinedFunction { name: name.clone() }),
            Some(Member::Constant(n, _)) => Err(ExprError::NotCallable {
                name: n.to_string(),
            }),
            Some(Member::Unary(n, f)) => {
                check_arity(n, 1, args.len())?;
                let arg = codegen_expr(&args[0], policy)?;
                Ok(Fragment::new(
                    Node::Unary(f, Box::new(arg.node)),
                    format!("{}({})", n, arg.text),
                ))
            }
            Some(Member::Binary(n, f)) => {
                check_arity(n, 2, args.len())?;
                let a = codegen_expr(&args[0], policy)?;
                let b = codegen_expr(&args[1], policy)?;
                Ok(Fragment::new(
                    Node::Binary(f, Box::new(a.node), Box::new(b.node)),
                    format!("{}({}, {})", n, a.text, b.text),
                ))
            }
            Some(Member::Pow) => {
                check_arity("pow", 2, args.len())?;
                let n = int_literal(&args[1])?;
                let base = codegen_expr(&args[0], policy)?;
                Ok(Fragment::new(
                    Node::PowInt(Box::new(base.node), n),
                    format!("pow({}, {})", base.text, n),
                ))
            }
        },
    }
}

fn check_arity(name: &str, expected: u8, got: usize) -> Result<(), ExprError> {
    if usize::from(expected) != got {
        return Err(ExprError::WrongArity {
            name: name.to_string(),
            expected,
            got,
        });
    }
    Ok(())
}

/// A power exponent must be an integer literal, optionally signed. It is
/// kept as a raw integer; the primitive power operation relies on exponent
/// parity and never accepts an interval here.
fn int_literal(ast: &Ast) -> Result<i32, ExprError> {
    match ast {
        Ast::Num(v) if v.fract() == 0.0 && v.abs() <= f64::from(i32::MAX) => Ok(*v as i32),
        Ast::Num(v) => Err(ExprError::InvalidExponent {
            found: v.to_string(),
        }),
        Ast::Unary {
            op: UnaryToken::Neg,
            expr,
        } => Ok(-int_literal(expr)?),
        Ast::Unary {
            op: UnaryToken::Pos,
            expr,
        } => int_literal(expr),
        _ => Err(ExprError::InvalidExponent {
            found: "a non-literal expression".to_string(),
        }),
    }
}

/// Array literals admit exactly two elements, each a plain (possibly
/// signed) numeric literal. Sub-expressions are rejected outright rather
/// than compiled recursively.
fn array_bounds(items: &[Ast]) -> Result<(f64, f64), ExprError> {
    if items.len() != 2 {
        return Err(ExprError::UnsupportedLiteral(format!(
            "array literal must have exactly two bounds, got {}",
            items.len()
        )));
    }
    let lo = element_num(&items[0])?;
    let hi = element_num(&items[1])?;
    Ok((lo, hi))
}

fn element_num(ast: &Ast) -> Result<f64, ExprError> {
    match ast {
        Ast::Num(v) => Ok(*v),
        Ast::Unary {
            op: UnaryToken::Neg,
            expr,
        } => Ok(-element_num(expr)?),
        Ast::Unary {
            op: UnaryToken::Pos,
            expr,
        } => element_num(expr),
        _ => Err(ExprError::UnsupportedLiteral(
            "array literal bounds must be numeric literals".to_string(),
        )),
    }
}
