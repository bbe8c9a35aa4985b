/// Parse-tree nodes. The compiler consumes these read-only and matches
/// exhaustively, so every node kind has exactly one compilation rule.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Ast {
    /// Numeric literal (e.g. 1, 3.14, 2e3).
    Num(f64),
    /// Bracketed literal `[a, b]`. The parser accepts arbitrary
    /// sub-expressions here; the compiler enforces that both elements are
    /// plain (possibly signed) numeric literals.
    Array(Vec<Ast>),
    /// Identifier: a primitive-library member or a scope variable.
    Var(String),
    /// Unary operator application (e.g. `-x`, `+x`).
    Unary { op: UnaryToken, expr: Box<Ast> },
    /// Binary operator application (e.g. `a + b`, `x ^ 2`).
    Binary {
        op: BinaryToken,
        lhs: Box<Ast>,
        rhs: Box<Ast>,
    },
    /// Function call `name(args..)`.
    Call { name: String, args: Vec<Ast> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UnaryToken {
    Neg,
    Pos,
    Not,
}

impl UnaryToken {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            UnaryToken::Neg => "-",
            UnaryToken::Pos => "+",
            UnaryToken::Not => "!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryToken {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryToken {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            BinaryToken::Add => "+",
            BinaryToken::Sub => "-",
            BinaryToken::Mul => "*",
            BinaryToken::Div => "/",
            BinaryToken::Rem => "%",
            BinaryToken::Pow => "^",
        }
    }
}
