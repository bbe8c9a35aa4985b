use crate::ast::{Ast, BinaryToken, UnaryToken};
use crate::error::ExprError;
use crate::lexer::{Lexer, Token};

/// Recursive-descent parser. Precedence, low to high: additive,
/// multiplicative, unary sign, power (right associative), primary.
pub(crate) struct Parser<'a> {
    lex: Lexer<'a>,
    look: Token,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(s: &'a str) -> Result<Self, ExprError> {
        let mut lex = Lexer::new(s);
        let look = lex.next_token()?;
        Ok(Self { lex, look })
    }
    fn bump(&mut self) -> Result<(), ExprError> {
        self.look = self.lex.next_token()?;
        Ok(())
    }
    fn expect(&mut self, t: &Token) -> Result<(), ExprError> {
        if std::mem::discriminant(&self.look) == std::mem::discriminant(t) {
            self.bump()
        } else {
            Err(ExprError::Parse(format!("expected {:?}", t)))
        }
    }
    pub(crate) fn parse(mut self) -> Result<Ast, ExprError> {
        let expr = self.additive()?;
        if !matches!(self.look, Token::Eof) {
            return Err(ExprError::Parse("trailing tokens".into()));
        }
        Ok(expr)
    }
    fn additive(&mut self) -> Result<Ast, ExprError> {
        let mut node = self.multiplicative()?;
        loop {
            let op = match self.look {
                Token::Plus => BinaryToken::Add,
                Token::Minus => BinaryToken::Sub,
                _ => break,
            };
            self.bump()?;
            let rhs = self.multiplicative()?;
            node = Ast::Binary {
                op,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
            };
        }
        Ok(node)
    }
    fn multiplicative(&mut self) -> Result<Ast, ExprError> {
        let mut node = self.unary()?;
        loop {
            let op = match self.look {
                Token::Star => BinaryToken::Mul,
                Token::Slash => BinaryToken::Div,
                Token::Percent => BinaryToken::Rem,
                _ => break,
            };
            self.bump()?;
            let rhs = self.unary()?;
            node = Ast::Binary {
                op,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
            };
        }
        Ok(node)
    }
    fn unary(&mut self) -> Result<Ast, ExprError> {
        let op = match self.look {
            Token::Minus => Some(UnaryToken::Neg),
            Token::Plus => Some(UnaryToken::Pos),
            Token::Bang => Some(UnaryToken::Not),
            _ => None,
        };
        if let Some(op) = op {
            self.bump()?;
            return Ok(Ast::Unary {
                op,
                expr: Box::new(self.unary()?),
            });
        }
        self.power()
    }
    fn power(&mut self) -> Result<Ast, ExprError> {
        let base = self.primary()?;
        if matches!(self.look, Token::Caret) {
            self.bump()?;
            // Right associative; the exponent may carry a unary sign.
            let rhs = self.unary()?;
            return Ok(Ast::Binary {
                op: BinaryToken::Pow,
                lhs: Box::new(base),
                rhs: Box::new(rhs),
            });
        }
        Ok(base)
    }
    fn primary(&mut self) -> Result<Ast, ExprError> {
        match self.look.clone() {
            Token::Num(v) => {
                self.bump()?;
                Ok(Ast::Num(v))
            }
            Token::Ident(s) => {
                self.bump()?;
                if matches!(self.look, Token::LParen) {
                    self.bump()?; // consume '('
                    let mut args = Vec::new();
                    if !matches!(self.look, Token::RParen) {
                        loop {
                            args.push(self.additive()?);
                            if matches!(self.look, Token::Comma) {
                                self.bump()?;
                                continue;
                            }
                            break;
                        }
                    }
                    self.expect(&Token::RParen)?;
                    Ok(Ast::Call { name: s, args })
                } else {
                    Ok(Ast::Var(s))
                }
            }
            Token::LParen => {
                self.bump()?;
                let e = self.additive()?;
                self.expect(&Token::RParen)?;
                Ok(e)
            }
            Token::LBracket => {
                self.bump()?;
                let mut items = Vec::new();
                if !matches!(self.look, Token::RBracket) {
                    loop {
                        items.push(self.additive()?);
                        if matches!(self.look, Token::Comma) {
                            self.bump()?;
                            continue;
                        }
                        break;
                    }
                }
                self.expect(&Token::RBracket)?;
                Ok(Ast::Array(items))
            }
            _ => Err(ExprError::Parse(
                "expected number, identifier, '(' or '['".into(),
            )),
        }
    }
}
