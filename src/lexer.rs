use crate::error::ExprError;

#[derive(Clone, Debug)]
pub(crate) enum Token {
    Ident(String),
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Percent,
    Bang,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Eof,
}

pub(crate) struct Lexer<'a> {
    src: &'a [u8],
    i: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(s: &'a str) -> Self {
        Self {
            src: s.as_bytes(),
            i: 0,
        }
    }
    fn peek(&self) -> Option<u8> {
        self.src.get(self.i).copied()
    }
    fn bump(&mut self) -> Option<u8> {
        let ch = self.src.get(self.i).copied();
        if ch.is_some() {
            self.i += 1;
        }
        ch
    }
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.i += 1;
            } else {
                break;
            }
        }
    }
    pub(crate) fn next_token(&mut self) -> Result<Token, ExprError> {
        self.skip_ws();
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };
        match c {
            b'(' => {
                self.bump();
                Ok(Token::LParen)
            }
            b')' => {
                self.bump();
                Ok(Token::RParen)
            }
            b'[' => {
                self.bump();
                Ok(Token::LBracket)
            }
            b']' => {
                self.bump();
                Ok(Token::RBracket)
            }
            b'+' => {
                self.bump();
                Ok(Token::Plus)
            }
            b'-' => {
                self.bump();
                Ok(Token::Minus)
            }
            b'*' => {
                self.bump();
                Ok(Token::Star)
            }
            b'/' => {
                self.bump();
                Ok(Token::Slash)
            }
            b'^' => {
                self.bump();
                Ok(Token::Caret)
            }
            b'%' => {
                self.bump();
                Ok(Token::Percent)
            }
            b'!' => {
                self.bump();
                Ok(Token::Bang)
            }
            b',' => {
                self.bump();
                Ok(Token::Comma)
            }
            c if c.is_ascii_digit() || c == b'.' => self.lex_number(),
            _ => self.lex_ident(),
        }
    }
    fn lex_number(&mut self) -> Result<Token, ExprError> {
        let start = self.i;
        let mut seen_dot = false;
        let mut seen_exp = false;
        // Parse mantissa (integer and fractional) and optional scientific exponent.
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.i += 1;
            } else if c == b'.' && !seen_dot && !seen_exp {
                seen_dot = true;
                self.i += 1;
            } else if (c == b'e' || c == b'E') && !seen_exp {
                seen_exp = true;
                self.i += 1; // consume 'e' or 'E'
                // Optional sign after exponent
                if let Some(sign) = self.peek() {
                    if sign == b'+' || sign == b'-' {
                        self.i += 1;
                    }
                }
                // Consume exponent digits (if any). If none, parse() will error later.
                while let Some(d) = self.peek() {
                    if d.is_ascii_digit() {
                        self.i += 1;
                    } else {
                        break;
                    }
                }
            } else {
                break;
            }
        }
        let end = self.i;
        let s = std::str::from_utf8(&self.src[start..end])
            .map_err(|_| ExprError::Parse("invalid utf-8 in number".into()))?;
        let v: f64 = s
            .parse()
            .map_err(|e| ExprError::Parse(format!("invalid number '{}': {}", s, e)))?;
        Ok(Token::Num(v))
    }
    fn lex_ident(&mut self) -> Result<Token, ExprError> {
        let start = self.i;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' {
                self.i += 1;
            } else {
                break;
            }
        }
        if start == self.i {
            let c = self.bump().unwrap_or(b'?');
            return Err(ExprError::Parse(format!(
                "unexpected character '{}'",
                c as char
            )));
        }
        let s = std::str::from_utf8(&self.src[start..self.i])
            .map_err(|_| ExprError::Parse("invalid utf-8 in identifier".into()))?
            .to_string();
        Ok(Token::Ident(s))
    }
}
