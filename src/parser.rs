use core::fmt;
use std::{
    fmt::{Display, Formatter},
    rc::Rc,
};

use crate::{
    expr::{BinaryOp, Expr},
    lexer::{self, Keyword, Token, TokenKind, TokenStream, expected_keywords},
    scope::Scope,
    span::Span,
};

/// Maximum number of nested operator and `let` expressions.
///
/// Parsing recurses once per level; this keeps a debug build well inside the 8 MiB
/// main-thread stack. Deeper input fails with [`Error::TooDeep`] instead of overflowing.
pub const MAX_DEPTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lexer(lexer::Error),
    UnexpectedToken(String, (Token, Span)),
    MissingExpression((Token, Span)),
    UnknownOperation(String, Span),
    InvalidOperand((Token, Span)),
    UnboundVariable(String, Span),
    ReservedName(String, Span),
    Redeclaration(String, Span),
    TooDeep(Span),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<lexer::Error> for Error {
    fn from(value: lexer::Error) -> Self {
        Error::Lexer(value)
    }
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::Lexer(error) => error.span(),
            Error::UnexpectedToken(_, (_, span))
            | Error::MissingExpression((_, span))
            | Error::UnknownOperation(_, span)
            | Error::InvalidOperand((_, span))
            | Error::UnboundVariable(_, span)
            | Error::ReservedName(_, span)
            | Error::Redeclaration(_, span)
            | Error::TooDeep(span) => *span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::Lexer(error) => error.fmt(f),
            Error::UnexpectedToken(expected, (token, _)) => {
                write!(f, "expected '{expected}' but got '{token}'")
            }
            Error::MissingExpression((token, _)) => {
                write!(f, "expected {} but got '{token}'", expected_keywords())
            }
            Error::UnknownOperation(name, _) => write!(
                f,
                "operation '{name}' not supported, expected {}",
                expected_keywords()
            ),
            Error::InvalidOperand((token, _)) => write!(
                f,
                "error parsing operand: expected integer, expression or variable but got '{token}'"
            ),
            Error::UnboundVariable(name, _) => {
                write!(f, "error parsing operand: '{name}' is not a declared variable")
            }
            Error::ReservedName(name, _) => {
                write!(f, "'{name}' is reserved and cannot name a variable")
            }
            Error::Redeclaration(name, _) => {
                write!(f, "variable '{name}' is already declared in this scope")
            }
            Error::TooDeep(_) => {
                write!(f, "expression is nested deeper than {MAX_DEPTH} levels")
            }
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: TokenStream<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        Ok(Parser {
            tokens: TokenStream::new(input)?,
            depth: 0,
        })
    }

    pub fn parse(mut self) -> Result<Expr> {
        if self.tokens.peek_kind() != TokenKind::Keyword {
            return Err(Error::MissingExpression(self.tokens.peek().clone()));
        }
        let expr = self.parse_expr(&Scope::new())?;
        self.expect(TokenKind::Eof)?;
        Ok(expr)
    }

    fn parse_expr(&mut self, scope: &Scope) -> Result<Expr> {
        let (word, span) = match self.tokens.peek() {
            (Token::Keyword(word), span) => (word.clone(), *span),
            other => {
                return Err(Error::UnexpectedToken(expected_keywords(), other.clone()));
            }
        };

        if self.depth >= MAX_DEPTH {
            return Err(Error::TooDeep(span));
        }

        self.depth += 1;
        let expr = match Keyword::lookup(&word) {
            Some(Keyword::Add) => self.parse_binary(BinaryOp::Add, scope),
            Some(Keyword::Sub) => self.parse_binary(BinaryOp::Sub, scope),
            Some(Keyword::Mult) => self.parse_binary(BinaryOp::Mul, scope),
            Some(Keyword::Div) => self.parse_binary(BinaryOp::Div, scope),
            Some(Keyword::Let) => self.parse_let(scope),
            None => Err(Error::UnknownOperation(word, span)),
        };
        self.depth -= 1;
        expr
    }

    fn parse_binary(&mut self, op: BinaryOp, scope: &Scope) -> Result<Expr> {
        self.expect(TokenKind::Keyword)?;
        self.expect(TokenKind::ParenLeft)?;
        let lhs = self.parse_operand(scope)?;
        self.expect(TokenKind::Comma)?;
        let rhs = self.parse_operand(scope)?;
        self.expect(TokenKind::ParenRight)?;
        Ok(Expr::binary(op, lhs, rhs))
    }

    fn parse_operand(&mut self, scope: &Scope) -> Result<Expr> {
        match self.tokens.peek().clone() {
            (Token::Integer(value), _) => {
                self.tokens.advance()?;
                Ok(Expr::Integer(value))
            }
            (Token::Keyword(word), _) if Keyword::lookup(&word).is_some() => self.parse_expr(scope),
            (Token::Keyword(name), span) => match scope.lookup(&name) {
                Some(resolved) => {
                    let resolved = Rc::clone(resolved);
                    self.tokens.advance()?;
                    Ok(Expr::Variable { name, resolved })
                }
                None => Err(Error::UnboundVariable(name, span)),
            },
            other => Err(Error::InvalidOperand(other)),
        }
    }

    /// `let ( NAME , operand , expression )`. The value accepts any operand, including a
    /// bare variable, not only a literal or an expression. It is parsed without the new
    /// binding, so a name used there refers to whatever was visible before the `let`.
    fn parse_let(&mut self, scope: &Scope) -> Result<Expr> {
        self.expect(TokenKind::Keyword)?;
        self.expect(TokenKind::ParenLeft)?;
        let name = match self.tokens.advance()? {
            (Token::Keyword(name), span) => {
                if Keyword::lookup(&name).is_some() {
                    return Err(Error::ReservedName(name, span));
                }
                if scope.contains(&name) {
                    return Err(Error::Redeclaration(name, span));
                }
                name
            }
            other => {
                return Err(Error::UnexpectedToken("variable name".into(), other));
            }
        };
        self.expect(TokenKind::Comma)?;
        let bound = Rc::new(self.parse_operand(scope)?);
        self.expect(TokenKind::Comma)?;

        tracing::debug!(%name, value = %bound, "binding variable");
        let body = self.parse_expr(&scope.bind(&name, Rc::clone(&bound)))?;
        self.expect(TokenKind::ParenRight)?;

        Ok(Expr::Let {
            name,
            bound,
            body: Box::new(body),
        })
    }

    fn expect(&mut self, expected: TokenKind) -> Result<(Token, Span)> {
        match self.tokens.advance()? {
            (token, span) if token.kind() == expected => Ok((token, span)),
            other => Err(Error::UnexpectedToken(expected.to_string(), other)),
        }
    }
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(input = %input),
    err(level = "debug", Display)
)]
pub fn parse(input: &str) -> Result<Expr> {
    Parser::new(input)?.parse()
}
