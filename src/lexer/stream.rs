use std::mem;

use crate::{
    lexer::{
        error::Result,
        scanner::Scanner,
        token::{Token, TokenKind},
    },
    span::Span,
};

/// One-token lookahead buffer over a [`Scanner`].
#[derive(Debug)]
pub struct TokenStream<'a> {
    scanner: Scanner<'a>,
    next: (Token, Span),
}

impl<'a> TokenStream<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        let mut scanner = Scanner::new(input);
        let next = scanner.next_token()?;
        Ok(Self { scanner, next })
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.next.0.kind()
    }

    pub fn peek(&self) -> &(Token, Span) {
        &self.next
    }

    /// Returns the buffered token and refills the buffer from the scanner.
    pub fn advance(&mut self) -> Result<(Token, Span)> {
        let next = self.scanner.next_token()?;
        tracing::trace!(token = %next.0, span = %next.1, "scanned");
        Ok(mem::replace(&mut self.next, next))
    }
}
