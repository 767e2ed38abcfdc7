use std::num::IntErrorKind;

use crate::{
    lexer::{
        chars::CharStream,
        error::{Error, Result},
        token::{SYMBOLS, Token},
    },
    span::Span,
};

/// The only whitespace the language recognises.
const WHITESPACE: char = ' ';

#[derive(Debug)]
pub struct Scanner<'a> {
    stream: CharStream<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            stream: CharStream::new(input),
        }
    }

    /// Scans the next token. Once the input is exhausted every call yields [`Token::Eof`].
    pub fn next_token(&mut self) -> Result<(Token, Span)> {
        self.stream.take_while(|c| c == WHITESPACE);

        let start = self.stream.position();
        if self.stream.is_at_end() {
            return Ok((Token::Eof, Span::new(start, start)));
        }

        let current_char = self.stream.peek();

        if current_char.is_ascii_digit() {
            return self.scan_integer(start, "");
        }

        if let Some((_, token)) = SYMBOLS.iter().find(|(sym, _)| *sym == current_char) {
            self.stream.advance();
            return Ok((token.clone(), Span::at(start)));
        }

        if current_char == '-' {
            self.stream.advance();
            if !self.stream.peek().is_ascii_digit() {
                return Err(Error::MissingDigits(Span::at(start)));
            }
            return self.scan_integer(start, "-");
        }

        if can_start_identifier(current_char) {
            let text = self.stream.take_while(is_identifier_char);
            return Ok((Token::Keyword(text), self.span_from(start)));
        }

        Err(Error::InvalidCharacter(current_char, Span::at(start)))
    }

    fn scan_integer(&mut self, start: usize, sign: &str) -> Result<(Token, Span)> {
        let literal = format!("{sign}{}", self.stream.take_while(|c| c.is_ascii_digit()));
        let span = self.span_from(start);
        match literal.parse::<i32>() {
            Ok(value) => Ok((Token::Integer(value), span)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(Error::IntegerOverflow(literal, span))
                }
                _ => Err(Error::MissingDigits(span)),
            },
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.stream.position())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<(Token, Span)>;

    /// Yields tokens up to, but not including, [`Token::Eof`].
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok((Token::Eof, _)) => None,
            other => Some(other),
        }
    }
}

pub fn can_start_identifier(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

/// Scans all of `input`, stopping at the first lexical error.
pub fn tokenize(input: &str) -> Result<Vec<(Token, Span)>> {
    Scanner::new(input).collect()
}
