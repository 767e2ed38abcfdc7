use crate::span::Span;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidCharacter(char, Span),
    IntegerOverflow(String, Span),
    MissingDigits(Span),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::InvalidCharacter(_, span)
            | Error::IntegerOverflow(_, span)
            | Error::MissingDigits(span) => *span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::InvalidCharacter(ch, _) => {
                write!(f, "cannot match character '{}' to a terminal", ch.escape_default())
            }
            Error::IntegerOverflow(literal, _) => {
                write!(f, "integer literal '{literal}' does not fit in 32 bits")
            }
            Error::MissingDigits(_) => write!(f, "expected digits after '-'"),
        }
    }
}

impl std::error::Error for Error {}
