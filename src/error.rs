use core::fmt;

use crate::{eval, lexer, parser, span::Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Parse,
    Arithmetic,
    /// Input well-formed but beyond the parser's nesting limit.
    Resource,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical"),
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Arithmetic => write!(f, "arithmetic"),
            ErrorKind::Resource => write!(f, "resource"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lexical(lexer::Error),

    #[error("parse error: {0}")]
    Parse(parser::Error),

    #[error("arithmetic error: {0}")]
    Arithmetic(eval::Error),

    #[error("resource error: {0}")]
    Resource(parser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<lexer::Error> for Error {
    fn from(value: lexer::Error) -> Self {
        Error::Lexical(value)
    }
}

impl From<parser::Error> for Error {
    fn from(value: parser::Error) -> Self {
        match value {
            parser::Error::Lexer(error) => Error::Lexical(error),
            error @ parser::Error::TooDeep(_) => Error::Resource(error),
            error => Error::Parse(error),
        }
    }
}

impl From<eval::Error> for Error {
    fn from(value: eval::Error) -> Self {
        Error::Arithmetic(value)
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lexical(_) => ErrorKind::Lexical,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Arithmetic(_) => ErrorKind::Arithmetic,
            Error::Resource(_) => ErrorKind::Resource,
        }
    }

    /// The description without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Lexical(error) => error.to_string(),
            Error::Parse(error) | Error::Resource(error) => error.to_string(),
            Error::Arithmetic(error) => error.to_string(),
        }
    }

    /// Where in the input the error was detected. Evaluation errors have no location.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lexical(error) => Some(error.span()),
            Error::Parse(error) | Error::Resource(error) => Some(error.span()),
            Error::Arithmetic(_) => None,
        }
    }

    /// Renders the error together with the offending part of `source`.
    pub fn report<'a>(&'a self, source: &'a str) -> Report<'a> {
        Report {
            error: self,
            source,
        }
    }
}

pub struct Report<'a> {
    error: &'a Error,
    source: &'a str,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.error.span() {
            Some(span) => {
                write_message(f, self.error, Some(span))?;
                write_line(f, self.source, span)
            }
            None => write_message(f, self.error, None),
        }
    }
}

fn write_message(f: &mut fmt::Formatter, error: &Error, span: Option<Span>) -> fmt::Result {
    match span {
        Some(span) => writeln!(f, "{}:{}: {}", error.kind(), span, error.message()),
        None => writeln!(f, "{}: {}", error.kind(), error.message()),
    }
}

fn write_line(f: &mut fmt::Formatter, source: &str, span: Span) -> fmt::Result {
    writeln!(f, "     | ")?;
    writeln!(f, "{:4} | {}", 1, source)?;
    writeln!(
        f,
        "     | {}{}",
        " ".repeat(span.start),
        "^".repeat(span.len().max(1))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    #[test]
    fn kinds_follow_the_failing_stage() {
        let cases = [
            ("add(1, #)", ErrorKind::Lexical),
            ("add(1, 99999999999)", ErrorKind::Lexical),
            ("add(1, x)", ErrorKind::Parse),
            ("add(1, 2) 3", ErrorKind::Parse),
            ("div(5, 0)", ErrorKind::Arithmetic),
            ("add(2147483647, 1)", ErrorKind::Arithmetic),
        ];
        for (input, kind) in cases {
            let err = calculate(input).expect_err(input);
            assert_eq!(err.kind(), kind, "{input}");
        }
    }

    #[test]
    fn nesting_limit_is_a_resource_error() {
        let depth = parser::MAX_DEPTH + 1;
        let source = format!("{}1{}", "add(1,".repeat(depth), ")".repeat(depth));
        let err = std::thread::Builder::new()
            .stack_size(8 << 20)
            .spawn(move || calculate(&source))
            .expect("thread should spawn")
            .join()
            .expect("thread should not panic")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resource);
        assert_eq!(
            err.to_string(),
            format!(
                "resource error: expression is nested deeper than {} levels",
                parser::MAX_DEPTH
            )
        );
        let start = parser::MAX_DEPTH * 6;
        assert_eq!(err.span(), Some(Span::new(start, start + 3)));
    }

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            calculate("$")
                .unwrap_err()
                .to_string()
                .starts_with("lexical error: ")
        );
        assert!(
            calculate("add(x, 1)")
                .unwrap_err()
                .to_string()
                .starts_with("parse error: ")
        );
        assert!(
            calculate("div(1, 0)")
                .unwrap_err()
                .to_string()
                .starts_with("arithmetic error: ")
        );
    }

    #[test]
    fn report_points_at_the_span() {
        let source = "add(foo, 1)";
        let err = calculate(source).unwrap_err();
        assert_eq!(
            err.report(source).to_string(),
            "parse:1:5: error parsing operand: 'foo' is not a declared variable\n     | \n   1 | add(foo, 1)\n     |     ^^^\n"
        );
    }

    #[test]
    fn report_marks_end_of_input() {
        let source = "add(1,";
        let err = calculate(source).unwrap_err();
        assert!(err.report(source).to_string().ends_with("     |       ^\n"));
    }

    #[test]
    fn report_without_span_is_one_line() {
        let source = "div(1, 0)";
        let err = calculate(source).unwrap_err();
        assert_eq!(
            err.report(source).to_string(),
            "arithmetic: division by zero in div(1, 0)\n"
        );
    }
}
