use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Integer(i32),
    Keyword(String),

    ParenLeft,
    ParenRight,
    Comma,

    Eof,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Integer,
    Keyword,
    ParenLeft,
    ParenRight,
    Comma,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Integer(_) => TokenKind::Integer,
            Token::Keyword(_) => TokenKind::Keyword,
            Token::ParenLeft => TokenKind::ParenLeft,
            Token::ParenRight => TokenKind::ParenRight,
            Token::Comma => TokenKind::Comma,
            Token::Eof => TokenKind::Eof,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Integer(val) => write!(f, "{val}"),
            Token::Keyword(val) => write!(f, "{val}"),
            Token::ParenLeft => write!(f, "("),
            Token::ParenRight => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Eof => write!(f, "EOF"),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Integer => write!(f, "integer"),
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::ParenLeft => write!(f, "("),
            TokenKind::ParenRight => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

pub const SYMBOLS: &[(char, Token)] = &[
    ('(', Token::ParenLeft),
    (')', Token::ParenRight),
    (',', Token::Comma),
];

/// Reserved words. A [`Token::Keyword`] whose text is not listed here names a variable.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Add,
    Sub,
    Mult,
    Div,
    Let,
}

pub const KEYWORDS: &[(&str, Keyword)] = &[
    ("add", Keyword::Add),
    ("sub", Keyword::Sub),
    ("mult", Keyword::Mult),
    ("div", Keyword::Div),
    ("let", Keyword::Let),
];

impl Keyword {
    pub fn lookup(text: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == text)
            .map(|(_, keyword)| *keyword)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Add => "add",
            Keyword::Sub => "sub",
            Keyword::Mult => "mult",
            Keyword::Div => "div",
            Keyword::Let => "let",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma separated list of every reserved word, for diagnostics.
pub fn expected_keywords() -> String {
    KEYWORDS
        .iter()
        .map(|(word, _)| *word)
        .collect::<Vec<_>>()
        .join(", ")
}
