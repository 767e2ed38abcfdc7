pub use chars::{CharStream, SENTINEL};
pub use error::{Error, Result};
pub use scanner::{Scanner, tokenize};
pub use stream::TokenStream;
pub use token::{KEYWORDS, Keyword, Token, TokenKind, expected_keywords};

mod chars;
mod error;
mod scanner;
mod stream;
mod token;
