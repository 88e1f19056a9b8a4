//! Lexical front end for the lol language.
//!
//! A [`Scanner`] drives a position-tracking [`Cursor`] over source
//! text and emits typed, located [`Token`]s, ending with an explicit
//! end-of-input token. Errors are returned as values; the caller picks
//! the recovery policy.
//!
//! # Quick start
//!
//! ```
//! use lol_lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("let x = 5;\n").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Let,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Dec,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use lol_lexer::{LexErrorKind, Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("a + b");
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Identifier);
//! let err = scanner.next_token().unwrap_err();
//! assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter("+".into()));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cursor;
pub mod lexer;
pub mod record;
pub mod stream;
pub mod token;

pub use cursor::Cursor;
pub use lexer::{LexError, LexErrorKind, Scanner, tokenize, tokenize_recovering};
pub use record::{TokenRecord, records, to_json};
pub use stream::{StreamError, StreamErrorKind, TokenStream};
pub use token::{KEYWORDS, Span, Token, TokenKind, keyword};

/// Unified error type for the crate's fallible operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A token stream error.
    #[error("{0}")]
    Stream(#[from] StreamError),
    /// Serializing token records failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Tokenize a source string and render the tokens as JSON in one step.
pub fn tokenize_to_json(input: &str) -> Result<String, Error> {
    let tokens = tokenize(input)?;
    Ok(to_json(&tokens)?)
}
