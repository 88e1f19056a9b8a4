use std::fmt;

use crate::lexer::{LexError, tokenize};
use crate::token::{Span, Token, TokenKind};

/// Classifies a token stream error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamErrorKind {
    /// The next token was not of the required kind.
    Expected {
        expected: TokenKind,
        found: TokenKind,
        text: String,
    },
}

impl fmt::Display for StreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected {
                expected,
                found: TokenKind::Eof,
                ..
            } => {
                write!(f, "expected {expected}, got end of input")
            }
            Self::Expected {
                expected,
                found,
                text,
            } => {
                write!(f, "expected {expected}, got {found} '{text}'")
            }
        }
    }
}

/// Error produced while consuming a token stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct StreamError {
    pub kind: StreamErrorKind,
    pub span: Span,
}

/// Buffered tokens with one-token-at-a-time consumption, the shape a
/// recursive-descent parser reads from.
///
/// The stream always ends with an end-of-input token; peeking or
/// advancing past it keeps returning it.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wrap scanned tokens. An end-of-input token is appended when
    /// `tokens` does not already end with one.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let span = tokens
                .last()
                .map_or_else(|| Span::new(0, 1, 1), end_span);
            tokens.push(Token {
                kind: TokenKind::Eof,
                text: String::new(),
                span,
            });
        }
        Self { tokens, pos: 0 }
    }

    /// Scan `input` and wrap the result.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` of the scan.
    pub fn from_source(input: &str) -> Result<Self, LexError> {
        Ok(Self::new(tokenize(input)?))
    }

    /// Drop comment tokens. Positions of the remaining tokens are
    /// unchanged.
    #[must_use]
    pub fn without_comments(self) -> Self {
        let tokens = self
            .tokens
            .into_iter()
            .filter(|t| t.kind != TokenKind::Comment)
            .collect();
        Self { tokens, pos: 0 }
    }

    #[must_use]
    pub fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Token `offset` places ahead of the current one, clamped to the
    /// end-of-input token.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Return the current token and move past it.
    pub fn next_token(&mut self) -> Token {
        let token = self.peek().clone();
        self.advance();
        token
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the current token if it is of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `StreamError` naming the token actually found; the
    /// stream does not advance in that case.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, StreamError> {
        let token = self.peek();
        if token.kind != kind {
            return Err(StreamError {
                kind: StreamErrorKind::Expected {
                    expected: kind,
                    found: token.kind,
                    text: token.text.clone(),
                },
                span: token.span,
            });
        }
        Ok(self.next_token())
    }
}

/// Position just past the last character of `token`.
fn end_span(token: &Token) -> Span {
    let mut span = token.span;
    for ch in token.text.chars() {
        span.offset += 1;
        if ch == '\n' {
            span.line += 1;
            span.column = 1;
        } else {
            span.column += 1;
        }
    }
    span
}
