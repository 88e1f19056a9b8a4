use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::token::{self, Span, Token, TokenKind};

/// Two-character forms the language reserves but does not scan.
/// Reported whole so the diagnostic names the operator the user wrote.
const RESERVED_PAIRS: &[&str] = &["::", "++", "--", "**", "//"];

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// String literal not closed before a newline or end of input.
    UnterminatedString,
    /// Character, or reserved character pair, that cannot start any token.
    UnrecognizedCharacter(String),
    /// Multi-digit integer literal starting with `0`.
    LeadingZero(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
            Self::UnrecognizedCharacter(text) => {
                write!(f, "unrecognized character: {text}")
            }
            Self::LeadingZero(digits) => {
                write!(f, "integer literal with leading zero: {digits}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Where the offending lexeme starts.
    pub span: Span,
}

impl LexError {
    /// Render the error with the offending source line and a `^`
    /// underline beneath the lexeme:
    ///
    /// ```text
    /// unrecognized character: @ at line 2, column 3
    /// > 2 | x @ y
    ///     |   ^
    /// ```
    ///
    /// An unterminated string is underlined to the end of its line.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let line = source
            .split('\n')
            .nth(self.span.line.saturating_sub(1))
            .unwrap_or_default()
            .trim_end_matches('\r');
        let before = self.span.column.saturating_sub(1);

        let width = match &self.kind {
            LexErrorKind::UnrecognizedCharacter(text) | LexErrorKind::LeadingZero(text) => {
                text.chars().count()
            }
            LexErrorKind::UnterminatedString => line.chars().count().saturating_sub(before),
        };

        // Keep tabs so the caret lines up with the source line.
        let indent: String = line
            .chars()
            .take(before)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let lineno = self.span.line.to_string();
        let gutter = " ".repeat(lineno.len());

        format!(
            "{self}\n> {lineno} | {line}\n  {gutter} | {indent}{}",
            "^".repeat(width.max(1))
        )
    }
}

/// Tokenize a source string, stopping at the first error.
///
/// The returned tokens always end with a single [`TokenKind::Eof`].
///
/// # Errors
///
/// Returns `LexError` on unterminated strings, unrecognized
/// characters, or integer literals with a leading zero.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(input).collect()
}

/// Tokenize a source string, collecting every error instead of
/// stopping at the first one.
///
/// After an error the scan resumes past the offending lexeme: an
/// unrecognized character (or the whole reserved pair) is skipped, an
/// unterminated string is dropped up to the end of its line, and a
/// leading-zero digit run is dropped. The token list always ends with
/// [`TokenKind::Eof`].
#[must_use]
pub fn tokenize_recovering(input: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    loop {
        match scanner.next_token() {
            Ok(token) => {
                let eof = token.is_eof();
                tokens.push(token);
                if eof {
                    break;
                }
            }
            Err(err) => {
                // Only unrecognized characters leave the cursor in place.
                if let LexErrorKind::UnrecognizedCharacter(text) = &err.kind {
                    for _ in text.chars() {
                        scanner.skip_char();
                    }
                }
                errors.push(err);
            }
        }
    }

    (tokens, errors)
}

/// Pull-based scanner producing one token per call.
///
/// Also usable as an iterator: yields every token up to and including
/// the end-of-input token, or up to the first error, then stops.
#[derive(Debug, Clone)]
pub struct Scanner {
    cursor: Cursor,
    done: bool,
}

impl Scanner {
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            cursor: Cursor::new(input),
            done: false,
        }
    }

    /// Location of the next unread character.
    #[must_use]
    pub const fn position(&self) -> Span {
        self.cursor.position()
    }

    /// Consume one character without classifying it. Lets a caller
    /// step over an unrecognized character and keep scanning.
    pub fn skip_char(&mut self) -> Option<char> {
        self.cursor.advance()
    }

    /// Scan the next token.
    ///
    /// At end of input this returns the end-of-input token, stamped at
    /// the end position, on every call.
    ///
    /// # Errors
    ///
    /// Returns `LexError` when the text at the current position does
    /// not form a valid lexeme. Nothing is retried; the caller decides
    /// whether to stop or to resume.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.cursor.position();
        let start_byte = self.cursor.byte_pos();

        let Some(ch) = self.cursor.peek() else {
            return Ok(self.make_token(TokenKind::Eof, start, start_byte));
        };

        let kind = match ch {
            c if is_identifier_start(c) => self.read_identifier(start_byte),
            '0'..='9' => self.read_number(start, start_byte)?,
            '"' => self.read_string(start)?,
            '#' => self.read_comment(),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LSqb),
            ']' => self.single(TokenKind::RSqb),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '.' => self.single(TokenKind::Dot),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            ':' if self.cursor.peek_next() != Some(':') => self.single(TokenKind::Colon),
            '=' => self.one_or_two(&[('=', TokenKind::EqualEqual)], TokenKind::Equal),
            '>' => self.one_or_two(
                &[('=', TokenKind::GreaterEqual), ('>', TokenKind::RShift)],
                TokenKind::Greater,
            ),
            '<' => self.one_or_two(
                &[('=', TokenKind::LesserEqual), ('<', TokenKind::LShift)],
                TokenKind::Lesser,
            ),
            '!' if self.cursor.peek_next() == Some('=') => self.double(TokenKind::NotEqual),
            '-' if self.cursor.peek_next() == Some('>') => self.double(TokenKind::Arrow),
            c => return Err(self.unrecognized(c, start)),
        };

        Ok(self.make_token(kind, start, start_byte))
    }

    fn make_token(&self, kind: TokenKind, span: Span, start_byte: usize) -> Token {
        Token {
            kind,
            text: self.cursor.slice_from(start_byte).to_string(),
            span,
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor
            .advance_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn double(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        self.cursor.advance();
        kind
    }

    /// Longest match over a one-character operator and its
    /// two-character extensions.
    fn one_or_two(&mut self, longer: &[(char, TokenKind)], shorter: TokenKind) -> TokenKind {
        let next = self.cursor.peek_next();
        let matched = longer
            .iter()
            .find(|&&(second, _)| Some(second) == next)
            .map(|&(_, kind)| kind);
        self.cursor.advance();
        matched.map_or(shorter, |kind| {
            self.cursor.advance();
            kind
        })
    }

    fn unrecognized(&self, ch: char, span: Span) -> LexError {
        let mut text = String::from(ch);
        if let Some(next) = self.cursor.peek_next() {
            text.push(next);
            if !RESERVED_PAIRS.contains(&text.as_str()) {
                text.pop();
            }
        }
        LexError {
            kind: LexErrorKind::UnrecognizedCharacter(text),
            span,
        }
    }

    fn read_identifier(&mut self, start_byte: usize) -> TokenKind {
        self.cursor.advance_while(is_identifier_continue);
        token::keyword(self.cursor.slice_from(start_byte)).unwrap_or(TokenKind::Identifier)
    }

    fn read_number(&mut self, start: Span, start_byte: usize) -> Result<TokenKind, LexError> {
        self.cursor.advance_while(|c| c.is_ascii_digit());
        let digits = self.cursor.slice_from(start_byte);
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(LexError {
                kind: LexErrorKind::LeadingZero(digits.to_string()),
                span: start,
            });
        }
        Ok(TokenKind::Dec)
    }

    fn read_string(&mut self, start: Span) -> Result<TokenKind, LexError> {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.peek() {
                None | Some('\n') => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        span: start,
                    });
                }
                Some('"') => {
                    self.cursor.advance();
                    return Ok(TokenKind::String);
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Runs to the end of the line. A `\r` only ends the comment as
    /// part of a `\r\n` pair; a bare one belongs to the comment.
    fn read_comment(&mut self) -> TokenKind {
        while let Some(c) = self.cursor.peek() {
            if c == '\n' || (c == '\r' && self.cursor.peek_next() == Some('\n')) {
                break;
            }
            self.cursor.advance();
        }
        TokenKind::Comment
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        self.done = !matches!(&result, Ok(token) if !token.is_eof());
        Some(result)
    }
}

impl FusedIterator for Scanner {}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
