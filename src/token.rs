use std::fmt;

/// Source location of the first character of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Characters consumed before this location (0-based).
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters since the last newline.
    pub column: usize,
}

impl Span {
    #[must_use]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds produced by the scanner.
///
/// Operators the language reserves but does not scan yet (`+`, `*`,
/// `::`, `++` and friends) have no variant here; the scanner reports
/// them as unrecognized characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LSqb,
    /// `]`
    RSqb,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `=`
    Equal,
    /// `:`
    Colon,
    /// `;`
    Semicolon,

    /// `->`
    Arrow,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `>>`
    RShift,
    /// `<`
    Lesser,
    /// `<=`
    LesserEqual,
    /// `<<`
    LShift,

    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword.
    Identifier,
    /// Decimal integer literal.
    Dec,
    /// Double-quoted string, quotes included in the lexeme.
    String,
    /// `#` through end of line.
    Comment,

    If,
    Else,
    While,
    Function,
    Return,
    Let,
    Namespace,
    Module,
    Import,
    Print,

    /// End of input. Lexeme is empty.
    Eof,
}

/// Reserved words, in the order tooling lists them.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("function", TokenKind::Function),
    ("return", TokenKind::Return),
    ("let", TokenKind::Let),
    ("namespace", TokenKind::Namespace),
    ("module", TokenKind::Module),
    ("import", TokenKind::Import),
    ("print", TokenKind::Print),
];

/// Look up a complete identifier-shaped run in the keyword table.
///
/// Only exact matches count: `ifx` and `If` are not keywords.
#[must_use]
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Stable name used in serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LSqb => "LSQB",
            Self::RSqb => "RSQB",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Dot => "DOT",
            Self::Comma => "COMMA",
            Self::Equal => "EQUAL",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::Arrow => "ARROW",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::RShift => "RSHIFT",
            Self::Lesser => "LESSER",
            Self::LesserEqual => "LESSER_EQUAL",
            Self::LShift => "LSHIFT",
            Self::Identifier => "IDENTIFIER",
            Self::Dec => "DEC",
            Self::String => "STRING",
            Self::Comment => "COMMENT",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Function => "FUNCTION",
            Self::Return => "RETURN",
            Self::Let => "LET",
            Self::Namespace => "NAMESPACE",
            Self::Module => "MODULE",
            Self::Import => "IMPORT",
            Self::Print => "PRINT",
            Self::Eof => "EOF",
        }
    }

    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::If
                | Self::Else
                | Self::While
                | Self::Function
                | Self::Return
                | Self::Let
                | Self::Namespace
                | Self::Module
                | Self::Import
                | Self::Print
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token with its kind, text, and source location.
///
/// `text` is an owned copy of the lexeme; a token does not borrow from
/// the source it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Lexeme length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Offset one past the last character of the lexeme.
    #[must_use]
    pub fn end_offset(&self) -> usize {
        self.span.offset + self.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.span, self.kind, self.text)
    }
}
