//! Serialized projection of tokens for tooling.
//!
//! Field names and order are part of the output contract:
//! `kind`, `offset`, `line`, `column`, `length`, `lexeme`.

use serde::Serialize;

use crate::token::Token;

/// Flat, borrowed view of a token as it appears in serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'a> {
    pub kind: &'static str,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub length: usize,
    pub lexeme: &'a str,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            offset: token.span.offset,
            line: token.span.line,
            column: token.span.column,
            length: token.len(),
            lexeme: &token.text,
        }
    }
}

#[derive(Serialize)]
struct LexerOutput<'a> {
    #[serde(rename = "lexer-output")]
    lexer_output: Vec<TokenRecord<'a>>,
}

/// Records for every token, in stream order.
#[must_use]
pub fn records(tokens: &[Token]) -> Vec<TokenRecord<'_>> {
    tokens.iter().map(TokenRecord::from).collect()
}

/// Render tokens as a pretty-printed `{"lexer-output": [...]}` document.
///
/// # Errors
///
/// Propagates serializer failures from `serde_json`.
pub fn to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&LexerOutput {
        lexer_output: records(tokens),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn record_fields_follow_token() {
        let tokens = tokenize("  print \"hé\"").expect("should tokenize");
        let record = TokenRecord::from(&tokens[1]);
        assert_eq!(
            record,
            TokenRecord {
                kind: "STRING",
                offset: 8,
                line: 1,
                column: 9,
                length: 4,
                lexeme: "\"hé\"",
            }
        );
    }

    #[test]
    fn field_order_is_stable() {
        let tokens = tokenize("x").expect("should tokenize");
        let json = serde_json::to_string(&TokenRecord::from(&tokens[0])).expect("serialize");
        assert_eq!(
            json,
            r#"{"kind":"IDENTIFIER","offset":0,"line":1,"column":1,"length":1,"lexeme":"x"}"#
        );
    }
}
