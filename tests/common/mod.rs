#![allow(dead_code)]

use lol_lexer::{Token, TokenKind, tokenize};

pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .expect("tokenize failed")
        .iter()
        .map(|t| t.kind)
        .collect()
}

pub fn pairs(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .expect("tokenize failed")
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

/// Helper: rebuild the source from token lexemes, filling the gaps
/// between tokens with the original (whitespace) characters, and
/// assert the gaps really were whitespace.
pub fn reconstruct(input: &str, tokens: &[Token]) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::new();
    let mut offset = 0;

    for token in tokens {
        assert!(
            token.span.offset >= offset,
            "token {token} overlaps previous lexeme"
        );
        for &ch in &chars[offset..token.span.offset] {
            assert!(
                matches!(ch, ' ' | '\t' | '\n' | '\r'),
                "non-whitespace {ch:?} skipped before {token}"
            );
            out.push(ch);
        }
        out.push_str(&token.text);
        offset = token.span.offset + token.len();
    }

    for &ch in &chars[offset..] {
        out.push(ch);
    }
    out
}
