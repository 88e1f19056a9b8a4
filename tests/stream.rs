//! Token stream consumption, as a parser drives it.

use lol_lexer::{Error, StreamErrorKind, TokenKind, TokenStream};

// -----------------------------------------------------------
// Consuming a statement.
// -----------------------------------------------------------

/// Minimal `let <ident> = <dec>;` reader built on the stream API.
fn parse_let(stream: &mut TokenStream) -> Result<(String, String), Error> {
    stream.expect(TokenKind::Let)?;
    let name = stream.expect(TokenKind::Identifier)?;
    stream.expect(TokenKind::Equal)?;
    let value = stream.expect(TokenKind::Dec)?;
    stream.expect(TokenKind::Semicolon)?;
    Ok((name.text, value.text))
}

#[test]
fn stream_reads_statements() {
    let mut stream = TokenStream::from_source("let a = 1;\nlet b = 22;\n")
        .expect("tokenize")
        .without_comments();
    let mut bindings = Vec::new();
    while !stream.is_at_end() {
        bindings.push(parse_let(&mut stream).expect("parse"));
    }
    assert_eq!(
        bindings,
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "22".to_string()),
        ]
    );
}

#[test]
fn stream_without_comments_keeps_positions() {
    let stream = TokenStream::from_source("# header\nlet x = 1; # trailing\n")
        .expect("tokenize")
        .without_comments();
    let kinds: Vec<_> = stream.tokens().iter().map(|t| t.kind).collect();
    assert!(!kinds.contains(&TokenKind::Comment));
    assert_eq!(stream.peek().span.line, 2);
    assert_eq!(stream.peek().span.offset, 9);
}

#[test]
fn stream_peek_at_lookahead() {
    let stream = TokenStream::from_source("a -> b").expect("tokenize");
    assert_eq!(stream.peek_at(1).kind, TokenKind::Arrow);
    assert_eq!(stream.peek_at(2).text, "b");
    assert!(stream.peek_at(3).is_eof());
    assert!(stream.peek_at(100).is_eof());
}

#[test]
fn stream_next_token_sticks_at_eof() {
    let mut stream = TokenStream::from_source("x").expect("tokenize");
    assert_eq!(stream.next_token().text, "x");
    assert!(stream.next_token().is_eof());
    assert!(stream.next_token().is_eof());
}

// -----------------------------------------------------------
// Stream errors.
// -----------------------------------------------------------

#[test]
fn stream_error_expected_kind() {
    let mut stream = TokenStream::from_source("let 5 = x;").expect("tokenize");
    let err = parse_let(&mut stream).unwrap_err();
    match err {
        Error::Stream(e) => {
            assert!(matches!(
                e.kind,
                StreamErrorKind::Expected {
                    expected: TokenKind::Identifier,
                    found: TokenKind::Dec,
                    ..
                }
            ));
            assert_eq!(e.span.column, 5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn stream_error_missing_semicolon_at_end() {
    let mut stream = TokenStream::from_source("let a = 1").expect("tokenize");
    let err = parse_let(&mut stream).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected SEMICOLON, got end of input at line 1, column 10"
    );
}

#[test]
fn stream_from_source_lex_error() {
    let err = TokenStream::from_source("let s = \"open").unwrap_err();
    let err = Error::from(err);
    assert!(matches!(err, Error::Lex(_)));
}
