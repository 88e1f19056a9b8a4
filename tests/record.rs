//! Serialized token records.

use lol_lexer::{Error, records, to_json, tokenize, tokenize_to_json};
use serde_json::{Value, json};

#[test]
fn json_document_shape() {
    let tokens = tokenize("let x = 5;\n").expect("tokenize");
    let json = to_json(&tokens).expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value,
        json!({
            "lexer-output": [
                {"kind": "LET", "offset": 0, "line": 1, "column": 1, "length": 3, "lexeme": "let"},
                {"kind": "IDENTIFIER", "offset": 4, "line": 1, "column": 5, "length": 1, "lexeme": "x"},
                {"kind": "EQUAL", "offset": 6, "line": 1, "column": 7, "length": 1, "lexeme": "="},
                {"kind": "DEC", "offset": 8, "line": 1, "column": 9, "length": 1, "lexeme": "5"},
                {"kind": "SEMICOLON", "offset": 9, "line": 1, "column": 10, "length": 1, "lexeme": ";"},
                {"kind": "EOF", "offset": 11, "line": 2, "column": 1, "length": 0, "lexeme": ""},
            ]
        })
    );
}

#[test]
fn records_escape_string_lexemes() {
    let tokens = tokenize("print \"a\\tb\" # done").expect("tokenize");
    let json = to_json(&tokens).expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["lexer-output"][1]["lexeme"], "\"a\\tb\"");
    assert_eq!(value["lexer-output"][1]["length"], 6);
    assert_eq!(value["lexer-output"][2]["kind"], "COMMENT");
}

#[test]
fn records_preserve_stream_order() {
    let tokens = tokenize("a b c").expect("tokenize");
    let offsets: Vec<_> = records(&tokens).iter().map(|r| r.offset).collect();
    assert_eq!(offsets, vec![0, 2, 4, 5]);
}

#[test]
fn tokenize_to_json_surfaces_lex_errors() {
    let err = tokenize_to_json("x = 1 + 2").unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert!(err.to_string().contains("column 7"));
}
