#![allow(dead_code)]

use gherkin_matcher::{BuiltinDialects, Span, Token, format, tokenize};

pub fn assert_tokens(input: &str, expected: &str) {
    let dialects = BuiltinDialects::new();
    let tokens = tokenize(&dialects, input).expect("tokenize failed");
    let output = format(&tokens);
    pretty_assertions::assert_eq!(
        output,
        expected,
        "token mismatch:\n--- input ---\n{input}"
    );
}

/// Helper: collect `(column, text)` pairs from a token's items.
pub fn spans(token: &Token) -> Vec<(usize, &str)> {
    token
        .items()
        .iter()
        .map(|Span { column, text }| (*column, text.as_str()))
        .collect()
}
