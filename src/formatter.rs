//! Render tokens in the line-per-token fixture format.
//!
//! Each token becomes `(line:column)Kind:keyword/text/items`, with items
//! written as `column:text` and joined by commas. The EOF token is just
//! `EOF`.

use crate::token::{Token, TokenKind};

/// Format one token.
#[must_use]
pub fn format_token(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        return "EOF".to_string();
    }

    let mut out = String::new();
    out.push('(');
    out.push_str(&token.location.line.to_string());
    out.push(':');
    out.push_str(&token.location.column.to_string());
    out.push(')');
    out.push_str(token.kind.name());
    out.push(':');
    out.push_str(token.keyword.as_deref().unwrap_or_default());
    out.push('/');
    out.push_str(token.text.as_deref().unwrap_or_default());
    out.push('/');
    for (i, item) in token.items().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&item.column.to_string());
        out.push(':');
        out.push_str(&item.text);
    }
    out
}

/// Format a token stream, one token per line with a trailing newline.
#[must_use]
pub fn format(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format_token(token));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Location, Span};

    #[test]
    fn table_row() {
        let mut token = Token::new(TokenKind::TableRow, Location::new(4, 5), "en");
        token.items = Some(vec![Span::new(7, "a"), Span::new(11, "bb")]);
        assert_eq!(format_token(&token), "(4:5)TableRow://7:a,11:bb");
    }

    #[test]
    fn eof() {
        let token = Token::new(TokenKind::Eof, Location::new(9, 1), "en");
        assert_eq!(format_token(&token), "EOF");
    }
}
