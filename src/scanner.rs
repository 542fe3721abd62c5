//! Split source text into lines and run them through a [`Matcher`].
//!
//! The rule order here is grammar-free: it classifies each line on its own
//! and does not check that constructs appear in a valid order.

use tracing::trace;

use crate::dialect::DialectProvider;
use crate::line::Line;
use crate::matcher::{MatchError, Matcher};
use crate::token::{Token, TokenKind};

/// Rules tried while a doc-string is open.
const DOC_STRING_RULES: &[TokenKind] = &[
    TokenKind::Eof,
    TokenKind::DocStringSeparator,
    TokenKind::Other,
];

/// Rules tried everywhere else. `Language` precedes `Comment` because
/// every pragma is also a comment, and outlines precede scenarios so that
/// dialects where one keyword prefixes the other still resolve.
const RULES: &[TokenKind] = &[
    TokenKind::Eof,
    TokenKind::Empty,
    TokenKind::Language,
    TokenKind::Comment,
    TokenKind::TagLine,
    TokenKind::FeatureLine,
    TokenKind::BackgroundLine,
    TokenKind::ScenarioOutlineLine,
    TokenKind::ScenarioLine,
    TokenKind::ExamplesLine,
    TokenKind::StepLine,
    TokenKind::DocStringSeparator,
    TokenKind::TableRow,
    TokenKind::Other,
];

/// Split `input` into numbered lines followed by one EOF line.
///
/// Accepts `\n` and `\r\n` terminators and drops a leading UTF-8 BOM.
#[must_use]
pub fn lines(input: &str) -> Vec<Line> {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut lines: Vec<Line> = input
        .lines()
        .enumerate()
        .map(|(i, text)| Line::new(i + 1, text))
        .collect();
    lines.push(Line::eof(lines.len() + 1));
    lines
}

/// Classify one line, trying the rules in priority order.
pub fn scan_line(matcher: &mut Matcher<'_>, line: &Line) -> Result<Token, MatchError> {
    let rules = if matcher.active_doc_string_separator().is_some() {
        DOC_STRING_RULES
    } else {
        RULES
    };
    for &kind in rules {
        if let Some(token) = matcher.match_rule(kind, line)? {
            trace!(
                line = line.line_number(),
                kind = %token.kind,
                "matched"
            );
            return Ok(token);
        }
    }
    Ok(matcher.match_other(line))
}

/// Scan a whole document, one token per line plus the EOF token.
///
/// # Errors
///
/// Stops at the first `# language:` pragma naming an unknown dialect.
pub fn scan(matcher: &mut Matcher<'_>, input: &str) -> Result<Vec<Token>, MatchError> {
    lines(input)
        .iter()
        .map(|line| scan_line(matcher, line))
        .collect()
}

/// Tokenize a document with a fresh matcher in the default language.
pub fn tokenize(provider: &dyn DialectProvider, input: &str) -> Result<Vec<Token>, crate::Error> {
    let mut matcher = Matcher::new(provider)?;
    Ok(scan(&mut matcher, input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_append_eof() {
        let lines = lines("a\r\nb\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "a");
        assert_eq!(lines[1].text(), "b");
        assert!(lines[2].is_eof());
        assert_eq!(lines[2].line_number(), 3);
    }

    #[test]
    fn empty_input_is_only_eof() {
        let lines = lines("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_eof());
        assert_eq!(lines[0].line_number(), 1);
    }

    #[test]
    fn bom_stripping() {
        let lines = lines("\u{FEFF}Feature: x");
        assert_eq!(lines[0].text(), "Feature: x");
        assert_eq!(lines[0].indent(), 0);
    }
}
