use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::dialect::{DEFAULT_LANGUAGE, Dialect, DialectProvider, UnknownDialect};
use crate::line::Line;
use crate::token::{Location, Span, Token, TokenKind};

const COMMENT_PREFIX: &str = "#";
const TAG_PREFIX: &str = "@";
const TITLE_KEYWORD_SEPARATOR: &str = ":";
const TABLE_CELL_SEPARATOR: &str = "|";
const DOC_STRING_SEPARATOR: &str = "\"\"\"";
const DOC_STRING_ALTERNATIVE_SEPARATOR: &str = "```";

static LANGUAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*#\s*language\s*:\s*([a-zA-Z\-_]+)\s*$").expect("language pattern is valid")
});

/// Classifies a matcher error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchErrorKind {
    /// A `# language:` pragma names a code the provider does not know.
    UnsupportedLanguage(String),
}

impl fmt::Display for MatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLanguage(language) => {
                write!(f, "Language not supported: {language}")
            }
        }
    }
}

/// Error produced while matching a line.
///
/// The line still matched: `token` is what the rule produced, stamped with
/// the matcher state from before the failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", location.line, location.column)]
pub struct MatchError {
    pub kind: MatchErrorKind,
    pub location: Location,
    pub token: Box<Token>,
}

/// Dialect-aware line classifier.
///
/// One matcher serves one document: it remembers the active dialect and
/// whether a doc-string is open, so lines must be offered in order.
/// Every `match_*` method returns `None` when its rule does not apply.
pub struct Matcher<'a> {
    provider: &'a dyn DialectProvider,
    language: String,
    dialect: &'a Dialect,
    active_doc_string_separator: Option<&'static str>,
    indent_to_strip: usize,
}

impl fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("language", &self.language)
            .field(
                "active_doc_string_separator",
                &self.active_doc_string_separator,
            )
            .field("indent_to_strip", &self.indent_to_strip)
            .finish_non_exhaustive()
    }
}

impl<'a> Matcher<'a> {
    /// Create a matcher starting in the default language.
    pub fn new(provider: &'a dyn DialectProvider) -> Result<Self, UnknownDialect> {
        Self::with_language(provider, DEFAULT_LANGUAGE)
    }

    /// Create a matcher starting in `language`.
    pub fn with_language(
        provider: &'a dyn DialectProvider,
        language: &str,
    ) -> Result<Self, UnknownDialect> {
        let dialect = provider
            .dialect(language)
            .ok_or_else(|| UnknownDialect(language.to_string()))?;
        Ok(Self {
            provider,
            language: language.to_string(),
            dialect,
            active_doc_string_separator: None,
            indent_to_strip: 0,
        })
    }

    /// Active language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Active dialect.
    #[must_use]
    pub const fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    /// Delimiter of the open doc-string, if any.
    #[must_use]
    pub const fn active_doc_string_separator(&self) -> Option<&'static str> {
        self.active_doc_string_separator
    }

    #[must_use]
    pub const fn indent_to_strip(&self) -> usize {
        self.indent_to_strip
    }

    /// Return to the default language with no doc-string open.
    pub fn reset(&mut self) -> Result<(), UnknownDialect> {
        *self = Self::new(self.provider)?;
        Ok(())
    }

    fn token_at(&self, kind: TokenKind, line: &Line, index: usize) -> Token {
        Token::new(
            kind,
            Location::new(line.line_number(), index + 1),
            &self.language,
        )
    }

    /// Try the rule for `kind`.
    ///
    /// Only the language rule can fail; every other rule either matches
    /// or declines.
    pub fn match_rule(&mut self, kind: TokenKind, line: &Line) -> Result<Option<Token>, MatchError> {
        Ok(match kind {
            TokenKind::Eof => self.match_eof(line),
            TokenKind::Empty => self.match_empty(line),
            TokenKind::Comment => self.match_comment(line),
            TokenKind::TagLine => self.match_tag_line(line),
            TokenKind::FeatureLine => self.match_feature_line(line),
            TokenKind::BackgroundLine => self.match_background_line(line),
            TokenKind::ScenarioLine => self.match_scenario_line(line),
            TokenKind::ScenarioOutlineLine => self.match_scenario_outline_line(line),
            TokenKind::ExamplesLine => self.match_examples_line(line),
            TokenKind::StepLine => self.match_step_line(line),
            TokenKind::DocStringSeparator => self.match_doc_string_separator(line),
            TokenKind::TableRow => self.match_table_row(line),
            TokenKind::Language => return self.match_language(line),
            TokenKind::Other => Some(self.match_other(line)),
        })
    }

    #[must_use]
    pub fn match_eof(&self, line: &Line) -> Option<Token> {
        line.is_eof()
            .then(|| self.token_at(TokenKind::Eof, line, line.indent()))
    }

    #[must_use]
    pub fn match_empty(&self, line: &Line) -> Option<Token> {
        (line.is_empty() && !line.is_eof())
            .then(|| self.token_at(TokenKind::Empty, line, line.indent()))
    }

    /// Comments keep the raw line and always report column 1.
    #[must_use]
    pub fn match_comment(&self, line: &Line) -> Option<Token> {
        if !line.starts_with(COMMENT_PREFIX) {
            return None;
        }
        let mut token = self.token_at(TokenKind::Comment, line, 0);
        token.text = Some(line.text().to_string());
        Some(token)
    }

    /// Split a tag line into one span per `@tag`.
    ///
    /// Each span's column is the column of its `@`.
    #[must_use]
    pub fn match_tag_line(&self, line: &Line) -> Option<Token> {
        if !line.starts_with(TAG_PREFIX) {
            return None;
        }

        let mut tags = Vec::new();
        // Starts one short of the first `@`: the empty fragment before it
        // advances the column onto the marker. `@foo @bar  @baz` gives
        // 1, 6, 12.
        let mut column = line.indent();
        for fragment in line.trimmed_text().split(TAG_PREFIX) {
            let name = fragment.trim_matches(' ');
            if !name.is_empty() {
                tags.push(Span::new(column, format!("{TAG_PREFIX}{name}")));
            }
            column += fragment.chars().count() + 1;
        }

        let mut token = self.token_at(TokenKind::TagLine, line, line.indent());
        token.items = Some(tags);
        Some(token)
    }

    fn match_title_line(
        &self,
        line: &Line,
        kind: TokenKind,
        keywords: &[String],
    ) -> Option<Token> {
        let trimmed = line.trimmed_text();
        keywords.iter().find_map(|keyword| {
            let rest = trimmed
                .strip_prefix(keyword.as_str())?
                .strip_prefix(TITLE_KEYWORD_SEPARATOR)?;
            let mut token = self.token_at(kind, line, line.indent());
            token.keyword = Some(keyword.clone());
            token.text = Some(rest.trim_matches(' ').to_string());
            Some(token)
        })
    }

    #[must_use]
    pub fn match_feature_line(&self, line: &Line) -> Option<Token> {
        self.match_title_line(line, TokenKind::FeatureLine, self.dialect.feature_keywords())
    }

    #[must_use]
    pub fn match_background_line(&self, line: &Line) -> Option<Token> {
        self.match_title_line(line, TokenKind::BackgroundLine, self.dialect.background_keywords())
    }

    #[must_use]
    pub fn match_scenario_line(&self, line: &Line) -> Option<Token> {
        self.match_title_line(line, TokenKind::ScenarioLine, self.dialect.scenario_keywords())
    }

    #[must_use]
    pub fn match_scenario_outline_line(&self, line: &Line) -> Option<Token> {
        self.match_title_line(
            line,
            TokenKind::ScenarioOutlineLine,
            self.dialect.scenario_outline_keywords(),
        )
    }

    #[must_use]
    pub fn match_examples_line(&self, line: &Line) -> Option<Token> {
        self.match_title_line(line, TokenKind::ExamplesLine, self.dialect.examples_keywords())
    }

    /// Step keywords carry their own trailing space, so no separator is
    /// required after them.
    #[must_use]
    pub fn match_step_line(&self, line: &Line) -> Option<Token> {
        let trimmed = line.trimmed_text();
        self.dialect.step_keywords().iter().find_map(|keyword| {
            let rest = trimmed.strip_prefix(keyword.as_str())?;
            let mut token = self.token_at(TokenKind::StepLine, line, line.indent());
            token.keyword = Some(keyword.clone());
            token.text = Some(rest.trim_matches(' ').to_string());
            Some(token)
        })
    }

    /// Open or close a doc-string.
    ///
    /// While a doc-string is open only its own delimiter closes it; the
    /// other delimiter is body text.
    pub fn match_doc_string_separator(&mut self, line: &Line) -> Option<Token> {
        if let Some(active) = self.active_doc_string_separator {
            if !line.starts_with(active) {
                return None;
            }
            let token = self.token_at(TokenKind::DocStringSeparator, line, line.indent());
            debug!(line = line.line_number(), separator = active, "doc-string closed");
            self.active_doc_string_separator = None;
            self.indent_to_strip = 0;
            return Some(token);
        }

        let separator = [DOC_STRING_SEPARATOR, DOC_STRING_ALTERNATIVE_SEPARATOR]
            .into_iter()
            .find(|separator| line.starts_with(separator))?;
        let content_type = &line.trimmed_text()[separator.len()..];

        let mut token = self.token_at(TokenKind::DocStringSeparator, line, line.indent());
        token.text = Some(content_type.to_string());
        debug!(
            line = line.line_number(),
            separator,
            indent = line.indent(),
            "doc-string opened"
        );
        self.active_doc_string_separator = Some(separator);
        self.indent_to_strip = line.indent();
        Some(token)
    }

    /// Split a table row into cells.
    ///
    /// Every interior `|` separates cells; there is no escaping. Each
    /// cell's column is that of its first non-space character.
    #[must_use]
    pub fn match_table_row(&self, line: &Line) -> Option<Token> {
        let row = line.trimmed_text().strip_prefix(TABLE_CELL_SEPARATOR)?;
        let row = row.strip_suffix(TABLE_CELL_SEPARATOR).unwrap_or(row);

        let mut cells = Vec::new();
        let mut column = line.indent() + 1;
        for fragment in row.split(TABLE_CELL_SEPARATOR) {
            let leading = fragment.chars().take_while(|&c| c == ' ').count();
            cells.push(Span::new(
                column + leading + 1,
                fragment.trim_matches(' '),
            ));
            column += fragment.chars().count() + 1;
        }

        let mut token = self.token_at(TokenKind::TableRow, line, line.indent());
        token.items = Some(cells);
        Some(token)
    }

    /// Match a `# language: <code>` pragma and switch dialect.
    ///
    /// An unknown code is an error carrying the Language token, which then
    /// reports the language that stays active.
    pub fn match_language(&mut self, line: &Line) -> Result<Option<Token>, MatchError> {
        let Some(captures) = LANGUAGE_PATTERN.captures(line.trimmed_text()) else {
            return Ok(None);
        };
        let language = &captures[1];

        let Some(dialect) = self.provider.dialect(language) else {
            warn!(line = line.line_number(), language, "unsupported language");
            let mut token = self.token_at(TokenKind::Language, line, line.indent());
            token.text = Some(language.to_string());
            return Err(MatchError {
                kind: MatchErrorKind::UnsupportedLanguage(language.to_string()),
                location: token.location,
                token: Box::new(token),
            });
        };

        debug!(
            line = line.line_number(),
            from = %self.language,
            to = language,
            "language switched"
        );
        self.language = language.to_string();
        self.dialect = dialect;

        let mut token = self.token_at(TokenKind::Language, line, line.indent());
        token.text = Some(language.to_string());
        Ok(Some(token))
    }

    /// Fallback rule; always matches.
    ///
    /// Inside a doc-string up to the opening delimiter's indent of leading
    /// spaces is removed, so body text keeps its relative indentation.
    #[must_use]
    pub fn match_other(&self, line: &Line) -> Token {
        let text = line.text();
        let strip = text
            .bytes()
            .take(self.indent_to_strip)
            .take_while(|&b| b == b' ')
            .count();

        let mut token = self.token_at(TokenKind::Other, line, 0);
        token.text = Some(text[strip..].to_string());
        token
    }
}
