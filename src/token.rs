use std::fmt;

/// Source position of a token, 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Column-anchored fragment of a line: one tag or one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub column: usize,
    pub text: String,
}

impl Span {
    #[must_use]
    pub fn new(column: usize, text: impl Into<String>) -> Self {
        Self {
            column,
            text: text.into(),
        }
    }
}

/// Token kinds produced by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Synthetic end-of-input line.
    Eof,
    /// Blank line.
    Empty,
    /// Comment (`# ...`).
    Comment,
    /// One or more `@tags`.
    TagLine,
    /// `Feature: title`.
    FeatureLine,
    /// `Background: title`.
    BackgroundLine,
    /// `Scenario: title`.
    ScenarioLine,
    /// `Scenario Outline: title`.
    ScenarioOutlineLine,
    /// `Examples: title`.
    ExamplesLine,
    /// `Given ...`, `When ...` and friends.
    StepLine,
    /// Doc-string delimiter (`"""` or `` ``` ``).
    DocStringSeparator,
    /// `| cell | cell |`.
    TableRow,
    /// `# language: code` pragma.
    Language,
    /// Anything else, including doc-string bodies.
    Other,
}

impl TokenKind {
    /// Name used by the token fixture format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Empty => "Empty",
            Self::Comment => "Comment",
            Self::TagLine => "TagLine",
            Self::FeatureLine => "FeatureLine",
            Self::BackgroundLine => "BackgroundLine",
            Self::ScenarioLine => "ScenarioLine",
            Self::ScenarioOutlineLine => "ScenarioOutlineLine",
            Self::ExamplesLine => "ExamplesLine",
            Self::StepLine => "StepLine",
            Self::DocStringSeparator => "DocStringSeparator",
            Self::TableRow => "TableRow",
            Self::Language => "Language",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single matched line.
///
/// `kind` decides which optional fields carry meaning: `keyword` is set
/// for title and step lines, `items` for tag lines and table rows, and
/// `text` for everything that has a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
    /// Active language code when the token was emitted.
    pub language: String,
    pub keyword: Option<String>,
    pub text: Option<String>,
    pub items: Option<Vec<Span>>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, location: Location, language: &str) -> Self {
        Self {
            kind,
            location,
            language: language.to_string(),
            keyword: None,
            text: None,
            items: None,
        }
    }

    /// Span items, empty for kinds that carry none.
    #[must_use]
    pub fn items(&self) -> &[Span] {
        self.items.as_deref().unwrap_or_default()
    }
}
