//! Dialect-aware line matcher for Gherkin.
//!
//! Turns one line of `.feature` source at a time into a typed [`Token`],
//! resolving keywords against the active [`Dialect`]. A [`Matcher`] keeps
//! the state that spans lines: the dialect chosen by a `# language:`
//! pragma and whether a doc-string is open.
//!
//! # Quick start
//!
//! ## Tokenize a document
//!
//! ```
//! use gherkin_matcher::{BuiltinDialects, TokenKind, tokenize};
//!
//! let dialects = BuiltinDialects::new();
//! let input = "Feature: Login\n  Scenario: ok\n    Given a user\n";
//! let tokens = tokenize(&dialects, input).unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::FeatureLine);
//! assert_eq!(tokens[2].keyword.as_deref(), Some("Given "));
//! assert_eq!(tokens[3].kind, TokenKind::Eof);
//! ```
//!
//! ## Drive the rules yourself
//!
//! ```
//! use gherkin_matcher::{BuiltinDialects, Line, Matcher};
//!
//! let dialects = BuiltinDialects::new();
//! let mut matcher = Matcher::new(&dialects).unwrap();
//! matcher.match_language(&Line::new(1, "# language: fr")).unwrap();
//! let step = matcher.match_step_line(&Line::new(2, "Soit un utilisateur")).unwrap();
//! assert_eq!(step.text.as_deref(), Some("un utilisateur"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod dialect;
pub mod formatter;
pub mod line;
pub mod matcher;
pub mod scanner;
pub mod token;

pub use dialect::{BuiltinDialects, DEFAULT_LANGUAGE, Dialect, DialectProvider, UnknownDialect};
pub use formatter::{format, format_token};
pub use line::Line;
pub use matcher::{MatchError, MatchErrorKind, Matcher};
pub use scanner::{lines, scan, scan_line, tokenize};
pub use token::{Location, Span, Token, TokenKind};

/// Unified error type covering matcher construction and matching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The provider has no dialect for the starting language.
    #[error("{0}")]
    Dialect(#[from] UnknownDialect),
    /// A line failed to match.
    #[error("{0}")]
    Match(#[from] MatchError),
}
