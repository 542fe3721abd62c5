/// One physical input line as seen by the matcher.
///
/// Indentation is counted in `char`s so that columns line up with what an
/// editor shows, even when the line contains multi-byte text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    line_number: usize,
    text: String,
    indent: usize,
    eof: bool,
}

impl Line {
    /// Wrap the raw text of a line. `line_number` is 1-based.
    #[must_use]
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let indent = text.chars().take_while(|c| c.is_whitespace()).count();
        Self {
            line_number,
            text,
            indent,
            eof: false,
        }
    }

    /// The synthetic line that follows the last real one.
    #[must_use]
    pub const fn eof(line_number: usize) -> Self {
        Self {
            line_number,
            text: String::new(),
            indent: 0,
            eof: true,
        }
    }

    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Raw text, untrimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text with leading and trailing whitespace removed.
    #[must_use]
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Number of leading whitespace characters.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indent
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.eof
    }

    /// True for blank lines. The EOF line is not considered empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.eof && self.trimmed_text().is_empty()
    }

    /// Prefix test against the trimmed text.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.trimmed_text().starts_with(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_counts_chars() {
        let line = Line::new(1, "\t  Given x");
        assert_eq!(line.indent(), 3);
        assert_eq!(line.trimmed_text(), "Given x");
    }

    #[test]
    fn blank_line_is_empty() {
        assert!(Line::new(4, "   \t").is_empty());
        assert!(!Line::new(4, " a ").is_empty());
    }

    #[test]
    fn eof_line() {
        let line = Line::eof(9);
        assert!(line.is_eof());
        assert!(!line.is_empty());
        assert_eq!(line.line_number(), 9);
        assert_eq!(line.indent(), 0);
    }

    #[test]
    fn starts_with_ignores_indent() {
        let line = Line::new(1, "    @tag");
        assert!(line.starts_with("@"));
        assert!(!Line::new(1, "x @tag").starts_with("@"));
    }
}
