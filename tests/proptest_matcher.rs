//! Property-based tests with proptest.
//!
//! Generate tag lines and table rows with random padding and check that
//! every reported column points back at the text it describes.

use gherkin_matcher::{BuiltinDialects, Line, Matcher, scan_line};
use proptest::prelude::*;

fn char_at(text: &str, column: usize) -> Option<char> {
    text.chars().nth(column - 1)
}

/// Indent, then tag names separated by 1-3 spaces.
fn tag_line() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        " {0,4}",
        prop::collection::vec(("[a-zA-Z0-9_]{1,8}", " {1,3}"), 1..=5),
    )
        .prop_map(|(indent, tags)| {
            let mut line = indent;
            let mut names = Vec::new();
            for (name, gap) in tags {
                line.push('@');
                line.push_str(&name);
                line.push_str(&gap);
                names.push(format!("@{name}"));
            }
            (line, names)
        })
}

/// Indent, then `|`-delimited cells with random padding.
fn table_row() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        " {0,4}",
        prop::collection::vec((" {0,3}", "[a-zé0-9]{1,6}", " {0,3}"), 1..=5),
    )
        .prop_map(|(indent, cells)| {
            let mut line = indent;
            line.push('|');
            let mut values = Vec::new();
            for (left, value, right) in cells {
                line.push_str(&left);
                line.push_str(&value);
                line.push_str(&right);
                line.push('|');
                values.push(value);
            }
            (line, values)
        })
}

proptest! {
    #[test]
    fn tag_columns_point_at_markers((text, names) in tag_line()) {
        let dialects = BuiltinDialects::new();
        let matcher = Matcher::new(&dialects).expect("matcher");
        let token = matcher.match_tag_line(&Line::new(1, text.as_str())).expect("tag line");
        let items = token.items();
        prop_assert_eq!(items.len(), names.len());
        for (item, name) in items.iter().zip(&names) {
            prop_assert_eq!(&item.text, name);
            let found: String = text.chars().skip(item.column - 1).take(name.chars().count()).collect();
            prop_assert_eq!(&found, name);
        }
    }

    #[test]
    fn cell_columns_point_at_content((text, values) in table_row()) {
        let dialects = BuiltinDialects::new();
        let matcher = Matcher::new(&dialects).expect("matcher");
        let token = matcher.match_table_row(&Line::new(1, text.as_str())).expect("table row");
        let items = token.items();
        prop_assert_eq!(items.len(), values.len());
        for (item, value) in items.iter().zip(&values) {
            prop_assert_eq!(&item.text, value);
            prop_assert_eq!(char_at(&text, item.column), value.chars().next());
        }
    }

    #[test]
    fn scanning_is_repeatable(text in "[ \t]{0,3}[@|#\"`A-Za-z: ]{0,20}") {
        let dialects = BuiltinDialects::new();
        let line = Line::new(3, text.as_str());
        let mut first = Matcher::new(&dialects).expect("matcher");
        let mut second = Matcher::new(&dialects).expect("matcher");
        prop_assert_eq!(scan_line(&mut first, &line), scan_line(&mut second, &line));
    }

    #[test]
    fn other_never_loses_content(text in "[ ]{0,8}[a-z]{0,5}", indent in 0usize..8) {
        let dialects = BuiltinDialects::new();
        let mut matcher = Matcher::new(&dialects).expect("matcher");
        let open = format!("{}\"\"\"", " ".repeat(indent));
        matcher.match_doc_string_separator(&Line::new(1, open.as_str())).expect("open");
        let token = matcher.match_other(&Line::new(2, text.as_str()));
        let body = token.text.expect("other has text");
        prop_assert!(text.ends_with(&body));
        prop_assert!(text.len() - body.len() <= indent);
        prop_assert_eq!(body.trim_start(), text.trim_start());
    }
}
