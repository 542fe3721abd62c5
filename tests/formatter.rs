//! Token fixture rendering for every payload shape.

use gherkin_matcher::{BuiltinDialects, Line, Matcher, format, format_token};
use pretty_assertions::assert_eq;

#[test]
fn tag_line_items() {
    let d = BuiltinDialects::new();
    let m = Matcher::new(&d).expect("matcher");
    let token = m
        .match_tag_line(&Line::new(2, "  @smoke @wip"))
        .expect("tag line");
    assert_eq!(format_token(&token), "(2:3)TagLine://3:@smoke,10:@wip");
}

#[test]
fn doc_string_open_and_close() {
    let d = BuiltinDialects::new();
    let mut m = Matcher::new(&d).expect("matcher");
    let open = m
        .match_doc_string_separator(&Line::new(5, "    ```json"))
        .expect("open");
    let close = m
        .match_doc_string_separator(&Line::new(7, "    ```"))
        .expect("close");
    assert_eq!(format_token(&open), "(5:5)DocStringSeparator:/json/");
    assert_eq!(format_token(&close), "(7:5)DocStringSeparator://");
}

#[test]
fn language_and_comment() {
    let d = BuiltinDialects::new();
    let mut m = Matcher::new(&d).expect("matcher");
    let language = m
        .match_language(&Line::new(1, "# language: de"))
        .expect("supported")
        .expect("pragma");
    let comment = m
        .match_comment(&Line::new(2, "  # Kommentar"))
        .expect("comment");
    assert_eq!(format_token(&language), "(1:1)Language:/de/");
    assert_eq!(format_token(&comment), "(2:1)Comment:/  # Kommentar/");
}

#[test]
fn title_and_step() {
    let d = BuiltinDialects::new();
    let m = Matcher::new(&d).expect("matcher");
    let feature = m
        .match_feature_line(&Line::new(1, "Feature: Pay"))
        .expect("feature");
    let step = m
        .match_step_line(&Line::new(3, "    And more"))
        .expect("step");
    assert_eq!(
        format(&[feature, step]),
        "(1:1)FeatureLine:Feature/Pay/\n(3:5)StepLine:And /more/\n"
    );
}

#[test]
fn empty_stream_formats_to_nothing() {
    assert_eq!(format(&[]), "");
}
