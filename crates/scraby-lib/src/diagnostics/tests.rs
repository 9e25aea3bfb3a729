use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn fallback_message() {
    let diag = Diagnostic::new(DiagnosticKind::UnclosedParen, range(0, 1));
    assert_eq!(diag.message, "missing closing `)`");
}

#[test]
fn detail_is_appended() {
    let diag = Diagnostic::with_detail(
        DiagnosticKind::BadLoadArguments,
        range(0, 6),
        "expected 1 or 2 arguments, found 0",
    );
    insta::assert_snapshot!(diag.message, @"bad arguments for LOAD: expected 1 or 2 arguments, found 0");
}

#[test]
fn kinds_map_to_classes() {
    assert_eq!(DiagnosticKind::UnsupportedToken.class(), ErrorClass::Lexical);
    assert_eq!(DiagnosticKind::UnrecognizedInput.class(), ErrorClass::Lexical);
    assert_eq!(DiagnosticKind::BadLoadArguments.class(), ErrorClass::Syntax);
    assert_eq!(DiagnosticKind::MalformedTagAttributes.class(), ErrorClass::Syntax);
    assert_eq!(DiagnosticKind::BadArgumentType.class(), ErrorClass::Type);
    assert_eq!(DiagnosticKind::UnknownTag.class(), ErrorClass::Construction);
}

#[test]
fn display_includes_range() {
    let diag = Diagnostic::new(DiagnosticKind::ExpectedExpression, range(7, 11));
    assert_eq!(diag.to_string(), "expected an expression at 7..11");
}

#[test]
fn printer_without_source_falls_back_to_display() {
    let diag = Diagnostic::new(DiagnosticKind::ExpectedExpression, range(7, 11));
    assert_eq!(diag.printer().render(), "expected an expression at 7..11");
}

#[test]
fn printer_annotates_source() {
    let diag = Diagnostic::new(DiagnosticKind::UnclosedParen, range(0, 5));
    let result = diag.printer().source("hello world!").render();
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`
      |
    1 | hello world!
      | ^^^^^
    ");
}

#[test]
fn serializes_range_as_offsets() {
    let diag = Diagnostic::new(DiagnosticKind::UnknownTag, range(2, 9));
    let json = serde_json::to_string(&diag).unwrap();
    insta::assert_snapshot!(json, @r#"{"kind":"UnknownTag","range":{"start":2,"end":9},"message":"unknown tag"}"#);
}
