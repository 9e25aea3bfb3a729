use crate::diagnostics::DiagnosticKind;
use crate::parser::guard::check_tokens;
use crate::parser::lexer::lex_significant;

fn check(input: &str) -> Result<(), String> {
    check_tokens(input, &lex_significant(input)).map_err(|d| d.to_string())
}

#[test]
fn dialect_keywords_pass() {
    let input = "SET x = 1; SELECT a AS b FROM t JOIN u, v WHERE a > 1 ORDER BY a LIMIT 5";
    assert_eq!(check(input), Ok(()));
}

#[test]
fn load_and_div_pass() {
    assert_eq!(check("SELECT a div 2 FROM LOAD('u', 1)"), Ok(()));
}

#[test]
fn copy_is_admitted_by_the_guard() {
    assert_eq!(check("COPY"), Ok(()));
}

#[test]
fn unsupported_keyword() {
    insta::assert_snapshot!(check("SELECT a FROM t GROUP BY a").unwrap_err(), @"unsupported token: keyword `GROUP BY` at 16..24");
}

#[test]
fn first_offender_wins() {
    insta::assert_snapshot!(check("SELECT NOT a AND b").unwrap_err(), @"unsupported token: keyword `NOT` at 7..10");
}

#[test]
fn unrecognized_input() {
    let tokens = lex_significant("SELECT #");
    let diag = check_tokens("SELECT #", &tokens).unwrap_err();
    assert_eq!(diag.kind, DiagnosticKind::UnrecognizedInput);
    assert_eq!(diag.message, "unrecognized input: `#`");
}

#[test]
fn keyword_inside_tag_text_is_caught() {
    let err = check(r#"SELECT <div id="a" and> FROM t"#).unwrap_err();
    assert!(err.starts_with("unsupported token: keyword `and`"), "{err}");
}
