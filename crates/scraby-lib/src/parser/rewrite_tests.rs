use crate::parser::lexer::{lex_significant, token_text};
use crate::parser::rewrite::collapse_tags;

fn snapshot(input: &str) -> String {
    let tokens = collapse_tags(input, &lex_significant(input));
    let mut out = String::new();
    for token in tokens {
        let marker = if token.is_collapsed_tag() { " (tag)" } else { "" };
        out.push_str(&format!(
            "{:?}{} {:?}\n",
            token.kind,
            marker,
            token_text(input, &token)
        ));
    }
    out
}

#[test]
fn plain_tag() {
    insta::assert_snapshot!(snapshot("SELECT <div> FROM t"), @r#"
    KwSelect "SELECT"
    Var (tag) "<div>"
    KwFrom "FROM"
    Var "t"
    "#);
}

#[test]
fn tag_with_attributes_keeps_source_text() {
    insta::assert_snapshot!(snapshot(r#"<a href="x"  class=r"y">"#), @r#"
    Var (tag) "<a href=\"x\"  class=r\"y\">"
    "#);
}

#[test]
fn gap_after_lt_is_comparison() {
    insta::assert_snapshot!(snapshot("a < div > b"), @r#"
    Var "a"
    Lt "<"
    KwDiv "div"
    Gt ">"
    Var "b"
    "#);
}

#[test]
fn non_vocabulary_name_is_comparison() {
    insta::assert_snapshot!(snapshot("a <foo> b"), @r#"
    Var "a"
    Lt "<"
    Var "foo"
    Gt ">"
    Var "b"
    "#);
}

#[test]
fn breaking_keyword_aborts_candidate() {
    insta::assert_snapshot!(snapshot("mod<div id, mod>div"), @r#"
    Var "mod"
    Lt "<"
    KwDiv "div"
    Var "id"
    Comma ","
    Var "mod"
    Gt ">"
    KwDiv "div"
    "#);
}

#[test]
fn unclosed_candidate_is_left_alone() {
    insta::assert_snapshot!(snapshot("a <p"), @r#"
    Var "a"
    Lt "<"
    Var "p"
    "#);
}

#[test]
fn tag_followed_by_comparison() {
    insta::assert_snapshot!(snapshot("<span>>1"), @r#"
    Var (tag) "<span>"
    Gt ">"
    Number "1"
    "#);
}

#[test]
fn tags_in_dotted_path() {
    insta::assert_snapshot!(snapshot("t.<table>.<tr>"), @r#"
    Var "t"
    Dot "."
    Var (tag) "<table>"
    Dot "."
    Var (tag) "<tr>"
    "#);
}

#[test]
fn tag_name_is_case_insensitive() {
    insta::assert_snapshot!(snapshot("<DIV>"), @r#"
    Var (tag) "<DIV>"
    "#);
}

#[test]
fn input_tokens_are_untouched() {
    let input = "<p>";
    let tokens = lex_significant(input);
    let collapsed = collapse_tags(input, &tokens);
    assert_eq!(tokens.len(), 3);
    assert_eq!(collapsed.len(), 1);
}
