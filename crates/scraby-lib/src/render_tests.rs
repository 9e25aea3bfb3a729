use crate::parser::ast::{Expr, Literal, LoadPage, Statement};
use crate::{parse, render, render_all};

/// Parses, renders, and checks the rendering is a fixed point.
fn roundtrip(input: &str) -> String {
    let first = render_all(&parse(input).unwrap());
    let second = render_all(&parse(&first).unwrap_or_else(|e| panic!("`{first}` failed: {e}")));
    assert_eq!(first, second, "rendering is not stable");
    first
}

/// Trees equal up to spans: compare their renderings and dumps.
fn same_tree(a: &str, b: &str) {
    let a = parse(a).unwrap();
    let b = parse(b).unwrap();
    assert_eq!(
        crate::dump::AstPrinter::new(&a).dump(),
        crate::dump::AstPrinter::new(&b).dump()
    );
}

#[test]
fn keywords_upper_case() {
    insta::assert_snapshot!(roundtrip("select a from t where b = 1 order by a limit 2"), @"SELECT a FROM t WHERE b = 1 ORDER BY a LIMIT 2");
}

#[test]
fn whitespace_normalized() {
    insta::assert_snapshot!(roundtrip("SELECT\n  a ,b\nFROM\tt"), @"SELECT a, b FROM t");
}

#[test]
fn tags_roundtrip() {
    let input = r#"SELECT <div id="main" class=r"item_\d+">.<span> AS v FROM LOAD('https://example.org', 3) p"#;
    insta::assert_snapshot!(roundtrip(input), @r#"SELECT <div id="main" class=r"item_\d+">.<span> AS v FROM LOAD('https://example.org', 3) AS p"#);
    same_tree(input, &roundtrip(input));
}

#[test]
fn string_quotes_are_escaped() {
    insta::assert_snapshot!(roundtrip("SELECT 'a''b', \"x\"\"y\""), @r#"SELECT 'a''b', "x""y""#);
}

#[test]
fn load_value_navigation() {
    let input = "SELECT LOAD('u', 1).tag_1.tag_2 AS b";
    insta::assert_snapshot!(roundtrip(input), @"SELECT LOAD('u', 1).tag_1.tag_2 AS b");
    same_tree(input, &roundtrip(input));
}

#[test]
fn nested_subqueries() {
    insta::assert_snapshot!(roundtrip("select (select max(x) from (select x from t) s) m"), @"SELECT (SELECT max(x) FROM (SELECT x FROM t) AS s) AS m");
}

#[test]
fn render_single_statement() {
    let statements = parse("SET pages = -1").unwrap();
    assert_eq!(render(&statements[0]), "SET pages = -1");
}

#[test]
fn render_all_empty() {
    assert_eq!(render_all(&[]), "");
}

#[test]
fn built_load_page_renders() {
    let span = rowan::TextRange::default();
    let url = Expr::Literal(Literal::string("https://example.org", span));
    let load = LoadPage::from_args(vec![url], span).unwrap();
    assert_eq!(load.to_string(), "LOAD('https://example.org')");

    let url = Expr::Literal(Literal::string("u", span));
    let pages = Expr::Literal(Literal::number("5", span));
    let load = LoadPage::from_args(vec![url, pages], span).unwrap();
    assert_eq!(load.to_string(), "LOAD('u', 5)");
}

#[test]
fn statement_display_matches_render() {
    let statements = parse("SELECT 1 + 2").unwrap();
    let Statement::Select(select) = &statements[0] else {
        panic!("expected SELECT");
    };
    assert_eq!(select.to_string(), render(&statements[0]));
}

#[test]
fn large_page_count_survives() {
    insta::assert_snapshot!(roundtrip("SELECT LOAD('u', 123456789012345678901234567890)"), @"SELECT LOAD('u', 123456789012345678901234567890)");
}
