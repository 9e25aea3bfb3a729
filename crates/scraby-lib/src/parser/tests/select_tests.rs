use super::{dump, fmt};
use crate::parser::parse;

#[test]
fn full_select() {
    let input = "select a, b as c from t where a > 1 order by a, b limit 10";

    insta::assert_snapshot!(dump(input), @r"
    Select
      Projection
        Column
          Name a
      Projection AS c
        Column
          Name b
      From
        Table
          Name t
      Where
        Binary >
          Column
            Name a
          Number 1
      OrderBy
        Column
          Name a
        Column
          Name b
      Limit
        Number 10
    ");
    insta::assert_snapshot!(fmt(input), @"SELECT a, b AS c FROM t WHERE a > 1 ORDER BY a, b LIMIT 10");
}

#[test]
fn select_without_from() {
    insta::assert_snapshot!(dump("SELECT 1"), @r"
    Select
      Projection
        Number 1
    ");
}

#[test]
fn implicit_alias() {
    insta::assert_snapshot!(fmt("SELECT a b FROM t u"), @"SELECT a AS b FROM t AS u");
}

#[test]
fn quoted_names() {
    insta::assert_snapshot!(fmt(r#"SELECT "my col", `other` FROM "t""x""#), @r#"SELECT "my col", "other" FROM "t""x""#);
}

#[test]
fn string_literal_escapes() {
    insta::assert_snapshot!(dump("SELECT 'it''s'"), @r"
    Select
      Projection
        String 'it''s'
    ");

    let statements = parse("SELECT 'it''s'").unwrap();
    let crate::Statement::Select(select) = &statements[0] else {
        panic!("expected SELECT");
    };
    let crate::Expr::Literal(lit) = &select.projections[0].expr else {
        panic!("expected literal");
    };
    assert_eq!(lit.value, "it's");
}

#[test]
fn joins() {
    insta::assert_snapshot!(dump("SELECT * FROM a, b JOIN c.d"), @r"
    Select
      Projection
        Star
      From
        Table
          Name a
      Join ,
        Table
          Name b
      Join
        Table
          Name c
          Name d
    ");
}

#[test]
fn subquery_source() {
    insta::assert_snapshot!(fmt("SELECT s.a FROM (SELECT a FROM t) s"), @"SELECT s.a FROM (SELECT a FROM t) AS s");
}

#[test]
fn subquery_expression() {
    insta::assert_snapshot!(dump("SELECT (SELECT 1)"), @r"
    Select
      Projection
        Subquery
          Select
            Projection
              Number 1
    ");
}

#[test]
fn precedence() {
    insta::assert_snapshot!(dump("SELECT 1 + 2 * 3 = 7"), @r"
    Select
      Projection
        Binary =
          Binary +
            Number 1
            Binary *
              Number 2
              Number 3
          Number 7
    ");
}

#[test]
fn left_associative() {
    insta::assert_snapshot!(dump("SELECT 1 - 2 - 3"), @r"
    Select
      Projection
        Binary -
          Binary -
            Number 1
            Number 2
          Number 3
    ");
}

#[test]
fn parens_are_kept() {
    insta::assert_snapshot!(fmt("SELECT (1+2)*3"), @"SELECT (1 + 2) * 3");
}

#[test]
fn unary_operators() {
    insta::assert_snapshot!(dump("SELECT -a.b * ~1"), @r"
    Select
      Projection
        Binary *
          Unary -
            Column
              Name a
              Name b
          Unary ~
            Number 1
    ");
}

#[test]
fn double_negation_renders_apart() {
    insta::assert_snapshot!(fmt("SELECT - -1"), @"SELECT - -1");
}

#[test]
fn operator_spellings_normalize() {
    insta::assert_snapshot!(fmt("SELECT a == b, a != b, a || b, a DIV b, a % b"), @"SELECT a = b, a <> b, a || b, a DIV b, a % b");
}

#[test]
fn function_call() {
    insta::assert_snapshot!(dump("SELECT count(*), lower(a, 'x') FROM t"), @r"
    Select
      Projection
        Function count
          Star
      Projection
        Function lower
          Column
            Name a
          String 'x'
      From
        Table
          Name t
    ");
}

#[test]
fn div_as_name_and_operator() {
    insta::assert_snapshot!(dump("SELECT div, 4 div 2"), @r"
    Select
      Projection
        Column
          Name div
      Projection
        Binary DIV
          Number 4
          Number 2
    ");
}

#[test]
fn set_statement() {
    insta::assert_snapshot!(dump("SET limit_pages = 5"), @r"
    Set limit_pages
      Number 5
    ");
}

#[test]
fn multiple_statements() {
    let statements = parse("SET a = 1;; SELECT a;").unwrap();
    assert_eq!(statements.len(), 2);
    insta::assert_snapshot!(fmt("SET a = 1;; SELECT a;"), @"SET a = 1; SELECT a");
}

#[test]
fn empty_input() {
    assert_eq!(parse("").unwrap(), vec![]);
    assert_eq!(parse(" ; -- nothing\n").unwrap(), vec![]);
}

#[test]
fn comments_are_ignored() {
    insta::assert_snapshot!(fmt("SELECT a -- first\n, /* second */ b"), @"SELECT a, b");
}

#[test]
fn spans() {
    let statements = parse("SELECT a FROM t").unwrap();
    let dumped = crate::dump::AstPrinter::new(&statements).with_spans(true).dump();
    insta::assert_snapshot!(dumped, @r"
    Select [0..15]
      Projection
        Column [7..8]
          Name a [7..8]
      From
        Table [14..15]
          Name t [14..15]
    ");
}
