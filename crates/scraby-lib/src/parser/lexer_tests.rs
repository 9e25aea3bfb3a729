use crate::parser::lexer::{lex, lex_significant, token_text};

/// Format tokens without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

/// Format tokens with trivia included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, include_trivia: bool) -> String {
    let tokens = if include_trivia {
        lex(input)
    } else {
        lex_significant(input)
    };
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:?} {:?}\n",
            token.kind,
            token_text(input, &token)
        ));
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("( ) , . ; * + - / % = == <> != || :: ~"), @r#"
    ParenOpen "("
    ParenClose ")"
    Comma ","
    Dot "."
    Semicolon ";"
    Star "*"
    Plus "+"
    Minus "-"
    Slash "/"
    Percent "%"
    Eq "="
    EqEq "=="
    LtGt "<>"
    BangEq "!="
    Concat "||"
    DoubleColon "::"
    Tilde "~"
    "#);
}

#[test]
fn comparison_operators() {
    insta::assert_snapshot!(snapshot("a<b a<=b a>b a>=b"), @r#"
    Var "a"
    Lt "<"
    Var "b"
    Var "a"
    LtEq "<="
    Var "b"
    Var "a"
    Gt ">"
    Var "b"
    Var "a"
    GtEq ">="
    Var "b"
    "#);
}

#[test]
fn keywords_ignore_case() {
    insta::assert_snapshot!(snapshot("select FROM Where load Div"), @r#"
    KwSelect "select"
    KwFrom "FROM"
    KwWhere "Where"
    KwLoad "load"
    KwDiv "Div"
    "#);
}

#[test]
fn order_by_is_one_token() {
    insta::assert_snapshot!(snapshot("ORDER  BY x"), @r#"
    KwOrderBy "ORDER  BY"
    Var "x"
    "#);
}

#[test]
fn keyword_prefix_is_identifier() {
    insta::assert_snapshot!(snapshot("selected loader division"), @r#"
    Var "selected"
    Var "loader"
    Var "division"
    "#);
}

#[test]
fn literals() {
    insta::assert_snapshot!(snapshot(r#"'it''s' 42 3.14 1e3 "quoted ""name""" `tick`"#), @r#"
    StringLit "'it''s'"
    Number "42"
    Number "3.14"
    Number "1e3"
    QuotedIdent "\"quoted \"\"name\"\"\""
    QuotedIdent "`tick`"
    "#);
}

#[test]
fn tag_text_is_plain_tokens() {
    insta::assert_snapshot!(snapshot(r#"<div id="a" class=r"b">"#), @r#"
    Lt "<"
    KwDiv "div"
    Var "id"
    Eq "="
    QuotedIdent "\"a\""
    Var "class"
    Eq "="
    Var "r"
    QuotedIdent "\"b\""
    Gt ">"
    "#);
}

#[test]
fn trivia() {
    insta::assert_snapshot!(snapshot_raw("a -- note\n/* block */ b"), @r#"
    Var "a"
    Whitespace " "
    LineComment "-- note"
    Newline "\n"
    BlockComment "/* block */"
    Whitespace " "
    Var "b"
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("a #$# b"), @r##"
    Var "a"
    Garbage "#$#"
    Var "b"
    "##);
}

#[test]
fn unsupported_keywords_still_lex() {
    insta::assert_snapshot!(snapshot("GROUP BY x HAVING"), @r#"
    KwGroupBy "GROUP BY"
    Var "x"
    KwHaving "HAVING"
    "#);
}
