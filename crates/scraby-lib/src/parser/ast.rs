//! Owned syntax tree for the dialect.
//!
//! Standard SQL nodes plus the two dialect nodes: [`Tag`] (an HTML element reference
//! in identifier position) and [`LoadPage`] (a `LOAD(url, pages)` row source or value).
//! Nodes keep the source range they were parsed from.

use rowan::{TextRange, TextSize};
use scraby_core::HtmlTag;
use serde::Serialize;

use crate::diagnostics::{Diagnostic, DiagnosticKind, serialize_text_range};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement {
    Select(Box<Select>),
    Set(SetStmt),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Select {
    pub projections: Vec<Projection>,
    pub from: Option<RowSource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<Join>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Expr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Expr>,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

/// `SET name = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetStmt {
    pub name: Name,
    pub value: Expr,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

/// One item of the SELECT list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub expr: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Name>,
}

/// Something rows come from, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSource {
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Source {
    Table(Column),
    Load(LoadPage),
    Subquery(Box<Select>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JoinKind {
    /// `FROM a, b`
    Comma,
    /// `FROM a JOIN b`
    Join,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Join {
    pub kind: JoinKind,
    pub source: RowSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    Literal(Literal),
    Column(Column),
    Star(#[serde(serialize_with = "serialize_text_range")] TextRange),
    Function(FunctionCall),
    LoadPage(Box<LoadPage>),
    /// Navigation into the result of a non-column expression: `LOAD(...).item`
    Dot {
        base: Box<Expr>,
        field: Ident,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        #[serde(serialize_with = "serialize_text_range")]
        span: TextRange,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Paren(Box<Expr>, #[serde(serialize_with = "serialize_text_range")] TextRange),
    Subquery(Box<Select>, #[serde(serialize_with = "serialize_text_range")] TextRange),
}

impl Expr {
    pub fn span(&self) -> TextRange {
        match self {
            Expr::Literal(lit) => lit.span,
            Expr::Column(col) => col.span(),
            Expr::Star(span) => *span,
            Expr::Function(call) => call.span,
            Expr::LoadPage(load) => load.span,
            Expr::Dot { base, field } => base.span().cover(field.span()),
            Expr::Unary { span, .. } => *span,
            Expr::Binary { lhs, rhs, .. } => lhs.span().cover(rhs.span()),
            Expr::Paren(_, span) | Expr::Subquery(_, span) => *span,
        }
    }

    /// The innermost literal of a literal or a signed literal (`-1`, `+2`).
    pub fn as_signed_literal(&self) -> Option<&Literal> {
        match self {
            Expr::Literal(lit) => Some(lit),
            Expr::Unary {
                op: UnaryOp::Neg | UnaryOp::Plus,
                operand,
                ..
            } => match operand.as_ref() {
                Expr::Literal(lit) => Some(lit),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Neg,
    Plus,
    BitNot,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::BitNot => "~",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    IntDiv,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Concat => "||",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::IntDiv => "DIV",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiteralKind {
    String,
    Number,
}

/// String or numeric literal. String values are stored unquoted and unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: String,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

impl Literal {
    pub fn string(value: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind: LiteralKind::String,
            value: value.into(),
            span,
        }
    }

    pub fn number(value: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind: LiteralKind::Number,
            value: value.into(),
            span,
        }
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        self.kind == LiteralKind::String
    }
}

/// Plain or quoted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    pub text: String,
    pub quoted: bool,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

/// Anything allowed in identifier position: a name or a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Ident {
    Name(Name),
    Tag(Tag),
}

impl Ident {
    pub fn span(&self) -> TextRange {
        match self {
            Ident::Name(name) => name.span,
            Ident::Tag(tag) => tag.span,
        }
    }

    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Ident::Tag(tag) => Some(tag),
            Ident::Name(_) => None,
        }
    }
}

/// Dotted reference: `a`, `t.a`, `<div>.title`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub parts: Vec<Ident>,
}

impl Column {
    pub fn span(&self) -> TextRange {
        let first = self.parts.first().map(Ident::span);
        let last = self.parts.last().map(Ident::span);
        match (first, last) {
            (Some(first), Some(last)) => first.cover(last),
            _ => TextRange::empty(TextSize::from(0)),
        }
    }

    /// Tags anywhere in the path.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.parts.iter().filter_map(Ident::as_tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCall {
    pub name: Name,
    pub args: Vec<Expr>,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

/// One `name="value"` pair of a tag. `is_regex` is set for `name=r"value"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagAttr {
    pub name: String,
    pub value: String,
    pub is_regex: bool,
}

impl TagAttr {
    pub fn new(name: impl Into<String>, value: impl Into<String>, is_regex: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_regex,
        }
    }
}

/// HTML element reference, e.g. `<div id="main" class=r"item_\d+">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: HtmlTag,
    pub attributes: Vec<TagAttr>,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

impl Tag {
    pub fn new(name: HtmlTag, attributes: Vec<TagAttr>, span: TextRange) -> Self {
        Self {
            name,
            attributes,
            span,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&TagAttr> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// `LOAD(url)` / `LOAD(url, pages)`.
///
/// `url` is always a string literal; `pages` is a numeric literal, possibly signed.
/// A missing page count is stored as the literal `-1` (all pages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadPage {
    pub url: Literal,
    pub pages: Expr,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

impl LoadPage {
    /// Validates `LOAD` call arguments and builds the node.
    pub fn from_args(args: Vec<Expr>, span: TextRange) -> Result<Self, Diagnostic> {
        if !(1..=2).contains(&args.len()) {
            return Err(Diagnostic::with_detail(
                DiagnosticKind::BadLoadArguments,
                span,
                format!("expected 1 or 2 arguments, found {}", args.len()),
            ));
        }

        let mut args = args.into_iter();
        let url = args.next().expect("arity checked above");
        let pages = args
            .next()
            .unwrap_or_else(|| unbounded_pages(TextRange::empty(span.end())));

        let url = match url {
            Expr::Literal(lit) if lit.is_string() => lit,
            other => {
                return Err(Diagnostic::with_detail(
                    DiagnosticKind::BadArgumentType,
                    other.span(),
                    "LOAD url must be a string literal",
                ));
            }
        };

        match pages.as_signed_literal() {
            Some(lit) if !lit.is_string() => {}
            _ => {
                return Err(Diagnostic::with_detail(
                    DiagnosticKind::BadArgumentType,
                    pages.span(),
                    "LOAD page count must be a numeric literal",
                ));
            }
        }

        Ok(Self { url, pages, span })
    }

    /// Page limit when the page count is a positive integer that fits in `u64`.
    ///
    /// `None` means "all pages" or a count too large to represent.
    pub fn page_limit(&self) -> Option<u64> {
        positive_integer_text(&self.pages)?.parse::<u64>().ok()
    }

    /// Whether the page count is a positive integer of any size.
    /// Only such counts are written back when rendering.
    pub fn limits_pages(&self) -> bool {
        positive_integer_text(&self.pages).is_some()
    }
}

/// The default page count: `-1`.
fn unbounded_pages(span: TextRange) -> Expr {
    Expr::Unary {
        op: UnaryOp::Neg,
        operand: Box::new(Expr::Literal(Literal::number("1", span))),
        span,
    }
}

/// Digits of a page count greater than zero: `3`, `+3`, `007`.
fn positive_integer_text(pages: &Expr) -> Option<&str> {
    let lit = pages.as_signed_literal()?;
    if matches!(pages, Expr::Unary { op: UnaryOp::Neg, .. }) {
        return None;
    }
    let digits = lit.value.as_str();
    let is_integer = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
    let is_zero = digits.bytes().all(|b| b == b'0');
    (is_integer && !is_zero).then_some(digits)
}
