//! Renders the syntax tree back to dialect text.
//!
//! Output is normalized: upper-case keywords, single spaces, `, ` separators, and
//! canonical quoting. Parsing the rendered text yields the same tree up to spans.

use std::fmt::{self, Display, Formatter, Write};

use crate::parser::ast::{
    Column, Expr, FunctionCall, Ident, JoinKind, Literal, LiteralKind, LoadPage, Name,
    Projection, RowSource, Select, SetStmt, Source, Statement, Tag, TagAttr, UnaryOp,
};

pub fn render(statement: &Statement) -> String {
    statement.to_string()
}

/// Statements joined with `; `.
pub fn render_all(statements: &[Statement]) -> String {
    let mut out = String::new();
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        write!(out, "{}", statement).expect("String write never fails");
    }
    out
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(select) => select.fmt(f),
            Statement::Set(set) => set.fmt(f),
        }
    }
}

impl Display for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        write_list(f, &self.projections)?;

        if let Some(from) = &self.from {
            write!(f, " FROM {}", from)?;
        }
        for join in &self.joins {
            match join.kind {
                JoinKind::Comma => write!(f, ", {}", join.source)?,
                JoinKind::Join => write!(f, " JOIN {}", join.source)?,
            }
        }
        if let Some(filter) = &self.where_clause {
            write!(f, " WHERE {}", filter)?;
        }
        if !self.order_by.is_empty() {
            f.write_str(" ORDER BY ")?;
            write_list(f, &self.order_by)?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {}", limit)?;
        }
        Ok(())
    }
}

impl Display for SetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SET {} = {}", self.name, self.value)
    }
}

impl Display for Projection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.expr.fmt(f)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {}", alias)?;
        }
        Ok(())
    }
}

impl Display for RowSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Table(path) => path.fmt(f)?,
            Source::Load(load) => load.fmt(f)?,
            Source::Subquery(select) => write!(f, "({})", select)?,
        }
        if let Some(alias) = &self.alias {
            write!(f, " AS {}", alias)?;
        }
        Ok(())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => lit.fmt(f),
            Expr::Column(column) => column.fmt(f),
            Expr::Star(_) => f.write_str("*"),
            Expr::Function(call) => call.fmt(f),
            Expr::LoadPage(load) => load.fmt(f),
            Expr::Dot { base, field } => write!(f, "{}.{}", base, field),
            // `- -1`: two adjacent minus signs would read back as a line comment
            Expr::Unary {
                op: UnaryOp::Neg,
                operand,
                ..
            } if matches!(operand.as_ref(), Expr::Unary { op: UnaryOp::Neg, .. }) => {
                write!(f, "- {}", operand)
            }
            Expr::Unary { op, operand, .. } => write!(f, "{}{}", op.as_str(), operand),
            Expr::Binary { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op.as_str(), rhs),
            Expr::Paren(inner, _) => write!(f, "({})", inner),
            Expr::Subquery(select, _) => write!(f, "({})", select),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralKind::String => write!(f, "'{}'", self.value.replace('\'', "''")),
            LiteralKind::Number => f.write_str(&self.value),
        }
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}\"", self.text.replace('"', "\"\""))
        } else {
            f.write_str(&self.text)
        }
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Name(name) => name.fmt(f),
            Ident::Tag(tag) => tag.fmt(f),
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            part.fmt(f)?;
        }
        Ok(())
    }
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.args)?;
        f.write_str(")")
    }
}

impl Display for TagAttr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_regex { "r" } else { "" };
        write!(f, "{}={}\"{}\"", self.name, prefix, self.value)
    }
}

/// `<name attr="value" ...>`
impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attr in &self.attributes {
            write!(f, " {}", attr)?;
        }
        f.write_str(">")
    }
}

/// The page count is written only when it limits the crawl.
impl Display for LoadPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.limits_pages() {
            write!(f, "LOAD({}, {})", self.url, self.pages)
        } else {
            write!(f, "LOAD({})", self.url)
        }
    }
}
