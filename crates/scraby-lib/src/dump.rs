//! Indented tree dump of parsed statements, for inspection and snapshot tests.

use std::fmt::Write;

use rowan::TextRange;

use crate::parser::ast::{
    Expr, Ident, JoinKind, LiteralKind, LoadPage, Projection, RowSource, Select, Source,
    Statement, Tag,
};

pub struct AstPrinter<'a> {
    statements: &'a [Statement],
    spans: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(statements: &'a [Statement]) -> Self {
        Self {
            statements,
            spans: false,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for statement in self.statements {
            self.format_statement(statement, 0, w)?;
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if self.spans {
            format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
        } else {
            String::new()
        }
    }

    fn line(
        &self,
        indent: usize,
        text: &str,
        range: TextRange,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        writeln!(w, "{}{}{}", "  ".repeat(indent), text, self.span_str(range))
    }

    fn format_statement(
        &self,
        statement: &Statement,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        match statement {
            Statement::Select(select) => self.format_select(select, indent, w),
            Statement::Set(set) => {
                self.line(indent, &format!("Set {}", set.name), set.span, w)?;
                self.format_expr(&set.value, indent + 1, w)
            }
        }
    }

    fn format_select(
        &self,
        select: &Select,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        self.line(indent, "Select", select.span, w)?;
        let child = indent + 1;

        for projection in &select.projections {
            self.format_projection(projection, child, w)?;
        }

        if let Some(from) = &select.from {
            writeln!(w, "{}From", "  ".repeat(child))?;
            self.format_row_source(from, child + 1, w)?;
        }

        for join in &select.joins {
            let label = match join.kind {
                JoinKind::Comma => "Join ,",
                JoinKind::Join => "Join",
            };
            writeln!(w, "{}{}", "  ".repeat(child), label)?;
            self.format_row_source(&join.source, child + 1, w)?;
        }

        if let Some(filter) = &select.where_clause {
            writeln!(w, "{}Where", "  ".repeat(child))?;
            self.format_expr(filter, child + 1, w)?;
        }

        if !select.order_by.is_empty() {
            writeln!(w, "{}OrderBy", "  ".repeat(child))?;
            for key in &select.order_by {
                self.format_expr(key, child + 1, w)?;
            }
        }

        if let Some(limit) = &select.limit {
            writeln!(w, "{}Limit", "  ".repeat(child))?;
            self.format_expr(limit, child + 1, w)?;
        }
        Ok(())
    }

    fn format_projection(
        &self,
        projection: &Projection,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        match &projection.alias {
            Some(alias) => writeln!(w, "{}Projection AS {}", "  ".repeat(indent), alias)?,
            None => writeln!(w, "{}Projection", "  ".repeat(indent))?,
        }
        self.format_expr(&projection.expr, indent + 1, w)
    }

    fn format_row_source(
        &self,
        row: &RowSource,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let alias = row
            .alias
            .as_ref()
            .map(|a| format!(" AS {}", a))
            .unwrap_or_default();

        match &row.source {
            Source::Table(path) => {
                self.line(indent, &format!("Table{}", alias), path.span(), w)?;
                for part in &path.parts {
                    self.format_ident(part, indent + 1, w)?;
                }
            }
            Source::Load(load) => {
                writeln!(w, "{}Source{}", "  ".repeat(indent), alias)?;
                self.format_load(load, indent + 1, w)?;
            }
            Source::Subquery(select) => {
                writeln!(w, "{}Subquery{}", "  ".repeat(indent), alias)?;
                self.format_select(select, indent + 1, w)?;
            }
        }
        Ok(())
    }

    fn format_expr(&self, expr: &Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let span = expr.span();
        match expr {
            Expr::Literal(lit) => {
                let kind = match lit.kind {
                    LiteralKind::String => "String",
                    LiteralKind::Number => "Number",
                };
                self.line(indent, &format!("{} {}", kind, lit), span, w)
            }
            Expr::Column(column) => {
                self.line(indent, "Column", span, w)?;
                for part in &column.parts {
                    self.format_ident(part, indent + 1, w)?;
                }
                Ok(())
            }
            Expr::Star(_) => self.line(indent, "Star", span, w),
            Expr::Function(call) => {
                self.line(indent, &format!("Function {}", call.name), span, w)?;
                for arg in &call.args {
                    self.format_expr(arg, indent + 1, w)?;
                }
                Ok(())
            }
            Expr::LoadPage(load) => self.format_load(load, indent, w),
            Expr::Dot { base, field } => {
                self.line(indent, "Dot", span, w)?;
                self.format_expr(base, indent + 1, w)?;
                self.format_ident(field, indent + 1, w)
            }
            Expr::Unary { op, operand, .. } => {
                self.line(indent, &format!("Unary {}", op.as_str()), span, w)?;
                self.format_expr(operand, indent + 1, w)
            }
            Expr::Binary { op, lhs, rhs } => {
                self.line(indent, &format!("Binary {}", op.as_str()), span, w)?;
                self.format_expr(lhs, indent + 1, w)?;
                self.format_expr(rhs, indent + 1, w)
            }
            Expr::Paren(inner, _) => {
                self.line(indent, "Paren", span, w)?;
                self.format_expr(inner, indent + 1, w)
            }
            Expr::Subquery(select, _) => {
                self.line(indent, "Subquery", span, w)?;
                self.format_select(select, indent + 1, w)
            }
        }
    }

    fn format_load(&self, load: &LoadPage, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let pages = if load.limits_pages() {
            format!("pages={}", load.pages)
        } else {
            "pages=all".to_owned()
        };
        self.line(indent, &format!("LoadPage {} {}", load.url, pages), load.span, w)
    }

    fn format_ident(&self, ident: &Ident, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match ident {
            Ident::Name(name) => self.line(indent, &format!("Name {}", name), name.span, w),
            Ident::Tag(tag) => self.format_tag(tag, indent, w),
        }
    }

    fn format_tag(&self, tag: &Tag, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        self.line(indent, &format!("Tag {}", tag.name), tag.span, w)?;
        let prefix = "  ".repeat(indent + 1);
        for attr in &tag.attributes {
            writeln!(w, "{}Attr {}", prefix, attr)?;
        }
        Ok(())
    }
}
