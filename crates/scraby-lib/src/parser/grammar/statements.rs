use rowan::TextRange;

use crate::Result;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::Parser;
use crate::parser::ast::{Join, JoinKind, Projection, Select, SetStmt, Statement};
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    /// Parses the whole token stream. Empty statements between `;` are skipped.
    pub fn parse(mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            while self.eat_token(SyntaxKind::Semicolon) {}
            if self.eof() {
                break;
            }
            statements.push(self.parse_statement()?);
            if !self.eof() && !self.currently_is(SyntaxKind::Semicolon) {
                return Err(self.unexpected("`;` or end of input"));
            }
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.current() {
            SyntaxKind::KwSelect => Ok(Statement::Select(Box::new(self.parse_select()?))),
            SyntaxKind::KwSet => Ok(Statement::Set(self.parse_set()?)),
            SyntaxKind::KwCopy => Err(Diagnostic::with_detail(
                DiagnosticKind::UnsupportedStatement,
                self.current_span(),
                "`COPY` is reserved",
            )
            .into()),
            _ => Err(Diagnostic::with_detail(
                DiagnosticKind::ExpectedStatement,
                self.current_span(),
                format!("found `{}`", self.current_text()),
            )
            .into()),
        }
    }

    /// `SELECT projections [FROM source {(, | JOIN) source}] [WHERE e] [ORDER BY e, ...] [LIMIT e]`
    pub(crate) fn parse_select(&mut self) -> Result<Select> {
        self.enter_recursion()?;
        let result = self.parse_select_body();
        self.exit_recursion();
        result
    }

    fn parse_select_body(&mut self) -> Result<Select> {
        let start = self.expect(SyntaxKind::KwSelect, "`SELECT`")?.span.start();

        let mut projections = vec![self.parse_projection()?];
        while self.eat_token(SyntaxKind::Comma) {
            projections.push(self.parse_projection()?);
        }

        let mut from = None;
        let mut joins = Vec::new();
        if self.eat_token(SyntaxKind::KwFrom) {
            from = Some(self.parse_row_source()?);
            loop {
                let kind = match self.current() {
                    SyntaxKind::Comma => JoinKind::Comma,
                    SyntaxKind::KwJoin => JoinKind::Join,
                    _ => break,
                };
                self.bump();
                let source = self.parse_row_source()?;
                joins.push(Join { kind, source });
            }
        }

        let where_clause = if self.eat_token(SyntaxKind::KwWhere) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let mut order_by = Vec::new();
        if self.eat_token(SyntaxKind::KwOrderBy) {
            order_by.push(self.parse_expr()?);
            while self.eat_token(SyntaxKind::Comma) {
                order_by.push(self.parse_expr()?);
            }
        }

        let limit = if self.eat_token(SyntaxKind::KwLimit) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(Select {
            projections,
            from,
            joins,
            where_clause,
            order_by,
            limit,
            span: TextRange::new(start, self.prev_end()),
        })
    }

    fn parse_projection(&mut self) -> Result<Projection> {
        let expr = self.parse_expr()?;
        let alias = self.parse_alias()?;
        Ok(Projection { expr, alias })
    }

    /// `SET name = value`
    fn parse_set(&mut self) -> Result<SetStmt> {
        let start = self.expect(SyntaxKind::KwSet, "`SET`")?.span.start();
        let name = self.parse_name()?;
        self.expect(SyntaxKind::Eq, "`=`")?;
        let value = self.parse_expr()?;
        Ok(SetStmt {
            name,
            value,
            span: TextRange::new(start, self.prev_end()),
        })
    }
}
