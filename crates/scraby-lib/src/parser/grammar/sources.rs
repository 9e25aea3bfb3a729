use rowan::TextRange;

use crate::Result;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::Parser;
use crate::parser::ast::{Column, Name, RowSource, Source};
use crate::parser::syntax_kind::SyntaxKind;
use crate::parser::syntax_kind::token_sets::{ALIAS_FIRST, NAME_FIRST};

impl Parser<'_> {
    /// `LOAD(...)` | `(SELECT ...)` | dotted table path, then an optional alias.
    pub(super) fn parse_row_source(&mut self) -> Result<RowSource> {
        let source = match self.current() {
            SyntaxKind::KwLoad => Source::Load(self.parse_load_page()?),
            SyntaxKind::ParenOpen if self.next_is(SyntaxKind::KwSelect) => {
                let open = self.bump().span;
                let select = self.parse_select()?;
                self.expect_closing_paren(open)?;
                Source::Subquery(Box::new(select))
            }
            _ if self.currently_is_one_of(NAME_FIRST) => Source::Table(self.parse_table_path()?),
            _ => return Err(self.error_at_current(DiagnosticKind::ExpectedRowSource)),
        };
        let alias = self.parse_alias()?;
        Ok(RowSource { source, alias })
    }

    fn parse_table_path(&mut self) -> Result<Column> {
        let mut parts = vec![self.parse_ident()?];
        while self.eat_token(SyntaxKind::Dot) {
            parts.push(self.parse_ident()?);
        }
        Ok(Column { parts })
    }

    /// `AS name`, or a bare name. A tag is never taken as an implicit alias.
    pub(super) fn parse_alias(&mut self) -> Result<Option<Name>> {
        if self.eat_token(SyntaxKind::KwAs) {
            return self.parse_name().map(Some);
        }
        if self.currently_is_one_of(ALIAS_FIRST) && !self.currently_at_tag() {
            return self.parse_name().map(Some);
        }
        Ok(None)
    }

    /// Plain or quoted name. Tags are rejected here.
    pub(super) fn parse_name(&mut self) -> Result<Name> {
        if self.currently_at_tag() || !self.currently_is_one_of(NAME_FIRST) {
            return Err(Diagnostic::with_detail(
                DiagnosticKind::ExpectedIdentifier,
                self.current_span(),
                self.found_description(),
            )
            .into());
        }

        let quoted = self.currently_is(SyntaxKind::QuotedIdent);
        let raw = self.current_text();
        let span = self.bump().span;
        let text = if quoted { unquote_name(raw) } else { raw.to_owned() };
        Ok(Name { text, quoted, span })
    }

    /// Consumes `)` closing the paren opened at `open`.
    pub(super) fn expect_closing_paren(&mut self, open: TextRange) -> Result<TextRange> {
        if self.currently_is(SyntaxKind::ParenClose) {
            return Ok(self.bump().span);
        }
        Err(Diagnostic::with_detail(
            DiagnosticKind::UnclosedParen,
            open.cover(self.current_span()),
            self.found_description(),
        )
        .into())
    }

    fn found_description(&self) -> String {
        if self.eof() {
            "found end of input".to_owned()
        } else if self.currently_at_tag() {
            format!("found tag `{}`", self.current_text())
        } else {
            format!("found `{}`", self.current_text())
        }
    }
}

/// `"a""b"` -> `a"b`, `` `a` `` -> `a`
fn unquote_name(raw: &str) -> String {
    if let Some(inner) = raw.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
        return inner.to_owned();
    }
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
        .replace("\"\"", "\"")
}
