//! Dialect hooks: tag literals in identifier position and `LOAD(...)`.

use rowan::TextRange;

use crate::Result;
use crate::parser::Parser;
use crate::parser::ast::{Ident, LoadPage, Tag};
use crate::parser::lexer::token_text;
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    /// Identifier position. A collapsed tag token is re-read as a [`Tag`]; its
    /// vocabulary and attribute errors surface here.
    pub(super) fn parse_ident(&mut self) -> Result<Ident> {
        if self.currently_at_tag() {
            let token = self.bump();
            let tag = Tag::from_literal(token_text(self.source, &token), token.span)?;
            return Ok(Ident::Tag(tag));
        }
        self.parse_name().map(Ident::Name)
    }

    /// `LOAD(url)` | `LOAD(url, pages)`
    pub(super) fn parse_load_page(&mut self) -> Result<LoadPage> {
        let start = self.expect(SyntaxKind::KwLoad, "`LOAD`")?.span.start();
        if !self.currently_is(SyntaxKind::ParenOpen) {
            return Err(self.unexpected("`(` after `LOAD`"));
        }
        let (args, close) = self.parse_call_args()?;
        Ok(LoadPage::from_args(args, TextRange::new(start, close.end()))?)
    }
}
