//! Parser state machine and low-level operations.

use rowan::{TextRange, TextSize};

use super::lexer::{Token, token_text};
use super::syntax_kind::{SyntaxKind, TokenSet};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::{Error, Result};

/// Recursive-descent parser over the rewritten token stream.
///
/// Trivia is gone by the time tokens get here. Every failure is fatal:
/// methods return `Err` and the whole parse call fails.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            recursion_fuel_limit: None,
        }
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Current token kind. Returns `Eof` past the last token.
    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn current_token(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Current token is a collapsed `<tag ...>` literal.
    pub(super) fn currently_at_tag(&self) -> bool {
        self.current_token().is_some_and(|t| t.is_collapsed_tag())
    }

    pub(super) fn next_is(&self, kind: SyntaxKind) -> bool {
        self.nth(1) == kind
    }

    /// End offset of the token before the cursor.
    pub(super) fn prev_end(&self) -> TextSize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(TextSize::from(0), |t| t.span.end())
    }

    pub(super) fn bump(&mut self) -> Token {
        assert!(!self.eof(), "bump called at EOF");
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes `kind` or fails with "expected {what}".
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> Result<Token> {
        if self.currently_is(kind) {
            return Ok(self.bump());
        }
        Err(self.unexpected(what))
    }

    /// Error for the current token, described as "expected {what}, found ...".
    pub(super) fn unexpected(&self, what: &str) -> Error {
        let found = if self.eof() {
            SyntaxKind::Eof.describe().to_owned()
        } else {
            format!("`{}`", self.current_text())
        };
        Diagnostic::with_detail(
            DiagnosticKind::UnexpectedToken,
            self.current_span(),
            format!("expected {}, found {}", what, found),
        )
        .into()
    }

    pub(super) fn error_at_current(&self, kind: DiagnosticKind) -> Error {
        Diagnostic::new(kind, self.current_span()).into()
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
