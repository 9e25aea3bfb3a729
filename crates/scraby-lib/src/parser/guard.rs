//! Keyword guard: rejects token kinds outside the dialect before parsing.
//!
//! Runs over the tokenizer output before tags are collapsed, so unsupported
//! keywords are caught even inside or next to a tag-like run.

use super::lexer::{Token, token_text};
use super::syntax_kind::SyntaxKind;
use super::syntax_kind::token_sets::ADMISSIBLE;
use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Fails on the first token whose kind is not admissible.
pub fn check_tokens(source: &str, tokens: &[Token]) -> Result<(), Diagnostic> {
    let Some(token) = tokens.iter().find(|t| !ADMISSIBLE.contains(t.kind)) else {
        return Ok(());
    };

    let text = token_text(source, token);
    let diag = if token.kind == SyntaxKind::Garbage {
        Diagnostic::with_detail(
            DiagnosticKind::UnrecognizedInput,
            token.span,
            format!("`{}`", text),
        )
    } else {
        Diagnostic::with_detail(
            DiagnosticKind::UnsupportedToken,
            token.span,
            format!("{} `{}`", token.kind.describe(), text),
        )
    };
    Err(diag)
}
