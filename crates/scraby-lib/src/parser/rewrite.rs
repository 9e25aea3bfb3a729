//! Tag rewriter: collapses `<tag ...>` literals into single identifier tokens.
//!
//! A candidate starts at `<` when the next token touches it (no gap) and spells a
//! vocabulary tag name. The candidate runs up to the first `>`; a breaking keyword
//! before that aborts it, which is how `mod<div FROM x` stays a comparison.
//! The input is never modified; a new token vector is produced.

use rowan::TextRange;
use scraby_core::HtmlTag;

use super::lexer::{Token, token_text};
use super::syntax_kind::SyntaxKind;
use super::syntax_kind::token_sets::BREAKING;

pub fn collapse_tags(source: &str, tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let end = if opens_tag(source, tokens, i) {
            candidate_end(tokens, i)
        } else {
            None
        };

        match end {
            Some(end) => {
                let span = TextRange::new(tokens[i].span.start(), tokens[end].span.end());
                out.push(Token::collapsed_tag(span));
                i = end + 1;
            }
            None => {
                out.push(tokens[i]);
                i += 1;
            }
        }
    }

    out
}

/// `<` immediately followed by a vocabulary name.
fn opens_tag(source: &str, tokens: &[Token], i: usize) -> bool {
    let (Some(open), Some(name)) = (tokens.get(i), tokens.get(i + 1)) else {
        return false;
    };
    open.kind == SyntaxKind::Lt
        && name.span.start() == open.span.end()
        && HtmlTag::is_tag_name(token_text(source, name))
}

/// Index of the `>` closing the candidate that starts at `start`.
fn candidate_end(tokens: &[Token], start: usize) -> Option<usize> {
    for (offset, token) in tokens[start..].iter().enumerate() {
        if BREAKING.contains(token.kind) {
            return None;
        }
        if token.kind == SyntaxKind::Gt {
            return Some(start + offset);
        }
    }
    None
}
