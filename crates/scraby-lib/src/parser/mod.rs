//! Parser infrastructure for the dialect.
//!
//! # Pipeline
//!
//! 1. [`lexer::lex`] tokenizes with trivia, then trivia is dropped
//! 2. [`guard::check_tokens`] rejects keywords and input outside the dialect
//! 3. [`rewrite::collapse_tags`] turns each `<tag ...>` run into one identifier token
//! 4. [`Parser`] builds the owned [`ast`] by recursive descent, with Pratt parsing
//!    for operators
//!
//! Every stage is fail-fast: the first problem aborts the whole call with a single
//! classified [`Error`](crate::Error). There is no recovery.

pub mod ast;
pub mod guard;
pub mod lexer;
pub mod rewrite;
pub mod syntax_kind;

mod attrs;
mod core;
mod grammar;

#[cfg(test)]
mod guard_tests;
#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod rewrite_tests;
#[cfg(test)]
mod tests;

pub use core::Parser;
pub use lexer::{Token, token_text};
pub use syntax_kind::{SyntaxKind, TokenSet};

use crate::Result;
use ast::Statement;

/// Default nesting depth allowed for expressions and subqueries.
///
/// Input at this depth parses on a 2 MiB thread stack in debug builds.
pub const DEFAULT_RECURSION_FUEL: u32 = 128;

/// Knobs for a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting depth. `None` disables the check.
    pub recursion_fuel: Option<u32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }
}

/// Parses `;`-separated statements with default options.
pub fn parse(source: &str) -> Result<Vec<Statement>> {
    parse_with(source, &ParseOptions::default())
}

pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Vec<Statement>> {
    let tokens = tokenize(source)?;
    Parser::new(source, tokens)
        .with_recursion_fuel(options.recursion_fuel)
        .parse()
}

/// The token stream the parser sees: guarded, trivia-free, tags collapsed.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let tokens = lexer::lex_significant(source);
    guard::check_tokens(source, &tokens)?;
    Ok(rewrite::collapse_tags(source, &tokens))
}
