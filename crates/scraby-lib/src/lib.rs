//! scraby: a SQL dialect for web scraping.
//!
//! Two constructs extend ordinary SQL:
//! - HTML tag literals usable wherever a column or table name is expected
//! - `LOAD(url, pages)` as a row source or a projected value
//!
//! # Example
//!
//! ```
//! let sql = r#"SELECT <div class="price"> AS price FROM LOAD('https://example.org', 2)"#;
//! let statements = scraby_lib::parse(sql).expect("valid query");
//! assert_eq!(
//!     scraby_lib::render(&statements[0]),
//!     r#"SELECT <div class="price"> AS price FROM LOAD('https://example.org', 2)"#,
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod dump;
pub mod parser;
pub mod render;

#[cfg(test)]
mod render_tests;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticPrinter, ErrorClass};
pub use parser::ast::{
    BinaryOp, Column, Expr, FunctionCall, Ident, Join, JoinKind, Literal, LiteralKind, LoadPage,
    Name, Projection, RowSource, Select, SetStmt, Source, Statement, Tag, TagAttr, UnaryOp,
};
pub use parser::{ParseOptions, parse, parse_with, tokenize};
pub use render::{render, render_all};
pub use scraby_core::HtmlTag;

/// Errors that can occur while parsing a query.
///
/// Each parse call either yields every statement or fails as a whole.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A token kind outside the dialect, or input the tokenizer cannot read.
    #[error("lexical error: {0}")]
    Lexical(Diagnostic),

    /// Malformed statement, malformed tag text, or wrong `LOAD` arity.
    #[error("syntax error: {0}")]
    Syntax(Diagnostic),

    /// Wrong literal kind passed to `LOAD`.
    #[error("type error: {0}")]
    Type(Diagnostic),

    /// Tag name outside the vocabulary.
    #[error("construction error: {0}")]
    Construction(Diagnostic),

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Lexical(d) | Error::Syntax(d) | Error::Type(d) | Error::Construction(d) => {
                Some(d)
            }
            Error::RecursionLimitExceeded => None,
        }
    }

    pub fn class(&self) -> Option<ErrorClass> {
        self.diagnostic().map(Diagnostic::class)
    }

    /// Annotated rendering against the query text.
    pub fn render(&self, source: &str, colored: bool) -> String {
        match self.diagnostic() {
            Some(diag) => diag.printer().source(source).colored(colored).render(),
            None => self.to_string(),
        }
    }
}

impl From<Diagnostic> for Error {
    fn from(diag: Diagnostic) -> Self {
        match diag.class() {
            ErrorClass::Lexical => Error::Lexical(diag),
            ErrorClass::Syntax => Error::Syntax(diag),
            ErrorClass::Type => Error::Type(diag),
            ErrorClass::Construction => Error::Construction(diag),
        }
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
