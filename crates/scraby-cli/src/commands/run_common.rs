//! Loading and parsing shared by the query commands.

use scraby_lib::{Error, ParseOptions, Statement};

use super::query_loader::{QueryInput, load_query};
use crate::cli::QueryArgs;

/// Loads the query or exits with status 1.
pub fn load_or_exit(args: &QueryArgs) -> QueryInput {
    match load_query(args.query_path.as_deref(), args.query_text.as_deref()) {
        Ok(input) => {
            tracing::debug!(
                origin = input.origin.as_deref().unwrap_or("<inline>"),
                bytes = input.text.len(),
                "loaded query"
            );
            input
        }
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// Parses the query, or prints the diagnostic and exits with status 1.
pub fn parse_or_exit(input: &QueryInput, options: &ParseOptions, color: bool) -> Vec<Statement> {
    match scraby_lib::parse_with(&input.text, options) {
        Ok(statements) => {
            tracing::info!(statements = statements.len(), "parsed query");
            statements
        }
        Err(err) => {
            tracing::debug!(class = ?err.class(), "parse failed");
            eprint!("{}", render_error(&err, input, color));
            std::process::exit(1);
        }
    }
}

/// Annotated error text, ending in a newline.
pub fn render_error(err: &Error, input: &QueryInput, color: bool) -> String {
    let Some(diag) = err.diagnostic() else {
        return format!("error: {}\n", err);
    };

    let mut printer = diag.printer().source(&input.text).colored(color);
    if let Some(origin) = &input.origin {
        printer = printer.path(origin);
    }
    format!("{}\n", printer.render())
}
