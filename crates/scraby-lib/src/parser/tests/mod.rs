mod json_serialization_tests;
mod select_tests;

use crate::dump::AstPrinter;
use crate::parser::{ParseOptions, parse, parse_with};
use crate::{Error, render_all};

/// Tree dump of a query that must parse.
fn dump(input: &str) -> String {
    let statements = parse(input).unwrap_or_else(|e| panic!("`{input}` failed: {e}"));
    AstPrinter::new(&statements).dump()
}

/// Normalized text of a query that must parse.
fn fmt(input: &str) -> String {
    let statements = parse(input).unwrap_or_else(|e| panic!("`{input}` failed: {e}"));
    render_all(&statements)
}

/// The error of a query that must fail.
fn error(input: &str) -> Error {
    match parse(input) {
        Ok(statements) => panic!("`{input}` parsed: {statements:?}"),
        Err(e) => e,
    }
}

fn error_with_fuel(input: &str, fuel: u32) -> Error {
    let options = ParseOptions::new().with_recursion_fuel(Some(fuel));
    match parse_with(input, &options) {
        Ok(statements) => panic!("`{input}` parsed: {statements:?}"),
        Err(e) => e,
    }
}
