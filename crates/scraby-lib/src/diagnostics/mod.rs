//! Diagnostics for fatal parse failures.
//!
//! Every failure carries one [`Diagnostic`]: its kind, the offending source range,
//! and a rendered message. [`DiagnosticPrinter`] turns it into an annotated snippet.

mod message;
mod printer;

#[cfg(test)]
mod tests;

pub use message::{Diagnostic, DiagnosticKind, ErrorClass};
pub use printer::DiagnosticPrinter;

pub(crate) use message::serialize_text_range;
