use std::fmt;

use rowan::TextRange;
use serde::{Serialize, Serializer};

/// Error category a diagnostic belongs to.
///
/// Callers use it to tell "the shape is wrong" (`Syntax`) from
/// "the value kind is wrong" (`Type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClass {
    Lexical,
    Syntax,
    Type,
    Construction,
}

/// Diagnostic kinds, grouped by the stage that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    // Keyword guard
    UnsupportedToken,
    UnrecognizedInput,

    // Statement and expression grammar
    ExpectedStatement,
    UnsupportedStatement,
    ExpectedExpression,
    ExpectedIdentifier,
    ExpectedRowSource,
    UnexpectedToken,
    UnclosedParen,

    // Tags
    MalformedTagAttributes,
    UnknownTag,

    // LOAD
    BadLoadArguments,
    BadArgumentType,
}

impl DiagnosticKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedToken | Self::UnrecognizedInput => ErrorClass::Lexical,
            Self::BadArgumentType => ErrorClass::Type,
            Self::UnknownTag => ErrorClass::Construction,
            _ => ErrorClass::Syntax,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnsupportedToken => "unsupported token",
            Self::UnrecognizedInput => "unrecognized input",

            Self::ExpectedStatement => "expected a statement",
            Self::UnsupportedStatement => "statement is not supported",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::ExpectedRowSource => "expected a table, subquery or LOAD",
            Self::UnexpectedToken => "unexpected token",
            Self::UnclosedParen => "missing closing `)`",

            Self::MalformedTagAttributes => "malformed tag attributes",
            Self::UnknownTag => "unknown tag",

            Self::BadLoadArguments => "bad arguments for LOAD",
            Self::BadArgumentType => "bad type for arguments",
        }
    }

    /// Template for custom messages. `{}` is replaced with detail.
    pub fn custom_message(&self) -> String {
        format!("{}: {{}}", self.fallback_message())
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// A single fatal finding with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    #[serde(serialize_with = "serialize_text_range")]
    pub range: TextRange,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.message(None),
        }
    }

    pub fn with_detail(kind: DiagnosticKind, range: TextRange, detail: impl AsRef<str>) -> Self {
        Self {
            kind,
            range,
            message: kind.message(Some(detail.as_ref())),
        }
    }

    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        )
    }
}

pub(crate) fn serialize_text_range<S: Serializer>(
    range: &TextRange,
    s: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}
