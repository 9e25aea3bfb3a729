//! Attribute extraction for collapsed tag literals.
//!
//! The attribute grammar is a constrained subset of HTML: space-separated
//! `name="value"` or `name=r"value"` pairs with lowercase names. A value ends at the
//! first `" ` (quote followed by a space), so values cannot contain that sequence.
//! The downstream HTML matcher cannot tell such a space inside a regex value from an
//! attribute boundary either.

use std::sync::LazyLock;

use regex_automata::meta::Regex;
use rowan::TextRange;
use scraby_core::HtmlTag;

use super::ast::{Tag, TagAttr};
use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Matched against the attribute text padded with one trailing space.
static ATTR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-z]+)=(r?)"(.*?)" "#).expect("attribute pattern is valid")
});

impl Tag {
    /// Builds a tag from the raw text of a collapsed tag token, brackets included.
    pub fn from_literal(raw: &str, span: TextRange) -> Result<Tag, Diagnostic> {
        let inner = raw.trim_matches(|c| c == '<' || c == '>');
        let (name, attr_text) = inner.split_once(' ').unwrap_or((inner, ""));

        let Some(tag) = HtmlTag::from_name(name) else {
            return Err(Diagnostic::with_detail(
                DiagnosticKind::UnknownTag,
                span,
                format!("`{}` is not a recognized HTML tag", name),
            ));
        };

        let attributes = extract_attrs(attr_text).map_err(|rest| {
            Diagnostic::with_detail(
                DiagnosticKind::MalformedTagAttributes,
                span,
                format!("cannot read `{}` as name=\"value\"", rest),
            )
        })?;

        Ok(Tag::new(tag, attributes, span))
    }
}

/// Splits attribute text into pairs, in source order.
///
/// On failure returns the first stretch of text that is not a well-formed pair.
pub(crate) fn extract_attrs(text: &str) -> Result<Vec<TagAttr>, String> {
    let padded = format!("{} ", text);
    let mut attrs = Vec::new();
    let mut cursor = 0;

    for caps in ATTR_PATTERN.captures_iter(padded.as_str()) {
        let (Some(whole), Some(name), Some(regex_flag), Some(value)) = (
            caps.get_match(),
            caps.get_group(1),
            caps.get_group(2),
            caps.get_group(3),
        ) else {
            continue;
        };

        let gap = padded[cursor..whole.start()].trim();
        if !gap.is_empty() {
            return Err(gap.to_owned());
        }

        attrs.push(TagAttr::new(
            &padded[name.range()],
            &padded[value.range()],
            !regex_flag.is_empty(),
        ));
        cursor = whole.end();
    }

    let rest = padded[cursor..].trim();
    if !rest.is_empty() {
        return Err(rest.to_owned());
    }

    Ok(attrs)
}
