#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core vocabulary for the scraby SQL dialect.
//!
//! The dialect lets HTML element references stand in for identifiers
//! (`SELECT <div class="price"> FROM LOAD('https://...')`). Which element names
//! qualify is decided here, by a closed enumeration with a static lookup table.

mod tag;

#[cfg(test)]
mod tag_tests;

pub use tag::{HtmlTag, UnknownTag};
