//! Grammar productions for the dialect.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! The dialect hooks live in [`dialect`]: tags in identifier position and the
//! `LOAD(...)` production.

mod dialect;
mod expressions;
mod sources;
mod statements;
