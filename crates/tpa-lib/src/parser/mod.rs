//! Parser infrastructure for the tpa language.
//!
//! # Architecture
//!
//! A predictive, single-pass recursive-descent parser over a pre-classified token slice:
//!
//! - `cursor` - one-token lookahead, forward-only reader
//! - `core` - parser state (cursor, grammar options, recursion fuel)
//! - `grammar` - one `parse_*` method per production
//! - `ast` - typed tree, one variant per construct
//! - `tree` - generic `(kind, value, children)` view used for rendering
//!
//! # Failure policy
//!
//! Dispatch is strictly LL(1) on the lookahead kind. There is no recovery: the first
//! unmet expectation becomes the result of the whole parse and partial nodes are dropped.

pub mod ast;
pub mod cursor;
pub mod tree;

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use core::{Parser, ProgramTerminators};
pub use cursor::TokenCursor;

use crate::Result;
use ast::Program;
use tpa_core::Token;

/// Main entry point. Parses with default options.
pub fn parse(tokens: &[Token]) -> Result<Program> {
    Parser::new(tokens).parse()
}
