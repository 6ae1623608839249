#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the tpa token stream.
//!
//! Two layers:
//! - **Record layer**: 1:1 mapping to the serialized token list (`[{"type", "value"}]`)
//! - **Token layer**: classified `Token` values the parser consumes

mod colors;
mod records;
mod token;


pub use colors::Colors;
pub use records::{LoadOptions, RawToken, RawValue, TokenLoadError, load_tokens, parse_token_records};
pub use token::{Token, TokenKind, TokenSet, token_sets};
