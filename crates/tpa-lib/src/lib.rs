//! tpa: predictive parser for a small imperative toy language.
//!
//! Tokens arrive pre-classified; the parser turns them into a syntax tree rooted
//! at [`Program`] or fails on the first mismatch.
//!
//! # Example
//!
//! ```
//! use tpa_lib::{Token, TokenKind, TreePrinter, parse};
//!
//! let tokens = vec![
//!     Token::new(TokenKind::ProgramStart, "inicio"),
//!     Token::new(TokenKind::DataInput, "ler"),
//!     Token::new(TokenKind::LeftParen, "("),
//!     Token::new(TokenKind::Identifier, "x"),
//!     Token::new(TokenKind::RightParen, ")"),
//!     Token::new(TokenKind::CommandEnd, ";"),
//!     Token::new(TokenKind::ProgramEnd, "fim"),
//! ];
//!
//! let program = parse(&tokens).expect("valid program");
//! assert_eq!(TreePrinter::new(&program.to_syntax()).dump(), "Program()\n  Input(x)\n");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod parser;
pub mod printer;

#[cfg(test)]
pub mod test_utils;

pub use parser::ast::{
    Assignment, AstNode, Binary, BinaryOp, Block, Expression, IfConditional, Input, Operand,
    OperandKind, Operator, Output, Program, Stmt, VariableDefinition, WhileLoop,
};
pub use parser::tree::{Arity, NodeKind, SyntaxNode};
pub use parser::{Parser, ProgramTerminators, parse};
pub use printer::{TreeFormat, TreePrinter};
pub use tpa_core::{Colors, Token, TokenKind, TokenSet};

/// Where a statement or operand was expected when dispatch found nothing to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxContext {
    Statement,
    Operand,
    OperandAfterOperator,
}

impl std::fmt::Display for SyntaxContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SyntaxContext::Statement => "where a statement was expected",
            SyntaxContext::Operand => "in expression",
            SyntaxContext::OperandAfterOperator => "after operator",
        })
    }
}

/// Errors that abort a parse. The first one wins; no tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The token at the cursor is not of the kind the production requires.
    #[error("unexpected token {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        found: Token,
        expected: TokenSet,
        position: usize,
    },

    /// The stream ran out where a token was required.
    #[error("unexpected end of token stream at position {position}, expected {expected}")]
    UnexpectedEndOfStream { expected: TokenSet, position: usize },

    /// No production matches the lookahead.
    #[error("syntax error: unexpected token {unexpected} at position {position} {context}")]
    SyntaxError {
        unexpected: Token,
        position: usize,
        context: SyntaxContext,
    },

    /// Recursion fuel exhausted (blocks nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    /// Token index the error points at, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::UnexpectedToken { position, .. }
            | Error::UnexpectedEndOfStream { position, .. }
            | Error::SyntaxError { position, .. } => Some(*position),
            Error::RecursionLimitExceeded => None,
        }
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
