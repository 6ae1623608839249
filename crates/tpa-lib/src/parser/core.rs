//! Parser state and low-level operations.

use tpa_core::token_sets::PROGRAM_TERMINATORS;
use tpa_core::{Token, TokenKind, TokenSet};

use super::ast::Program;
use super::cursor::TokenCursor;
use crate::{Error, Result, SyntaxContext};

const DEFAULT_RECURSION_FUEL: u32 = 256;

/// Which marker kinds may close a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgramTerminators {
    /// `PROGRAM_END` or `PROGRAM_FINISH`.
    #[default]
    EndOrFinish,
    /// `PROGRAM_END` only.
    EndOnly,
}

impl ProgramTerminators {
    pub fn token_set(self) -> TokenSet {
        match self {
            ProgramTerminators::EndOrFinish => PROGRAM_TERMINATORS,
            ProgramTerminators::EndOnly => TokenSet::single(TokenKind::ProgramEnd),
        }
    }
}

pub struct Parser<'t> {
    pub(super) cursor: TokenCursor<'t>,
    pub(super) terminators: TokenSet,
    pub(super) depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            terminators: ProgramTerminators::default().token_set(),
            depth: 0,
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    pub fn with_terminators(mut self, terminators: ProgramTerminators) -> Self {
        self.terminators = terminators.token_set();
        self
    }

    /// Maximum statement nesting depth. `None` disables the check.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Program> {
        tracing::debug!(tokens = self.cursor.remaining(), "parsing program");
        let program = self.parse_program()?;
        if !self.cursor.is_at_end() {
            tracing::debug!(
                ignored = self.cursor.remaining(),
                "tokens after program terminator"
            );
        }
        tracing::debug!(statements = program.statements.len(), "parsed program");
        Ok(program)
    }

    #[inline]
    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.cursor.at(kind)
    }

    #[inline]
    pub(super) fn at_any(&self, set: TokenSet) -> bool {
        self.cursor.at_any(set)
    }

    #[inline]
    pub(super) fn expect(&mut self, kind: TokenKind) -> Result<&'t Token> {
        self.cursor.advance(kind)
    }

    #[inline]
    pub(super) fn expect_any(&mut self, set: TokenSet) -> Result<&'t Token> {
        self.cursor.advance_any(set)
    }

    /// Consumes a token from `allowed`, reporting a syntax error (not a token mismatch)
    /// when something else is there.
    pub(super) fn expect_syntax(
        &mut self,
        allowed: TokenSet,
        context: SyntaxContext,
    ) -> Result<&'t Token> {
        match self.cursor.peek() {
            Some(token) if !allowed.contains(token.kind) => Err(Error::SyntaxError {
                unexpected: token.clone(),
                position: self.cursor.position(),
                context,
            }),
            _ => self.cursor.advance_any(allowed),
        }
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
