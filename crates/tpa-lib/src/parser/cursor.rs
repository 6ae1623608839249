//! One-token lookahead reader over the token slice.

use tpa_core::{Token, TokenKind, TokenSet};

use crate::{Error, Result};

/// Forward-only reader. The position index is the only mutable state.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Token at the current position; `None` marks end of stream.
    #[inline]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    #[inline]
    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    #[inline]
    pub fn at_any(&self, set: TokenSet) -> bool {
        self.peek_kind().is_some_and(|kind| set.contains(kind))
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    /// Consumes the current token if it has the `expected` kind.
    pub fn advance(&mut self, expected: TokenKind) -> Result<&'t Token> {
        self.advance_any(TokenSet::single(expected))
    }

    /// Consumes the current token if its kind is in `expected`.
    pub fn advance_any(&mut self, expected: TokenSet) -> Result<&'t Token> {
        match self.peek() {
            Some(token) if expected.contains(token.kind) => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(Error::UnexpectedToken {
                found: token.clone(),
                expected,
                position: self.pos,
            }),
            None => Err(Error::UnexpectedEndOfStream {
                expected,
                position: self.pos,
            }),
        }
    }
}
