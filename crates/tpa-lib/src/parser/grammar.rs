//! Grammar productions for the tpa language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Each production consumes at least one token before recursing, so parsing a
//! finite slice always terminates.

use tpa_core::token_sets::{BINARY_OPERATORS, OPERAND_FIRST, STATEMENT_FIRST, TRAILING_OPERAND};
use tpa_core::{Token, TokenKind, TokenSet};

use super::ast::{
    Assignment, Binary, BinaryOp, Block, Expression, IfConditional, Input, Operand, OperandKind,
    Operator, Output, Program, Stmt, VariableDefinition, WhileLoop,
};
use super::core::Parser;
use crate::{Error, Result, SyntaxContext};

impl Parser<'_> {
    /// `PROGRAM_START stmt* (PROGRAM_END | PROGRAM_FINISH)`
    pub(super) fn parse_program(&mut self) -> Result<Program> {
        self.expect(TokenKind::ProgramStart)?;

        let mut statements = Vec::new();
        while !self.cursor.is_at_end() && !self.at_any(self.terminators) {
            statements.push(self.parse_statement_or_block()?);
        }

        self.expect_any(self.terminators)?;
        Ok(Program { statements })
    }

    /// LL(1) dispatch on the lookahead kind.
    fn parse_statement_or_block(&mut self) -> Result<Stmt> {
        self.enter_recursion()?;
        let stmt = self.parse_statement_inner();
        self.exit_recursion();
        stmt
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt> {
        let Some(token) = self.cursor.peek() else {
            return Err(Error::UnexpectedEndOfStream {
                expected: STATEMENT_FIRST,
                position: self.cursor.position(),
            });
        };

        tracing::trace!(kind = %token.kind, position = self.cursor.position(), "statement");

        match token.kind {
            TokenKind::BlockStart => self.parse_block().map(Stmt::Block),
            TokenKind::Type => self.parse_variable_definition().map(Stmt::VariableDefinition),
            TokenKind::Identifier => self.parse_assignment().map(Stmt::Assignment),
            TokenKind::IfConditional => self.parse_if_conditional().map(Stmt::IfConditional),
            TokenKind::DataOutput => self.parse_output().map(Stmt::Output),
            TokenKind::DataInput => self.parse_input().map(Stmt::Input),
            TokenKind::WhileLoop => self.parse_while_loop().map(Stmt::WhileLoop),
            _ => Err(Error::SyntaxError {
                unexpected: token.clone(),
                position: self.cursor.position(),
                context: SyntaxContext::Statement,
            }),
        }
    }

    /// `BLOCK_START stmt* BLOCK_END`. Delimiters are not kept.
    fn parse_block(&mut self) -> Result<Block> {
        self.expect(TokenKind::BlockStart)?;

        let mut statements = Vec::new();
        while !self.cursor.is_at_end() && !self.at(TokenKind::BlockEnd) {
            statements.push(self.parse_statement_or_block()?);
        }

        self.expect(TokenKind::BlockEnd)?;
        Ok(Block { statements })
    }

    /// `TYPE IDENTIFIER (ARGUMENT_SEPARATOR IDENTIFIER)* COMMAND_END`
    fn parse_variable_definition(&mut self) -> Result<VariableDefinition> {
        let ty = self.expect(TokenKind::Type)?.value.clone();

        let mut variables = Vec::new();
        loop {
            variables.push(self.expect(TokenKind::Identifier)?.value.clone());
            if self.at(TokenKind::ArgumentSeparator) {
                self.expect(TokenKind::ArgumentSeparator)?;
            } else {
                break;
            }
        }

        self.expect(TokenKind::CommandEnd)?;
        Ok(VariableDefinition { ty, variables })
    }

    /// `IDENTIFIER ASSIGN expr COMMAND_END`
    fn parse_assignment(&mut self) -> Result<Assignment> {
        let target = self.expect(TokenKind::Identifier)?.value.clone();
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::CommandEnd)?;
        Ok(Assignment { target, value })
    }

    /// `IF_CONDITIONAL ( expr ) block (ELSE_CONDITIONAL block)?`
    fn parse_if_conditional(&mut self) -> Result<IfConditional> {
        self.expect(TokenKind::IfConditional)?;
        let condition = self.parse_parenthesized_condition()?;
        let then_block = self.parse_block()?;

        let else_block = if self.at(TokenKind::ElseConditional) {
            self.expect(TokenKind::ElseConditional)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(IfConditional {
            condition,
            then_block,
            else_block,
        })
    }

    /// `WHILE_LOOP ( expr ) block`
    fn parse_while_loop(&mut self) -> Result<WhileLoop> {
        self.expect(TokenKind::WhileLoop)?;
        let condition = self.parse_parenthesized_condition()?;
        let body = self.parse_block()?;
        Ok(WhileLoop { condition, body })
    }

    /// `DATA_OUTPUT ( expr ) COMMAND_END`
    fn parse_output(&mut self) -> Result<Output> {
        self.expect(TokenKind::DataOutput)?;
        self.expect(TokenKind::LeftParen)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        self.expect(TokenKind::CommandEnd)?;
        Ok(Output { value })
    }

    /// `DATA_INPUT ( IDENTIFIER ) COMMAND_END`
    fn parse_input(&mut self) -> Result<Input> {
        self.expect(TokenKind::DataInput)?;
        self.expect(TokenKind::LeftParen)?;
        let target = self.expect(TokenKind::Identifier)?.value.clone();
        self.expect(TokenKind::RightParen)?;
        self.expect(TokenKind::CommandEnd)?;
        Ok(Input { target })
    }

    fn parse_parenthesized_condition(&mut self) -> Result<Expression> {
        self.expect(TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        Ok(condition)
    }

    /// `operand (operator operand)?`. One binary operation at most: no chaining,
    /// no precedence, no nested parentheses.
    fn parse_expression(&mut self) -> Result<Expression> {
        let lhs = self.parse_operand(OPERAND_FIRST, SyntaxContext::Operand)?;

        let binary = if self.at_any(BINARY_OPERATORS) {
            let position = self.cursor.position();
            let token = self.expect_any(BINARY_OPERATORS)?;
            let op = Operator {
                op: BinaryOp::from_token_kind(token.kind)
                    .ok_or_else(|| misplaced(token, position, SyntaxContext::Operand))?,
                text: token.value.clone(),
            };
            let rhs = self.parse_operand(TRAILING_OPERAND, SyntaxContext::OperandAfterOperator)?;
            Some(Binary { op, rhs })
        } else {
            None
        };

        Ok(Expression { lhs, binary })
    }

    fn parse_operand(&mut self, allowed: TokenSet, context: SyntaxContext) -> Result<Operand> {
        let position = self.cursor.position();
        let token = self.expect_syntax(allowed, context)?;
        let kind = OperandKind::from_token_kind(token.kind)
            .ok_or_else(|| misplaced(token, position, context))?;
        Ok(Operand {
            kind,
            text: token.value.clone(),
        })
    }
}

fn misplaced(token: &Token, position: usize, context: SyntaxContext) -> Error {
    Error::SyntaxError {
        unexpected: token.clone(),
        position,
        context,
    }
}
