//! Typed syntax tree.
//!
//! One type per grammar construct, each carrying exactly what its production consumes.
//! Every node is exclusively owned by its parent; `Program` is owned by the caller of `parse`.

use tpa_core::TokenKind;

use super::tree::{NodeKind, SyntaxNode};

/// Common surface of typed nodes.
pub trait AstNode {
    fn kind(&self) -> NodeKind;

    /// Lowers the node (and its subtree) into the generic view.
    fn to_syntax(&self) -> SyntaxNode;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Anything `parse_statement_or_block` can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Block(Block),
    VariableDefinition(VariableDefinition),
    Assignment(Assignment),
    IfConditional(IfConditional),
    WhileLoop(WhileLoop),
    Output(Output),
    Input(Input),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// `TYPE a, b, c;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition {
    /// Literal of the `TYPE` token.
    pub ty: String,
    /// Declared names in source order. Never empty.
    pub variables: Vec<String>,
}

/// `target = expression;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfConditional {
    pub condition: Expression,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub value: Expression,
}

/// Reads into `target`. No expression involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub target: String,
}

/// A single operand, optionally followed by exactly one binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub lhs: Operand,
    pub binary: Option<Binary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    pub op: Operator,
    pub rhs: Operand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Number,
    Identifier,
    LiteralString,
}

impl OperandKind {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Number => Some(OperandKind::Number),
            TokenKind::Identifier => Some(OperandKind::Identifier),
            TokenKind::LiteralString => Some(OperandKind::LiteralString),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub kind: OperandKind,
    /// Token literal, verbatim.
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    GreaterEqual,
    Less,
    Equal,
    Greater,
    LessEqual,
    Sum,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::Equal => BinaryOp::Equal,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::LessEqual => BinaryOp::LessEqual,
            TokenKind::Sum => BinaryOp::Sum,
            TokenKind::Subtract => BinaryOp::Subtract,
            TokenKind::Multiply => BinaryOp::Multiply,
            TokenKind::Divide => BinaryOp::Divide,
            _ => return None,
        })
    }

    /// Conventional spelling, independent of the lexer's literal.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Less => "<",
            BinaryOp::Equal => "==",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Sum => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub op: BinaryOp,
    /// Token literal, verbatim.
    pub text: String,
}

impl Expression {
    pub fn is_binary(&self) -> bool {
        self.binary.is_some()
    }
}
