//! Generic `(kind, value, children)` view of the typed tree.
//!
//! This is the shape the rendered output follows. Terminal kinds carry a value and no
//! children; composite kinds carry children and, except `Assignment` and `Input`, no value.

use serde::Serialize;

use super::ast::{
    Assignment, AstNode, Block, Expression, IfConditional, Input, Operand, Operator, Output,
    Program, Stmt, VariableDefinition, WhileLoop,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Program,
    Block,
    VariableDefinition,
    Variable,
    Assignment,
    IfConditional,
    ElseConditional,
    WhileLoop,
    Output,
    Input,
    Expression,
    Operand,
    Operator,
}

/// Allowed child count for a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::Between(lo, hi) => (lo..=hi).contains(&count),
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Block => "Block",
            NodeKind::VariableDefinition => "VariableDefinition",
            NodeKind::Variable => "Variable",
            NodeKind::Assignment => "Assignment",
            NodeKind::IfConditional => "IfConditional",
            NodeKind::ElseConditional => "ElseConditional",
            NodeKind::WhileLoop => "WhileLoop",
            NodeKind::Output => "Output",
            NodeKind::Input => "Input",
            NodeKind::Expression => "Expression",
            NodeKind::Operand => "Operand",
            NodeKind::Operator => "Operator",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            NodeKind::Program | NodeKind::Block => Arity::AtLeast(0),
            NodeKind::VariableDefinition => Arity::AtLeast(1),
            NodeKind::IfConditional => Arity::Between(2, 3),
            NodeKind::WhileLoop => Arity::Exactly(2),
            NodeKind::Expression => Arity::Between(1, 3),
            NodeKind::Assignment | NodeKind::ElseConditional | NodeKind::Output => {
                Arity::Exactly(1)
            }
            NodeKind::Input | NodeKind::Variable | NodeKind::Operand | NodeKind::Operator => {
                Arity::Exactly(0)
            }
        }
    }

    pub fn is_leaf(self) -> bool {
        self.arity() == Arity::Exactly(0)
    }

    /// Kinds whose node always carries a literal value.
    pub fn carries_value(self) -> bool {
        matches!(
            self,
            NodeKind::Variable
                | NodeKind::Operand
                | NodeKind::Operator
                | NodeKind::Input
                | NodeKind::Assignment
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn push(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }

    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Every node's child count matches its kind's arity, value-carrying kinds have a
    /// value, and an `Expression` has operand, or operand-operator-operand.
    pub fn is_well_formed(&self) -> bool {
        if !self.kind.arity().accepts(self.children.len()) {
            return false;
        }
        if self.kind.carries_value() && self.value.is_none() {
            return false;
        }
        if self.kind == NodeKind::Expression && self.children.len() == 2 {
            return false;
        }
        self.children.iter().all(SyntaxNode::is_well_formed)
    }

    /// Total node count, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SyntaxNode::node_count).sum::<usize>()
    }
}

fn statements_node(kind: NodeKind, statements: &[Stmt]) -> SyntaxNode {
    let mut node = SyntaxNode::new(kind);
    node.children = statements.iter().map(AstNode::to_syntax).collect();
    node
}

impl AstNode for Program {
    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }

    fn to_syntax(&self) -> SyntaxNode {
        let node = statements_node(NodeKind::Program, &self.statements);
        debug_assert!(node.is_well_formed(), "parser produced ill-formed tree");
        node
    }
}

impl Program {
    /// Inherent shorthand so callers don't need the trait in scope.
    pub fn to_syntax(&self) -> SyntaxNode {
        AstNode::to_syntax(self)
    }
}

impl AstNode for Stmt {
    fn kind(&self) -> NodeKind {
        match self {
            Stmt::Block(n) => n.kind(),
            Stmt::VariableDefinition(n) => n.kind(),
            Stmt::Assignment(n) => n.kind(),
            Stmt::IfConditional(n) => n.kind(),
            Stmt::WhileLoop(n) => n.kind(),
            Stmt::Output(n) => n.kind(),
            Stmt::Input(n) => n.kind(),
        }
    }

    fn to_syntax(&self) -> SyntaxNode {
        match self {
            Stmt::Block(n) => n.to_syntax(),
            Stmt::VariableDefinition(n) => n.to_syntax(),
            Stmt::Assignment(n) => n.to_syntax(),
            Stmt::IfConditional(n) => n.to_syntax(),
            Stmt::WhileLoop(n) => n.to_syntax(),
            Stmt::Output(n) => n.to_syntax(),
            Stmt::Input(n) => n.to_syntax(),
        }
    }
}

impl AstNode for Block {
    fn kind(&self) -> NodeKind {
        NodeKind::Block
    }

    fn to_syntax(&self) -> SyntaxNode {
        statements_node(NodeKind::Block, &self.statements)
    }
}

impl AstNode for VariableDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::VariableDefinition
    }

    // The type literal is not part of the rendered tree.
    fn to_syntax(&self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::VariableDefinition);
        node.children = self
            .variables
            .iter()
            .map(|name| SyntaxNode::leaf(NodeKind::Variable, name.as_str()))
            .collect();
        node
    }
}

impl AstNode for Assignment {
    fn kind(&self) -> NodeKind {
        NodeKind::Assignment
    }

    fn to_syntax(&self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Assignment).with_value(self.target.as_str());
        node.push(self.value.to_syntax());
        node
    }
}

impl AstNode for IfConditional {
    fn kind(&self) -> NodeKind {
        NodeKind::IfConditional
    }

    fn to_syntax(&self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::IfConditional);
        node.push(self.condition.to_syntax());
        node.push(self.then_block.to_syntax());
        if let Some(else_block) = &self.else_block {
            let mut wrapper = SyntaxNode::new(NodeKind::ElseConditional);
            wrapper.push(else_block.to_syntax());
            node.push(wrapper);
        }
        node
    }
}

impl AstNode for WhileLoop {
    fn kind(&self) -> NodeKind {
        NodeKind::WhileLoop
    }

    fn to_syntax(&self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::WhileLoop);
        node.push(self.condition.to_syntax());
        node.push(self.body.to_syntax());
        node
    }
}

impl AstNode for Output {
    fn kind(&self) -> NodeKind {
        NodeKind::Output
    }

    fn to_syntax(&self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Output);
        node.push(self.value.to_syntax());
        node
    }
}

impl AstNode for Input {
    fn kind(&self) -> NodeKind {
        NodeKind::Input
    }

    fn to_syntax(&self) -> SyntaxNode {
        SyntaxNode::new(NodeKind::Input).with_value(self.target.as_str())
    }
}

impl AstNode for Expression {
    fn kind(&self) -> NodeKind {
        NodeKind::Expression
    }

    fn to_syntax(&self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Expression);
        node.push(self.lhs.to_syntax());
        if let Some(binary) = &self.binary {
            node.push(binary.op.to_syntax());
            node.push(binary.rhs.to_syntax());
        }
        node
    }
}

impl AstNode for Operand {
    fn kind(&self) -> NodeKind {
        NodeKind::Operand
    }

    fn to_syntax(&self) -> SyntaxNode {
        SyntaxNode::leaf(NodeKind::Operand, self.text.as_str())
    }
}

impl AstNode for Operator {
    fn kind(&self) -> NodeKind {
        NodeKind::Operator
    }

    fn to_syntax(&self) -> SyntaxNode {
        SyntaxNode::leaf(NodeKind::Operator, self.text.as_str())
    }
}
