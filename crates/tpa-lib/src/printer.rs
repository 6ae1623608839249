//! Indented text and JSON rendering of a [`SyntaxNode`] tree.

use std::fmt::Write;

use tpa_core::Colors;

use crate::parser::tree::SyntaxNode;

/// Output encoding for a rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeFormat {
    #[default]
    Text,
    Json,
}

impl TreeFormat {
    /// Default file name when persisting a tree in this format.
    pub fn default_file_name(self) -> &'static str {
        match self {
            TreeFormat::Text => "tree.txt",
            TreeFormat::Json => "tree.json",
        }
    }

    /// Renders `root` without colors. JSON output ends with a newline like text output.
    pub fn render(self, root: &SyntaxNode) -> Result<String, serde_json::Error> {
        match self {
            TreeFormat::Text => Ok(TreePrinter::new(root).dump()),
            TreeFormat::Json => {
                let mut out = serde_json::to_string_pretty(root)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

pub struct TreePrinter<'a> {
    root: &'a SyntaxNode,
    colors: Colors,
}

impl<'a> TreePrinter<'a> {
    pub fn new(root: &'a SyntaxNode) -> Self {
        Self {
            root,
            colors: Colors::OFF,
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: &SyntaxNode, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        let c = &self.colors;
        if !c.is_enabled() {
            writeln!(w, "{}{}({})", indent, node.kind, node.value())?;
            return self.format_children(node, depth, w);
        }
        writeln!(
            w,
            "{}{}{}{}{}({}{}{}){}",
            indent,
            c.kind,
            node.kind,
            c.reset,
            c.punct,
            c.value,
            node.value(),
            c.punct,
            c.reset,
        )?;
        self.format_children(node, depth, w)
    }

    fn format_children(
        &self,
        node: &SyntaxNode,
        depth: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        for child in &node.children {
            self.format_node(child, depth + 1, w)?;
        }
        Ok(())
    }
}
