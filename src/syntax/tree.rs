//! Read-only view of a concrete parse tree.
//!
//! Builders walk trees only through [`CstNode`], so they do not care whether
//! the tree came straight from pest or was captured into an owned
//! [`TreeNode`].

use pest::iterators::Pair;
use serde::Serialize;

use super::{Rule, Span};

/// A node of a concrete parse tree.
pub trait CstNode: Sized + Clone {
    /// Grammar rule that produced this node.
    fn rule(&self) -> Rule;

    /// Byte span of the node inside the parsed body.
    fn span(&self) -> Span;

    /// Matched text.
    fn text(&self) -> &str;

    /// Direct children, in source order.
    fn children(&self) -> Vec<Self>;

    fn first_child(&self) -> Option<Self> {
        self.children().into_iter().next()
    }

    /// First direct child produced by `rule`.
    fn child(&self, rule: Rule) -> Option<Self> {
        self.children().into_iter().find(|c| c.rule() == rule)
    }

    /// Every node below this one, preorder.
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            out.push(node);
        }
        out
    }
}

impl<'i> CstNode for Pair<'i, Rule> {
    fn rule(&self) -> Rule {
        self.as_rule()
    }

    fn span(&self) -> Span {
        let span = self.as_span();
        Span::new(span.start(), span.end())
    }

    fn text(&self) -> &str {
        self.as_str()
    }

    fn children(&self) -> Vec<Self> {
        self.clone().into_inner().collect()
    }
}

/// Owned copy of a parse tree, detached from the input buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    #[serde(serialize_with = "serialize_rule")]
    pub rule: Rule,
    pub span: Span,
    pub text: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Capture any tree into owned form.
    pub fn capture<N: CstNode>(node: &N) -> Self {
        TreeNode {
            rule: node.rule(),
            span: node.span(),
            text: node.text().to_string(),
            children: node.children().iter().map(TreeNode::capture).collect(),
        }
    }
}

impl CstNode for TreeNode {
    fn rule(&self) -> Rule {
        self.rule
    }

    fn span(&self) -> Span {
        self.span
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn children(&self) -> Vec<Self> {
        self.children.clone()
    }
}

fn serialize_rule<S: serde::Serializer>(rule: &Rule, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{rule:?}"))
}
