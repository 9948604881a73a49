//! Syntax layer: the scientific-name grammar and the read-only tree contract
//! that the builders consume.

use serde::{Deserialize, Serialize};

pub mod parser;
pub mod tree;

pub use parser::{parse_tree, Rule, GRAMMAR_VERSION};
pub use tree::{CstNode, TreeNode};

/// Half-open byte range. Tree nodes count into the preprocessed body; words
/// on a finished `Name` count into its verbatim text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}
