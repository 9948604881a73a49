//! # Name Builders
//!
//! Tree-walking rules that turn a concrete parse tree into a typed
//! [`Name`](crate::ast::Name).
//!
//! ## Layout
//!
//! - **Context**: [`ParseContext`] holds everything one parse accumulates
//!   (warnings, hybrid and surrogate annotations, bacteria state,
//!   cardinality, leftover tail). It is passed by `&mut` to every builder.
//! - **Words**: `word` normalizes single leaves; `year` handles the year
//!   variants.
//! - **Structures**: `authorship`, `species`, `uninomial`, `surrogate` and
//!   `hybrid` build the name shapes bottom-up.
//! - **Assembly**: [`assemble`] dispatches on the top rule and finishes the
//!   record.
//!
//! Builders read the tree only through [`CstNode`], and a node that lacks a
//! child the grammar always produces is reported as
//! [`ParserError::TreeShape`] rather than a panic.

use crate::diagnostics::{ParserError, Result};
use crate::syntax::{CstNode, Rule};

pub mod context;

mod authorship;
mod hybrid;
mod name;
mod species;
mod surrogate;
mod uninomial;
mod word;
mod year;

pub use context::ParseContext;
pub use name::assemble;

/// First child of `node` produced by `rule`, or a tree-shape error.
pub(crate) fn required_child<N: CstNode>(node: &N, rule: Rule) -> Result<N> {
    node.child(rule).ok_or_else(|| {
        ParserError::tree_shape(node.rule(), format!("missing {rule:?} child"))
    })
}
