//! # Binomen
//!
//! Parses biological scientific names ("Homo sapiens Linnaeus, 1758",
//! "Aus bus var. cus", "Salix × capreola") into a typed, normalized record
//! with cardinality, hybrid and surrogate annotations, bacterial-genus
//! detection and a set of data-quality warnings.
//!
//! The pipeline is: [`preprocess`] → pest grammar ([`syntax`]) →
//! tree-walking builders ([`builder`]) → [`ast::Name`]. Most callers only
//! need [`Engine`].

pub mod ast;
pub mod batch;
pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod dict;
pub mod engine;
pub mod preprocess;
pub mod syntax;
pub mod text;
pub mod warning;

pub use crate::ast::{Bacteria, HybridKind, Name, NameData, Surrogate, Word, WordType};
pub use crate::batch::CancelToken;
pub use crate::config::ParserConfig;
pub use crate::diagnostics::{ParserError, Result};
pub use crate::engine::{Engine, IdGenerator, Sha256Id, PARSER_VERSION};
pub use crate::warning::Warning;
