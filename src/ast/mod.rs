//! Typed record of a parsed scientific name.
//!
//! Everything here is plain data: builders in [`crate::builder`] fill it in,
//! renderers read it. Every type is serde-serializable so records can be
//! written out as JSON or YAML unchanged.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::syntax::Span;

mod authorship;
mod name;

pub use authorship::{Author, AuthorsGroup, AuthorsTeam, Authorship, Team2, TeamKind, Year};
pub use name::{
    Bacteria, HybridElement, HybridFormula, HybridKind, InfraspeciesEpithet, Name, NameData,
    Rank, Species, SpeciesEpithet, Surrogate, Uninomial, UninomialCombo,
};

// ============================================================================
// WORDS
// ============================================================================

/// Role a word plays in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordType {
    Unknown,
    Genus,
    Subgenus,
    SpeciesEpithet,
    InfraspeciesEpithet,
    Uninomial,
    AuthorWord,
    AuthorWordFilius,
    Rank,
    Year,
    YearApproximate,
    HybridChar,
    ComparisonMarker,
    ApproxMarker,
}

/// A single word of a name: the text as written, its normalized form, and
/// where it sits in the verbatim input.
///
/// # Examples
///
/// ```rust
/// use binomen::ast::{Word, WordType};
/// use binomen::syntax::Span;
/// let word = Word::new("Homo", Span::new(0, 4), WordType::Genus);
/// assert_eq!(word.normalized, "Homo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub verbatim: String,
    pub normalized: String,
    pub word_type: WordType,
    pub span: Span,
}

impl Word {
    /// A word whose normalized form starts out equal to the verbatim text.
    pub fn new(verbatim: impl Into<String>, span: Span, word_type: WordType) -> Self {
        let verbatim = verbatim.into();
        Word {
            normalized: verbatim.clone(),
            verbatim,
            word_type,
            span,
        }
    }

    /// A copy of this word's text that does not occur in the input, such as a
    /// genus carried over to a later hybrid-formula element.
    pub fn detached(&self, word_type: WordType) -> Self {
        Word {
            verbatim: self.verbatim.clone(),
            normalized: self.normalized.clone(),
            word_type,
            span: Span::default(),
        }
    }
}
