use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Authorship, Word};
use crate::warning::Warning;

// ============================================================================
// NAME RECORD
// ============================================================================

/// Hybrid annotation of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HybridKind {
    Formula,
    Named,
}

/// Marks a provisional identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surrogate {
    Comparison,
    Approximation,
}

/// Whether the genus belongs to bacterial nomenclature.
///
/// Ordered `False < Unknown < True`; within one parse the value only rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Bacteria {
    #[default]
    False,
    /// The genus is also used outside bacterial nomenclature.
    Unknown,
    True,
}

/// One parsed scientific name. Built once per input and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub verbatim: String,
    pub id: String,
    pub parser_version: String,
    pub parsed: bool,
    pub cardinality: usize,
    pub virus: bool,
    pub hybrid: Option<HybridKind>,
    pub surrogate: Option<Surrogate>,
    pub bacteria: Bacteria,
    pub tail: String,
    pub warnings: BTreeSet<Warning>,
    /// Highest warning quality; 1 for a clean parse, 0 when unparsed.
    pub quality: u8,
    pub name_data: Option<NameData>,
}

impl Name {
    /// Record for input that was not turned into a name.
    pub fn unparsed(
        verbatim: impl Into<String>,
        id: String,
        parser_version: &str,
        virus: bool,
        tail: impl Into<String>,
    ) -> Self {
        Name {
            verbatim: verbatim.into(),
            id,
            parser_version: parser_version.to_string(),
            parsed: false,
            cardinality: 0,
            virus,
            hybrid: None,
            surrogate: None,
            bacteria: Bacteria::False,
            tail: tail.into(),
            warnings: BTreeSet::new(),
            quality: 0,
            name_data: None,
        }
    }

    /// Warnings in reporting order.
    pub fn warnings(&self) -> impl Iterator<Item = Warning> + '_ {
        self.warnings.iter().copied()
    }

    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }
}

// ============================================================================
// NAME SHAPES
// ============================================================================

/// Shape of a successfully parsed name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameData {
    Uninomial(Uninomial),
    UninomialCombo(UninomialCombo),
    Species(Species),
    NamedSpeciesHybrid {
        genus: Word,
        comparison: Option<Word>,
        hybrid: Word,
        species: SpeciesEpithet,
        infraspecies: Vec<InfraspeciesEpithet>,
    },
    NamedGenusHybrid {
        hybrid: Word,
        name: Box<NameData>,
    },
    HybridFormula(HybridFormula),
    Comparison {
        genus: Word,
        comparison: Word,
        species: Option<SpeciesEpithet>,
    },
    Approximation {
        genus: Word,
        species: Option<SpeciesEpithet>,
        approximation: Word,
        ignored: String,
    },
    /// A uninomial whose parenthetical is an author abbreviation rather than
    /// a subgenus; the author is recorded as the original authorship.
    BotanicalUninomial(Uninomial),
}

impl NameData {
    /// The leading genus or uninomial word of this shape.
    pub fn genus_word(&self) -> Option<&Word> {
        match self {
            NameData::Uninomial(u) | NameData::BotanicalUninomial(u) => Some(&u.word),
            NameData::UninomialCombo(c) => Some(&c.uninomial1.word),
            NameData::Species(s) => Some(&s.genus),
            NameData::NamedSpeciesHybrid { genus, .. }
            | NameData::Comparison { genus, .. }
            | NameData::Approximation { genus, .. } => Some(genus),
            NameData::NamedGenusHybrid { name, .. } => name.genus_word(),
            NameData::HybridFormula(f) => f.first.genus_word(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uninomial {
    pub word: Word,
    pub authorship: Option<Authorship>,
}

/// Two uninomials joined by an intermediate rank ("Aus sect. Bus",
/// "Aus (Bus)").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninomialCombo {
    pub uninomial1: Uninomial,
    pub rank: Rank,
    pub uninomial2: Uninomial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub genus: Word,
    pub subgenus: Option<Word>,
    pub species: SpeciesEpithet,
    pub infraspecies: Vec<InfraspeciesEpithet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEpithet {
    pub word: Word,
    pub authorship: Option<Authorship>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraspeciesEpithet {
    pub word: Word,
    pub rank: Option<Rank>,
    pub authorship: Option<Authorship>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub word: Word,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridFormula {
    pub first: Box<NameData>,
    pub elements: Vec<HybridElement>,
}

/// One `× name` step of a hybrid formula. `species` is absent when the
/// formula ends in a bare hybrid sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridElement {
    pub hybrid_char: Word,
    pub species: Option<NameData>,
}
