use std::collections::BTreeSet;

use crate::ast::{Bacteria, HybridKind, Surrogate};
use crate::dict::{BacterialGenus, Dictionaries};
use crate::preprocess::OffsetMap;
use crate::syntax::{CstNode, Span};
use crate::warning::Warning;

/// State accumulated while one name is being built.
///
/// A context lives for exactly one parse and is consumed by the assembler
/// when the record is finished.
#[derive(Debug)]
pub struct ParseContext<'d> {
    dictionaries: &'d Dictionaries,
    offsets: OffsetMap,
    warnings: BTreeSet<Warning>,
    hybrid: Option<HybridKind>,
    surrogate: Option<Surrogate>,
    bacteria: Bacteria,
    cardinality: usize,
    tail: String,
}

/// What a finished context contributes to the record.
#[derive(Debug)]
pub(crate) struct ContextParts {
    pub warnings: BTreeSet<Warning>,
    pub hybrid: Option<HybridKind>,
    pub surrogate: Option<Surrogate>,
    pub bacteria: Bacteria,
    pub cardinality: usize,
    pub tail: String,
}

impl<'d> ParseContext<'d> {
    pub fn new(dictionaries: &'d Dictionaries) -> Self {
        ParseContext {
            dictionaries,
            offsets: OffsetMap::default(),
            warnings: BTreeSet::new(),
            hybrid: None,
            surrogate: None,
            bacteria: Bacteria::False,
            cardinality: 0,
            tail: String::new(),
        }
    }

    /// Report word spans through `offsets` instead of as body offsets.
    pub fn with_offsets(mut self, offsets: OffsetMap) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn dictionaries(&self) -> &'d Dictionaries {
        self.dictionaries
    }

    /// Span of `node` in the verbatim input.
    pub fn verbatim_span<N: CstNode>(&self, node: &N) -> Span {
        self.offsets.span(node.span())
    }

    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.insert(warning);
    }

    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }

    pub fn set_hybrid(&mut self, hybrid: HybridKind) {
        self.hybrid = Some(hybrid);
    }

    pub fn set_surrogate(&mut self, surrogate: Surrogate) {
        self.surrogate = Some(surrogate);
    }

    pub fn set_cardinality(&mut self, cardinality: usize) {
        self.cardinality = cardinality;
    }

    pub fn set_tail(&mut self, tail: impl Into<String>) {
        self.tail = tail.into();
    }

    /// Put text that precedes the current tail in the input in front of it.
    pub fn prepend_tail(&mut self, text: &str) {
        self.tail.insert_str(0, text);
    }

    pub fn bacteria(&self) -> Bacteria {
        self.bacteria
    }

    /// Look a genus up in the bacterial table and raise the bacteria state.
    pub fn check_bacteria(&mut self, genus: &str) {
        match self.dictionaries.bacterial_genus(genus) {
            Some(BacterialGenus::Bacterial) => {
                self.raise_bacteria(Bacteria::True);
            }
            Some(BacterialGenus::Homonym) => {
                if self.raise_bacteria(Bacteria::Unknown) {
                    self.add_warning(Warning::BacteriaMaybe);
                }
            }
            None => {}
        }
    }

    fn raise_bacteria(&mut self, state: Bacteria) -> bool {
        if state > self.bacteria {
            self.bacteria = state;
            return true;
        }
        false
    }

    pub(crate) fn into_parts(self) -> ContextParts {
        ContextParts {
            warnings: self.warnings,
            hybrid: self.hybrid,
            surrogate: self.surrogate,
            bacteria: self.bacteria,
            cardinality: self.cardinality,
            tail: self.tail,
        }
    }
}
