use crate::ast::{HybridElement, HybridFormula, NameData, Species, Surrogate, Word, WordType};
use crate::diagnostics::{ParserError, Result};
use crate::syntax::{CstNode, Rule};
use crate::warning::Warning;

use super::{
    name::build_single_name,
    species::{build_genus, build_infraspecies_group, build_species_epithet, check_filius_boundary},
    word::build_word,
    ParseContext,
};

/// "Aus bus × Aus cus", "Aus bus × cus", "Aus bus ×".
pub(crate) fn build_hybrid_formula<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<HybridFormula> {
    ctx.add_warning(Warning::HybridFormula);
    let children = node.children();
    let mut iter = children.iter();
    let first_node = iter
        .next()
        .filter(|n| n.rule() == Rule::single_name)
        .ok_or_else(|| ParserError::tree_shape(node.rule(), "formula without first name"))?;
    let first = build_single_name(ctx, first_node)?;

    let mut elements = Vec::new();
    let mut pending: Option<Word> = None;
    for child in iter {
        match child.rule() {
            Rule::hybrid_char => {
                if let Some(hybrid_char) = pending.take() {
                    ctx.add_warning(Warning::HybridFormulaProbIncomplete);
                    elements.push(HybridElement {
                        hybrid_char,
                        species: None,
                    });
                }
                pending = Some(build_word(ctx, child, WordType::HybridChar)?);
            }
            Rule::single_name => {
                let hybrid_char = pending.take().ok_or_else(|| {
                    ParserError::tree_shape(child.rule(), "formula element without hybrid sign")
                })?;
                let species = build_single_name(ctx, child)?;
                elements.push(HybridElement {
                    hybrid_char,
                    species: Some(species),
                });
            }
            Rule::species_epithet => {
                ctx.add_warning(Warning::HybridFormulaIncomplete);
                let hybrid_char = pending.take().ok_or_else(|| {
                    ParserError::tree_shape(child.rule(), "formula element without hybrid sign")
                })?;
                let genus = first
                    .genus_word()
                    .map(|g| g.detached(WordType::Genus))
                    .ok_or_else(|| ParserError::tree_shape(node.rule(), "first name has no genus"))?;
                let species = build_species_epithet(ctx, child)?;
                elements.push(HybridElement {
                    hybrid_char,
                    species: Some(NameData::Species(Species {
                        genus,
                        subgenus: None,
                        species,
                        infraspecies: Vec::new(),
                    })),
                });
            }
            _ => {}
        }
    }
    if let Some(hybrid_char) = pending {
        ctx.add_warning(Warning::HybridFormulaProbIncomplete);
        elements.push(HybridElement {
            hybrid_char,
            species: None,
        });
    }

    let mut formula = HybridFormula {
        first: Box::new(first),
        elements,
    };
    expand_abbreviated_genera(&mut formula);
    ctx.set_cardinality(0);
    Ok(formula)
}

/// Replace "A." in later elements with the first species' genus when the
/// letters agree.
fn expand_abbreviated_genera(formula: &mut HybridFormula) {
    let NameData::Species(first) = formula.first.as_ref() else {
        return;
    };
    let full = first.genus.normalized.clone();
    for element in &mut formula.elements {
        let Some(NameData::Species(sp)) = element.species.as_mut() else {
            continue;
        };
        let Some(prefix) = sp.genus.normalized.strip_suffix('.') else {
            continue;
        };
        if !prefix.is_empty() && full.starts_with(prefix) && full.len() > prefix.len() {
            sp.genus.normalized = full.clone();
        }
    }
}

/// "×Agropogon littoralis", "× Agropogon".
pub(crate) fn build_named_genus_hybrid<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<NameData> {
    let children = node.children();
    let (Some(hybrid_node), Some(name_node)) = (children.first(), children.get(1)) else {
        return Err(ParserError::tree_shape(node.rule(), "named hybrid without name"));
    };
    let hybrid = build_word(ctx, hybrid_node, WordType::HybridChar)?;
    ctx.add_warning(Warning::HybridNamed);
    if hybrid_node.span().end == name_node.span().start {
        ctx.add_warning(Warning::HybridCharNoSpace);
    }
    let name = build_single_name(ctx, name_node)?;
    Ok(NameData::NamedGenusHybrid {
        hybrid,
        name: Box::new(name),
    })
}

/// "Salix × capreola", "Aus cf. ×bus".
pub(crate) fn build_named_species_hybrid<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<NameData> {
    let mut genus = None;
    let mut comparison = None;
    let mut hybrid = None;
    let mut species = None;
    let mut infraspecies = Vec::new();
    for child in node.children() {
        match child.rule() {
            Rule::genus_word => genus = Some(build_genus(ctx, &child)?),
            Rule::comparison => {
                ctx.add_warning(Warning::NameComparison);
                ctx.set_surrogate(Surrogate::Comparison);
                comparison = Some(build_word(ctx, &child, WordType::ComparisonMarker)?);
            }
            Rule::hybrid_char => hybrid = Some(build_word(ctx, &child, WordType::HybridChar)?),
            Rule::species_epithet => species = Some(build_species_epithet(ctx, &child)?),
            Rule::infrasp_group => infraspecies = build_infraspecies_group(ctx, &child)?,
            _ => {}
        }
    }
    let (Some(genus), Some(hybrid), Some(species)) = (genus, hybrid, species) else {
        return Err(ParserError::tree_shape(node.rule(), "incomplete named species hybrid"));
    };

    ctx.add_warning(Warning::HybridNamed);
    if hybrid.span.end == species.word.span.start {
        ctx.add_warning(Warning::HybridCharNoSpace);
    }
    check_filius_boundary(ctx, species.authorship.as_ref(), infraspecies.first());
    ctx.set_cardinality(2 + infraspecies.len());
    Ok(NameData::NamedSpeciesHybrid {
        genus,
        comparison,
        hybrid,
        species,
        infraspecies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SpeciesEpithet;
    use crate::syntax::Span;

    fn species(genus: &str, epithet: &str) -> NameData {
        NameData::Species(Species {
            genus: Word::new(genus, Span::default(), WordType::Genus),
            subgenus: None,
            species: SpeciesEpithet {
                word: Word::new(epithet, Span::default(), WordType::SpeciesEpithet),
                authorship: None,
            },
            infraspecies: Vec::new(),
        })
    }

    fn element(name: NameData) -> HybridElement {
        HybridElement {
            hybrid_char: Word::new("×", Span::default(), WordType::HybridChar),
            species: Some(name),
        }
    }

    fn genus_of(element: &HybridElement) -> &str {
        match &element.species {
            Some(NameData::Species(sp)) => &sp.genus.normalized,
            _ => "",
        }
    }

    #[test]
    fn expands_matching_abbreviation_only() {
        let mut formula = HybridFormula {
            first: Box::new(species("Asplenium", "rhizophyllum")),
            elements: vec![
                element(species("A.", "ruta-muraria")),
                element(species("Ca.", "alba")),
                element(species("Camptosorus", "sibiricus")),
            ],
        };
        expand_abbreviated_genera(&mut formula);
        assert_eq!(genus_of(&formula.elements[0]), "Asplenium");
        assert_eq!(genus_of(&formula.elements[1]), "Ca.");
        assert_eq!(genus_of(&formula.elements[2]), "Camptosorus");
    }
}
