use crate::ast::{NameData, Surrogate, WordType};
use crate::diagnostics::{ParserError, Result};
use crate::syntax::{CstNode, Rule};
use crate::warning::Warning;

use super::{
    species::{build_genus, build_species_epithet},
    word::build_word,
    ParseContext,
};

/// "Aus sp.", "Aus bus aff.": cardinality stays 0 and everything after the
/// marker is kept as ignored text.
pub(crate) fn build_approximation<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<NameData> {
    ctx.set_surrogate(Surrogate::Approximation);
    ctx.add_warning(Warning::NameApprox);

    let mut genus = None;
    let mut species = None;
    let mut approximation = None;
    let mut ignored = String::new();
    for child in node.children() {
        match child.rule() {
            Rule::genus_word => genus = Some(build_genus(ctx, &child)?),
            Rule::species_epithet => species = Some(build_species_epithet(ctx, &child)?),
            Rule::approximation => {
                approximation = Some(build_word(ctx, &child, WordType::ApproxMarker)?)
            }
            Rule::approx_name_ignored => ignored = child.text().to_string(),
            _ => {}
        }
    }
    ctx.set_cardinality(0);

    let (Some(genus), Some(approximation)) = (genus, approximation) else {
        return Err(ParserError::tree_shape(node.rule(), "approximation without genus or marker"));
    };
    Ok(NameData::Approximation {
        genus,
        species,
        approximation,
        ignored,
    })
}

/// "Aus cf. bus": cardinality follows what is present.
pub(crate) fn build_comparison<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<NameData> {
    ctx.set_surrogate(Surrogate::Comparison);
    ctx.add_warning(Warning::NameComparison);

    let mut genus = None;
    let mut comparison = None;
    let mut species = None;
    ctx.set_cardinality(0);
    for child in node.children() {
        match child.rule() {
            Rule::genus_word => {
                genus = Some(build_genus(ctx, &child)?);
                ctx.set_cardinality(1);
            }
            Rule::comparison => {
                comparison = Some(build_word(ctx, &child, WordType::ComparisonMarker)?)
            }
            Rule::species_epithet => {
                species = Some(build_species_epithet(ctx, &child)?);
                ctx.set_cardinality(2);
            }
            _ => {}
        }
    }

    let (Some(genus), Some(comparison)) = (genus, comparison) else {
        return Err(ParserError::tree_shape(node.rule(), "comparison without genus or marker"));
    };
    Ok(NameData::Comparison {
        genus,
        comparison,
        species,
    })
}
