use crate::ast::{
    Authorship, InfraspeciesEpithet, Rank, Species, SpeciesEpithet, Word, WordType,
};
use crate::diagnostics::{ParserError, Result};
use crate::syntax::{CstNode, Rule};
use crate::warning::Warning;

use super::{authorship::build_authorship, required_child, word::build_word, ParseContext};

pub(crate) fn build_species<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<Species> {
    let mut genus = None;
    let mut subgenus = None;
    let mut species = None;
    let mut infraspecies = Vec::new();

    for child in node.children() {
        match child.rule() {
            Rule::genus_word => genus = Some(build_genus(ctx, &child)?),
            Rule::subgenus => {
                let inner = required_child(&child, Rule::uninomial_word)?;
                let word = build_word(ctx, &inner, WordType::Subgenus)?;
                if ctx.dictionaries().is_icn_author(&word.normalized) {
                    ctx.add_warning(Warning::BotanyAuthorNotSubgen);
                } else {
                    subgenus = Some(word);
                }
            }
            Rule::subgenus_or_superspecies => ctx.add_warning(Warning::Superspecies),
            Rule::species_epithet => species = Some(build_species_epithet(ctx, &child)?),
            Rule::infrasp_group => infraspecies = build_infraspecies_group(ctx, &child)?,
            _ => {}
        }
    }

    let genus = genus.ok_or_else(|| ParserError::tree_shape(node.rule(), "species without genus"))?;
    let species =
        species.ok_or_else(|| ParserError::tree_shape(node.rule(), "species without epithet"))?;
    check_filius_boundary(ctx, species.authorship.as_ref(), infraspecies.first());
    ctx.set_cardinality(2 + infraspecies.len());
    Ok(Species {
        genus,
        subgenus,
        species,
        infraspecies,
    })
}

/// Genus word, possibly abbreviated ("A.").
pub(crate) fn build_genus<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<Word> {
    if node.child(Rule::abbr_genus).is_some() {
        ctx.add_warning(Warning::GenusAbbr);
    }
    build_word(ctx, node, WordType::Genus)
}

pub(crate) fn build_species_epithet<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<SpeciesEpithet> {
    let word_node = required_child(node, Rule::word)?;
    let word = build_word(ctx, &word_node, WordType::SpeciesEpithet)?;
    let authorship = match node.child(Rule::authorship) {
        Some(auth) => Some(build_authorship(ctx, &auth)?),
        None => None,
    };
    Ok(SpeciesEpithet { word, authorship })
}

pub(crate) fn build_infraspecies_group<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<Vec<InfraspeciesEpithet>> {
    let mut epithets: Vec<InfraspeciesEpithet> = Vec::new();
    for child in node.children() {
        if child.rule() != Rule::infrasp_epithet {
            continue;
        }
        let epithet = build_infraspecies_epithet(ctx, &child)?;
        if let Some(prev) = epithets.last() {
            check_filius_boundary(ctx, prev.authorship.as_ref(), Some(&epithet));
        }
        epithets.push(epithet);
    }
    Ok(epithets)
}

fn build_infraspecies_epithet<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<InfraspeciesEpithet> {
    let mut word = None;
    let mut rank = None;
    let mut authorship = None;
    for child in node.children() {
        match child.rule() {
            Rule::rank => rank = Some(build_rank(ctx, &child)?),
            Rule::word => word = Some(build_word(ctx, &child, WordType::InfraspeciesEpithet)?),
            Rule::authorship => authorship = Some(build_authorship(ctx, &child)?),
            _ => {}
        }
    }
    let word =
        word.ok_or_else(|| ParserError::tree_shape(node.rule(), "infraspecies without word"))?;
    Ok(InfraspeciesEpithet {
        word,
        rank,
        authorship,
    })
}

/// "L. f. alba": the "f." may be "filius" or the rank forma. Warn when an
/// unranked epithet follows an authorship ending in filius.
pub(crate) fn check_filius_boundary(
    ctx: &mut ParseContext,
    prev_authorship: Option<&Authorship>,
    next: Option<&InfraspeciesEpithet>,
) {
    let ends_in_filius = prev_authorship.map_or(false, |a| a.terminal_filius);
    let unranked = next.map_or(false, |e| e.rank.is_none());
    if ends_in_filius && unranked {
        ctx.add_warning(Warning::AuthAmbiguousFilius);
    }
}

fn build_rank<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<Rank> {
    let Some(kind) = node.first_child() else {
        return Ok(Rank {
            word: build_word(ctx, node, WordType::Rank)?,
        });
    };
    let mut word = build_word(ctx, &kind, WordType::Rank)?;
    match kind.rule() {
        Rule::rank_forma => word.normalized = "f.".to_string(),
        Rule::rank_var => word.normalized = "var.".to_string(),
        Rule::rank_ssp => word.normalized = "subsp.".to_string(),
        Rule::rank_other_uncommon => ctx.add_warning(Warning::RankUncommon),
        _ => {}
    }
    Ok(Rank { word })
}
