use tracing::trace;

use crate::ast::{HybridKind, Name, NameData};
use crate::diagnostics::{ParserError, Result};
use crate::syntax::{CstNode, Rule};
use crate::warning::Warning;

use super::{
    hybrid::{build_hybrid_formula, build_named_genus_hybrid, build_named_species_hybrid},
    species::build_species,
    surrogate::{build_approximation, build_comparison},
    uninomial::{
        build_botanical_uninomial, build_uninomial, build_uninomial_combo, is_botanical_uninomial,
    },
    ParseContext,
};

/// Turn a `sci_name` tree into a finished [`Name`].
///
/// `ctx` arrives carrying whatever the preprocessor already found (its
/// warnings and annotation tail) and is consumed here.
pub fn assemble<N: CstNode>(
    verbatim: &str,
    id: String,
    parser_version: &str,
    root: &N,
    mut ctx: ParseContext,
) -> Result<Name> {
    if root
        .descendants()
        .iter()
        .any(|n| n.rule() == Rule::upper_after_dash)
    {
        ctx.add_warning(Warning::GenusUpperCharAfterDash);
    }

    let name_node = root
        .child(Rule::name)
        .ok_or_else(|| ParserError::tree_shape(root.rule(), "missing name"))?;
    let shape = name_node
        .first_child()
        .ok_or_else(|| ParserError::tree_shape(Rule::name, "empty name"))?;
    trace!(rule = ?shape.rule(), "building name");

    let name_data = match shape.rule() {
        Rule::hybrid_formula => {
            ctx.set_hybrid(HybridKind::Formula);
            NameData::HybridFormula(build_hybrid_formula(&mut ctx, &shape)?)
        }
        Rule::named_genus_hybrid => {
            ctx.set_hybrid(HybridKind::Named);
            build_named_genus_hybrid(&mut ctx, &shape)?
        }
        Rule::named_species_hybrid => {
            ctx.set_hybrid(HybridKind::Named);
            build_named_species_hybrid(&mut ctx, &shape)?
        }
        Rule::single_name => build_single_name(&mut ctx, &shape)?,
        other => return Err(ParserError::tree_shape(other, "unexpected name shape")),
    };

    let grammar_tail = root.child(Rule::tail).map(|t| t.text().to_string());
    let parts = ctx.into_parts();
    let tail = format!("{}{}", grammar_tail.unwrap_or_default(), parts.tail);
    let mut warnings = parts.warnings;
    if !tail.is_empty() {
        warnings.insert(Warning::Tail);
    }
    let quality = warnings.iter().map(|w| w.quality()).max().unwrap_or(1);

    Ok(Name {
        verbatim: verbatim.to_string(),
        id,
        parser_version: parser_version.to_string(),
        parsed: true,
        cardinality: parts.cardinality,
        virus: false,
        hybrid: parts.hybrid,
        surrogate: parts.surrogate,
        bacteria: parts.bacteria,
        tail,
        warnings,
        quality,
        name_data: Some(name_data),
    })
}

/// Build any of the non-hybrid name shapes.
pub(crate) fn build_single_name<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<NameData> {
    let inner = node
        .first_child()
        .ok_or_else(|| ParserError::tree_shape(node.rule(), "empty single name"))?;
    match inner.rule() {
        Rule::name_comp => build_comparison(ctx, &inner),
        Rule::name_approx => build_approximation(ctx, &inner),
        Rule::name_species => Ok(NameData::Species(build_species(ctx, &inner)?)),
        Rule::uninomial => Ok(NameData::Uninomial(build_uninomial(ctx, &inner)?)),
        Rule::uninomial_combo => {
            if is_botanical_uninomial(ctx, &inner)? {
                return Ok(NameData::BotanicalUninomial(build_botanical_uninomial(
                    ctx, &inner,
                )?));
            }
            ctx.add_warning(Warning::UninomialCombo);
            Ok(NameData::UninomialCombo(build_uninomial_combo(ctx, &inner)?))
        }
        other => Err(ParserError::tree_shape(other, "unexpected single name")),
    }
}
