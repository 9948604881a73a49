use crate::ast::{
    Author, AuthorsGroup, AuthorsTeam, Authorship, Rank, Uninomial, UninomialCombo, Word,
    WordType,
};
use crate::diagnostics::{ParserError, Result};
use crate::syntax::{CstNode, Rule};
use crate::warning::Warning;

use super::{
    authorship::{build_authors_group, build_authorship},
    required_child,
    word::build_word,
    ParseContext,
};

pub(crate) fn build_uninomial<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<Uninomial> {
    let word_node = required_child(node, Rule::uninomial_word)?;
    let word = build_word(ctx, &word_node, WordType::Uninomial)?;
    let authorship = match node.child(Rule::authorship) {
        Some(auth) => Some(build_authorship(ctx, &auth)?),
        None => None,
    };
    ctx.set_cardinality(1);
    Ok(Uninomial { word, authorship })
}

/// "Aus (Mill.)": the parenthetical of a combination is a known ICN author
/// abbreviation, not a subgenus.
pub(crate) fn is_botanical_uninomial<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<bool> {
    let children = node.children();
    let (Some(first), Some(second)) = (children.first(), children.get(1)) else {
        return Ok(false);
    };
    if first.rule() != Rule::uninomial_word || second.rule() != Rule::subgenus {
        return Ok(false);
    }
    let Some(inner) = second.child(Rule::uninomial_word) else {
        return Ok(false);
    };
    let word = build_word(ctx, &inner, WordType::Unknown)?;
    Ok(ctx.dictionaries().is_icn_author(&word.normalized))
}

pub(crate) fn build_botanical_uninomial<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<Uninomial> {
    let children = node.children();
    let (Some(word_node), Some(paren)) = (children.first(), children.get(1)) else {
        return Err(ParserError::tree_shape(node.rule(), "incomplete uninomial combination"));
    };
    let word = build_word(ctx, word_node, WordType::Uninomial)?;
    let author_node = required_child(paren, Rule::uninomial_word)?;
    let author_word = build_word(ctx, &author_node, WordType::AuthorWord)?;

    let author = Author {
        value: author_word.normalized.clone(),
        separator: String::new(),
        words: vec![author_word],
        filius: false,
    };
    let original_authors = AuthorsGroup {
        team1: AuthorsTeam {
            authors: vec![author],
            year: None,
            terminal_filius: false,
        },
        team2: None,
        parenthesized: true,
        terminal_filius: false,
    };

    let mut verbatim = paren.text().to_string();
    let mut combination_authors = None;
    if let Some(auth) = children.get(2).filter(|n| n.rule() == Rule::authorship) {
        match auth.first_child() {
            Some(inner) if inner.rule() == Rule::original_authorship => {
                let group = required_child(&inner, Rule::authors_group)?;
                combination_authors = Some(build_authors_group(ctx, &group)?);
                verbatim = format!("{verbatim} {}", auth.text());
            }
            Some(_) => ctx.prepend_tail(&format!(" {}", auth.text())),
            None => {}
        }
    }

    ctx.add_warning(Warning::BotanyAuthorNotSubgen);
    ctx.set_cardinality(1);
    Ok(Uninomial {
        word,
        authorship: Some(Authorship {
            verbatim,
            original_authors,
            combination_authors,
            terminal_filius: false,
        }),
    })
}

pub(crate) fn build_uninomial_combo<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<UninomialCombo> {
    let children = node.children();
    let first = children
        .first()
        .ok_or_else(|| ParserError::tree_shape(node.rule(), "empty uninomial combination"))?;

    let combo = if first.rule() == Rule::uninomial {
        // "Aus sect. Bus"
        let (Some(rank_node), Some(second)) = (children.get(1), children.get(2)) else {
            return Err(ParserError::tree_shape(node.rule(), "combination without rank"));
        };
        UninomialCombo {
            uninomial1: build_uninomial(ctx, first)?,
            rank: build_uninomial_rank(ctx, rank_node)?,
            uninomial2: build_uninomial(ctx, second)?,
        }
    } else {
        // "Aus (Bus) L."
        let word = build_word(ctx, first, WordType::Uninomial)?;
        let paren = children
            .get(1)
            .ok_or_else(|| ParserError::tree_shape(node.rule(), "combination without subgenus"))?;
        let inner = required_child(paren, Rule::uninomial_word)?;
        let second = build_word(ctx, &inner, WordType::Uninomial)?;
        let authorship = match children.get(2).filter(|n| n.rule() == Rule::authorship) {
            Some(auth) => Some(build_authorship(ctx, auth)?),
            None => None,
        };
        let mut rank_word = Word::new("", ctx.verbatim_span(paren), WordType::Rank);
        rank_word.span.end = rank_word.span.start;
        rank_word.normalized = "subgen.".to_string();
        UninomialCombo {
            uninomial1: Uninomial {
                word,
                authorship: None,
            },
            rank: Rank { word: rank_word },
            uninomial2: Uninomial {
                word: second,
                authorship,
            },
        }
    };
    ctx.set_cardinality(1);
    Ok(combo)
}

fn build_uninomial_rank<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<Rank> {
    let mut word = build_word(ctx, node, WordType::Rank)?;
    if word.verbatim.starts_with("subg") {
        word.normalized = "subgen.".to_string();
    } else if word.verbatim.starts_with("fam") {
        word.normalized = "fam.".to_string();
    }
    Ok(Rank { word })
}
