use crate::ast::{Author, AuthorsGroup, AuthorsTeam, Authorship, Team2, TeamKind, Word, WordType};
use crate::diagnostics::{ParserError, Result};
use crate::syntax::{CstNode, Rule};
use crate::text::fix_all_caps;
use crate::warning::Warning;

use super::{required_child, word::build_word, year::build_year, ParseContext};

pub(crate) fn build_authorship<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<Authorship> {
    let mut original = None;
    let mut combination = None;

    for child in node.children() {
        match child.rule() {
            Rule::original_authorship => {
                let group = required_child(&child, Rule::authors_group)?;
                original = Some(build_authors_group(ctx, &group)?);
            }
            Rule::original_authorship_comb => {
                original = Some(build_basionym(ctx, &child)?);
            }
            Rule::combination_authorship => {
                let group = required_child(&child, Rule::authors_group)?;
                combination = Some(build_authors_group(ctx, &group)?);
            }
            _ => {}
        }
    }

    let original_authors = original
        .ok_or_else(|| ParserError::tree_shape(node.rule(), "no original authorship"))?;
    let terminal_filius = match &combination {
        Some(comb) => comb.terminal_filius,
        None => original_authors.terminal_filius && !original_authors.parenthesized,
    };
    Ok(Authorship {
        verbatim: node.text().to_string(),
        original_authors,
        combination_authors: combination,
        terminal_filius,
    })
}

/// Parenthesized original authorship, possibly with its year written after
/// the closing parenthesis: "(Smith) 1887" means "(Smith, 1887)".
fn build_basionym<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<AuthorsGroup> {
    let basionym = node
        .first_child()
        .ok_or_else(|| ParserError::tree_shape(node.rule(), "empty basionym authorship"))?;
    let group_node = required_child(&basionym, Rule::authors_group)?;
    let mut group = build_authors_group(ctx, &group_node)?;
    group.parenthesized = true;

    if basionym.rule() == Rule::basionym_authorship_year_misformed {
        ctx.add_warning(Warning::YearOrigMisplaced);
        let year_node = required_child(&basionym, Rule::year)?;
        group.team1.year = Some(build_year(ctx, &year_node)?);
    }
    Ok(group)
}

pub(crate) fn build_authors_group<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<AuthorsGroup> {
    let children = node.children();
    let mut iter = children.iter();
    let team1_node = iter
        .next()
        .filter(|n| n.rule() == Rule::authors_team)
        .ok_or_else(|| ParserError::tree_shape(node.rule(), "group without a team"))?;
    let team1 = build_authors_team(ctx, team1_node)?;
    let mut group = AuthorsGroup {
        terminal_filius: team1.terminal_filius,
        team1,
        team2: None,
        parenthesized: false,
    };

    let Some(connector) = iter.next() else {
        return Ok(group);
    };
    let mut word = build_word(ctx, connector, WordType::AuthorWord)?;
    let with_dot = word.verbatim.trim_end().ends_with('.');
    let kind = match connector.rule() {
        Rule::author_ex => {
            ctx.add_warning(Warning::AuthEx);
            if with_dot {
                ctx.add_warning(Warning::AuthExWithDot);
            }
            word.normalized = "ex".to_string();
            TeamKind::Ex
        }
        Rule::author_emend => {
            ctx.add_warning(Warning::AuthEmend);
            if !with_dot {
                ctx.add_warning(Warning::AuthEmendWithoutDot);
            }
            word.normalized = "emend.".to_string();
            TeamKind::Emend
        }
        other => return Err(ParserError::tree_shape(other, "expected `ex` or `emend`")),
    };

    if let Some(team2_node) = iter.next().filter(|n| n.rule() == Rule::authors_team) {
        let team = build_authors_team(ctx, team2_node)?;
        group.terminal_filius = team.terminal_filius;
        group.team2 = Some(Team2 { kind, word, team });
    }
    Ok(group)
}

pub(crate) fn build_authors_team<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
) -> Result<AuthorsTeam> {
    let mut author_nodes = Vec::new();
    let mut separators = Vec::new();
    let mut year = None;

    for child in node.children() {
        match child.rule() {
            Rule::author => author_nodes.push(child),
            Rule::author_sep => separators.push(child.text().to_string()),
            Rule::year => year = Some(build_year(ctx, &child)?),
            _ => {}
        }
    }
    if author_nodes.is_empty() {
        return Err(ParserError::tree_shape(node.rule(), "team without authors"));
    }

    let mut authors = Vec::with_capacity(author_nodes.len());
    for (i, author_node) in author_nodes.iter().enumerate() {
        let mut author = build_author(ctx, author_node)?;
        if let Some(sep) = separators.get(i) {
            author.separator = normalize_separator(sep, i, separators.len());
        }
        authors.push(author);
    }
    let terminal_filius = authors.last().map_or(false, |a| a.filius);
    Ok(AuthorsTeam {
        authors,
        year,
        terminal_filius,
    })
}

fn normalize_separator(sep: &str, index: usize, count: usize) -> String {
    if sep.contains("apud") {
        " apud ".to_string()
    } else if index + 1 < count {
        ", ".to_string()
    } else {
        " & ".to_string()
    }
}

fn build_author<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<Author> {
    let mut words = Vec::new();
    let mut filius = false;

    for child in node.children() {
        let word = match child.rule() {
            Rule::filius => {
                filius = true;
                let mut w = build_word(ctx, &child, WordType::AuthorWordFilius)?;
                w.normalized = "fil.".to_string();
                w
            }
            Rule::unknown_author => {
                ctx.add_warning(Warning::AuthUnknown);
                let mut w = build_word(ctx, &child, WordType::AuthorWord)?;
                if w.verbatim == "?" {
                    ctx.add_warning(Warning::AuthQuestion);
                }
                w.normalized = "anon.".to_string();
                w
            }
            Rule::author_et_al => {
                let mut w = build_word(ctx, &child, WordType::AuthorWord)?;
                w.normalized = "et al.".to_string();
                w
            }
            Rule::author_word => build_author_word(ctx, &child)?,
            _ => continue,
        };
        words.push(word);
    }

    let raw = words
        .iter()
        .map(|w| w.verbatim.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if raw.chars().count() < 2 {
        ctx.add_warning(Warning::AuthShort);
    }
    let value = words
        .iter()
        .map(|w| w.normalized.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Author {
        value,
        separator: String::new(),
        words,
        filius,
    })
}

fn build_author_word<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<Word> {
    let mut word = build_word(ctx, node, WordType::AuthorWord)?;
    let all_caps = node
        .first_child()
        .map_or(false, |c| c.rule() == Rule::all_caps_author_word);
    if all_caps && word.verbatim.chars().filter(|c| c.is_uppercase()).count() > 2 {
        ctx.add_warning(Warning::AuthUpperCase);
        word.normalized = fix_all_caps(&word.normalized);
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators() {
        assert_eq!(normalize_separator(", ", 0, 2), ", ");
        assert_eq!(normalize_separator(" et ", 0, 2), ", ");
        assert_eq!(normalize_separator(", ", 1, 2), " & ");
        assert_eq!(normalize_separator(" apud ", 0, 2), " apud ");
        assert_eq!(normalize_separator(" and ", 0, 1), " & ");
    }
}
