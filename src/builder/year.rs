use crate::ast::{WordType, Year};
use crate::diagnostics::Result;
use crate::syntax::{CstNode, Rule};
use crate::warning::Warning;

use super::{word::build_word, ParseContext};

/// Classify a year node. The year word comes from the innermost numeral;
/// approximate years get their own word type.
pub(crate) fn build_year<N: CstNode>(ctx: &mut ParseContext, node: &N) -> Result<Year> {
    let mut word = None;
    let mut approximate = false;

    for child in node.descendants() {
        match child.rule() {
            Rule::year_with_page => ctx.add_warning(Warning::YearPage),
            Rule::year_with_dot => ctx.add_warning(Warning::YearDot),
            Rule::year_range => {
                ctx.add_warning(Warning::YearRange);
                approximate = true;
            }
            Rule::year_with_parens => {
                ctx.add_warning(Warning::YearParens);
                approximate = true;
            }
            Rule::year_approx => {
                ctx.add_warning(Warning::YearSqBrackets);
                approximate = true;
            }
            Rule::year_with_char => {
                ctx.add_warning(Warning::YearChar);
                let mut w = build_word(ctx, &child, WordType::Year)?;
                w.normalized.pop();
                word = Some(w);
            }
            Rule::year_num => {
                if child.text().ends_with('?') {
                    ctx.add_warning(Warning::YearQuestion);
                    approximate = true;
                }
                if word.is_none() {
                    let mut w = build_word(ctx, &child, WordType::Year)?;
                    // "1887?" reads 1887; "188?" keeps its placeholder digit
                    if w.normalized.len() == 5 {
                        w.normalized.pop();
                    }
                    word = Some(w);
                }
            }
            _ => {}
        }
    }

    let mut word = match word {
        Some(w) => w,
        None => build_word(ctx, node, WordType::Year)?,
    };
    if approximate {
        word.word_type = WordType::YearApproximate;
    }
    Ok(Year { word, approximate })
}
