use lazy_static::lazy_static;
use regex::Regex;

use crate::ast::{Word, WordType};
use crate::diagnostics::Result;
use crate::syntax::{CstNode, Rule};
use crate::text::{num_to_str, to_ascii, DIACRITICS, GLOBAL_TRANSLITERATIONS};
use crate::warning::Warning;

use super::ParseContext;

lazy_static! {
    static ref NUMERIC_PREFIX: Regex = Regex::new(r"^([0-9]+)[-.]?(.+)$").unwrap();
}

/// Build a word from a leaf node, normalizing it according to the sub-rules
/// that matched inside it.
pub(crate) fn build_word<N: CstNode>(
    ctx: &mut ParseContext,
    node: &N,
    word_type: WordType,
) -> Result<Word> {
    let raw = node.text();
    let mut word = Word::new(raw, ctx.verbatim_span(node), word_type);
    let mut apostrophe_resolved = false;

    for child in node.descendants() {
        match child.rule() {
            Rule::upper_char_extended | Rule::lower_char_extended => {
                ctx.add_warning(Warning::CharBad);
                word.normalized = to_ascii(&word.normalized, &DIACRITICS)?;
            }
            Rule::word_apostr => {
                ctx.add_warning(Warning::CanonicalApostrophe);
                apostrophe_resolved = true;
                word.normalized = to_ascii(&word.normalized, &DIACRITICS)?;
            }
            Rule::word_starts_with_digit => {
                ctx.add_warning(Warning::SpeciesNumeric);
                word.normalized = spell_numeric_prefix(&word.normalized);
            }
            Rule::apostr_other => {
                ctx.add_warning(Warning::ApostrOther);
                if !apostrophe_resolved {
                    word.normalized = to_ascii(raw, &GLOBAL_TRANSLITERATIONS)?;
                }
            }
            _ => {}
        }
    }

    if matches!(word_type, WordType::Genus | WordType::Uninomial) {
        if word.normalized.ends_with('?') {
            ctx.add_warning(Warning::CapWordQuestion);
            word.normalized.pop();
        }
        if ctx.has_warning(Warning::GenusUpperCharAfterDash) {
            word.normalized = lowercase_after_dash(&word.normalized);
        }
        ctx.check_bacteria(&word.normalized);
    }
    Ok(word)
}

/// "3-notatus" -> "trinotatus".
fn spell_numeric_prefix(value: &str) -> String {
    match NUMERIC_PREFIX.captures(value) {
        Some(caps) => format!("{}{}", num_to_str(&caps[1]), &caps[2]),
        None => value.to_string(),
    }
}

fn lowercase_after_dash(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut after_dash = false;
    for c in value.chars() {
        if after_dash {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        after_dash = c == '-';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_prefix() {
        assert_eq!(spell_numeric_prefix("3-notatus"), "trinotatus");
        assert_eq!(spell_numeric_prefix("21.punctata"), "vigintiunopunctata");
        assert_eq!(spell_numeric_prefix("40punctata"), "40punctata");
        assert_eq!(spell_numeric_prefix("alba"), "alba");
    }

    #[test]
    fn dash_capital() {
        assert_eq!(lowercase_after_dash("Aus-Bus"), "Aus-bus");
        assert_eq!(lowercase_after_dash("Aus"), "Aus");
    }
}
