//! Cleanup that runs before the grammar.
//!
//! Detects input that is not a scientific name at all (viruses, placeholder
//! text), moves annotations such as "sensu ..." into the tail, normalizes
//! spaces, and rewrites a stand-alone ASCII `x` used as a hybrid sign to `×`.
//!
//! The hybrid-sign rewrite is a heuristic. Known false positives: a lone
//! author initial `X` between spaces ("Hall X Hydnellum") becomes `×`.
//! Known false negatives: an `x` glued to a lower-case epithet ("xcapreola")
//! is left alone.

use lazy_static::lazy_static;
use regex::Regex;

use crate::syntax::Span;
use crate::warning::Warning;

lazy_static! {
    static ref VIRUS: Regex = Regex::new(
        r"(?i)\b(?:ictv|\w*virus(?:es)?|\w*viroids?|\w*phages?|prions?|\w*satellites?|m?npv|vectors?|particles?)\b|\bvir\."
    )
    .unwrap();
    static ref NO_PARSE: Vec<Regex> = vec![
        Regex::new(r"(?i)^\s*(?:not|none|unidentified)\b").unwrap(),
        Regex::new(r"(?i)\bincertae\s+sedis\b").unwrap(),
        Regex::new(r"(?i)\binc\.\s*sed\.").unwrap(),
        Regex::new(r"(?i)phytoplasma\b").unwrap(),
        Regex::new(r"\bplasmids?\b").unwrap(),
        Regex::new(r"\b(?:\w*[\p{Ll}\d])?RNA\b").unwrap(),
    ];
    static ref ANNOTATION: Regex = Regex::new(
        r"\s+(?:sensu\b|s\.\s?s\.|s\.\s?l\.|s\.\s?str\.|nomen\s+nudum|nom\.\s?nud\.|nom\.\s?illeg\.|nom\.\s?inval\.|auct\.\s+non\b|non\s)"
    )
    .unwrap();
    static ref HYBRID_START: Regex = Regex::new(r"^(\s*)[xX](\s?\p{Lu})").unwrap();
    static ref HYBRID_MIDDLE: Regex = Regex::new(r"(\s)[xX](\s)").unwrap();
    static ref HYBRID_END: Regex = Regex::new(r"(\s)[xX]$").unwrap();
}

/// Maps byte offsets in a preprocessed body back to the raw input.
///
/// Entry `i` is the raw offset of body byte `i`, with one extra entry for the
/// end of the body. An empty map is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OffsetMap(Vec<usize>);

impl OffsetMap {
    pub fn to_verbatim(&self, offset: usize) -> usize {
        self.0.get(offset).copied().unwrap_or(offset)
    }

    pub fn span(&self, span: Span) -> Span {
        Span::new(self.to_verbatim(span.start), self.to_verbatim(span.end))
    }
}

/// Result of cleaning one raw name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preprocessed {
    /// Text handed to the grammar.
    pub body: String,
    /// Where each byte of `body` sits in the raw input.
    pub offsets: OffsetMap,
    /// Annotation split off the end, or the whole input when it is bypassed.
    pub tail: String,
    pub virus: bool,
    pub no_parse: bool,
    pub warnings: Vec<Warning>,
}

impl Preprocessed {
    /// Input that goes around the grammar entirely.
    pub fn is_bypassed(&self) -> bool {
        self.virus || self.no_parse
    }

    fn bypass(raw: &str, virus: bool) -> Self {
        Preprocessed {
            body: String::new(),
            offsets: OffsetMap::default(),
            tail: raw.to_string(),
            virus,
            no_parse: !virus,
            warnings: Vec::new(),
        }
    }
}

pub fn preprocess(raw: &str) -> Preprocessed {
    if is_virus(raw) {
        return Preprocessed::bypass(raw, true);
    }
    if is_no_parse(raw) {
        return Preprocessed::bypass(raw, false);
    }

    let mut warnings = Vec::new();
    let (mut text, mut offsets) = normalize_spaces(raw, &mut warnings);
    let trimmed_len = text.trim_end().len();
    if trimmed_len < text.len() {
        warnings.push(Warning::WhiteSpaceTrail);
        text.truncate(trimmed_len);
        offsets.truncate(trimmed_len + 1);
    }
    if text.trim_start().contains("  ") {
        warnings.push(Warning::SpaceMultiple);
    }

    let split = annotation_start(&text);
    let tail = text.split_off(split);
    offsets.truncate(split + 1);
    let (body, offsets) = rewrite_hybrid_chars(&text, offsets);
    Preprocessed {
        body,
        offsets: OffsetMap(offsets),
        tail,
        virus: false,
        no_parse: false,
        warnings,
    }
}

pub fn is_virus(raw: &str) -> bool {
    VIRUS.is_match(raw)
}

pub fn is_no_parse(raw: &str) -> bool {
    NO_PARSE.iter().any(|re| re.is_match(raw))
}

/// Rewrite an ASCII `x`/`X` that stands alone as a hybrid sign.
pub fn normalize_hybrid_chars(body: &str) -> String {
    rewrite_hybrid_chars(body, (0..=body.len()).collect()).0
}

fn rewrite_hybrid_chars(text: &str, offsets: Vec<usize>) -> (String, Vec<usize>) {
    // Each pattern's first group ends right before the `x`.
    let signs: Vec<usize> = HYBRID_START
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.end())
        .into_iter()
        .collect();
    let (text, offsets) = replace_signs(text, offsets, &signs);

    let signs: Vec<usize> = HYBRID_MIDDLE
        .captures_iter(&text)
        .filter_map(|c| c.get(1))
        .map(|m| m.end())
        .collect();
    let (text, offsets) = replace_signs(&text, offsets, &signs);

    let signs: Vec<usize> = HYBRID_END
        .captures(&text)
        .and_then(|c| c.get(1))
        .map(|m| m.end())
        .into_iter()
        .collect();
    replace_signs(&text, offsets, &signs)
}

/// Swap the one-byte `x` at each position for `×`, keeping `offsets` aligned.
fn replace_signs(text: &str, offsets: Vec<usize>, signs: &[usize]) -> (String, Vec<usize>) {
    if signs.is_empty() {
        return (text.to_string(), offsets);
    }
    let mut out = String::with_capacity(text.len() + signs.len());
    let mut map = Vec::with_capacity(offsets.len() + signs.len());
    let mut last = 0;
    for &pos in signs {
        out.push_str(&text[last..pos]);
        map.extend_from_slice(&offsets[last..pos]);
        out.push('×');
        map.extend(std::iter::repeat(offsets[pos]).take('×'.len_utf8()));
        last = pos + 1;
    }
    out.push_str(&text[last..]);
    map.extend_from_slice(&offsets[last..]);
    (out, map)
}

fn annotation_start(text: &str) -> usize {
    ANNOTATION.find(text).map_or(text.len(), |m| m.start())
}

/// Replace non-standard spaces with ASCII spaces. The offsets cover every
/// output byte plus the end.
fn normalize_spaces(raw: &str, warnings: &mut Vec<Warning>) -> (String, Vec<usize>) {
    let mut text = String::with_capacity(raw.len());
    let mut offsets = Vec::with_capacity(raw.len() + 1);
    let mut non_standard = false;
    for (i, c) in raw.char_indices() {
        let c = if c != ' ' && is_space(c) {
            non_standard = true;
            ' '
        } else {
            c
        };
        offsets.extend(std::iter::repeat(i).take(c.len_utf8()));
        text.push(c);
    }
    offsets.push(raw.len());
    if non_standard {
        warnings.push(Warning::SpaceNonStandard);
    }
    (text, offsets)
}

fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{a0}' | '\u{2000}'..='\u{200a}' | '\u{202f}' | '\u{205f}' | '\u{3000}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hybrid_sign_at_start() {
        assert_eq!(normalize_hybrid_chars("xAgropogon littoralis"), "×Agropogon littoralis");
        assert_eq!(normalize_hybrid_chars("XAgropogon littoralis"), "×Agropogon littoralis");
        assert_eq!(normalize_hybrid_chars("x Agropogon littoralis"), "× Agropogon littoralis");
        assert_eq!(normalize_hybrid_chars("X Agropogon littoralis"), "× Agropogon littoralis");
    }

    #[test]
    fn hybrid_sign_between_and_after_words() {
        assert_eq!(
            normalize_hybrid_chars("Asplenium X inexpectatum"),
            "Asplenium × inexpectatum"
        );
        assert_eq!(normalize_hybrid_chars("Salix x capreola"), "Salix × capreola");
        assert_eq!(
            normalize_hybrid_chars("Arthopyrenia hyalospora x"),
            "Arthopyrenia hyalospora ×"
        );
        assert_eq!(normalize_hybrid_chars("Hall X Hydnellum"), "Hall × Hydnellum");
    }

    #[test]
    fn genus_starting_with_x_is_kept() {
        assert_eq!(normalize_hybrid_chars("Xanthium strumarium"), "Xanthium strumarium");
        assert_eq!(normalize_hybrid_chars("Salix xcapreola"), "Salix xcapreola");
    }

    #[test]
    fn leading_spaces_are_kept() {
        let p = preprocess("    Asplenium       × inexpectatum");
        assert_eq!(p.body, "    Asplenium       × inexpectatum");
        assert!(p.warnings.contains(&Warning::SpaceMultiple));
    }

    #[test]
    fn viruses() {
        for name in [
            "Arv1virus ",
            "Turtle herpesviruses",
            "Cre expression vector",
            "Abutilon mosaic vir. ICTV",
            "Aeromonas phage 65",
            "Apple scar skin viroid",
            "Human rhinovirus A11",
            "Tomato leaf curl Java betasatellite",
            "Intracisternal A-particles",
            "Uranotaenia sapphirina NPV",
            "Spodoptera exigua MNPV",
            "Bacteriophage PH75",
        ] {
            assert!(is_virus(name), "{name}");
        }
        assert!(!is_virus("Homo sapiens"));
        assert!(!is_virus("Virgilia oroboides"));
    }

    #[test]
    fn no_parse_markers() {
        for name in [
            "Not Homo sapiens",
            "None Homo sapiens",
            "Unidentified species",
            "Aus incertae sedis",
            "Aus Incertae Sedis",
            "Aus inc.sed.",
            "Homo sapiensphytoplasma Linn",
            "E. coli plasmids",
            "E. coli RNA",
            "E. coli 32RNA",
            "mRNA",
        ] {
            assert!(is_no_parse(name), "{name}");
        }
        for name in [
            "Nothomo sapiens",
            "Homo sapiensphytoplasmaoid",
            "Aus plasmidia",
            "KURNAKOV",
            "Aus bus CORNA",
        ] {
            assert!(!is_no_parse(name), "{name}");
        }
    }

    #[test]
    fn bypassed_input_keeps_verbatim_tail() {
        let p = preprocess("Not Homo sapiens");
        assert!(p.no_parse && !p.virus && p.is_bypassed());
        assert_eq!(p.tail, "Not Homo sapiens");
        assert!(p.body.is_empty());
    }

    #[test]
    fn annotations_move_to_tail() {
        let p = preprocess("Homo sapiens sensu Linn.");
        assert_eq!(p.body, "Homo sapiens");
        assert_eq!(p.tail, " sensu Linn.");

        let p = preprocess("Homo sapiens s. s.");
        assert_eq!(p.tail, " s. s.");

        let p = preprocess("Homo sapiens nomen nudum");
        assert_eq!(p.tail, " nomen nudum");

        let p = preprocess("Homo sapiens S. S.");
        assert_eq!(p.body, "Homo sapiens S. S.");
        assert!(p.tail.is_empty());
    }

    #[test]
    fn offsets_follow_rewrites() {
        let p = preprocess("Salix x capreola");
        assert_eq!(p.body, "Salix × capreola");
        // "capreola" starts at 9 in the body and at 8 in the raw text.
        assert_eq!(p.offsets.span(Span::new(9, 17)), Span::new(8, 16));
        assert_eq!(p.offsets.span(Span::new(6, 8)), Span::new(6, 7));

        let raw = "Homo\u{3000}sapiens";
        let p = preprocess(raw);
        assert_eq!(p.body, "Homo sapiens");
        let span = p.offsets.span(Span::new(5, 12));
        assert_eq!(&raw[span.start..span.end], "sapiens");
    }

    #[test]
    fn offsets_stop_at_the_annotation() {
        let p = preprocess("Homo sapiens sensu Linn.");
        assert_eq!(p.offsets.to_verbatim(p.body.len()), 12);
    }

    #[test]
    fn whitespace_warnings() {
        let p = preprocess("Homo\u{a0}sapiens  ");
        assert_eq!(p.body, "Homo sapiens");
        assert!(p.warnings.contains(&Warning::SpaceNonStandard));
        assert!(p.warnings.contains(&Warning::WhiteSpaceTrail));
        assert!(!p.warnings.contains(&Warning::SpaceMultiple));
    }
}
