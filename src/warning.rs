//! Data-quality warnings attached to parsed names.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A data-quality problem noticed while parsing a name.
///
/// Each kind has a fixed quality level (1 = clean, 4 = badly formed) and a
/// fixed message. Warnings order by quality descending, then by message,
/// which is the order they are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Warning {
    Tail,
    ApostrOther,
    AuthAmbiguousFilius,
    AuthEx,
    AuthExWithDot,
    AuthEmend,
    AuthEmendWithoutDot,
    AuthQuestion,
    AuthShort,
    AuthUnknown,
    AuthUpperCase,
    BacteriaMaybe,
    BotanyAuthorNotSubgen,
    CanonicalApostrophe,
    CapWordQuestion,
    CharBad,
    GenusAbbr,
    GenusUpperCharAfterDash,
    HybridCharNoSpace,
    HybridFormula,
    HybridFormulaIncomplete,
    HybridFormulaProbIncomplete,
    HybridNamed,
    NameApprox,
    NameComparison,
    RankUncommon,
    SpaceMultiple,
    SpaceNonStandard,
    SpeciesNumeric,
    Superspecies,
    UninomialCombo,
    WhiteSpaceTrail,
    YearChar,
    YearDot,
    YearOrigMisplaced,
    YearPage,
    YearParens,
    YearQuestion,
    YearRange,
    YearSqBrackets,
}

impl Warning {
    pub fn quality(self) -> u8 {
        use Warning::*;
        match self {
            AuthUnknown | BacteriaMaybe | HybridFormula | HybridNamed | HybridCharNoSpace
            | YearQuestion => 2,
            AuthEx | AuthExWithDot | AuthEmend | AuthEmendWithoutDot | AuthQuestion
            | AuthShort | AuthUpperCase | AuthAmbiguousFilius | BotanyAuthorNotSubgen
            | CanonicalApostrophe | CapWordQuestion | CharBad | GenusAbbr
            | GenusUpperCharAfterDash | NameApprox | NameComparison | RankUncommon
            | SpaceMultiple | SpaceNonStandard | SpeciesNumeric | Superspecies
            | UninomialCombo | WhiteSpaceTrail | YearChar | YearDot | YearOrigMisplaced
            | YearPage | YearParens | YearRange | YearSqBrackets => 3,
            Tail | ApostrOther | HybridFormulaIncomplete | HybridFormulaProbIncomplete => 4,
        }
    }

    pub fn message(self) -> &'static str {
        use Warning::*;
        match self {
            Tail => "Unparsed tail",
            ApostrOther => "Not an ASCII apostrophe",
            AuthAmbiguousFilius => "Ambiguous f. (filius or forma)",
            AuthEx => "Ex authors are not required",
            AuthExWithDot => "`ex` ends with a period",
            AuthEmend => "Emend authors are not required",
            AuthEmendWithoutDot => "`emend` without a period",
            AuthQuestion => "Author as a question mark",
            AuthShort => "Author is too short",
            AuthUnknown => "Author is unknown",
            AuthUpperCase => "Author in upper case",
            BacteriaMaybe => "The genus is a homonym of a bacterial genus",
            BotanyAuthorNotSubgen => "Possible ICN author instead of subgenus",
            CanonicalApostrophe => "Apostrophe is not allowed in canonical",
            CapWordQuestion => "Uninomial word with question mark",
            CharBad => "Non-standard characters in canonical",
            GenusAbbr => "Abbreviated uninomial word",
            GenusUpperCharAfterDash => "Apparent genus with capital character after hyphen",
            HybridCharNoSpace => "Hybrid char not separated by space",
            HybridFormula => "Hybrid formula",
            HybridFormulaIncomplete => "Incomplete hybrid formula",
            HybridFormulaProbIncomplete => "Probably incomplete hybrid formula",
            HybridNamed => "Named hybrid",
            NameApprox => "Name is approximate",
            NameComparison => "Name comparison",
            RankUncommon => "Uncommon rank",
            SpaceMultiple => "Multiple adjacent space characters",
            SpaceNonStandard => "Non-standard space characters",
            SpeciesNumeric => "Numeric prefix in epithet",
            Superspecies => "Ambiguity: subgenus or superspecies found",
            UninomialCombo => "Combination of two uninomials",
            WhiteSpaceTrail => "Trailing whitespace",
            YearChar => "Year with latin character",
            YearDot => "Year with period",
            YearOrigMisplaced => "Misplaced basionym year",
            YearPage => "Year with page info",
            YearParens => "Year with parentheses",
            YearQuestion => "Year with question mark",
            YearRange => "Years range",
            YearSqBrackets => "Year with square brackets",
        }
    }
}

impl Ord for Warning {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .quality()
            .cmp(&self.quality())
            .then_with(|| self.message().cmp(other.message()))
    }
}

impl PartialOrd for Warning {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn worst_quality_sorts_first() {
        let set: BTreeSet<Warning> = [Warning::YearChar, Warning::Tail, Warning::HybridNamed]
            .into_iter()
            .collect();
        let ordered: Vec<Warning> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![Warning::Tail, Warning::YearChar, Warning::HybridNamed]
        );
    }

    #[test]
    fn same_quality_sorts_by_message() {
        assert!(Warning::AuthEx < Warning::YearDot);
        assert!(Warning::GenusAbbr < Warning::CharBad);
    }

    #[test]
    fn duplicates_collapse() {
        let set: BTreeSet<Warning> = [Warning::CharBad, Warning::CharBad].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
