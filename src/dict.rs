//! Read-only lookup tables: ICN author abbreviations and bacterial genera.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::diagnostics::{ParserError, Result};

const AUTHOR_ICN: &str = include_str!("../data/author_icn.txt");
const BACTERIA_GENERA: &str = include_str!("../data/bacteria_genera.txt");

const HOMONYM_MARKER: &str = "homonym";

static BUILTIN: Lazy<Arc<Dictionaries>> = Lazy::new(|| {
    let dicts = Dictionaries::from_sources(AUTHOR_ICN, BACTERIA_GENERA).unwrap_or_else(|err| {
        warn!(%err, "embedded dictionaries are corrupt, using empty tables");
        Dictionaries::default()
    });
    Arc::new(dicts)
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacterialGenus {
    Bacterial,
    /// Also a valid genus name outside bacterial nomenclature.
    Homonym,
}

#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    author_icn: HashSet<String>,
    bacteria: HashMap<String, BacterialGenus>,
}

impl Dictionaries {
    /// Dictionaries shipped with the crate.
    pub fn builtin() -> Arc<Dictionaries> {
        Arc::clone(&BUILTIN)
    }

    pub fn new<A, B>(author_icn: A, bacteria: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator<Item = (String, BacterialGenus)>,
    {
        Dictionaries {
            author_icn: author_icn.into_iter().map(Into::into).collect(),
            bacteria: bacteria.into_iter().collect(),
        }
    }

    /// Parse both tables from their text form.
    pub fn from_sources(author_icn: &str, bacteria: &str) -> Result<Self> {
        let authors: HashSet<String> = entries(author_icn).map(str::to_string).collect();
        let mut genera = HashMap::new();
        for line in entries(bacteria) {
            let (genus, kind) = parse_bacteria_line(line)?;
            genera.insert(genus.to_string(), kind);
        }
        debug!(
            authors = authors.len(),
            bacteria = genera.len(),
            "loaded dictionaries"
        );
        Ok(Dictionaries {
            author_icn: authors,
            bacteria: genera,
        })
    }

    /// Load tables from files; a missing path falls back to the built-in table.
    pub fn from_files(author_icn: Option<&Path>, bacteria: Option<&Path>) -> Result<Self> {
        let authors = match author_icn {
            Some(path) => fs::read_to_string(path).map_err(|e| ParserError::io(path, e))?,
            None => AUTHOR_ICN.to_string(),
        };
        let genera = match bacteria {
            Some(path) => fs::read_to_string(path).map_err(|e| ParserError::io(path, e))?,
            None => BACTERIA_GENERA.to_string(),
        };
        Self::from_sources(&authors, &genera)
    }

    pub fn is_icn_author(&self, word: &str) -> bool {
        self.author_icn.contains(word)
    }

    pub fn bacterial_genus(&self, genus: &str) -> Option<BacterialGenus> {
        self.bacteria.get(genus).copied()
    }
}

fn entries(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
}

fn parse_bacteria_line(line: &str) -> Result<(&str, BacterialGenus)> {
    let mut fields = line.split('\t');
    let genus = fields.next().unwrap_or_default().trim();
    let kind = match fields.next().map(str::trim) {
        None | Some("") => BacterialGenus::Bacterial,
        Some(HOMONYM_MARKER) => BacterialGenus::Homonym,
        Some(other) => {
            return Err(ParserError::config(format!(
                "unknown marker '{other}' for bacterial genus '{genus}'"
            )))
        }
    };
    if genus.is_empty() || fields.next().is_some() {
        return Err(ParserError::config(format!(
            "malformed bacterial genus line '{line}'"
        )));
    }
    Ok((genus, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_parse() {
        Dictionaries::from_sources(AUTHOR_ICN, BACTERIA_GENERA).expect("shipped tables are valid");
        let dicts = Dictionaries::builtin();
        assert!(dicts.is_icn_author("Mill"));
        assert_eq!(
            dicts.bacterial_genus("Escherichia"),
            Some(BacterialGenus::Bacterial)
        );
        assert_eq!(
            dicts.bacterial_genus("Bacillus"),
            Some(BacterialGenus::Homonym)
        );
        assert_eq!(dicts.bacterial_genus("Homo"), None);
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let dicts = Dictionaries::from_sources("# authors\n\nL\n", "Aus\n  \n").unwrap();
        assert!(dicts.is_icn_author("L"));
        assert!(!dicts.is_icn_author("# authors"));
        assert_eq!(dicts.bacterial_genus("Aus"), Some(BacterialGenus::Bacterial));
    }

    #[test]
    fn unknown_marker_is_a_config_error() {
        let err = Dictionaries::from_sources("", "Aus\tmaybe\n").unwrap_err();
        assert!(matches!(err, ParserError::Config { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Dictionaries::from_files(Some(Path::new("/nonexistent/authors.txt")), None)
            .unwrap_err();
        assert!(matches!(err, ParserError::Io { .. }));
    }
}
