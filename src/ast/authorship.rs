use serde::{Deserialize, Serialize};

use super::Word;

/// Authorship attached to an epithet or uninomial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorship {
    pub verbatim: String,
    pub original_authors: AuthorsGroup,
    pub combination_authors: Option<AuthorsGroup>,
    /// The authorship, read as a whole, ends with a "filius" marker.
    pub terminal_filius: bool,
}

/// A primary team, optionally joined by "ex" or "emend." to a second one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorsGroup {
    pub team1: AuthorsTeam,
    pub team2: Option<Team2>,
    /// Written as a parenthesized basionym authorship.
    pub parenthesized: bool,
    pub terminal_filius: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamKind {
    Ex,
    Emend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team2 {
    pub kind: TeamKind,
    /// The connector as written ("ex", "emend.").
    pub word: Word,
    pub team: AuthorsTeam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorsTeam {
    pub authors: Vec<Author>,
    pub year: Option<Year>,
    pub terminal_filius: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Normalized author string.
    pub value: String,
    /// Normalized separator to the next author: "", ", ", " & " or " apud ".
    pub separator: String,
    pub words: Vec<Word>,
    pub filius: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Year {
    pub word: Word,
    pub approximate: bool,
}

impl AuthorsTeam {
    /// Authors joined with their normalized separators.
    pub fn normalized(&self) -> String {
        self.authors
            .iter()
            .map(|a| format!("{}{}", a.value, a.separator))
            .collect()
    }
}
