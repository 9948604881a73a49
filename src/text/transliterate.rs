use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::diagnostics::{ParserError, Result};

/// Character-to-string replacement table.
#[derive(Debug, Clone, Default)]
pub struct TranslitTable {
    map: HashMap<char, String>,
}

impl TranslitTable {
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        TranslitTable {
            map: pairs.into_iter().map(|(c, s)| (c, s.into())).collect(),
        }
    }

    pub fn get(&self, ch: char) -> Option<&str> {
        self.map.get(&ch).map(String::as_str)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.map.keys().copied()
    }
}

/// Diacritic folding for name words. Every replacement is ASCII; apostrophes
/// are dropped.
pub static DIACRITICS: Lazy<TranslitTable> = Lazy::new(|| {
    TranslitTable::new([
        ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('å', "a"), ('ā', "a"), ('ă', "a"),
        ('ą', "a"), ('ä', "ae"), ('æ', "ae"), ('ç', "c"), ('ć', "c"), ('č', "c"), ('ď', "d"),
        ('ð', "d"), ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"), ('ē', "e"), ('ė', "e"),
        ('ę', "e"), ('ě', "e"), ('ğ', "g"), ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"),
        ('ī', "i"), ('ı', "i"), ('ł', "l"), ('ñ', "n"), ('ń', "n"), ('ň', "n"), ('ò', "o"),
        ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ō', "o"), ('ő', "o"), ('ø', "o"), ('ö', "oe"),
        ('œ', "oe"), ('ŕ', "r"), ('ř', "r"), ('ś', "s"), ('ş', "s"), ('š', "s"), ('ſ', "s"),
        ('ß', "ss"), ('ţ', "t"), ('ť', "t"), ('þ', "th"), ('ù', "u"), ('ú', "u"), ('û', "u"),
        ('ū', "u"), ('ů', "u"), ('ű', "u"), ('ü', "ue"), ('ý', "y"), ('ÿ', "y"), ('ź', "z"),
        ('ż', "z"), ('ž', "z"), ('÷', ""),
        ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Å', "A"), ('Ä', "Ae"), ('Æ', "Ae"),
        ('Ç', "C"), ('Č', "C"), ('Ð', "D"), ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"),
        ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ł', "L"), ('Ñ', "N"), ('Ò', "O"),
        ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ø', "O"), ('Ö', "Oe"), ('Œ', "Oe"), ('Ř', "R"),
        ('Š', "S"), ('Ś', "S"), ('Þ', "Th"), ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "Ue"),
        ('Ý', "Y"), ('Ž', "Z"),
        ('\'', ""), ('‘', ""), ('’', ""),
    ])
});

/// Typographic quotes folded to a plain apostrophe.
pub static GLOBAL_TRANSLITERATIONS: Lazy<TranslitTable> =
    Lazy::new(|| TranslitTable::new([('‘', "'"), ('’', "'"), ('‛', "'"), ('′', "'")]));

/// Replace every character found in `table`; everything else passes through.
///
/// Fails when the table maps a character to non-ASCII output.
pub fn to_ascii(input: &str, table: &TranslitTable) -> Result<String> {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for ch in input.chars() {
        match table.get(ch) {
            Some(rep) if rep.is_ascii() => out.push_str(rep),
            Some(rep) => {
                return Err(ParserError::Transliteration {
                    ch,
                    replacement: rep.to_string(),
                })
            }
            None => out.push(ch),
        }
    }
    Ok(out)
}
