//! Normalization utilities: transliteration, Latin numerals for numeric
//! epithets, and repair of all-caps author names.
//!
//! Everything here is pure; nothing reads parser state.

mod caps;
mod numerals;
mod transliterate;

pub use caps::fix_all_caps;
pub use numerals::num_to_str;
pub use transliterate::{to_ascii, TranslitTable, DIACRITICS, GLOBAL_TRANSLITERATIONS};
