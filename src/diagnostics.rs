//! Error type for every genuine failure the parser can report.
//!
//! Data-quality problems in a name are never errors: they are recorded as
//! [`Warning`](crate::warning::Warning)s on the resulting record. A
//! [`ParserError`] is reserved for things the caller has to act on: bad
//! bytes, bad configuration, unreadable dictionary files, a transliteration
//! table that cannot produce ASCII, or an internal grammar/builder mismatch.
//!
//! Every variant is a `miette::Diagnostic` with a stable `binomen::*` code,
//! so callers can render them with `miette::Report`.

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

use crate::syntax::Rule;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Unified error type for the parser.
#[derive(Debug, Error, Diagnostic)]
pub enum ParserError {
    #[error("transliteration table maps '{ch}' to non-ASCII output \"{replacement}\"")]
    #[diagnostic(
        code(binomen::text::transliteration),
        help("every replacement in a diacritic table must be plain ASCII")
    )]
    Transliteration { ch: char, replacement: String },

    #[error("input is not valid UTF-8")]
    #[diagnostic(code(binomen::input::encoding))]
    InvalidEncoding {
        #[from]
        source: std::str::Utf8Error,
    },

    #[error("configuration error: {message}")]
    #[diagnostic(code(binomen::config))]
    Config { message: String },

    #[error("cannot read '{path}'")]
    #[diagnostic(code(binomen::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("internal error: unexpected tree shape at `{rule}`: {message}")]
    #[diagnostic(
        code(binomen::internal::tree_shape),
        help("the grammar and the builders disagree; please report this as a bug")
    )]
    TreeShape { rule: String, message: String },
}

impl ParserError {
    pub fn config(message: impl Into<String>) -> Self {
        ParserError::Config {
            message: message.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ParserError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// A node of kind `rule` did not have the shape the grammar promises.
    pub fn tree_shape(rule: Rule, message: impl Into<String>) -> Self {
        ParserError::TreeShape {
            rule: format!("{rule:?}"),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Report;

    #[test]
    fn transliteration_error_renders_with_code() {
        let err = ParserError::Transliteration {
            ch: 'ö',
            replacement: "ø".into(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("binomen::text::transliteration".to_string())
        );
        let rendered = format!("{:?}", Report::new(err));
        assert!(rendered.contains("non-ASCII"));
    }

    #[test]
    fn invalid_encoding_from_utf8_error() {
        let bytes: Vec<u8> = vec![0x66, 0xff, 0x6f];
        let err: ParserError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, ParserError::InvalidEncoding { .. }));
        assert_eq!(err.to_string(), "input is not valid UTF-8");
    }

    #[test]
    fn tree_shape_names_the_rule() {
        let err = ParserError::tree_shape(Rule::authors_team, "missing author");
        assert!(err.to_string().contains("authors_team"));
        assert!(err.help().is_some());
    }
}
