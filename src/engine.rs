//! Public entry point: parse one name or a batch of names.
//!
//! ```rust
//! use binomen::engine::Engine;
//! let engine = Engine::new();
//! let name = engine.parse("Homo sapiens Linnaeus, 1758").unwrap();
//! assert!(name.parsed);
//! assert_eq!(name.cardinality, 2);
//! ```

use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::trace;

use crate::ast::Name;
use crate::batch::{run_batch, CancelToken};
use crate::builder::{assemble, ParseContext};
use crate::config::ParserConfig;
use crate::diagnostics::Result;
use crate::dict::Dictionaries;
use crate::preprocess::preprocess;
use crate::syntax::parse_tree;

/// Version tag stored on every [`Name`].
pub const PARSER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Derives the content identifier of a name from its verbatim text.
pub trait IdGenerator: Send + Sync {
    fn id(&self, verbatim: &str) -> String;
}

/// Lower-hex SHA-256 of the verbatim text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Id;

impl IdGenerator for Sha256Id {
    fn id(&self, verbatim: &str) -> String {
        format!("{:x}", Sha256::digest(verbatim.as_bytes()))
    }
}

pub struct Engine {
    config: ParserConfig,
    dictionaries: Arc<Dictionaries>,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            config: ParserConfig::default(),
            dictionaries: Dictionaries::builtin(),
            ids: Box::new(Sha256Id),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from validated settings, loading dictionary overrides
    /// when the config names them.
    pub fn from_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        let dictionaries = if config.author_icn_path.is_some() || config.bacteria_path.is_some() {
            Arc::new(Dictionaries::from_files(
                config.author_icn_path.as_deref(),
                config.bacteria_path.as_deref(),
            )?)
        } else {
            Dictionaries::builtin()
        };
        Ok(Engine {
            config,
            dictionaries,
            ids: Box::new(Sha256Id),
        })
    }

    pub fn with_dictionaries(mut self, dictionaries: Arc<Dictionaries>) -> Self {
        self.dictionaries = dictionaries;
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one name.
    ///
    /// Virus names, placeholders and text the grammar does not recognize
    /// still come back as `Ok`, with `parsed == false`.
    pub fn parse(&self, raw: &str) -> Result<Name> {
        let id = self.ids.id(raw);
        let pre = preprocess(raw);
        if pre.is_bypassed() {
            trace!(virus = pre.virus, no_parse = pre.no_parse, "skipping grammar");
            return Ok(Name::unparsed(raw, id, PARSER_VERSION, pre.virus, pre.tail));
        }

        let Some(root) = parse_tree(&pre.body) else {
            return Ok(Name::unparsed(raw, id, PARSER_VERSION, false, raw));
        };
        let mut ctx = ParseContext::new(&self.dictionaries).with_offsets(pre.offsets);
        for warning in pre.warnings {
            ctx.add_warning(warning);
        }
        ctx.set_tail(pre.tail);
        assemble(raw, id, PARSER_VERSION, &root, ctx)
    }

    /// Parse raw bytes, which must be UTF-8.
    pub fn parse_bytes(&self, raw: &[u8]) -> Result<Name> {
        let text = std::str::from_utf8(raw)?;
        self.parse(text)
    }

    /// Parse many names on the configured worker pool. Results are in input
    /// order; the first failure by position is returned.
    pub fn parse_names<S>(&self, names: &[S]) -> Result<Vec<Name>>
    where
        S: AsRef<str> + Sync,
    {
        run_batch(names, self.config.jobs, self.config.batch_size, None, |n| {
            self.parse(n)
        })
    }

    /// Like [`Engine::parse_names`], but stops handing out work once `cancel`
    /// is set. Names already handed out are finished and returned, so the
    /// result is a prefix of the input.
    pub fn parse_names_with_cancel<S>(&self, names: &[S], cancel: &CancelToken) -> Result<Vec<Name>>
    where
        S: AsRef<str> + Sync,
    {
        run_batch(
            names,
            self.config.jobs,
            self.config.batch_size,
            Some(cancel),
            |n| self.parse(n),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl IdGenerator for Fixed {
        fn id(&self, _verbatim: &str) -> String {
            "fixed".to_string()
        }
    }

    #[test]
    fn sha256_id_is_lower_hex() {
        let id = Sha256Id.id("Homo sapiens");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(id, Sha256Id.id("Homo sapiens"));
    }

    #[test]
    fn custom_id_generator_is_used() {
        let engine = Engine::new().with_id_generator(Fixed);
        let name = engine.parse("Homo sapiens").unwrap();
        assert_eq!(name.id, "fixed");
        assert_eq!(name.parser_version, PARSER_VERSION);
    }

    #[test]
    fn grammar_failure_keeps_everything_in_tail() {
        let name = Engine::new().parse("homo sapiens").unwrap();
        assert!(!name.parsed);
        assert_eq!(name.tail, "homo sapiens");
        assert_eq!(name.quality, 0);
        assert!(name.warnings.is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: Vec<u8> = vec![b'A', 0xff, b'b'];
        assert!(Engine::new().parse_bytes(&bytes).is_err());
    }

    #[test]
    fn zero_jobs_rejected() {
        let config = ParserConfig {
            jobs: 0,
            ..ParserConfig::default()
        };
        assert!(Engine::from_config(config).is_err());
    }
}
