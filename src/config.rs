//! Parser configuration, loadable from YAML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::diagnostics::{ParserError, Result};

pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Settings for an [`Engine`](crate::engine::Engine).
///
/// Missing YAML keys take their default.
///
/// ```rust
/// use binomen::config::ParserConfig;
/// let config = ParserConfig::from_yaml_str("jobs: 2").unwrap();
/// assert_eq!(config.jobs, 2);
/// assert_eq!(config.batch_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Worker threads used for batch parsing.
    pub jobs: usize,
    /// Capacity of the channel feeding the workers.
    pub batch_size: usize,
    /// Replacement for the built-in ICN author abbreviations.
    pub author_icn_path: Option<PathBuf>,
    /// Replacement for the built-in bacterial genera.
    pub bacteria_path: Option<PathBuf>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            jobs: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            batch_size: DEFAULT_BATCH_SIZE,
            author_icn_path: None,
            bacteria_path: None,
        }
    }
}

impl ParserConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ParserConfig = serde_yaml::from_str(yaml)
            .map_err(|e| ParserError::config(format!("invalid YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ParserError::io(path, e))?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(ParserError::config("jobs must be at least 1"));
        }
        if self.batch_size == 0 {
            return Err(ParserError::config("batch_size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ParserConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert!(config.jobs >= 1);
        assert!(config.author_icn_path.is_none());
    }

    #[test]
    fn dictionary_paths() {
        let config =
            ParserConfig::from_yaml_str("bacteria_path: /tmp/bacteria.txt\nbatch_size: 8\n").unwrap();
        assert_eq!(config.bacteria_path, Some(PathBuf::from("/tmp/bacteria.txt")));
        assert_eq!(config.batch_size, 8);
    }

    #[test]
    fn zero_jobs_rejected() {
        let err = ParserConfig::from_yaml_str("jobs: 0").unwrap_err();
        assert!(err.to_string().contains("jobs"));
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = ParserConfig::from_yaml_str("jobs: [1, 2").unwrap_err();
        assert!(matches!(err, ParserError::Config { .. }));
    }
}
