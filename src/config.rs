//! Dictionary location configuration.
//!
//! Settings are resolved with the following precedence, highest first:
//!
//! 1. explicit overrides (the `--dict-dir` CLI flag)
//! 2. the `HUNSTEM_DICTIONARY_DIR` environment variable
//! 3. a JSON configuration file
//! 4. built-in defaults
//!
//! ```
//! use hunstem::config::DictionaryConfig;
//!
//! let config: DictionaryConfig = serde_json::from_str(r#"{"base_dir": "/usr/share/hunspell"}"#).unwrap();
//! assert_eq!(config.affix_file, "index.aff");
//! assert_eq!(config.affix_path(), std::path::Path::new("/usr/share/hunspell/index.aff"));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HunstemError, Result};

/// Environment variable overriding [`DictionaryConfig::base_dir`].
pub const DICTIONARY_DIR_ENV: &str = "HUNSTEM_DICTIONARY_DIR";

/// Default directory holding the Hungarian dictionary resources.
pub const DEFAULT_BASE_DIR: &str = "dictionary-hu";

/// Where the affix and dictionary resources live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory both resources are read from.
    pub base_dir: PathBuf,

    /// Affix table file name.
    pub affix_file: String,

    /// Word list file name.
    pub dictionary_file: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            affix_file: "index.aff".to_string(),
            dictionary_file: "index.dic".to_string(),
        }
    }
}

impl DictionaryConfig {
    /// Read a JSON configuration file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HunstemError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| HunstemError::config(format!("invalid {}: {e}", path.display())))
    }

    /// Resolve the configuration from an optional file, the environment and an
    /// optional explicit base directory.
    pub fn load(file: Option<&Path>, base_dir: Option<&Path>) -> Result<Self> {
        let config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let env_dir = std::env::var_os(DICTIONARY_DIR_ENV).map(PathBuf::from);
        Ok(config.with_overrides(env_dir, base_dir.map(Path::to_path_buf)))
    }

    /// Apply the environment value, then the explicit value, over `self`.
    pub fn with_overrides(self, env_dir: Option<PathBuf>, base_dir: Option<PathBuf>) -> Self {
        match base_dir.or(env_dir) {
            Some(dir) => self.with_base_dir(dir),
            None => self,
        }
    }

    /// Replace the base directory.
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, base_dir: P) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn affix_path(&self) -> PathBuf {
        self.base_dir.join(&self.affix_file)
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.base_dir.join(&self.dictionary_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DictionaryConfig::default();
        assert_eq!(config.base_dir, PathBuf::from("dictionary-hu"));
        assert_eq!(config.affix_path(), PathBuf::from("dictionary-hu/index.aff"));
        assert_eq!(
            config.dictionary_path(),
            PathBuf::from("dictionary-hu/index.dic")
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"base_dir": "/opt/dict", "dictionary_file": "hu_HU.dic"}}"#).unwrap();

        let config = DictionaryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/opt/dict"));
        assert_eq!(config.affix_file, "index.aff");
        assert_eq!(config.dictionary_file, "hu_HU.dic");
    }

    #[test]
    fn test_bad_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = DictionaryConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, HunstemError::Config(_)));

        let err = DictionaryConfig::from_file("/nonexistent/hunstem.json").unwrap_err();
        assert!(matches!(err, HunstemError::Config(_)));
    }

    #[test]
    fn test_override_precedence() {
        let base = DictionaryConfig::default();

        let config = base
            .clone()
            .with_overrides(Some("/env".into()), Some("/cli".into()));
        assert_eq!(config.base_dir, PathBuf::from("/cli"));

        let config = base.clone().with_overrides(Some("/env".into()), None);
        assert_eq!(config.base_dir, PathBuf::from("/env"));

        let config = base.clone().with_overrides(None, None);
        assert_eq!(config, base);
    }
}
