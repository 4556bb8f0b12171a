//! Optional user configuration.
//!
//! Read from `<config dir>/aoc2024/config.toml` unless `--config` points
//! elsewhere. Every key is optional:
//!
//! ```toml
//! session = "53616c7465645f5f..."
//! inputs_dir = "inputs"
//! threads = 4
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_INPUTS_DIR: &str = "inputs";
pub const DEFAULT_THREADS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// adventofcode.com `session` cookie used by `fetch`
    pub session: Option<String>,
    /// Directory holding `dayNN.txt` inputs
    pub inputs_dir: PathBuf,
    /// Days solved concurrently
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: None,
            inputs_dir: PathBuf::from(DEFAULT_INPUTS_DIR),
            threads: DEFAULT_THREADS,
        }
    }
}

impl Config {
    /// Loads `path` if given, otherwise the default location if it exists,
    /// otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn load_default() -> Result<Self> {
        match default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Config::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(Error::Config("threads must be greater than 0".to_string()));
        }
        if self.session.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(Error::Config("session must not be empty".to_string()));
        }
        Ok(())
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aoc2024").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let file = config_file("session = \"abc\"\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.session.as_deref(), Some("abc"));
        assert_eq!(config.inputs_dir, PathBuf::from("inputs"));
        assert_eq!(config.threads, 4);
    }

    #[test]
    fn all_keys() {
        let file = config_file("session = \"abc\"\ninputs_dir = \"/tmp/aoc\"\nthreads = 8\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(
            config,
            Config {
                session: Some("abc".to_string()),
                inputs_dir: PathBuf::from("/tmp/aoc"),
                threads: 8,
            }
        );
    }

    #[test]
    fn rejects_zero_threads() {
        let file = config_file("threads = 0\n");
        assert!(matches!(Config::load(Some(file.path())), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_syntax() {
        let file = config_file("thread = 2\n");
        assert!(matches!(Config::load(Some(file.path())), Err(Error::Config(_))));
        let file = config_file("threads = \n");
        assert!(matches!(Config::load(Some(file.path())), Err(Error::Config(_))));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(Some(&missing)), Err(Error::Config(_))));
    }
}
