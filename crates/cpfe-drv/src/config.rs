//! Driver configuration, loaded from `cpfe.toml`.
//!
//! Grounded in `faxt::config`'s `Config`/search-order pattern: current
//! directory, then the user's config directory, then the system config
//! directory, falling back to defaults if none is found.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CpfeError, Result};

pub const CONFIG_FILE_NAME: &str = "cpfe.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Whether a terminated comment surfaces as a `TK_COMMENT` token in the
    /// token-stream dump, instead of being silently folded into whitespace.
    #[serde(default)]
    pub emit_comments: bool,

    #[serde(default)]
    pub dump: DumpConfig,
}

/// Which auxiliary artifacts to write alongside a compiled file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DumpConfig {
    #[serde(default)]
    pub tokens: bool,
    #[serde(default)]
    pub first_follow: bool,
    #[serde(default)]
    pub parse_table: bool,
    #[serde(default = "default_true")]
    pub tree: bool,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_buffer_size() -> usize {
    cpfe_lex::buffer::DEFAULT_BUFFER_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            output_dir: default_output_dir(),
            buffer_size: default_buffer_size(),
            emit_comments: false,
            dump: DumpConfig::default(),
        }
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            tokens: false,
            first_follow: false,
            parse_table: false,
            tree: true,
        }
    }
}

impl Config {
    /// Searches the current directory, then `~/.config/cpfe/`, then the
    /// platform config directory; falls back to defaults if nothing is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CpfeError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CpfeError::Config(format!("failed to parse configuration: {e}")))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| CpfeError::Config(format!("failed to serialize configuration: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cpfe").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cpfe").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_dumps_tree_only() {
        let config = Config::default();
        assert!(config.dump.tree);
        assert!(!config.dump.tokens);
        assert!(!config.dump.first_follow);
        assert!(!config.dump.parse_table);
    }

    #[test]
    fn default_config_keeps_comments_silent_with_default_buffer_size() {
        let config = Config::default();
        assert!(!config.emit_comments);
        assert_eq!(config.buffer_size, cpfe_lex::buffer::DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn toml_missing_new_fields_still_deserializes_with_defaults() {
        let config: Config = toml::from_str("verbose = true\n").unwrap();
        assert!(!config.emit_comments);
        assert_eq!(config.buffer_size, cpfe_lex::buffer::DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("cpfe.toml");
        let mut original = Config::default();
        original.verbose = true;
        original.dump.tokens = true;
        original.buffer_size = 1024;
        original.emit_comments = true;
        original.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn missing_path_is_an_error() {
        let result = Config::load_from_path(Path::new("/nonexistent/cpfe.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn absent_search_locations_yield_defaults() {
        // None of the three search locations exist for this crafted HOME,
        // so `find_config_file` falls through to `None` and `load` returns
        // `Config::default()` without touching the process-global cwd.
        let fake_home = TempDir::new().unwrap();
        std::env::set_var("HOME", fake_home.path());
        assert!(Config::check_home_config().is_none());
    }
}
