//! `draftt.toml` handling.
//!
//! Every field is optional in the file; missing ones take the defaults
//! below, and command-line flags win over both.

use dirs::{config_dir, home_dir};
use draftc_util::DiagnosticCode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DrafttError, Result};

/// File name looked up by [`Config::load`].
pub const CONFIG_FILE_NAME: &str = "draftt.toml";

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Same as passing `--verbose`.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer behaviour.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output formats.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Require a `with:` prefix before data items.
    #[serde(default)]
    pub strict_with: bool,

    /// Log directives whose keyword is not recognized.
    #[serde(default = "default_true")]
    pub warn_unknown: bool,

    /// Diagnostic codes to silence, e.g. `["W0002"]`.
    #[serde(default)]
    pub allow: Vec<String>,
}

/// Output configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Format for `lex` output (json, debug).
    #[serde(default = "default_lex_format")]
    pub lex_format: String,

    /// Format for `trace` output (toml, json).
    #[serde(default = "default_trace_format")]
    pub trace_format: String,
}

fn default_true() -> bool {
    true
}

fn default_lex_format() -> String {
    "json".to_string()
}

fn default_trace_format() -> String {
    "toml".to_string()
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            strict_with: false,
            warn_unknown: true,
            allow: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            lex_format: default_lex_format(),
            trace_format: default_trace_format(),
        }
    }
}

impl LexerConfig {
    /// Parse the `allow` list into diagnostic codes.
    pub fn allowed_codes(&self) -> Result<Vec<DiagnosticCode>> {
        self.allow
            .iter()
            .map(|code| {
                DiagnosticCode::parse(code).map_err(|e| DrafttError::Config(e.to_string()))
            })
            .collect()
    }
}

impl Config {
    /// Load the first `draftt.toml` found on the search path, or defaults.
    ///
    /// Looked up in the working directory, then `~/.config/draftt/`, then
    /// the platform config directory.
    pub fn load() -> Result<Self> {
        Self::search_paths()
            .into_iter()
            .find(|path| path.is_file())
            .map_or_else(|| Ok(Self::default()), |path| Self::load_from_path(&path))
    }

    /// Load `path`, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrafttError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DrafttError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration as TOML, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DrafttError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Candidate config locations, most specific first.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        paths.extend(home_dir().map(|home| home.join(".config").join("draftt").join(CONFIG_FILE_NAME)));
        paths.extend(config_dir().map(|dir| dir.join("draftt").join(CONFIG_FILE_NAME)));
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Config {
        Config {
            verbose: true,
            lexer: LexerConfig {
                strict_with: true,
                warn_unknown: false,
                allow: vec!["W0002".to_string()],
            },
            output: OutputConfig {
                lex_format: "debug".to_string(),
                trace_format: "json".to_string(),
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(!config.lexer.strict_with);
        assert!(config.lexer.warn_unknown);
        assert!(config.lexer.allow.is_empty());
        assert_eq!(config.output.lex_format, "json");
        assert_eq!(config.output.trace_format, "toml");
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("draftt.toml");

        sample().save_to_path(&config_path).unwrap();
        assert_eq!(Config::load_from_path(&config_path).unwrap(), sample());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[lexer]\nstrict_with = true\n").unwrap();
        assert!(config.lexer.strict_with);
        assert!(config.lexer.warn_unknown);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/draftt.toml"));
        assert!(matches!(result, Err(DrafttError::Config(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("draftt.toml");
        std::fs::write(&config_path, "verbose = [").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(DrafttError::Config(_))));
    }

    #[test]
    fn test_search_paths_start_with_working_dir() {
        let paths = Config::search_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE_NAME));
        assert!(paths.iter().all(|p| p.ends_with(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_allowed_codes() {
        let config = sample();
        assert_eq!(
            config.lexer.allowed_codes().unwrap(),
            [DiagnosticCode::W_MALFORMED_WITH_CLAUSE]
        );

        let bad = LexerConfig {
            allow: vec!["nope".to_string()],
            ..LexerConfig::default()
        };
        assert!(matches!(bad.allowed_codes(), Err(DrafttError::Config(_))));
    }
}
