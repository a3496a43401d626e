//! Common types and utilities for draftt commands.

use std::path::Path;

use crate::error::{DrafttError, Result};

// ============================================================================
// Output Formats
// ============================================================================

/// Output formats for the `lex` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexFormat {
    /// Pretty-printed JSON array of statements
    Json,
    /// Rust debug rendering, one statement per entry
    Debug,
}

impl LexFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// Output formats for the `trace` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    /// A `[models.<Name>]` table per model
    Toml,
    /// `{"models": {...}}`
    Json,
}

impl TraceFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Resolve a format from the command line, falling back to the configured one.
pub fn resolve_format<F>(
    cli: Option<&str>,
    configured: &str,
    parse: impl Fn(&str) -> Option<F>,
) -> Result<F> {
    match cli {
        Some(name) => parse(name).ok_or_else(|| {
            DrafttError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
        }),
        None => parse(configured).ok_or_else(|| {
            DrafttError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                configured
            ))
        }),
    }
}

// ============================================================================
// File Utilities
// ============================================================================

/// Read an input file, reporting missing paths and directories as file errors.
pub fn read_input_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DrafttError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(DrafttError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        DrafttError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })
}

// ============================================================================
// Messages
// ============================================================================

/// Error message prefixes.
pub mod error_messages {
    /// Input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Input path is not a regular file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Target path exists but is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Refusing to overwrite an existing file.
    pub const OUTPUT_FILE_EXISTS: &str = "Output file already exists (use --force):";

    /// Unknown `--format` value.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Unknown format in the configuration file.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Directive line without a `keyword: body` shape.
    pub const MALFORMED_DIRECTIVE_LINE: &str = "expected `keyword: body`";
}
