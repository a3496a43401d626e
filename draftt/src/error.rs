//! Errors surfaced by the draftt binary.
//!
//! Lexing and tracing themselves cannot fail; what can go wrong is reading
//! inputs, reading `draftt.toml`, and rendering output.

use thiserror::Error;

/// Everything `draftt` reports before exiting with a non-zero status.
#[derive(Error, Debug)]
pub enum DrafttError {
    /// `draftt.toml` is missing, unreadable, or holds bad values.
    #[error("config: {0}")]
    Config(String),

    /// An input path is missing or is not a readable file.
    #[error("file: {0}")]
    FileOperation(String),

    /// Input or arguments have the wrong shape.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Output could not be produced.
    #[error("{0}")]
    CommandExecution(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Schema JSON did not parse, or statements did not serialize.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// `Result` with [`DrafttError`].
pub type Result<T> = std::result::Result<T, DrafttError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let cases = [
            (DrafttError::Config("bad value".into()), "config: bad value"),
            (DrafttError::FileOperation("gone".into()), "file: gone"),
            (DrafttError::Validation("line 3".into()), "invalid input: line 3"),
            (DrafttError::CommandExecution("no output".into()), "no output"),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_io_is_transparent() {
        let err: DrafttError = std::io::Error::new(std::io::ErrorKind::NotFound, "nope").into();
        assert!(matches!(err, DrafttError::Io(_)));
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DrafttError = json_err.into();
        assert!(err.to_string().starts_with("json: "));
    }
}
