//! Diagnostic codes for categorizing front-end warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so that users can look them up and silence
//! specific warnings from configuration.
//!
//! # Examples
//!
//! ```
//! use draftc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::W_UNKNOWN_DIRECTIVE;
//! assert_eq!(code.prefix(), "W");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.as_str(), "W0001");
//! ```

use crate::error::{DiagnosticError, DiagnosticResult};

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use draftc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 42);
    /// assert_eq!(code.as_str(), "W0042");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "W0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Parse a code string such as `"W0002"`.
    ///
    /// The prefix must be `E` or `W` and the remainder must be decimal digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::parse("W0002").unwrap();
    /// assert_eq!(code, DiagnosticCode::W_MALFORMED_WITH_CLAUSE);
    /// assert!(DiagnosticCode::parse("X12").is_err());
    /// ```
    pub fn parse(s: &str) -> DiagnosticResult<Self> {
        let invalid = || DiagnosticError::InvalidCode(s.to_string());

        let mut chars = s.chars();
        let prefix = match chars.next() {
            Some('E') => "E",
            Some('W') => "W",
            _ => return Err(invalid()),
        };

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let number = digits.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(prefix, number))
    }

    // =========================================================================
    // PREDEFINED WARNING CODES (W0001-W9999)
    // =========================================================================

    /// W0001: Directive keyword not recognized; the directive was dropped
    pub const W_UNKNOWN_DIRECTIVE: Self = Self::new("W", 1);
    /// W0002: Trailing clause does not start with `with `
    pub const W_MALFORMED_WITH_CLAUSE: Self = Self::new("W", 2);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting() {
        assert_eq!(DiagnosticCode::new("E", 7).as_str(), "E0007");
        assert_eq!(DiagnosticCode::W_MALFORMED_WITH_CLAUSE.to_string(), "W0002");
    }

    #[test]
    fn test_code_debug() {
        let code = DiagnosticCode::W_UNKNOWN_DIRECTIVE;
        assert_eq!(format!("{:?}", code), "DiagnosticCode(W0001)");
    }

    #[test]
    fn test_parse_roundtrip_known_codes() {
        for code in [
            DiagnosticCode::W_UNKNOWN_DIRECTIVE,
            DiagnosticCode::W_MALFORMED_WITH_CLAUSE,
        ] {
            assert_eq!(DiagnosticCode::parse(&code.as_str()).unwrap(), code);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DiagnosticCode::parse("").is_err());
        assert!(DiagnosticCode::parse("W").is_err());
        assert!(DiagnosticCode::parse("w0001").is_err());
        assert!(DiagnosticCode::parse("W00a1").is_err());
        assert!(DiagnosticCode::parse("W+1").is_err());
    }

    #[test]
    fn test_parse_error_message() {
        let err = DiagnosticCode::parse("Q1").unwrap_err();
        assert_eq!(err.to_string(), "Invalid diagnostic code: Q1");
    }
}
