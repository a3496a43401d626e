//! Diagnostic module - Warning reporting infrastructure.
//!
//! The front end never fails on malformed drafts; it degrades and keeps
//! going. This module provides the types used to tell the user what was
//! degraded: [`Diagnostic`] values collected by a [`Handler`].
//!
//! # Examples
//!
//! ```
//! use draftc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     Diagnostic::warning("ignored directive `redner`")
//!         .with_code(DiagnosticCode::W_UNKNOWN_DIRECTIVE)
//!         .with_directive("redner"),
//! );
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod codes;

pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use draftc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that prevents generation
    Error,
    /// A warning that doesn't prevent generation
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and the directive it refers to
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Keyword of the directive the diagnostic is about, if any
    pub directive: Option<String>,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            directive: None,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach the directive keyword the diagnostic refers to
    pub fn with_directive(mut self, keyword: impl Into<String>) -> Self {
        self.directive = Some(keyword.into());
        self
    }

    /// Add a note to the diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use draftc_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::warning("clause does not start with `with `")
    ///     .with_note("the first five characters were dropped anyway");
    /// assert_eq!(diag.notes.len(), 1);
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(directive) = &self.directive {
            write!(f, " (in `{}`)", directive)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. Codes registered with [`Handler::allow`] are dropped on
/// emission.
///
/// # Examples
///
/// ```
/// use draftc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
///
/// let handler = Handler::new();
/// handler.allow(DiagnosticCode::W_MALFORMED_WITH_CLAUSE);
/// handler.emit_diagnostic(
///     Diagnostic::warning("odd clause").with_code(DiagnosticCode::W_MALFORMED_WITH_CLAUSE),
/// );
/// assert_eq!(handler.warning_count(), 0);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Codes that are silently discarded
    allowed: RefCell<Vec<DiagnosticCode>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            allowed: RefCell::new(Vec::new()),
        }
    }

    /// Silence every future diagnostic carrying `code`
    pub fn allow(&self, code: DiagnosticCode) {
        let mut allowed = self.allowed.borrow_mut();
        if !allowed.contains(&code) {
            allowed.push(code);
        }
    }

    /// Check whether `code` has been silenced
    pub fn is_allowed(&self, code: DiagnosticCode) -> bool {
        self.allowed.borrow().contains(&code)
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if let Some(code) = diagnostic.code {
            if self.is_allowed(code) {
                return;
            }
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Report a warning with a code, attached to a directive keyword
    pub fn warn(&self, code: DiagnosticCode, directive: &str, message: impl Into<String>) {
        self.emit_diagnostic(
            Diagnostic::warning(message)
                .with_code(code)
                .with_directive(directive),
        );
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all collected diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Note.to_string(), "note");
    }

    #[test]
    fn test_diagnostic_warning() {
        let diag = Diagnostic::warning("dropped");
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.message, "dropped");
        assert!(diag.code.is_none());
        assert!(diag.directive.is_none());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("ignored directive")
            .with_code(DiagnosticCode::W_UNKNOWN_DIRECTIVE)
            .with_directive("redner")
            .with_note("known directives: query, render");
        assert_eq!(
            diag.to_string(),
            "warning[W0001]: ignored directive (in `redner`)\n  = note: known directives: query, render"
        );
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_handler_warn() {
        let handler = Handler::new();
        handler.warn(DiagnosticCode::W_UNKNOWN_DIRECTIVE, "respond", "ignored");
        assert_eq!(handler.warning_count(), 1);
        assert!(!handler.has_errors());

        let diags = handler.diagnostics();
        assert_eq!(diags[0].directive.as_deref(), Some("respond"));
        assert_eq!(diags[0].code, Some(DiagnosticCode::W_UNKNOWN_DIRECTIVE));
    }

    #[test]
    fn test_handler_errors_counted() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("bad"));
        assert!(handler.has_errors());
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_handler_allow_filters_by_code() {
        let handler = Handler::new();
        handler.allow(DiagnosticCode::W_UNKNOWN_DIRECTIVE);
        handler.allow(DiagnosticCode::W_UNKNOWN_DIRECTIVE);

        handler.warn(DiagnosticCode::W_UNKNOWN_DIRECTIVE, "x", "ignored");
        handler.warn(DiagnosticCode::W_MALFORMED_WITH_CLAUSE, "render", "odd");
        handler.emit_diagnostic(Diagnostic::warning("uncoded"));

        assert!(handler.is_allowed(DiagnosticCode::W_UNKNOWN_DIRECTIVE));
        assert_eq!(handler.warning_count(), 2);
    }

    #[test]
    fn test_handler_take_and_clear() {
        let handler = Handler::new();
        handler.warn(DiagnosticCode::W_UNKNOWN_DIRECTIVE, "a", "one");
        handler.warn(DiagnosticCode::W_UNKNOWN_DIRECTIVE, "b", "two");

        let taken = handler.take();
        assert_eq!(taken.len(), 2);
        assert!(handler.diagnostics().is_empty());

        handler.warn(DiagnosticCode::W_UNKNOWN_DIRECTIVE, "c", "three");
        handler.clear();
        assert_eq!(handler.warning_count(), 0);
    }
}
