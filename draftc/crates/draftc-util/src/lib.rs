//! draftc-util - Shared Utilities for the draft front end
//!
//! This crate holds the pieces every front-end phase needs but none of them
//! owns: the diagnostic types used to report degraded input, and the small
//! error types those types can produce.
//!
//! # Module Structure
//!
//! - [`diagnostic`] - Diagnostic levels, codes, and the collecting [`Handler`]
//! - [`error`] - Error types for this crate

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
