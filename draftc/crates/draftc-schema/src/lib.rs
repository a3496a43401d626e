//! draftc-schema - Trace existing schemas back into draft model definitions
//!
//! Given column metadata already reflected from a database, this crate
//! produces the `models:` section a draft would contain for those tables, so
//! new drafts can reference existing models.
//!
//! # Module Structure
//!
//! - [`types`] - Reflected type name to draft type translation
//! - [`column`] - Column and table records, and their formatting

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod column;
pub mod types;

// Re-export main types for convenience
pub use column::{format_column, trace_models, Column, ModelDefinitions, Table};
pub use types::{translate_type, DEFAULT_TYPE};
