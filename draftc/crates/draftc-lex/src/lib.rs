//! draftc-lex - Statement Lexer for controller drafts
//!
//! This crate turns the directive lines of one controller action into typed
//! statements for the code generator. It is purely syntactic: it does not
//! check that views, events, jobs or routes exist, and it emits no code.
//!
//! # Example Usage
//!
//! ```
//! use draftc_lex::{analyze, DirectiveBlock, Statement};
//!
//! let block: DirectiveBlock = [
//!     ("validate", "title|required, body|required"),
//!     ("save", "post"),
//!     ("send", "ReviewNotification to:post.author with:post"),
//!     ("redirect", "post.index"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let statements = analyze(&block);
//! assert_eq!(statements.len(), 4);
//! assert!(matches!(&statements[2], Statement::Send { recipient: Some(r), .. } if r == "post.author"));
//! ```
//!
//! # Module Structure
//!
//! - [`directive`] - Command keywords and the ordered directive block
//! - [`statement`] - The typed statements produced by the lexer
//! - [`tokens`] - Positional tokenizing helpers shared by the parsers
//! - [`lexer`] - Keyword dispatch and the per-keyword parsers
//!
//! # Directives
//!
//! | Keyword | Statement |
//! |---|---|
//! | `query` | [`Statement::Query`] (`all`, `pluck`, `count`, `exists`, `get`) |
//! | `render`, `fire`, `dispatch`, `redirect` | object name plus `with:` data |
//! | `send` | mailable, optional `to:` recipient, `with:` data |
//! | `validate` | comma-separated rules |
//! | `save`, `update`, `delete`, `find` | [`Statement::Eloquent`], body untouched |
//! | `flash`, `store` | [`Statement::Session`], body untouched |
//!
//! Any other keyword is skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod directive;
pub mod lexer;
pub mod statement;
pub mod tokens;

mod edge_cases;

// Re-export main types for convenience
pub use directive::{Command, DirectiveBlock};
pub use lexer::{analyze, LexerOptions, StatementLexer};
pub use statement::{EloquentAction, QueryOperation, SessionAction, Statement};
