//! Command modules for the draftt CLI.
//!
//! Each subcommand is implemented in its own file following the pattern in
//! [`traits`].

pub mod common;
pub mod traits;

pub mod init;
pub mod lex;
pub mod trace;

pub use init::{run_init, InitArgs};
pub use lex::{run_lex, LexArgs};
pub use trace::{run_trace, TraceArgs};
