//! Draftt CLI - command-line front end for the draft compiler crates.
//!
//! This is the main entry point for the draftt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{resolve_format, LexFormat, TraceFormat},
    run_init, run_lex, run_trace,
    traits::CommandDescription,
    InitArgs, LexArgs, TraceArgs,
};
use config::Config;
use error::{DrafttError, Result};

/// Draftt - tooling for draft files
///
/// Draftt lexes controller directive files into statements and traces
/// existing schemas back into model definitions.
#[derive(Parser, Debug)]
#[command(name = "draftt")]
#[command(author = "Draft Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tooling for draft files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "DRAFTT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DRAFTT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "DRAFTT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the draftt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Lex a directive file into statements
    ///
    /// Reads `keyword: body` lines and prints the statement each
    /// recognized directive describes.
    Lex(LexCommand),

    /// Trace reflected tables into model definitions
    ///
    /// Reads a JSON array of tables and prints the `models` section a
    /// draft would use for them.
    Trace(TraceCommand),

    /// Write a default draftt.toml
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
#[command(after_long_help = <commands::lex::LexCommand as CommandDescription>::help())]
struct LexCommand {
    /// Directive file to lex
    input: PathBuf,

    /// Output format (json, debug)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Require a `with:` prefix before data items
    #[arg(long)]
    strict_with: bool,
}

/// Arguments for the trace subcommand.
#[derive(Parser, Debug)]
#[command(after_long_help = <commands::trace::TraceCommand as CommandDescription>::help())]
struct TraceCommand {
    /// JSON schema file to trace
    input: PathBuf,

    /// Output format (toml, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
#[command(after_long_help = <commands::init::InitCommand as CommandDescription>::help())]
struct InitCommand {
    /// Directory to write into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr; stdout carries command output only.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrafttError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Trace(args) => execute_trace(args, config),
        Commands::Init(args) => execute_init(args),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let format = resolve_format(
        args.format.as_deref(),
        &config.output.lex_format,
        LexFormat::from_str,
    )?;
    let lex_args = LexArgs {
        input: args.input,
        format,
        strict_with: args.strict_with || config.lexer.strict_with,
        warn_unknown: config.lexer.warn_unknown,
        allow: config.lexer.allowed_codes()?,
    };
    run_lex(lex_args)
}

/// Execute the trace command.
fn execute_trace(args: TraceCommand, config: Config) -> Result<()> {
    let format = resolve_format(
        args.format.as_deref(),
        &config.output.trace_format,
        TraceFormat::from_str,
    )?;
    run_trace(TraceArgs {
        input: args.input,
        format,
    })
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    run_init(InitArgs {
        force: args.force,
        path: args.path,
    })
}
