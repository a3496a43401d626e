//! Init command implementation.
//!
//! Writes a `draftt.toml` with the default settings.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::common::error_messages;
use crate::commands::traits::{self, Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{DrafttError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Write the default configuration, returning its path.
    pub fn run(&self) -> Result<PathBuf> {
        let target_dir = self
            .args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        Self::validate_directory(&target_dir)?;

        let config_path = target_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(DrafttError::Validation(format!(
                "{} {}",
                error_messages::OUTPUT_FILE_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        info!("Created {}", config_path.display());

        Ok(config_path)
    }

    fn validate_directory(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(DrafttError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }
        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default draftt.toml"
    }

    fn help() -> &'static str {
        "Creates a draftt.toml with default settings in the given or current \
         directory. An existing file is only replaced with --force."
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    traits::run::<InitCommand>(args).map(|_| ())
}
