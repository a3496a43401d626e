//! Trace command implementation.
//!
//! Turns reflected table metadata (a JSON array of tables) into the
//! `models` section of a draft.

use std::path::PathBuf;

use draftc_schema::{trace_models, ModelDefinitions, Table};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{read_input_file, TraceFormat};
use crate::commands::traits::{self, Command, CommandDescription};
use crate::error::{DrafttError, Result};

/// Arguments for the trace command.
#[derive(Debug, Clone)]
pub struct TraceArgs {
    /// JSON schema file to read.
    pub input: PathBuf,
    /// Output rendering.
    pub format: TraceFormat,
}

/// Trace command handler.
pub struct TraceCommand {
    args: TraceArgs,
}

#[derive(Serialize)]
struct TraceDocument<'a> {
    models: &'a ModelDefinitions,
}

impl TraceCommand {
    /// Trace the schema file and render the model definitions.
    pub fn run(&self) -> Result<String> {
        let source = read_input_file(&self.args.input)?;
        let tables: Vec<Table> = serde_json::from_str(&source)?;
        debug!(tables = tables.len(), "loaded schema");

        let models = trace_models(&tables);
        if models.is_empty() {
            info!("No models found");
        }

        render(&models, self.args.format)
    }
}

fn render(models: &ModelDefinitions, format: TraceFormat) -> Result<String> {
    let document = TraceDocument { models };
    match format {
        TraceFormat::Json => Ok(serde_json::to_string_pretty(&document)?),
        TraceFormat::Toml => toml::to_string_pretty(&document).map_err(|e| {
            DrafttError::CommandExecution(format!("Failed to render models: {}", e))
        }),
    }
}

impl Command for TraceCommand {
    type Args = TraceArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "trace"
    }
}

impl CommandDescription for TraceCommand {
    fn description() -> &'static str {
        "Trace reflected tables into draft model definitions"
    }

    fn help() -> &'static str {
        "Reads a JSON array of tables with their columns and prints the \
         model definitions a draft would use for them."
    }
}

/// Run the trace command and print its output.
pub fn run_trace(args: TraceArgs) -> Result<()> {
    let output = traits::run::<TraceCommand>(args)?;
    println!("{}", output);
    Ok(())
}
