//! Command traits for the draftt CLI.
//!
//! Every subcommand is a [`Command`] with a [`CommandDescription`], and is
//! driven through [`run`] so that they all log and time the same way.

use std::time::Instant;

use tracing::debug;

use crate::error::Result;

/// Standard command trait that all draftt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Human-readable descriptions for a command.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;

    /// Multi-line help text explaining usage.
    fn help() -> &'static str;
}

/// Build and execute a command, logging its name and duration.
pub fn run<C>(args: C::Args) -> Result<C::Output>
where
    C: Command + CommandDescription,
{
    let start_time = Instant::now();
    debug!(command = C::name(), "{}", C::description());

    let output = C::new(args).execute()?;

    debug!(
        command = C::name(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "completed"
    );
    Ok(output)
}
