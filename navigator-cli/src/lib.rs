//! Command-line interface for scoring blind-navigation route descriptions.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod input;
mod normalize;
mod score;

pub use error::CliError;

use normalize::{NormalizeArgs, run_normalize};
use score::{ScoreArgs, run_score};

pub(crate) const ARG_SCORE_REFERENCE: &str = "reference";
pub(crate) const ARG_TEXT: &str = "text";
pub(crate) const ARG_TEXT_FILE: &str = "text-file";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_SCORE_REFERENCE: &str = "NAVIGATOR_CMDS_SCORE_REFERENCE";
pub(crate) const ENV_SCORE_TEXT: &str = "NAVIGATOR_CMDS_SCORE_TEXT";
pub(crate) const ENV_NORMALIZE_TEXT: &str = "NAVIGATOR_CMDS_NORMALIZE_TEXT";

/// Run the navigator CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading,
/// or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score(args, writer),
        Command::Normalize(args) => run_normalize(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "blind-navigator",
    about = "Score route descriptions written from memory against reference directions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a route description against a reference route.
    Score(ScoreArgs),
    /// Show the features extracted from a route description.
    Normalize(NormalizeArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
