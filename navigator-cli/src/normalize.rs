//! Normalize command implementation for the navigator CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use navigator_core::{NormalizedRoute, normalize};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::TextSource;
use crate::{ARG_TEXT, ARG_TEXT_FILE, CliError, ENV_NORMALIZE_TEXT, write_json};

/// CLI arguments for the `normalize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "normalize",
    about = "Print the features extracted from a route description"
)]
#[ortho_config(prefix = "NAVIGATOR")]
pub(crate) struct NormalizeArgs {
    /// The route description to analyse.
    #[arg(long = ARG_TEXT, value_name = "text")]
    #[serde(default)]
    pub(crate) text: Option<String>,
    /// Path to a UTF-8 file holding the route description.
    #[arg(long = ARG_TEXT_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) text_file: Option<Utf8PathBuf>,
}

impl NormalizeArgs {
    pub(crate) fn into_config(self) -> Result<TextSource, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TextSource::resolve(merged.text, merged.text_file, ENV_NORMALIZE_TEXT)
    }
}

pub(super) fn run_normalize(args: NormalizeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let route = execute_normalize(args)?;
    write_json(writer, &route)
}

fn execute_normalize(args: NormalizeArgs) -> Result<NormalizedRoute, CliError> {
    let source = args.into_config()?;
    source.validate()?;
    let text = source.read()?;
    Ok(normalize(&text))
}
