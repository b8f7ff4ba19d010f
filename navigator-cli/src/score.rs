//! Score command implementation for the navigator CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use navigator_core::ReferenceRoute;
use navigator_fs::{create_utf8_file, open_utf8_file};
use navigator_scorer::{ScoreResult, calculate_score, score_color, score_description};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{TextSource, require_existing};
use crate::{
    ARG_OUTPUT, ARG_SCORE_REFERENCE, ARG_TEXT, ARG_TEXT_FILE, CliError, ENV_SCORE_REFERENCE,
    ENV_SCORE_TEXT, write_json,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a free-text route description against a reference \
                 route. The reference is a JSON document in the mapping \
                 service's directions format; the description comes from \
                 --text or --text-file.",
    about = "Score a route description against a reference route"
)]
#[ortho_config(prefix = "NAVIGATOR")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the reference route.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reference: Option<Utf8PathBuf>,
    /// The route description to score.
    #[arg(long = ARG_TEXT, value_name = "text")]
    #[serde(default)]
    pub(crate) text: Option<String>,
    /// Path to a UTF-8 file holding the route description.
    #[arg(long = ARG_TEXT_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) text_file: Option<Utf8PathBuf>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the reference route JSON.
    pub(crate) reference: Utf8PathBuf,
    /// Source of the route description.
    pub(crate) text: TextSource,
    /// Optional report destination.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.reference, ARG_SCORE_REFERENCE)?;
        self.text.validate()
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let reference = args.reference.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_REFERENCE,
            env: ENV_SCORE_REFERENCE,
        })?;
        let text = TextSource::resolve(args.text, args.text_file, ENV_SCORE_TEXT)?;
        Ok(Self {
            reference,
            text,
            output: args.output,
        })
    }
}

/// JSON report written by the `score` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScoreReport {
    /// Composite score, breakdown, and feedback.
    #[serde(flatten)]
    pub(crate) result: ScoreResult,
    /// Encouragement text for the score band.
    pub(crate) description: String,
    /// Display colour for the score band.
    pub(crate) color: String,
}

impl From<ScoreResult> for ScoreReport {
    fn from(result: ScoreResult) -> Self {
        Self {
            description: score_description(result.score).to_owned(),
            color: score_color(result.score).to_owned(),
            result,
        }
    }
}

pub(super) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let report = execute_score(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_json(&mut file, &report)?;
            log::info!("wrote score report to {path}");
            Ok(())
        }
        None => write_json(writer, &report),
    }
}

pub(super) fn execute_score(config: &ScoreConfig) -> Result<ScoreReport, CliError> {
    let reference = load_reference(&config.reference)?;
    let text = config.text.read()?;
    let result = calculate_score(&text, Some(&reference));
    log::debug!(
        "scored {} against {}: {}/{}",
        describe_source(&config.text),
        config.reference,
        result.score,
        result.max_score
    );
    Ok(ScoreReport::from(result))
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`ReferenceRoute`] from disk.
pub(super) fn load_reference(path: &Utf8Path) -> Result<ReferenceRoute, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenReference {
        path: path.to_path_buf(),
        source,
    })?;
    ReferenceRoute::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParseReference {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn describe_source(source: &TextSource) -> String {
    match source {
        TextSource::Inline(_) => format!("--{ARG_TEXT}"),
        TextSource::File(path) => format!("--{ARG_TEXT_FILE} {path}"),
    }
}

#[cfg(test)]
pub(crate) fn score_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
