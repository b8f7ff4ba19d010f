//! Resolution of the route description and other input files.

use camino::{Utf8Path, Utf8PathBuf};
use navigator_fs::{file_is_file, read_utf8_to_string};

use crate::{ARG_TEXT, ARG_TEXT_FILE, CliError};

/// Where the route description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TextSource {
    /// Description given directly on the command line or via configuration.
    Inline(String),
    /// Description stored in a UTF-8 text file.
    File(Utf8PathBuf),
}

impl TextSource {
    /// Pick the single configured description source.
    ///
    /// `env` names the variable reported when neither option is present.
    pub(crate) fn resolve(
        text: Option<String>,
        text_file: Option<Utf8PathBuf>,
        env: &'static str,
    ) -> Result<Self, CliError> {
        match (text, text_file) {
            (Some(_), Some(_)) => Err(CliError::ConflictingArguments {
                first: ARG_TEXT,
                second: ARG_TEXT_FILE,
            }),
            (Some(text), None) => Ok(Self::Inline(text)),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Err(CliError::MissingArgument {
                field: ARG_TEXT,
                env,
            }),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CliError> {
        match self {
            Self::Inline(_) => Ok(()),
            Self::File(path) => require_existing(path, ARG_TEXT_FILE),
        }
    }

    pub(crate) fn read(&self) -> Result<String, CliError> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => read_utf8_to_string(path).map_err(|source| CliError::ReadText {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Ensure `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
