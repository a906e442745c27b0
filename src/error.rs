//! Error type shared by the splicing operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a splice run.
#[derive(Debug, Error)]
pub enum SpliceError {
    /// Failed to read or write a file
    #[error("Failed to access file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The file named in a begin marker has an extension with no fence language
    #[error("unknown language for {file}: no fence language registered for extension '{extension}'")]
    UnknownLanguage { file: String, extension: String },

    /// A template asks for a fragment the source file does not define
    #[error("missing fragment '{name}': no matching begin/end span in the source file")]
    MissingFragment { name: String },

    /// A begin marker without a name
    #[error("begin marker on line {line} has no name: {text}")]
    MissingName { line: usize, text: String },

    /// A begin marker whose span is not closed before the next begin marker or EOF
    #[error("begin marker '{name}' on line {line} has no matching end marker")]
    UnterminatedSpan { name: String, line: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SpliceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SpliceError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpliceError>;
