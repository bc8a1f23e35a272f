//! Error types for the namegen CLI.

use thiserror::Error;

use crate::error::{ConfigError, NameError};

/// Errors surfaced by the CLI between argument parsing and output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The flags describe an invalid configuration.
    #[error("invalid configuration: {source}")]
    InvalidConfiguration {
        /// Underlying configuration error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// The data directory path is not valid UTF-8.
    #[error("data directory path is not valid UTF-8: {path}")]
    NonUtf8DataDir {
        /// Lossy rendering of the supplied path.
        path: String,
    },
    /// Loading datasets or drawing a name failed.
    #[error("{source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: NameError,
    },
}
