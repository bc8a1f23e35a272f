//! Error types for the namegen crate.
//!
//! This module defines semantic error enums for dataset loading, name
//! selection, and configuration validation, following the project's error
//! handling conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading datasets or drawing names from them.
///
/// None of these are recoverable inside the pipeline; they propagate to the
/// caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// A dataset could not be read or parsed.
    #[error("name dataset at '{path}' is unavailable: {message}")]
    DataUnavailable {
        /// Path (or bundled resource name) of the dataset.
        path: Utf8PathBuf,
        /// Description of the I/O or parse failure.
        message: String,
    },

    /// A selection was attempted over zero candidate records.
    #[error("no candidate records in the {pool} pool")]
    EmptyPool {
        /// Human-readable name of the pool that was empty.
        pool: String,
    },
}

/// Errors raised when command-line flags describe an invalid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Both snake case and kebab case output were requested.
    #[error("--snake-case and --kebab-case are mutually exclusive")]
    ConflictingCaseStyles,
}
