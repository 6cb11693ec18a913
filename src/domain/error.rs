use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for suideploy operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A configured package directory does not exist on disk.
    #[error("Package directory not found: {0}")]
    PackageDirMissing(PathBuf),

    /// No package with the given name is configured.
    #[error("Unknown package '{name}'. Configured packages: {available}")]
    UnknownPackage { name: String, available: String },

    /// A later step needs an identifier an earlier step failed to resolve.
    #[error("Missing identifier '{0}'. Run the earlier deployment steps first.")]
    MissingIdentifier(String),

    /// `sui` CLI execution failed.
    #[error("sui error running '{command}': {details}")]
    Sui { command: String, details: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
