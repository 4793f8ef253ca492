use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The reasoning-service credential is absent. This is a startup-time
    /// configuration error, never a runtime analysis error.
    #[error("missing reasoning service credential: set {var}")]
    MissingApiKey { var: &'static str },

    /// A numeric environment variable failed to parse.
    #[error("invalid value '{value}' for {var}: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The configured corpus directory does not exist.
    #[error("corpus directory not found: {path}")]
    CorpusDirNotFound { path: PathBuf },

    /// The configured corpus path is not a directory.
    #[error("corpus path is not a directory: {path}")]
    CorpusDirNotADirectory { path: PathBuf },
}
