//! Orchestration-level errors.
//!
//! Loader failures carry the offending path; resolution failures pass the
//! nl-config error (and its code) through unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading and resolving a launch configuration.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration file {path} is empty or contains no usable content")]
    Empty { path: PathBuf },

    #[error("configuration file {path} must contain a mapping at the top level")]
    NotAMapping { path: PathBuf },

    #[error("failed to render launch plan: {0}")]
    Render(String),

    #[error(transparent)]
    Resolution(#[from] nl_config::Error),
}

impl LaunchError {
    /// Stable error code. Resolution errors keep their nl-config code;
    /// loader errors use the 60-69 range.
    pub fn code(&self) -> u32 {
        match self {
            LaunchError::Resolution(err) => err.code(),
            LaunchError::NotFound { .. } => 60,
            LaunchError::NotAFile { .. } => 61,
            LaunchError::Io { .. } => 62,
            LaunchError::Yaml { .. } => 63,
            LaunchError::Json { .. } => 64,
            LaunchError::Empty { .. } => 65,
            LaunchError::NotAMapping { .. } => 66,
            LaunchError::Render(_) => 67,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_errors_keep_their_code() {
        let err = LaunchError::from(nl_config::Error::PackageNotFound("nav".into()));
        assert_eq!(err.code(), 30);
    }

    #[test]
    fn test_loader_errors_use_the_io_range() {
        let err = LaunchError::NotFound {
            path: PathBuf::from("/tmp/missing.yaml"),
        };
        assert_eq!(err.code(), 60);
        assert!(err.to_string().contains("/tmp/missing.yaml"));
    }
}
