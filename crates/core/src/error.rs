use std::io;
use std::path::PathBuf;

/// Errors that can occur while resolving specs or exporting the IDE project
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed address spec '{spec}': {reason} (at '{offending}')")]
    MalformedSpec {
        spec: String,
        offending: String,
        reason: String,
    },

    #[error("No address specs were given; at least one is required")]
    EmptySpecList,

    #[error("Failed to write {}: {source}", .path.display())]
    IoWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No build root found above {}", .0.display())]
    BuildRootNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(
        spec: &str,
        offending: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::MalformedSpec {
            spec: spec.to_string(),
            offending: offending.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::IoWriteFailure {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for idea-plugin operations
pub type Result<T> = std::result::Result<T, Error>;
