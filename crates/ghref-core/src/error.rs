//! Error taxonomy for reference resolution and tool forwarding

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the operator. Every variant maps to exit status 1.
///
/// Messages do not repeat their source; print with `{:#}` through `anyhow` for the full chain.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed shorthand reference
    #[error("Invalid GitHub path format: {input}. Expected: {expected}")]
    Format { input: String, expected: &'static str },

    /// Missing or empty value for a recognized option
    #[error("{flag} requires a value")]
    Usage { flag: String },

    /// Network or filesystem failure while retrieving a remote file
    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// A local data file required to exist does not
    #[error("Data file not found: {}", .path.display())]
    DataFileNotFound { path: PathBuf },

    /// The wrapped tool is not on PATH
    #[error("'{tool}' command not found. {hint}")]
    ToolNotFound { tool: String, hint: String },

    /// Invalid settings or environment overrides
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local filesystem failure outside of a fetch (cache directory, purge)
    #[error("{action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn fetch(url: impl ToString, source: impl Into<anyhow::Error>) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
