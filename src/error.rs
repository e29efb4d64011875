use std::path::PathBuf;
use thiserror::Error;

/// Asymptote's error types for the CLI and transport surfaces.
///
/// The analysis core itself never fails: unsupported languages, empty input,
/// and degenerate parses all produce the empty-summary shape instead of an
/// error (those conditions are part of the output contract, not faults).
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("server error: {message}")]
    Server { message: String },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;

impl AnalyzeError {
    pub fn path_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Returns true if the error is recoverable and batch analysis can
    /// continue with the next input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PathNotFound { .. } | Self::InvalidInput { .. })
    }
}
