use std::path::PathBuf;

use crate::fold::CaseMode;

/// kwscan error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No keywords were supplied to build a pattern set from.
    #[error("empty pattern set: at least one keyword is required")]
    EmptyPatternSet,

    /// A keyword is shorter than the block size the tables hash.
    #[error("pattern {id} is too short: {len} bytes (block size: {block})")]
    PatternTooShort { id: usize, len: usize, block: usize },

    /// The text to scan is empty.
    #[error("empty text: nothing to scan")]
    EmptyText,

    /// The text cannot hold even the shortest keyword.
    #[error("text too short: {text_len} bytes, shortest keyword is {min_len} bytes")]
    TextShorterThanPattern { text_len: usize, min_len: usize },

    /// Tables were built for one case mode and a scan asked for the other.
    #[error("tables were built {built} but the search requested {requested}")]
    CaseModeMismatch { built: CaseMode, requested: CaseMode },

    /// The scan was cancelled through its cancel token.
    #[error("scan cancelled after {matches} matches")]
    Cancelled { matches: usize },

    /// Text could not be loaded from a file or URL.
    #[error("text source error: {source_name}: {message}")]
    TextSource {
        source_name: String,
        message: String,
    },

    /// Keywords could not be loaded.
    #[error("keyword source error: {}: {source}", .path.display())]
    KeywordSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using kwscan Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes, grep style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one keyword matched
    Success = 0,
    /// Scan completed without a match
    NoMatch = 1,
    /// Configuration, argument or input error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::EmptyPatternSet
            | Error::PatternTooShort { .. }
            | Error::EmptyText
            | Error::TextShorterThanPattern { .. }
            | Error::TextSource { .. }
            | Error::KeywordSource { .. } => ExitCode::ConfigError,
            Error::CaseModeMismatch { .. } | Error::Internal(_) => ExitCode::InternalError,
            Error::Cancelled { .. } => ExitCode::InternalError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
