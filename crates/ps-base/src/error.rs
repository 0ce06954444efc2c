use std::fmt;
use std::io;
use std::path::PathBuf;

/// Typed error for a summary run.
///
/// Everything that is not recovered locally (a missing directory in the tree,
/// an unreadable source file) ends up here and is reported once by `main`.
#[derive(Debug)]
pub enum SummaryError {
    /// Filesystem failure tied to a specific path
    Io { path: PathBuf, source: io::Error },
    /// Failure writing the output document
    Write(io::Error),
    /// Config file unreadable or not valid YAML
    Config { path: PathBuf, reason: String },
}

impl SummaryError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SummaryError::Io { path: path.into(), source }
    }
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            SummaryError::Write(e) => write!(f, "Write error: {}", e),
            SummaryError::Config { path, reason } => write!(f, "Config error in {}: {}", path.display(), reason),
        }
    }
}

impl std::error::Error for SummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SummaryError::Io { source, .. } => Some(source),
            SummaryError::Write(e) => Some(e),
            SummaryError::Config { .. } => None,
        }
    }
}

impl From<io::Error> for SummaryError {
    fn from(e: io::Error) -> Self {
        SummaryError::Write(e)
    }
}
