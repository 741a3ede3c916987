//! Errors from loading input sheets and configuration files.

use std::path::PathBuf;

/// Failure to read a results sheet or a configuration file. These stop a run; problems inside a
/// sheet (bad rows, unreadable blocks) never do.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io { path: PathBuf, source: std::io::Error },
    /// The sheet is not valid CSV.
    Csv { path: PathBuf, source: csv::Error },
    /// The configuration file is not the expected JSON shape.
    Json { path: PathBuf, source: serde_json::Error },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Csv { path, source } => {
                write!(f, "CSV error in {}: {}", path.display(), source)
            }
            LoadError::Json { path, source } => {
                write!(f, "invalid JSON in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Csv { source, .. } => Some(source),
            LoadError::Json { source, .. } => Some(source),
        }
    }
}
