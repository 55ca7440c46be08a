//! Dictionary loading errors.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from loading a word list.
#[derive(Debug)]
pub enum DictError {
    /// The word list could not be read.
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The word list holds no words after normalization.
    Empty {
        /// The path that was read.
        path: PathBuf,
    },
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read word list {}: {source}", path.display())
            }
            Self::Empty { path } => write!(f, "word list {} has no words", path.display()),
        }
    }
}

impl Error for DictError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}
