use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Type-erased cause reported by a caller-supplied root finder.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The platform's home directory variable is unset or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{variable} is not defined")]
pub struct HomeDirError {
    /// Variable as spelled in the platform shell, e.g. `$HOME`.
    pub variable: &'static str,
}

/// Failures while resolving a base directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No override is set and the home directory cannot be determined.
    #[error("could not get user's home directory: {0}")]
    HomeDirectoryUnavailable(#[source] HomeDirError),
}

/// A file could not be located beneath a base directory.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The root resolved but probing the candidate file failed.
    #[error("could not find file {} in {}: {source}", .relative.display(), .root.display())]
    Missing {
        relative: PathBuf,
        root: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The root itself could not be resolved.
    #[error("could not find file {}: {source}", .relative.display())]
    Unresolved {
        relative: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl LookupError {
    /// Path that was requested relative to the root.
    pub fn relative(&self) -> &Path {
        match self {
            LookupError::Missing { relative, .. } | LookupError::Unresolved { relative, .. } => {
                relative
            }
        }
    }

    /// Resolved root directory, when resolution succeeded.
    pub fn root(&self) -> Option<&Path> {
        match self {
            LookupError::Missing { root, .. } => Some(root),
            LookupError::Unresolved { .. } => None,
        }
    }

    /// True when the probe reported that the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::Missing { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
