use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use tracing::debug;
use xdgfind_core::{BoxError, LogicalRoot, LookupError};

use crate::Resolver;

/// Locates `segments` beneath the directory returned by `find_root`.
///
/// The candidate is stat'ed once; nothing is opened or created. Absolute
/// segments are treated as relative to the root and `..` is folded into the
/// preceding segment. An empty `segments` probes the root itself.
pub fn find_file<F, E, I, P>(find_root: F, segments: I) -> Result<PathBuf, LookupError>
where
    F: FnOnce() -> Result<PathBuf, E>,
    E: Into<BoxError>,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let relative = relative_path(segments);

    let root = match find_root() {
        Ok(root) => root,
        Err(err) => {
            let source = err.into();
            debug!(file = %relative.display(), error = %source, "could not resolve root");
            return Err(LookupError::Unresolved { relative, source });
        }
    };

    let candidate = if relative.as_os_str().is_empty() {
        root.clone()
    } else {
        root.join(&relative)
    };
    if let Err(source) = fs::metadata(&candidate) {
        debug!(path = %candidate.display(), error = %source, "file probe failed");
        return Err(LookupError::Missing {
            relative,
            root,
            source,
        });
    }

    Ok(candidate)
}

fn relative_path<I, P>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut relative = PathBuf::new();
    for segment in segments {
        for component in segment.as_ref().components() {
            match component {
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
                Component::ParentDir => {
                    // Only a leading run of `..` survives; it climbs above the root.
                    if relative.file_name().is_some() {
                        relative.pop();
                    } else {
                        relative.push(component);
                    }
                }
                Component::Normal(_) => relative.push(component),
            }
        }
    }
    relative
}

impl Resolver {
    /// Locates a file beneath the resolved `root`.
    pub fn find<I, P>(&self, root: LogicalRoot, segments: I) -> Result<PathBuf, LookupError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        find_file(|| self.resolve(root), segments)
    }

    /// Locates a file beneath this resolver's configuration directory.
    pub fn find_config_file<I, P>(&self, segments: I) -> Result<PathBuf, LookupError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.find(LogicalRoot::Config, segments)
    }

    /// Locates a file beneath this resolver's data directory.
    pub fn find_data_file<I, P>(&self, segments: I) -> Result<PathBuf, LookupError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.find(LogicalRoot::Data, segments)
    }

    /// Locates a file beneath this resolver's cache directory.
    pub fn find_cache_file<I, P>(&self, segments: I) -> Result<PathBuf, LookupError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.find(LogicalRoot::Cache, segments)
    }

    /// Locates a file beneath this resolver's state directory.
    pub fn find_state_file<I, P>(&self, segments: I) -> Result<PathBuf, LookupError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.find(LogicalRoot::State, segments)
    }
}

/// Searches the user's configuration directory for a file.
pub fn find_config_file<I, P>(segments: I) -> Result<PathBuf, LookupError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Resolver::native().find_config_file(segments)
}

/// Searches the user's data directory for a file.
pub fn find_data_file<I, P>(segments: I) -> Result<PathBuf, LookupError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Resolver::native().find_data_file(segments)
}

/// Searches the user's cache directory for a file.
pub fn find_cache_file<I, P>(segments: I) -> Result<PathBuf, LookupError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Resolver::native().find_cache_file(segments)
}

/// Searches the user's state directory for a file.
pub fn find_state_file<I, P>(segments: I) -> Result<PathBuf, LookupError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Resolver::native().find_state_file(segments)
}
