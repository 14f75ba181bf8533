mod posix;
mod windows;

use std::{path::PathBuf, sync::Arc};

use tracing::debug;
use xdgfind_core::{Environment, HomeDirError, LogicalRoot, ResolveError};

pub use posix::PosixFallback;
pub use windows::WindowsFallback;

/// Platform abstraction for base directory defaults used when no override is set.
pub trait FallbackOps: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the fallback rule for a root on this platform.
    fn rule(&self, root: LogicalRoot) -> FallbackRule;

    /// Resolves the user's home directory.
    fn home_dir(&self, env: &dyn Environment) -> Result<PathBuf, HomeDirError>;

    /// Computes the default directory for `root`.
    ///
    /// The rule's platform variable wins when non-empty; otherwise the rule's
    /// suffix is joined onto the home directory.
    fn fallback(&self, root: LogicalRoot, env: &dyn Environment) -> Result<PathBuf, ResolveError> {
        let rule = self.rule(root);

        if let Some(var) = rule.env
            && let Some(value) = env.non_empty(var)
        {
            debug!(%root, var, platform = self.name(), "using platform directory variable");
            return Ok(PathBuf::from(value));
        }

        let home = self
            .home_dir(env)
            .map_err(ResolveError::HomeDirectoryUnavailable)?;
        Ok(rule.suffix.iter().fold(home, |path, part| path.join(part)))
    }
}

/// Per-root fallback descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRule {
    /// Platform variable consulted before the home directory.
    pub env: Option<&'static str>,
    /// Path segments joined onto the home directory.
    pub suffix: &'static [&'static str],
}

/// Selects the fallback backend for the compilation target.
#[cfg(windows)]
pub fn native() -> Arc<dyn FallbackOps> {
    Arc::new(WindowsFallback)
}

/// Selects the fallback backend for the compilation target.
#[cfg(not(windows))]
pub fn native() -> Arc<dyn FallbackOps> {
    Arc::new(PosixFallback)
}

/// Reads a home directory from `key`, reporting `display` when it is missing.
fn home_from_var(
    env: &dyn Environment,
    key: &str,
    display: &'static str,
) -> Result<PathBuf, HomeDirError> {
    env.non_empty(key)
        .map(PathBuf::from)
        .ok_or(HomeDirError { variable: display })
}
