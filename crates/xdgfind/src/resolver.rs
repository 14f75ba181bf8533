use std::{fmt, path::PathBuf, sync::Arc};

use tracing::debug;
use xdgfind_core::{Environment, LogicalRoot, ProcessEnv, ResolveError};
use xdgfind_platform::FallbackOps;

/// Resolves base directories from an environment and a platform fallback backend.
#[derive(Clone)]
pub struct Resolver {
    env: Arc<dyn Environment>,
    fallback: Arc<dyn FallbackOps>,
}

impl Resolver {
    /// Resolver over the process environment and the target's fallback backend.
    pub fn native() -> Self {
        Self::with_parts(Arc::new(ProcessEnv), xdgfind_platform::native())
    }

    /// Resolver over an explicit environment and fallback backend.
    pub fn with_parts(env: Arc<dyn Environment>, fallback: Arc<dyn FallbackOps>) -> Self {
        Self { env, fallback }
    }

    /// Returns the base directory for `root`.
    ///
    /// A non-empty override variable is returned verbatim; otherwise the
    /// platform fallback decides.
    pub fn resolve(&self, root: LogicalRoot) -> Result<PathBuf, ResolveError> {
        let var = root.override_var();
        if let Some(value) = self.env.non_empty(var) {
            debug!(%root, var, "using override variable");
            return Ok(PathBuf::from(value));
        }

        let path = self.fallback.fallback(root, self.env.as_ref())?;
        debug!(
            %root,
            platform = self.fallback.name(),
            path = %path.display(),
            "resolved platform default"
        );
        Ok(path)
    }

    /// Resolves every root in [`LogicalRoot::ALL`] order.
    pub fn resolve_all(&self) -> Vec<(LogicalRoot, Result<PathBuf, ResolveError>)> {
        LogicalRoot::ALL
            .into_iter()
            .map(|root| (root, self.resolve(root)))
            .collect()
    }

    /// Returns the configuration directory.
    pub fn config_home(&self) -> Result<PathBuf, ResolveError> {
        self.resolve(LogicalRoot::Config)
    }

    /// Returns the data directory.
    pub fn data_home(&self) -> Result<PathBuf, ResolveError> {
        self.resolve(LogicalRoot::Data)
    }

    /// Returns the cache directory.
    pub fn cache_home(&self) -> Result<PathBuf, ResolveError> {
        self.resolve(LogicalRoot::Cache)
    }

    /// Returns the state directory.
    pub fn state_home(&self) -> Result<PathBuf, ResolveError> {
        self.resolve(LogicalRoot::State)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("fallback", &self.fallback.name())
            .finish_non_exhaustive()
    }
}

/// Returns the user's configuration directory.
///
/// Tries `$XDG_CONFIG_HOME`, then the platform default (`$HOME/.config` on POSIX).
pub fn config_home() -> Result<PathBuf, ResolveError> {
    Resolver::native().config_home()
}

/// Returns the user's data directory.
///
/// Tries `$XDG_DATA_HOME`, then the platform default (`$HOME/.local/share` on POSIX).
pub fn data_home() -> Result<PathBuf, ResolveError> {
    Resolver::native().data_home()
}

/// Returns the user's cache directory.
///
/// Tries `$XDG_CACHE_HOME`, then the platform default (`$HOME/.cache` on POSIX).
pub fn cache_home() -> Result<PathBuf, ResolveError> {
    Resolver::native().cache_home()
}

/// Returns the user's state directory.
///
/// Tries `$XDG_STATE_HOME`, then the platform default (`$HOME/.local/state` on POSIX).
pub fn state_home() -> Result<PathBuf, ResolveError> {
    Resolver::native().state_home()
}
