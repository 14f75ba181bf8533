use std::path::PathBuf;

use xdgfind_core::{Environment, HomeDirError, LogicalRoot};

use crate::{FallbackOps, FallbackRule, home_from_var};

/// Conventional XDG defaults relative to `$HOME`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixFallback;

impl FallbackOps for PosixFallback {
    fn name(&self) -> &'static str {
        "posix"
    }

    fn rule(&self, root: LogicalRoot) -> FallbackRule {
        let suffix: &'static [&'static str] = match root {
            LogicalRoot::Config => &[".config"],
            LogicalRoot::Data => &[".local", "share"],
            LogicalRoot::Cache => &[".cache"],
            LogicalRoot::State => &[".local", "state"],
        };
        FallbackRule { env: None, suffix }
    }

    fn home_dir(&self, env: &dyn Environment) -> Result<PathBuf, HomeDirError> {
        home_from_var(env, "HOME", "$HOME")
    }
}
