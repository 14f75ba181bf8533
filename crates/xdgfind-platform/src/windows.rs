use std::path::PathBuf;

use xdgfind_core::{Environment, HomeDirError, LogicalRoot};

use crate::{FallbackOps, FallbackRule, home_from_var};

/// Windows defaults: `%LOCALAPPDATA%` and `%TEMP%`, then paths under `%USERPROFILE%`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFallback;

impl FallbackOps for WindowsFallback {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn rule(&self, root: LogicalRoot) -> FallbackRule {
        match root {
            LogicalRoot::Config | LogicalRoot::Data | LogicalRoot::State => FallbackRule {
                env: Some("LOCALAPPDATA"),
                suffix: &["AppData", "Local"],
            },
            LogicalRoot::Cache => FallbackRule {
                env: Some("TEMP"),
                suffix: &["AppData", "Local", "Temp"],
            },
        }
    }

    fn home_dir(&self, env: &dyn Environment) -> Result<PathBuf, HomeDirError> {
        home_from_var(env, "USERPROFILE", "%USERPROFILE%")
    }
}
