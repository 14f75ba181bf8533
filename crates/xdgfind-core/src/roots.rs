use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// One of the four per-user base directory categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalRoot {
    /// User configuration files.
    Config,
    /// User data files.
    Data,
    /// Non-essential cached data.
    Cache,
    /// State that persists between restarts but is not portable.
    State,
}

impl LogicalRoot {
    /// Every root in canonical order.
    pub const ALL: [LogicalRoot; 4] = [
        LogicalRoot::Config,
        LogicalRoot::Data,
        LogicalRoot::Cache,
        LogicalRoot::State,
    ];

    /// Environment variable that overrides this root on every platform.
    pub fn override_var(self) -> &'static str {
        match self {
            LogicalRoot::Config => "XDG_CONFIG_HOME",
            LogicalRoot::Data => "XDG_DATA_HOME",
            LogicalRoot::Cache => "XDG_CACHE_HOME",
            LogicalRoot::State => "XDG_STATE_HOME",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogicalRoot::Config => "config",
            LogicalRoot::Data => "data",
            LogicalRoot::Cache => "cache",
            LogicalRoot::State => "state",
        }
    }
}

impl fmt::Display for LogicalRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown root '{0}': expected one of config, data, cache, state")]
pub struct ParseRootError(pub String);

impl FromStr for LogicalRoot {
    type Err = ParseRootError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LogicalRoot::ALL
            .into_iter()
            .find(|root| root.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseRootError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_vars_are_distinct() {
        let vars: Vec<_> = LogicalRoot::ALL.iter().map(|r| r.override_var()).collect();
        assert_eq!(
            vars,
            [
                "XDG_CONFIG_HOME",
                "XDG_DATA_HOME",
                "XDG_CACHE_HOME",
                "XDG_STATE_HOME"
            ]
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("state".parse::<LogicalRoot>(), Ok(LogicalRoot::State));
        assert_eq!("CACHE".parse::<LogicalRoot>(), Ok(LogicalRoot::Cache));

        let err = "runtime".parse::<LogicalRoot>().expect_err("runtime is not a root");
        assert_eq!(err, ParseRootError("runtime".to_string()));
    }

    #[test]
    fn serializes_as_snake_case_name() {
        let encoded = serde_json::to_string(&LogicalRoot::Data).expect("encode should succeed");
        assert_eq!(encoded, "\"data\"");
    }
}
