use std::{collections::BTreeMap, env, ffi::OsString};

/// Read-only view of environment variables consulted during resolution.
pub trait Environment: Send + Sync {
    /// Returns the raw value of `key`, if present.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Returns the value of `key` only when it is set to a non-empty string.
    fn non_empty(&self, key: &str) -> Option<OsString> {
        self.var_os(key).filter(|value| !value.is_empty())
    }
}

/// [`Environment`] backed by the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }
}

/// Fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnv {
    vars: BTreeMap<String, OsString>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Environment for StaticEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
