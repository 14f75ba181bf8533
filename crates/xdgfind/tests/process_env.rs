mod common;

use std::{fs, path::PathBuf};

use common::EnvGuard;
use tempfile::tempdir;
use xdgfind::{
    LogicalRoot, ResolveError, cache_home, config_home, data_home, find_cache_file,
    find_config_file, find_data_file, find_state_file, state_home,
};

const OVERRIDES: [&str; 4] = [
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XDG_CACHE_HOME",
    "XDG_STATE_HOME",
];

fn cleared_overrides(home: &str) -> Vec<(&'static str, &str)> {
    let mut vars: Vec<_> = OVERRIDES.iter().map(|var| (*var, "")).collect();
    vars.push(("HOME", home));
    vars
}

#[test]
fn config_override_is_returned() {
    let _env = EnvGuard::set([("HOME", ""), ("XDG_CONFIG_HOME", "/wow")]);
    assert_eq!(config_home().expect("config should resolve"), PathBuf::from("/wow"));
}

#[cfg(unix)]
#[test]
fn home_defaults_for_every_root() {
    let _env = EnvGuard::set(cleared_overrides("/Users/Mulder"));

    assert_eq!(
        config_home().expect("config should resolve"),
        PathBuf::from("/Users/Mulder/.config")
    );
    assert_eq!(
        data_home().expect("data should resolve"),
        PathBuf::from("/Users/Mulder/.local/share")
    );
    assert_eq!(
        cache_home().expect("cache should resolve"),
        PathBuf::from("/Users/Mulder/.cache")
    );
    assert_eq!(
        state_home().expect("state should resolve"),
        PathBuf::from("/Users/Mulder/.local/state")
    );
}

#[cfg(unix)]
#[test]
fn empty_env_fails() {
    let _env = EnvGuard::set(cleared_overrides(""));

    for resolve in [config_home, data_home, cache_home, state_home] {
        let err = resolve().expect_err("resolution without HOME must fail");
        assert!(matches!(err, ResolveError::HomeDirectoryUnavailable(_)));
        assert_eq!(
            err.to_string(),
            "could not get user's home directory: $HOME is not defined"
        );
    }
}

#[test]
/// Verifies each convenience finder searches its own root.
fn finders_use_matching_root() {
    type Finder = fn(&[&str]) -> Result<PathBuf, xdgfind::LookupError>;
    let finders: [(LogicalRoot, Finder); 4] = [
        (LogicalRoot::Config, |parts| find_config_file(parts)),
        (LogicalRoot::Data, |parts| find_data_file(parts)),
        (LogicalRoot::Cache, |parts| find_cache_file(parts)),
        (LogicalRoot::State, |parts| find_state_file(parts)),
    ];

    for (root, finder) in finders {
        let tmp = tempdir().expect("tempdir");
        let fixture = tmp.path().join("config.yaml");
        fs::write(&fixture, "").expect("fixture write should succeed");

        let _env = EnvGuard::set([(root.override_var(), tmp.path())]);
        let found = finder(&["config.yaml"]).expect("file should be found");
        assert_eq!(found, fixture, "root {root}");
    }
}

#[test]
fn state_finder_does_not_search_cache_root() {
    let state = tempdir().expect("tempdir");
    let cache = tempdir().expect("tempdir");
    fs::write(cache.path().join("session.db"), "").expect("fixture write should succeed");

    let _env = EnvGuard::set([
        ("XDG_STATE_HOME", state.path()),
        ("XDG_CACHE_HOME", cache.path()),
    ]);

    let err = find_state_file(["session.db"]).expect_err("file only exists in cache root");
    assert!(err.is_not_found());
    assert_eq!(err.root(), Some(state.path()));

    fs::write(state.path().join("session.db"), "").expect("fixture write should succeed");
    let found = find_state_file(["session.db"]).expect("file should be found in state root");
    assert_eq!(found, state.path().join("session.db"));
}
