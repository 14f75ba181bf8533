//! XDG base directory resolution and file lookup.
//!
//! Each [`LogicalRoot`] resolves from its override variable
//! (`XDG_CONFIG_HOME`, `XDG_DATA_HOME`, `XDG_CACHE_HOME`, `XDG_STATE_HOME`)
//! when set, otherwise from the platform defaults in [`xdgfind_platform`].
//! Nothing is cached; every call re-reads the environment and filesystem.

pub mod locator;
pub mod resolver;

pub use locator::{find_cache_file, find_config_file, find_data_file, find_file, find_state_file};
pub use resolver::{Resolver, cache_home, config_home, data_home, state_home};
pub use xdgfind_core::{
    BoxError, Environment, HomeDirError, LogicalRoot, LookupError, ProcessEnv, ResolveError,
    StaticEnv,
};
pub use xdgfind_platform::{FallbackOps, PosixFallback, WindowsFallback};
