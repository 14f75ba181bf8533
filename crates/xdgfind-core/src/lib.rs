pub mod env;
pub mod errors;
pub mod roots;

pub use env::{Environment, ProcessEnv, StaticEnv};
pub use errors::{BoxError, HomeDirError, LookupError, ResolveError};
pub use roots::{LogicalRoot, ParseRootError};
