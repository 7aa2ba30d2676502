//! Launcher configuration: optional `etc/*.toml` overlays plus the
//! environment resolver that turns them into an [`EnvironmentConfig`].

mod environment;
mod loader;
mod types;

pub use environment::{
    default_search_path, DEFAULT_INTERPRETER, JAVA_HOME_VAR, SCRIPT_MODE_JVM_ARGS,
    SEARCH_PATH_VAR,
};
pub use loader::{ConfigError, SHARED_CONFIG_NAME};
pub use types::{EnvironmentConfig, LauncherConfig};
