//! Environment resolver — interpreter and search path from ambient state.
//!
//! Environment lookups go through a caller-supplied `getenv` so the
//! resolver stays pure. Nothing here touches the filesystem.

use crate::config::types::{EnvironmentConfig, LauncherConfig};
use crate::identity::{platform_path, LauncherIdentity};

/// Overrides the interpreter home directory.
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";
/// Overrides the library search path (`;`-separated).
pub const SEARCH_PATH_VAR: &str = "ESXX_PATH";

/// Interpreter used when no home directory is configured.
pub const DEFAULT_INTERPRETER: &str = "java";
/// Extra interpreter arguments in script mode.
pub const SCRIPT_MODE_JVM_ARGS: &str = "-client";

const SEARCH_PATH_SEPARATOR: char = ';';

impl EnvironmentConfig {
    /// Resolve from built-in defaults and environment variables.
    pub fn resolve<F>(identity: &LauncherIdentity, getenv: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve_with(identity, &LauncherConfig::default(), getenv)
    }

    /// Resolve with a config-file overlay on top of the environment.
    ///
    /// Precedence, lowest first: built-in defaults, environment, `overlay`.
    /// A config search path also drives classpath discovery.
    pub fn resolve_with<F>(
        identity: &LauncherIdentity,
        overlay: &LauncherConfig,
        getenv: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| getenv(name).filter(|v| !v.is_empty());

        let interpreter_path = overlay
            .java_home
            .clone()
            .filter(|v| !v.is_empty())
            .or_else(|| lookup(JAVA_HOME_VAR))
            .map(|home| interpreter_in(&home))
            .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string());

        let interpreter_extra_args = overlay.jvmargs.clone().unwrap_or_else(|| {
            if identity.is_script_mode() {
                SCRIPT_MODE_JVM_ARGS.to_string()
            } else {
                String::new()
            }
        });

        let library_search_path = overlay
            .search_path
            .clone()
            .map(non_empty)
            .filter(|paths| !paths.is_empty())
            .or_else(|| lookup(SEARCH_PATH_VAR).map(|raw| split_search_path(&raw)))
            .filter(|paths| !paths.is_empty())
            .unwrap_or_else(|| default_search_path(identity));

        let env = Self {
            interpreter_path,
            interpreter_extra_args,
            library_search_path,
        };
        tracing::debug!(
            interpreter = %env.interpreter_path,
            search_path = ?env.library_search_path,
            "resolved environment"
        );
        env
    }
}

/// `<installDir>share` and `<installDir>share/site`.
pub fn default_search_path(identity: &LauncherIdentity) -> Vec<String> {
    vec![
        identity.install_path("share"),
        identity.install_path("share/site"),
    ]
}

fn interpreter_in(home: &str) -> String {
    let home = home.trim_end_matches(|c: char| c == '/' || c == '\\');
    format!(
        "{home}{sep}{bin}",
        sep = std::path::MAIN_SEPARATOR,
        bin = platform_path("bin/java")
    )
}

fn split_search_path(raw: &str) -> Vec<String> {
    non_empty(raw.split(SEARCH_PATH_SEPARATOR).map(str::to_string).collect())
}

fn non_empty(paths: Vec<String>) -> Vec<String> {
    paths.into_iter().filter(|p| !p.is_empty()).collect()
}
