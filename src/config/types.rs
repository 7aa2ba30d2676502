use serde::{Deserialize, Serialize};

/// Per-installation launcher settings read from `etc/*.toml`.
///
/// Every field is optional; an absent field keeps the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Interpreter home directory (e.g., "/usr/lib/jvm/java-8").
    pub java_home: Option<String>,
    /// Extra interpreter arguments (e.g., "-Xmx512m").
    pub jvmargs: Option<String>,
    /// Library search path, replacing the built-in defaults.
    pub search_path: Option<Vec<String>>,
}

impl LauncherConfig {
    /// Overlay `other` on top of `self`, field by field.
    pub fn merge(self, other: LauncherConfig) -> LauncherConfig {
        LauncherConfig {
            java_home: other.java_home.or(self.java_home),
            jvmargs: other.jvmargs.or(self.jvmargs),
            search_path: other.search_path.or(self.search_path),
        }
    }
}

/// Fully resolved interpreter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    /// Interpreter binary, either `java` or `<home>/bin/java`.
    pub interpreter_path: String,
    /// Extra interpreter arguments, embedded verbatim.
    pub interpreter_extra_args: String,
    /// Directories holding a `lib/` of jars. Never empty.
    pub library_search_path: Vec<String>,
}
