//! Launcher identity — who am I and where am I installed.

use tracing::debug;

use crate::error::PathResolutionError;

/// Capacity of the module-path buffer, including the terminating NUL.
pub const MAX_MODULE_PATH: usize = 1024;

/// Base name that turns the launcher into a raw argument relay.
///
/// Script mode needs a renamed *copy* of the binary. [`LauncherIdentity::current`]
/// reads the platform self path, which on Linux is resolved through symlinks,
/// so an `esxx-js -> esxx` symlink runs in normal mode.
pub const SCRIPT_MODE_NAME: &str = "esxx-js";

/// The launcher's installation directory and mode-selecting base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherIdentity {
    directory: String,
    base_name: String,
    program: String,
}

impl LauncherIdentity {
    /// Resolve the identity of the running executable.
    ///
    /// Uses `std::env::current_exe`, so symlinks are followed where the
    /// platform does (Linux `/proc/self/exe`); `argv[0]` is never consulted.
    pub fn current() -> Result<Self, PathResolutionError> {
        let exe = std::env::current_exe().map_err(PathResolutionError::Unavailable)?;
        let path = exe.to_str().ok_or_else(|| PathResolutionError::NotUnicode {
            path: exe.display().to_string(),
        })?;
        Self::from_exe_path(path)
    }

    /// Split an executable path into directory and base name.
    ///
    /// Either `/` or `\` is accepted as separator; the last one wins.
    pub fn from_exe_path(path: &str) -> Result<Self, PathResolutionError> {
        if path.len() >= MAX_MODULE_PATH {
            return Err(PathResolutionError::TooLong {
                len: path.len(),
                max: MAX_MODULE_PATH - 1,
            });
        }

        let split = path
            .rfind(|c: char| c == '/' || c == '\\')
            .ok_or_else(|| PathResolutionError::NoSeparator {
                path: path.to_string(),
            })?;

        let (directory, program) = path.split_at(split + 1);
        let stem = program.split('.').next().unwrap_or_default();

        let identity = Self {
            directory: directory.to_string(),
            base_name: stem.to_lowercase(),
            program: program.to_string(),
        };
        debug!(
            directory = %identity.directory,
            base_name = %identity.base_name,
            "resolved launcher identity"
        );
        Ok(identity)
    }

    /// Installation directory, always ending in a separator.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Lowercased file name without any extension.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// File name exactly as found on disk (used in usage text).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether every argument is relayed without interpretation.
    pub fn is_script_mode(&self) -> bool {
        self.base_name == SCRIPT_MODE_NAME
    }

    /// `<directory><relative>`, with `/` in `relative` mapped to the
    /// platform separator.
    pub fn install_path(&self, relative: &str) -> String {
        format!("{}{}", self.directory, platform_path(relative))
    }
}

/// Rewrite `/`-separated segments with the platform separator.
pub(crate) fn platform_path(relative: &str) -> String {
    relative.replace('/', std::path::MAIN_SEPARATOR_STR)
}
