//! Error types for the launcher.
//!
//! Every error that reaches `main` is fatal: a one-line diagnostic goes to
//! stderr and the process exits with [`FAILURE_EXIT_CODE`].

use std::io;

use thiserror::Error;

/// Exit code for launcher-local failures (own path, spawn, exit status).
pub const FAILURE_EXIT_CODE: i32 = 10;

/// The launcher could not determine its own installation directory.
#[derive(Debug, Error)]
pub enum PathResolutionError {
    /// The platform self-path query failed.
    #[error("Unable to determine launcher path: {0}")]
    Unavailable(#[source] io::Error),

    /// The path does not fit the fixed module-path buffer.
    #[error("Launcher path is {len} bytes long, limit is {max}")]
    TooLong { len: usize, max: usize },

    /// The path cannot be represented as UTF-8.
    #[error("Launcher path {path} is not valid Unicode")]
    NotUnicode { path: String },

    /// No `/` or `\` anywhere in the path.
    #[error("Expected at least one (back-) slash in module name {path}.")]
    NoSeparator { path: String },
}

/// The child process could not be created.
#[derive(Debug, Error)]
#[error("Failed to launch {program}: error code {code}.")]
pub struct SpawnError {
    /// Interpreter the launcher tried to run.
    pub program: String,
    /// Raw OS error code, `0` when the failure did not come from the OS.
    pub code: i32,
    #[source]
    pub source: io::Error,
}

impl SpawnError {
    pub fn new(program: impl Into<String>, source: io::Error) -> Self {
        Self {
            program: program.into(),
            code: source.raw_os_error().unwrap_or(0),
            source,
        }
    }
}

/// Any failure that ends the launcher with [`FAILURE_EXIT_CODE`].
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    PathResolution(#[from] PathResolutionError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    /// The child ran, but its exit code could not be retrieved.
    #[error("Child process {program} terminated without an exit code")]
    ExitCodeUnavailable { program: String },
}

impl LaunchError {
    /// Process exit code to report for this error.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}
