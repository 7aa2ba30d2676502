//! Native launcher for ESXX.
//!
//! Locates the Java interpreter, collects the jars under each
//! `<search-dir>/lib/`, classifies the command line and runs
//! `java ... -jar sbin/esxx.jar <args>` as a child process, exiting with the
//! child's exit code.

pub mod args;
pub mod classpath;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod process;

pub use error::{LaunchError, PathResolutionError, SpawnError, FAILURE_EXIT_CODE};
pub use identity::LauncherIdentity;
