//! Pipeline — ties all launch-specification stages together.

use std::ffi::OsString;

use crate::args::assembler::{build, CommandLine};
use crate::args::classifier::{classify, ClassifierState, Notice};
use crate::args::registry::{flag_registry, usage_text, version_text};
use crate::classpath::discover;
use crate::config::{EnvironmentConfig, LauncherConfig};
use crate::identity::LauncherIdentity;

/// Everything needed to run the interpreter.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Command line for the process launcher.
    pub command_line: CommandLine,
    /// Usage/version text to print on stdout before spawning.
    pub output: String,
}

/// Build the launch specification from raw user arguments.
///
/// # Arguments
///
/// * `identity` - The launcher's own directory and base name
/// * `raw_args` - argv without the program name
/// * `overlay` - Settings from `etc/*.toml` (may be empty)
/// * `getenv` - Environment lookup
pub fn build_launch_spec<F>(
    identity: &LauncherIdentity,
    raw_args: &[String],
    overlay: &LauncherConfig,
    getenv: F,
) -> LaunchSpec
where
    F: Fn(&str) -> Option<String>,
{
    let registry = flag_registry();

    // Stage 1: Resolve environment
    let env = EnvironmentConfig::resolve_with(identity, overlay, getenv);

    // Stage 2: Discover classpath
    let classpath = discover(&env.library_search_path);

    // Stage 3: Classify arguments
    let parsed = classify(raw_args, ClassifierState::initial(identity), &registry);

    // Stage 4: Assemble command line
    let command_line = build(identity, &env, &classpath, &parsed);

    let output = parsed
        .notices
        .iter()
        .map(|notice| match notice {
            Notice::Help => usage_text(identity.program(), &registry),
            Notice::Version => version_text(identity.program()),
        })
        .collect();

    tracing::debug!(command_line = %command_line, "launch specification ready");

    LaunchSpec {
        command_line,
        output,
    }
}

/// Convert raw OS arguments to strings.
///
/// Arguments that are not valid Unicode are forwarded with U+FFFD
/// replacements, and each replacement is logged at `warn`.
pub fn collect_raw_args<I>(os_args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    os_args
        .into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().unwrap_or_else(|raw| {
                let lossy = raw.to_string_lossy().into_owned();
                tracing::warn!(
                    "Argument {} is not valid Unicode, forwarding {:?}",
                    index + 1,
                    lossy
                );
                lossy
            })
        })
        .collect()
}
