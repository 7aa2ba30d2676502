//! Argument handling pipeline for the launcher.
//!
//! ```text
//! Identity + Env → Discover → Classify → Assemble → LaunchSpec
//! ```
//!
//! Each stage is a pure function (discovery aside) that can be unit-tested
//! independently.

mod assembler;
mod classifier;
mod pipeline;
mod registry;

pub use assembler::{
    build, quote_argument, CommandLine, CommandLineAssembler, CLASSPATH_PROPERTY,
    INCLUDE_PATH_PROPERTY, MAIN_JAR, SCRIPT_MARKER,
};
pub use classifier::{classify, ClassifierState, LauncherOptions, Notice, ParsedArguments};
pub use pipeline::{build_launch_spec, collect_raw_args, LaunchSpec};
pub use registry::{flag_registry, usage_text, version_text, FlagArity, FlagBehavior, FlagDef};
