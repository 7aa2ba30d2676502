//! Argument classifier — raw args → launcher options + pass-through args.
//!
//! A two-state machine. In [`ClassifierState::Normal`] registry flags are
//! interpreted; after `--` (or from the start, in script mode) the machine
//! is in [`ClassifierState::PassThrough`] and every argument is forwarded
//! verbatim. The transition is one-way.

use crate::args::registry::{FlagBehavior, FlagDef};
use crate::identity::LauncherIdentity;

/// Classifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    /// Registry flags are interpreted.
    Normal,
    /// Every argument is forwarded verbatim.
    PassThrough,
}

impl ClassifierState {
    /// Initial state for a launcher: script mode relays everything.
    pub fn initial(identity: &LauncherIdentity) -> Self {
        if identity.is_script_mode() {
            ClassifierState::PassThrough
        } else {
            ClassifierState::Normal
        }
    }
}

/// Informational output requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Help,
    Version,
}

/// Options consumed by the launcher itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherOptions {
    /// Replaces the resolved extra interpreter arguments when set.
    pub jvm_args: Option<String>,
}

/// Result of classifying raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    pub options: LauncherOptions,
    /// Arguments for the child, in order.
    pub pass_through: Vec<String>,
    /// Help/version requests, in the order they appeared.
    pub notices: Vec<Notice>,
    /// State when the arguments ran out.
    pub final_state: ClassifierState,
}

/// Classify `raw_args` (argv without the program name) against the registry.
pub fn classify(
    raw_args: &[String],
    initial: ClassifierState,
    registry: &[FlagDef],
) -> ParsedArguments {
    let mut state = initial;
    let mut options = LauncherOptions::default();
    let mut pass_through = Vec::new();
    let mut notices = Vec::new();
    let mut iter = raw_args.iter();

    while let Some(arg) = iter.next() {
        if state == ClassifierState::PassThrough {
            pass_through.push(arg.clone());
            continue;
        }

        let Some((def, inline)) = lookup(arg, registry) else {
            pass_through.push(arg.clone());
            continue;
        };

        match def.behavior {
            FlagBehavior::Help => {
                notices.push(Notice::Help);
                pass_through.push(def.normalize(arg).to_string());
            }
            FlagBehavior::Version => {
                notices.push(Notice::Version);
                pass_through.push(def.normalize(arg).to_string());
            }
            FlagBehavior::JvmArgs => match inline {
                Some(value) => options.jvm_args = Some(value.to_string()),
                // A trailing -j has no value and is forwarded like any other arg
                None => match iter.next() {
                    Some(value) => options.jvm_args = Some(value.clone()),
                    None => pass_through.push(arg.clone()),
                },
            },
            FlagBehavior::EndOfOptions => state = ClassifierState::PassThrough,
        }
    }

    tracing::debug!(
        ?state,
        jvm_args = ?options.jvm_args,
        forwarded = pass_through.len(),
        "classified arguments"
    );

    ParsedArguments {
        options,
        pass_through,
        notices,
        final_state: state,
    }
}

/// Find the registry entry for `arg`, with its inline `=value` if any.
fn lookup<'r, 'a>(
    arg: &'a str,
    registry: &'r [FlagDef],
) -> Option<(&'r FlagDef, Option<&'a str>)> {
    registry.iter().find_map(|def| {
        if def.matches(arg) {
            Some((def, None))
        } else {
            def.inline_value(arg).map(|value| (def, Some(value)))
        }
    })
}
