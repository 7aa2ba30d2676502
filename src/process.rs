//! Process launcher — spawn the interpreter, wait, forward its exit code.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::args::{CommandLine, LaunchSpec};
use crate::error::{LaunchError, SpawnError};

/// Spawns one command line and blocks until the child exits.
pub trait ProcessLauncher {
    /// Returns the child's exit code.
    fn spawn_and_wait(&self, command_line: &CommandLine) -> Result<i32, LaunchError>;
}

/// Runs the command line as a real child process with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn spawn_and_wait(&self, command_line: &CommandLine) -> Result<i32, LaunchError> {
        let program = command_line.program();
        let mut command = command_for(command_line)?;
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!("Spawning {}", command_line);
        let mut child = command
            .spawn()
            .map_err(|e| SpawnError::new(program, e))?;

        // No timeout: the launcher lives exactly as long as the child.
        let status = child.wait().map_err(|e| {
            tracing::warn!("Waiting for {} failed: {}", program, e);
            LaunchError::ExitCodeUnavailable {
                program: program.to_string(),
            }
        })?;

        tracing::debug!("{} exited with {}", program, status);
        status.code().ok_or_else(|| LaunchError::ExitCodeUnavailable {
            program: program.to_string(),
        })
    }
}

/// Hand the assembled line to the OS tokenizer unchanged.
#[cfg(windows)]
fn command_for(command_line: &CommandLine) -> Result<Command, SpawnError> {
    use std::os::windows::process::CommandExt;

    let mut command = Command::new(command_line.program());
    let arguments = command_line.arguments();
    if !arguments.is_empty() {
        command.raw_arg(arguments);
    }
    Ok(command)
}

/// Spawn from the argv the command line was assembled from.
#[cfg(not(windows))]
fn command_for(command_line: &CommandLine) -> Result<Command, SpawnError> {
    let mut command = Command::new(command_line.program());
    command.args(command_line.args());
    Ok(command)
}

/// Print requested help/version text, run the child, map the outcome to an
/// exit code. Failures produce a one-line diagnostic on `stderr`.
pub fn run<L>(
    spec: &LaunchSpec,
    launcher: &L,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> i32
where
    L: ProcessLauncher + ?Sized,
{
    if !spec.output.is_empty() {
        if let Err(e) = stdout
            .write_all(spec.output.as_bytes())
            .and_then(|()| stdout.flush())
        {
            tracing::warn!("Failed to write usage/version text: {}", e);
        }
    }

    match launcher.spawn_and_wait(&spec.command_line) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(stderr, "{e}");
            e.exit_code()
        }
    }
}
