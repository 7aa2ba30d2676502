//! Command line assembler — one quoted string for the interpreter.

use std::fmt;
use std::path::PathBuf;

use crate::args::classifier::ParsedArguments;
use crate::classpath;
use crate::config::EnvironmentConfig;
use crate::identity::LauncherIdentity;

/// System property carrying the library search path.
pub const INCLUDE_PATH_PROPERTY: &str = "esxx.app.include_path";
/// System property carrying the discovered classpath.
pub const CLASSPATH_PROPERTY: &str = "one-jar.class.path";
/// Main archive, relative to the installation directory.
pub const MAIN_JAR: &str = "sbin/esxx.jar";
/// Inserted before pass-through args in script mode.
pub const SCRIPT_MARKER: &[&str] = &["--script", "--"];

const SEARCH_PATH_JOIN: &str = ";";

/// The assembled command line. Built once, never modified.
///
/// Carries both the quoted string and the unescaped argument vector it was
/// built from, so launchers that spawn from argv never re-parse the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    line: String,
}

impl CommandLine {
    /// Interpreter executable (unquoted).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Interpreter arguments as separate, unescaped tokens.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Everything after the quoted interpreter token.
    pub fn arguments(&self) -> &str {
        self.line[self.program.len() + 2..].trim_start()
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn into_string(self) -> String {
        self.line
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Quote one pass-through argument.
///
/// Only `"` is escaped (as `\"`); backslashes are copied as-is.
pub fn quote_argument(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Builder for the interpreter command line.
#[derive(Debug, Clone)]
pub struct CommandLineAssembler {
    program: String,
    parts: Vec<String>,
    args: Vec<String>,
}

impl CommandLineAssembler {
    /// Start with the interpreter path.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            parts: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Extra interpreter arguments, embedded unquoted. Empty is skipped.
    ///
    /// The argv form splits them with shell-word rules, falling back to
    /// whitespace when the quoting is unbalanced.
    pub fn with_extra_args(mut self, extra: &str) -> Self {
        if !extra.is_empty() {
            self.parts.push(extra.to_string());
            let words = shlex::split(extra)
                .unwrap_or_else(|| extra.split_whitespace().map(String::from).collect());
            self.args.extend(words);
        }
        self
    }

    /// `"-D<name>=<value>"`, value embedded as-is.
    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.parts.push(format!("\"-D{name}={value}\""));
        self.args.push(format!("-D{name}={value}"));
        self
    }

    /// `-jar "<path>"`.
    pub fn with_main_jar(mut self, path: &str) -> Self {
        self.parts.push("-jar".into());
        self.parts.push(format!("\"{path}\""));
        self.args.push("-jar".into());
        self.args.push(path.to_string());
        self
    }

    /// Script-mode marker, when enabled.
    pub fn with_script_marker(mut self, enabled: bool) -> Self {
        if enabled {
            self.parts.extend(SCRIPT_MARKER.iter().map(|s| s.to_string()));
            self.args.extend(SCRIPT_MARKER.iter().map(|s| s.to_string()));
        }
        self
    }

    /// Pass-through args, each individually quoted.
    pub fn with_pass_through(mut self, args: &[String]) -> Self {
        self.parts.extend(args.iter().map(|a| quote_argument(a)));
        self.args.extend(args.iter().cloned());
        self
    }

    /// Build the final command line.
    pub fn build(self) -> CommandLine {
        let mut line = format!("\"{}\"", self.program);
        for part in &self.parts {
            line.push(' ');
            line.push_str(part);
        }
        CommandLine {
            program: self.program,
            args: self.args,
            line,
        }
    }
}

/// Assemble the interpreter command line from the resolved stages.
///
/// `-j`/`--jvmargs` on the command line replaces the resolved extra args.
pub fn build(
    identity: &LauncherIdentity,
    env: &EnvironmentConfig,
    classpath: &[PathBuf],
    parsed: &ParsedArguments,
) -> CommandLine {
    let extra_args = parsed
        .options
        .jvm_args
        .as_deref()
        .unwrap_or(&env.interpreter_extra_args);

    CommandLineAssembler::new(&env.interpreter_path)
        .with_extra_args(extra_args)
        .with_property(
            INCLUDE_PATH_PROPERTY,
            &env.library_search_path.join(SEARCH_PATH_JOIN),
        )
        .with_property(CLASSPATH_PROPERTY, &classpath::join(classpath))
        .with_main_jar(&identity.install_path(MAIN_JAR))
        .with_script_marker(identity.is_script_mode())
        .with_pass_through(&parsed.pass_through)
        .build()
}
