//! Flag registry — single source of truth for launcher-consumed flags.

/// What the launcher does when it sees a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagBehavior {
    /// Print usage, then forward the flag so the child can react too.
    Help,
    /// Print the launcher version, then forward the flag.
    Version,
    /// Consumed: value replaces the extra interpreter arguments.
    JvmArgs,
    /// Consumed: every later argument is forwarded verbatim.
    EndOfOptions,
}

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, no value (e.g., --help).
    NoValue,
    /// Value in the next argument, or inline after `=` on the long form
    /// (e.g., `-j <args>`, `--jvmargs=<args>`).
    RequiresValue,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Primary long form (e.g., "--jvmargs").
    pub long: &'static str,
    /// Optional short form (e.g., "-j").
    pub short: Option<&'static str>,
    /// Alternate spellings, normalized to the short (or long) form.
    pub aliases: &'static [&'static str],
    /// Does it take a value?
    pub arity: FlagArity,
    /// How the launcher handles it.
    pub behavior: FlagBehavior,
    /// Placeholder for the value in usage text.
    pub value_name: Option<&'static str>,
    /// Usage text description. `None` keeps the flag out of usage.
    pub description: Option<&'static str>,
}

/// Build the complete flag registry.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        FlagDef {
            long: "--help",
            short: Some("-?"),
            aliases: &["/?"],
            arity: FlagArity::NoValue,
            behavior: FlagBehavior::Help,
            value_name: None,
            description: Some("Show this help (also passed on to ESXX)"),
        },
        FlagDef {
            long: "--version",
            short: None,
            aliases: &[],
            arity: FlagArity::NoValue,
            behavior: FlagBehavior::Version,
            value_name: None,
            description: Some("Show launcher version (also passed on to ESXX)"),
        },
        FlagDef {
            long: "--jvmargs",
            short: Some("-j"),
            aliases: &[],
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::JvmArgs,
            value_name: Some("<JVM args>"),
            description: Some("Extra arguments for Java"),
        },
        FlagDef {
            long: "--",
            short: None,
            aliases: &[],
            arity: FlagArity::NoValue,
            behavior: FlagBehavior::EndOfOptions,
            value_name: None,
            description: None,
        },
    ]
}

impl FlagDef {
    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        arg == self.long || self.short == Some(arg) || self.aliases.contains(&arg)
    }

    /// Inline value of `--long=value`, for flags that take one.
    pub fn inline_value<'a>(&self, arg: &'a str) -> Option<&'a str> {
        if self.arity != FlagArity::RequiresValue {
            return None;
        }
        arg.strip_prefix(self.long)?.strip_prefix('=')
    }

    /// Canonical spelling of a matched argument: aliases become the short
    /// form (`/?` → `-?`), everything else is kept as typed.
    pub fn normalize<'a>(&self, arg: &'a str) -> &'a str {
        if self.aliases.contains(&arg) {
            self.short.unwrap_or(self.long)
        } else {
            arg
        }
    }

    fn usage_flags(&self) -> String {
        let long = match (self.arity, self.value_name) {
            (FlagArity::RequiresValue, Some(name)) => format!("{}={}", self.long, name),
            _ => self.long.to_string(),
        };
        match self.short {
            Some(short) => format!("{short}, {long}"),
            None => long,
        }
    }
}

/// Render usage text for `program` from the documented registry flags.
pub fn usage_text(program: &str, registry: &[FlagDef]) -> String {
    let mut text = format!("Usage: {program} [OPTIONS...]\n");
    for def in registry {
        if let Some(description) = def.description {
            text.push_str(&format!("  {:<38}{}\n", def.usage_flags(), description));
        }
    }
    text.push('\n');
    text
}

/// Render the version line for `program`.
pub fn version_text(program: &str) -> String {
    format!("{program} {}\n", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(behavior: FlagBehavior) -> FlagDef {
        flag_registry()
            .into_iter()
            .find(|d| d.behavior == behavior)
            .unwrap()
    }

    #[test]
    fn alias_normalizes_to_short_form() {
        let help = def(FlagBehavior::Help);
        assert!(help.matches("/?"));
        assert_eq!(help.normalize("/?"), "-?");
        assert_eq!(help.normalize("--help"), "--help");
    }

    #[test]
    fn inline_value_only_for_valued_long_form() {
        let jvm = def(FlagBehavior::JvmArgs);
        assert_eq!(jvm.inline_value("--jvmargs=-Xmx1g"), Some("-Xmx1g"));
        assert_eq!(jvm.inline_value("--jvmargs="), Some(""));
        assert_eq!(jvm.inline_value("--jvmargs"), None);
        assert_eq!(jvm.inline_value("--jvmargsX"), None);
        assert_eq!(def(FlagBehavior::Help).inline_value("--help=1"), None);
    }

    #[test]
    fn usage_lists_documented_flags() {
        let text = usage_text("esxx.exe", &flag_registry());
        assert!(text.starts_with("Usage: esxx.exe [OPTIONS...]\n"));
        assert!(text.contains("  -j, --jvmargs=<JVM args>              Extra arguments for Java\n"));
        assert!(text.contains("-?, --help"));
        assert!(text.ends_with("\n\n"));
    }
}
