//! Builtin command table, registry, and dispatch logic.

use std::collections::HashMap;

use folio_platform::{Clock, DownloadRequest};
use folio_types::config::SiteConfig;
use folio_types::error::{FolioError, Result};

use crate::{file_commands, fun_commands, security_commands, system_commands, text_commands};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Text to append; each `\n`-separated line becomes one scrollback line.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to replace the scrollback with nothing.
    Clear,
    /// Text to append plus a download for the host to start.
    Download {
        text: String,
        request: DownloadRequest,
    },
}

/// Read-only environment passed to every command.
pub struct Environment<'a> {
    /// Site configuration all content is rendered from.
    pub config: &'a SiteConfig,
    /// Clock for `date` and `uptime`.
    pub clock: &'a dyn Clock,
}

/// Every command the terminal knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    Clear,
    Ls,
    Pwd,
    Whoami,
    Cat,
    Wget,
    Echo,
    Date,
    Uptime,
    Neofetch,
    Fastfetch,
    Exit,
    Sudo,
    Rm,
    Mv,
    Cp,
}

impl Builtin {
    /// All builtins, in help and completion order.
    pub const ALL: [Builtin; 17] = [
        Self::Help,
        Self::Clear,
        Self::Ls,
        Self::Pwd,
        Self::Whoami,
        Self::Cat,
        Self::Wget,
        Self::Echo,
        Self::Date,
        Self::Uptime,
        Self::Neofetch,
        Self::Fastfetch,
        Self::Exit,
        Self::Sudo,
        Self::Rm,
        Self::Mv,
        Self::Cp,
    ];

    /// The command name (what the user types).
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Ls => "ls",
            Self::Pwd => "pwd",
            Self::Whoami => "whoami",
            Self::Cat => "cat",
            Self::Wget => "wget",
            Self::Echo => "echo",
            Self::Date => "date",
            Self::Uptime => "uptime",
            Self::Neofetch => "neofetch",
            Self::Fastfetch => "fastfetch",
            Self::Exit => "exit",
            Self::Sudo => "sudo",
            Self::Rm => "rm",
            Self::Mv => "mv",
            Self::Cp => "cp",
        }
    }

    /// One-line description for `help`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Show this help message",
            Self::Clear => "Clear terminal screen",
            Self::Ls => "List files and directories",
            Self::Pwd => "Show current directory",
            Self::Whoami => "Show current user",
            Self::Cat => "Display file contents",
            Self::Wget => "Download files",
            Self::Echo => "Display text",
            Self::Date => "Show current date/time",
            Self::Uptime => "Show portfolio uptime",
            Self::Neofetch => "Show system information (simple)",
            Self::Fastfetch => "Show detailed system info with logo",
            Self::Exit => "Exit message",
            Self::Sudo | Self::Rm | Self::Mv | Self::Cp => "Not available here",
        }
    }

    /// Usage string (e.g. "cat <file>").
    pub fn usage(self) -> &'static str {
        match self {
            Self::Help => "help [command]",
            Self::Cat => "cat <file>",
            Self::Wget => "wget <file>",
            Self::Echo => "echo [text...]",
            other => other.name(),
        }
    }

    /// Command category for grouping in `help` output.
    pub fn category(self) -> &'static str {
        match self {
            Self::Ls | Self::Cat | Self::Wget => "files",
            Self::Pwd
            | Self::Whoami
            | Self::Date
            | Self::Uptime
            | Self::Neofetch
            | Self::Fastfetch => "system",
            Self::Help | Self::Clear | Self::Echo | Self::Exit => "utilities",
            Self::Sudo | Self::Rm | Self::Mv | Self::Cp => "restricted",
        }
    }

    /// Hidden commands work but are left out of `help` and tab completion.
    pub fn is_hidden(self) -> bool {
        self.category() == "restricted"
    }

    fn execute(self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        match self {
            Self::Help => text_commands::help(args, env),
            Self::Clear => Ok(CommandOutput::Clear),
            Self::Ls => file_commands::ls(args, env),
            Self::Cat => file_commands::cat(args, env),
            Self::Wget => file_commands::wget(args, env),
            Self::Pwd => system_commands::pwd(args, env),
            Self::Whoami => system_commands::whoami(args, env),
            Self::Date => system_commands::date(args, env),
            Self::Uptime => system_commands::uptime(args, env),
            Self::Neofetch => fun_commands::neofetch(args, env),
            Self::Fastfetch => fun_commands::fastfetch(args, env),
            Self::Echo => text_commands::echo(args, env),
            Self::Exit => text_commands::exit(args, env),
            Self::Sudo | Self::Rm | Self::Mv | Self::Cp => security_commands::refuse(self),
        }
    }
}

/// Fixed registry of available commands with dispatch.
///
/// Built once; nothing is registered or removed afterwards.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Builtin>,
}

impl CommandRegistry {
    /// Create the registry holding every builtin.
    pub fn new() -> Self {
        Self {
            commands: Builtin::ALL.iter().map(|b| (b.name(), *b)).collect(),
        }
    }

    /// Look up a command by name. Names are case-insensitive.
    pub fn resolve(&self, name: &str) -> Option<Builtin> {
        self.commands.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Names offered by tab completion, in help order.
    pub fn completion_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        Builtin::ALL
            .into_iter()
            .filter(|b| !b.is_hidden())
            .map(Builtin::name)
    }

    /// Parse and execute a command line.
    ///
    /// The line is split on whitespace; the first word names the command
    /// (case-insensitive) and the rest are passed through untouched.
    pub fn execute(&self, line: &str, env: &Environment<'_>) -> Result<CommandOutput> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(CommandOutput::None);
        };
        let args: Vec<&str> = words.collect();

        match self.resolve(name) {
            Some(cmd) => {
                log::debug!("dispatch {} with {} arg(s)", cmd.name(), args.len());
                cmd.execute(&args, env)
            },
            None => Err(FolioError::UnknownCommand(name.to_string())),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::{FixedClock, Timestamp};

    fn exec(reg: &CommandRegistry, line: &str) -> Result<CommandOutput> {
        let config = SiteConfig::default();
        let clock = FixedClock(Timestamp::from_unix_secs(1_704_067_200));
        let env = Environment {
            config: &config,
            clock: &clock,
        };
        reg.execute(line, &env)
    }

    fn text(output: CommandOutput) -> String {
        match output {
            CommandOutput::Text(s) => s,
            other => panic!("expected text output, got {other:?}"),
        }
    }

    #[test]
    fn every_builtin_is_registered() {
        let reg = CommandRegistry::new();
        for cmd in Builtin::ALL {
            assert_eq!(reg.resolve(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.resolve("LS"), Some(Builtin::Ls));
        assert_eq!(reg.resolve("NeoFetch"), Some(Builtin::Neofetch));
    }

    #[test]
    fn resolve_is_pure() {
        let reg = CommandRegistry::new();
        let first = reg.resolve("cat");
        let second = reg.resolve("cat");
        assert_eq!(first, second);
        assert_eq!(reg.resolve("nope"), None);
        assert_eq!(reg.resolve("nope"), None);
    }

    #[test]
    fn empty_line_produces_nothing() {
        let reg = CommandRegistry::new();
        assert_eq!(exec(&reg, "").unwrap(), CommandOutput::None);
        assert_eq!(exec(&reg, "   \t ").unwrap(), CommandOutput::None);
    }

    #[test]
    fn unknown_command_error_contains_name() {
        let reg = CommandRegistry::new();
        let err = exec(&reg, "foobar --flag").unwrap_err();
        assert!(matches!(err, FolioError::UnknownCommand(ref n) if n == "foobar"));
        assert!(format!("{err}").contains("foobar"));
    }

    #[test]
    fn unknown_command_keeps_typed_case() {
        let reg = CommandRegistry::new();
        let err = exec(&reg, "FooBar").unwrap_err();
        assert!(format!("{err}").contains("FooBar"));
    }

    #[test]
    fn multiple_spaces_between_args() {
        let reg = CommandRegistry::new();
        assert_eq!(text(exec(&reg, "echo   hello    world").unwrap()), "hello world");
    }

    #[test]
    fn tab_separated_args() {
        let reg = CommandRegistry::new();
        assert_eq!(text(exec(&reg, "echo\thello\tworld").unwrap()), "hello world");
    }

    #[test]
    fn uppercase_command_runs() {
        let reg = CommandRegistry::new();
        assert_eq!(text(exec(&reg, "ECHO Hi").unwrap()), "Hi");
    }

    #[test]
    fn clear_signals() {
        let reg = CommandRegistry::new();
        assert_eq!(exec(&reg, "clear").unwrap(), CommandOutput::Clear);
    }

    #[test]
    fn help_lists_visible_commands_by_category() {
        let reg = CommandRegistry::new();
        let out = text(exec(&reg, "help").unwrap());
        assert!(out.starts_with("Available Commands:"));
        assert!(out.contains("[files]"));
        assert!(out.contains("[system]"));
        assert!(out.contains("[utilities]"));
        assert!(out.contains("cat <file>"));
        assert!(out.contains("Ctrl+L"));
        assert!(!out.contains("sudo"));
        assert!(out.ends_with("Try: cat projects.txt, cat .env, wget resume.pdf"));
    }

    #[test]
    fn help_for_one_command() {
        let reg = CommandRegistry::new();
        let out = text(exec(&reg, "help CAT").unwrap());
        assert_eq!(out, "cat (files)\n  Display file contents\n  Usage: cat <file>");
    }

    #[test]
    fn help_for_unknown_or_hidden_topic_fails() {
        let reg = CommandRegistry::new();
        assert!(exec(&reg, "help nothing").is_err());
        assert!(exec(&reg, "help sudo").is_err());
    }

    #[test]
    fn completion_names_skip_hidden() {
        let reg = CommandRegistry::new();
        let names: Vec<&str> = reg.completion_names().collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "help");
        assert!(!names.contains(&"rm"));
        assert!(!names.contains(&"cp"));
    }

    #[test]
    fn usage_defaults_to_name() {
        assert_eq!(Builtin::Pwd.usage(), "pwd");
        assert_eq!(Builtin::Wget.usage(), "wget <file>");
    }

    #[test]
    fn command_output_variants_are_debug() {
        let outputs = [
            CommandOutput::Text("x".into()),
            CommandOutput::None,
            CommandOutput::Clear,
        ];
        for o in &outputs {
            assert!(!format!("{o:?}").is_empty());
        }
    }
}
