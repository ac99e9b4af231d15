//! Utility commands: help, echo, exit.

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Builtin, CommandOutput, Environment};

/// Help sections, in display order.
const CATEGORIES: [&str; 3] = ["files", "system", "utilities"];

/// Keyboard shortcuts listed at the end of `help`.
const SHORTCUTS: [(&str, &str); 3] = [
    ("Tab", "Auto-complete commands and files"),
    ("Up/Down", "Command history"),
    ("Ctrl+L", "Clear screen"),
];

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

pub(crate) fn help(args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
    if let Some(&topic) = args.first() {
        let wanted = topic.to_ascii_lowercase();
        return match Builtin::ALL.into_iter().find(|b| b.name() == wanted) {
            Some(cmd) if !cmd.is_hidden() => Ok(CommandOutput::Text(format!(
                "{} ({})\n  {}\n  Usage: {}",
                cmd.name(),
                cmd.category(),
                cmd.description(),
                cmd.usage()
            ))),
            _ => Err(FolioError::Command(format!(
                "help: no help topic for '{topic}'"
            ))),
        };
    }

    let mut out = String::from("Available Commands:\n");
    for category in CATEGORIES {
        out.push_str(&format!("\n  [{category}]\n"));
        for cmd in Builtin::ALL.iter().filter(|b| b.category() == category) {
            out.push_str(&format!("    {:20} {}\n", cmd.usage(), cmd.description()));
        }
    }
    out.push_str("\n  [shortcuts]\n");
    for (key, action) in SHORTCUTS {
        out.push_str(&format!("    {key:20} {action}\n"));
    }
    out.push_str("\nTry: cat projects.txt, cat .env, wget resume.pdf");
    Ok(CommandOutput::Text(out))
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

pub(crate) fn echo(args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
    Ok(CommandOutput::Text(args.join(" ")))
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

/// The page cannot be closed from inside; say goodbye instead.
pub(crate) fn exit(_args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
    Ok(CommandOutput::Text("Thanks for visiting! 👋".to_string()))
}
