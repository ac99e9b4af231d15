//! Command interpreter and terminal session.
//!
//! The interpreter is a fixed dispatch table: every command is a variant of
//! [`Builtin`], resolved by name through the [`CommandRegistry`]. A
//! [`Terminal`] owns the scrollback, the command history, and the edit
//! buffer, and turns key presses into registry calls.

mod file_commands;
mod fun_commands;
mod interpreter;
mod scrollback;
mod security_commands;
mod session;
mod system_commands;
mod text_commands;

/// A built-in command.
pub use interpreter::Builtin;
/// Output produced by a command (text, signals).
pub use interpreter::CommandOutput;
/// Fixed registry of commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only environment passed to every command.
pub use interpreter::Environment;
/// Scrollback line types.
pub use scrollback::{Line, LineKind, Scrollback};
/// Interactive session: history, completion, and edit buffer.
pub use session::{InputState, Outcome, PROMPT, Terminal};
