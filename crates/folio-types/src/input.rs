//! Platform-agnostic key events for the terminal widget.
//!
//! Front ends map their native keyboard input to [`Key`]. The interpreter
//! never sees raw platform input.

/// A key press the terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character typed into the edit buffer.
    Char(char),
    /// Delete the last character of the edit buffer.
    Backspace,
    /// Step back through command history.
    ArrowUp,
    /// Step forward through command history.
    ArrowDown,
    /// Complete the edit buffer against command and file names.
    Tab,
    /// Submit the edit buffer.
    Enter,
    /// Ctrl+L: clear the screen and the edit buffer.
    ClearScreen,
}
