//! Drawing scrollback lines and the prompt with crossterm.
//!
//! The screen is append-only like the scrollback: new lines are printed
//! over the prompt row, then the prompt is redrawn below them.

use std::io::{self, Write};

use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use folio_terminal::{Line, LineKind, PROMPT};

fn color_for(kind: LineKind) -> Option<Color> {
    match kind {
        LineKind::Command => Some(Color::Green),
        LineKind::Error => Some(Color::Red),
        LineKind::Output => None,
    }
}

/// Print lines in place of the prompt row.
pub fn lines<'a, W: Write>(out: &mut W, lines: impl Iterator<Item = &'a Line>) -> io::Result<()> {
    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for line in lines {
        match color_for(line.kind()) {
            Some(color) => queue!(
                out,
                SetForegroundColor(color),
                Print(line.text()),
                ResetColor
            )?,
            None => queue!(out, Print(line.text()))?,
        }
        // Raw mode: no implicit carriage return.
        queue!(out, Print("\r\n"))?;
    }
    Ok(())
}

/// Redraw the prompt row with the current edit buffer and flush.
pub fn prompt<W: Write>(out: &mut W, buffer: &str) -> io::Result<()> {
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        SetForegroundColor(Color::Green),
        Print(PROMPT),
        ResetColor,
        Print(" "),
        Print(buffer)
    )?;
    out.flush()
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(items: &[Line]) -> String {
        let mut buf = Vec::new();
        lines(&mut buf, items.iter()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn every_line_ends_with_crlf() {
        let out = rendered(&[Line::output("one"), Line::output("two")]);
        assert!(out.contains("one\r\n"));
        assert!(out.ends_with("two\r\n"));
    }

    fn ansi_foreground(color: Color) -> String {
        let mut buf = Vec::new();
        queue!(buf, SetForegroundColor(color)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn commands_and_errors_are_colored() {
        let green = ansi_foreground(Color::Green);
        let red = ansi_foreground(Color::Red);
        assert!(rendered(&[Line::command("$ ls")]).contains(&format!("{green}$ ls")));
        assert!(rendered(&[Line::error("boom")]).contains(&format!("{red}boom")));
        let plain = rendered(&[Line::output("plain")]);
        assert!(!plain.contains(&green) && !plain.contains(&red));
    }

    #[test]
    fn prompt_shows_buffer() {
        let mut buf = Vec::new();
        prompt(&mut buf, "cat about").unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains(PROMPT));
        assert!(out.ends_with(" cat about"));
    }
}
