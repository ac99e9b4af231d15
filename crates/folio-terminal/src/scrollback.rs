//! The ordered log of terminal lines.

use std::collections::VecDeque;

/// What produced a scrollback line; decides how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Echo of a submitted command, prompt included.
    Command,
    Output,
    Error,
}

/// One immutable line of scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    text: String,
}

impl Line {
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Command,
            text: text.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only line log. Lines are never edited; the only removals are
/// `clear` and, when bounded, dropping the oldest lines.
#[derive(Debug, Clone, Default)]
pub struct Scrollback {
    lines: VecDeque<Line>,
    limit: Option<usize>,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scrollback that keeps at most `limit` lines.
    pub fn bounded(limit: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            limit: Some(limit.max(1)),
        }
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push_back(line);
        if let Some(limit) = self.limit {
            while self.lines.len() > limit {
                self.lines.pop_front();
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Line> + '_ {
        self.lines.iter()
    }
}
