//! Interactive terminal session: dispatcher plus input state machine.
//!
//! A `Terminal` owns everything that changes while a visitor types: the
//! edit buffer, the history log and its cursor, and the scrollback. Every
//! operation runs to completion on the caller's thread; the only thing
//! that escapes is the fire-and-forget download handed to the
//! `DownloadTrigger`.

use folio_platform::{Clock, DownloadTrigger};
use folio_types::config::SiteConfig;
use folio_types::input::Key;
use folio_vfs::VirtualFile;

use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::scrollback::{Line, Scrollback};

/// Prompt printed before echoed commands.
pub const PROMPT: &str = "$";

/// Where the history cursor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// Not browsing history.
    Idle,
    /// Showing the history entry at this index (0 is the oldest).
    BrowsingHistory(usize),
}

/// What an operation did to the visible state, so a front end knows what
/// to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Unchanged,
    /// Only the edit buffer changed.
    BufferChanged,
    /// These lines were appended to the scrollback. A bounded scrollback
    /// may already have dropped some of them; they are all still reported.
    Appended(Vec<Line>),
    /// The scrollback was emptied.
    Cleared,
}

/// One visitor's terminal.
pub struct Terminal {
    config: SiteConfig,
    registry: CommandRegistry,
    scrollback: Scrollback,
    history: Vec<String>,
    cursor: Option<usize>,
    buffer: String,
    clock: Box<dyn Clock>,
    downloads: Box<dyn DownloadTrigger>,
}

impl Terminal {
    /// Open a terminal showing the welcome banner.
    pub fn new(
        config: SiteConfig,
        clock: Box<dyn Clock>,
        downloads: Box<dyn DownloadTrigger>,
    ) -> Self {
        let mut scrollback = match config.terminal.max_scrollback {
            Some(limit) => Scrollback::bounded(limit),
            None => Scrollback::new(),
        };
        scrollback.push(Line::output(format!(
            "Welcome to {}'s Portfolio Terminal",
            config.name
        )));
        scrollback.push(Line::output("Type 'help' for available commands"));
        Self {
            config,
            registry: CommandRegistry::new(),
            scrollback,
            history: Vec::new(),
            cursor: None,
            buffer: String::new(),
            clock,
            downloads,
        }
    }

    /// Run one input line.
    ///
    /// Blank input is ignored entirely. Anything else is recorded in the
    /// history, echoed, and followed by the command's output or exactly
    /// one error line. `clear` empties the scrollback instead of echoing.
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let line = raw.trim();
        if line.is_empty() {
            return Outcome::Unchanged;
        }
        self.history.push(line.to_string());
        self.cursor = None;

        let env = Environment {
            config: &self.config,
            clock: self.clock.as_ref(),
        };
        let result = self.registry.execute(line, &env);

        let echo = Line::command(format!("{PROMPT} {line}"));
        match result {
            Ok(CommandOutput::Clear) => {
                self.scrollback.clear();
                Outcome::Cleared
            },
            Ok(CommandOutput::None) => self.append([echo]),
            Ok(CommandOutput::Text(text)) => {
                let lines = std::iter::once(echo).chain(text.split('\n').map(Line::output));
                self.append(lines)
            },
            Ok(CommandOutput::Download { text, request }) => {
                log::info!(
                    "Scheduling download of {} as {} in {:?}",
                    request.href,
                    request.file_name,
                    request.delay
                );
                self.downloads.trigger(request);
                let lines = std::iter::once(echo).chain(text.split('\n').map(Line::output));
                self.append(lines)
            },
            Err(e) => self.append([echo, Line::error(e.to_string())]),
        }
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: Key) -> Outcome {
        match key {
            Key::Char(c) => {
                self.buffer.push(c);
                Outcome::BufferChanged
            },
            Key::Backspace => match self.buffer.pop() {
                Some(_) => Outcome::BufferChanged,
                None => Outcome::Unchanged,
            },
            Key::ArrowUp => self.history_older(),
            Key::ArrowDown => self.history_newer(),
            Key::Tab => self.complete(),
            Key::Enter => {
                let line = std::mem::take(&mut self.buffer);
                match self.submit(&line) {
                    Outcome::Unchanged if !line.is_empty() => Outcome::BufferChanged,
                    outcome => outcome,
                }
            },
            Key::ClearScreen => {
                self.scrollback.clear();
                self.buffer.clear();
                Outcome::Cleared
            },
        }
    }

    // -- History --

    fn history_older(&mut self) -> Outcome {
        let next = match self.cursor {
            _ if self.history.is_empty() => return Outcome::Unchanged,
            None => self.history.len() - 1,
            Some(0) => return Outcome::Unchanged,
            Some(i) => i - 1,
        };
        self.show_history(next)
    }

    fn history_newer(&mut self) -> Outcome {
        let Some(i) = self.cursor else {
            return Outcome::Unchanged;
        };
        if i + 1 < self.history.len() {
            self.show_history(i + 1)
        } else {
            self.cursor = None;
            self.buffer.clear();
            Outcome::BufferChanged
        }
    }

    fn show_history(&mut self, index: usize) -> Outcome {
        self.cursor = Some(index);
        self.buffer.clone_from(&self.history[index]);
        Outcome::BufferChanged
    }

    // -- Completion --

    /// Commands and file names starting with the lowercased buffer.
    pub fn completions(&self) -> Vec<&'static str> {
        let prefix = self.buffer.to_lowercase();
        self.registry
            .completion_names()
            .chain(VirtualFile::ALL.iter().map(|f| f.name()))
            .filter(|name| name.starts_with(&prefix))
            .collect()
    }

    fn complete(&mut self) -> Outcome {
        match self.completions().as_slice() {
            [] => Outcome::Unchanged,
            [only] => {
                self.buffer = (*only).to_string();
                Outcome::BufferChanged
            },
            many => {
                let listing = many.join("  ");
                let echo = Line::command(format!("{PROMPT} {}", self.buffer));
                self.append([echo, Line::output(listing)])
            },
        }
    }

    fn append(&mut self, lines: impl IntoIterator<Item = Line>) -> Outcome {
        let lines: Vec<Line> = lines.into_iter().collect();
        for line in &lines {
            self.scrollback.push(line.clone());
        }
        Outcome::Appended(lines)
    }

    // -- Accessors --

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The not-yet-submitted input line.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn input_state(&self) -> InputState {
        match self.cursor {
            None => InputState::Idle,
            Some(i) => InputState::BrowsingHistory(i),
        }
    }
}
