//! folio terminal entry point.
//!
//! Runs the portfolio terminal in the current TTY. Pass a site config path
//! as the first argument (or set FOLIO_CONFIG); without one the built-in
//! profile is used. Ctrl+C or Ctrl+D quits. Logs go to stderr and default
//! to `warn` so they stay off the raw-mode screen; raise them with
//! `RUST_LOG=info` and redirect stderr (`2>folio.log`).

mod input;
mod render;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use folio_platform::{DesktopClock, DesktopDownloads};
use folio_terminal::{Outcome, Terminal};
use folio_types::config::SiteConfig;
use input::InputResult;

/// Log filter when `RUST_LOG` is unset. stderr shares the raw-mode TTY.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let config = load_config()?;
    log::info!("Starting folio terminal for {}", config.name);
    let mut terminal = Terminal::new(config, Box::new(DesktopClock), Box::new(DesktopDownloads));

    enable_raw_mode()?;
    let mut out = io::stdout();
    let result = run(&mut out, &mut terminal);

    // Restore the TTY before reporting any error.
    disable_raw_mode()?;
    writeln!(out)?;
    log::info!("Session ended after {} command(s)", terminal.history().len());
    result
}

/// Resolve the site config from CLI arg, FOLIO_CONFIG env var, or the
/// built-in default.
fn load_config() -> Result<SiteConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok());
    match path {
        Some(path) => {
            let config = SiteConfig::from_file(Path::new(&path))
                .with_context(|| format!("failed to load site config {path}"))?;
            log::info!("Loaded site config: {path}");
            Ok(config)
        },
        None => {
            log::warn!("No site config given (argument or FOLIO_CONFIG), using built-in profile");
            Ok(SiteConfig::default())
        },
    }
}

fn run<W: Write>(out: &mut W, terminal: &mut Terminal) -> Result<()> {
    render::lines(out, terminal.scrollback().iter())?;
    render::prompt(out, terminal.buffer())?;

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        let key = match input::translate(&key_event) {
            InputResult::Quit => return Ok(()),
            InputResult::Ignore => continue,
            InputResult::Key(key) => key,
        };
        match terminal.handle_key(key) {
            Outcome::Unchanged => continue,
            Outcome::BufferChanged => {},
            Outcome::Appended(lines) => render::lines(out, lines.iter())?,
            Outcome::Cleared => render::clear_screen(out)?,
        }
        render::prompt(out, terminal.buffer())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filter_hides_info() {
        let env = env_logger::Env::new()
            .filter("FOLIO_TEST_UNSET_FILTER")
            .default_filter_or(DEFAULT_LOG_FILTER);
        let logger = env_logger::Builder::from_env(env).build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }
}
