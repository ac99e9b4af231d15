//! Commands that pretend to exist: sudo, rm, mv, cp.
//!
//! They resolve like any other builtin but always fail with a refusal,
//! so a visitor poking at the "system" gets a friendly answer instead of
//! `Command not found`.

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Builtin, CommandOutput};

pub(crate) fn refuse(cmd: Builtin) -> Result<CommandOutput> {
    let message = match cmd {
        Builtin::Sudo => "Nice try! 😏 This is a portfolio terminal, not a real system.".to_string(),
        Builtin::Rm => "rm: Operation not permitted. This portfolio is read-only!".to_string(),
        other => format!(
            "{}: Permission denied. Portfolio files are protected.",
            other.name()
        ),
    };
    log::debug!("refused {}", cmd.name());
    Err(FolioError::Refused(message))
}
