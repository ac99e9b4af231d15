//! System info commands: pwd, whoami, date, uptime.

use folio_platform::days_between;
use folio_types::error::Result;

use crate::interpreter::{CommandOutput, Environment};

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

pub(crate) fn pwd(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    Ok(CommandOutput::Text(env.config.terminal.cwd.clone()))
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

pub(crate) fn whoami(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    Ok(CommandOutput::Text(env.config.name.clone()))
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

pub(crate) fn date(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let now = env.clock.now()?;
    Ok(CommandOutput::Text(now.to_string()))
}

// ---------------------------------------------------------------------------
// uptime
// ---------------------------------------------------------------------------

/// Whole days since the configured launch date. A clock set before the
/// launch reads as zero.
pub(crate) fn uptime(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let now = env.clock.now()?;
    let days = days_between(env.config.terminal.launch_date, now.date()).max(0);
    Ok(CommandOutput::Text(format!("Portfolio uptime: {days} days")))
}

#[cfg(test)]
mod tests {
    use crate::{CommandOutput, CommandRegistry, Environment};
    use folio_platform::{FixedClock, Timestamp};
    use folio_types::config::SiteConfig;

    /// 2025-03-15 12:30:45 UTC.
    const MID_MARCH_2025: u64 = 1_742_041_845;

    fn exec_at(config: &SiteConfig, unix_secs: u64, line: &str) -> String {
        let clock = FixedClock(Timestamp::from_unix_secs(unix_secs));
        let env = Environment {
            config,
            clock: &clock,
        };
        match CommandRegistry::new().execute(line, &env).unwrap() {
            CommandOutput::Text(s) => s,
            other => panic!("expected text, got {other:?}"),
        }
    }

    fn exec(line: &str) -> String {
        exec_at(&SiteConfig::default(), MID_MARCH_2025, line)
    }

    #[test]
    fn pwd_reports_configured_dir() {
        assert_eq!(exec("pwd"), "/home/devaansh/portfolio");
    }

    #[test]
    fn whoami_reports_name() {
        let mut config = SiteConfig::default();
        config.name = "Ada Lovelace".to_string();
        assert_eq!(exec_at(&config, 0, "whoami"), "Ada Lovelace");
    }

    #[test]
    fn date_formats_injected_instant() {
        assert_eq!(exec("date"), "2025-03-15 12:30:45");
    }

    #[test]
    fn uptime_counts_days_since_launch() {
        // 2024 is a leap year: 366 days to 2025-01-01, then 31 + 28 + 14.
        assert_eq!(exec("uptime"), "Portfolio uptime: 439 days");
    }

    #[test]
    fn uptime_on_launch_day_is_zero() {
        assert_eq!(
            exec_at(&SiteConfig::default(), 1_704_067_200 + 86_399, "uptime"),
            "Portfolio uptime: 0 days"
        );
    }

    #[test]
    fn uptime_before_launch_clamps_to_zero() {
        assert_eq!(
            exec_at(&SiteConfig::default(), 0, "uptime"),
            "Portfolio uptime: 0 days"
        );
    }

    #[test]
    fn uptime_respects_configured_launch() {
        let config = SiteConfig::from_toml("[terminal]\nlaunch_date = \"2025-03-01\"").unwrap();
        assert_eq!(
            exec_at(&config, MID_MARCH_2025, "uptime"),
            "Portfolio uptime: 14 days"
        );
    }
}
