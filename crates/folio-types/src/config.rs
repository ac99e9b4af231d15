//! Site configuration.
//!
//! One `SiteConfig` value drives every piece of rendered content: the
//! virtual files, `whoami`, `neofetch`, and the download target. It is
//! built once (from TOML or the built-in default) and passed by reference
//! to whoever needs it; nothing mutates it afterwards.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Top-level site configuration (`site.toml`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub role: String,
    pub summary: String,
    pub location: String,
    pub github_username: String,
    /// Featured repositories, shown by `cat projects.txt`.
    pub pinned_repos: Vec<PinnedRepo>,
    pub skills: Vec<String>,
    pub links: Links,
    pub fastfetch: FastfetchProfile,
    pub terminal: TerminalConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Devaansh Pathak".to_string(),
            role: "Python Developer".to_string(),
            summary: "Python developer focused on building reliable backends and APIs \
                      with FastAPI/Django. Passionate about writing clean, tested code \
                      and deploying with Docker and CI/CD."
                .to_string(),
            location: "Your City, Country".to_string(),
            github_username: "DevaanshPathak".to_string(),
            pinned_repos: vec![PinnedRepo::Url(
                "https://github.com/DevaanshPathak/TechLang".to_string(),
            )],
            skills: [
                "Python",
                "FastAPI",
                "Django",
                "PostgreSQL",
                "Docker",
                "Git",
                "Linux",
                "PyTest",
                "REST APIs",
                "CI/CD",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            links: Links::default(),
            fastfetch: FastfetchProfile::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded site config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::Config("name must not be empty".to_string()));
        }
        if self.terminal.cwd.is_empty() || !self.terminal.cwd.starts_with('/') {
            return Err(FolioError::Config(format!(
                "terminal.cwd must be an absolute path, got '{}'",
                self.terminal.cwd
            )));
        }
        if self.terminal.max_scrollback == Some(0) {
            return Err(FolioError::Config(
                "terminal.max_scrollback must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A featured repository: either a bare URL or a labelled entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PinnedRepo {
    Url(String),
    Detailed {
        url: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl PinnedRepo {
    pub fn url(&self) -> &str {
        match self {
            Self::Url(url) | Self::Detailed { url, .. } => url,
        }
    }

    /// The label if one is set, otherwise the last path segment of the URL.
    pub fn display_name(&self) -> &str {
        if let Self::Detailed {
            label: Some(label), ..
        } = self
        {
            return label;
        }
        let url = self.url().trim_end_matches('/');
        url.rsplit('/').next().unwrap_or(url)
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Url(_) => None,
            Self::Detailed { description, .. } => description.as_deref(),
        }
    }
}

/// Contact and download links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
    /// Mail link, usually with a `mailto:` scheme.
    pub email: String,
    /// Path or URL of the downloadable resume.
    pub resume: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            github: "https://github.com/DevaanshPathak".to_string(),
            linkedin: "https://www.linkedin.com/in/your-linkedin/".to_string(),
            email: "mailto:devaanshpathak08@gmail.com".to_string(),
            resume: "/resume.pdf".to_string(),
        }
    }
}

impl Links {
    /// The email address without its `mailto:` scheme.
    pub fn email_address(&self) -> &str {
        self.email.strip_prefix("mailto:").unwrap_or(&self.email)
    }
}

/// Values shown by `fastfetch`. Unset fields fall back to built-in text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FastfetchProfile {
    pub os: Option<String>,
    pub host: Option<String>,
    pub kernel: Option<String>,
    pub uptime: Option<String>,
    pub packages: Option<String>,
    pub shell: Option<String>,
    pub resolution: Option<String>,
    pub theme: Option<String>,
    pub icons: Option<String>,
    pub terminal: Option<String>,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub memory: Option<String>,
    pub disk: Option<String>,
    pub localip: Option<String>,
    pub publicip: Option<String>,
    pub battery: Option<String>,
    pub locale: Option<String>,
}

/// Terminal widget settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Directory reported by `pwd`.
    pub cwd: String,
    /// Day the portfolio went live; `uptime` counts days since then.
    pub launch_date: CalendarDate,
    /// Artificial delay before a `wget` download takes effect.
    pub download_delay_ms: u64,
    /// Drop the oldest scrollback lines beyond this count. Unbounded if unset.
    pub max_scrollback: Option<usize>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cwd: "/home/devaansh/portfolio".to_string(),
            launch_date: CalendarDate {
                year: 2024,
                month: 1,
                day: 1,
            },
            download_delay_ms: 500,
            max_scrollback: None,
        }
    }
}

/// A `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl FromStr for CalendarDate {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || FolioError::Config(format!("invalid date '{s}', expected YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(bad());
        }
        Ok(Self { year, month, day })
    }
}

/// Gregorian leap year.
pub fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
