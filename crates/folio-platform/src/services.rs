//! Platform service traits and desktop implementation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use folio_types::config::CalendarDate;
use folio_types::error::Result;

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Timestamp {
    /// Break seconds since the Unix epoch into a UTC timestamp.
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let time_of_day = secs % 86_400;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u32,
            minute: ((time_of_day % 3600) / 60) as u32,
            second: (time_of_day % 60) as u32,
        }
    }

    /// The calendar date part of this timestamp.
    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over the wall clock.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> Result<Timestamp>;
}

// ---------------------------------------------------------------------------
// Download service
// ---------------------------------------------------------------------------

/// A request to save a hosted resource under a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Path or URL of the resource.
    pub href: String,
    /// Name the visitor's copy is saved as.
    pub file_name: String,
    /// Artificial delay before the download starts.
    pub delay: Duration,
}

/// The hosting environment's file-save mechanism.
///
/// Fire-and-forget: nothing flows back into the interpreter.
pub trait DownloadTrigger {
    fn trigger(&self, request: DownloadRequest);
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Clock backed by `std::time::SystemTime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopClock;

impl Clock for DesktopClock {
    fn now(&self) -> Result<Timestamp> {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Ok(Timestamp::from_unix_secs(secs))
    }
}

/// Download trigger for the desktop front end.
///
/// There is no browser to hand the file to, so the delayed download is
/// only announced in the log from a detached thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopDownloads;

impl DownloadTrigger for DesktopDownloads {
    fn trigger(&self, request: DownloadRequest) {
        std::thread::spawn(move || {
            std::thread::sleep(request.delay);
            log::info!("Download ready: {} -> {}", request.href, request.file_name);
        });
    }
}

// ---------------------------------------------------------------------------
// Deterministic implementations
// ---------------------------------------------------------------------------

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Result<Timestamp> {
        Ok(self.0)
    }
}

/// Download trigger that records requests instead of acting on them.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the terminal.
#[derive(Debug, Default, Clone)]
pub struct RecordingDownloads {
    requests: Rc<RefCell<Vec<DownloadRequest>>>,
}

impl RecordingDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<DownloadRequest> {
        self.requests.borrow().clone()
    }
}

impl DownloadTrigger for RecordingDownloads {
    fn trigger(&self, request: DownloadRequest) {
        self.requests.borrow_mut().push(request);
    }
}

// ---------------------------------------------------------------------------
// Date helpers
// ---------------------------------------------------------------------------

/// Whole days from `from` to `to` (negative if `to` is earlier).
pub fn days_between(from: CalendarDate, to: CalendarDate) -> i64 {
    days_from_civil(to) - days_from_civil(from)
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(date: CalendarDate) -> i64 {
    let m = date.month as i64;
    let y = date.year as i64 - i64::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + date.day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = (yoe + era * 400 + i64::from(month <= 2)) as i32;
    (year, month, day)
}
