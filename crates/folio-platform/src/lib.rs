//! Platform services for folio.
//!
//! The interpreter reads time and triggers downloads only through the
//! traits defined here, so tests can substitute a fixed clock and a
//! recording download sink.

mod services;

pub use services::{
    Clock, DesktopClock, DesktopDownloads, DownloadRequest, DownloadTrigger, FixedClock,
    RecordingDownloads, Timestamp, days_between,
};
