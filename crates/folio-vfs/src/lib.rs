//! Virtual file table.
//!
//! The portfolio terminal exposes a handful of read-only files whose
//! contents are computed from the site configuration at read time. There
//! are no directories, no writes, and no caching: every read re-renders.

mod files;

pub use files::{VirtualFile, read};
