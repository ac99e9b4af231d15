//! Foundation types for folio.
//!
//! This crate contains the types shared by every folio crate: the error
//! enum, the key events the terminal understands, and the site
//! configuration that drives all rendered content.

pub mod config;
pub mod error;
pub mod input;
