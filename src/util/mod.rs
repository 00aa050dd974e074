//! Utility functions
//!
//! Text formatting helpers shared by the section screens.

pub mod format;

pub use format::{ellipsize, format_millis};
