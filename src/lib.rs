//! Command-line samples for the YouTube Data API v3.
//!
//! Shared library for the `yt-search` and `yt-comments` binaries.
//! Provides configuration loading, the interactive query prompt,
//! request construction and execution, and terminal rendering.

pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod youtube;

pub use config::Config;
pub use error::{Error, Result};
