//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, cache sizing, rate limits)
//! - CLI option types and the pipeline `Config`

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
