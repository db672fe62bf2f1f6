//! netintel library: multi-source IP intelligence reports
//!
//! This library builds a comprehensive intelligence report for an IP address
//! or hostname by reconciling several geolocation sources with registry
//! (RDAP) data, then layering on reverse DNS, timezone-local time, currency,
//! weather, Tor exit status, and keyword-based usage/threat/performance
//! classification.
//!
//! # Example
//!
//! ```no_run
//! use netintel::{Analyzer, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Analyzer::new(&Config::default())?;
//! let report = analyzer.analyze("8.8.8.8").await?;
//! println!(
//!     "{} is in {}",
//!     report.target,
//!     report.geographic.country_name.as_deref().unwrap_or("an unknown country")
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod analytics;
mod analyzer;
mod app;
pub mod classify;
pub mod config;
mod dns;
mod enrich;
mod error_handling;
mod merge;
pub mod providers;
mod reference;
pub mod report;
pub mod security;

// Re-export public API
pub use analyzer::{Analyzer, BulkEntry};
pub use app::init_logger_with;
pub use config::{Config, LogFormat, LogLevel};
pub use dns::NameResolver;
pub use error_handling::{AnalysisError, InitializationError};
pub use report::IpReport;
