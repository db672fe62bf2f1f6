//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and pipeline configuration.

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_USER_AGENT, PROVIDER_TIMEOUT_SECS, RESPONSE_CACHE_CAPACITY, TOR_LIST_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Pipeline configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```
/// use netintel::Config;
///
/// let config = Config {
///     provider_timeout_secs: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-provider request timeout in seconds
    pub provider_timeout_secs: u64,

    /// Tor exit-list fetch timeout in seconds
    pub tor_timeout_secs: u64,

    /// OpenWeather API key; weather lookups are skipped when unset
    pub weather_api_key: Option<String>,

    /// Maximum number of cached provider responses
    pub cache_capacity: usize,

    /// HTTP User-Agent header value for outbound requests
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_timeout_secs: PROVIDER_TIMEOUT_SECS,
            tor_timeout_secs: TOR_LIST_TIMEOUT_SECS,
            weather_api_key: std::env::var("OPENWEATHER_API_KEY").ok(),
            cache_capacity: RESPONSE_CACHE_CAPACITY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.provider_timeout_secs, 10);
        assert_eq!(config.tor_timeout_secs, 5);
        assert_eq!(config.cache_capacity, 1000);
        assert!(config.user_agent.starts_with("netintel/"));
    }

    #[test]
    fn test_log_format_debug() {
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }
}
