//! Configuration constants.
//!
//! Timeouts, cache sizing, and rate-limit parameters used as defaults
//! throughout the pipeline.

/// Per-provider request timeout in seconds.
/// Each geolocation/registry/weather call is independently bounded by this;
/// a provider that exceeds it is treated as absent, not retried.
pub const PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Tor exit-list fetch timeout in seconds.
/// The list is large and the check is best-effort, so it gets a shorter
/// budget than the structured providers.
pub const TOR_LIST_TIMEOUT_SECS: u64 = 5;

/// DNS query timeout in seconds.
/// Most queries complete in under a second; failing fast keeps reverse
/// lookups from dominating the analysis wall clock.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Maximum number of cached provider responses.
/// The cache is keyed by exact outbound URL and evicts oldest-first once
/// this capacity is reached. It is a latency optimization, not a
/// correctness requirement.
pub const RESPONSE_CACHE_CAPACITY: usize = 1000;

/// Maximum requests per caller within the rate-limit window.
pub const RATE_LIMIT_MAX_REQUESTS: usize = 100;

/// Rate-limit sliding window in seconds.
pub const RATE_LIMIT_WINDOW_SECS: u64 = 3600;

/// Callers exceeding this multiple of the request limit within one window
/// are blocked until process restart.
pub const RATE_LIMIT_BLOCK_MULTIPLIER: usize = 2;

/// Default User-Agent string for outbound provider requests.
pub const DEFAULT_USER_AGENT: &str = concat!("netintel/", env!("CARGO_PKG_VERSION"));
