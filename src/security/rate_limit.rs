//! Per-caller sliding-window rate limiting with escalation to blocking.

use log::warn;
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::config::{RATE_LIMIT_BLOCK_MULTIPLIER, RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW_SECS};

/// Outcome of admitting one request from one caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerState {
    /// Under the limit; the request proceeds
    Allowed,
    /// Over the limit within the current window; the request is refused
    RateLimited,
    /// Escalated past the block threshold; refused until process restart
    Blocked,
}

struct GateInner {
    windows: HashMap<String, VecDeque<Instant>>,
    blocked: HashSet<String>,
}

/// Sliding-window request gate keyed by caller identity.
///
/// A caller who keeps hammering while rate-limited accumulates attempts;
/// once those exceed twice the limit the caller is blocked outright.
/// Blocking is permanent for the process lifetime; there is no unblock
/// path short of a restart.
pub struct RequestGate {
    limit: usize,
    window: Duration,
    inner: Mutex<GateInner>,
}

impl RequestGate {
    /// Creates a gate with the default limit and window.
    pub fn new() -> Self {
        Self::with_limits(
            RATE_LIMIT_MAX_REQUESTS,
            Duration::from_secs(RATE_LIMIT_WINDOW_SECS),
        )
    }

    /// Creates a gate with explicit limits, for tests.
    pub fn with_limits(limit: usize, window: Duration) -> Self {
        RequestGate {
            limit,
            window,
            inner: Mutex::new(GateInner {
                windows: HashMap::new(),
                blocked: HashSet::new(),
            }),
        }
    }

    /// Records one request attempt from `caller` and returns its fate.
    pub async fn admit(&self, caller: &str) -> CallerState {
        self.admit_at(caller, Instant::now()).await
    }

    /// [`admit`](Self::admit) pinned to an explicit instant, for tests.
    pub(crate) async fn admit_at(&self, caller: &str, now: Instant) -> CallerState {
        let mut inner = self.inner.lock().await;

        if inner.blocked.contains(caller) {
            return CallerState::Blocked;
        }

        let window = inner.windows.entry(caller.to_string()).or_default();
        while let Some(oldest) = window.front() {
            if now.duration_since(*oldest) >= self.window {
                window.pop_front();
            } else {
                break;
            }
        }

        // Refused attempts are still recorded so sustained hammering
        // escalates to a block instead of staying merely rate-limited.
        window.push_back(now);

        if window.len() > self.limit * RATE_LIMIT_BLOCK_MULTIPLIER {
            warn!("blocking caller {caller} after sustained over-limit traffic");
            inner.windows.remove(caller);
            inner.blocked.insert(caller.to_string());
            return CallerState::Blocked;
        }
        if window.len() > self.limit {
            return CallerState::RateLimited;
        }
        CallerState::Allowed
    }

    /// Whether `caller` has been blocked.
    pub async fn is_blocked(&self, caller: &str) -> bool {
        self.inner.lock().await.blocked.contains(caller)
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new()
    }
}
