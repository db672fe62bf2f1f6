//! Usage analytics events.
//!
//! The pipeline reports events through a sink trait so deployments can
//! forward them anywhere; the built-in sinks log or discard.

use log::info;

/// Receiver for usage events.
pub trait EventSink: Send + Sync {
    /// Records one visit from a caller.
    fn track_visit(&self, caller: &str);

    /// Records one analysis request.
    fn track_scan(&self, target: &str, scan_type: &str, session_id: Option<&str>);
}

/// Sink that writes events to the application log.
pub struct LogSink;

impl EventSink for LogSink {
    fn track_visit(&self, caller: &str) {
        info!("visit from {caller}");
    }

    fn track_scan(&self, target: &str, scan_type: &str, session_id: Option<&str>) {
        match session_id {
            Some(session) => info!("{scan_type} scan of {target} (session {session})"),
            None => info!("{scan_type} scan of {target}"),
        }
    }
}

/// Sink that discards every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn track_visit(&self, _caller: &str) {}

    fn track_scan(&self, _target: &str, _scan_type: &str, _session_id: Option<&str>) {}
}
