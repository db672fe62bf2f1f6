//! Concurrent fan-out over the registered geolocation sources.

use futures::future::join_all;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

use super::{GeoProvider, ProviderResult};

/// Queries every registered geolocation source concurrently.
///
/// Registration order is fixed at construction and determines downstream
/// merge precedence, so results are always returned in that order no matter
/// which source answers first.
pub struct SourceAggregator {
    providers: Vec<Arc<dyn GeoProvider>>,
}

impl SourceAggregator {
    /// Creates an aggregator over the given sources, in precedence order.
    pub fn new(providers: Vec<Arc<dyn GeoProvider>>) -> Self {
        SourceAggregator { providers }
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no sources are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Fans one query out to all sources concurrently and collects the
    /// successful answers, preserving registration order.
    ///
    /// Failed sources are dropped silently; zero successes yields an empty
    /// vector, not an error. Wall-clock time is bounded by the slowest
    /// single source, not the sum.
    pub async fn query_all(&self, target: &str, timeout: Duration) -> Vec<ProviderResult> {
        let futures = self
            .providers
            .iter()
            .map(|provider| provider.fetch(target, timeout));
        let answers = join_all(futures).await;

        let results: Vec<ProviderResult> = answers.into_iter().flatten().collect();
        if results.is_empty() {
            info!("no geolocation source answered for {target}");
        } else {
            debug!(
                "{}/{} geolocation sources answered for {target}",
                results.len(),
                self.providers.len()
            );
        }
        results
    }
}
