//! Hostname resolution and reverse DNS lookup.
//!
//! This module provides forward lookups (hostname → IP) for hostname
//! targets and reverse lookups (IP → PTR name) for report enrichment,
//! behind a trait so tests can inject a fake resolver.

use futures::future::BoxFuture;
use futures::FutureExt;
use log::warn;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

/// Forward and reverse DNS lookups.
///
/// Both operations treat failure as absence; a lookup that cannot complete
/// yields `None` rather than an error.
pub trait NameResolver: Send + Sync {
    /// Resolves a hostname to its first IP address.
    fn resolve<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Option<IpAddr>>;

    /// Looks up the PTR name for an IP address.
    fn reverse<'a>(&'a self, ip: IpAddr) -> BoxFuture<'a, Option<String>>;
}

/// [`NameResolver`] backed by hickory's Tokio resolver.
pub struct HickoryResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryResolver {
    /// Creates a resolver with the default upstream configuration and
    /// aggressive timeouts so slow DNS servers cannot stall an analysis.
    pub fn new() -> Self {
        use hickory_resolver::config::{ResolverConfig, ResolverOpts};

        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
        opts.attempts = 2; // fail faster on unresponsive servers
        opts.ndots = 0; // never append search domains

        HickoryResolver {
            resolver: Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts)),
        }
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver for HickoryResolver {
    fn resolve<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Option<IpAddr>> {
        async move {
            match self.resolver.lookup_ip(host).await {
                Ok(response) => response.iter().next(),
                Err(e) => {
                    warn!("failed to resolve {host}: {e}");
                    None
                }
            }
        }
        .boxed()
    }

    fn reverse<'a>(&'a self, ip: IpAddr) -> BoxFuture<'a, Option<String>> {
        async move {
            match self.resolver.reverse_lookup(ip).await {
                Ok(response) => response
                    .iter()
                    .next()
                    .map(|name| name.to_utf8().trim_end_matches('.').to_string()),
                Err(e) => {
                    warn!("reverse DNS lookup failed for {ip}: {e}");
                    None
                }
            }
        }
        .boxed()
    }
}

/// Extracts the registrable domain from a PTR name by taking its last two
/// labels ("dns.google.com" becomes "google.com").
pub fn domain_from_ptr(ptr: &str) -> Option<String> {
    let labels: Vec<&str> = ptr.trim_end_matches('.').split('.').collect();
    if labels.len() < 2 {
        return None;
    }
    Some(labels[labels.len() - 2..].join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_from_ptr() {
        assert_eq!(
            domain_from_ptr("dns.google.com").as_deref(),
            Some("google.com")
        );
        assert_eq!(domain_from_ptr("dns.google.").as_deref(), Some("dns.google"));
        assert_eq!(domain_from_ptr("localhost"), None);
        assert_eq!(
            domain_from_ptr("one.example.co.uk").as_deref(),
            Some("co.uk")
        );
    }
}
