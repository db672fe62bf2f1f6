//! Tor exit-node list client.
//!
//! Downloads the Tor Project's published exit-address list and scans it for
//! the target address. The list is line oriented; exit addresses appear as
//! "ExitAddress <ip> <timestamp>" records.

use futures::future::BoxFuture;
use futures::FutureExt;
use log::debug;
use std::time::Duration;

use super::http::fetch_text;
use super::TorListSource;

const EXIT_LIST_URL: &str = "https://check.torproject.org/exit-addresses";

/// Client for the Tor Project exit-address list.
pub struct TorExitListClient {
    client: reqwest::Client,
}

impl TorExitListClient {
    /// Creates a client sharing the given HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        TorExitListClient { client }
    }
}

/// Scans the exit-address list for `ip`.
pub(crate) fn list_contains(list: &str, ip: &str) -> bool {
    list.lines().any(|line| {
        let mut parts = line.split_whitespace();
        parts.next() == Some("ExitAddress") && parts.next() == Some(ip)
    })
}

impl TorListSource for TorExitListClient {
    fn is_exit_node<'a>(&'a self, ip: &'a str, timeout: Duration) -> BoxFuture<'a, bool> {
        async move {
            match fetch_text(&self.client, EXIT_LIST_URL, timeout).await {
                Some(list) => list_contains(&list, ip),
                None => {
                    debug!("Tor exit list unavailable, treating {ip} as non-exit");
                    false
                }
            }
        }
        .boxed()
    }
}
