//! Registry (RDAP) client.
//!
//! Queries the rdap.org bootstrap redirector, which forwards to the owning
//! regional registry. Follows the same contract as the geolocation clients
//! but returns a single-source [`RegistryData`] record that does not take
//! part in the multi-source merge order.

use futures::future::BoxFuture;
use futures::FutureExt;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use super::http::{fetch_json, json_str};
use super::{RegistryData, RegistrySource, ResponseCache};

/// Client for RDAP IP network lookups.
pub struct RdapClient {
    client: reqwest::Client,
    cache: Arc<ResponseCache>,
}

impl RdapClient {
    /// Creates a client sharing the given HTTP client and response cache.
    pub fn new(client: reqwest::Client, cache: Arc<ResponseCache>) -> Self {
        RdapClient { client, cache }
    }

    /// Maps an RDAP IP network response to [`RegistryData`].
    pub(crate) fn normalize(payload: &serde_json::Value) -> RegistryData {
        let mut data = RegistryData {
            network_name: json_str(payload, "name"),
            network_handle: json_str(payload, "handle"),
            network_type: json_str(payload, "type"),
            network_country: json_str(payload, "country"),
            network_start_address: json_str(payload, "startAddress"),
            network_end_address: json_str(payload, "endAddress"),
            ..Default::default()
        };

        // The registered country of the allocation is the best available
        // stand-in for the ASN's registration country.
        data.asn_country_code = data.network_country.clone();

        // ARIN publishes originating ASNs as a JSON extension
        if let Some(autnum) = payload
            .get("arin_originas0_originautnums")
            .and_then(|v| v.as_array())
            .and_then(|nums| nums.first())
            .and_then(|n| n.as_i64())
        {
            data.asn = Some(autnum.to_string());
        }

        if let Some(cidrs) = payload.get("cidr0_cidrs").and_then(|v| v.as_array()) {
            if let Some(first) = cidrs.first() {
                let prefix = json_str(first, "v4prefix").or_else(|| json_str(first, "v6prefix"));
                let length = first.get("length").and_then(|l| l.as_i64());
                if let (Some(prefix), Some(length)) = (prefix, length) {
                    data.network_cidr = Some(format!("{prefix}/{length}"));
                }
            }
        }

        // Derive the registry from the WHOIS server name, e.g.
        // "whois.arin.net" → "arin".
        if let Some(port43) = json_str(payload, "port43") {
            data.asn_registry = port43.split('.').nth(1).map(|s| s.to_string());
        }

        data
    }
}

impl RegistrySource for RdapClient {
    fn fetch<'a>(
        &'a self,
        ip: &'a str,
        timeout: Duration,
    ) -> BoxFuture<'a, Option<RegistryData>> {
        async move {
            let url = format!("https://rdap.org/ip/{ip}");
            let payload = fetch_json(&self.client, &self.cache, &url, timeout).await?;
            if payload.get("handle").is_none() && payload.get("name").is_none() {
                debug!("RDAP payload for {ip} has no network record");
                return None;
            }
            Some(Self::normalize(&payload))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_arin_style_payload() {
        let payload = json!({
            "handle": "NET-8-8-8-0-1",
            "name": "LVLT-GOGL-8-8-8",
            "type": "ALLOCATION",
            "country": "US",
            "startAddress": "8.8.8.0",
            "endAddress": "8.8.8.255",
            "cidr0_cidrs": [{"v4prefix": "8.8.8.0", "length": 24}],
            "arin_originas0_originautnums": [15169],
            "port43": "whois.arin.net"
        });

        let data = RdapClient::normalize(&payload);
        assert_eq!(data.network_name.as_deref(), Some("LVLT-GOGL-8-8-8"));
        assert_eq!(data.network_cidr.as_deref(), Some("8.8.8.0/24"));
        assert_eq!(data.asn.as_deref(), Some("15169"));
        assert_eq!(data.asn_registry.as_deref(), Some("arin"));
        assert_eq!(data.asn_country_code.as_deref(), Some("US"));
        assert_eq!(data.network_start_address.as_deref(), Some("8.8.8.0"));
    }

    #[test]
    fn test_normalize_sparse_payload() {
        let payload = json!({"handle": "X", "name": "SOME-NET"});
        let data = RdapClient::normalize(&payload);
        assert_eq!(data.network_name.as_deref(), Some("SOME-NET"));
        assert!(data.asn.is_none());
        assert!(data.network_cidr.is_none());
        assert!(data.asn_registry.is_none());
    }

    #[test]
    fn test_normalize_v6_cidr() {
        let payload = json!({
            "handle": "X",
            "cidr0_cidrs": [{"v6prefix": "2001:4860::", "length": 32}]
        });
        let data = RdapClient::normalize(&payload);
        assert_eq!(data.network_cidr.as_deref(), Some("2001:4860::/32"));
    }
}
