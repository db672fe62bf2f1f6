//! ipinfo.io geolocation client (free tier).
//!
//! Reports non-routable targets with a `bogon` key. Coordinates arrive as a
//! single "lat,lon" string, and the `org` field is a compound
//! "AS15169 Google LLC" value that doubles as the ASN.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use std::time::Duration;

use super::http::{fetch_json, json_str};
use super::{GeoProvider, ProviderResult, ResponseCache, SourceId};

/// Client for ipinfo.io.
pub struct IpinfoClient {
    client: reqwest::Client,
    cache: Arc<ResponseCache>,
}

impl IpinfoClient {
    /// Creates a client sharing the given HTTP client and response cache.
    pub fn new(client: reqwest::Client, cache: Arc<ResponseCache>) -> Self {
        IpinfoClient { client, cache }
    }

    /// Maps the provider's native field names to canonical ones.
    pub(crate) fn normalize(payload: &serde_json::Value) -> Option<ProviderResult> {
        if payload.get("bogon").is_some() {
            return None;
        }
        let mut result = ProviderResult::new(SourceId::IpinfoIo);
        result.country_code = json_str(payload, "country");
        result.region = json_str(payload, "region");
        result.city = json_str(payload, "city");
        result.postal_code = json_str(payload, "postal");
        result.timezone = json_str(payload, "timezone");
        if let Some((lat, lon)) = json_str(payload, "loc").as_deref().and_then(parse_loc) {
            result.latitude = Some(lat);
            result.longitude = Some(lon);
        }
        if let Some(org) = json_str(payload, "org") {
            // "AS15169 Google LLC" carries both the ASN and the org name
            if org.starts_with("AS") {
                result.asn = Some(org.clone());
            }
            result.organization = Some(org);
        }
        result.raw = payload.clone();
        Some(result)
    }
}

/// Parses an "lat,lon" coordinate pair.
fn parse_loc(loc: &str) -> Option<(f64, f64)> {
    let (lat, lon) = loc.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}

impl GeoProvider for IpinfoClient {
    fn source(&self) -> SourceId {
        SourceId::IpinfoIo
    }

    fn fetch<'a>(
        &'a self,
        target: &'a str,
        timeout: Duration,
    ) -> BoxFuture<'a, Option<ProviderResult>> {
        async move {
            let url = format!("https://ipinfo.io/{target}/json");
            let payload = fetch_json(&self.client, &self.cache, &url, timeout).await?;
            Self::normalize(&payload)
        }
        .boxed()
    }
}
