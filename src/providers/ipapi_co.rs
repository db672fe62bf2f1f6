//! ipapi.co geolocation client.
//!
//! Signals failure in-band with an `error` key in an otherwise 200 response.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use std::time::Duration;

use super::http::{fetch_json, json_f64, json_str};
use super::{GeoProvider, ProviderResult, ResponseCache, SourceId};

/// Client for ipapi.co.
pub struct IpapiCoClient {
    client: reqwest::Client,
    cache: Arc<ResponseCache>,
}

impl IpapiCoClient {
    /// Creates a client sharing the given HTTP client and response cache.
    pub fn new(client: reqwest::Client, cache: Arc<ResponseCache>) -> Self {
        IpapiCoClient { client, cache }
    }

    /// Maps the provider's native field names to canonical ones.
    pub(crate) fn normalize(payload: &serde_json::Value) -> Option<ProviderResult> {
        if payload.get("error").is_some() {
            return None;
        }
        let mut result = ProviderResult::new(SourceId::IpapiCo);
        result.country_code = json_str(payload, "country_code");
        result.country_name = json_str(payload, "country_name");
        result.continent_code = json_str(payload, "continent_code");
        result.region = json_str(payload, "region");
        result.city = json_str(payload, "city");
        result.postal_code = json_str(payload, "postal");
        result.latitude = json_f64(payload, "latitude");
        result.longitude = json_f64(payload, "longitude");
        result.timezone = json_str(payload, "timezone");
        result.organization = json_str(payload, "org");
        result.asn = json_str(payload, "asn");
        result.raw = payload.clone();
        Some(result)
    }
}

impl GeoProvider for IpapiCoClient {
    fn source(&self) -> SourceId {
        SourceId::IpapiCo
    }

    fn fetch<'a>(
        &'a self,
        target: &'a str,
        timeout: Duration,
    ) -> BoxFuture<'a, Option<ProviderResult>> {
        async move {
            let url = format!("https://ipapi.co/{target}/json/");
            let payload = fetch_json(&self.client, &self.cache, &url, timeout).await?;
            Self::normalize(&payload)
        }
        .boxed()
    }
}
