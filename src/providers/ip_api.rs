//! ip-api.com geolocation client.
//!
//! The most complete of the three geolocation sources and the designated
//! primary for the mobile/proxy/hosting flags. Its payload signals failure
//! in-band via a `status` field rather than an HTTP error code.

use futures::future::BoxFuture;
use futures::FutureExt;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use super::http::{fetch_json, json_bool, json_f64, json_i64, json_str};
use super::{GeoProvider, ProviderResult, ResponseCache, SourceId};

const FIELDS: &str = "status,continent,continentCode,country,countryCode,region,regionName,\
                      city,district,zip,lat,lon,timezone,offset,currency,isp,org,as,asname,\
                      mobile,proxy,hosting,query";

/// Client for ip-api.com.
pub struct IpApiClient {
    client: reqwest::Client,
    cache: Arc<ResponseCache>,
}

impl IpApiClient {
    /// Creates a client sharing the given HTTP client and response cache.
    pub fn new(client: reqwest::Client, cache: Arc<ResponseCache>) -> Self {
        IpApiClient { client, cache }
    }

    /// Maps the provider's native field names to canonical ones.
    /// Returns `None` when the payload reports an unsuccessful lookup.
    pub(crate) fn normalize(payload: &serde_json::Value) -> Option<ProviderResult> {
        if json_str(payload, "status").as_deref() != Some("success") {
            return None;
        }
        let mut result = ProviderResult::new(SourceId::IpApiCom);
        result.country_code = json_str(payload, "countryCode");
        result.country_name = json_str(payload, "country");
        result.continent = json_str(payload, "continent");
        result.continent_code = json_str(payload, "continentCode");
        result.region = json_str(payload, "regionName");
        result.city = json_str(payload, "city");
        result.district = json_str(payload, "district");
        result.postal_code = json_str(payload, "zip");
        result.latitude = json_f64(payload, "lat");
        result.longitude = json_f64(payload, "lon");
        result.timezone = json_str(payload, "timezone");
        result.utc_offset = json_i64(payload, "offset");
        result.isp = json_str(payload, "isp");
        result.organization = json_str(payload, "org");
        result.asn = json_str(payload, "as");
        result.is_mobile = json_bool(payload, "mobile");
        result.is_proxy = json_bool(payload, "proxy");
        result.is_hosting = json_bool(payload, "hosting");
        result.raw = payload.clone();
        Some(result)
    }
}

impl GeoProvider for IpApiClient {
    fn source(&self) -> SourceId {
        SourceId::IpApiCom
    }

    fn fetch<'a>(
        &'a self,
        target: &'a str,
        timeout: Duration,
    ) -> BoxFuture<'a, Option<ProviderResult>> {
        async move {
            let url = format!("http://ip-api.com/json/{target}?fields={FIELDS}");
            let payload = fetch_json(&self.client, &self.cache, &url, timeout).await?;
            let result = Self::normalize(&payload);
            if result.is_none() {
                debug!("ip-api.com reported failure for {target}");
            }
            result
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_success_payload() {
        let payload = json!({
            "status": "success",
            "continent": "North America",
            "continentCode": "NA",
            "country": "United States",
            "countryCode": "US",
            "regionName": "Virginia",
            "city": "Ashburn",
            "zip": "20149",
            "lat": 39.03,
            "lon": -77.5,
            "timezone": "America/New_York",
            "offset": -14400,
            "isp": "Google LLC",
            "org": "Google Public DNS",
            "as": "AS15169 Google LLC",
            "mobile": false,
            "proxy": false,
            "hosting": true
        });

        let result = IpApiClient::normalize(&payload).expect("success payload");
        assert_eq!(result.source, SourceId::IpApiCom);
        assert_eq!(result.country_code.as_deref(), Some("US"));
        assert_eq!(result.region.as_deref(), Some("Virginia"));
        assert_eq!(result.postal_code.as_deref(), Some("20149"));
        assert_eq!(result.utc_offset, Some(-14400));
        assert_eq!(result.asn.as_deref(), Some("AS15169 Google LLC"));
        assert_eq!(result.is_hosting, Some(true));
        assert_eq!(result.is_mobile, Some(false));
        // district not in payload: stays absent, not defaulted
        assert!(result.district.is_none());
        // the native payload rides along untouched
        assert_eq!(result.raw, payload);
    }

    #[test]
    fn test_normalize_rejects_failed_status() {
        let payload = json!({"status": "fail", "message": "private range"});
        assert!(IpApiClient::normalize(&payload).is_none());
    }

    #[test]
    fn test_normalize_rejects_missing_status() {
        let payload = json!({"country": "US"});
        assert!(IpApiClient::normalize(&payload).is_none());
    }
}
