//! Provider clients: one module per external data source.
//!
//! Every client follows the same contract: build one request to one fixed
//! endpoint, apply a bounded timeout, and collapse any transport failure,
//! non-success status, or malformed payload to an explicit absence. Callers
//! never learn *why* a source was unavailable, only that it was.
//!
//! Each client also owns the normalization from its provider's native field
//! names to the canonical [`ProviderResult`] fields, so downstream stages
//! only ever see canonical names.

mod aggregate;
mod cache;
mod http;
mod ip_api;
mod ipapi_co;
mod ipinfo;
mod registry;
mod tor;
mod weather;

pub use aggregate::SourceAggregator;
pub use cache::ResponseCache;
pub use ip_api::IpApiClient;
pub use ipapi_co::IpapiCoClient;
pub use ipinfo::IpinfoClient;
pub use registry::RdapClient;
pub use tor::TorExitListClient;
pub use weather::OpenWeatherClient;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identity of one geolocation source.
///
/// The declaration order here is also the fixed registration order the
/// aggregator and merger use for precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceId {
    /// ip-api.com -- the most complete source, and the only one trusted for
    /// the mobile/proxy/hosting flags.
    #[serde(rename = "ip-api.com")]
    IpApiCom,
    /// ipapi.co
    #[serde(rename = "ipapi.co")]
    IpapiCo,
    /// ipinfo.io
    #[serde(rename = "ipinfo.io")]
    IpinfoIo,
}

impl SourceId {
    /// Returns the provider's canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::IpApiCom => "ip-api.com",
            SourceId::IpapiCo => "ipapi.co",
            SourceId::IpinfoIo => "ipinfo.io",
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The geolocation source whose mobile/proxy/hosting flags are trusted.
/// When this source is absent the flags stay at their default `false`;
/// they are never inferred from the other sources.
pub const FLAG_SOURCE: SourceId = SourceId::IpApiCom;

/// One provider's normalized answer for one query.
///
/// Field names are canonical; the owning client translated the provider's
/// native names before constructing this. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResult {
    /// Which source produced this result
    pub source: SourceId,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: Option<String>,
    /// Country display name
    pub country_name: Option<String>,
    /// Continent display name
    pub continent: Option<String>,
    /// Two-letter continent code
    pub continent_code: Option<String>,
    /// Region / state name
    pub region: Option<String>,
    /// City name
    pub city: Option<String>,
    /// District within the city
    pub district: Option<String>,
    /// Postal / ZIP code
    pub postal_code: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// UTC offset in seconds, if the provider reports one
    pub utc_offset: Option<i64>,
    /// ISP name
    pub isp: Option<String>,
    /// Organization name
    pub organization: Option<String>,
    /// ASN, possibly as a compound string ("AS15169 Google LLC"); the merger
    /// reduces it to the numeric token
    pub asn: Option<String>,
    /// Mobile-carrier flag (only honored from [`FLAG_SOURCE`])
    pub is_mobile: Option<bool>,
    /// Proxy flag (only honored from [`FLAG_SOURCE`])
    pub is_proxy: Option<bool>,
    /// Hosting flag (only honored from [`FLAG_SOURCE`])
    pub is_hosting: Option<bool>,
    /// The provider's payload exactly as it arrived; the report keeps this
    /// as the audit trail
    #[serde(skip)]
    pub raw: serde_json::Value,
}

impl ProviderResult {
    /// Creates an empty result tagged with its source.
    pub fn new(source: SourceId) -> Self {
        ProviderResult {
            source,
            country_code: None,
            country_name: None,
            continent: None,
            continent_code: None,
            region: None,
            city: None,
            district: None,
            postal_code: None,
            latitude: None,
            longitude: None,
            timezone: None,
            utc_offset: None,
            isp: None,
            organization: None,
            asn: None,
            is_mobile: None,
            is_proxy: None,
            is_hosting: None,
            raw: serde_json::Value::Null,
        }
    }
}

/// Registry (RDAP/WHOIS) answer for one query. Single-source; does not
/// participate in the geolocation merge order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryData {
    /// Autonomous system number (numeric string)
    pub asn: Option<String>,
    /// ASN description text
    pub asn_description: Option<String>,
    /// Country code the ASN is registered in
    pub asn_country_code: Option<String>,
    /// Regional internet registry the record came from
    pub asn_registry: Option<String>,
    /// Registry network name
    pub network_name: Option<String>,
    /// Registry network handle
    pub network_handle: Option<String>,
    /// Registry network type
    pub network_type: Option<String>,
    /// Country of the network allocation
    pub network_country: Option<String>,
    /// First address of the allocation
    pub network_start_address: Option<String>,
    /// Last address of the allocation
    pub network_end_address: Option<String>,
    /// CIDR notation of the allocation
    pub network_cidr: Option<String>,
}

/// One weather observation, already formatted for display.
#[derive(Debug, Clone)]
pub struct WeatherObservation {
    /// Temperature with unit, e.g. "21.3°C"
    pub temperature: String,
    /// Title-cased description, e.g. "Scattered Clouds"
    pub description: String,
    /// Relative humidity, e.g. "64%"
    pub humidity: String,
    /// Pressure, e.g. "1013 hPa"
    pub pressure: String,
    /// Wind speed, e.g. "3.5 m/s"
    pub wind_speed: String,
}

/// One geolocation source.
///
/// `fetch` returns `None` for any failure; the reason is deliberately not
/// observable by the caller.
pub trait GeoProvider: Send + Sync {
    /// The provider's fixed identity (determines merge precedence).
    fn source(&self) -> SourceId;

    /// Queries the provider for one target within `timeout`.
    fn fetch<'a>(
        &'a self,
        target: &'a str,
        timeout: Duration,
    ) -> BoxFuture<'a, Option<ProviderResult>>;
}

/// The registry/RDAP source.
pub trait RegistrySource: Send + Sync {
    /// Looks up registration data for one IP within `timeout`.
    fn fetch<'a>(&'a self, ip: &'a str, timeout: Duration)
        -> BoxFuture<'a, Option<RegistryData>>;
}

/// The weather source.
pub trait WeatherSource: Send + Sync {
    /// Fetches current weather at the given coordinates within `timeout`.
    fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        timeout: Duration,
    ) -> BoxFuture<'_, Option<WeatherObservation>>;
}

/// The Tor exit-node list.
pub trait TorListSource: Send + Sync {
    /// Returns whether `ip` is a known Tor exit node. Any fetch failure
    /// reads as `false`, not unknown.
    fn is_exit_node<'a>(&'a self, ip: &'a str, timeout: Duration) -> BoxFuture<'a, bool>;
}
