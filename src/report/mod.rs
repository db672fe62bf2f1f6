//! The analysis report: one typed record tree per analyzed target.
//!
//! Every leaf starts unset (`None`, never a default value) and is set at
//! most once, by either the field merger or the enrichment stage. The
//! "unset vs explicitly false/zero" distinction matters for merge
//! precedence, so optional fields are explicit `Option`s rather than
//! sentinel values.

use serde::{Deserialize, Serialize};

use crate::providers::{RegistryData, SourceId};

/// Address-space classification of the analyzed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpClass {
    /// RFC 1918 / RFC 4193 private address space
    Private,
    /// Loopback address
    Loopback,
    /// Multicast address
    Multicast,
    /// Reserved address space
    Reserved,
    /// Publicly routable address
    Public,
    /// Not a parseable or resolvable address
    Invalid,
}

impl IpClass {
    /// Returns a human-readable label for the class.
    pub fn as_str(&self) -> &'static str {
        match self {
            IpClass::Private => "Private",
            IpClass::Loopback => "Loopback",
            IpClass::Multicast => "Multicast",
            IpClass::Reserved => "Reserved",
            IpClass::Public => "Public",
            IpClass::Invalid => "Invalid",
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic target facts: address class and reverse-DNS identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInfo {
    /// Address-space classification
    pub ip_type: Option<IpClass>,
    /// Full reverse-DNS name (PTR record)
    pub reverse_dns: Option<String>,
    /// Registrable domain derived from the reverse-DNS name (last two labels)
    pub domain: Option<String>,
}

/// Geographic placement of the target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoInfo {
    /// ISO 3166-1 alpha-2 country code
    pub country_code: Option<String>,
    /// Country display name
    pub country_name: Option<String>,
    /// Continent display name
    pub continent: Option<String>,
    /// Two-letter continent code
    pub continent_code: Option<String>,
    /// Region / state / subdivision name
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
}

/// Local-time facts derived from the target's timezone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeInfo {
    /// IANA timezone name (e.g. "Europe/Berlin")
    pub timezone: Option<String>,
    /// UTC offset in integer seconds (exact, including fractional-hour zones)
    pub utc_offset: Option<i64>,
    /// Signed whole-hour label (e.g. "UTC+2", "UTC-3", or "UTC" at zero)
    pub utc_offset_formatted: Option<String>,
    /// Current local time, formatted
    pub local_time: Option<String>,
    /// Current UTC time, formatted
    pub utc_time: Option<String>,
    /// Whether daylight-saving time is in effect
    pub is_dst: Option<bool>,
}

/// Currency used in the target's country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    /// ISO 4217 currency code
    pub code: String,
    /// Currency display name
    pub name: String,
    /// Currency symbol
    pub symbol: String,
}

/// Current weather at the target's coordinates.
///
/// Either fully populated with `available = true`, or an explicit
/// unavailable record -- never partially filled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherInfo {
    /// Whether a weather observation was obtained
    pub available: bool,
    /// Temperature, formatted with unit (e.g. "21.3°C")
    pub temperature: Option<String>,
    /// Short weather description
    pub description: Option<String>,
    /// Relative humidity, formatted (e.g. "64%")
    pub humidity: Option<String>,
    /// Atmospheric pressure, formatted (e.g. "1013 hPa")
    pub pressure: Option<String>,
    /// Wind speed, formatted (e.g. "3.5 m/s")
    pub wind_speed: Option<String>,
}

impl WeatherInfo {
    /// The explicit "no weather data obtained" record.
    pub fn unavailable() -> Self {
        WeatherInfo {
            available: false,
            description: Some("Weather data unavailable".to_string()),
            ..Default::default()
        }
    }
}

/// Network-operator facts: ASN, organization, and operator flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Autonomous system number (numeric token only, no "AS" prefix)
    pub asn: Option<String>,
    /// ASN description text from the registry
    pub asn_description: Option<String>,
    /// Country code the ASN is registered in
    pub asn_country: Option<String>,
    /// Regional internet registry (e.g. "arin", "ripe")
    pub asn_registry: Option<String>,
    /// Operating organization name
    pub organization: Option<String>,
    /// ISP name
    pub isp: Option<String>,
    /// Registry network name
    pub network_name: Option<String>,
    /// Network CIDR block
    pub cidr: Option<String>,
    /// Registry network type
    pub network_type: Option<String>,
    /// Coarse usage classification of the operator
    pub usage_type: Option<crate::classify::UsageType>,
    /// Mobile-carrier flag (primary geolocation source only)
    pub is_mobile: bool,
    /// Proxy flag (primary geolocation source only)
    pub is_proxy: bool,
    /// Hosting flag (primary geolocation source only)
    pub is_hosting: bool,
    /// Datacenter keyword heuristic over organization text
    pub is_datacenter: bool,
}

/// Security signals for the target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityInfo {
    /// Keyword-based threat scoring result
    pub threat_analysis: crate::classify::ThreatAnalysis,
    /// Whether the target appears in the Tor exit-node list.
    /// A failed list fetch reads as `false`, not unknown.
    pub is_tor: bool,
    /// VPN flag (mirrors the anonymization threat label)
    pub is_vpn: bool,
}

/// One geolocation source's payload as the provider sent it, before any
/// field normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Which source produced the payload
    pub source: SourceId,
    /// The provider's native payload, untouched
    pub data: serde_json::Value,
}

/// Raw per-source data retained for auditability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesInfo {
    /// Registry/RDAP record, if the lookup succeeded
    pub registry: Option<RegistryData>,
    /// Each responding provider's native payload, in registration order
    pub geolocation: Vec<SourceRecord>,
}

/// The complete analysis record for one target.
///
/// Constructed within one `analyze` call and returned immutably; it has no
/// existence beyond the request/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpReport {
    /// The analyzed target (IP address or hostname), as validated
    pub target: String,
    /// UTC timestamp of the analysis, RFC 3339
    pub analysis_timestamp: String,
    /// Wall-clock analysis duration in seconds
    pub analysis_duration: f64,
    /// Address class and reverse-DNS identity
    pub basic: BasicInfo,
    /// Geographic placement
    pub geographic: GeoInfo,
    /// Local-time facts
    pub time: TimeInfo,
    /// Currency block; stays unset when the country has no table entry
    pub currency: Option<CurrencyInfo>,
    /// Weather at the target's coordinates
    pub weather: WeatherInfo,
    /// Network-operator facts
    pub network: NetworkInfo,
    /// Security signals
    pub security: SecurityInfo,
    /// Heuristic performance estimate
    pub performance: crate::classify::PerformanceEstimate,
    /// Raw source data for auditability
    pub sources: SourcesInfo,
}

impl IpReport {
    /// Creates a report with every leaf unset.
    pub fn new(target: &str) -> Self {
        IpReport {
            target: target.to_string(),
            analysis_timestamp: chrono::Utc::now().to_rfc3339(),
            analysis_duration: 0.0,
            basic: BasicInfo::default(),
            geographic: GeoInfo::default(),
            time: TimeInfo::default(),
            currency: None,
            weather: WeatherInfo::default(),
            network: NetworkInfo::default(),
            security: SecurityInfo::default(),
            performance: crate::classify::PerformanceEstimate::default(),
            sources: SourcesInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_starts_unset() {
        let report = IpReport::new("8.8.8.8");
        assert_eq!(report.target, "8.8.8.8");
        assert!(report.basic.ip_type.is_none());
        assert!(report.geographic.country_code.is_none());
        assert!(report.time.timezone.is_none());
        assert!(report.currency.is_none());
        assert!(!report.weather.available);
        assert!(report.network.asn.is_none());
        // Flags default to false, not unset
        assert!(!report.network.is_mobile);
        assert!(!report.network.is_proxy);
        assert!(!report.network.is_hosting);
        assert!(!report.security.is_tor);
        assert!(report.sources.geolocation.is_empty());
    }

    #[test]
    fn test_ip_class_labels() {
        assert_eq!(IpClass::Private.as_str(), "Private");
        assert_eq!(IpClass::Loopback.as_str(), "Loopback");
        assert_eq!(IpClass::Multicast.as_str(), "Multicast");
        assert_eq!(IpClass::Reserved.as_str(), "Reserved");
        assert_eq!(IpClass::Public.as_str(), "Public");
        assert_eq!(IpClass::Invalid.as_str(), "Invalid");
    }

    #[test]
    fn test_weather_unavailable_is_explicit() {
        let weather = WeatherInfo::unavailable();
        assert!(!weather.available);
        assert_eq!(
            weather.description.as_deref(),
            Some("Weather data unavailable")
        );
        assert!(weather.temperature.is_none());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = IpReport::new("1.1.1.1");
        let json = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(json["target"], "1.1.1.1");
        assert!(json["geographic"]["country_code"].is_null());
    }
}
