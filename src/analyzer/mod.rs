//! The analysis orchestrator: one entry point that runs a target through
//! validation, classification, the external sources, the merge, and the
//! heuristic classifiers.
//!
//! The pipeline never retries and never aborts on a source failure; every
//! failed step degrades to absent fields in the report. The only hard
//! failure is invalid input, rejected before any network activity.

use log::info;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::analytics::{EventSink, LogSink};
use crate::classify;
use crate::config::Config;
use crate::dns::{domain_from_ptr, HickoryResolver, NameResolver};
use crate::enrich;
use crate::error_handling::{AnalysisError, InitializationError};
use crate::merge;
use crate::providers::{
    IpApiClient, IpapiCoClient, IpinfoClient, OpenWeatherClient, RdapClient, RegistrySource,
    ResponseCache, SourceAggregator, TorExitListClient, TorListSource, WeatherSource,
};
use crate::report::{IpClass, IpReport, SourceRecord, WeatherInfo};
use crate::security::validate_target;

/// Result of one target within a bulk analysis. Exactly one of `report`
/// and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkEntry {
    /// The target as submitted
    pub target: String,
    /// The completed report, when analysis succeeded
    pub report: Option<IpReport>,
    /// The failure message, when it did not
    pub error: Option<String>,
}

/// The analysis pipeline with all of its source clients.
pub struct Analyzer {
    aggregator: SourceAggregator,
    registry: Arc<dyn RegistrySource>,
    weather: Arc<dyn WeatherSource>,
    tor: Arc<dyn TorListSource>,
    resolver: Arc<dyn NameResolver>,
    events: Arc<dyn EventSink>,
    provider_timeout: Duration,
    tor_timeout: Duration,
}

impl Analyzer {
    /// Builds the full production pipeline from configuration: shared HTTP
    /// client and response cache, the three geolocation sources in
    /// precedence order, registry, weather, Tor list, and DNS resolver.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.provider_timeout_secs))
            .build()?;
        let cache = Arc::new(ResponseCache::new(config.cache_capacity));

        let aggregator = SourceAggregator::new(vec![
            Arc::new(IpApiClient::new(client.clone(), Arc::clone(&cache))),
            Arc::new(IpapiCoClient::new(client.clone(), Arc::clone(&cache))),
            Arc::new(IpinfoClient::new(client.clone(), Arc::clone(&cache))),
        ]);

        Ok(Analyzer {
            aggregator,
            registry: Arc::new(RdapClient::new(client.clone(), Arc::clone(&cache))),
            weather: Arc::new(OpenWeatherClient::new(
                client.clone(),
                Arc::clone(&cache),
                config.weather_api_key.clone(),
            )),
            tor: Arc::new(TorExitListClient::new(client)),
            resolver: Arc::new(HickoryResolver::new()),
            events: Arc::new(LogSink),
            provider_timeout: Duration::from_secs(config.provider_timeout_secs),
            tor_timeout: Duration::from_secs(config.tor_timeout_secs),
        })
    }

    /// Assembles a pipeline from explicit parts. Lets tests inject fakes
    /// for every external dependency.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        aggregator: SourceAggregator,
        registry: Arc<dyn RegistrySource>,
        weather: Arc<dyn WeatherSource>,
        tor: Arc<dyn TorListSource>,
        resolver: Arc<dyn NameResolver>,
        events: Arc<dyn EventSink>,
        provider_timeout: Duration,
        tor_timeout: Duration,
    ) -> Self {
        Analyzer {
            aggregator,
            registry,
            weather,
            tor,
            resolver,
            events,
            provider_timeout,
            tor_timeout,
        }
    }

    /// Runs the full pipeline for one target.
    ///
    /// # Arguments
    ///
    /// * `target` - An IP address or hostname
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidTarget` when the target fails
    /// validation. Source outages are not errors; they leave the affected
    /// report fields unset.
    pub async fn analyze(&self, target: &str) -> Result<IpReport, AnalysisError> {
        self.run(target, "single").await
    }

    async fn run(&self, target: &str, scan_type: &str) -> Result<IpReport, AnalysisError> {
        let target = validate_target(target)?;
        self.events.track_scan(&target, scan_type, None);
        let started = Instant::now();
        info!("starting analysis of {target}");

        let mut report = IpReport::new(&target);

        // Hostnames are resolved up front; the rest of the pipeline wants
        // an address wherever one exists.
        let ip = match target.parse::<IpAddr>() {
            Ok(ip) => Some(ip),
            Err(_) => self.resolver.resolve(&target).await,
        };
        report.basic.ip_type = Some(match ip {
            Some(ip) => classify_address(ip),
            None => IpClass::Invalid,
        });

        if let Some(ip) = ip {
            if let Some(ptr) = self.resolver.reverse(ip).await {
                report.basic.domain = domain_from_ptr(&ptr);
                report.basic.reverse_dns = Some(ptr);
            }
        }

        let lookup_key = ip.map(|ip| ip.to_string()).unwrap_or_else(|| target.clone());
        let results = self
            .aggregator
            .query_all(&lookup_key, self.provider_timeout)
            .await;
        merge::merge_sources(&results, &mut report);
        report.sources.geolocation = results
            .into_iter()
            .map(|result| SourceRecord {
                source: result.source,
                data: result.raw,
            })
            .collect();

        // The geolocation sources lead; registry data only fills the
        // network fields every source left unset.
        if let Some(ip) = ip {
            if let Some(registry) = self
                .registry
                .fetch(&ip.to_string(), self.provider_timeout)
                .await
            {
                merge::apply_registry(&registry, &mut report);
                report.sources.registry = Some(registry);
            }
        }

        enrich::apply_reference_tables(&mut report);
        enrich::derive_time(&mut report);

        if let (Some(lat), Some(lon)) = (report.geographic.latitude, report.geographic.longitude) {
            report.weather = match self.weather.fetch(lat, lon, self.provider_timeout).await {
                Some(obs) => WeatherInfo {
                    available: true,
                    temperature: Some(obs.temperature),
                    description: Some(obs.description),
                    humidity: Some(obs.humidity),
                    pressure: Some(obs.pressure),
                    wind_speed: Some(obs.wind_speed),
                },
                None => WeatherInfo::unavailable(),
            };
        }

        if let Some(ip) = ip {
            report.security.is_tor = self
                .tor
                .is_exit_node(&ip.to_string(), self.tor_timeout)
                .await;
        }

        let usage = classify::detect_usage_type(
            report.network.asn_description.as_deref(),
            report.network.organization.as_deref(),
            report.network.isp.as_deref(),
        );
        report.network.usage_type = Some(usage);

        let identity = classify::identity_text(&[
            report.basic.domain.as_deref(),
            report.network.organization.as_deref(),
            report.network.asn_description.as_deref(),
        ]);
        report.network.is_datacenter = classify::is_datacenter(&identity);

        report.security.threat_analysis = classify::analyze_threats(
            report.basic.domain.as_deref(),
            report.network.organization.as_deref(),
            report.network.asn_description.as_deref(),
        );
        report.security.is_vpn = report.security.threat_analysis.is_anonymization();

        report.performance =
            classify::estimate_performance(report.network.organization.as_deref());

        report.analysis_duration = (started.elapsed().as_secs_f64() * 100.0).round() / 100.0;
        info!(
            "analysis of {target} completed in {:.2}s",
            report.analysis_duration
        );
        Ok(report)
    }

    /// Analyzes a list of targets, isolating failures: a bad target yields
    /// an error entry without affecting the rest of the batch.
    pub async fn analyze_bulk(&self, targets: &[String]) -> Vec<BulkEntry> {
        let mut entries = Vec::with_capacity(targets.len());
        for target in targets {
            let trimmed = target.trim().to_string();
            let entry = match self.run(&trimmed, "bulk").await {
                Ok(report) => BulkEntry {
                    target: trimmed,
                    report: Some(report),
                    error: None,
                },
                Err(e) => BulkEntry {
                    target: trimmed,
                    report: None,
                    error: Some(e.to_string()),
                },
            };
            entries.push(entry);
        }
        entries
    }
}

/// Classifies an address into its address-space class.
///
/// Loopback and multicast are checked before the private ranges so that
/// 127.0.0.1 reads as Loopback rather than Private.
fn classify_address(ip: IpAddr) -> IpClass {
    match ip {
        IpAddr::V4(v4) => {
            if v4.is_loopback() {
                IpClass::Loopback
            } else if v4.is_multicast() {
                IpClass::Multicast
            } else if v4.is_private() || v4.is_link_local() {
                IpClass::Private
            } else if v4.octets()[0] >= 240 || v4.is_unspecified() {
                IpClass::Reserved
            } else {
                IpClass::Public
            }
        }
        IpAddr::V6(v6) => {
            if v6.is_loopback() {
                IpClass::Loopback
            } else if v6.is_multicast() {
                IpClass::Multicast
            } else if is_v6_private(v6) {
                IpClass::Private
            } else if v6.is_unspecified() {
                IpClass::Reserved
            } else {
                IpClass::Public
            }
        }
    }
}

/// Unique-local (fc00::/7) or link-local (fe80::/10) address space.
fn is_v6_private(v6: std::net::Ipv6Addr) -> bool {
    let first = v6.segments()[0];
    (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_v4_addresses() {
        let cases = [
            ("8.8.8.8", IpClass::Public),
            ("10.0.0.1", IpClass::Private),
            ("172.16.5.4", IpClass::Private),
            ("192.168.1.1", IpClass::Private),
            ("169.254.1.1", IpClass::Private),
            ("127.0.0.1", IpClass::Loopback),
            ("224.0.0.1", IpClass::Multicast),
            ("240.0.0.1", IpClass::Reserved),
            ("0.0.0.0", IpClass::Reserved),
        ];
        for (addr, expected) in cases {
            let ip: IpAddr = addr.parse().unwrap();
            assert_eq!(classify_address(ip), expected, "for {addr}");
        }
    }

    #[test]
    fn test_classify_v6_addresses() {
        let cases = [
            ("2001:4860:4860::8888", IpClass::Public),
            ("::1", IpClass::Loopback),
            ("ff02::1", IpClass::Multicast),
            ("fd12:3456::1", IpClass::Private),
            ("fe80::1", IpClass::Private),
            ("::", IpClass::Reserved),
        ];
        for (addr, expected) in cases {
            let ip: IpAddr = addr.parse().unwrap();
            assert_eq!(classify_address(ip), expected, "for {addr}");
        }
    }
}
