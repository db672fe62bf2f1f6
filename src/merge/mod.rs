//! Field-level merge of the multi-source geolocation results.
//!
//! Precedence is positional: results arrive in fixed registration order and
//! each report field takes the first non-absent value it sees. A later
//! source can only contribute fields the earlier sources left unset; nothing
//! is ever overwritten.

use log::debug;

use crate::providers::{ProviderResult, RegistryData, FLAG_SOURCE};
use crate::report::IpReport;

/// Sets `slot` from `candidate` only when the slot is still unset.
fn fill<T>(slot: &mut Option<T>, candidate: Option<T>) {
    if slot.is_none() {
        if let Some(value) = candidate {
            *slot = Some(value);
        }
    }
}

/// Reduces a compound ASN string to its numeric token.
///
/// Providers report ASNs in several shapes: "AS15169 Google LLC", "AS15169",
/// or already-bare "15169". All reduce to "15169".
pub fn extract_asn_number(raw: &str) -> Option<String> {
    let first = raw.split_whitespace().next()?;
    let digits = first.strip_prefix("AS").unwrap_or(first);
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(digits.to_string())
    } else {
        None
    }
}

/// Merges the per-source results into the report, first non-absent value
/// per field in source order.
///
/// The mobile/proxy/hosting flags are an exception to positional fill: they
/// are only ever taken from the designated flag source, regardless of what
/// other sources claim.
pub fn merge_sources(results: &[ProviderResult], report: &mut IpReport) {
    for result in results {
        let geo = &mut report.geographic;
        fill(&mut geo.country_code, result.country_code.clone());
        fill(&mut geo.country_name, result.country_name.clone());
        fill(&mut geo.continent, result.continent.clone());
        fill(&mut geo.continent_code, result.continent_code.clone());
        fill(&mut geo.region, result.region.clone());
        fill(&mut geo.city, result.city.clone());
        fill(&mut geo.district, result.district.clone());
        fill(&mut geo.postal_code, result.postal_code.clone());
        fill(&mut geo.latitude, result.latitude);
        fill(&mut geo.longitude, result.longitude);

        fill(&mut report.time.timezone, result.timezone.clone());
        fill(&mut report.time.utc_offset, result.utc_offset);

        let network = &mut report.network;
        fill(&mut network.isp, result.isp.clone());
        fill(&mut network.organization, result.organization.clone());
        fill(
            &mut network.asn,
            result.asn.as_deref().and_then(extract_asn_number),
        );

        if result.source == FLAG_SOURCE {
            network.is_mobile = result.is_mobile.unwrap_or(false);
            network.is_proxy = result.is_proxy.unwrap_or(false);
            network.is_hosting = result.is_hosting.unwrap_or(false);
        }
    }
    debug!(
        "merged {} geolocation results for {}",
        results.len(),
        report.target
    );
}

/// Copies registry data into the report's network section, again only
/// filling fields that are still unset.
///
/// Called after the geolocation merge, so for the fields both stages cover
/// the registry only contributes where every source came up empty.
pub fn apply_registry(registry: &RegistryData, report: &mut IpReport) {
    let network = &mut report.network;
    fill(&mut network.asn, registry.asn.clone());
    fill(&mut network.asn_description, registry.asn_description.clone());
    fill(&mut network.asn_country, registry.asn_country_code.clone());
    fill(&mut network.asn_registry, registry.asn_registry.clone());
    fill(&mut network.network_name, registry.network_name.clone());
    // The registry network name doubles as the organization
    fill(&mut network.organization, registry.network_name.clone());
    fill(&mut network.cidr, registry.network_cidr.clone());
    fill(&mut network.network_type, registry.network_type.clone());
}
