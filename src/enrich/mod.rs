//! Reference-table enrichment and local-time derivation.
//!
//! Runs after the multi-source merge and follows the same fill-if-unset
//! discipline: enrichment only contributes where every provider stayed
//! silent, it never overrides a provider value.

use chrono::{DateTime, Utc};
use chrono_tz::{OffsetComponents, Tz};
use log::debug;

use crate::reference;
use crate::report::IpReport;

/// Back-fills geographic and currency fields from the static reference
/// tables, keyed on the country code.
///
/// When no geolocation source supplied a country code, the registry's ASN
/// registration country stands in. With no code from either side the
/// enrichment is a no-op.
pub fn apply_reference_tables(report: &mut IpReport) {
    let country_code = match report
        .geographic
        .country_code
        .clone()
        .or_else(|| report.network.asn_country.clone())
    {
        Some(code) => code,
        None => {
            debug!("no country code for {}, skipping enrichment", report.target);
            return;
        }
    };

    if report.geographic.country_code.is_none() {
        report.geographic.country_code = Some(country_code.clone());
    }
    if report.geographic.country_name.is_none() {
        // A code with no table entry still gets a readable placeholder
        report.geographic.country_name = Some(
            reference::country_name_for(&country_code)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Country {country_code}")),
        );
    }
    if report.geographic.continent.is_none() {
        if let Some(continent) = reference::continent_for(&country_code) {
            report.geographic.continent = Some(continent.to_string());
        }
    }
    if report.time.timezone.is_none() {
        if let Some(timezone) = reference::timezone_for(&country_code) {
            report.time.timezone = Some(timezone.to_string());
        }
    }
    // Currency has no placeholder: an unknown code leaves the block unset
    if report.currency.is_none() {
        report.currency = reference::currency_for(&country_code);
    }
}

/// Derives the local-time fields from the report's timezone at the current
/// instant. No-op when no timezone was established.
pub fn derive_time(report: &mut IpReport) {
    derive_time_at(report, Utc::now());
}

/// [`derive_time`] pinned to a fixed instant, so tests can assert on DST
/// and offset values without depending on the wall clock.
pub fn derive_time_at(report: &mut IpReport, now: DateTime<Utc>) {
    let name = match &report.time.timezone {
        Some(name) => name,
        None => return,
    };
    let tz: Tz = match name.parse() {
        Ok(tz) => tz,
        Err(_) => {
            debug!("unparseable timezone {name} for {}", report.target);
            return;
        }
    };

    let local = now.with_timezone(&tz);
    let offset = local.offset();
    let total_offset =
        (offset.base_utc_offset() + offset.dst_offset()).num_seconds();

    report.time.utc_offset = Some(total_offset);
    report.time.utc_offset_formatted = Some(format_offset(total_offset));
    report.time.local_time = Some(local.format("%Y-%m-%d %H:%M:%S").to_string());
    report.time.utc_time = Some(now.format("%Y-%m-%d %H:%M:%S").to_string());
    report.time.is_dst = Some(!offset.dst_offset().is_zero());
}

/// Renders an offset in seconds as a whole-hour label: "UTC+2", "UTC-3",
/// or plain "UTC" at zero. Fractional-hour zones round toward negative
/// infinity, so Asia/Kolkata (+5:30) reads "UTC+5"; the exact offset stays
/// available in the numeric field.
fn format_offset(offset_secs: i64) -> String {
    let hours = offset_secs.div_euclid(3600);
    if hours == 0 {
        "UTC".to_string()
    } else {
        format!("UTC{hours:+}")
    }
}
