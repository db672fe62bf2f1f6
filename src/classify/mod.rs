//! Keyword-driven heuristics over operator identity text.
//!
//! All three classifiers take free-form text (ASN description, organization,
//! ISP, domain) and scan it for fixed keyword sets. Deliberately coarse;
//! they produce orientation labels, not authoritative data.

mod performance;
mod threat;
mod usage;

pub use performance::{estimate_performance, PerformanceEstimate};
pub use threat::{analyze_threats, Reputation, ThreatAnalysis};
pub use usage::{detect_usage_type, UsageType};

/// Datacenter keyword heuristic over the target's identity text.
///
/// Broader than the hosting threat keywords: it also recognizes the large
/// cloud operators by name.
pub fn is_datacenter(text: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "amazon",
        "aws",
        "google",
        "microsoft",
        "azure",
        "digitalocean",
        "linode",
        "vultr",
        "ovh",
        "hetzner",
        "cloudflare",
        "fastly",
        "hosting",
        "datacenter",
        "data center",
        "cloud",
        "server",
    ];
    let text = text.to_lowercase();
    KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// Joins optional identity fragments into one lowercase haystack.
///
/// Absent fragments contribute an empty string, matching how the
/// classifiers treat missing data as simply not contributing keywords.
pub(crate) fn identity_text(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .map(|part| part.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
