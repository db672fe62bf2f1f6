//! Coarse usage-type classification of a network operator.

use serde::{Deserialize, Serialize};

use super::identity_text;

/// Usage classification, in descending match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageType {
    /// Data center / hosting
    #[serde(rename = "DCH")]
    DataCenter,
    /// Mobile carrier
    #[serde(rename = "MOB")]
    Mobile,
    /// Educational institution
    #[serde(rename = "EDU")]
    Educational,
    /// Government / military
    #[serde(rename = "GOV")]
    Government,
    /// Commercial enterprise
    #[serde(rename = "COM")]
    Commercial,
    /// Generic internet service provider (the fallback class)
    #[serde(rename = "ISP")]
    Isp,
}

impl UsageType {
    /// Returns the short code used in report output.
    pub fn code(&self) -> &'static str {
        match self {
            UsageType::DataCenter => "DCH",
            UsageType::Mobile => "MOB",
            UsageType::Educational => "EDU",
            UsageType::Government => "GOV",
            UsageType::Commercial => "COM",
            UsageType::Isp => "ISP",
        }
    }
}

impl std::fmt::Display for UsageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

const DCH_KEYWORDS: &[&str] = &[
    "google",
    "amazon",
    "microsoft",
    "cloudflare",
    "digital ocean",
    "linode",
    "vultr",
];
const MOB_KEYWORDS: &[&str] = &[
    "mobile", "cellular", "wireless", "gsm", "lte", "vivo", "claro", "tim", "oi", "vodafone",
    "at&t", "verizon",
];
const EDU_KEYWORDS: &[&str] = &["university", "education", "school", "college", "academic"];
const GOV_KEYWORDS: &[&str] = &["government", "military", "gov", "defense"];
const COM_KEYWORDS: &[&str] = &["business", "enterprise", "corporate"];

fn matches_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Classifies the operator from its ASN description, organization, and ISP
/// text. First matching class wins; an operator matching both the
/// datacenter and mobile sets reads as datacenter.
pub fn detect_usage_type(
    asn_description: Option<&str>,
    organization: Option<&str>,
    isp: Option<&str>,
) -> UsageType {
    let text = identity_text(&[asn_description, organization, isp]);

    if matches_any(&text, DCH_KEYWORDS) {
        UsageType::DataCenter
    } else if matches_any(&text, MOB_KEYWORDS) {
        UsageType::Mobile
    } else if matches_any(&text, EDU_KEYWORDS) {
        UsageType::Educational
    } else if matches_any(&text, GOV_KEYWORDS) {
        UsageType::Government
    } else if matches_any(&text, COM_KEYWORDS) {
        UsageType::Commercial
    } else {
        UsageType::Isp
    }
}
