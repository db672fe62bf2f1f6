//! Accumulating keyword-based threat scorer.

use serde::{Deserialize, Serialize};

use super::identity_text;

const ANONYMIZATION_KEYWORDS: &[&str] = &["tor", "proxy", "vpn"];
const MALICIOUS_KEYWORDS: &[&str] = &["botnet", "malware", "spam"];
const HOSTING_KEYWORDS: &[&str] = &["datacenter", "hosting", "cloud"];

const ANONYMIZATION_WEIGHT: u32 = 20;
const MALICIOUS_WEIGHT: u32 = 40;
const HOSTING_WEIGHT: u32 = 10;

/// Reputation tier derived from the accumulated risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Reputation {
    /// Score of 10 or below
    #[default]
    Good,
    /// Score of 11 to 30
    Suspicious,
    /// Score above 30
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl Reputation {
    /// Returns the display label for the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reputation::Good => "Good",
            Reputation::Suspicious => "Suspicious",
            Reputation::HighRisk => "High Risk",
        }
    }
}

impl std::fmt::Display for Reputation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of the keyword threat scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreatAnalysis {
    /// Accumulated risk score
    pub risk_score: u32,
    /// Labels of the keyword categories that matched
    pub threat_types: Vec<String>,
    /// Tier derived from the score
    pub reputation: Reputation,
    /// Whether the score crossed the malicious threshold (above 50)
    pub is_malicious: bool,
}

impl ThreatAnalysis {
    /// Whether the anonymization category matched.
    pub fn is_anonymization(&self) -> bool {
        self.threat_types
            .iter()
            .any(|label| label == "Anonymization Service")
    }
}

/// Maps a risk score to its reputation tier.
pub(crate) fn reputation_for(score: u32) -> Reputation {
    if score <= 10 {
        Reputation::Good
    } else if score <= 30 {
        Reputation::Suspicious
    } else {
        Reputation::HighRisk
    }
}

/// Scans the target's identity text for threat keywords.
///
/// Each category contributes its weight at most once no matter how many of
/// its keywords match. Categories accumulate: an operator matching all
/// three scores 70 and reads as malicious.
pub fn analyze_threats(
    domain: Option<&str>,
    organization: Option<&str>,
    asn_description: Option<&str>,
) -> ThreatAnalysis {
    let text = identity_text(&[domain, organization, asn_description]);
    let mut analysis = ThreatAnalysis::default();

    if ANONYMIZATION_KEYWORDS.iter().any(|k| text.contains(k)) {
        analysis.risk_score += ANONYMIZATION_WEIGHT;
        analysis
            .threat_types
            .push("Anonymization Service".to_string());
    }
    if MALICIOUS_KEYWORDS.iter().any(|k| text.contains(k)) {
        analysis.risk_score += MALICIOUS_WEIGHT;
        analysis.threat_types.push("Malicious Activity".to_string());
    }
    if HOSTING_KEYWORDS.iter().any(|k| text.contains(k)) {
        analysis.risk_score += HOSTING_WEIGHT;
        analysis.threat_types.push("Hosting Provider".to_string());
    }

    analysis.reputation = reputation_for(analysis.risk_score);
    analysis.is_malicious = analysis.risk_score > 50;
    analysis
}
