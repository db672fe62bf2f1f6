//! Heuristic connection-performance estimate from operator text.

use serde::{Deserialize, Serialize};

/// A rough performance profile for the target's network.
///
/// Purely keyword-driven; no measurement is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    /// Estimated downstream speed band
    pub estimated_speed: String,
    /// Connection technology guess
    pub connection_type: String,
    /// Quality score, 0 to 100
    pub quality_score: u32,
    /// Expected latency band
    pub latency_estimate: String,
}

impl Default for PerformanceEstimate {
    fn default() -> Self {
        PerformanceEstimate {
            estimated_speed: "Unknown".to_string(),
            connection_type: "Unknown".to_string(),
            quality_score: 0,
            latency_estimate: "Unknown".to_string(),
        }
    }
}

fn profile(speed: &str, connection: &str, quality: u32, latency: &str) -> PerformanceEstimate {
    PerformanceEstimate {
        estimated_speed: speed.to_string(),
        connection_type: connection.to_string(),
        quality_score: quality,
        latency_estimate: latency.to_string(),
    }
}

/// Estimates connection performance from the organization text. Unknown
/// operators fall through to a generic broadband profile.
pub fn estimate_performance(organization: Option<&str>) -> PerformanceEstimate {
    let text = organization.unwrap_or("").to_lowercase();

    let tier1 = ["google", "cloudflare", "amazon", "microsoft"];
    let fiber = ["fiber", "broadband"];
    let mobile = ["mobile", "cellular", "lte", "5g"];

    if tier1.iter().any(|k| text.contains(k)) {
        profile("Very High (1Gbps+)", "Fiber/Data Center", 95, "< 10ms")
    } else if fiber.iter().any(|k| text.contains(k)) {
        profile("High (100-1000Mbps)", "Fiber Broadband", 85, "10-30ms")
    } else if mobile.iter().any(|k| text.contains(k)) {
        profile("Medium (10-100Mbps)", "Mobile/Cellular", 70, "30-100ms")
    } else {
        profile("Standard (1-50Mbps)", "Broadband", 60, "20-80ms")
    }
}
