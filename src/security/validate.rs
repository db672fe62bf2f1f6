//! Target validation: every target string passes through here before any
//! network operation sees it.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

use crate::error_handling::AnalysisError;

const MAX_HOSTNAME_LEN: usize = 253;

/// Patterns that indicate an injection attempt rather than a lookup target.
/// Checked case-insensitively, before any format validation.
static DANGEROUS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[;&|`$()<>]",
        r"script|javascript|vbscript",
        r"union|select|drop|delete|insert|update",
    ]
    .iter()
    .map(|pattern| {
        Regex::new(&format!("(?i){pattern}")).unwrap_or_else(|_| unreachable!("static pattern"))
    })
    .collect()
});

static HOSTNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+$").unwrap_or_else(|_| unreachable!("static pattern")));

/// Validates a target string as either an IP address or a plausible
/// hostname.
///
/// Returns the trimmed target on success. Rejection happens before any
/// parsing attempt, so an injection payload is never partially interpreted.
pub fn validate_target(input: &str) -> Result<String, AnalysisError> {
    let target = input.trim();

    if target.is_empty() {
        return Err(AnalysisError::InvalidTarget(
            "empty target".to_string(),
        ));
    }

    for pattern in DANGEROUS_PATTERNS.iter() {
        if pattern.is_match(target) {
            warn!("rejected target containing suspicious pattern");
            return Err(AnalysisError::InvalidTarget(
                "input contains disallowed characters".to_string(),
            ));
        }
    }

    if target.parse::<IpAddr>().is_ok() {
        return Ok(target.to_string());
    }

    if target.len() <= MAX_HOSTNAME_LEN && HOSTNAME_RE.is_match(target) {
        return Ok(target.to_string());
    }

    Err(AnalysisError::InvalidTarget(format!(
        "not a valid IP address or hostname: {target}"
    )))
}
