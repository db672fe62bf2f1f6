//! Shared HTTP fetch helper for the provider clients.

use log::debug;
use std::sync::Arc;
use std::time::Duration;

use super::cache::ResponseCache;

/// Fetches a JSON payload from `url`, consulting the shared cache first.
///
/// Any transport failure, timeout, non-success status, or malformed payload
/// collapses to `None`; the caller never learns which one occurred.
pub(crate) async fn fetch_json(
    client: &reqwest::Client,
    cache: &Arc<ResponseCache>,
    url: &str,
    timeout: Duration,
) -> Option<serde_json::Value> {
    if let Some(cached) = cache.get(url).await {
        debug!("response cache hit for {url}");
        return Some(cached);
    }

    let response = tokio::time::timeout(timeout, client.get(url).send())
        .await
        .ok()?
        .ok()?;
    if !response.status().is_success() {
        debug!("non-success status {} from {url}", response.status());
        return None;
    }

    let value: serde_json::Value = response.json().await.ok()?;
    cache.put(url, value.clone()).await;
    Some(value)
}

/// Fetches a plain-text payload from `url`, uncached.
///
/// Used for the Tor exit-node list, which is too large and too volatile to
/// be worth keeping in the response cache.
pub(crate) async fn fetch_text(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Option<String> {
    let response = tokio::time::timeout(timeout, client.get(url).send())
        .await
        .ok()?
        .ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.text().await.ok()
}

/// Reads a string field from a JSON object, treating empty strings as absent.
pub(crate) fn json_str(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Reads a float field from a JSON object.
pub(crate) fn json_f64(value: &serde_json::Value, key: &str) -> Option<f64> {
    value.get(key).and_then(|v| v.as_f64())
}

/// Reads an integer field from a JSON object.
pub(crate) fn json_i64(value: &serde_json::Value, key: &str) -> Option<i64> {
    value.get(key).and_then(|v| v.as_i64())
}

/// Reads a boolean field from a JSON object.
pub(crate) fn json_bool(value: &serde_json::Value, key: &str) -> Option<bool> {
    value.get(key).and_then(|v| v.as_bool())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_str_filters_empty() {
        let value = json!({"a": "x", "b": "", "c": 5});
        assert_eq!(json_str(&value, "a"), Some("x".to_string()));
        assert_eq!(json_str(&value, "b"), None);
        assert_eq!(json_str(&value, "c"), None);
        assert_eq!(json_str(&value, "missing"), None);
    }

    #[test]
    fn test_json_numeric_accessors() {
        let value = json!({"lat": 37.4, "offset": -10800, "flag": true});
        assert_eq!(json_f64(&value, "lat"), Some(37.4));
        assert_eq!(json_i64(&value, "offset"), Some(-10800));
        assert_eq!(json_bool(&value, "flag"), Some(true));
        assert_eq!(json_f64(&value, "missing"), None);
    }
}
