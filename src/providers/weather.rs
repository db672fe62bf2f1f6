//! OpenWeatherMap current-conditions client.
//!
//! Optional source: without an API key the client is constructed keyless and
//! every fetch short-circuits to `None`. Values are formatted for display at
//! normalization time so the report layer never handles raw numbers.

use futures::future::BoxFuture;
use futures::FutureExt;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use super::http::{fetch_json, json_f64, json_i64};
use super::{ResponseCache, WeatherObservation, WeatherSource};

/// Client for the OpenWeatherMap current weather endpoint.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    cache: Arc<ResponseCache>,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Creates a client. With `api_key` of `None` every fetch returns `None`.
    pub fn new(
        client: reqwest::Client,
        cache: Arc<ResponseCache>,
        api_key: Option<String>,
    ) -> Self {
        OpenWeatherClient {
            client,
            cache,
            api_key,
        }
    }

    /// Formats the raw API payload into display strings.
    pub(crate) fn normalize(payload: &serde_json::Value) -> Option<WeatherObservation> {
        let main = payload.get("main")?;
        let temperature = json_f64(main, "temp")?;
        let description = payload
            .get("weather")
            .and_then(|w| w.as_array())
            .and_then(|arr| arr.first())
            .and_then(|entry| entry.get("description"))
            .and_then(|d| d.as_str())
            .map(title_case)
            .unwrap_or_else(|| "Unknown".to_string());
        let humidity = json_i64(main, "humidity").unwrap_or(0);
        let pressure = json_i64(main, "pressure").unwrap_or(0);
        let wind_speed = payload
            .get("wind")
            .and_then(|w| json_f64(w, "speed"))
            .unwrap_or(0.0);

        Some(WeatherObservation {
            temperature: format!("{temperature}°C"),
            description,
            humidity: format!("{humidity}%"),
            pressure: format!("{pressure} hPa"),
            wind_speed: format!("{wind_speed} m/s"),
        })
    }
}

/// Capitalizes the first letter of each word ("scattered clouds" becomes
/// "Scattered Clouds").
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl WeatherSource for OpenWeatherClient {
    fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        timeout: Duration,
    ) -> BoxFuture<'_, Option<WeatherObservation>> {
        async move {
            let api_key = match &self.api_key {
                Some(key) => key,
                None => {
                    debug!("weather lookup skipped: no API key configured");
                    return None;
                }
            };
            let url = format!(
                "http://api.openweathermap.org/data/2.5/weather?lat={latitude}&lon={longitude}&appid={api_key}&units=metric"
            );
            let payload = fetch_json(&self.client, &self.cache, &url, timeout).await?;
            Self::normalize(&payload)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_full_payload() {
        let payload = json!({
            "weather": [{"description": "scattered clouds"}],
            "main": {"temp": 21.3, "humidity": 64, "pressure": 1013},
            "wind": {"speed": 3.5}
        });

        let obs = OpenWeatherClient::normalize(&payload).expect("full payload");
        assert_eq!(obs.temperature, "21.3°C");
        assert_eq!(obs.description, "Scattered Clouds");
        assert_eq!(obs.humidity, "64%");
        assert_eq!(obs.pressure, "1013 hPa");
        assert_eq!(obs.wind_speed, "3.5 m/s");
    }

    #[test]
    fn test_normalize_requires_temperature() {
        let payload = json!({"main": {"humidity": 50}});
        assert!(OpenWeatherClient::normalize(&payload).is_none());
        let payload = json!({"cod": 401, "message": "Invalid API key"});
        assert!(OpenWeatherClient::normalize(&payload).is_none());
    }

    #[test]
    fn test_normalize_defaults_missing_fields() {
        let payload = json!({"main": {"temp": 5.0}});
        let obs = OpenWeatherClient::normalize(&payload).unwrap();
        assert_eq!(obs.description, "Unknown");
        assert_eq!(obs.humidity, "0%");
        assert_eq!(obs.wind_speed, "0 m/s");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("clear"), "Clear");
        assert_eq!(title_case(""), "");
    }

    #[tokio::test]
    async fn test_keyless_client_returns_none() {
        let client = OpenWeatherClient::new(
            reqwest::Client::new(),
            Arc::new(ResponseCache::new(10)),
            None,
        );
        let result = client.fetch(52.52, 13.40, Duration::from_secs(1)).await;
        assert!(result.is_none());
    }
}
