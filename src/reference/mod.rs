//! Static reference tables: country code to continent, display name,
//! currency, and canonical timezone.
//!
//! Pure lookup, no behavior. The enrichment stage consults these tables to
//! back-fill fields no provider supplied.

mod tables;

use crate::report::CurrencyInfo;
use tables::{CONTINENTS, COUNTRY_NAMES, CURRENCIES, TIMEZONES};

/// Looks up the continent display name for a country code.
pub fn continent_for(country_code: &str) -> Option<&'static str> {
    CONTINENTS
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, name)| *name)
}

/// Looks up the country display name for a country code.
pub fn country_name_for(country_code: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, name)| *name)
}

/// Looks up the currency block for a country code.
pub fn currency_for(country_code: &str) -> Option<CurrencyInfo> {
    CURRENCIES
        .iter()
        .find(|(code, _, _, _)| *code == country_code)
        .map(|(_, code, name, symbol)| CurrencyInfo {
            code: (*code).to_string(),
            name: (*name).to_string(),
            symbol: (*symbol).to_string(),
        })
}

/// Looks up the canonical IANA timezone for a country code.
pub fn timezone_for(country_code: &str) -> Option<&'static str> {
    TIMEZONES
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, tz)| *tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continent_lookup() {
        assert_eq!(continent_for("US"), Some("North America"));
        assert_eq!(continent_for("DE"), Some("Europe"));
        assert_eq!(continent_for("BR"), Some("South America"));
        assert_eq!(continent_for("JP"), Some("Asia"));
        assert_eq!(continent_for("AU"), Some("Oceania"));
        assert_eq!(continent_for("ZA"), Some("Africa"));
        assert_eq!(continent_for("XX"), None);
    }

    #[test]
    fn test_country_name_lookup() {
        assert_eq!(country_name_for("US"), Some("United States of America"));
        assert_eq!(country_name_for("DE"), Some("Germany"));
        assert_eq!(country_name_for("XX"), None);
    }

    #[test]
    fn test_currency_lookup() {
        let usd = currency_for("US").expect("US should have a currency entry");
        assert_eq!(usd.code, "USD");
        assert_eq!(usd.name, "US Dollar");
        assert_eq!(usd.symbol, "$");

        let eur = currency_for("DE").expect("DE should have a currency entry");
        assert_eq!(eur.code, "EUR");

        assert!(currency_for("XX").is_none());
    }

    #[test]
    fn test_timezone_lookup() {
        assert_eq!(timezone_for("DE"), Some("Europe/Berlin"));
        assert_eq!(timezone_for("US"), Some("America/New_York"));
        assert_eq!(timezone_for("IN"), Some("Asia/Kolkata"));
        assert_eq!(timezone_for("XX"), None);
    }

    #[test]
    fn test_all_timezones_are_parseable() {
        // Every canonical timezone in the table must be a valid IANA name,
        // otherwise time derivation would silently fail for that country.
        for (code, tz) in super::tables::TIMEZONES {
            assert!(
                tz.parse::<chrono_tz::Tz>().is_ok(),
                "timezone {} for {} is not a valid IANA name",
                tz,
                code
            );
        }
    }
}
