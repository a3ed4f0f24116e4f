//! Investment rate options offered to the calculator
//!
//! Presets are always available. Country-specific funds come from a catalog
//! file keyed by country name and are filtered by the selected currency.

mod loader;

pub use loader::{parse_rate, FundRecord};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Currencies the calculator can display amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Ngn,
    Kes,
    Zar,
    Ghs,
    Egp,
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ngn => "NGN",
            Currency::Kes => "KES",
            Currency::Zar => "ZAR",
            Currency::Ghs => "GHS",
            Currency::Egp => "EGP",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "NGN" => Ok(Currency::Ngn),
            "KES" => Ok(Currency::Kes),
            "ZAR" => Ok(Currency::Zar),
            "GHS" => Ok(Currency::Ghs),
            "EGP" => Ok(Currency::Egp),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(CatalogError::UnknownCurrency(s.to_string())),
        }
    }
}

/// A country with its own fund listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166 alpha-2 code
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Countries with catalog entries, in display order
pub const SUPPORTED_COUNTRIES: [Country; 5] = [
    Country { code: "NG", name: "Nigeria", flag: "🇳🇬" },
    Country { code: "KE", name: "Kenya", flag: "🇰🇪" },
    Country { code: "ZA", name: "South Africa", flag: "🇿🇦" },
    Country { code: "GH", name: "Ghana", flag: "🇬🇭" },
    Country { code: "EG", name: "Egypt", flag: "🇪🇬" },
];

impl Country {
    pub fn by_code(code: &str) -> Option<&'static Country> {
        SUPPORTED_COUNTRIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn by_name(name: &str) -> Option<&'static Country> {
        let target = normalize_key(name);
        SUPPORTED_COUNTRIES.iter().find(|c| normalize_key(c.name) == target)
    }

    /// Look up a country code, failing for anything unsupported
    pub fn parse_code(code: &str) -> Result<&'static Country> {
        Self::by_code(code).ok_or_else(|| CatalogError::UnknownCountry(code.to_string()))
    }
}

/// A named investment and its annual rate in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateOption {
    pub name: String,
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl RateOption {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
            flag: None,
        }
    }
}

/// Generic market benchmarks offered regardless of country
pub fn preset_options() -> Vec<RateOption> {
    vec![
        RateOption::new("S&P 500", 10.0),
        RateOption::new("Crypto Index", 20.0),
        RateOption::new("Fixed Deposit", 8.0),
    ]
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Fund listings keyed by country name
#[derive(Debug, Clone, Default)]
pub struct RateCatalog {
    funds: HashMap<String, Vec<FundRecord>>,
}

impl RateCatalog {
    pub fn new(funds: HashMap<String, Vec<FundRecord>>) -> Self {
        Self { funds }
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        Ok(Self::new(loader::load_funds(path)?))
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(Self::new(loader::load_funds_from_reader(reader)?))
    }

    /// Number of countries with listings
    pub fn country_count(&self) -> usize {
        self.funds.len()
    }

    /// Records for a country name, tolerating case and surrounding whitespace
    pub fn records_for(&self, country_name: &str) -> &[FundRecord] {
        if let Some(records) = self.funds.get(country_name) {
            return records;
        }
        let target = normalize_key(country_name);
        self.funds
            .iter()
            .find(|(k, _)| normalize_key(k) == target)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }

    fn options_for_country(&self, country: &Country, currency: Currency) -> Vec<RateOption> {
        self.records_for(country.name)
            .iter()
            .filter(|rec| rec.currency.trim().eq_ignore_ascii_case(currency.code()))
            .map(|rec| RateOption {
                name: rec.fund.clone(),
                rate: parse_rate(&rec.rate).unwrap_or(0.0),
                flag: Some(country.flag.to_string()),
            })
            .collect()
    }

    /// Rate options for a country code, or for every supported country when
    /// `country_code` is `None` or `"ALL"`. Unknown codes give no options.
    pub fn options(&self, country_code: Option<&str>, currency: Currency) -> Vec<RateOption> {
        match country_code {
            None => self.all_options(currency),
            Some(code) if code.eq_ignore_ascii_case("ALL") => self.all_options(currency),
            Some(code) => match Country::by_code(code) {
                Some(country) => self.options_for_country(country, currency),
                None => Vec::new(),
            },
        }
    }

    fn all_options(&self, currency: Currency) -> Vec<RateOption> {
        SUPPORTED_COUNTRIES
            .iter()
            .flat_map(|country| self.options_for_country(country, currency))
            .collect()
    }
}
