//! JSON-based fund catalog loader
//!
//! Loads fund listings keyed by country name from a JSON file

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::Result;

/// Raw catalog entry, e.g. `{"fund": "...", "rate": "23%", "currency": "NGN"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub fund: String,
    pub rate: String,
    pub currency: String,
}

/// Load all fund listings from a JSON file
pub fn load_funds(path: &Path) -> Result<HashMap<String, Vec<FundRecord>>> {
    let file = File::open(path)?;
    load_funds_from_reader(BufReader::new(file))
}

/// Load fund listings from any reader (e.g., string buffer, network stream)
pub fn load_funds_from_reader<R: Read>(reader: R) -> Result<HashMap<String, Vec<FundRecord>>> {
    let funds: HashMap<String, Vec<FundRecord>> = serde_json::from_reader(reader)?;
    log::debug!("Loaded fund catalog with {} countries", funds.len());
    Ok(funds)
}

static RATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("rate pattern is valid"));

/// Extract the first `<number>%` in a rate label, rounded to a whole percent
///
/// `"23%"` gives 23, `"7.6% p.a."` gives 8, a label with no percentage gives `None`.
pub fn parse_rate(label: &str) -> Option<f64> {
    RATE_RE.captures(label)?[1].parse::<f64>().ok().map(f64::round)
}
