//! ISO 3166-1 country lookup.
//!
//! A code is tried as alpha-2/alpha-3 first (case-insensitive), then as a
//! numeric code. Indices over the bundled table are built on first use.

mod table;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// One ISO 3166-1 entry with its ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: u16,
    /// `None` for territories without a currency of their own (e.g. Antarctica).
    pub currency: Option<&'static str>,
}

static BY_ALPHA: Lazy<HashMap<&'static str, &'static CountryRecord>> = Lazy::new(|| {
    table::COUNTRIES
        .iter()
        .flat_map(|c| [(c.alpha2, c), (c.alpha3, c)])
        .collect()
});

static BY_NUMERIC: Lazy<HashMap<u16, &'static CountryRecord>> =
    Lazy::new(|| table::COUNTRIES.iter().map(|c| (c.numeric, c)).collect());

/// Every bundled country, in alpha-2 order.
pub fn all() -> &'static [CountryRecord] {
    table::COUNTRIES
}

/// Match an alpha-2 or alpha-3 code, ignoring case.
pub fn by_alpha_code(code: &str) -> Option<&'static CountryRecord> {
    if !(2..=3).contains(&code.len()) {
        return None;
    }
    BY_ALPHA.get(code.to_ascii_uppercase().as_str()).copied()
}

pub fn by_numeric_code(numeric: i32) -> Option<&'static CountryRecord> {
    let numeric = u16::try_from(numeric).ok()?;
    BY_NUMERIC.get(&numeric).copied()
}

/// Resolve an alpha-2, alpha-3 or numeric code.
///
/// Numeric strings are parsed as `i32`, so `"392"`, `"0392"` and `"+392"`
/// all resolve to Japan.
pub fn lookup(code: &str) -> Option<&'static CountryRecord> {
    by_alpha_code(code).or_else(|| code.parse::<i32>().ok().and_then(by_numeric_code))
}
