//! Currency conversion against a fixed exchange-rate table
//!
//! Rates are static reference values, not live market data. Codes are matched
//! exactly (upper case); any pair that is not in the table, including other
//! spellings of a known code, converts at a rate of 1.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TravelGuideError;

/// Currencies with known exchange rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Jpy];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = TravelGuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            other => Err(TravelGuideError::validation(format!(
                "Unsupported currency: {other}"
            ))),
        }
    }
}

/// Units of `to` received for one unit of `from`
#[must_use]
pub fn exchange_rate(from: Currency, to: Currency) -> f64 {
    use Currency::{Eur, Gbp, Jpy, Usd};

    match (from, to) {
        (Usd, Eur) => 0.85,
        (Usd, Gbp) => 0.73,
        (Usd, Jpy) => 110.0,
        (Eur, Usd) => 1.18,
        (Eur, Gbp) => 0.86,
        (Eur, Jpy) => 129.0,
        (Gbp, Usd) => 1.37,
        (Gbp, Eur) => 1.16,
        (Gbp, Jpy) => 150.0,
        (Jpy, Usd) => 0.009,
        (Jpy, Eur) => 0.0078,
        (Jpy, Gbp) => 0.0067,
        _ => 1.0,
    }
}

/// Rate for two currency codes; unsupported codes fall back to 1
#[must_use]
pub fn rate_for_codes(from: &str, to: &str) -> f64 {
    match (from.parse::<Currency>(), to.parse::<Currency>()) {
        (Ok(from), Ok(to)) => exchange_rate(from, to),
        _ => 1.0,
    }
}

/// Result of a conversion, shaped like the `/api/currency` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub original_amount: f64,
    pub converted_amount: f64,
    pub exchange_rate: f64,
}

/// Convert `amount` from one currency code to another
#[must_use]
pub fn convert(from: &str, to: &str, amount: f64) -> Conversion {
    let rate = rate_for_codes(from, to);
    Conversion {
        from: from.to_string(),
        to: to.to_string(),
        original_amount: amount,
        converted_amount: amount * rate,
        exchange_rate: rate,
    }
}
