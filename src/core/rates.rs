use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::CalcError;
use super::options::DuplicateRatePolicy;
use super::types::ExchangeRate;

impl FromStr for ExchangeRate {
    type Err = CalcError;

    /// Parse a `CODE:rate` entry, e.g. `"USD:0.987"`.
    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let trimmed = entry.trim();
        let (code, rate) = trimmed
            .split_once(':')
            .ok_or_else(|| CalcError::malformed_rate(entry, "expected CODE:rate"))?;

        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CalcError::malformed_rate(
                entry,
                "currency code must be three letters",
            ));
        }

        let rate = rate.trim();
        let rate = Decimal::from_str(rate)
            .or_else(|_| Decimal::from_scientific(rate))
            .map_err(|e| CalcError::malformed_rate(entry, format!("invalid rate '{rate}': {e}")))?;

        if rate <= Decimal::ZERO {
            return Err(CalcError::malformed_rate(entry, "rate must be positive"));
        }

        Ok(Self {
            code: code.to_string(),
            rate,
        })
    }
}

/// Currency code → rate, pivoted on the reference currency (rate 1).
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Parse raw `CODE:rate` entries.
    ///
    /// Malformed entries are errors, never skipped. Repeated codes follow
    /// `duplicates`.
    pub fn parse<S: AsRef<str>>(
        entries: &[S],
        duplicates: DuplicateRatePolicy,
    ) -> Result<Self, CalcError> {
        let rates = entries
            .iter()
            .map(|e| e.as_ref().parse::<ExchangeRate>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rates(rates, duplicates)
    }

    /// Build a table from already parsed entries.
    pub fn from_rates(
        rates: impl IntoIterator<Item = ExchangeRate>,
        duplicates: DuplicateRatePolicy,
    ) -> Result<Self, CalcError> {
        let mut table = BTreeMap::new();
        for ExchangeRate { code, rate } in rates {
            if let Some(previous) = table.get(&code) {
                match duplicates {
                    DuplicateRatePolicy::Reject => return Err(CalcError::DuplicateRate(code)),
                    DuplicateRatePolicy::LastWins => {
                        log::warn!("exchange rate for {code} given twice, {previous} replaced by {rate}");
                    }
                }
            }
            table.insert(code, rate);
        }
        Ok(Self { rates: table })
    }

    /// Rate of `code`, if present.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// The currency whose rate is exactly 1.
    ///
    /// If several qualify, the alphabetically first code is returned.
    pub fn reference_currency(&self) -> Option<&str> {
        self.rates
            .iter()
            .find(|(_, rate)| **rate == dec!(1))
            .map(|(code, _)| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Entries in currency code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

/// Split the comma-joined form of a rate list (`"EUR:1,USD:0.987"`),
/// as it arrives in a single query parameter.
pub fn parse_rate_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
