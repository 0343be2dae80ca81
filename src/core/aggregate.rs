use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::convert::Converter;
use super::error::CalcError;
use super::rates::RateTable;
use super::types::{CustomerBalance, InvoiceRecord};

/// Customer name → net balance in the target currency.
pub type Balances = BTreeMap<String, Decimal>;

/// Folds records into per-customer balances.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    converter: Converter<'a>,
    vat_filter: Option<&'a str>,
}

impl<'a> Aggregator<'a> {
    pub fn new(converter: Converter<'a>) -> Self {
        Self {
            converter,
            vat_filter: None,
        }
    }

    /// Keep only records with exactly this VAT number. Blank means no filter.
    pub fn vat_filter(mut self, vat: Option<&'a str>) -> Self {
        self.vat_filter = vat.filter(|v| !v.trim().is_empty());
        self
    }

    /// Whether `record` passes the VAT filter.
    pub fn retains(&self, record: &InvoiceRecord) -> bool {
        self.vat_filter.is_none_or(|vat| record.vat_number == vat)
    }

    /// Sum the signed, converted totals per customer.
    ///
    /// Every customer with at least one retained record is present, even if
    /// the balance nets to zero.
    pub fn aggregate(&self, records: &[InvoiceRecord]) -> Result<Balances, CalcError> {
        let mut balances = Balances::new();
        for record in records.iter().filter(|r| self.retains(r)) {
            let amount = self.converter.convert(record)?;
            let balance = balances
                .entry(record.customer.clone())
                .or_insert(Decimal::ZERO);
            *balance = balance.checked_add(amount).ok_or_else(|| {
                CalcError::Arithmetic(format!("balance of '{}' overflows", record.customer))
            })?;
        }
        Ok(balances)
    }
}

/// Per-customer balances of `records` in `target`, optionally restricted to
/// one VAT number.
pub fn aggregate(
    records: &[InvoiceRecord],
    target: &str,
    rates: &RateTable,
    vat_filter: Option<&str>,
) -> Result<Balances, CalcError> {
    Aggregator::new(Converter::new(rates, target))
        .vat_filter(vat_filter)
        .aggregate(records)
}

/// Flatten balances into the output list, ordered by customer name.
pub fn into_customer_balances(balances: Balances) -> Vec<CustomerBalance> {
    balances
        .into_iter()
        .map(|(name, balance)| CustomerBalance { name, balance })
        .collect()
}
