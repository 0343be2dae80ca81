use rust_decimal::{Decimal, RoundingStrategy};

use super::error::CalcError;
use super::options::DEFAULT_REFERENCE_SCALE;
use super::rates::RateTable;
use super::types::InvoiceRecord;

/// Converts record totals into the target currency and applies the
/// document sign.
///
/// Amounts in another currency take two hops: divided by their own rate into
/// the reference currency (rounded half-up to `reference_scale` places), then
/// multiplied by the target rate at full precision.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    rates: &'a RateTable,
    target: &'a str,
    reference_scale: u32,
}

impl<'a> Converter<'a> {
    pub fn new(rates: &'a RateTable, target: &'a str) -> Self {
        Self {
            rates,
            target,
            reference_scale: DEFAULT_REFERENCE_SCALE,
        }
    }

    /// Decimal places kept after the hop into the reference currency.
    pub fn with_reference_scale(mut self, scale: u32) -> Self {
        self.reference_scale = scale;
        self
    }

    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Signed amount of `record` in the target currency.
    ///
    /// Credit notes come out negative. Both currencies must be in the rate
    /// table unless they are equal.
    pub fn convert(&self, record: &InvoiceRecord) -> Result<Decimal, CalcError> {
        let magnitude = if record.currency == self.target {
            record.total
        } else {
            let reference = self.reference_amount(record.total, &record.currency)?;
            let target_rate = self.rate_of(self.target)?;
            reference.checked_mul(target_rate).ok_or_else(|| {
                CalcError::Arithmetic(format!(
                    "{reference} x {target_rate} overflows converting to {}",
                    self.target
                ))
            })?
        };

        if record.document_type.is_credit() {
            Ok(-magnitude)
        } else {
            Ok(magnitude)
        }
    }

    /// Express `amount` of `currency` in the reference currency.
    pub fn reference_amount(&self, amount: Decimal, currency: &str) -> Result<Decimal, CalcError> {
        let rate = self.rate_of(currency)?;
        let reference = amount.checked_div(rate).ok_or_else(|| {
            CalcError::Arithmetic(format!("{amount} / {rate} fails converting from {currency}"))
        })?;
        Ok(reference.round_dp_with_strategy(
            self.reference_scale,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    fn rate_of(&self, currency: &str) -> Result<Decimal, CalcError> {
        self.rates
            .rate(currency)
            .ok_or_else(|| CalcError::UnknownCurrency(currency.to_string()))
    }
}

/// Signed amount of `record` in `target`, with the default reference scale.
pub fn convert(
    record: &InvoiceRecord,
    target: &str,
    rates: &RateTable,
) -> Result<Decimal, CalcError> {
    Converter::new(rates, target).convert(record)
}
