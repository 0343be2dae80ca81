use super::error::CalcError;
use super::options::CalcOptions;
use super::rates::RateTable;

/// Pre-flight checks on the raw request inputs.
///
/// Fails on the first problem, in this order: missing rates, empty file,
/// blank output currency, malformed rate list, no reference currency (rate
/// exactly 1), output currency missing from the rates. On success the parsed
/// rate table is returned so it is not parsed twice.
pub fn validate_inputs<S: AsRef<str>>(
    file: &[u8],
    exchange_rates: &[S],
    output_currency: &str,
    options: &CalcOptions,
) -> Result<RateTable, CalcError> {
    if exchange_rates.is_empty() {
        return Err(CalcError::MissingRates);
    }

    if file.is_empty() {
        return Err(CalcError::EmptyFile);
    }

    if output_currency.trim().is_empty() {
        return Err(CalcError::MissingTargetCurrency);
    }

    let rates = RateTable::parse(exchange_rates, options.duplicate_rates)?;

    let Some(reference) = rates.reference_currency() else {
        return Err(CalcError::NoReferenceCurrency);
    };

    if !rates.contains(output_currency) {
        return Err(CalcError::UnknownTargetCurrency(output_currency.to_string()));
    }

    log::debug!(
        "{} exchange rates, reference currency {reference}, output currency {output_currency}",
        rates.len()
    );
    Ok(rates)
}
