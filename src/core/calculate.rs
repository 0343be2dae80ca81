use super::aggregate::{Aggregator, into_customer_balances};
use super::convert::Converter;
use super::error::CalcError;
use super::options::CalcOptions;
use super::records::parse_records;
use super::types::CalculationResult;
use super::validation::validate_inputs;

/// Raw inputs of one balance calculation, as received from the caller.
#[derive(Debug, Clone, Copy)]
pub struct CalculationRequest<'a> {
    /// CSV invoice file content.
    pub file: &'a [u8],
    /// Exchange rates as `CODE:rate` entries; one rate must equal 1.
    pub exchange_rates: &'a [String],
    /// Currency every balance is expressed in.
    pub output_currency: &'a str,
    /// Restrict the calculation to records with this VAT number.
    pub customer_vat: Option<&'a str>,
}

/// Compute per-customer balances for one request.
///
/// ```
/// use saldo::core::*;
///
/// let file = b"Customer,Vat number,Document number,Type,Parent document,Currency,Total\n\
///              Vendor 1,123456789,1000000257,1,,EUR,100\n\
///              Vendor 1,123456789,1000000258,2,1000000257,EUR,40\n";
/// let rates = parse_rate_list("EUR:1,GBP:0.878");
/// let request = CalculationRequest {
///     file,
///     exchange_rates: &rates,
///     output_currency: "GBP",
///     customer_vat: None,
/// };
///
/// let result = calculate(&request, &CalcOptions::default()).unwrap();
/// assert_eq!(result.currency, "GBP");
/// assert_eq!(result.balance_of("Vendor 1"), Some(rust_decimal_macros::dec!(52.68)));
/// ```
pub fn calculate(
    request: &CalculationRequest<'_>,
    options: &CalcOptions,
) -> Result<CalculationResult, CalcError> {
    let rates = validate_inputs(
        request.file,
        request.exchange_rates,
        request.output_currency,
        options,
    )?;

    let records = parse_records(request.file, options)?;

    let converter = Converter::new(&rates, request.output_currency)
        .with_reference_scale(options.reference_scale);
    let balances = Aggregator::new(converter)
        .vat_filter(request.customer_vat)
        .aggregate(&records)?;

    log::debug!(
        "{} records folded into {} customer balances in {}",
        records.len(),
        balances.len(),
        request.output_currency
    );

    Ok(CalculationResult {
        customers: into_customer_balances(balances),
        currency: request.output_currency.to_string(),
    })
}
