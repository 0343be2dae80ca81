//! Edge cases of file decoding, rate parsing and aggregation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use saldo::core::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const HEADER: &str = "Customer,Vat number,Document number,Type,Parent document,Currency,Total\r\n";

fn calc(file: &str, rates: &str, currency: &str) -> Result<CalculationResult, CalcError> {
    calc_with(file, rates, currency, &CalcOptions::default())
}

fn calc_with(
    file: &str,
    rates: &str,
    currency: &str,
    options: &CalcOptions,
) -> Result<CalculationResult, CalcError> {
    let rates = parse_rate_list(rates);
    calculate(
        &CalculationRequest {
            file: file.as_bytes(),
            exchange_rates: &rates,
            output_currency: currency,
            customer_vat: None,
        },
        options,
    )
}

// ---------------------------------------------------------------------------
// File decoding
// ---------------------------------------------------------------------------

#[test]
fn crlf_line_endings() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,10\r\nVendor 1,1,2,1,,EUR,5\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(15)));
}

#[test]
fn quoted_names_with_commas() {
    let file = format!("{HEADER}\"Vendor, Ltd.\",1,1,1,,EUR,10\r\n\"Vendor \"\"X\"\"\",2,2,1,,EUR,1\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.balance_of("Vendor, Ltd."), Some(dec!(10)));
    assert_eq!(result.balance_of("Vendor \"X\""), Some(dec!(1)));
}

#[test]
fn blank_lines_are_skipped() {
    let file = format!("{HEADER}\r\nVendor 1,1,1,1,,EUR,10\r\n\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.customers.len(), 1);
}

#[test]
fn header_only_file_gives_empty_result() {
    let result = calc(HEADER, "EUR:1", "EUR").unwrap();
    assert!(result.customers.is_empty());
    assert_eq!(result.currency, "EUR");
}

#[test]
fn whitespace_only_file_is_a_parse_error() {
    assert!(matches!(
        calc("   \n", "EUR:1", "EUR"),
        Err(CalcError::FileParseError(_))
    ));
}

#[test]
fn empty_file() {
    assert_eq!(calc("", "EUR:1", "EUR").unwrap_err(), CalcError::EmptyFile);
}

#[test]
fn customer_names_are_case_sensitive() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,10\r\nVENDOR 1,1,2,1,,EUR,5\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.customers.len(), 2);
}

#[test]
fn trailing_spaces_keep_customers_apart() {
    let file = format!("{HEADER}Vendor 1 ,123 ,1,1,,EUR,10\r\nVendor 1,123,2,1,,EUR,5\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.customers.len(), 2);
    assert_eq!(result.balance_of("Vendor 1 "), Some(dec!(10)));
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(5)));
}

#[test]
fn vat_filter_does_not_match_trailing_space() {
    let file = format!("{HEADER}Vendor 1 ,123 ,1,1,,EUR,10\r\nVendor 1,123,2,1,,EUR,5\r\n");
    let rates = parse_rate_list("EUR:1");
    let result = calculate(
        &CalculationRequest {
            file: file.as_bytes(),
            exchange_rates: &rates,
            output_currency: "EUR",
            customer_vat: Some("123"),
        },
        &CalcOptions::default(),
    )
    .unwrap();
    assert_eq!(result.customers.len(), 1);
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(5)));
}

#[test]
fn leading_spaces_are_ignored() {
    let file = format!("{HEADER}  Vendor 1,  123,1,1,,  EUR,  10\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(10)));
}

#[test]
fn total_with_trailing_space_is_a_parse_error() {
    let file = format!("{HEADER}Vendor 1,123,1,1,,EUR,10 \r\n");
    assert!(matches!(
        calc(&file, "EUR:1", "EUR"),
        Err(CalcError::FileParseError(_))
    ));
}

#[test]
fn total_finer_than_28_places_is_a_parse_error() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,0.00000000000000000000000000000001\r\n");
    assert!(matches!(
        calc(&file, "EUR:1", "EUR"),
        Err(CalcError::FileParseError(_))
    ));
}

#[test]
fn high_precision_totals_are_kept() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,0.123456789\r\nVendor 1,1,2,1,,EUR,0.000000001\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(0.12345679)));
}

#[test]
fn many_rows() {
    let mut file = HEADER.to_string();
    for i in 0..10_000 {
        file.push_str(&format!("Vendor {},1,{i},1,,USD,0.01\r\n", i % 10));
    }
    let result = calc(&file, "EUR:1,USD:0.987", "USD").unwrap();
    assert_eq!(result.customers.len(), 10);
    for customer in &result.customers {
        assert_eq!(customer.balance, dec!(10));
    }
}

#[test]
fn negative_totals_pass_through() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,-10\r\nVendor 1,1,2,2,,EUR,-4\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(-6)));
}

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

#[test]
fn reference_rate_with_trailing_zeros() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,USD,98.7\r\n");
    let result = calc(&file, "EUR:1.000,USD:0.987", "EUR").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(100)));
}

#[test]
fn zero_rate_is_malformed() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,10\r\n");
    assert!(matches!(
        calc(&file, "EUR:1,USD:0", "EUR"),
        Err(CalcError::MalformedRate { .. })
    ));
}

#[test]
fn reference_currency_other_than_eur() {
    // USD is the pivot; EUR quoted against it.
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,100\r\n");
    let result = calc(&file, "USD:1,EUR:0.5,GBP:0.4", "GBP").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(80)));
}

#[test]
fn duplicate_rates_last_wins_by_default() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,100\r\n");
    let result = calc(&file, "EUR:1,USD:0.5,USD:2", "USD").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(200)));
}

#[test]
fn duplicate_rates_rejected_on_request() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,100\r\n");
    let options = CalcOptionsBuilder::new()
        .duplicate_rates(DuplicateRatePolicy::Reject)
        .build();
    assert_eq!(
        calc_with(&file, "EUR:1,USD:0.5,USD:2", "USD", &options).unwrap_err(),
        CalcError::DuplicateRate("USD".into())
    );
}

#[test]
fn reference_scale_option() {
    // 1 / 3 = 0.3333... in the reference currency
    let file = format!("{HEADER}Vendor 1,1,1,1,,XXX,1\r\n");
    let default = calc(&file, "EUR:1,XXX:3,YYY:3", "YYY").unwrap();
    assert_eq!(default.balance_of("Vendor 1"), Some(dec!(0.9999)));

    let options = CalcOptionsBuilder::new().reference_scale(8).build();
    let precise = calc_with(&file, "EUR:1,XXX:3,YYY:3", "YYY", &options).unwrap();
    assert_eq!(precise.balance_of("Vendor 1"), Some(dec!(0.99999999)));
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[test]
fn credit_note_larger_than_invoices_goes_negative() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,10\r\nVendor 1,1,2,2,1,EUR,25\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(dec!(-15)));
}

#[test]
fn netted_to_zero_customer_is_listed() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,EUR,10\r\nVendor 1,1,2,2,1,EUR,10\r\n");
    let result = calc(&file, "EUR:1", "EUR").unwrap();
    assert_eq!(result.balance_of("Vendor 1"), Some(Decimal::ZERO));
}

#[test]
fn results_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CalculationResult>();
    assert_send_sync::<RateTable>();
    assert_send_sync::<CalcError>();
    assert_send_sync::<CalcOptions>();
}

#[test]
fn concurrent_requests() {
    let file = format!("{HEADER}Vendor 1,1,1,1,,USD,400\r\n");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let file = file.clone();
            std::thread::spawn(move || calc(&file, "EUR:1,USD:0.987,GBP:0.878", "GBP"))
        })
        .collect();
    for handle in handles {
        let result = handle.join().unwrap().unwrap();
        assert_eq!(result.balance_of("Vendor 1"), Some(dec!(355.825743)));
    }
}
