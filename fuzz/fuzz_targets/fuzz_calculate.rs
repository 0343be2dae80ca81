#![no_main]

use libfuzzer_sys::fuzz_target;
use saldo::core::{CalcOptions, CalculationRequest, calculate, parse_rate_list};

fuzz_target!(|data: &[u8]| {
    // Fixed rates, arbitrary file: conversion and aggregation must not panic.
    let rates = parse_rate_list("EUR:1,USD:0.987,GBP:0.878,JPY:160.5");
    for currency in ["GBP", "JPY"] {
        let request = CalculationRequest {
            file: data,
            exchange_rates: &rates,
            output_currency: currency,
            customer_vat: None,
        };
        let _ = calculate(&request, &CalcOptions::default());
    }
});
