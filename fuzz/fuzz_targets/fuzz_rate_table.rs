#![no_main]

use libfuzzer_sys::fuzz_target;
use saldo::core::{DuplicateRatePolicy, RateTable, parse_rate_list};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let entries = parse_rate_list(s);
        if let Ok(table) = RateTable::parse(&entries, DuplicateRatePolicy::LastWins) {
            let _ = table.reference_currency();
        }
    }
});
