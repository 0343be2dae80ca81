#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic. Errors are fine, panics are bugs.
    let _ = saldo::core::parse_records(data, &saldo::core::CalcOptions::default());
});
