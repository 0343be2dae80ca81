//! Sum an invoice file into per-customer balances.
//!
//! ```text
//! cargo run --example sum_invoices --features json -- \
//!     tests/fixtures/invoices.csv EUR:1,USD:0.987,GBP:0.878 GBP [VAT]
//! ```

use saldo::core::*;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: sum_invoices <file.csv> <CODE:rate,...> <output currency> [customer VAT]");
        std::process::exit(2);
    }

    let file = match std::fs::read(&args[0]) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("cannot read {}: {e}", args[0]);
            std::process::exit(1);
        }
    };
    let rates = parse_rate_list(&args[1]);

    let request = CalculationRequest {
        file: &file,
        exchange_rates: &rates,
        output_currency: &args[2],
        customer_vat: args.get(3).map(String::as_str),
    };

    match calculate(&request, &CalcOptions::default()) {
        Ok(result) => match result.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("cannot render result: {e}"),
        },
        Err(e) if e.is_client_error() => {
            eprintln!("rejected: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("failed: {e}");
            std::process::exit(1);
        }
    }
}
