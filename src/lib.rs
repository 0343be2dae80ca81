//! # saldo
//!
//! Per-customer balances from a batch of invoices, credit notes and debit
//! notes, expressed in a single output currency.
//!
//! Exchange rates are pivoted on one reference currency (the entry whose rate
//! is exactly 1). Amounts in another currency are divided by their own rate
//! into the reference currency, rounded half-up to four places, then
//! multiplied by the output currency's rate.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use saldo::core::*;
//! use rust_decimal_macros::dec;
//!
//! let file = b"Customer,Vat number,Document number,Type,Parent document,Currency,Total\n\
//!              Vendor 1,123456789,1000000257,1,,USD,400\n\
//!              Vendor 2,987654321,1000000258,1,,EUR,900\n";
//! let rates = vec!["EUR:1".to_string(), "USD:0.987".into(), "GBP:0.878".into()];
//!
//! let result = calculate(
//!     &CalculationRequest {
//!         file,
//!         exchange_rates: &rates,
//!         output_currency: "GBP",
//!         customer_vat: Some("123456789"),
//!     },
//!     &CalcOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.customers.len(), 1);
//! assert_eq!(result.balance_of("Vendor 1"), Some(dec!(355.825743)));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Rate table, CSV parsing, conversion, aggregation |
//! | `json` | `CalculationResult::to_json` response rendering |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
