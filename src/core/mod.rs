//! Balance calculation engine.
//!
//! Validates the raw request, parses the rate table and the invoice file,
//! converts every record into the output currency through the reference
//! currency and folds the signed amounts into per-customer balances.

mod aggregate;
mod calculate;
mod convert;
mod error;
mod options;
mod rates;
mod records;
mod types;
mod validation;

pub use aggregate::*;
pub use calculate::*;
pub use convert::*;
pub use error::*;
pub use options::*;
pub use rates::*;
pub use records::parse_records;
pub use types::*;
pub use validation::*;
