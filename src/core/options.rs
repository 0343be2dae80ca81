//! Calculation options.

use serde::{Deserialize, Serialize};

/// What to do when the rate list names the same currency twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicateRatePolicy {
    /// The later entry replaces the earlier one (logged as a warning).
    #[default]
    LastWins,
    /// Fail with [`CalcError::DuplicateRate`](super::CalcError::DuplicateRate).
    Reject,
}

/// What to do with document type codes other than 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentTypePolicy {
    /// Add the amount like an invoice (logged as a warning).
    #[default]
    TreatAsInvoice,
    /// Reject the file with a parse error naming the offending line.
    Reject,
}

/// Tunables for a balance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcOptions {
    /// Decimal places kept for the intermediate reference-currency amount.
    pub reference_scale: u32,
    /// Handling of repeated currency codes in the rate list.
    pub duplicate_rates: DuplicateRatePolicy,
    /// Handling of unknown document type codes.
    pub unknown_document_types: DocumentTypePolicy,
    /// CSV field delimiter.
    pub delimiter: u8,
}

/// Scale of the reference-currency hop: 4 decimal places, half-up.
pub const DEFAULT_REFERENCE_SCALE: u32 = 4;

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            reference_scale: DEFAULT_REFERENCE_SCALE,
            duplicate_rates: DuplicateRatePolicy::default(),
            unknown_document_types: DocumentTypePolicy::default(),
            delimiter: b',',
        }
    }
}

/// Builder for [`CalcOptions`].
///
/// # Example
///
/// ```
/// use saldo::core::{CalcOptionsBuilder, DuplicateRatePolicy};
///
/// let options = CalcOptionsBuilder::new()
///     .duplicate_rates(DuplicateRatePolicy::Reject)
///     .delimiter(b';')
///     .build();
/// assert_eq!(options.reference_scale, 4);
/// ```
#[derive(Debug, Default)]
pub struct CalcOptionsBuilder {
    options: CalcOptions,
}

impl CalcOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_scale(mut self, scale: u32) -> Self {
        self.options.reference_scale = scale;
        self
    }

    pub fn duplicate_rates(mut self, policy: DuplicateRatePolicy) -> Self {
        self.options.duplicate_rates = policy;
        self
    }

    pub fn unknown_document_types(mut self, policy: DocumentTypePolicy) -> Self {
        self.options.unknown_document_types = policy;
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    pub fn build(self) -> CalcOptions {
        self.options
    }
}
