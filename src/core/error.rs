use thiserror::Error;

/// Errors that can abort a balance calculation.
///
/// Every variant aborts the whole request; there is never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalcError {
    /// The exchange rate list is empty or absent.
    #[error("exchange rates not provided")]
    MissingRates,

    /// The uploaded file has no content.
    #[error("file must not be empty")]
    EmptyFile,

    /// The target (output) currency is blank.
    #[error("output currency must be provided")]
    MissingTargetCurrency,

    /// No rate in the table equals exactly 1.
    #[error("no default currency provided (one exchange rate must equal 1)")]
    NoReferenceCurrency,

    /// The target currency has no entry in the rate table.
    #[error("output currency '{0}' not found in exchange rates")]
    UnknownTargetCurrency(String),

    /// A rate entry is not of the form `CODE:rate`.
    #[error("malformed exchange rate '{entry}': {reason}")]
    MalformedRate { entry: String, reason: String },

    /// The same currency code appears twice and duplicates are rejected.
    #[error("duplicate exchange rate for currency '{0}'")]
    DuplicateRate(String),

    /// The invoice file could not be decoded.
    #[error("error parsing the file: {0}")]
    FileParseError(String),

    /// A record references a currency missing from the rate table.
    #[error("no exchange rate for currency '{0}'")]
    UnknownCurrency(String),

    /// Decimal overflow or division failure during conversion.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

impl CalcError {
    /// Whether the failure was caused by caller input.
    ///
    /// Transport layers map these to a 4xx-class response; the rest are
    /// internal failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::UnknownCurrency(_) | Self::Arithmetic(_))
    }

    pub(crate) fn malformed_rate(entry: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRate {
            entry: entry.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for CalcError {
    fn from(err: csv::Error) -> Self {
        Self::FileParseError(err.to_string())
    }
}
