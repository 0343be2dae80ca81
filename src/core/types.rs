use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single `CODE:rate` entry of the exchange rate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Three-letter currency code (e.g. "USD").
    pub code: String,
    /// Units of this currency per one unit of the reference currency.
    pub rate: Decimal,
}

/// Kind of document a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// 1: Invoice, added to the balance.
    Invoice,
    /// 2: Credit note, subtracted from the balance.
    CreditNote,
    /// 3: Debit note, added to the balance.
    DebitNote,
    /// Any other code. Accepted or rejected depending on
    /// [`DocumentTypePolicy`](super::DocumentTypePolicy).
    Other(i32),
}

impl DocumentType {
    /// Numeric code as it appears in the `type` column.
    pub fn code(&self) -> i32 {
        match self {
            Self::Invoice => 1,
            Self::CreditNote => 2,
            Self::DebitNote => 3,
            Self::Other(code) => *code,
        }
    }

    /// Map a numeric code to a document type.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Invoice,
            2 => Self::CreditNote,
            3 => Self::DebitNote,
            other => Self::Other(other),
        }
    }

    /// Credit notes reduce the customer balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::CreditNote)
    }
}

/// One row of the invoice file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Customer name; the aggregation key.
    pub customer: String,
    /// Customer VAT number; the optional filter key.
    pub vat_number: String,
    /// Document number.
    pub document_number: String,
    /// Invoice, credit note or debit note.
    pub document_type: DocumentType,
    /// Document this one corrects, empty for plain invoices.
    pub parent_document: String,
    /// Three-letter currency code of `total`.
    pub currency: String,
    /// Document total as supplied (non-negative).
    pub total: Decimal,
}

/// Net balance of one customer in the target currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBalance {
    pub name: String,
    pub balance: Decimal,
}

/// Outcome of a calculation: one balance per customer, all in `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Customer balances, ordered by name.
    pub customers: Vec<CustomerBalance>,
    /// Target currency every balance is expressed in.
    pub currency: String,
}

impl CalculationResult {
    /// Look up the balance of a customer by name.
    pub fn balance_of(&self, name: &str) -> Option<Decimal> {
        self.customers
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.balance)
    }

    /// Render the response body, e.g.
    /// `{"customers":[{"name":"Vendor 1","balance":"1722.0257430"}],"currency":"GBP"}`.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
