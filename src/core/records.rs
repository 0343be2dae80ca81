//! CSV decoding of invoice files.
//!
//! Columns are bound by header name, case-insensitively and ignoring
//! surrounding whitespace, so the column order in the file is free.
//! Values only lose leading whitespace; a trailing space is part of the value:
//!
//! ```text
//! Customer,Vat number,Document number,Type,Parent document,Currency,Total
//! Vendor 1,123456789,1000000257,1,,USD,400
//! Vendor 1,123456789,1000000260,2,1000000257,EUR,100
//! ```

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;

use super::error::CalcError;
use super::options::{CalcOptions, DocumentTypePolicy};
use super::types::{DocumentType, InvoiceRecord};

const COLUMN_COUNT: usize = 7;

/// A column of the invoice file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Column {
    Customer,
    VatNumber,
    DocumentNumber,
    Type,
    ParentDocument,
    Currency,
    Total,
}

impl Column {
    /// All columns, in schema order.
    const ALL: [Column; COLUMN_COUNT] = [
        Column::Customer,
        Column::VatNumber,
        Column::DocumentNumber,
        Column::Type,
        Column::ParentDocument,
        Column::Currency,
        Column::Total,
    ];

    /// Header name the column is bound to.
    fn header(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::VatNumber => "Vat number",
            Self::DocumentNumber => "Document number",
            Self::Type => "type",
            Self::ParentDocument => "Parent document",
            Self::Currency => "currency",
            Self::Total => "total",
        }
    }

    fn matches(&self, header: &str) -> bool {
        header
            .trim_start_matches('\u{feff}')
            .trim()
            .eq_ignore_ascii_case(self.header())
    }
}

/// Header positions resolved against the file's header row.
#[derive(Debug)]
struct Schema {
    positions: [usize; COLUMN_COUNT],
}

impl Schema {
    fn resolve(headers: &StringRecord) -> Result<Self, CalcError> {
        let mut positions = [0; COLUMN_COUNT];
        for (slot, column) in positions.iter_mut().zip(Column::ALL) {
            *slot = headers
                .iter()
                .position(|h| column.matches(h))
                .ok_or_else(|| {
                    CalcError::FileParseError(format!("missing column '{}'", column.header()))
                })?;
        }
        Ok(Self { positions })
    }

    fn field<'r>(&self, row: &'r StringRecord, column: Column) -> &'r str {
        row.get(self.positions[column as usize])
            .unwrap_or("")
            .trim_start()
    }

    fn decode(
        &self,
        row: &StringRecord,
        line: u64,
        unknown_types: DocumentTypePolicy,
    ) -> Result<InvoiceRecord, CalcError> {
        let raw_type = self.field(row, Column::Type);
        let code: i32 = raw_type
            .parse()
            .map_err(|e| row_error(line, format!("invalid type '{raw_type}': {e}")))?;

        let document_type = DocumentType::from_code(code);
        if let DocumentType::Other(code) = document_type {
            match unknown_types {
                DocumentTypePolicy::Reject => {
                    return Err(row_error(line, format!("unsupported document type {code}")));
                }
                DocumentTypePolicy::TreatAsInvoice => {
                    log::warn!("line {line}: unknown document type {code}, counted as invoice");
                }
            }
        }

        let raw_total = self.field(row, Column::Total);
        // Totals beyond 28 decimal places would be rounded, not stored.
        let total = Decimal::from_str_exact(raw_total)
            .or_else(|_| Decimal::from_scientific(raw_total))
            .map_err(|e| row_error(line, format!("invalid total '{raw_total}': {e}")))?;

        Ok(InvoiceRecord {
            customer: self.field(row, Column::Customer).to_string(),
            vat_number: self.field(row, Column::VatNumber).to_string(),
            document_number: self.field(row, Column::DocumentNumber).to_string(),
            document_type,
            parent_document: self.field(row, Column::ParentDocument).to_string(),
            currency: self.field(row, Column::Currency).to_string(),
            total,
        })
    }
}

fn row_error(line: u64, message: String) -> CalcError {
    CalcError::FileParseError(format!("line {line}: {message}"))
}

/// Decode an invoice file into records, in file order.
///
/// Any undecodable row rejects the whole file.
pub fn parse_records<R: Read>(
    reader: R,
    options: &CalcOptions,
) -> Result<Vec<InvoiceRecord>, CalcError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .from_reader(reader);

    let schema = Schema::resolve(rdr.headers()?)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map_or(0, |p| p.line());
        records.push(schema.decode(&row, line, options.unknown_document_types)?);
    }

    log::debug!("parsed {} invoice records", records.len());
    Ok(records)
}
