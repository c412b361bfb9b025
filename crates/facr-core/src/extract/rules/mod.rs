//! Rule-based field extractors for Argentine invoices.
//!
//! Each rule is independent, writes at most one field, and silently yields
//! nothing on non-match. Rules never fail.

pub mod amounts;
pub mod bonus;
pub mod cae;
pub mod conditions;
pub mod cuit;
pub mod dates;
pub mod invoice_number;
pub mod patterns;
pub mod vendor;

pub use amounts::{extract_total, parse_amount, AmountExtractor};
pub use bonus::extract_discount;
pub use cae::{extract_cae, CaeExtractor};
pub use conditions::extract_payment_terms;
pub use cuit::{extract_cuit, CuitExtractor};
pub use dates::{extract_dates, DocumentDates, DueDateExtractor, IssueDateExtractor};
pub use invoice_number::{extract_invoice_number, InvoiceNumberExtractor};
pub use vendor::extract_vendor;

/// Trait for field extractors over flattened document text.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text. First match wins.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
