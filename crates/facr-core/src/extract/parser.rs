//! Field parser orchestrating the extraction rule battery.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::fields::InvoiceFields;

use super::rules::{
    amounts::extract_total, bonus::extract_discount, cae::extract_cae,
    conditions::extract_payment_terms, cuit::extract_cuit, dates::extract_dates,
    invoice_number::extract_invoice_number, vendor::extract_vendor,
};
use super::text::DocumentText;

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub fields: InvoiceFields,
    /// One entry per field the battery could not extract.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based field parser.
///
/// Stateless and synchronous: each call operates only on its own input and
/// output, so concurrent invocations need no locking. The rules run in a
/// fixed order and each writes its field at most once.
pub struct FieldParser {
    scan_payment_terms: bool,
    scan_discount_column: bool,
}

impl FieldParser {
    /// Create a parser with every rule enabled.
    pub fn new() -> Self {
        Self {
            scan_payment_terms: true,
            scan_discount_column: true,
        }
    }

    /// Build a parser from rule toggles.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            scan_payment_terms: config.scan_payment_terms,
            scan_discount_column: config.scan_discount_column,
        }
    }

    /// Toggle the sales-conditions rule.
    pub fn with_payment_terms(mut self, enabled: bool) -> Self {
        self.scan_payment_terms = enabled;
        self
    }

    /// Toggle the discount-column rule.
    pub fn with_discount_column(mut self, enabled: bool) -> Self {
        self.scan_discount_column = enabled;
        self
    }

    /// Run the full rule battery over one document.
    pub fn parse(&self, doc: &DocumentText) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("parsing document with {} lines", doc.lines().len());

        let flat = doc.flat();
        let dates = extract_dates(flat);

        let mut fields = InvoiceFields {
            issue_date: dates.issue,
            due_date: dates.due,
            invoice_number: extract_invoice_number(flat),
            cuit: extract_cuit(flat),
            cae: extract_cae(flat),
            vendor: extract_vendor(doc.lines()),
            total: extract_total(flat),
            ..InvoiceFields::default()
        };

        if self.scan_payment_terms {
            fields.payment_terms = extract_payment_terms(doc.lines());
        }
        if self.scan_discount_column {
            fields.discount = extract_discount(doc.raw_lines());
        }

        for (name, missing) in [
            ("issue date", fields.issue_date.is_none()),
            ("invoice number", fields.invoice_number.is_none()),
            ("CUIT", fields.cuit.is_none()),
            ("CAE", fields.cae.is_none()),
            ("total", fields.total.is_none()),
        ] {
            if missing {
                warnings.push(format!("could not extract {}", name));
            }
        }

        debug!(
            "extracted invoice {} with {} warnings",
            fields.invoice_number.as_deref().unwrap_or("<unknown>"),
            warnings.len()
        );

        ExtractionResult {
            fields,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Convenience wrapper: split and normalize raw text first.
    pub fn parse_text(&self, text: &str) -> ExtractionResult {
        self.parse(&DocumentText::from_text(text))
    }
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new()
    }
}
