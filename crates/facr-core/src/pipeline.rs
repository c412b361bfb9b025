//! End-to-end processing: document path to extraction result.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{PdfError, Result};
use crate::extract::{DocumentText, ExtractionResult, FieldParser};
use crate::models::config::FacrConfig;
use crate::pdf::{DocumentReader, PdfTextExtractor};

/// Process one invoice PDF from disk.
///
/// The document handle is acquired, fully read and released before this
/// returns. A missing or unreadable file is the only hard failure;
/// extraction itself never fails.
pub fn process_path(path: &Path, config: &FacrConfig) -> Result<ExtractionResult> {
    if !path.exists() {
        return Err(PdfError::NotFound(path.to_path_buf()).into());
    }

    let data = fs::read(path)?;
    let mut reader = PdfTextExtractor::new();
    reader.load(&data)?;
    let text = reader.extract_text()?;

    if text.trim().len() < config.pdf.min_text_length {
        warn!(
            "extracted only {} characters from {}",
            text.trim().len(),
            path.display()
        );
    }

    Ok(process_text(&text, config))
}

/// Run the rule battery over already-extracted text.
pub fn process_text(text: &str, config: &FacrConfig) -> ExtractionResult {
    let doc = DocumentText::from_text(text);
    FieldParser::from_config(&config.extraction).parse(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FacrError;

    #[test]
    fn missing_file_is_the_only_hard_failure() {
        let err = process_path(Path::new("/no/such/invoice.pdf"), &FacrConfig::default())
            .unwrap_err();
        assert!(matches!(err, FacrError::Pdf(PdfError::NotFound(_))));
    }

    #[test]
    fn text_processing_never_fails() {
        let result = process_text("", &FacrConfig::default());
        assert!(result.fields.vendor.is_none());
        assert!(result.fields.total.is_none());
    }

    #[test]
    fn config_toggles_reach_the_parser() {
        let mut config = FacrConfig::default();
        config.extraction.scan_payment_terms = false;

        let result = process_text(
            "Condiciones de Venta: pago a 30 días\nTOTAL 121,00\n",
            &config,
        );
        assert!(result.fields.payment_terms.is_none());
    }
}
