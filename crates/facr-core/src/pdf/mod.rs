//! PDF ingestion module.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for document-to-text readers feeding the extraction core.
///
/// Contract: text comes back in original top-to-bottom order with page
/// boundaries flattened away; no page metadata reaches the extractor.
pub trait DocumentReader {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract the full document text.
    fn extract_text(&self) -> Result<String>;
}
