//! Error types for the facr-core library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the facr library.
#[derive(Error, Debug)]
pub enum FacrError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF ingestion.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The source document does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the facr library.
pub type Result<T> = std::result::Result<T, FacrError>;
