//! Core library for Argentine invoice field extraction.
//!
//! This crate provides:
//! - PDF text ingestion (lopdf + pdf-extract)
//! - Line normalization and the flattened-text view
//! - Rule-based field extraction (dates, invoice number, CUIT, CAE,
//!   amounts, vendor, payment terms, line-item discounts)
//! - Output key mapping for the two historical JSON vocabularies

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;
pub mod pipeline;

pub use error::{FacrError, PdfError, Result};
pub use extract::{DocumentText, ExtractionResult, FieldParser};
pub use models::config::FacrConfig;
pub use models::fields::{InvoiceFields, KeyStyle, OutputMapper};
pub use pdf::{DocumentReader, PdfTextExtractor};
pub use pipeline::{process_path, process_text};
