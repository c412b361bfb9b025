//! Data models for extraction results and configuration.

pub mod config;
pub mod fields;

pub use config::{ExtractionConfig, FacrConfig, OutputConfig, PdfConfig};
pub use fields::{InvoiceFields, KeyStyle, OutputMapper};
