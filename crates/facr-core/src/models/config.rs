//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use super::fields::KeyStyle;

/// Main configuration for the facr pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacrConfig {
    /// PDF ingestion configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output mapping configuration.
    pub output: OutputConfig,
}

/// PDF ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum extracted-text length below which a warning is logged.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
        }
    }
}

/// Rule toggles for the extraction battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Scan the sales/payment-conditions block for a day-count term.
    pub scan_payment_terms: bool,

    /// Scan line-item tables for a discount (BON) column.
    pub scan_discount_column: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scan_payment_terms: true,
            scan_discount_column: true,
        }
    }
}

/// Output mapping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Key vocabulary for the JSON object.
    pub key_style: KeyStyle,

    /// Fixed warehouse code injected into every result.
    pub warehouse_code: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            key_style: KeyStyle::Full,
            warehouse_code: 1,
        }
    }
}

impl FacrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_all_rules() {
        let config = FacrConfig::default();
        assert!(config.extraction.scan_payment_terms);
        assert!(config.extraction.scan_discount_column);
        assert_eq!(config.output.key_style, KeyStyle::Full);
        assert_eq!(config.output.warehouse_code, 1);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: FacrConfig =
            serde_json::from_str(r#"{"output": {"key_style": "compact"}}"#).unwrap();
        assert_eq!(config.output.key_style, KeyStyle::Compact);
        assert_eq!(config.output.warehouse_code, 1);
        assert!(config.extraction.scan_payment_terms);
    }
}
