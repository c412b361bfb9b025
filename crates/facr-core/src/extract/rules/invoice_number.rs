//! Invoice number extraction.

use super::patterns::INVOICE_NUMBER;
use super::FieldExtractor;

/// Invoice-number extractor ("Nº 0003 - 00010171").
///
/// The point-of-sale and sequence groups are rejoined with a single hyphen
/// regardless of the spacing on the page.
pub struct InvoiceNumberExtractor;

impl InvoiceNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvoiceNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for InvoiceNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        INVOICE_NUMBER
            .captures_iter(text)
            .map(|caps| format!("{}-{}", &caps[1], &caps[2]))
            .collect()
    }
}

/// First invoice number in the text, if any.
pub fn extract_invoice_number(text: &str) -> Option<String> {
    InvoiceNumberExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_groups_with_a_single_hyphen() {
        assert_eq!(
            extract_invoice_number("Nº 0003 - 00010171"),
            Some("0003-00010171".to_string())
        );
    }

    #[test]
    fn accepts_degree_sign_and_tight_spacing() {
        assert_eq!(
            extract_invoice_number("N° 0001-00000042"),
            Some("0001-00000042".to_string())
        );
    }

    #[test]
    fn ordinal_sign_is_optional() {
        assert_eq!(
            extract_invoice_number("N 0002 - 123456"),
            Some("0002-123456".to_string())
        );
    }

    #[test]
    fn sequence_must_have_six_to_eight_digits() {
        assert_eq!(extract_invoice_number("Nº 0003 - 12345"), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            extract_invoice_number("Nº 0003 - 00010171 y Nº 0004 - 00010172"),
            Some("0003-00010171".to_string())
        );
    }
}
