//! CAE (electronic authorization code) extraction.

use super::patterns::CAE;
use super::FieldExtractor;

/// CAE extractor: "CAE" or "CAE NRO" followed by 10 or more digits.
pub struct CaeExtractor;

impl CaeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CaeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CaeExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CAE.captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// First CAE in the text, if any.
pub fn extract_cae(text: &str) -> Option<String> {
    CaeExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_labeled_code() {
        assert_eq!(
            extract_cae("CAE: 71234567890123"),
            Some("71234567890123".to_string())
        );
    }

    #[test]
    fn nro_variant_matches() {
        assert_eq!(
            extract_cae("CAE NRO 61234567890"),
            Some("61234567890".to_string())
        );
    }

    #[test]
    fn label_is_case_insensitive() {
        assert_eq!(
            extract_cae("cae nro: 12345678901"),
            Some("12345678901".to_string())
        );
    }

    #[test]
    fn nine_digits_are_not_enough() {
        assert_eq!(extract_cae("CAE: 123456789"), None);
    }

    #[test]
    fn due_date_after_cae_label_does_not_match() {
        assert_eq!(extract_cae("Fecha Vto. CAE: 15/03/2024"), None);
    }
}
