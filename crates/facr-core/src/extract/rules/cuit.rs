//! CUIT (tax identifier) extraction.
//!
//! Lexical extraction only: the 11-13 character span after the label is
//! taken verbatim, hyphens included. No checksum or registry validation.

use super::patterns::CUIT;
use super::FieldExtractor;

/// CUIT extractor. The first occurrence is the issuer's.
pub struct CuitExtractor;

impl CuitExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CuitExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CuitExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CUIT.captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// First labeled CUIT in the text, if any.
pub fn extract_cuit(text: &str) -> Option<String> {
    CuitExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hyphens_are_preserved() {
        assert_eq!(
            extract_cuit("CUIT: 30-11223344-5"),
            Some("30-11223344-5".to_string())
        );
    }

    #[test]
    fn plain_digit_run_matches() {
        assert_eq!(
            extract_cuit("CUIT 30112233445"),
            Some("30112233445".to_string())
        );
    }

    #[test]
    fn unlabeled_number_is_ignored() {
        assert_eq!(extract_cuit("30-11223344-5"), None);
    }

    #[test]
    fn short_span_is_rejected() {
        assert_eq!(extract_cuit("CUIT: 12345"), None);
    }

    #[test]
    fn first_cuit_is_the_issuer() {
        let text = "CUIT: 30-11223344-5 ... CUIT: 20-98765432-1";
        assert_eq!(extract_cuit(text), Some("30-11223344-5".to_string()));
    }
}
