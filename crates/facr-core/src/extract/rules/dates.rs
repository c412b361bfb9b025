//! Date extraction.
//!
//! Dates are extracted as literal substrings; no calendar validation is
//! applied, so a "99/99/99" shaped token is taken as-is.

use super::patterns::{DUE_DATE, ISSUE_DATE};
use super::FieldExtractor;

/// Issue-date extractor ("Fecha", "Fecha de Emisión").
pub struct IssueDateExtractor;

impl IssueDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IssueDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IssueDateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ISSUE_DATE
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Due-date / CAE-expiration extractor ("Fecha de Vencimiento",
/// "Fecha Vto. CAE").
pub struct DueDateExtractor;

impl DueDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DueDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DueDateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DUE_DATE
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Labeled dates found in a document.
#[derive(Debug, Clone, Default)]
pub struct DocumentDates {
    /// Issue date as matched.
    pub issue: Option<String>,
    /// Due/expiration date as matched.
    pub due: Option<String>,
}

/// Extract both labeled dates from flattened text. First match wins.
pub fn extract_dates(text: &str) -> DocumentDates {
    DocumentDates {
        issue: IssueDateExtractor::new().extract(text),
        due: DueDateExtractor::new().extract(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_labeled_issue_date() {
        let dates = extract_dates("Factura B Fecha de Emisión: 05/03/2024 CUIT 30-11223344-5");
        assert_eq!(dates.issue.as_deref(), Some("05/03/2024"));
    }

    #[test]
    fn extracts_bare_fecha_label() {
        let dates = extract_dates("Fecha: 1/2/24");
        assert_eq!(dates.issue.as_deref(), Some("1/2/24"));
    }

    #[test]
    fn first_issue_date_wins() {
        let dates = extract_dates("Fecha 01/01/2024 ... Fecha 02/02/2024");
        assert_eq!(dates.issue.as_deref(), Some("01/01/2024"));
    }

    #[test]
    fn extracts_due_date_variants() {
        assert_eq!(
            extract_dates("Fecha de Vencimiento: 10/04/2024").due.as_deref(),
            Some("10/04/2024")
        );
        assert_eq!(
            extract_dates("Fecha Vto. CAE: 15/03/2024").due.as_deref(),
            Some("15/03/2024")
        );
    }

    #[test]
    fn due_date_label_does_not_satisfy_issue_rule() {
        let dates = extract_dates("Fecha de Vencimiento: 10/04/2024");
        assert!(dates.issue.is_none());
    }

    #[test]
    fn unlabeled_date_is_ignored() {
        let dates = extract_dates("Emitido el 05/03/2024");
        assert!(dates.issue.is_none());
        assert!(dates.due.is_none());
    }

    #[test]
    fn dates_are_not_validated() {
        let dates = extract_dates("Fecha: 99/99/99");
        assert_eq!(dates.issue.as_deref(), Some("99/99/99"));
    }

    #[test]
    fn hyphen_separated_dates_match() {
        let dates = extract_dates("Fecha de Emision: 5-3-2024");
        assert_eq!(dates.issue.as_deref(), Some("5-3-2024"));
    }
}
