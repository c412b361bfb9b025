//! Vendor line detection.

use super::patterns::LEGAL_SUFFIX;

/// First line carrying a legal-entity suffix (S.A., S.R.L, SRL, Ltda).
///
/// When no line matches, the first line of the document is used instead.
/// That fallback is the stated policy for suffix-less letterheads, not an
/// error; the result is `None` only for an empty document.
pub fn extract_vendor(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find(|line| LEGAL_SUFFIX.is_match(line))
        .or_else(|| lines.first())
        .cloned()
}
