//! Line normalization and document text views.

/// Request-scoped views over one document's text.
///
/// Line order is preserved throughout: several rules depend on position
/// relative to a matched header line. Whitespace-only lines are dropped
/// before any view is built.
#[derive(Debug, Clone)]
pub struct DocumentText {
    lines: Vec<String>,
    raw_lines: Vec<String>,
    flat: String,
}

impl DocumentText {
    /// Split raw text on line boundaries and build the views.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Build from pre-split lines, as handed over by a document reader.
    pub fn from_lines<'a, I>(raw: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = Vec::new();
        let mut raw_lines = Vec::new();

        for line in raw {
            if line.trim().is_empty() {
                continue;
            }
            lines.push(normalize_line(line));
            raw_lines.push(line.trim().to_string());
        }

        let flat = lines.join(" ");

        Self {
            lines,
            raw_lines,
            flat,
        }
    }

    /// Normalized lines: trimmed, internal whitespace runs collapsed.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Trimmed lines with internal spacing preserved, for column-aligned
    /// table rules.
    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    /// All normalized lines joined with a single space, for rules that do
    /// not depend on line position.
    pub fn flat(&self) -> &str {
        &self.flat
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Strip leading/trailing whitespace and collapse every internal run of
/// whitespace to a single space. Total: always succeeds.
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_line("  ACME   Supplies\t S.A.  "), "ACME Supplies S.A.");
        assert_eq!(normalize_line("plain"), "plain");
        assert_eq!(normalize_line("   "), "");
    }

    #[test]
    fn blank_lines_are_dropped() {
        let doc = DocumentText::from_text("ACME\n\n   \nTOTAL  100,00\n");
        assert_eq!(doc.lines(), &["ACME".to_string(), "TOTAL 100,00".to_string()]);
    }

    #[test]
    fn raw_lines_keep_internal_spacing() {
        let doc = DocumentText::from_text("  COD   BON   IMPORTE  \n");
        assert_eq!(doc.raw_lines(), &["COD   BON   IMPORTE".to_string()]);
        assert_eq!(doc.lines(), &["COD BON IMPORTE".to_string()]);
    }

    #[test]
    fn flat_joins_normalized_lines_with_single_spaces() {
        let doc = DocumentText::from_text("Nº 0003\n-  00010171\n");
        assert_eq!(doc.flat(), "Nº 0003 - 00010171");
    }

    #[test]
    fn empty_document() {
        let doc = DocumentText::from_text("\n  \n");
        assert!(doc.is_empty());
        assert_eq!(doc.flat(), "");
    }
}
