//! Amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT;
use super::FieldExtractor;

/// Extractor for Argentine-formatted amounts (1.234.567,89).
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT
            .find_iter(text)
            .filter_map(|m| parse_amount(m.as_str()))
            .collect()
    }
}

/// Parse an Argentine-formatted amount: periods are thousands separators,
/// the comma is the decimal separator.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let normalized = s.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// The invoice total, taken as the largest amount-shaped figure anywhere in
/// the document. Totals are typically the largest currency figure on the
/// page; a larger unit price or tax base will be picked up instead.
pub fn extract_total(text: &str) -> Option<Decimal> {
    AmountExtractor::new().extract_all(text).into_iter().max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_thousands_and_decimal_separators() {
        assert_eq!(
            parse_amount("1.234.567,89"),
            Some(Decimal::from_str("1234567.89").unwrap())
        );
        assert_eq!(parse_amount("999,00"), Some(Decimal::from_str("999.00").unwrap()));
    }

    #[test]
    fn finds_every_amount_shaped_substring() {
        let extractor = AmountExtractor::new();
        let text = "Precio 100,00 Subtotal 1.234,56 IVA 21% Total 1.493,82";
        assert_eq!(extractor.extract_all(text).len(), 3);
    }

    #[test]
    fn total_is_the_maximum_amount() {
        assert_eq!(
            extract_total("Items: 1.234,50 y 999,00"),
            Some(Decimal::from_str("1234.50").unwrap())
        );
    }

    #[test]
    fn no_amounts_means_no_total() {
        assert!(extract_total("sin montos aca").is_none());
    }

    #[test]
    fn amounts_need_exactly_two_decimals() {
        let extractor = AmountExtractor::new();
        assert!(extractor.extract_all("123,4").is_empty());
        assert!(extractor.extract_all("123.456").is_empty());
    }

    #[test]
    fn unseparated_long_integer_part_is_not_an_amount() {
        let extractor = AmountExtractor::new();
        assert!(extractor.extract_all("12345,00").is_empty());
    }
}
