//! Shared regex patterns for Argentine invoice extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Issue date: "Fecha" or "Fecha de Emisión", then a D/M/Y date with
    // 1-2 digit day/month and 2-4 digit year
    pub static ref ISSUE_DATE: Regex = Regex::new(
        r"(?i)Fecha(?:\s+de\s+Emisi[oó]n)?[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"
    ).unwrap();

    // Due date: "Fecha de Vencimiento" or "Fecha Vto. CAE"
    pub static ref DUE_DATE: Regex = Regex::new(
        r"(?i)Fecha\s*(?:de\s*)?(?:Vencimiento|Vto\.?\s*CAE)[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"
    ).unwrap();

    // Invoice number: "Nº 0003 - 00010171" (4-digit point of sale, 6-8
    // digit sequence)
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)N[º°]?\s*([0-9]{4})\s*-\s*([0-9]{6,8})"
    ).unwrap();

    // CUIT: label plus 11-13 characters of digits and hyphens, taken verbatim
    pub static ref CUIT: Regex = Regex::new(
        r"(?i)CUIT[:\s-]*([0-9-]{11,13})"
    ).unwrap();

    // CAE: "CAE" or "CAE NRO" plus 10 or more consecutive digits
    pub static ref CAE: Regex = Regex::new(
        r"(?i)CAE(?:\s*NRO)?[:\s]*([0-9]{10,})"
    ).unwrap();

    // Amounts in Argentine format: 1.234.567,89
    pub static ref AMOUNT: Regex = Regex::new(
        r"\b[0-9]{1,3}(?:\.[0-9]{3})*,[0-9]{2}\b"
    ).unwrap();

    // Legal-entity suffixes marking a vendor line
    pub static ref LEGAL_SUFFIX: Regex = Regex::new(
        r"(?i)S\.A\.|S\.R\.L|S\.A|SRL|Ltda"
    ).unwrap();

    // Sales/payment conditions header
    pub static ref CONDITIONS_HEADER: Regex = Regex::new(
        r"(?i)Condicion(?:es)?\s*de\s*(?:Venta|Pago)"
    ).unwrap();

    // Lines that terminate the conditions block
    pub static ref CONDITIONS_STOP: Regex = Regex::new(
        r"(?i)TOTAL|CAE|Factura|CUIT"
    ).unwrap();

    // "30 días" style payment term
    pub static ref DAY_TERM: Regex = Regex::new(
        r"(?i)\d+\s*d[ií]as"
    ).unwrap();

    // Discount column header token
    pub static ref DISCOUNT_HEADER: Regex = Regex::new(
        r"(?i)\bBON"
    ).unwrap();

    // Column boundaries in whitespace-aligned tables
    pub static ref COLUMN_SPLIT: Regex = Regex::new(
        r"\s{2,}"
    ).unwrap();

    // Plain numeric cell: digits with an optional . or , decimal part
    pub static ref NUMERIC_CELL: Regex = Regex::new(
        r"^\d+[.,]?\d*$"
    ).unwrap();
}
