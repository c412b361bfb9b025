//! Extracted field model and output key mapping.

use chrono::Local;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields recovered from one invoice document.
///
/// Every field is optional: a rule that does not match leaves its field
/// `None`, and absent fields are omitted from serialized output entirely.
/// No field is ever overwritten once set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceFields {
    /// Issue date, stored as the literal matched substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    /// Invoice number as "PPPP-NNNNNNNN" (point of sale + sequence).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Issuer CUIT, raw matched span with hyphens preserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuit: Option<String>,

    /// CAE authorization code (10+ digits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cae: Option<String>,

    /// Due date / CAE expiration, literal matched substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Vendor line (legal-suffix match or first document line).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Payment term ("30 días") from the sales-conditions block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,

    /// Largest amount-shaped figure in the document.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub total: Option<Decimal>,

    /// Line-item discount cell from the BON column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

/// Output key vocabulary.
///
/// The two styles come from the two historical consumers of the extractor;
/// extraction logic is shared and only the boundary mapping differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStyle {
    /// Capitalized keys, including conditions/discount/voucher fields.
    #[default]
    Full,
    /// Lowercase keys, core fields only.
    Compact,
}

/// Maps `InvoiceFields` to the flat JSON object of the chosen vocabulary.
///
/// Unmatched fields are omitted, never emitted as null. The fixed fields
/// (warehouse code, processing date and, in the full vocabulary, the
/// electronic-voucher flag) are injected unconditionally.
#[derive(Debug, Clone)]
pub struct OutputMapper {
    style: KeyStyle,
    warehouse_code: u32,
}

impl OutputMapper {
    pub fn new(style: KeyStyle) -> Self {
        Self {
            style,
            warehouse_code: 1,
        }
    }

    /// Set the warehouse code injected into every result.
    pub fn with_warehouse_code(mut self, code: u32) -> Self {
        self.warehouse_code = code;
        self
    }

    /// Build the output object, stamping the current date as the
    /// accounting date.
    pub fn to_map(&self, fields: &InvoiceFields) -> Map<String, Value> {
        let today = Local::now().format("%d/%m/%Y").to_string();
        self.to_map_with_date(fields, &today)
    }

    fn to_map_with_date(&self, fields: &InvoiceFields, processing_date: &str) -> Map<String, Value> {
        let mut map = Map::new();

        match self.style {
            KeyStyle::Full => {
                insert_text(&mut map, "Fecha", &fields.issue_date);
                insert_text(&mut map, "Nro_Factura", &fields.invoice_number);
                insert_text(&mut map, "CUIT", &fields.cuit);
                insert_text(&mut map, "CAE", &fields.cae);
                insert_text(&mut map, "Fecha_vencimiento", &fields.due_date);
                insert_text(&mut map, "Proveedor", &fields.vendor);
                insert_text(&mut map, "Condiciones_Venta", &fields.payment_terms);
                insert_amount(&mut map, "Total", fields.total);
                insert_text(&mut map, "Bonificacion", &fields.discount);
                map.insert("Deposito".to_string(), Value::from(self.warehouse_code));
                map.insert("Fecha_Contable".to_string(), Value::from(processing_date));
                map.insert("Comprobante_electronico".to_string(), Value::from("S"));
            }
            KeyStyle::Compact => {
                insert_text(&mut map, "fecha", &fields.issue_date);
                insert_text(&mut map, "nro_factura", &fields.invoice_number);
                insert_text(&mut map, "cuit_emisor", &fields.cuit);
                insert_text(&mut map, "cae", &fields.cae);
                insert_text(&mut map, "fecha_vencimiento", &fields.due_date);
                insert_text(&mut map, "proveedor", &fields.vendor);
                insert_amount(&mut map, "total", fields.total);
                map.insert("deposito".to_string(), Value::from(self.warehouse_code));
                map.insert("fecha_contable".to_string(), Value::from(processing_date));
            }
        }

        map
    }
}

fn insert_text(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::from(v.clone()));
    }
}

fn insert_amount(map: &mut Map<String, Value>, key: &str, value: Option<Decimal>) {
    if let Some(v) = value.and_then(|d| d.to_f64()) {
        map.insert(key.to_string(), Value::from(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::str::FromStr;

    fn sample_fields() -> InvoiceFields {
        InvoiceFields {
            issue_date: Some("05/03/2024".to_string()),
            invoice_number: Some("0003-00010171".to_string()),
            cuit: Some("30-11223344-5".to_string()),
            cae: Some("71234567890123".to_string()),
            due_date: Some("15/03/2024".to_string()),
            vendor: Some("ACME S.A.".to_string()),
            payment_terms: Some("30 días".to_string()),
            total: Some(Decimal::from_str("17242.50").unwrap()),
            discount: Some("5.00".to_string()),
        }
    }

    #[test]
    fn full_style_maps_all_fields() {
        let map = OutputMapper::new(KeyStyle::Full)
            .to_map_with_date(&sample_fields(), "01/08/2026");

        assert_eq!(map["Fecha"], json!("05/03/2024"));
        assert_eq!(map["Nro_Factura"], json!("0003-00010171"));
        assert_eq!(map["CUIT"], json!("30-11223344-5"));
        assert_eq!(map["CAE"], json!("71234567890123"));
        assert_eq!(map["Fecha_vencimiento"], json!("15/03/2024"));
        assert_eq!(map["Proveedor"], json!("ACME S.A."));
        assert_eq!(map["Condiciones_Venta"], json!("30 días"));
        assert_eq!(map["Total"], json!(17242.5));
        assert_eq!(map["Bonificacion"], json!("5.00"));
        assert_eq!(map["Deposito"], json!(1));
        assert_eq!(map["Fecha_Contable"], json!("01/08/2026"));
        assert_eq!(map["Comprobante_electronico"], json!("S"));
    }

    #[test]
    fn compact_style_uses_lowercase_core_keys() {
        let map = OutputMapper::new(KeyStyle::Compact)
            .to_map_with_date(&sample_fields(), "01/08/2026");

        assert_eq!(map["fecha"], json!("05/03/2024"));
        assert_eq!(map["cuit_emisor"], json!("30-11223344-5"));
        assert_eq!(map["total"], json!(17242.5));
        assert_eq!(map["deposito"], json!(1));
        assert!(!map.contains_key("Condiciones_Venta"));
        assert!(!map.contains_key("Bonificacion"));
        assert!(!map.contains_key("Comprobante_electronico"));
    }

    #[test]
    fn unmatched_fields_are_omitted_not_null() {
        let map = OutputMapper::new(KeyStyle::Full)
            .to_map_with_date(&InvoiceFields::default(), "01/08/2026");

        // Only the fixed fields remain.
        assert_eq!(map.len(), 3);
        assert!(map.contains_key("Deposito"));
        assert!(map.contains_key("Fecha_Contable"));
        assert!(map.contains_key("Comprobante_electronico"));
        assert!(!map.values().any(|v| v.is_null()));
    }

    #[test]
    fn warehouse_code_is_configurable() {
        let map = OutputMapper::new(KeyStyle::Compact)
            .with_warehouse_code(7)
            .to_map_with_date(&InvoiceFields::default(), "01/08/2026");

        assert_eq!(map["deposito"], json!(7));
    }

    #[test]
    fn total_serializes_as_a_number() {
        let fields = InvoiceFields {
            total: Some(Decimal::from_str("1234.50").unwrap()),
            ..InvoiceFields::default()
        };

        let value = serde_json::to_value(&fields).unwrap();
        assert!(value["total"].is_number());
        assert_eq!(value["total"], json!(1234.5));
    }
}
