//! Sales/payment-conditions block extraction.

use super::patterns::{CONDITIONS_HEADER, CONDITIONS_STOP, DAY_TERM};

/// Find the payment term ("30 días") inside the sales-conditions block.
///
/// The block starts at the first line matching "Condicion(es) de Venta" or
/// "Condicion(es) de Pago" and ends before the first line containing TOTAL,
/// CAE, Factura or CUIT, which bounds it away from unrelated trailing
/// content. The value is the first day-count pattern inside the block.
pub fn extract_payment_terms(lines: &[String]) -> Option<String> {
    let start = lines.iter().position(|l| CONDITIONS_HEADER.is_match(l))?;

    let mut block = String::new();
    for line in &lines[start..] {
        if CONDITIONS_STOP.is_match(line) {
            break;
        }
        if !block.is_empty() {
            block.push(' ');
        }
        block.push_str(line);
    }

    DAY_TERM.find(&block).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn term_on_the_header_line() {
        let lines = doc(&[
            "Condiciones de Venta: pago a 30 días",
            "Subtotal 100,00",
            "TOTAL 121,00",
            "vencido: 45 días de recargo",
        ]);
        assert_eq!(extract_payment_terms(&lines), Some("30 días".to_string()));
    }

    #[test]
    fn term_on_a_following_line() {
        let lines = doc(&[
            "Condicion de Pago",
            "credito a 60 dias de la fecha",
            "TOTAL 121,00",
        ]);
        assert_eq!(extract_payment_terms(&lines), Some("60 dias".to_string()));
    }

    #[test]
    fn block_is_bounded_by_stop_words() {
        let lines = doc(&[
            "Condiciones de Venta: contado",
            "CUIT: 30-11223344-5",
            "a 90 días",
        ]);
        assert_eq!(extract_payment_terms(&lines), None);
    }

    #[test]
    fn missing_header_yields_nothing() {
        let lines = doc(&["pago a 30 días"]);
        assert_eq!(extract_payment_terms(&lines), None);
    }

    #[test]
    fn block_without_day_count_yields_nothing() {
        let lines = doc(&["Condiciones de Venta: contado", "gracias por su compra"]);
        assert_eq!(extract_payment_terms(&lines), None);
    }
}
