//! Discount (bonificación) column extraction from whitespace-aligned tables.

use super::patterns::{COLUMN_SPLIT, DISCOUNT_HEADER, NUMERIC_CELL};

/// Read the discount cell under a "BON" column header.
///
/// Operates on trimmed-but-uncollapsed lines: the column-boundary heuristic
/// splits on runs of two or more spaces, which only survive before
/// whitespace collapsing. The first line containing a BON token is treated
/// as the header row; the first following row with enough columns is the
/// only item row inspected. A non-numeric cell omits the field.
pub fn extract_discount(raw_lines: &[String]) -> Option<String> {
    let header_idx = raw_lines.iter().position(|l| DISCOUNT_HEADER.is_match(l))?;

    let header_cells: Vec<&str> = COLUMN_SPLIT.split(&raw_lines[header_idx]).collect();
    let column = header_cells
        .iter()
        .position(|cell| cell.to_uppercase().contains("BON"))?;

    for line in &raw_lines[header_idx + 1..] {
        let cells: Vec<&str> = COLUMN_SPLIT.split(line).collect();
        if cells.len() <= column {
            continue;
        }

        let cell = cells[column].trim();
        if NUMERIC_CELL.is_match(cell) {
            return Some(cell.replace(',', "."));
        }
        return None;
    }

    None
}
