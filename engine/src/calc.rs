//! FILENAME: engine/src/calc.rs
//! Row amount derivation.
//!
//! A row's computed amount is the product of its plain-column factors, taken
//! in table order. Zero parses count as "not filled in yet" rather than as
//! zeroing factors: with free-text cells an untouched field and an explicit 0
//! are indistinguishable. A row with no non-zero factor has an unset amount
//! (`None`), distinct from a computed "0.00", so the host can render a
//! placeholder instead.

use crate::cell::CellContent;
use crate::column::{Column, ColumnRole};
use crate::numeric::{format_amount, parse_numeric};
use crate::row::Row;
use crate::table::Table;

/// Product of the row's non-zero plain-column values, or `None` when no such
/// value exists.
fn computed_product(row: &Row, columns: &[Column]) -> Option<f64> {
    let mut product = 1.0;
    let mut has_values = false;
    for column in columns {
        if column.role != ColumnRole::Plain {
            continue;
        }
        let value = parse_numeric(row.text(column.id));
        if value != 0.0 {
            product *= value;
            has_values = true;
        }
    }
    if has_values {
        Some(product)
    } else {
        None
    }
}

/// Derives the computed amount for one row, formatted to two decimals.
/// Returns `None` (the unset sentinel) when every factor is empty or zero.
pub fn compute_row_amount(row: &Row, columns: &[Column]) -> Option<String> {
    computed_product(row, columns).map(format_amount)
}

/// The value a row contributes to the subtotal. A non-zero entry in the
/// amount column is a manual override and wins; otherwise the computed
/// product applies, with an unset computation counting as 0.
pub fn effective_row_amount(row: &Row, columns: &[Column]) -> f64 {
    let manual = columns
        .iter()
        .find(|c| c.role == ColumnRole::Amount)
        .map(|c| parse_numeric(row.text(c.id)))
        .unwrap_or(0.0);
    if manual != 0.0 {
        return manual;
    }
    computed_product(row, columns).unwrap_or(0.0)
}

/// Refreshes every row's amount cell from its current factors. The host
/// calls this after each structural mutation or plain-cell edit; it is
/// idempotent, so calling it again without an intervening edit is a no-op.
///
/// An amount cell that parses to zero (empty, cleared, or never touched) is
/// overwritten with the fresh computation (the empty string when the row
/// has no factors). A non-zero amount cell is a manual override and is left
/// alone. Tables without an amount column come back unchanged.
pub fn recompute(table: &Table) -> Table {
    let amount_id = match table.amount_column() {
        Some(column) => column.id,
        None => return table.clone(),
    };

    let mut next = table.clone();
    for row in &mut next.rows {
        if parse_numeric(row.text(amount_id)) != 0.0 {
            continue;
        }
        let fresh = compute_row_amount(row, &table.columns).unwrap_or_default();
        row.cells.insert(amount_id, CellContent::Text(fresh));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnId;

    fn factor_columns() -> Vec<Column> {
        vec![
            Column::new(1, "Item".to_string(), ColumnRole::Description),
            Column::new(2, "Quantity".to_string(), ColumnRole::Plain),
            Column::new(3, "Rate".to_string(), ColumnRole::Plain),
            Column::new(4, "Amount".to_string(), ColumnRole::Amount),
        ]
    }

    fn row_with(columns: &[Column], values: &[(ColumnId, &str)]) -> Row {
        let mut row = Row::new(1, columns);
        for (column, value) in values {
            row.cells
                .insert(*column, CellContent::new_text((*value).to_string()));
        }
        row
    }

    #[test]
    fn test_empty_row_is_unset_not_zero() {
        let columns = factor_columns();
        let row = Row::new(1, &columns);
        assert_eq!(compute_row_amount(&row, &columns), None);
    }

    #[test]
    fn test_single_factor_identity() {
        let columns = factor_columns();
        let row = row_with(&columns, &[(2, "7")]);
        assert_eq!(compute_row_amount(&row, &columns), Some("7.00".to_string()));
    }

    #[test]
    fn test_zero_factor_treated_as_absent() {
        let columns = factor_columns();
        let row = row_with(&columns, &[(2, "5"), (3, "0")]);
        assert_eq!(compute_row_amount(&row, &columns), Some("5.00".to_string()));
    }

    #[test]
    fn test_amount_column_excluded_from_product() {
        let columns = factor_columns();
        let row = row_with(&columns, &[(2, "3"), (4, "999")]);
        assert_eq!(compute_row_amount(&row, &columns), Some("3.00".to_string()));
    }

    #[test]
    fn test_negative_factor() {
        let columns = factor_columns();
        let row = row_with(&columns, &[(2, "-2"), (3, "3")]);
        assert_eq!(
            compute_row_amount(&row, &columns),
            Some("-6.00".to_string())
        );
    }
}
