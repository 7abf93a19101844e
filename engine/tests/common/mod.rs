//! FILENAME: tests/common/mod.rs
//! Fixtures for the line-item engine integration tests.

use engine::{CellContent, ColumnId, ColumnRole, Table};

/// Wraps a table built from the default invoice seed and remembers its
/// column ids, so tests read like the edits a user would make.
pub struct InvoiceFixture {
    pub table: Table,
    pub description: ColumnId,
    pub quantity: ColumnId,
    pub rate: ColumnId,
    pub amount: ColumnId,
}

impl InvoiceFixture {
    /// Description / Quantity / Rate / Amount, one empty row.
    pub fn new() -> Self {
        let table = Table::new();
        let description = table.columns[0].id;
        let quantity = table.columns[1].id;
        let rate = table.columns[2].id;
        let amount = table.columns[3].id;
        InvoiceFixture {
            table,
            description,
            quantity,
            rate,
            amount,
        }
    }

    /// A fixture with `rows` empty rows.
    pub fn with_rows(rows: usize) -> Self {
        let mut fixture = Self::new();
        for _ in 1..rows {
            fixture.table = fixture.table.add_row();
        }
        fixture
    }

    /// Sets a plain or amount cell on the row at `row_index`.
    pub fn set_text(&mut self, row_index: usize, column: ColumnId, value: &str) {
        let row = self.table.rows[row_index].id;
        self.table = self
            .table
            .update_cell(row, column, CellContent::new_text(value.to_string()))
            .expect("cell update");
    }

    /// Quantity and rate for one row in a single call.
    pub fn set_factors(&mut self, row_index: usize, quantity: &str, rate: &str) {
        self.set_text(row_index, self.quantity, quantity);
        self.set_text(row_index, self.rate, rate);
    }

    /// The current text of the amount cell on the row at `row_index`.
    pub fn amount_text(&self, row_index: usize) -> String {
        self.table.rows[row_index].text(self.amount).to_string()
    }
}

/// A minimal two-column table (description + amount), bypassing the default
/// seed. Useful for exercising the column floor.
pub fn two_column_table() -> Table {
    use engine::{Column, Row};
    let columns = vec![
        Column::new(1, "Item".to_string(), ColumnRole::Description),
        Column::new(2, "Amount".to_string(), ColumnRole::Amount),
    ];
    let rows = vec![Row::new(1, &columns)];
    Table::from_parts(columns, rows)
}
