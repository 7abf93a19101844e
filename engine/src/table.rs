//! FILENAME: engine/src/table.rs
//! PURPOSE: The Table aggregate: ordered columns, ordered rows, id handout.
//! CONTEXT: The host owns the table; the engine borrows it and returns new
//! snapshots. Ids come from per-table monotonic counters, so they are
//! collision-free for the table's lifetime even under rapid programmatic
//! inserts, and the counters serialize with the table so a save/load cycle
//! never reuses an id either.

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnId, ColumnRole};
use crate::row::{Row, RowId};

/// The line-item table: an ordered column sequence plus an ordered row
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// Next column id to hand out.
    next_column_id: ColumnId,
    /// Next row id to hand out.
    next_row_id: RowId,
}

impl Table {
    /// The default invoice seed: Description, Quantity, Rate, Amount, with
    /// one empty row.
    pub fn new() -> Self {
        let columns = vec![
            Column::new(1, "Description".to_string(), ColumnRole::Description),
            Column::new(2, "Quantity".to_string(), ColumnRole::Plain),
            Column::new(3, "Rate".to_string(), ColumnRole::Plain),
            Column::new(4, "Amount".to_string(), ColumnRole::Amount),
        ];
        let rows = vec![Row::new(1, &columns)];
        Table {
            columns,
            rows,
            next_column_id: 5,
            next_row_id: 2,
        }
    }

    /// Rebuilds a table from host-held columns and rows. The id counters
    /// restart past the highest id seen, so fresh ids stay unique.
    pub fn from_parts(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let next_column_id = columns.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let next_row_id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Table {
            columns,
            rows,
            next_column_id,
            next_row_id,
        }
    }

    pub(crate) fn take_column_id(&mut self) -> ColumnId {
        let id = self.next_column_id;
        self.next_column_id += 1;
        id
    }

    pub(crate) fn take_row_id(&mut self) -> RowId {
        let id = self.next_row_id;
        self.next_row_id += 1;
        id
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// The first amount-role column in table order, if any. Tables with more
    /// than one amount column are host-constructed violations; the first one
    /// wins, the rest behave like plain text.
    pub fn amount_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.role == ColumnRole::Amount)
    }

    /// The first description-role column in table order, if any.
    pub fn description_column(&self) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.role == ColumnRole::Description)
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn row_index(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
