//! FILENAME: engine/src/row.rs
//! PURPOSE: A single line item and its per-column cell map.
//! CONTEXT: Every row holds exactly one cell per live column; the mutation
//! engine keeps the map in lockstep as columns come and go.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cell::CellContent;
use crate::column::{Column, ColumnId, ColumnRole};

/// Unique identifier for a row within a table. Never reused after deletion.
pub type RowId = u32;

/// One line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// Cell contents keyed by column id.
    pub cells: HashMap<ColumnId, CellContent>,
}

impl Row {
    /// Creates a row seeded with one empty cell per existing column.
    pub fn new(id: RowId, columns: &[Column]) -> Self {
        let cells = columns
            .iter()
            .map(|column| (column.id, empty_cell_for(column.role)))
            .collect();
        Row { id, cells }
    }

    /// The cell at `column`, if the row has one.
    pub fn cell(&self, column: ColumnId) -> Option<&CellContent> {
        self.cells.get(&column)
    }

    /// Raw text of the cell at `column`. Missing cells and description
    /// pairs read as empty.
    pub fn text(&self, column: ColumnId) -> &str {
        self.cells.get(&column).map(CellContent::text).unwrap_or("")
    }
}

/// The empty cell content matching a column role.
pub fn empty_cell_for(role: ColumnRole) -> CellContent {
    match role {
        ColumnRole::Description => CellContent::new_description(String::new(), String::new()),
        ColumnRole::Amount | ColumnRole::Plain => CellContent::new_text(String::new()),
    }
}
