//! FILENAME: engine/src/cell.rs
//! PURPOSE: Defines the content held by a single table cell.
//! CONTEXT: Cells are either raw user text (plain and amount columns) or a
//! name/description pair (the description column). The engine never coerces
//! one variant into the other; `update_cell` rejects mismatches instead.

use serde::{Deserialize, Serialize};

/// Content of one cell in a line-item row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    /// Raw user text, exactly as typed. Plain and amount columns hold this.
    Text(String),
    /// Structured pair held by the description column.
    Description { name: String, description: String },
}

impl CellContent {
    pub fn new_text(text: String) -> Self {
        CellContent::Text(text)
    }

    pub fn new_description(name: String, description: String) -> Self {
        CellContent::Description { name, description }
    }

    /// The raw text of a plain/amount cell. Description pairs carry no
    /// numeric meaning, so they read as empty here.
    pub fn text(&self) -> &str {
        match self {
            CellContent::Text(text) => text,
            CellContent::Description { .. } => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellContent::Text(text) => text.is_empty(),
            CellContent::Description { name, description } => {
                name.is_empty() && description.is_empty()
            }
        }
    }
}
