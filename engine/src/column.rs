//! FILENAME: engine/src/column.rs
//! PURPOSE: Column schema for the line-item table.
//! CONTEXT: A column carries a stable id, editable header text, a role tag
//! that governs calculation and deletion guards, and presentation hints the
//! engine treats as opaque. Column order is significant: it decides display
//! order and which amount column wins when a table carries more than one.

use serde::{Deserialize, Serialize};

/// Unique identifier for a column within a table. Never reused after
/// deletion.
pub type ColumnId = u32;

/// How a column participates in row-amount calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRole {
    /// Holds the item name/description pair; excluded from calculation.
    Description,
    /// Holds the derived (or manually overridden) row amount.
    Amount,
    /// A multiplicative factor (quantity, rate, hours, ...).
    Plain,
}

impl Default for ColumnRole {
    fn default() -> Self {
        ColumnRole::Plain
    }
}

/// Horizontal alignment hint for the host's renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

impl Default for ColumnAlign {
    fn default() -> Self {
        ColumnAlign::Left
    }
}

/// A column in the line-item table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column ID (unique within table).
    pub id: ColumnId,
    /// Header text, freely editable.
    pub name: String,
    /// Role tag governing calculation and deletion guards.
    pub role: ColumnRole,
    /// Preferred width in pixels, if the host cares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Alignment hint.
    #[serde(default)]
    pub align: ColumnAlign,
}

impl Column {
    pub fn new(id: ColumnId, name: String, role: ColumnRole) -> Self {
        Column {
            id,
            name,
            role,
            width: None,
            align: ColumnAlign::default(),
        }
    }
}
