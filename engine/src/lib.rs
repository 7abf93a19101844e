//! FILENAME: engine/src/lib.rs
//! Invoice line-item calculation engine.
//!
//! This crate is the calculation core of the invoice editor: an editable
//! table of columns and rows, per-row derived amounts, and
//! subtotal/tax/discount/total aggregation. It performs no I/O and keeps no
//! hidden state; the host owns the table, passes it in after every edit, and
//! reads the returned snapshot back out.
//!
//! Layers:
//! - `cell`, `column`, `row`, `table`: the table model (what the table IS)
//! - `mutation`: structural operations with guard conditions
//! - `numeric`: loose numeric parsing and two-decimal formatting
//! - `calc`: per-row amount derivation and the `recompute` entry point
//! - `totals`: subtotal/tax/discount/total aggregation

pub mod calc;
pub mod cell;
pub mod column;
pub mod mutation;
pub mod numeric;
pub mod row;
pub mod table;
pub mod totals;

pub use calc::{compute_row_amount, effective_row_amount, recompute};
pub use cell::CellContent;
pub use column::{Column, ColumnAlign, ColumnId, ColumnRole};
pub use mutation::{MutationGuard, MutationPolicy};
pub use numeric::{format_amount, parse_numeric};
pub use row::{empty_cell_for, Row, RowId};
pub use table::Table;
pub use totals::{compute_totals, AdjustmentConfig, Totals};
