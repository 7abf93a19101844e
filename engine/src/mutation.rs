//! FILENAME: engine/src/mutation.rs
//! PURPOSE: Structural operations on the line-item table.
//! CONTEXT: Every operation is pure: it borrows the current table and either
//! returns a new snapshot or a guard condition with the input untouched.
//! Guards are ordinary values whose Display text is the notice the host
//! shows; nothing here panics. One engine serves every editor surface,
//! parameterized by `MutationPolicy`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::CellContent;
use crate::column::{Column, ColumnId, ColumnRole};
use crate::row::{empty_cell_for, Row, RowId};
use crate::table::Table;

// ============================================================================
// GUARDS
// ============================================================================

/// Why a structural operation was refused. Whenever one of these is
/// reported, the input table is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationGuard {
    #[error("the {role:?} column cannot be removed")]
    ProtectedColumn { role: ColumnRole },

    #[error("a table keeps at least {min} columns")]
    MinimumColumns { min: usize },

    #[error("a table keeps at least {min} rows")]
    MinimumRows { min: usize },

    #[error("no column with id {0}")]
    UnknownColumn(ColumnId),

    #[error("no row with id {0}")]
    UnknownRow(RowId),

    #[error("cell content does not fit a {role:?} column")]
    RoleMismatch { role: ColumnRole },
}

/// Which column roles an editor surface protects from deletion, and how
/// small the table may shrink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationPolicy {
    pub protected_roles: Vec<ColumnRole>,
    pub min_columns: usize,
    pub min_rows: usize,
}

impl Default for MutationPolicy {
    fn default() -> Self {
        MutationPolicy {
            protected_roles: vec![ColumnRole::Description, ColumnRole::Amount],
            min_columns: 2,
            min_rows: 1,
        }
    }
}

impl MutationPolicy {
    pub fn protects(&self, role: ColumnRole) -> bool {
        self.protected_roles.contains(&role)
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

impl Table {
    /// Inserts a new plain column and seeds a blank cell into every row.
    ///
    /// Placement: immediately after `after` when given and known; otherwise
    /// immediately before the amount column if the table has one; otherwise
    /// at the end. An unknown `after` id falls back to the default
    /// placement.
    pub fn add_column(&self, after: Option<ColumnId>) -> Table {
        let mut next = self.clone();
        let id = next.take_column_id();
        let column = Column::new(id, String::new(), ColumnRole::Plain);

        let index = after
            .and_then(|a| next.column_index(a).map(|i| i + 1))
            .or_else(|| {
                next.columns
                    .iter()
                    .position(|c| c.role == ColumnRole::Amount)
            })
            .unwrap_or(next.columns.len());
        next.columns.insert(index, column);

        for row in &mut next.rows {
            row.cells.insert(id, empty_cell_for(ColumnRole::Plain));
        }
        next
    }

    /// Removes a column and every row's matching cell entry.
    pub fn remove_column(
        &self,
        id: ColumnId,
        policy: &MutationPolicy,
    ) -> Result<Table, MutationGuard> {
        let column = self.column(id).ok_or(MutationGuard::UnknownColumn(id))?;
        if policy.protects(column.role) {
            return Err(MutationGuard::ProtectedColumn { role: column.role });
        }
        if self.columns.len() <= policy.min_columns {
            return Err(MutationGuard::MinimumColumns {
                min: policy.min_columns,
            });
        }

        let mut next = self.clone();
        next.columns.retain(|c| c.id != id);
        for row in &mut next.rows {
            row.cells.remove(&id);
        }
        Ok(next)
    }

    /// Sets a column's header text. Role and id are untouched.
    pub fn rename_column(&self, id: ColumnId, name: String) -> Result<Table, MutationGuard> {
        let index = self
            .column_index(id)
            .ok_or(MutationGuard::UnknownColumn(id))?;
        let mut next = self.clone();
        next.columns[index].name = name;
        Ok(next)
    }

    /// Appends a row seeded with one empty cell per current column.
    pub fn add_row(&self) -> Table {
        let mut next = self.clone();
        let id = next.take_row_id();
        let row = Row::new(id, &next.columns);
        next.rows.push(row);
        next
    }

    pub fn remove_row(&self, id: RowId, policy: &MutationPolicy) -> Result<Table, MutationGuard> {
        if self.row(id).is_none() {
            return Err(MutationGuard::UnknownRow(id));
        }
        if self.rows.len() <= policy.min_rows {
            return Err(MutationGuard::MinimumRows {
                min: policy.min_rows,
            });
        }

        let mut next = self.clone();
        next.rows.retain(|r| r.id != id);
        Ok(next)
    }

    /// Replaces the content at (row, column). The content variant must match
    /// the column's role; the engine does not coerce across variants.
    pub fn update_cell(
        &self,
        row: RowId,
        column: ColumnId,
        value: CellContent,
    ) -> Result<Table, MutationGuard> {
        let target = self
            .column(column)
            .ok_or(MutationGuard::UnknownColumn(column))?;
        let fits = match (&value, target.role) {
            (CellContent::Description { .. }, ColumnRole::Description) => true,
            (CellContent::Text(_), ColumnRole::Plain | ColumnRole::Amount) => true,
            _ => false,
        };
        if !fits {
            return Err(MutationGuard::RoleMismatch { role: target.role });
        }
        let row_index = self.row_index(row).ok_or(MutationGuard::UnknownRow(row))?;

        let mut next = self.clone();
        next.rows[row_index].cells.insert(column, value);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_column_lands_before_amount() {
        let table = Table::new();
        let next = table.add_column(None);
        assert_eq!(next.columns.len(), 5);
        assert_eq!(next.columns[3].role, ColumnRole::Plain);
        assert_eq!(next.columns[4].role, ColumnRole::Amount);
    }

    #[test]
    fn test_add_column_seeds_every_row() {
        let table = Table::new().add_row().add_row();
        let next = table.add_column(None);
        let added = next.columns[3].id;
        for row in &next.rows {
            assert_eq!(row.cell(added), Some(&CellContent::Text(String::new())));
        }
    }

    #[test]
    fn test_remove_column_guards_protected_roles() {
        let table = Table::new();
        let policy = MutationPolicy::default();
        let amount = table.amount_column().unwrap().id;
        assert_eq!(
            table.remove_column(amount, &policy),
            Err(MutationGuard::ProtectedColumn {
                role: ColumnRole::Amount
            })
        );
    }

    #[test]
    fn test_update_cell_rejects_wrong_variant() {
        let table = Table::new();
        let description = table.description_column().unwrap().id;
        let row = table.rows[0].id;
        let result = table.update_cell(row, description, CellContent::new_text("x".to_string()));
        assert_eq!(
            result,
            Err(MutationGuard::RoleMismatch {
                role: ColumnRole::Description
            })
        );
    }
}
