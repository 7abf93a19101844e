//! FILENAME: engine/src/totals.rs
//! PURPOSE: Aggregates row amounts into subtotal, tax, discount and total.
//! CONTEXT: Tax and discount are independently toggleable percentages kept
//! as raw user text. Tax is charged on the pre-discount subtotal; the
//! ordering is fixed, not user-configurable. Intermediates stay unrounded
//! and formatting happens once at the end, so recomputation cycles do not
//! compound rounding error.

use serde::{Deserialize, Serialize};

use crate::calc::effective_row_amount;
use crate::numeric::{format_amount, parse_numeric};
use crate::table::Table;

/// One toggleable percentage adjustment (tax or discount). The percentage
/// stays the user's raw text and is parsed leniently on every recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    pub enabled: bool,
    pub percentage: String,
}

impl AdjustmentConfig {
    pub fn off() -> Self {
        AdjustmentConfig {
            enabled: false,
            percentage: String::new(),
        }
    }

    pub fn percent(percentage: &str) -> Self {
        AdjustmentConfig {
            enabled: true,
            percentage: percentage.to_string(),
        }
    }
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self::off()
    }
}

/// Derived display totals, each formatted to two decimals. Never stored:
/// a pure function of (table, tax config, discount config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: String,
    pub tax: String,
    pub discount: String,
    pub total: String,
}

/// Recomputes all four totals from the current table state.
pub fn compute_totals(
    table: &Table,
    tax: &AdjustmentConfig,
    discount: &AdjustmentConfig,
) -> Totals {
    let subtotal: f64 = table
        .rows
        .iter()
        .map(|row| effective_row_amount(row, &table.columns))
        .sum();

    let discount_amount = if discount.enabled {
        subtotal * parse_numeric(&discount.percentage) / 100.0
    } else {
        0.0
    };
    // Tax applies to the subtotal before discount.
    let tax_amount = if tax.enabled {
        subtotal * parse_numeric(&tax.percentage) / 100.0
    } else {
        0.0
    };
    let total = subtotal + tax_amount - discount_amount;

    Totals {
        subtotal: format_amount(subtotal),
        tax: format_amount(tax_amount),
        discount: format_amount(discount_amount),
        total: format_amount(total),
    }
}
