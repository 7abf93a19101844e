//! FILENAME: engine/src/numeric.rs
//! PURPOSE: Loose numeric parsing for live-edited cells, plus the two-decimal
//! display format used by amounts and totals.
//! CONTEXT: Cell text arrives with currency symbols, thousands separators and
//! stray characters. One cleaning rule applies at every call site: keep only
//! digits, periods and minus signs. Commas are thousands separators and are
//! deleted, so "1,234.50" reads as 1234.5; accounting-style "(123)" negatives
//! are not recognized (the parentheses strip away and the magnitude stays
//! positive; only a leading minus negates). Anything the cleaned text still
//! fails to parse as degrades to zero; typing never raises an error.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());

/// Parses loosely formatted user input into a finite number. Returns 0.0 for
/// anything unparseable: empty text, a lone "-" or ".", repeated signs or
/// decimal points.
pub fn parse_numeric(text: &str) -> f64 {
    let cleaned = NON_NUMERIC.replace_all(text, "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Formats an amount with exactly two decimal digits.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
