//! Terminal output utilities.
//!
//! Provides formatting helpers for the plain-text report.

/// Width of the label column, value starts at the next column.
pub const LABEL_WIDTH: usize = 16;

/// Format a label and value as one report line.
///
/// # Arguments
/// * `label` - The row label, left-aligned and padded to [`LABEL_WIDTH`]
/// * `value` - The value printed after a single separating space
///
/// # Returns
/// The formatted line without a trailing newline
pub fn format_row<T: ToString>(label: &str, value: T) -> String {
    let value_str = value.to_string();
    format!("{label:<width$} {value_str}", width = LABEL_WIDTH)
}
