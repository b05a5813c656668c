//! Output formatting for ipcalc results.
//!
//! - [`report`] - the computed [`Report`] and its text/JSON renderings
//! - [`terminal`] - line formatting for the text report

mod report;
mod terminal;

pub use report::Report;
pub use terminal::{format_row, LABEL_WIDTH};
