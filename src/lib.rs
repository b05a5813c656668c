//! ipcalc: netmask and network address of an IPv4 CIDR.
//!
//! The library does the work; `main.rs` only wires up logging and exit
//! codes.

pub mod cli;
pub mod config;
mod error;
pub mod models;
pub mod output;

use std::error::Error;

pub use cli::Cli;
pub use error::{IpcalcError, FORMAT_EXIT_CODE, USAGE_EXIT_CODE};
pub use models::Ipv4;
pub use output::Report;

/// Parse `a.b.c.d/p` and compute every derived value.
pub fn calculate(input: &str) -> Result<Report, IpcalcError> {
    let ipv4 = Ipv4::new(input)?;
    Report::new(&ipv4)
}

/// Produce the stdout text for parsed arguments.
pub fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    log::debug!("run({cli:?})");
    let report = calculate(&cli.address)?;
    if cli.json {
        Ok(report.to_json()?)
    } else {
        Ok(report.to_text())
    }
}
