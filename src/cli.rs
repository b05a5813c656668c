//! Command line arguments.

use crate::error::IpcalcError;
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ipcalc", version)]
#[command(about = "Show the netmask and network address of an IPv4 CIDR")]
pub struct Cli {
    /// Address and prefix length, e.g. 192.168.1.10/24
    // A malformed address starting with '-' is still the one positional.
    #[arg(value_name = "IP/NETMASK", allow_hyphen_values = true)]
    pub address: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse `args` (program name first) without exiting the process.
    ///
    /// `--help` and `--version` come back as a clap error whose
    /// `use_stderr()` is false; every other error is a usage error, see
    /// `From<clap::Error> for IpcalcError`.
    pub fn try_from_args<I, T>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args)
    }
}

impl From<clap::Error> for IpcalcError {
    fn from(e: clap::Error) -> IpcalcError {
        IpcalcError::Usage(e.to_string())
    }
}
