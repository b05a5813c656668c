//! Error type shared by the codec and the CLI layer.

use std::error::Error;
use std::fmt;

/// Exit code for a malformed address/prefix.
pub const FORMAT_EXIT_CODE: u8 = 1;
/// Exit code for a wrong argument count or unknown flag.
pub const USAGE_EXIT_CODE: u8 = 2;

/// The two ways an ipcalc invocation can fail. Both are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcalcError {
    /// Wrong argument count or unknown flag. Holds the full usage message.
    Usage(String),
    /// Input did not match `<a.b.c.d>/<prefix>`, an octet or the prefix was
    /// out of range, or a bit string was malformed.
    Format(String),
}

impl IpcalcError {
    pub fn exit_code(&self) -> u8 {
        match self {
            IpcalcError::Usage(_) => USAGE_EXIT_CODE,
            IpcalcError::Format(_) => FORMAT_EXIT_CODE,
        }
    }
}

impl fmt::Display for IpcalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpcalcError::Usage(msg) => write!(f, "{}", msg.trim_end()),
            IpcalcError::Format(detail) => write!(f, "Invalid IP format: {detail}"),
        }
    }
}

impl Error for IpcalcError {}
