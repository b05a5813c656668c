//! Domain models for ipcalc.
//!
//! - [`Ipv4`] - IPv4 address with CIDR prefix length
//! - [`Bits`] - the 32-bit vector every address and mask is computed in

mod bits;
mod ipv4;

// Re-export public types
pub use bits::{
    address_to_bits, bit_dotted_to_cidr, bits_to_dotted, bits_to_int, netmask_bits,
    network_address_bits, octet_to_bits, Bits, OCTET_BITS,
};
pub use ipv4::{Ipv4, MAX_LENGTH};
