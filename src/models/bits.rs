//! Fixed-width bit vectors and the bit-dotted string form.
//!
//! Address, netmask and network address are all carried as a [`Bits`] and
//! rendered on demand, either as bit-dotted text
//! (`11000000.10101000.00000001.00000000`) or decoded back to decimal.

use super::ipv4::MAX_LENGTH;
use crate::error::IpcalcError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::net::Ipv4Addr;

/// Number of bits in one octet.
pub const OCTET_BITS: usize = 8;

const WIDTH: usize = MAX_LENGTH as usize;

lazy_static! {
    static ref BIT_DOTTED_RE: Regex =
        Regex::new(r"^([01]{8})\.([01]{8})\.([01]{8})\.([01]{8})$").expect("Invalid Regex?");
}

/// A 32-bit vector, most significant bit first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bits([bool; WIDTH]);

impl Bits {
    /// Number of consecutive ones from the most significant bit.
    pub fn leading_ones(&self) -> usize {
        self.0.iter().take_while(|bit| **bit).count()
    }

    /// Bitwise AND, position by position.
    pub fn and(&self, other: &Bits) -> Bits {
        let mut out = [false; WIDTH];
        for (i, bit) in out.iter_mut().enumerate() {
            *bit = self.0[i] && other.0[i];
        }
        Bits(out)
    }

    /// Pack each 8-bit group back into an octet.
    pub fn octets(&self) -> [u8; 4] {
        let mut octets = [0u8; 4];
        for (i, chunk) in self.0.chunks(OCTET_BITS).enumerate() {
            octets[i] = chunk
                .iter()
                .fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit));
        }
        octets
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<[bool; WIDTH]> for Bits {
    fn from(bits: [bool; WIDTH]) -> Bits {
        Bits(bits)
    }
}

impl From<Bits> for Ipv4Addr {
    fn from(bits: Bits) -> Ipv4Addr {
        Ipv4Addr::from(bits.octets())
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&bits_to_dotted(self))
    }
}

/// Render an octet as 8 binary digits, zero padded, MSB first.
pub fn octet_to_bits(n: u8) -> String {
    format!("{n:08b}")
}

/// Concatenate the 8-bit form of each octet in address order.
pub fn address_to_bits(addr: Ipv4Addr) -> Bits {
    let mut bits = [false; WIDTH];
    for (i, octet) in addr.octets().iter().enumerate() {
        for j in 0..OCTET_BITS {
            bits[i * OCTET_BITS + j] = (octet >> (OCTET_BITS - 1 - j)) & 1 == 1;
        }
    }
    Bits(bits)
}

/// The first `prefix` bits set, the remaining `32 - prefix` clear.
///
/// # Examples
/// ```
/// use ipcalc::models::{netmask_bits, bits_to_dotted};
/// let mask = netmask_bits(20).unwrap();
/// assert_eq!(bits_to_dotted(&mask), "11111111.11111111.11110000.00000000");
/// ```
pub fn netmask_bits(prefix: u8) -> Result<Bits, IpcalcError> {
    if prefix > MAX_LENGTH {
        return Err(IpcalcError::Format(format!(
            "prefix {prefix} is out of range 0-{MAX_LENGTH}"
        )));
    }
    let mut bits = [false; WIDTH];
    bits[..prefix as usize].fill(true);
    Ok(Bits(bits))
}

/// Address bits with everything past the prefix forced to zero.
pub fn network_address_bits(addr: Ipv4Addr, prefix: u8) -> Result<Bits, IpcalcError> {
    let mask = netmask_bits(prefix)?;
    Ok(address_to_bits(addr).and(&mask))
}

/// Four 8-character binary groups joined by `.`; not decimal.
pub fn bits_to_dotted(bits: &Bits) -> String {
    bits.0
        .chunks(OCTET_BITS)
        .map(|chunk| {
            chunk
                .iter()
                .map(|bit| if *bit { '1' } else { '0' })
                .collect::<String>()
        })
        .join(".")
}

/// Decode an 8-character `0`/`1` string, MSB first.
/// ex: 10000000 -> 128, 11000001 -> 193
pub fn bits_to_int(s: &str) -> Result<u8, IpcalcError> {
    if s.len() != OCTET_BITS {
        return Err(IpcalcError::Format(format!(
            "'{s}' is not an {OCTET_BITS}-bit string"
        )));
    }
    s.chars()
        .enumerate()
        .try_fold(0u8, |acc, (i, c)| match c {
            '1' => Ok(acc | 1u8 << (OCTET_BITS - 1 - i)),
            '0' => Ok(acc),
            _ => Err(IpcalcError::Format(format!(
                "'{s}' contains a non-binary digit '{c}'"
            ))),
        })
}

/// Decode a bit-dotted string to decimal dotted-quad.
/// ex: 11000000.10101000.00000001.00000000 => 192.168.1.0
pub fn bit_dotted_to_cidr(s: &str) -> Result<String, IpcalcError> {
    let caps = BIT_DOTTED_RE
        .captures(s)
        .ok_or_else(|| IpcalcError::Format(format!("'{s}' is not in bit-dotted form")))?;
    let octets = (1..=4)
        .map(|i| bits_to_int(&caps[i]))
        .collect::<Result<Vec<u8>, _>>()?;
    log::trace!("bit_dotted_to_cidr({s}) octets={octets:?}");
    Ok(octets.iter().join("."))
}
