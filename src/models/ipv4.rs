//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct, an address plus prefix length parsed from
//! `a.b.c.d/p`, along with the derived netmask and network address in
//! bit-dotted and decimal form.

use super::bits::{
    address_to_bits, bit_dotted_to_cidr, bits_to_dotted, netmask_bits, network_address_bits,
    Bits,
};
use crate::error::IpcalcError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // [0-9] rather than \d, which would accept any Unicode digit.
    static ref CIDR_RE: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)/([0-9]+)$").expect("Invalid Regex?");
}

/// IPv4 address with CIDR prefix length.
#[derive(Eq, Debug, Copy, Clone, Hash, PartialEq)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "192.168.1.10/24").
    ///
    /// Octets above 255 and prefixes above 32 are rejected.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, IpcalcError> {
        let addr_cidr = addr_cidr.trim();
        let caps = CIDR_RE.captures(addr_cidr).ok_or_else(|| {
            IpcalcError::Format(format!("expected <a.b.c.d>/<prefix>, got '{addr_cidr}'"))
        })?;

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let raw = &caps[i + 1];
            *octet = raw
                .parse()
                .map_err(|_| IpcalcError::Format(format!("octet {raw} is out of range 0-255")))?;
        }

        let raw_prefix = &caps[5];
        let prefix: u8 = raw_prefix.parse().map_err(|_| {
            IpcalcError::Format(format!(
                "prefix {raw_prefix} is out of range 0-{MAX_LENGTH}"
            ))
        })?;
        if prefix > MAX_LENGTH {
            return Err(IpcalcError::Format(format!(
                "prefix {prefix} is out of range 0-{MAX_LENGTH}"
            )));
        }

        let ipv4 = Ipv4 {
            addr: Ipv4Addr::from(octets),
            prefix,
        };
        log::debug!("Ipv4::new({addr_cidr}) => {ipv4:?}");
        Ok(ipv4)
    }

    pub fn address_bits(&self) -> Bits {
        address_to_bits(self.addr)
    }

    pub fn netmask_bits(&self) -> Result<Bits, IpcalcError> {
        netmask_bits(self.prefix)
    }

    pub fn network_bits(&self) -> Result<Bits, IpcalcError> {
        network_address_bits(self.addr, self.prefix)
    }

    /// Bit-dotted form of the address itself.
    pub fn addr_to_dot(&self) -> String {
        bits_to_dotted(&self.address_bits())
    }

    /// Bit-dotted form of the netmask.
    pub fn netmask_to_dot(&self) -> Result<String, IpcalcError> {
        Ok(bits_to_dotted(&self.netmask_bits()?))
    }

    /// Bit-dotted form of the network address.
    pub fn netaddr_to_dot(&self) -> Result<String, IpcalcError> {
        Ok(bits_to_dotted(&self.network_bits()?))
    }

    /// Decimal dotted-quad of the address.
    pub fn addr_to_cidr(&self) -> Result<String, IpcalcError> {
        bit_dotted_to_cidr(&self.addr_to_dot())
    }

    /// Decimal dotted-quad of the netmask, e.g. `255.255.255.0`.
    pub fn netmask_to_cidr(&self) -> Result<String, IpcalcError> {
        bit_dotted_to_cidr(&self.netmask_to_dot()?)
    }

    /// Decimal dotted-quad of the network address, e.g. `192.168.1.0`.
    pub fn netaddr_to_cidr(&self) -> Result<String, IpcalcError> {
        bit_dotted_to_cidr(&self.netaddr_to_dot()?)
    }

    /// Network address as a std address.
    pub fn network(&self) -> Result<Ipv4Addr, IpcalcError> {
        Ok(Ipv4Addr::from(self.network_bits()?))
    }
}

impl FromStr for Ipv4 {
    type Err = IpcalcError;

    fn from_str(s: &str) -> Result<Ipv4, IpcalcError> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let ip = Ipv4::new("192.168.1.10/24").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(ip.prefix, 24);
        assert_eq!(ip.to_string(), "192.168.1.10/24");

        let ip: Ipv4 = " 10.0.0.1/8\n".parse().unwrap();
        assert_eq!(ip, Ipv4::new("10.0.0.1/8").unwrap());
    }

    #[test]
    fn test_new_rejects() {
        for input in [
            "",
            "192.168.1.1",
            "10.0.0.1/33",
            "10.0.0.1/-1",
            "a.b.c.d/24",
            "10.0.0/24",
            "10.0.0.1/",
            "10.0.0.1/24/8",
            "x10.0.0.1/24",
            "10.0.0.1/24 extra",
            "10.0.0.1/99999999999999999999",
        ] {
            assert!(
                matches!(Ipv4::new(input), Err(IpcalcError::Format(_))),
                "'{input}' should not parse"
            );
        }
    }

    #[test]
    fn test_new_rejects_octet_over_255() {
        let err = Ipv4::new("256.0.0.1/24").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid IP format: octet 256 is out of range 0-255"
        );
        assert!(Ipv4::new("1.2.3.999/24").is_err());
    }

    #[test]
    fn test_prefix_bounds() {
        assert_eq!(Ipv4::new("1.2.3.4/0").unwrap().prefix, 0);
        assert_eq!(Ipv4::new("1.2.3.4/32").unwrap().prefix, 32);
        assert_eq!(
            Ipv4::new("1.2.3.4/33").unwrap_err().to_string(),
            "Invalid IP format: prefix 33 is out of range 0-32"
        );
    }

    #[test]
    fn test_dot_forms() {
        let ip = Ipv4::new("192.168.1.10/24").unwrap();
        assert_eq!(ip.addr_to_dot(), "11000000.10101000.00000001.00001010");
        assert_eq!(
            ip.netmask_to_dot().unwrap(),
            "11111111.11111111.11111111.00000000"
        );
        assert_eq!(
            ip.netaddr_to_dot().unwrap(),
            "11000000.10101000.00000001.00000000"
        );
    }

    #[test]
    fn test_cidr_forms() {
        let cases = [
            ("192.168.1.10/24", "255.255.255.0", "192.168.1.0"),
            ("10.0.0.1/8", "255.0.0.0", "10.0.0.0"),
            ("0.0.0.0/0", "0.0.0.0", "0.0.0.0"),
            ("255.255.255.255/32", "255.255.255.255", "255.255.255.255"),
            ("172.16.254.3/12", "255.240.0.0", "172.16.0.0"),
            ("10.1.1.77/29", "255.255.255.248", "10.1.1.72"),
        ];
        for (input, netmask, netaddr) in cases {
            let ip = Ipv4::new(input).unwrap();
            assert_eq!(ip.netmask_to_cidr().unwrap(), netmask, "{input}");
            assert_eq!(ip.netaddr_to_cidr().unwrap(), netaddr, "{input}");
            assert_eq!(ip.network().unwrap().to_string(), netaddr, "{input}");
        }
    }

    #[test]
    fn test_addr_to_cidr() {
        let ip = Ipv4::new("192.168.001.010/24").unwrap();
        assert_eq!(ip.addr_to_cidr().unwrap(), "192.168.1.10");
    }

    #[test]
    fn test_serde() {
        let ip = Ipv4::new("10.0.0.1/8").unwrap();
        assert_eq!(serde_json::to_string(&ip).unwrap(), "\"10.0.0.1/8\"");
        let back: Ipv4 = serde_json::from_str("\"10.0.0.1/8\"").unwrap();
        assert_eq!(back, ip);
        assert!(serde_json::from_str::<Ipv4>("\"10.0.0.1/40\"").is_err());
    }
}
