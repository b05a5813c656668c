//! The computed ipcalc result and its renderings.

use super::terminal::format_row;
use crate::error::IpcalcError;
use crate::models::Ipv4;
use serde::Serialize;

/// Every derived value for one address/prefix, computed once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The parsed input, serialised as `a.b.c.d/p`.
    pub cidr: Ipv4,
    pub address: String,
    pub address_bits: String,
    pub prefix: u8,
    pub netmask: String,
    pub netmask_bits: String,
    pub network: String,
    pub network_bits: String,
}

impl Report {
    pub fn new(ipv4: &Ipv4) -> Result<Report, IpcalcError> {
        let report = Report {
            cidr: *ipv4,
            address: ipv4.addr_to_cidr()?,
            address_bits: ipv4.addr_to_dot(),
            prefix: ipv4.prefix,
            netmask: ipv4.netmask_to_cidr()?,
            netmask_bits: ipv4.netmask_to_dot()?,
            network: ipv4.netaddr_to_cidr()?,
            network_bits: ipv4.netaddr_to_dot()?,
        };
        log::debug!("Report::new({ipv4}) network={}", report.network);
        Ok(report)
    }

    /// The five-line text report.
    ///
    /// The first three lines are bit-dotted, the last two decimal. The
    /// address is only ever shown bit-dotted.
    pub fn to_text(&self) -> String {
        let rows = [
            format_row("IP Address", &self.address_bits),
            format_row("Netmask", &self.netmask_bits),
            format_row("Net Address", &self.network_bits),
            format_row("Netmask", &self.netmask),
            format_row("Net Address", &self.network),
        ];
        let mut out = rows.join("\n");
        out.push('\n');
        out
    }

    /// Pretty-printed JSON object with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(input: &str) -> Report {
        Report::new(&Ipv4::new(input).unwrap()).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let r = report("192.168.1.10/24");
        assert_eq!(r.address, "192.168.1.10");
        assert_eq!(r.address_bits, "11000000.10101000.00000001.00001010");
        assert_eq!(r.prefix, 24);
        assert_eq!(r.netmask, "255.255.255.0");
        assert_eq!(r.netmask_bits, "11111111.11111111.11111111.00000000");
        assert_eq!(r.network, "192.168.1.0");
        assert_eq!(r.network_bits, "11000000.10101000.00000001.00000000");
    }

    #[test]
    fn test_to_text() {
        let expected = "\
IP Address       11000000.10101000.00000001.00001010
Netmask          11111111.11111111.11111111.00000000
Net Address      11000000.10101000.00000001.00000000
Netmask          255.255.255.0
Net Address      192.168.1.0
";
        assert_eq!(report("192.168.1.10/24").to_text(), expected);
    }

    #[test]
    fn test_to_text_has_five_lines() {
        assert_eq!(report("0.0.0.0/0").to_text().lines().count(), 5);
    }

    #[test]
    fn test_to_json() {
        let json = report("10.0.0.1/8").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cidr"], "10.0.0.1/8");
        assert_eq!(value["address"], "10.0.0.1");
        assert_eq!(value["prefix"], 8);
        assert_eq!(value["netmask"], "255.0.0.0");
        assert_eq!(value["netmask_bits"], "11111111.00000000.00000000.00000000");
        assert_eq!(value["network"], "10.0.0.0");
        assert!(json.ends_with("}\n"));
    }
}
