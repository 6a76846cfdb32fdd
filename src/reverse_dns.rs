//! Reverse-lookup (PTR) domain names for single addresses.

use crate::error::CidrError;
use itertools::Itertools;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// PTR name for an address given as text, e.g. `192.168.1.10`.
///
/// ```
/// use inverse_cidr::reverse_dns::reverse_dns;
/// assert_eq!(reverse_dns("192.168.1.10").unwrap(), "10.1.168.192.in-addr.arpa.");
/// ```
pub fn reverse_dns(ip_address: &str) -> Result<String, CidrError> {
    let ip: IpAddr = ip_address
        .trim()
        .parse()
        .map_err(|_| CidrError::InvalidAddress {
            input: ip_address.to_string(),
        })?;
    Ok(reverse_dns_addr(ip))
}

/// PTR name for a parsed address.
///
/// IPv4-mapped IPv6 addresses get the `in-addr.arpa.` form.
pub fn reverse_dns_addr(ip: IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => reverse_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => reverse_v4(v4),
            None => reverse_v6(v6),
        },
    }
}

fn reverse_v4(ip: Ipv4Addr) -> String {
    let joined = ip.octets().iter().rev().join(".");
    format!("{joined}.in-addr.arpa.")
}

fn reverse_v6(ip: Ipv6Addr) -> String {
    let joined = ip
        .octets()
        .iter()
        .rev()
        .flat_map(|b| [b & 0x0f, b >> 4])
        .map(|nibble| format!("{nibble:x}"))
        .join(".");
    format!("{joined}.ip6.arpa.")
}
