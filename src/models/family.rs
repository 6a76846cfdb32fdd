//! Address families and their bit widths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// The address family of a prefix. Fixes the bit width `W` and the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// Dotted-quad, 32 bits.
    Ipv4,
    /// Colon-hex, 128 bits.
    Ipv6,
}

impl AddressFamily {
    /// Total number of address bits for this family.
    pub const fn bit_width(self) -> u8 {
        match self {
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }

    /// Family of a parsed address.
    pub const fn of(addr: &IpAddr) -> AddressFamily {
        match addr {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    /// Address bits of `addr`, right-aligned in a `u128`.
    pub fn to_bits(addr: &IpAddr) -> u128 {
        match addr {
            IpAddr::V4(v4) => u128::from(u32::from(*v4)),
            IpAddr::V6(v6) => u128::from(*v6),
        }
    }

    /// Turn address bits back into an address of this family.
    ///
    /// Bits above the family width are dropped.
    pub fn to_addr(self, bits: u128) -> IpAddr {
        match self {
            AddressFamily::Ipv4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            AddressFamily::Ipv6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}
