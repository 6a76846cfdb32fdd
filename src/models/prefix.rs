//! CIDR prefixes for both address families.
//!
//! Provides [`Prefix`] plus the parse / normalize / render surface used by the
//! complement engines.

use super::block::Block;
use super::family::AddressFamily;
use super::mask::{address_mask, broadcast_addr, cut_addr, get_cidr_mask};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A network prefix: `addr/len` within one address family.
///
/// Every constructor clears host bits, so two prefixes covering the same
/// range compare equal. Ordered by family, then base address, then length.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    /// Address family, fixes the bit width.
    pub(crate) family: AddressFamily,
    /// Base address bits, right-aligned.
    pub(crate) addr: u128,
    /// Prefix length (0..=width).
    pub(crate) len: u8,
}

impl Prefix {
    /// Build a prefix from raw address bits, clearing any host bits.
    pub fn new(family: AddressFamily, addr: u128, len: u8) -> Result<Prefix, CidrError> {
        let width = family.bit_width();
        if addr & !address_mask(width) != 0 {
            return Err(CidrError::invalid_format(
                &format!("{addr:#x}/{len}"),
                format!("address does not fit in {family}"),
            ));
        }
        let addr = cut_addr(addr, len, width)?;
        Ok(Prefix { family, addr, len })
    }

    /// Build a prefix from a parsed address, clearing any host bits.
    pub fn from_ip(ip: IpAddr, len: u8) -> Result<Prefix, CidrError> {
        Prefix::new(AddressFamily::of(&ip), AddressFamily::to_bits(&ip), len)
    }

    pub const fn family(&self) -> AddressFamily {
        self.family
    }

    /// Base address bits, right-aligned.
    pub const fn addr(&self) -> u128 {
        self.addr
    }

    pub const fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Parse CIDR text such as `10.0.0.0/8` or `2001:db8::/32`.
    pub fn parse(text: &str) -> Result<Prefix, CidrError> {
        let trimmed = text.trim();
        let (addr_str, len_str) = trimmed
            .split_once('/')
            .ok_or_else(|| CidrError::invalid_format(text, "missing '/length' suffix"))?;

        let bad_len =
            || CidrError::invalid_format(text, format!("invalid prefix length '{len_str}'"));
        let digits = len_str.bytes().all(|b| b.is_ascii_digit());
        if len_str.is_empty() || len_str.len() > 3 || !digits {
            return Err(bad_len());
        }
        let len: u8 = len_str.parse().map_err(|_| bad_len())?;

        let ip: IpAddr = addr_str.parse().map_err(|_| {
            CidrError::invalid_format(text, format!("invalid address '{addr_str}'"))
        })?;

        let width = AddressFamily::of(&ip).bit_width();
        if len > width {
            return Err(CidrError::invalid_format(
                text,
                format!("prefix length {len} exceeds {width} bits"),
            ));
        }
        Prefix::from_ip(ip, len)
    }

    /// Clear any host bits past `len`.
    ///
    /// A length beyond the family width is clamped to the width.
    pub fn normalize(&self) -> Prefix {
        let width = self.bit_width();
        let len = self.len.min(width);
        let mask = get_cidr_mask(len, width).unwrap_or(0);
        Prefix {
            family: self.family,
            addr: self.addr & mask,
            len,
        }
    }

    /// Canonical CIDR text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Number of address bits for this prefix's family.
    pub const fn bit_width(&self) -> u8 {
        self.family.bit_width()
    }

    /// True for a single-address prefix (/32 or /128).
    pub const fn is_host(&self) -> bool {
        self.len >= self.bit_width()
    }

    /// Lowest (network) address.
    pub fn lo(&self) -> IpAddr {
        self.family.to_addr(*self.range().start())
    }

    /// Highest (broadcast) address.
    pub fn hi(&self) -> IpAddr {
        self.family.to_addr(*self.range().end())
    }

    /// Inclusive range of address bits covered by this prefix.
    pub fn range(&self) -> RangeInclusive<u128> {
        let p = self.normalize();
        let hi = broadcast_addr(p.addr, p.len, p.bit_width()).unwrap_or(p.addr);
        p.addr..=hi
    }

    /// True when `other` is the same family and lies entirely inside `self`.
    pub fn contains(&self, other: &Prefix) -> bool {
        self.family == other.family
            && self
                .normalize()
                .block()
                .covers(other.normalize().block(), self.bit_width())
    }

    /// Split into the lower and upper half, one bit longer.
    pub fn split(&self) -> Result<(Prefix, Prefix), CidrError> {
        let p = self.normalize();
        let (lower, upper) = p
            .block()
            .split(p.bit_width())
            .ok_or(CidrError::DegenerateMask { prefix: p })?;
        Ok((p.with_block(lower), p.with_block(upper)))
    }

    pub(crate) fn block(&self) -> Block {
        Block::new(self.addr, self.len)
    }

    pub(crate) fn with_block(&self, block: Block) -> Prefix {
        Prefix {
            family: self.family,
            addr: block.base,
            len: block.len,
        }
    }
}

/// Parse and re-render CIDR text in canonical form.
///
/// ```
/// use inverse_cidr::models::normalize_cidr;
/// assert_eq!(normalize_cidr("2001:DB8:0::1/32").unwrap(), "2001:db8::/32");
/// ```
pub fn normalize_cidr(text: &str) -> Result<String, CidrError> {
    Prefix::parse(text).map(|p| p.render())
}

impl FromStr for Prefix {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::parse(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.family.to_addr(self.addr), self.len)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ipv4() {
        let p = Prefix::parse("192.168.0.0/24").unwrap();
        assert_eq!(p.family, AddressFamily::Ipv4);
        assert_eq!(p.addr, 0xC0A8_0000);
        assert_eq!(p.len, 24);
        assert_eq!(p.bit_width(), 32);
    }

    #[test]
    fn test_parse_ipv6() {
        let p: Prefix = "2001:db8::/32".parse().unwrap();
        assert_eq!(p.family, AddressFamily::Ipv6);
        assert_eq!(p.addr >> 96, 0x2001_0db8);
        assert_eq!(p.len, 32);
        assert_eq!(p.bit_width(), 128);
    }

    #[test]
    fn test_parse_clears_host_bits() {
        let p = Prefix::parse(" 10.2.3.4/16 ").unwrap();
        assert_eq!(p.to_string(), "10.2.0.0/16");
        let p = Prefix::parse("2001:db8::1/64").unwrap();
        assert_eq!(p.to_string(), "2001:db8::/64");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in [
            "",
            "invalid-cidr",
            "10.0.0.0",
            "10.0.0.0/",
            "10.0.0.0/33",
            "10.0.0.0/+8",
            "10.0.0.0/-1",
            "10.0.0.0/8/8",
            "10.0.0.0/1000",
            "10.0.0/8",
            "256.0.0.0/8",
            "2001:db8::/129",
            "2001:db8:::/32",
            "2001:dg8::/32",
        ] {
            let err = Prefix::parse(bad).unwrap_err();
            assert!(
                matches!(err, CidrError::InvalidFormat { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_normalize() {
        let raw = Prefix {
            family: AddressFamily::Ipv4,
            addr: 0x0A00_0001,
            len: 8,
        };
        assert_eq!(raw.normalize().addr, 0x0A00_0000);
        assert_eq!(raw.normalize().normalize(), raw.normalize());

        let too_long = Prefix {
            family: AddressFamily::Ipv4,
            addr: 0x0A00_0001,
            len: 40,
        };
        assert_eq!(too_long.normalize().len, 32);
    }

    #[test]
    fn test_equal_ranges_compare_equal() {
        let dirty = Prefix::new(AddressFamily::Ipv4, 0x0A01_0203, 16).unwrap();
        let clean = Prefix::parse("10.1.0.0/16").unwrap();
        assert_eq!(dirty, clean);
        assert_eq!(dirty.addr(), 0x0A01_0000);
        assert_eq!(dirty.prefix_len(), 16);
        assert_eq!(dirty.family(), AddressFamily::Ipv4);
        assert_eq!(Prefix::from_ip("10.1.2.3".parse().unwrap(), 16).unwrap(), clean);
    }

    #[test]
    fn test_new_rejects_wide_address() {
        assert!(Prefix::new(AddressFamily::Ipv4, 1u128 << 32, 8).is_err());
        assert!(Prefix::new(AddressFamily::Ipv4, 0, 33).is_err());
        assert!(Prefix::new(AddressFamily::Ipv6, 1u128 << 127, 1).is_ok());
    }

    #[test]
    fn test_render_ipv6_lowercase_compressed() {
        let p = Prefix::parse("2001:DB8:0:4000:0:0:0:0/50").unwrap();
        assert_eq!(p.render(), "2001:db8:0:4000::/50");
        // Bits past /50 are host bits and do not survive parsing.
        assert_eq!(
            normalize_cidr("2001:db8:0:0:4000::/50").unwrap(),
            "2001:db8::/50"
        );
        assert_eq!(normalize_cidr("::/0").unwrap(), "::/0");
    }

    #[test]
    fn test_lo_hi() {
        let p = Prefix::parse("10.0.0.0/8").unwrap();
        assert_eq!(p.lo().to_string(), "10.0.0.0");
        assert_eq!(p.hi().to_string(), "10.255.255.255");
        let p = Prefix::parse("::/0").unwrap();
        assert_eq!(p.range(), 0..=u128::MAX);
        assert_eq!(p.hi().to_string(), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
    }

    #[test]
    fn test_contains() {
        let parent = Prefix::parse("192.168.0.0/16").unwrap();
        assert!(parent.contains(&Prefix::parse("192.168.1.0/24").unwrap()));
        assert!(parent.contains(&parent));
        assert!(!parent.contains(&Prefix::parse("172.16.0.0/24").unwrap()));
        assert!(!parent.contains(&Prefix::parse("192.0.0.0/8").unwrap()));
        // Same numeric bits, other family.
        assert!(!Prefix::parse("::/0")
            .unwrap()
            .contains(&Prefix::parse("0.0.0.0/0").unwrap()));
    }

    #[test]
    fn test_split() {
        let (lower, upper) = Prefix::parse("192.168.0.0/24").unwrap().split().unwrap();
        assert_eq!(lower.to_string(), "192.168.0.0/25");
        assert_eq!(upper.to_string(), "192.168.0.128/25");

        let host = Prefix::parse("10.0.0.1/32").unwrap();
        assert_eq!(
            host.split().unwrap_err(),
            CidrError::DegenerateMask { prefix: host }
        );
    }

    #[test]
    fn test_ordering() {
        let ip1 = Prefix::parse("10.0.10.0/24").unwrap();
        let ip2 = Prefix::parse("10.0.0.0/8").unwrap();
        let ip3 = Prefix::parse("10.0.10.64/26").unwrap();
        let v6 = Prefix::parse("::/0").unwrap();
        assert!(ip2 < ip1);
        assert!(ip1 < ip3);
        assert!(ip3 < v6);
    }

    #[test]
    fn test_serde() {
        let p = Prefix::parse("10.103.0.0/18").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"10.103.0.0/18\"");
        let back: Prefix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Prefix>("\"10.0.0.0\"").is_err());
    }
}
