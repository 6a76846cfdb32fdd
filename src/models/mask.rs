//! Width-generic CIDR mask arithmetic.
//!
//! Addresses are carried right-aligned in a `u128`; `width` is the number of
//! significant bits (32 for IPv4, 128 for IPv6, anything up to 128 in tests).
//! Nothing here ever touches a bit at or above `width`.

use crate::error::CidrError;

/// Largest supported address width.
pub const MAX_WIDTH: u8 = 128;

fn check_len(len: u8, width: u8) -> Result<(), CidrError> {
    if width > MAX_WIDTH {
        Err(CidrError::invalid_format(
            &format!("/{len}"),
            format!("address width {width} exceeds {MAX_WIDTH} bits"),
        ))
    } else if len > width {
        Err(CidrError::invalid_format(
            &format!("/{len}"),
            format!("prefix length exceeds {width} bits"),
        ))
    } else {
        Ok(())
    }
}

/// All `width` low bits set.
pub fn address_mask(width: u8) -> u128 {
    if width >= MAX_WIDTH {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// Convert a prefix length to a network mask of `width` bits.
///
/// # Examples
/// ```
/// use inverse_cidr::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24, 32).unwrap(), 0xFFFF_FF00);
/// ```
pub fn get_cidr_mask(len: u8, width: u8) -> Result<u128, CidrError> {
    check_len(len, width)?;
    let host_bits = u32::from(width - len);
    let mask = u128::MAX.checked_shl(host_bits).unwrap_or(0);
    Ok(mask & address_mask(width))
}

/// Network address of `addr` for the given prefix length.
pub fn cut_addr(addr: u128, len: u8, width: u8) -> Result<u128, CidrError> {
    Ok(addr & get_cidr_mask(len, width)?)
}

/// Last address (all host bits set) of the network containing `addr`.
pub fn broadcast_addr(addr: u128, len: u8, width: u8) -> Result<u128, CidrError> {
    let mask = get_cidr_mask(len, width)?;
    Ok((addr & mask) | (!mask & address_mask(width)))
}

/// The single bit that separates the two halves of a split at `new_len`.
///
/// This is bit number `width - new_len`, counted from the least significant end.
pub fn boundary_bit(new_len: u8, width: u8) -> Result<u128, CidrError> {
    check_len(new_len, width)?;
    if new_len == 0 {
        return Err(CidrError::invalid_format(
            "/0",
            "a /0 network has no boundary bit",
        ));
    }
    Ok(1u128 << (width - new_len))
}
