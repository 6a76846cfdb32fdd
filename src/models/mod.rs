//! Address family adapter.
//!
//! This module contains the data structures the engines work on:
//! - [`AddressFamily`] - IPv4 / IPv6 and their bit widths
//! - [`Prefix`] - CIDR prefix with parse, normalize and render
//! - [`get_cidr_mask`] and friends - width-generic mask arithmetic

mod block;
mod family;
mod mask;
mod prefix;

// Re-export public types
pub(crate) use block::Block;
pub use family::AddressFamily;
pub use mask::{
    address_mask, boundary_bit, broadcast_addr, cut_addr, get_cidr_mask, MAX_WIDTH,
};
pub use prefix::{normalize_cidr, Prefix};
