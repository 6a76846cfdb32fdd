//! Error kinds raised while parsing prefixes and computing complements.

use crate::models::Prefix;

/// Failure of a prefix parse or a complement computation.
///
/// Every variant carries the offending value(s) so the caller-facing layer
/// can build its own message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrError {
    #[error("invalid CIDR format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("cannot parse IP address '{input}'")]
    InvalidAddress { input: String },

    #[error("address family mismatch: parent {parent} and child {child}")]
    AddressFamilyMismatch { parent: Prefix, child: Prefix },

    #[error("child CIDR {child} is not within parent CIDR {parent}")]
    NotContained { child: Prefix, parent: Prefix },

    #[error("cannot split {prefix}: prefix length is already at the address width")]
    DegenerateMask { prefix: Prefix },
}

impl CidrError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        CidrError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
