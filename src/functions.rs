//! String-in / string-out entry points for callers that only hold CIDR text.
//!
//! Argument checks and error wording follow the plugin functions these
//! computations were first exposed through.

use crate::error::CidrError;
use crate::models::Prefix;
use crate::processing::{complement_ordered, exclude_all, SiblingOrder};

/// Failure of a caller-facing function.
///
/// Engine failures are chained through `source()`, not repeated in the
/// message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunctionError {
    #[error("The {0} argument must be provided and valid")]
    MissingArgument(&'static str),

    #[error("Error calculating inverse CIDRs")]
    InverseCidr(#[source] CidrError),

    #[error("Error calculating reverse DNS")]
    ReverseDns(#[source] CidrError),
}

impl FunctionError {
    /// The underlying engine error, if any.
    pub fn cause(&self) -> Option<&CidrError> {
        match self {
            FunctionError::MissingArgument(_) => None,
            FunctionError::InverseCidr(e) | FunctionError::ReverseDns(e) => Some(e),
        }
    }
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, FunctionError> {
    if value.trim().is_empty() {
        Err(FunctionError::MissingArgument(name))
    } else {
        Ok(value)
    }
}

fn render(prefixes: Vec<Prefix>) -> Vec<String> {
    prefixes.iter().map(Prefix::render).collect()
}

/// Complement of `child_cidr` inside `parent_cidr`, coarse to fine.
pub fn inverse_cidrs(parent_cidr: &str, child_cidr: &str) -> Result<Vec<String>, FunctionError> {
    inverse_cidrs_ordered(parent_cidr, child_cidr, SiblingOrder::default())
}

/// Complement of `child_cidr` inside `parent_cidr`, in the requested order.
pub fn inverse_cidrs_ordered(
    parent_cidr: &str,
    child_cidr: &str,
    order: SiblingOrder,
) -> Result<Vec<String>, FunctionError> {
    let parent_cidr = required("parent_cidr", parent_cidr)?;
    let child_cidr = required("child_cidr", child_cidr)?;

    let parent = Prefix::parse(parent_cidr).map_err(FunctionError::InverseCidr)?;
    let child = Prefix::parse(child_cidr).map_err(FunctionError::InverseCidr)?;
    let siblings = complement_ordered(&parent, &child, order).map_err(FunctionError::InverseCidr)?;
    Ok(render(siblings))
}

/// Cover of `parent_cidr` minus every entry of `child_cidrs`, by address.
pub fn exclude_cidrs<S: AsRef<str>>(
    parent_cidr: &str,
    child_cidrs: &[S],
) -> Result<Vec<String>, FunctionError> {
    let parent_cidr = required("parent_cidr", parent_cidr)?;
    let parent = Prefix::parse(parent_cidr).map_err(FunctionError::InverseCidr)?;

    let mut children = Vec::with_capacity(child_cidrs.len());
    for child_cidr in child_cidrs {
        let child_cidr = required("child_cidr", child_cidr.as_ref())?;
        children.push(Prefix::parse(child_cidr).map_err(FunctionError::InverseCidr)?);
    }

    let kept = exclude_all(&parent, &children).map_err(FunctionError::InverseCidr)?;
    Ok(render(kept))
}

/// PTR domain name of `ip_address`.
pub fn reverse_dns(ip_address: &str) -> Result<String, FunctionError> {
    let ip_address = required("ip_address", ip_address)?;
    crate::reverse_dns::reverse_dns(ip_address).map_err(FunctionError::ReverseDns)
}
