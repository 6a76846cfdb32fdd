//! Prefix complement engines.
//!
//! - [`complement`] - one child, one sibling per bisection level
//! - [`exclude_all`] - several children, worklist splitting

mod complement;
mod exclude;

// Re-export public functions
pub use complement::{complement, complement_ordered, SiblingOrder};
pub use exclude::exclude_all;
