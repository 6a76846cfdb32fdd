//! Complement ("inverse") of a child prefix inside a parent prefix.
//!
//! Given `parent` and a `child` inside it, [`processing::complement`] returns
//! the sibling prefixes that, together with `child`, tile `parent` exactly:
//! one per bisection level, widest first. Works for IPv4 and IPv6; the engine
//! only ever sees a bit width.
//!
//! ```
//! use inverse_cidr::functions::inverse_cidrs;
//!
//! let siblings = inverse_cidrs("10.103.0.0/18", "10.103.1.0/24").unwrap();
//! assert_eq!(siblings[0], "10.103.32.0/19");
//! assert_eq!(siblings.len(), 6);
//! ```

pub mod cmd;
pub mod config;
pub mod error;
pub mod functions;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod reverse_dns;

pub use error::CidrError;
pub use models::{AddressFamily, Prefix};
pub use processing::{complement, complement_ordered, exclude_all, SiblingOrder};
