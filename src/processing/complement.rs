//! Single-child prefix complement.
//!
//! Bisects the parent down to the child's length, keeping at every level the
//! half that does not hold the child.

use crate::error::CidrError;
use crate::models::{cut_addr, Block, Prefix};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order of the sibling prefixes in a complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiblingOrder {
    /// One sibling per bisection level, widest (next to the parent) first.
    #[default]
    CoarseToFine,
    /// Same set, sorted by base address.
    Ascending,
}

impl FromStr for SiblingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coarse-to-fine" | "coarse" => Ok(SiblingOrder::CoarseToFine),
            "ascending" | "address" => Ok(SiblingOrder::Ascending),
            other => Err(format!("unknown sibling order '{other}'")),
        }
    }
}

impl fmt::Display for SiblingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiblingOrder::CoarseToFine => write!(f, "coarse-to-fine"),
            SiblingOrder::Ascending => write!(f, "ascending"),
        }
    }
}

/// Why a bisection could not finish.
#[derive(Debug, PartialEq, Eq)]
enum BisectFault {
    /// Asked to split a block that is already one address wide.
    Degenerate(Block),
    /// The child fell in neither half; it was never inside the parent.
    Diverged,
}

/// Siblings of `child` inside `parent`, coarse to fine.
///
/// Works on bare blocks of `width` bits so it is family agnostic.
fn bisect(width: u8, parent: Block, child: Block) -> Result<Vec<Block>, BisectFault> {
    let mut siblings = Vec::with_capacity(usize::from(child.len.saturating_sub(parent.len)));
    let mut current = parent;

    while current.len < child.len {
        let (lower, upper) = current
            .split(width)
            .ok_or(BisectFault::Degenerate(current))?;
        let child_base =
            cut_addr(child.base, lower.len, width).map_err(|_| BisectFault::Diverged)?;

        let (inner, sibling) = if child_base == lower.base {
            (lower, upper)
        } else if child_base == upper.base {
            (upper, lower)
        } else {
            return Err(BisectFault::Diverged);
        };
        log::trace!(
            "bisect /{len}: keep {sibling:?}, descend into {inner:?}",
            len = lower.len
        );
        siblings.push(sibling);
        current = inner;
    }

    if current != child {
        return Err(BisectFault::Diverged);
    }
    Ok(siblings)
}

/// Complement of `child` inside `parent`, coarse to fine.
///
/// The result holds exactly `child.len - parent.len` prefixes; together with
/// `child` they tile `parent` with no gaps and no overlap.
///
/// # Examples
/// ```
/// use inverse_cidr::models::Prefix;
/// use inverse_cidr::processing::complement;
///
/// let parent: Prefix = "192.168.0.0/24".parse().unwrap();
/// let child: Prefix = "192.168.0.0/26".parse().unwrap();
/// let siblings: Vec<String> = complement(&parent, &child)
///     .unwrap()
///     .iter()
///     .map(|p| p.to_string())
///     .collect();
/// assert_eq!(siblings, ["192.168.0.128/25", "192.168.0.64/26"]);
/// ```
pub fn complement(parent: &Prefix, child: &Prefix) -> Result<Vec<Prefix>, CidrError> {
    complement_ordered(parent, child, SiblingOrder::CoarseToFine)
}

/// Complement of `child` inside `parent`, in the requested order.
pub fn complement_ordered(
    parent: &Prefix,
    child: &Prefix,
    order: SiblingOrder,
) -> Result<Vec<Prefix>, CidrError> {
    let parent = parent.normalize();
    let child = child.normalize();
    log::debug!("complement(parent={parent}, child={child}, order={order})");

    check_child(&parent, &child)?;
    if parent == child {
        return Ok(Vec::new());
    }

    let width = parent.bit_width();
    let blocks = bisect(width, parent.block(), child.block()).map_err(|fault| match fault {
        BisectFault::Degenerate(block) => CidrError::DegenerateMask {
            prefix: parent.with_block(block),
        },
        BisectFault::Diverged => CidrError::NotContained { child, parent },
    })?;

    let mut siblings: Vec<Prefix> = blocks.into_iter().map(|b| parent.with_block(b)).collect();
    if order == SiblingOrder::Ascending {
        siblings.sort();
    }
    log::debug!("complement of {child} in {parent}: {} prefixes", siblings.len());
    Ok(siblings)
}

/// Validate that `child` can be carved out of `parent`.
///
/// Both must already be normalized.
pub(crate) fn check_child(parent: &Prefix, child: &Prefix) -> Result<(), CidrError> {
    if parent.family != child.family {
        return Err(CidrError::AddressFamilyMismatch {
            parent: *parent,
            child: *child,
        });
    }
    if parent == child {
        return Ok(());
    }
    if parent.is_host() {
        return Err(CidrError::DegenerateMask { prefix: *parent });
    }
    if !parent.contains(child) {
        return Err(CidrError::NotContained {
            child: *child,
            parent: *parent,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(s: &str) -> Prefix {
        Prefix::parse(s).unwrap()
    }

    fn texts(prefixes: &[Prefix]) -> Vec<String> {
        prefixes.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_bisect_synthetic_width() {
        // 8-bit space: carve 0b0110_0000/3 out of 0b0100_0000/2.
        let got = bisect(8, Block::new(0b0100_0000, 2), Block::new(0b0110_0000, 3)).unwrap();
        assert_eq!(got, vec![Block::new(0b0100_0000, 3)]);

        // Down to a single address: one sibling per level.
        let got = bisect(8, Block::new(0, 0), Block::new(0b0000_0101, 8)).unwrap();
        assert_eq!(got.len(), 8);
        assert_eq!(got[0], Block::new(0b1000_0000, 1));
        assert_eq!(got[7], Block::new(0b0000_0100, 8));
    }

    #[test]
    fn test_bisect_faults() {
        assert_eq!(
            bisect(8, Block::new(0, 8), Block::new(0, 9)),
            Err(BisectFault::Degenerate(Block::new(0, 8)))
        );
        // Child outside the parent never matches either half.
        assert_eq!(
            bisect(8, Block::new(0, 1), Block::new(0b1000_0000, 2)),
            Err(BisectFault::Diverged)
        );
    }

    #[test]
    fn test_complement_ipv4_low_child() {
        let got = complement(&p("192.168.0.0/24"), &p("192.168.0.0/26")).unwrap();
        assert_eq!(texts(&got), vec!["192.168.0.128/25", "192.168.0.64/26"]);

        let got = complement_ordered(
            &p("192.168.0.0/24"),
            &p("192.168.0.0/26"),
            SiblingOrder::Ascending,
        )
        .unwrap();
        assert_eq!(texts(&got), vec!["192.168.0.64/26", "192.168.0.128/25"]);
    }

    #[test]
    fn test_complement_coarse_to_fine() {
        let got = complement(&p("10.103.0.0/18"), &p("10.103.1.0/24")).unwrap();
        assert_eq!(
            texts(&got),
            vec![
                "10.103.32.0/19",
                "10.103.16.0/20",
                "10.103.8.0/21",
                "10.103.4.0/22",
                "10.103.2.0/23",
                "10.103.0.0/24",
            ]
        );
    }

    #[test]
    fn test_complement_ipv6() {
        let got = complement_ordered(
            &p("2001:db8::/48"),
            &p("2001:db8::/50"),
            SiblingOrder::Ascending,
        )
        .unwrap();
        assert_eq!(
            texts(&got),
            vec!["2001:db8:0:4000::/50", "2001:db8:0:8000::/49"]
        );
    }

    #[test]
    fn test_complement_identity() {
        assert!(complement(&p("10.0.0.0/8"), &p("10.0.0.0/8")).unwrap().is_empty());
        assert!(complement(&p("10.0.0.1/32"), &p("10.0.0.1/32")).unwrap().is_empty());
        assert!(complement(&p("::/0"), &p("::/0")).unwrap().is_empty());
    }

    #[test]
    fn test_complement_to_host() {
        let got = complement(&p("10.0.0.0/30"), &p("10.0.0.3/32")).unwrap();
        assert_eq!(texts(&got), vec!["10.0.0.0/31", "10.0.0.2/32"]);

        let got = complement(&p("::/0"), &p("::1/128")).unwrap();
        assert_eq!(got.len(), 128);
        assert_eq!(got[0].to_string(), "8000::/1");
        assert_eq!(got[127].to_string(), "::/128");
    }

    #[test]
    fn test_complement_errors() {
        let parent = p("192.168.0.0/16");
        let child = p("172.16.0.0/24");
        assert_eq!(
            complement(&parent, &child).unwrap_err(),
            CidrError::NotContained { child, parent }
        );

        // Child wider than the parent.
        let err = complement(&p("10.1.0.0/16"), &p("10.0.0.0/8")).unwrap_err();
        assert!(matches!(err, CidrError::NotContained { .. }));

        let err = complement(&p("10.0.0.0/8"), &p("::/0")).unwrap_err();
        assert!(matches!(err, CidrError::AddressFamilyMismatch { .. }));

        let host = p("10.0.0.1/32");
        assert_eq!(
            complement(&host, &p("10.0.0.2/32")).unwrap_err(),
            CidrError::DegenerateMask { prefix: host }
        );
    }

    #[test]
    fn test_sibling_order_from_str() {
        assert_eq!(
            "coarse-to-fine".parse::<SiblingOrder>(),
            Ok(SiblingOrder::CoarseToFine)
        );
        assert_eq!(
            " Ascending ".parse::<SiblingOrder>(),
            Ok(SiblingOrder::Ascending)
        );
        assert!("random".parse::<SiblingOrder>().is_err());
        assert_eq!(SiblingOrder::default(), SiblingOrder::CoarseToFine);
    }
}
