//! Multi-exclusion mode: carve several child prefixes out of one parent.
//!
//! Unlike the single-child `complement` this keeps splitting candidates
//! until every exclusion is isolated, so the output is a set of blocks rather
//! than one sibling per level. Results are sorted by address.

use super::complement::check_child;
use crate::error::CidrError;
use crate::models::{Block, Prefix};

/// Cover `parent` minus every prefix in `children`.
///
/// Exclusions may overlap or repeat. An empty exclusion list returns
/// `[parent]`; excluding the parent itself returns nothing.
pub fn exclude_all(parent: &Prefix, children: &[Prefix]) -> Result<Vec<Prefix>, CidrError> {
    let parent = parent.normalize();
    let mut exclusions = Vec::with_capacity(children.len());
    for child in children {
        let child = child.normalize();
        check_child(&parent, &child)?;
        exclusions.push(child.block());
    }
    exclusions.sort();
    exclusions.dedup();
    log::debug!(
        "exclude_all(parent={parent}, {} exclusion(s))",
        exclusions.len()
    );

    let width = parent.bit_width();
    let mut pending = vec![parent.block()];
    let mut kept: Vec<Block> = Vec::new();

    while let Some(candidate) = pending.pop() {
        if exclusions.iter().any(|e| e.covers(candidate, width)) {
            log::trace!("drop {candidate:?}: excluded");
            continue;
        }
        if exclusions.iter().any(|e| candidate.covers(*e, width)) {
            // Strictly contains an exclusion, so it is never a single address.
            let (lower, upper) = candidate
                .split(width)
                .ok_or(CidrError::DegenerateMask {
                    prefix: parent.with_block(candidate),
                })?;
            pending.push(upper);
            pending.push(lower);
            continue;
        }
        kept.push(candidate);
    }

    kept.sort();
    Ok(kept.into_iter().map(|b| parent.with_block(b)).collect())
}
