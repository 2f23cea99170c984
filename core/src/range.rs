//! # Host-Range Notation
//!
//! Writes the addresses between two boundaries either as `first-last` or in
//! compact per-segment notation, where each segment is a single value or a
//! `low-high` span: `192.168.0.1-192.168.1.254` becomes `192.168.0-1.1-254`.
//!
//! Compact notation describes the cartesian product of its segments, so it is
//! exact only when every segment of the lower bound is at most the matching
//! segment of the upper bound. CIDR boundaries always satisfy this: network
//! bytes have their host bits cleared, broadcast bytes have them set, and the
//! usable narrowing of a block of four or more addresses only moves the last
//! byte away from 0 and 255. Any other input is reported as empty rather than
//! drawn misleadingly.

use std::cmp::Ordering;
use std::net::IpAddr;

use snet_common::network::address::{AddressExt, Family};

use crate::error::RangeError;

/// Text shown for a range with no addresses in it.
pub const EMPTY_RANGE: &str = "None";

/// Formats the range between `first` and `last`.
///
/// With `usable_only` both boundaries are excluded, which leaves nothing for
/// blocks of one or two addresses. Compact notation is rejected for IPv6
/// before the addresses are looked at.
pub fn format_range(
    first: IpAddr,
    last: IpAddr,
    compact: bool,
    usable_only: bool,
) -> Result<String, RangeError> {
    let family = first.family();
    if last.family() != family {
        return Err(RangeError::FamilyMismatch);
    }
    if compact && family == Family::V6 {
        return Err(RangeError::CompactUnsupported);
    }

    let bounds = if usable_only {
        usable_bounds(first, last)
    } else {
        Some((first, last))
    };

    let Some((first, last)) = bounds.filter(|(first, last)| first <= last) else {
        return Ok(EMPTY_RANGE.to_string());
    };

    if !compact {
        return Ok(format!("{first}-{last}"));
    }

    Ok(compact_notation(&first, &last).unwrap_or_else(|| EMPTY_RANGE.to_string()))
}

fn usable_bounds(first: IpAddr, last: IpAddr) -> Option<(IpAddr, IpAddr)> {
    Some((first.successor()?, last.predecessor()?))
}

/// `None` when some segment of `first` is above the same segment of `last`.
fn compact_notation(first: &IpAddr, last: &IpAddr) -> Option<String> {
    let separator = first.family().separator().to_string();

    let parts = first
        .segments()
        .into_iter()
        .zip(last.segments())
        .map(|(low, high)| match low.cmp(&high) {
            Ordering::Equal => Some(low.to_string()),
            Ordering::Less => Some(format!("{low}-{high}")),
            Ordering::Greater => None,
        })
        .collect::<Option<Vec<String>>>()?;

    Some(parts.join(&separator))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
