//! # Field Projector
//!
//! Resolves a [`Field`] of a subnet to the string shown to the user.

use snet_common::network::subnet::SubnetMath;
use tracing::{debug, warn};

use crate::error::{ProjectionError, RangeError};
use crate::field::Field;
use crate::range::format_range;

/// Shown in place of a value whose derivation failed.
pub const ERROR_PLACEHOLDER: &str = "Error";

/// Largest float below which every integer is exact (2^53).
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Formats `field` of `subnet`. `compact` selects short notation for range fields.
pub fn project<S>(subnet: &S, field: Field, compact: bool) -> Result<String, ProjectionError>
where
    S: SubnetMath + ?Sized,
{
    let value = match field {
        Field::Prefix => format!("{}/{}", subnet.network()?, subnet.bits()),
        Field::NetworkAddress => subnet.network()?.to_string(),
        Field::FullRange => format_range(subnet.network()?, subnet.broadcast()?, compact, false)?,
        Field::UsableRange => format_range(subnet.network()?, subnet.broadcast()?, compact, true)?,
        Field::BroadcastAddress => subnet.broadcast()?.to_string(),
        Field::SubnetMask => subnet.mask()?.to_string(),
        Field::MaskBits => subnet.bits().to_string(),
        Field::TotalCount => format_count(subnet.count()?),
        Field::UsableCount => format_count(usable_count(subnet.count()?)),
    };
    Ok(value)
}

/// Like [`project`], but always yields something printable.
///
/// Unsupported compact notation is shown as its message, any other failure as
/// [`ERROR_PLACEHOLDER`].
pub fn project_cell<S>(subnet: &S, field: Field, compact: bool) -> String
where
    S: SubnetMath + ?Sized,
{
    match project(subnet, field, compact) {
        Ok(value) => value,
        Err(ProjectionError::Range(unsupported @ RangeError::CompactUnsupported)) => {
            debug!("{field}: {unsupported}");
            unsupported.to_string()
        }
        Err(e) => {
            warn!("{field}: {e}");
            ERROR_PLACEHOLDER.to_string()
        }
    }
}

/// Addresses left once network and broadcast are excluded, never below zero.
pub fn usable_count(total: f64) -> f64 {
    (total - 2.0).max(0.0)
}

/// Shortest decimal that reads back as `count`; scientific notation once
/// integers stop being exact.
pub fn format_count(count: f64) -> String {
    if count.abs() <= EXACT_INTEGER_LIMIT {
        format!("{count}")
    } else {
        format!("{count:e}")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
