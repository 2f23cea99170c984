use snet_common::error::SubnetError;
use thiserror::Error;

/// Reasons a host range cannot be written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Compact notation is only defined for IPv4.
    #[error("Short IPv6 Not Supported")]
    CompactUnsupported,

    #[error("range bounds belong to different address families")]
    FamilyMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error(transparent)]
    Derivation(#[from] SubnetError),

    #[error(transparent)]
    Range(#[from] RangeError),
}
