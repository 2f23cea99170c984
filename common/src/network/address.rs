//! # Address Model
//!
//! `snet` works directly on [`IpAddr`]. This module adds what the standard
//! library leaves out: the address family as a value, integer conversion
//! across both families, successor/predecessor stepping and per-byte
//! decomposition.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// The two address families, IPv4 (4 one-byte segments) and IPv6 (16 one-byte segments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Width of an address in bits.
    pub const fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Separator placed between segments in compact range notation.
    pub const fn separator(self) -> char {
        match self {
            Family::V4 => '.',
            Family::V6 => ':',
        }
    }

    /// Largest address of the family as an integer.
    pub const fn max_value(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

pub trait AddressExt: Sized {
    fn family(&self) -> Family;

    /// The address as an unsigned integer, zero-extended for IPv4.
    fn as_u128(&self) -> u128;

    /// Builds an address of `family` from an integer, `None` if it does not fit.
    fn from_u128(family: Family, value: u128) -> Option<Self>;

    /// The next address, `None` past the end of the family.
    fn successor(&self) -> Option<Self>;

    /// The previous address, `None` before the start of the family.
    fn predecessor(&self) -> Option<Self>;

    /// Network-order bytes: 4 for IPv4, 16 for IPv6.
    fn segments(&self) -> Vec<u8>;
}

impl AddressExt for IpAddr {
    fn family(&self) -> Family {
        Family::of(self)
    }

    fn as_u128(&self) -> u128 {
        match self {
            IpAddr::V4(v4) => u128::from(u32::from(*v4)),
            IpAddr::V6(v6) => u128::from(*v6),
        }
    }

    fn from_u128(family: Family, value: u128) -> Option<Self> {
        match family {
            Family::V4 => u32::try_from(value)
                .ok()
                .map(|v| IpAddr::V4(Ipv4Addr::from(v))),
            Family::V6 => Some(IpAddr::V6(Ipv6Addr::from(value))),
        }
    }

    fn successor(&self) -> Option<Self> {
        let next = self.as_u128().checked_add(1)?;
        Self::from_u128(self.family(), next)
    }

    fn predecessor(&self) -> Option<Self> {
        let prev = self.as_u128().checked_sub(1)?;
        Self::from_u128(self.family(), prev)
    }

    fn segments(&self) -> Vec<u8> {
        match self {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
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
