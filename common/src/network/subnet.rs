//! # Subnet Arithmetic
//!
//! Derives the attributes of a CIDR block (network, broadcast, mask, size) and
//! enumerates sibling subnets. The presentation engine only talks to this
//! module through the [`SubnetMath`] trait.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use pnet::ipnetwork::{self, IpNetwork};
use tracing::trace;

use crate::error::SubnetError;
use crate::network::address::{AddressExt, Family};

/// Width of one address segment. [`Subnet::list_all`] enumerates inside the
/// enclosing block that ends on a segment boundary.
const SEGMENT_BITS: u8 = 8;

/// The attributes the presentation engine derives from a subnet.
pub trait SubnetMath {
    fn network(&self) -> Result<IpAddr, SubnetError>;
    fn broadcast(&self) -> Result<IpAddr, SubnetError>;
    fn mask(&self) -> Result<IpAddr, SubnetError>;

    /// Number of addresses in the block. A float, since an IPv6 `/0` holds 2^128.
    fn count(&self) -> Result<f64, SubnetError>;

    /// Prefix length.
    fn bits(&self) -> u8;
}

/// An address together with a prefix length, e.g. `192.168.1.10/24`.
///
/// The address is kept as given; [`SubnetMath::network`] masks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    addr: IpAddr,
    prefix: u8,
}

impl Subnet {
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, SubnetError> {
        IpNetwork::new(addr, prefix)
            .map_err(|e| SubnetError::parse(format!("{addr}/{prefix}"), e))?;
        Ok(Self { addr, prefix })
    }

    /// Parses CIDR notation like `192.168.1.10/24` or `2001:db8::/48`.
    ///
    /// A bare address is accepted and treated as a host prefix (`/32` or `/128`).
    pub fn parse_cidr(text: &str) -> Result<Self, SubnetError> {
        let text = text.trim();
        let network = IpNetwork::from_str(text).map_err(|e| SubnetError::parse(text, e))?;
        Ok(Self {
            addr: network.ip(),
            prefix: network.prefix(),
        })
    }

    /// Parses an address and a separate mask.
    ///
    /// The mask may be written as an address (`255.255.255.0`, `ffff:ffff::`),
    /// as a bit count (`24`) or as `/24`.
    pub fn parse(address: &str, mask: &str) -> Result<Self, SubnetError> {
        let address = address.trim();
        let addr = address
            .parse::<IpAddr>()
            .map_err(|e| SubnetError::parse(address, e))?;
        let prefix = parse_mask(addr.family(), mask.trim())?;
        Self::new(addr, prefix)
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    /// Every subnet with this prefix length inside the enclosing segment-aligned block.
    ///
    /// A `/26` lists the four `/26` blocks of its `/24`, a `/24` lists the 256
    /// blocks of its `/16`. A `/0` lists only itself.
    pub fn list_all(&self) -> Result<SubnetIter, SubnetError> {
        let parent_prefix = match self.prefix {
            0 => 0,
            bits => ((bits - 1) / SEGMENT_BITS) * SEGMENT_BITS,
        };
        let parent = Subnet {
            addr: self.addr,
            prefix: parent_prefix,
        };
        trace!("listing /{} subnets of {}", self.prefix, parent);
        parent.subdivide(self.prefix)
    }

    /// Lazily splits this block into consecutive subnets of length `prefix`.
    pub fn subdivide(&self, prefix: u8) -> Result<SubnetIter, SubnetError> {
        let family = self.family();
        if prefix < self.prefix || prefix > family.bits() {
            return Err(SubnetError::derivation(
                "subnets",
                self,
                format!("/{prefix} does not fit inside /{}", self.prefix),
            ));
        }

        let first = self.network()?.as_u128();
        let last = self.broadcast()?.as_u128() & !host_mask(family, prefix);

        Ok(SubnetIter {
            family,
            prefix,
            next: Some(first),
            last,
            step: host_mask(family, prefix).wrapping_add(1),
        })
    }

    fn as_network(&self, attribute: &'static str) -> Result<IpNetwork, SubnetError> {
        IpNetwork::new(self.addr, self.prefix)
            .map_err(|e| SubnetError::derivation(attribute, self, e))
    }
}

impl SubnetMath for Subnet {
    fn network(&self) -> Result<IpAddr, SubnetError> {
        Ok(self.as_network("network address")?.network())
    }

    fn broadcast(&self) -> Result<IpAddr, SubnetError> {
        Ok(self.as_network("broadcast address")?.broadcast())
    }

    fn mask(&self) -> Result<IpAddr, SubnetError> {
        Ok(self.as_network("subnet mask")?.mask())
    }

    fn count(&self) -> Result<f64, SubnetError> {
        let host_bits = self
            .family()
            .bits()
            .checked_sub(self.prefix)
            .ok_or_else(|| SubnetError::derivation("address count", self, "prefix too long"))?;
        Ok(2f64.powi(i32::from(host_bits)))
    }

    fn bits(&self) -> u8 {
        self.prefix
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_cidr(s)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

/// Lazy sequence of equally sized, consecutive subnets.
///
/// Cloning an iterator restarts from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct SubnetIter {
    family: Family,
    prefix: u8,
    next: Option<u128>,
    last: u128,
    step: u128,
}

impl Iterator for SubnetIter {
    type Item = Subnet;

    fn next(&mut self) -> Option<Subnet> {
        let current = self.next?;
        self.next = if current >= self.last {
            None
        } else {
            current.checked_add(self.step)
        };
        let addr = IpAddr::from_u128(self.family, current)?;
        Some(Subnet {
            addr,
            prefix: self.prefix,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(current) = self.next else {
            return (0, Some(0));
        };
        let remaining = match self.step {
            0 => 1,
            step => (self.last - current) / step + 1,
        };
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Host bits of a `/prefix` block set to one.
fn host_mask(family: Family, prefix: u8) -> u128 {
    family
        .max_value()
        .checked_shr(u32::from(prefix))
        .unwrap_or(0)
}

fn parse_mask(family: Family, mask: &str) -> Result<u8, SubnetError> {
    let bits = mask.strip_prefix('/').unwrap_or(mask);
    if let Ok(prefix) = bits.parse::<u8>() {
        return Ok(prefix);
    }

    let mask_addr = mask
        .parse::<IpAddr>()
        .map_err(|e| SubnetError::parse(mask, e))?;

    match (family, mask_addr) {
        (Family::V4, IpAddr::V4(v4)) => {
            ipnetwork::ipv4_mask_to_prefix(v4).map_err(|e| SubnetError::parse(mask, e))
        }
        (Family::V6, IpAddr::V6(v6)) => {
            ipnetwork::ipv6_mask_to_prefix(v6).map_err(|e| SubnetError::parse(mask, e))
        }
        _ => Err(SubnetError::parse(
            mask,
            format!("mask is not an {family} mask"),
        )),
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
