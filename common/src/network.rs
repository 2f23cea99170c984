//! # Network Model
//!
//! * [`address`]: family-aware helpers on top of [`std::net::IpAddr`].
//! * [`subnet`]: the [`subnet::Subnet`] value and the [`subnet::SubnetMath`]
//!   trait through which the presentation engine derives attributes.

pub mod address;
pub mod subnet;
