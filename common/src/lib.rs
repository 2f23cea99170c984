//! Shared building blocks for `snet`.
//!
//! * [`network`]: the address model and the subnet arithmetic the presentation
//!   engine relies on.
//! * [`config`]: display flags collected once from the command line.
//! * [`error`]: error types raised while parsing input or deriving subnet attributes.

pub mod config;
pub mod error;
pub mod network;
