//! # Subnet Presentation Engine
//!
//! Turns a [`Subnet`](snet_common::network::subnet::Subnet) into text.
//!
//! * [`range`]: host-range notation, plain or compact per-segment.
//! * [`field`]: the closed set of attributes that can be displayed.
//! * [`projector`]: resolves one attribute of one subnet to its string form.
//! * [`selection`]: decides which attributes are shown and whether as a table.
//! * [`output`]: the single value or the lazily produced table handed to the terminal.

pub mod error;
pub mod field;
pub mod output;
pub mod projector;
pub mod range;
pub mod selection;
