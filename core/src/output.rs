//! # Output
//!
//! Applies a [`Resolution`] to a subnet. Tables are produced row by row from
//! a lazy subnet sequence, so listing every subnet never builds the full list
//! up front.

use snet_common::error::SubnetError;
use snet_common::network::subnet::{Subnet, SubnetIter};

use crate::field::Field;
use crate::projector::project_cell;
use crate::selection::{Mode, Resolution};

/// What gets handed to the terminal.
#[derive(Debug, Clone)]
pub enum Output {
    /// A bare value, printed without a table.
    Single(String),
    Table(SubnetTable),
}

/// A header plus one row per subnet.
#[derive(Debug, Clone)]
pub struct SubnetTable {
    subnets: SubnetIter,
    fields: Vec<Field>,
    compact: bool,
    borderless: bool,
}

impl SubnetTable {
    pub fn header(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name()).collect()
    }

    /// Rows in subnet order. Each call starts from the first subnet again.
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.subnets.clone().map(move |subnet| {
            self.fields
                .iter()
                .map(|&field| project_cell(&subnet, field, self.compact))
                .collect()
        })
    }

    /// Number of rows, when it fits in a `usize`.
    pub fn row_count(&self) -> Option<usize> {
        self.subnets.size_hint().1
    }

    pub fn borderless(&self) -> bool {
        self.borderless
    }
}

/// Produces the output for `subnet`.
///
/// Fails only when the subnets to list cannot be derived.
pub fn select(subnet: &Subnet, resolution: &Resolution) -> Result<Output, SubnetError> {
    let config = resolution.config();

    match resolution.mode() {
        Mode::Single(field) => Ok(Output::Single(project_cell(subnet, field, config.compact))),
        Mode::Table => {
            let subnets = if config.all {
                subnet.list_all()?
            } else {
                subnet.subdivide(subnet.prefix())?
            };

            Ok(Output::Table(SubnetTable {
                subnets,
                fields: resolution.fields().to_vec(),
                compact: config.compact,
                borderless: config.borderless,
            }))
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
