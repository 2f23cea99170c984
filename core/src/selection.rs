//! # Field Selection
//!
//! Tracks which [`Field`]s the user asked for and decides between printing a
//! single bare value and printing a table.

use snet_common::config::Config;
use tracing::debug;

use crate::field::Field;

/// Which fields are active, plus the display flags they are shown with.
///
/// Fields are kept in declaration order, so iteration order is column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<(Field, bool)>,
    config: Config,
}

/// How a resolved selection is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Exactly one field of the input subnet, printed bare.
    Single(Field),
    /// One column per field, one row per subnet.
    Table,
}

/// The outcome of [`FieldSelection::resolve`]. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    fields: Vec<Field>,
    mode: Mode,
    config: Config,
}

impl FieldSelection {
    /// A selection with every field inactive.
    pub fn new(config: Config) -> Self {
        Self {
            fields: Field::ALL.iter().map(|&field| (field, false)).collect(),
            config,
        }
    }

    pub fn with_field(mut self, field: Field, active: bool) -> Self {
        self.set(field, active);
        self
    }

    pub fn set(&mut self, field: Field, active: bool) {
        if let Some(entry) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            entry.1 = active;
        }
    }

    pub fn is_active(&self, field: Field) -> bool {
        self.fields.iter().any(|&(f, active)| f == field && active)
    }

    /// Number of active fields and the last of them in declaration order.
    pub fn count_active(&self) -> (usize, Option<Field>) {
        self.fields
            .iter()
            .filter(|(_, active)| *active)
            .fold((0, None), |(count, _), &(field, _)| (count + 1, Some(field)))
    }

    /// Settles the fields to show and the presentation mode.
    ///
    /// The `count` flag turns on both count fields first. With nothing active
    /// the [`Field::DEFAULTS`] are shown as a table. A single field is shown
    /// bare unless every subnet is listed.
    pub fn resolve(mut self) -> Resolution {
        if self.config.count {
            self.set(Field::TotalCount, true);
            self.set(Field::UsableCount, true);
        }

        let (active, last) = self.count_active();

        let fields: Vec<Field> = if active == 0 {
            Field::DEFAULTS.to_vec()
        } else {
            self.fields
                .iter()
                .filter(|(_, active)| *active)
                .map(|&(field, _)| field)
                .collect()
        };

        let mode = match last {
            Some(field) if active == 1 && !self.config.all => Mode::Single(field),
            _ => Mode::Table,
        };

        debug!("{active} field(s) selected, presenting as {mode:?}");

        Resolution {
            fields,
            mode,
            config: self.config,
        }
    }
}

impl Resolution {
    /// Fields to show, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> Config {
        self.config
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
