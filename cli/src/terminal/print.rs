use std::io::{self, Write};

use snet_core::output::SubnetTable;

use crate::terminal::table;

/// Prints a bare value followed by a newline.
pub fn value(out: &mut impl Write, value: &str) -> io::Result<()> {
    writeln!(out, "{value}")
}

pub fn table(out: &mut impl Write, subnets: &SubnetTable) -> io::Result<()> {
    let rendered = table::build(subnets);
    writeln!(out, "{rendered}")
}
