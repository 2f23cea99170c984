use std::io::Write;

use anyhow::Context;
use snet_core::output::{self, Output};
use tracing::{debug, info};

use crate::commands::CommandLine;
use crate::terminal::print;

/// Parses the subnet, resolves the selected fields and writes the result to `out`.
///
/// Nothing is written when the input does not parse.
pub fn show(commands: &CommandLine, out: &mut impl Write) -> anyhow::Result<()> {
    let subnet = commands
        .subnet()
        .context("could not read the subnet")?;
    info!("Parsed {subnet}");

    let resolution = commands.selection().resolve();
    let output = output::select(&subnet, &resolution)
        .with_context(|| format!("could not list the subnets of {subnet}"))?;

    match output {
        Output::Single(value) => print::value(out, &value)?,
        Output::Table(table) => {
            debug!("Rendering {:?} row(s)", table.row_count());
            print::table(out, &table)?
        }
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
