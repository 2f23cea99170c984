pub mod show;

use clap::{ArgAction, Parser};
use snet_common::config::Config;
use snet_common::error::SubnetError;
use snet_common::network::subnet::Subnet;
use snet_core::field::Field;
use snet_core::selection::FieldSelection;
use tracing::debug;

const GENERAL: &str = "General Options";
const FIELDS: &str = "Field Options (selecting more than one displays a table)";

#[derive(Parser, Debug)]
#[command(name = "snet", version)]
#[command(about = "Show the addresses, ranges and sizes of an IP subnet.")]
#[command(override_usage = concat!(
    "snet [OPTIONS] <ADDRESS>/<BITS>\n",
    "       snet [OPTIONS] <ADDRESS> <MASK>"
))]
#[command(arg_required_else_help = true)]
pub struct CommandLine {
    /// A subnet in CIDR notation, or a host address followed by its mask
    #[arg(value_name = "SUBNET", required = true, num_args = 1..=2)]
    pub input: Vec<String>,

    /// Display all possible networks within the specified subnet
    #[arg(short = 'a', long, help_heading = GENERAL)]
    pub all: bool,

    /// Display output without borders
    #[arg(long, visible_alias = "bl", help_heading = GENERAL)]
    pub borderless: bool,

    /// Display IP ranges with sub-range notation
    #[arg(short = 's', long, visible_alias = "short", help_heading = GENERAL)]
    pub short_range: bool,

    /// Display both the total and the usable host count
    #[arg(short = 'c', long, help_heading = GENERAL)]
    pub count: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = GENERAL)]
    pub verbose: u8,

    /// Display the CIDR prefix
    #[arg(short = 'p', long, help_heading = FIELDS)]
    pub prefix: bool,

    /// Display the network address
    #[arg(long, visible_aliases = ["na", "network"], help_heading = FIELDS)]
    pub network_address: bool,

    /// Display the full IP range
    #[arg(long, visible_alias = "fr", help_heading = FIELDS)]
    pub full_range: bool,

    /// Display the usable IP range
    #[arg(long, visible_alias = "ur", help_heading = FIELDS)]
    pub usable_range: bool,

    /// Display the broadcast address
    #[arg(long, visible_aliases = ["ba", "broadcast"], help_heading = FIELDS)]
    pub broadcast_address: bool,

    /// Display the subnet mask
    #[arg(short = 'm', long, visible_alias = "mask", help_heading = FIELDS)]
    pub subnet_mask: bool,

    /// Display the number of mask bits
    #[arg(short = 'b', long, visible_alias = "bits", help_heading = FIELDS)]
    pub mask_bits: bool,

    /// Display the total number of addresses
    #[arg(long, visible_aliases = ["tc", "ct", "count-total"], help_heading = FIELDS)]
    pub total_count: bool,

    /// Display the number of usable host addresses
    #[arg(long, visible_aliases = ["uc", "cu", "count-usable"], help_heading = FIELDS)]
    pub usable_count: bool,

    /// Display a field by its column name, e.g. `-f UsableRange` (repeatable)
    #[arg(short = 'f', long = "field", value_name = "NAME", help_heading = FIELDS)]
    pub fields: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            all: self.all,
            borderless: self.borderless,
            compact: self.short_range,
            count: self.count,
        }
    }

    pub fn selection(&self) -> FieldSelection {
        let mut selection = FieldSelection::new(self.config())
            .with_field(Field::Prefix, self.prefix)
            .with_field(Field::NetworkAddress, self.network_address)
            .with_field(Field::FullRange, self.full_range)
            .with_field(Field::UsableRange, self.usable_range)
            .with_field(Field::BroadcastAddress, self.broadcast_address)
            .with_field(Field::SubnetMask, self.subnet_mask)
            .with_field(Field::MaskBits, self.mask_bits)
            .with_field(Field::TotalCount, self.total_count)
            .with_field(Field::UsableCount, self.usable_count);
        for name in &self.fields {
            let field = Field::lookup(name);
            debug!("--field {name:?} selects {field}");
            selection.set(field, true);
        }
        selection
    }

    /// `ADDRESS/BITS` when one value was given, `ADDRESS MASK` when two.
    pub fn subnet(&self) -> Result<Subnet, SubnetError> {
        match self.input.as_slice() {
            [cidr] => Subnet::parse_cidr(cidr),
            [address, mask, ..] => Subnet::parse(address, mask),
            [] => Err(SubnetError::parse("", "no subnet given")),
        }
    }
}
