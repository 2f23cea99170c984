use comfy_table::{Attribute, Cell, Color, Table, modifiers, presets};
use snet_core::output::SubnetTable;

const HEADER_COLOR: Color = Color::White;
const ROW_COLORS: [Color; 2] = [Color::White, Color::Grey];

/// Lays out a subnet table: bold header, rows alternating between bright and dim.
pub fn build(subnets: &SubnetTable) -> Table {
    let mut table = Table::new();

    if subnets.borderless() {
        table.load_preset(presets::NOTHING);
    } else {
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    }

    table.set_header(
        subnets
            .header()
            .into_iter()
            .map(|name| Cell::new(name).fg(HEADER_COLOR).add_attribute(Attribute::Bold)),
    );

    for (idx, row) in subnets.rows().enumerate() {
        let color = ROW_COLORS[idx % ROW_COLORS.len()];
        table.add_row(row.into_iter().map(|value| Cell::new(value).fg(color)));
    }

    table
}
