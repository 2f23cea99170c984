#![cfg(test)]
use snet_common::config::Config;
use snet_common::error::SubnetError;
use snet_common::network::subnet::Subnet;
use snet_core::field::Field;
use snet_core::output::{self, Output, SubnetTable};
use snet_core::selection::FieldSelection;

fn render(subnet: &Subnet, selection: FieldSelection) -> anyhow::Result<Output> {
    let resolution = selection.resolve();
    Ok(output::select(subnet, &resolution)?)
}

fn expect_table(output: Output) -> SubnetTable {
    match output {
        Output::Table(table) => table,
        Output::Single(value) => panic!("expected a table, got single value '{value}'"),
    }
}

fn single_value(cidr: &str, field: Field, compact: bool) -> anyhow::Result<String> {
    let subnet = Subnet::parse_cidr(cidr)?;
    let config = Config {
        compact,
        ..Config::default()
    };
    match render(&subnet, FieldSelection::new(config).with_field(field, true))? {
        Output::Single(value) => Ok(value),
        Output::Table(_) => anyhow::bail!("expected a single value for {field}"),
    }
}

#[test]
fn class_c_host_address() -> anyhow::Result<()> {
    assert_eq!(single_value("192.168.1.10/24", Field::NetworkAddress, false)?, "192.168.1.0");
    assert_eq!(single_value("192.168.1.10/24", Field::BroadcastAddress, false)?, "192.168.1.255");
    assert_eq!(
        single_value("192.168.1.10/24", Field::UsableRange, false)?,
        "192.168.1.1-192.168.1.254"
    );
    assert_eq!(single_value("192.168.1.10/24", Field::UsableRange, true)?, "192.168.1.1-254");
    Ok(())
}

#[test]
fn point_to_point_link_has_no_usable_range() -> anyhow::Result<()> {
    assert_eq!(single_value("192.168.1.0/31", Field::UsableRange, false)?, "None");
    assert_eq!(single_value("192.168.1.0/31", Field::UsableCount, false)?, "0");
    Ok(())
}

#[test]
fn mask_bits_alone_is_a_bare_value() -> anyhow::Result<()> {
    assert_eq!(single_value("10.0.0.0/8", Field::MaskBits, false)?, "8");
    Ok(())
}

#[test]
fn address_with_dotted_mask_matches_cidr() -> anyhow::Result<()> {
    let from_mask = Subnet::parse("172.16.5.10", "255.255.240.0")?;
    let from_cidr = Subnet::parse_cidr("172.16.5.10/20")?;

    let selection = || FieldSelection::new(Config::default()).with_field(Field::FullRange, true);
    let a = expect_table(render(&from_mask, selection().with_field(Field::Prefix, true))?);
    let b = expect_table(render(&from_cidr, selection().with_field(Field::Prefix, true))?);

    assert_eq!(a.rows().collect::<Vec<_>>(), b.rows().collect::<Vec<_>>());
    assert_eq!(
        a.rows().next(),
        Some(vec![
            "172.16.0.0/20".to_string(),
            "172.16.0.0-172.16.15.255".to_string()
        ])
    );
    Ok(())
}

#[test]
fn malformed_input_is_a_parse_error() {
    for input in ["192.168.1.10/33", "192.168.1.256/24", "banana", "10.0.0.0/-1"] {
        assert!(
            matches!(Subnet::parse_cidr(input), Err(SubnetError::Parse { .. })),
            "{input} should not parse"
        );
    }
    assert!(matches!(
        Subnet::parse("10.0.0.1", "255.255.0.255"),
        Err(SubnetError::Parse { .. })
    ));
}

#[test]
fn count_flag_shows_both_counts() -> anyhow::Result<()> {
    let subnet = Subnet::parse_cidr("10.0.0.0/30")?;
    let config = Config {
        count: true,
        ..Config::default()
    };
    let table = expect_table(render(&subnet, FieldSelection::new(config))?);
    assert_eq!(table.header(), vec!["TotalCount", "UsableCount"]);
    assert_eq!(
        table.rows().collect::<Vec<_>>(),
        vec![vec!["4".to_string(), "2".to_string()]]
    );
    Ok(())
}

#[test]
fn listing_all_subnets_of_a_slash_28() -> anyhow::Result<()> {
    let subnet = Subnet::parse_cidr("10.10.10.37/28")?;
    let config = Config {
        all: true,
        compact: true,
        ..Config::default()
    };
    let selection = FieldSelection::new(config)
        .with_field(Field::Prefix, true)
        .with_field(Field::UsableRange, true);
    let table = expect_table(render(&subnet, selection)?);

    assert_eq!(table.row_count(), Some(16));
    let rows: Vec<Vec<String>> = table.rows().collect();
    assert_eq!(rows[0], vec!["10.10.10.0/28", "10.10.10.1-14"]);
    assert_eq!(rows[2], vec!["10.10.10.32/28", "10.10.10.33-46"]);
    assert_eq!(rows[15], vec!["10.10.10.240/28", "10.10.10.241-254"]);
    Ok(())
}

#[test]
fn ipv6_default_table() -> anyhow::Result<()> {
    let subnet = Subnet::parse_cidr("2001:db8:abcd:12::1/64")?;
    let table = expect_table(render(&subnet, FieldSelection::new(Config::default()))?);
    let rows: Vec<Vec<String>> = table.rows().collect();
    assert_eq!(
        rows,
        vec![vec![
            "2001:db8:abcd:12::/64".to_string(),
            "2001:db8:abcd:12::".to_string(),
            "2001:db8:abcd:12::1-2001:db8:abcd:12:ffff:ffff:ffff:fffe".to_string(),
            "2001:db8:abcd:12:ffff:ffff:ffff:ffff".to_string(),
            "ffff:ffff:ffff:ffff::".to_string(),
        ]]
    );
    Ok(())
}
