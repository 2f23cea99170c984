#![cfg(test)]
//! Properties checked over every prefix length of a handful of addresses.

use std::net::IpAddr;

use snet_common::network::subnet::{Subnet, SubnetMath};
use snet_core::error::{ProjectionError, RangeError};
use snet_core::field::Field;
use snet_core::projector::{project, project_cell};

const IPV4_SAMPLES: [&str; 4] = ["0.0.0.0", "192.168.1.10", "10.255.3.129", "255.255.255.255"];
const IPV6_SAMPLES: [&str; 3] = [
    "::",
    "2001:db8:abcd:12::1",
    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
];

fn every_prefix(samples: &[&str], max_bits: u8) -> Vec<Subnet> {
    samples
        .iter()
        .flat_map(|addr| {
            let addr: IpAddr = addr.parse().unwrap();
            (0..=max_bits).map(move |bits| Subnet::new(addr, bits).unwrap())
        })
        .collect()
}

#[test]
fn full_range_is_network_dash_broadcast() {
    let subnets = every_prefix(&IPV4_SAMPLES, 32)
        .into_iter()
        .chain(every_prefix(&IPV6_SAMPLES, 128));

    for subnet in subnets {
        let expected = format!(
            "{}-{}",
            subnet.network().unwrap(),
            subnet.broadcast().unwrap()
        );
        assert_eq!(
            project(&subnet, Field::FullRange, false).unwrap(),
            expected,
            "{subnet}"
        );
    }
}

#[test]
fn ipv4_usable_count_and_range() {
    for subnet in every_prefix(&IPV4_SAMPLES, 32) {
        let bits = subnet.bits();
        let usable_count = project(&subnet, Field::UsableCount, false).unwrap();
        let usable_range = project(&subnet, Field::UsableRange, false).unwrap();

        if bits <= 30 {
            let expected = (1u64 << (32 - bits)) - 2;
            assert_eq!(usable_count, expected.to_string(), "{subnet}");
            assert_ne!(usable_range, "None", "{subnet}");
        } else {
            assert_eq!(usable_count, "0", "{subnet}");
            assert_eq!(usable_range, "None", "{subnet}");
        }
    }
}

#[test]
fn ipv4_compact_range_never_reports_none_for_real_hosts() {
    for subnet in every_prefix(&IPV4_SAMPLES, 30) {
        assert_ne!(project(&subnet, Field::FullRange, true).unwrap(), "None", "{subnet}");
        assert_ne!(project(&subnet, Field::UsableRange, true).unwrap(), "None", "{subnet}");
    }
}

#[test]
fn ipv6_compact_range_is_always_rejected() {
    for subnet in every_prefix(&IPV6_SAMPLES, 128) {
        for field in [Field::FullRange, Field::UsableRange] {
            assert!(
                matches!(
                    project(&subnet, field, true),
                    Err(ProjectionError::Range(RangeError::CompactUnsupported))
                ),
                "{subnet} {field}"
            );
            assert_eq!(project_cell(&subnet, field, true), "Short IPv6 Not Supported");
        }
    }
}

#[test]
fn projection_has_no_hidden_state() {
    let subnets = every_prefix(&IPV4_SAMPLES[1..2], 32)
        .into_iter()
        .chain(every_prefix(&IPV6_SAMPLES[1..2], 128));

    for subnet in subnets {
        for field in Field::ALL {
            for compact in [false, true] {
                assert_eq!(
                    project_cell(&subnet, field, compact),
                    project_cell(&subnet, field, compact),
                    "{subnet} {field}"
                );
            }
        }
    }
}

#[test]
fn listed_subnets_are_contiguous_siblings() {
    for subnet in every_prefix(&IPV4_SAMPLES, 32) {
        let listed: Vec<Subnet> = subnet.list_all().unwrap().collect();
        let bits = subnet.bits();
        let parent_bits = if bits == 0 { 0 } else { (bits - 1) / 8 * 8 };

        assert_eq!(listed.len(), 1usize << (bits - parent_bits), "{subnet}");
        assert!(listed.iter().all(|s| s.bits() == bits));
        assert!(
            listed
                .iter()
                .any(|s| s.network().unwrap() == subnet.network().unwrap()),
            "{subnet} missing from its own listing"
        );
        for pair in listed.windows(2) {
            let after_broadcast = u32_of(pair[0].broadcast().unwrap()) + 1;
            assert_eq!(u32_of(pair[1].network().unwrap()), after_broadcast);
        }
    }
}

fn u32_of(addr: IpAddr) -> u32 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4),
        IpAddr::V6(_) => panic!("expected IPv4"),
    }
}
