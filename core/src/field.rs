use std::fmt;

/// An attribute of a subnet that can be displayed.
///
/// The declaration order is the column order of tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Prefix,
    NetworkAddress,
    FullRange,
    UsableRange,
    BroadcastAddress,
    SubnetMask,
    MaskBits,
    TotalCount,
    UsableCount,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 9] = [
        Field::Prefix,
        Field::NetworkAddress,
        Field::FullRange,
        Field::UsableRange,
        Field::BroadcastAddress,
        Field::SubnetMask,
        Field::MaskBits,
        Field::TotalCount,
        Field::UsableCount,
    ];

    /// Shown when nothing was selected.
    pub const DEFAULTS: [Field; 5] = [
        Field::Prefix,
        Field::NetworkAddress,
        Field::UsableRange,
        Field::BroadcastAddress,
        Field::SubnetMask,
    ];

    /// Column header.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Prefix => "Prefix",
            Field::NetworkAddress => "NetworkAddress",
            Field::FullRange => "FullRange",
            Field::UsableRange => "UsableRange",
            Field::BroadcastAddress => "BroadcastAddress",
            Field::SubnetMask => "SubnetMask",
            Field::MaskBits => "MaskBits",
            Field::TotalCount => "TotalCount",
            Field::UsableCount => "UsableCount",
        }
    }

    /// Resolves a field by name, case-insensitively.
    ///
    /// Unknown names resolve to [`Field::Prefix`].
    pub fn lookup(name: &str) -> Field {
        let name = name.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
            .unwrap_or(Field::Prefix)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
