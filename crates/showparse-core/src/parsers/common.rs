//! Helpers shared by several parsers.

/// Abbreviated interface prefixes and their full names.
const INTERFACE_PREFIXES: &[(&str, &str)] = &[
    ("HundredGigE", "HundredGigE"),
    ("FortyGigE", "FortyGigabitEthernet"),
    ("TenGigE", "TenGigabitEthernet"),
    ("TwentyFiveGigE", "TwentyFiveGigE"),
    ("BE", "Bundle-Ether"),
    ("Hu", "HundredGigE"),
    ("Fo", "FortyGigabitEthernet"),
    ("Te", "TenGigabitEthernet"),
    ("Tw", "TwoGigabitEthernet"),
    ("Gi", "GigabitEthernet"),
    ("Fa", "FastEthernet"),
    ("Eth", "Ethernet"),
    ("Et", "Ethernet"),
    ("Lo", "Loopback"),
    ("Po", "Port-channel"),
    ("Tu", "Tunnel"),
    ("Vl", "Vlan"),
    ("Mg", "MgmtEth"),
];

/// Expand an abbreviated interface name such as `Gi0/0/0/0.115` into
/// `GigabitEthernet0/0/0/0.115`. Names that are already long, or whose
/// prefix is unknown, are returned unchanged.
pub fn expand_interface_name(name: &str) -> String {
    let split = name
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(name.len());
    let (prefix, rest) = name.split_at(split);

    INTERFACE_PREFIXES
        .iter()
        .find(|(short, _)| short.eq_ignore_ascii_case(prefix))
        .map(|(_, long)| format!("{}{}", long, rest))
        .unwrap_or_else(|| name.to_string())
}
