use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Device operating system a parser targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Cisco IOS-XE
    Iosxe,
    /// Cisco IOS-XR
    Iosxr,
    /// Juniper JUNOS
    Junos,
    /// F5 BIG-IP (iControl REST)
    Bigip,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Iosxe,
        Platform::Iosxr,
        Platform::Junos,
        Platform::Bigip,
    ];

    /// Identifier used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Iosxe => "iosxe",
            Platform::Iosxr => "iosxr",
            Platform::Junos => "junos",
            Platform::Bigip => "bigip",
        }
    }

    /// Returns a human-readable name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Iosxe => "Cisco IOS-XE",
            Platform::Iosxr => "Cisco IOS-XR",
            Platform::Junos => "Juniper JUNOS",
            Platform::Bigip => "F5 BIG-IP",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iosxe" | "ios-xe" => Ok(Platform::Iosxe),
            "iosxr" | "ios-xr" => Ok(Platform::Iosxr),
            "junos" | "juniper" => Ok(Platform::Junos),
            "bigip" | "big-ip" | "f5" => Ok(Platform::Bigip),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}
