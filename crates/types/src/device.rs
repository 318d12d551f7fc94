//! Responsive device tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A device tier. Desktop is the unconstrained base; tablet and phone are
/// max-width breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Phone,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Phone];

    /// The key under which device-specific values are stored in settings maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Tablet => "tablet",
            Device::Phone => "phone",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Device::Desktop),
            "tablet" => Ok(Device::Tablet),
            "phone" | "mobile" => Ok(Device::Phone),
            other => Err(format!("unknown device '{}'", other)),
        }
    }
}
