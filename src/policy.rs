//! Effective-role policy
//!
//! Explicit assignments win; otherwise the device's operating mode decides.
//! Air units serve a static address for payload links, ground units join
//! whatever network they are plugged into.

use crate::record::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating role of the hosting device, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    Air,
    Ground,
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceMode::Air => write!(f, "air"),
            DeviceMode::Ground => write!(f, "ground"),
        }
    }
}

impl std::str::FromStr for DeviceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "air" => Ok(DeviceMode::Air),
            "ground" => Ok(DeviceMode::Ground),
            other => Err(format!("unknown device mode '{}' (expected air or ground)", other)),
        }
    }
}

/// Resolve the role an interface should actually get. Total over the input
/// domain: every (role, mode) pair resolves to Static, Hotspot or Client.
pub fn effective_role(role: Role, mode: DeviceMode) -> Role {
    match (role, mode) {
        (Role::Static, _) => Role::Static,
        (Role::Hotspot, _) => Role::Hotspot,
        (Role::Client, _) => Role::Client,
        (Role::Unset, DeviceMode::Air) => Role::Static,
        (Role::Unset, DeviceMode::Ground) => Role::Client,
    }
}
