//! Interface records and role types
//!
//! One `InterfaceRecord` per physical network interface. Records are built
//! fresh from the hardware manifest every reconciliation cycle; persisted
//! overrides are copied onto them field by field, never carried over in
//! memory between cycles.

/// Hardware class of a discovered interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    Wired,
    WirelessInternal,
    WirelessExternal,
    Unknown,
}

impl InterfaceKind {
    /// Parse the manifest/settings string form; unrecognized values are
    /// tolerated as Unknown so a newer manifest never breaks an older build.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "wired" => InterfaceKind::Wired,
            "wireless-internal" => InterfaceKind::WirelessInternal,
            "wireless-external" => InterfaceKind::WirelessExternal,
            _ => InterfaceKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceKind::Wired => "wired",
            InterfaceKind::WirelessInternal => "wireless-internal",
            InterfaceKind::WirelessExternal => "wireless-external",
            InterfaceKind::Unknown => "unknown",
        }
    }
}

/// Network role assigned to an interface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Unset,
    Static,
    Hotspot,
    Client,
}

impl Role {
    /// Parse the settings-file string form. Empty or unrecognized values
    /// map to Unset, which defers to device-mode policy.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "static" => Role::Static,
            "hotspot" => Role::Hotspot,
            "client" => Role::Client,
            _ => Role::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unset => "",
            Role::Static => "static",
            Role::Hotspot => "hotspot",
            Role::Client => "client",
        }
    }
}

/// One physical network interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub kind: InterfaceKind,
    /// OS-assigned interface name, opaque to us
    pub name: String,
    /// Stable identity; the only field used for cross-source matching.
    /// Never mutated after discovery.
    pub mac: String,
    pub vendor: String,
    pub role: Role,
    /// Address/prefix, meaningful for Static and Hotspot roles
    pub ip: String,
    /// Gateway address, meaningful for Static role
    pub gateway: String,
}

impl InterfaceRecord {
    /// A freshly discovered record: identity fields only, everything else default
    pub fn discovered(kind: InterfaceKind, name: impl Into<String>, mac: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            mac: mac.into(),
            vendor: String::new(),
            role: Role::Unset,
            ip: String::new(),
            gateway: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_string_round_trip() {
        for kind in [
            InterfaceKind::Wired,
            InterfaceKind::WirelessInternal,
            InterfaceKind::WirelessExternal,
        ] {
            assert_eq!(InterfaceKind::from_str_lossy(kind.as_str()), kind);
        }
        assert_eq!(InterfaceKind::from_str_lossy("pigeon"), InterfaceKind::Unknown);
    }

    #[test]
    fn test_role_string_round_trip() {
        for role in [Role::Static, Role::Hotspot, Role::Client] {
            assert_eq!(Role::from_str_lossy(role.as_str()), role);
        }
        assert_eq!(Role::from_str_lossy(""), Role::Unset);
        assert_eq!(Role::from_str_lossy("bridge"), Role::Unset);
    }

    #[test]
    fn test_discovered_defaults() {
        let rec = InterfaceRecord::discovered(InterfaceKind::Wired, "eth0", "aa:bb:cc:dd:ee:ff");
        assert_eq!(rec.role, Role::Unset);
        assert!(rec.ip.is_empty());
        assert!(rec.gateway.is_empty());
        assert!(rec.vendor.is_empty());
    }
}
