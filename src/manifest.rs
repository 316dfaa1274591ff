//! Hardware manifest loading
//!
//! The discovery service writes a JSON manifest describing the interfaces it
//! found. We only read it; producing it is someone else's job.

use crate::error::{NetroleError, NetroleResult};
use crate::record::{InterfaceKind, InterfaceRecord};
use crate::validation;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Default manifest location written by the discovery service
pub const DEFAULT_MANIFEST_PATH: &str = "/tmp/ethernet_manifest";

/// Hotspot hardware class advertised by the manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HotspotType {
    #[default]
    None,
    Internal,
    External,
}

impl HotspotType {
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "internal" => HotspotType::Internal,
            "external" => HotspotType::External,
            _ => HotspotType::None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    hotspot: String,
    #[serde(default)]
    cards: Vec<RawCard>,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    #[serde(rename = "type", default)]
    kind: String,
    name: String,
    mac: String,
}

/// Parsed hardware manifest
#[derive(Debug, Clone)]
pub struct HardwareManifest {
    pub hotspot_type: HotspotType,
    /// Records in discovery order, identity fields populated, rest default
    pub cards: Vec<InterfaceRecord>,
}

impl HardwareManifest {
    /// Load and parse the manifest at `path`.
    ///
    /// A missing file is `ManifestUnavailable`, bad content is
    /// `ManifestMalformed`. Callers degrade to an empty inventory on either.
    pub async fn load<P: AsRef<Path>>(path: P) -> NetroleResult<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).await.map_err(|e| {
            NetroleError::ManifestUnavailable(format!("{}: {}", path.display(), e))
        })?;

        Self::parse(&contents)
    }

    /// Parse manifest JSON content
    pub fn parse(contents: &str) -> NetroleResult<Self> {
        let raw: RawManifest = serde_json::from_str(contents)
            .map_err(|e| NetroleError::ManifestMalformed(e.to_string()))?;

        let hotspot_type = HotspotType::from_str_lossy(&raw.hotspot);

        let mut cards = Vec::with_capacity(raw.cards.len());
        for card in raw.cards {
            // Reconciliation matches on the MAC, so a card without a usable
            // one cannot be managed at all
            if let Err(e) = validation::validate_mac_address(&card.mac) {
                return Err(NetroleError::ManifestMalformed(format!(
                    "card '{}': {}",
                    card.name, e
                )));
            }
            debug!("Discovered interface {} ({})", card.name, card.mac);
            cards.push(InterfaceRecord::discovered(
                InterfaceKind::from_str_lossy(&card.kind),
                card.name,
                card.mac,
            ));
        }

        Ok(Self { hotspot_type, cards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Role;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "hotspot": "internal",
        "cards": [
            {"type": "wired", "name": "eth0", "mac": "aa:bb:cc:dd:ee:01"},
            {"type": "wireless-external", "name": "wlan1", "mac": "aa:bb:cc:dd:ee:02"}
        ]
    }"#;

    #[test]
    fn test_parse_sample_manifest() {
        let manifest = HardwareManifest::parse(SAMPLE).unwrap();
        assert_eq!(manifest.hotspot_type, HotspotType::Internal);
        assert_eq!(manifest.cards.len(), 2);
        assert_eq!(manifest.cards[0].kind, InterfaceKind::Wired);
        assert_eq!(manifest.cards[0].name, "eth0");
        assert_eq!(manifest.cards[0].mac, "aa:bb:cc:dd:ee:01");
        assert_eq!(manifest.cards[0].role, Role::Unset);
        assert_eq!(manifest.cards[1].kind, InterfaceKind::WirelessExternal);
    }

    #[test]
    fn test_parse_preserves_discovery_order() {
        let manifest = HardwareManifest::parse(SAMPLE).unwrap();
        let names: Vec<&str> = manifest.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["eth0", "wlan1"]);
    }

    #[test]
    fn test_parse_unknown_hotspot_and_kind_tolerated() {
        let manifest = HardwareManifest::parse(
            r#"{"hotspot": "quantum", "cards": [{"type": "fiber", "name": "eth9", "mac": "aa:bb:cc:dd:ee:09"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.hotspot_type, HotspotType::None);
        assert_eq!(manifest.cards[0].kind, InterfaceKind::Unknown);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            HardwareManifest::parse("not json"),
            Err(NetroleError::ManifestMalformed(_))
        ));
        assert!(matches!(
            HardwareManifest::parse(r#"{"cards": [{"name": "eth0", "mac": ""}]}"#),
            Err(NetroleError::ManifestMalformed(_))
        ));
        // a card whose mac cannot match anything is unusable, not tolerated
        assert!(matches!(
            HardwareManifest::parse(r#"{"cards": [{"name": "eth0", "mac": "not-a-mac"}]}"#),
            Err(NetroleError::ManifestMalformed(_))
        ));
    }

    #[test]
    fn test_parse_empty_cards() {
        let manifest = HardwareManifest::parse(r#"{"hotspot": "none", "cards": []}"#).unwrap();
        assert!(manifest.cards.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = HardwareManifest::load("/nonexistent/manifest").await.unwrap_err();
        assert!(matches!(err, NetroleError::ManifestUnavailable(_)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let manifest = HardwareManifest::load(file.path()).await.unwrap();
        assert_eq!(manifest.cards.len(), 2);
    }
}
