//! Configuration management for netrole

use crate::error::{NetroleError, NetroleResult};
use crate::manifest::DEFAULT_MANIFEST_PATH;
use crate::policy::DeviceMode;
use crate::settings::DEFAULT_SETTINGS_PATH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main netrole configuration, fixed for the lifetime of a cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetroleConfig {
    /// Operating role of this device
    #[serde(default = "default_mode")]
    pub mode: DeviceMode,
    /// Hardware manifest written by the discovery service
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
    /// Persisted per-interface settings
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    /// Address served on a hotspot interface
    #[serde(default = "default_hotspot_address")]
    pub hotspot_address: String,
    /// DHCP/NAT setup script invoked for hotspot interfaces
    #[serde(default = "default_hotspot_script")]
    pub hotspot_script: PathBuf,
}

fn default_mode() -> DeviceMode {
    DeviceMode::Ground
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

fn default_settings_path() -> PathBuf {
    PathBuf::from(DEFAULT_SETTINGS_PATH)
}

fn default_hotspot_address() -> String {
    // Must match the subnet the hotspot setup script serves
    "192.168.3.1".to_string()
}

fn default_hotspot_script() -> PathBuf {
    PathBuf::from("/usr/local/share/netrole/ethernet_hotspot.sh")
}

impl Default for NetroleConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            manifest_path: default_manifest_path(),
            settings_path: default_settings_path(),
            hotspot_address: default_hotspot_address(),
            hotspot_script: default_hotspot_script(),
        }
    }
}

impl NetroleConfig {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> NetroleResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| NetroleError::ConfigError(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| NetroleError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> NetroleResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NetroleError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| NetroleError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetroleConfig::default();
        assert_eq!(config.mode, DeviceMode::Ground);
        assert_eq!(config.manifest_path, PathBuf::from("/tmp/ethernet_manifest"));
        assert_eq!(config.hotspot_address, "192.168.3.1");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: NetroleConfig = toml::from_str("mode = \"air\"\n").unwrap();
        assert_eq!(config.mode, DeviceMode::Air);
        assert_eq!(config.settings_path, PathBuf::from(DEFAULT_SETTINGS_PATH));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netrole.toml");

        let mut config = NetroleConfig::default();
        config.mode = DeviceMode::Air;
        config.hotspot_address = "10.42.0.1".to_string();
        config.save(&path).unwrap();

        let loaded = NetroleConfig::load(&path).unwrap();
        assert_eq!(loaded.mode, DeviceMode::Air);
        assert_eq!(loaded.hotspot_address, "10.42.0.1");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            NetroleConfig::load("/nonexistent/netrole.toml"),
            Err(NetroleError::ConfigError(_))
        ));
    }
}
