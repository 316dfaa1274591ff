//! Persisted interface settings
//!
//! One `key=value` block per interface, blank line between blocks:
//!
//! ```text
//! type=wired
//! mac=aa:bb:cc:dd:ee:01
//! name=eth0
//! vendor=
//! use_for=static
//! ip=192.168.3.5/24
//! gateway=
//! ```
//!
//! The file is rewritten with the full merged set at the end of every cycle,
//! so hardware drift heals itself while user edits to matched records stick.

use crate::error::{NetroleError, NetroleResult};
use crate::record::{InterfaceRecord, Role};
use crate::validation;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default settings file location
pub const DEFAULT_SETTINGS_PATH: &str = "/etc/netrole/ethernet.conf";

/// A persisted configuration fragment, keyed by hardware address.
/// Fields left out of the settings block stay `None` and do not clear
/// anything during reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceOverride {
    pub mac: String,
    pub role: Option<Role>,
    pub ip: Option<String>,
    pub gateway: Option<String>,
}

impl InterfaceOverride {
    /// Build an override carrying everything a record would persist.
    /// Feeding these back through the reconciler must be a fixed point.
    pub fn from_record(record: &InterfaceRecord) -> Self {
        Self {
            mac: record.mac.clone(),
            role: match record.role {
                Role::Unset => None,
                role => Some(role),
            },
            ip: non_empty(&record.ip),
            gateway: non_empty(&record.gateway),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Settings file reader/writer
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load persisted overrides. A missing or unreadable file is normal on
    /// first boot and yields an empty set; this never fails the caller.
    pub async fn load(&self) -> Vec<InterfaceOverride> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => parse_settings(&contents),
            Err(e) => {
                debug!("No settings at {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Persist the full merged set, one block per record.
    pub async fn save(&self, records: &[InterfaceRecord]) -> NetroleResult<()> {
        let rendered = render_settings(records);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                NetroleError::Persistence(format!("{}: {}", parent.display(), e))
            })?;
        }

        fs::write(&self.path, rendered).await.map_err(|e| {
            NetroleError::Persistence(format!("{}: {}", self.path.display(), e))
        })?;

        info!("Saved {} interface record(s) to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Parse settings content into overrides. Tolerant: unknown keys and
/// malformed lines are skipped, blocks without a mac are dropped.
pub fn parse_settings(contents: &str) -> Vec<InterfaceOverride> {
    fn flush(block: &mut HashMap<&str, &str>, out: &mut Vec<InterfaceOverride>) {
        // A block whose mac cannot match discovered hardware is dead weight
        if let Some(mac) = block
            .get("mac")
            .filter(|m| validation::validate_mac_address(m).is_ok())
        {
            out.push(InterfaceOverride {
                mac: mac.to_string(),
                role: block
                    .get("use_for")
                    .map(|s| Role::from_str_lossy(s))
                    .filter(|r| *r != Role::Unset),
                ip: block.get("ip").filter(|s| !s.is_empty()).map(|s| s.to_string()),
                gateway: block.get("gateway").filter(|s| !s.is_empty()).map(|s| s.to_string()),
            });
        }
        block.clear();
    }

    let mut overrides = Vec::new();
    let mut block: HashMap<&str, &str> = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut block, &mut overrides);
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            block.insert(key.trim(), value.trim());
        }
    }
    flush(&mut block, &mut overrides);

    overrides
}

/// Render records into the settings block format
pub fn render_settings(records: &[InterfaceRecord]) -> String {
    let mut out = String::new();

    for record in records {
        out.push_str(&format!("type={}\n", record.kind.as_str()));
        out.push_str(&format!("mac={}\n", record.mac));
        out.push_str(&format!("name={}\n", record.name));
        out.push_str(&format!("vendor={}\n", record.vendor));
        out.push_str(&format!("use_for={}\n", record.role.as_str()));
        out.push_str(&format!("ip={}\n", record.ip));
        out.push_str(&format!("gateway={}\n", record.gateway));
        out.push('\n');
    }

    out
}
