//! Reconciliation of discovered hardware with persisted overrides
//!
//! Discovered records decide which interfaces exist; persisted overrides
//! decide role/ip/gateway where the hardware address matches. Overrides
//! whose hardware is gone are dropped here and therefore vanish from the
//! settings file on the next save.

use crate::record::InterfaceRecord;
use crate::settings::InterfaceOverride;

/// Merge persisted overrides onto freshly discovered records.
///
/// Output order equals discovery order and output membership equals the
/// discovered set exactly. Matching is exact string equality on `mac`,
/// first override wins. Idempotent: running the output back through as
/// overrides changes nothing.
pub fn merge(discovered: Vec<InterfaceRecord>, overrides: &[InterfaceOverride]) -> Vec<InterfaceRecord> {
    let mut merged = Vec::with_capacity(discovered.len());

    for mut record in discovered {
        if let Some(ov) = overrides.iter().find(|ov| ov.mac == record.mac) {
            if let Some(role) = ov.role {
                record.role = role;
            }
            if let Some(ref ip) = ov.ip {
                record.ip = ip.clone();
            }
            if let Some(ref gateway) = ov.gateway {
                record.gateway = gateway.clone();
            }
        }
        merged.push(record);
    }

    merged
}
