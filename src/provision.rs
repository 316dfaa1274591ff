//! One full reconciliation cycle
//!
//! Sequencing only; the interesting rules live in the reconciler, the policy
//! and the appliers. Every failure degrades instead of aborting: a missing
//! manifest means zero interfaces, an unwritable settings file means this
//! cycle runs from memory, and a failed command costs only that interface.

use crate::apply::{HotspotState, RoleApplier};
use crate::command::CommandRunner;
use crate::config::NetroleConfig;
use crate::manifest::HardwareManifest;
use crate::reconcile;
use crate::settings::SettingsStore;
use crate::status::{StatusLevel, StatusReporter};
use std::sync::Arc;
use tracing::{debug, info};

/// What a cycle did, for the caller's exit logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    /// Interfaces present in the merged set
    pub discovered: usize,
    /// Interfaces whose full command sequence succeeded
    pub applied: usize,
    /// Interfaces that failed partway and were left for the next cycle
    pub failed: usize,
    /// Whether the merged set reached the settings file
    pub persisted: bool,
    /// Hotspot state at the end of the run
    pub hotspot: HotspotState,
}

/// Runs reconciliation cycles: manifest -> merge -> persist -> apply
pub struct Provisioner {
    config: NetroleConfig,
    runner: Arc<dyn CommandRunner>,
    reporter: Arc<dyn StatusReporter>,
}

impl Provisioner {
    pub fn new(
        config: NetroleConfig,
        runner: Arc<dyn CommandRunner>,
        reporter: Arc<dyn StatusReporter>,
    ) -> Self {
        Self {
            config,
            runner,
            reporter,
        }
    }

    /// Run one cycle to completion. Never fails; every error path is
    /// reported and degraded per the cycle rules above.
    pub async fn run_cycle(&self) -> CycleSummary {
        info!("Starting reconciliation cycle in {} mode", self.config.mode);

        let (discovered, inventory_ok) = match HardwareManifest::load(&self.config.manifest_path).await {
            Ok(manifest) => {
                debug!(
                    "Manifest: {} card(s), hotspot type {:?}",
                    manifest.cards.len(),
                    manifest.hotspot_type
                );
                (manifest.cards, true)
            }
            Err(e) => {
                // Continue with zero interfaces rather than aborting
                self.reporter.report(
                    StatusLevel::Emergency,
                    &format!("Ethernet manifest processing failed: {}", e),
                );
                (Vec::new(), false)
            }
        };

        let store = SettingsStore::new(&self.config.settings_path);
        let overrides = store.load().await;
        debug!("Loaded {} persisted override(s)", overrides.len());

        let mut merged = reconcile::merge(discovered, &overrides);

        // Persist exactly once, after the full merge. Role application still
        // proceeds from the in-memory set if this fails. When discovery
        // itself failed the file is left untouched: a transient manifest
        // failure must not wipe the user's persisted overrides.
        let persisted = if inventory_ok {
            match store.save(&merged).await {
                Ok(()) => true,
                Err(e) => {
                    self.reporter
                        .report(StatusLevel::Emergency, &format!("Ethernet settings save failed: {}", e));
                    false
                }
            }
        } else {
            debug!("Skipping settings save: hardware inventory unavailable");
            false
        };

        let mut applier = RoleApplier::new(
            self.runner.clone(),
            self.reporter.clone(),
            self.config.hotspot_address.clone(),
            self.config.hotspot_script.display().to_string(),
        );

        let mut applied = 0;
        let mut failed = 0;
        for record in merged.iter_mut() {
            match applier.apply(record, self.config.mode).await {
                Ok(()) => applied += 1,
                Err(e) => {
                    // Already reported at warning severity by the applier
                    debug!("Interface {} left partially configured: {}", record.name, e);
                    failed += 1;
                }
            }
        }

        let summary = CycleSummary {
            discovered: merged.len(),
            applied,
            failed,
            persisted,
            hotspot: applier.hotspot_state(),
        };

        info!(
            "Cycle complete: {} interface(s), {} applied, {} failed",
            summary.discovered, summary.applied, summary.failed
        );
        summary
    }
}
