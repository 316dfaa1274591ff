//! Role application
//!
//! Takes the merged records one at a time, resolves the effective role and
//! issues the fixed command sequence for it. A failed command aborts the
//! remaining steps for that interface only; the partially-configured state
//! is left for the next reconciliation cycle to repair. Nothing here retries.

use crate::command::CommandRunner;
use crate::error::{NetroleError, NetroleResult};
use crate::policy::{effective_role, DeviceMode};
use crate::record::{InterfaceRecord, Role};
use crate::status::{StatusLevel, StatusReporter};
use crate::validation;
use std::sync::Arc;

/// Address used for static interfaces when no override supplies one
pub const DEFAULT_STATIC_ADDRESS: &str = "192.168.3.1/24";

/// Hotspot lifecycle within one process run. Never returns to Unconfigured;
/// a restart is the only reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotState {
    Unconfigured,
    Configuring,
    Configured,
}

/// Applies roles to interfaces through a delegated command runner.
///
/// Owns the single-hotspot state for the run, so the at-most-one-hotspot
/// invariant holds no matter how many records ask for the role.
pub struct RoleApplier {
    runner: Arc<dyn CommandRunner>,
    reporter: Arc<dyn StatusReporter>,
    hotspot_address: String,
    hotspot_script: String,
    hotspot: HotspotState,
}

impl RoleApplier {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        reporter: Arc<dyn StatusReporter>,
        hotspot_address: String,
        hotspot_script: String,
    ) -> Self {
        Self {
            runner,
            reporter,
            hotspot_address,
            hotspot_script,
            hotspot: HotspotState::Unconfigured,
        }
    }

    pub fn hotspot_state(&self) -> HotspotState {
        self.hotspot
    }

    /// Resolve the effective role for `record` under `mode` and apply it.
    ///
    /// An error means the interface was left partially configured; the
    /// caller reports and moves on to the next record.
    pub async fn apply(&mut self, record: &mut InterfaceRecord, mode: DeviceMode) -> NetroleResult<()> {
        if let Err(e) = validation::validate_interface_name(&record.name) {
            self.reporter.report(
                StatusLevel::Warning,
                &format!("Skipping interface {}: {}", record.mac, e),
            );
            return Err(e);
        }

        match effective_role(record.role, mode) {
            Role::Static => self.setup_static(record).await,
            Role::Hotspot => self.setup_hotspot(record).await,
            Role::Client => self.setup_client(record).await,
            // effective_role never yields Unset
            Role::Unset => unreachable!("effective role is always concrete"),
        }
    }

    /// Report at warning severity and produce the matching error
    fn command_failed(&self, message: &str, cmd: &str) -> NetroleError {
        self.reporter.report(StatusLevel::Warning, message);
        NetroleError::CommandFailed { cmd: cmd.to_string() }
    }

    async fn setup_static(&self, record: &mut InterfaceRecord) -> NetroleResult<()> {
        self.reporter.report(
            StatusLevel::Info,
            &format!("Setting up static interface {}", record.name),
        );

        record.role = Role::Static;

        if record.ip.is_empty() {
            record.ip = DEFAULT_STATIC_ADDRESS.to_string();
        }

        if let Err(e) = validation::validate_address_with_prefix(&record.ip) {
            self.reporter.report(
                StatusLevel::Warning,
                &format!("Bad static address on {}: {}", record.name, e),
            );
            return Err(e);
        }

        let args = vec![record.name.clone(), record.ip.clone(), "up".to_string()];
        if !self.runner.run("ifconfig", &args).await {
            return Err(self.command_failed(
                &format!("Failed to bring up static interface {}", record.name),
                "ifconfig",
            ));
        }

        if !record.gateway.is_empty() {
            if let Err(e) = validation::validate_ip_address(&record.gateway) {
                self.reporter.report(
                    StatusLevel::Warning,
                    &format!("Bad gateway on {}: {}", record.name, e),
                );
                return Err(e);
            }

            let args: Vec<String> =
                ["route", "add", "default", "via", &record.gateway, "dev", &record.name]
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
            if !self.runner.run("ip", &args).await {
                return Err(self.command_failed(
                    &format!("Failed to install default route on {}", record.name),
                    "ip route",
                ));
            }
        }

        self.reporter.report(
            StatusLevel::Info,
            &format!("Static interface {} running", record.name),
        );
        Ok(())
    }

    async fn setup_hotspot(&mut self, record: &mut InterfaceRecord) -> NetroleResult<()> {
        if self.hotspot == HotspotState::Configured {
            // Another interface already serves as hotspot; a notice, not a failure
            self.reporter.report(
                StatusLevel::Info,
                &format!(
                    "Hotspot already served by another interface, leaving {} alone",
                    record.name
                ),
            );
            return Ok(());
        }

        self.reporter.report(
            StatusLevel::Info,
            &format!("Setting up hotspot on {}", record.name),
        );

        record.role = Role::Hotspot;
        self.hotspot = HotspotState::Configuring;

        // The hotspot address is fixed for the run; the DHCP/NAT setup script
        // is configured for it, so a per-card address would not work anyway.
        let args = vec![
            record.name.clone(),
            self.hotspot_address.clone(),
            "up".to_string(),
        ];
        if !self.runner.run("ifconfig", &args).await {
            return Err(self.command_failed(
                &format!("Failed to bring up hotspot interface {}", record.name),
                "ifconfig",
            ));
        }

        let args = vec![
            self.hotspot_script.clone(),
            record.name.clone(),
            self.hotspot_address.clone(),
        ];
        if !self.runner.run("/bin/bash", &args).await {
            return Err(self.command_failed(
                &format!("Failed to start DHCP/NAT service on {}", record.name),
                &self.hotspot_script,
            ));
        }

        self.hotspot = HotspotState::Configured;
        self.reporter.report(
            StatusLevel::Info,
            &format!("Hotspot running on {}", record.name),
        );
        Ok(())
    }

    async fn setup_client(&self, record: &mut InterfaceRecord) -> NetroleResult<()> {
        self.reporter.report(
            StatusLevel::Info,
            &format!("Setting up client interface {}", record.name),
        );

        record.role = Role::Client;

        // --no-ntp: the DHCP client must not touch system time
        let args = vec!["-i".to_string(), record.name.clone(), "--no-ntp".to_string()];
        if !self.runner.run("pump", &args).await {
            return Err(self.command_failed(
                &format!("Failed to start DHCP client on {}", record.name),
                "pump",
            ));
        }

        self.reporter.report(
            StatusLevel::Info,
            &format!("Client interface {} running", record.name),
        );
        Ok(())
    }
}
