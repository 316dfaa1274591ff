//! netrole - Network Role Assignment Library
//!
//! Assigns a network role (static, hotspot, client) to each physical
//! interface discovered on an embedded air/ground unit:
//! - Hardware manifest loading
//! - Reconciliation of discovered hardware with persisted settings
//! - Role policy (explicit override, else device-mode default)
//! - Role application via delegated command execution
//!
//! Runs once per boot/reconfiguration cycle; see [`provision::Provisioner`].

pub mod error;
pub mod validation;
pub mod record;
pub mod manifest;
pub mod settings;
pub mod reconcile;
pub mod policy;
pub mod command;
pub mod status;
pub mod apply;
pub mod provision;
pub mod config;

// Re-export commonly used types
pub use error::{NetroleError, NetroleResult};
pub use record::{InterfaceKind, InterfaceRecord, Role};
pub use manifest::{HardwareManifest, HotspotType};
pub use settings::{InterfaceOverride, SettingsStore};
pub use reconcile::merge;
pub use policy::{effective_role, DeviceMode};
pub use command::{CommandRunner, SystemCommandRunner};
pub use status::{LogReporter, StatusLevel, StatusReporter};
pub use apply::{HotspotState, RoleApplier, DEFAULT_STATIC_ADDRESS};
pub use provision::{CycleSummary, Provisioner};
pub use config::NetroleConfig;
