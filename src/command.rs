//! Delegated OS command execution
//!
//! Role appliers never touch the network stack directly; they hand fixed
//! argv sequences to a `CommandRunner`. Failures are boolean only, no
//! structured error detail crosses this boundary.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

/// Injectable command execution capability
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, true on exit status 0
    async fn run(&self, program: &str, args: &[String]) -> bool;
}

/// Runs commands on the real system via tokio
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> bool {
        debug!("Running: {} {}", program, args.join(" "));

        match Command::new(program).args(args).output().await {
            Ok(output) => {
                if !output.status.success() {
                    warn!(
                        "{} exited with {:?}: {}",
                        program,
                        output.status.code(),
                        String::from_utf8_lossy(&output.stderr).trim()
                    );
                }
                output.status.success()
            }
            Err(e) => {
                warn!("Failed to spawn {}: {}", program, e);
                false
            }
        }
    }
}
