//! Network Role Daemon (netroled)
//!
//! Runs one reconciliation cycle and exits: reads the hardware manifest,
//! merges persisted settings, re-persists the merged set and applies each
//! interface's role to the network stack. Intended to run once per boot
//! from an init unit.
//!
//! # Usage
//!
//! ```bash
//! # Apply roles using /etc/netrole/netrole.toml (requires root/sudo)
//! sudo netroled
//!
//! # Force air mode regardless of the config file
//! sudo netroled --mode air
//!
//! # Verbose logging
//! sudo netroled --verbose
//! ```

use clap::Parser;
use libnetrole::config::NetroleConfig;
use libnetrole::command::SystemCommandRunner;
use libnetrole::policy::DeviceMode;
use libnetrole::provision::Provisioner;
use libnetrole::status::LogReporter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Default daemon configuration location
const DEFAULT_CONFIG_PATH: &str = "/etc/netrole/netrole.toml";

/// Network Role Daemon
#[derive(Parser, Debug)]
#[command(name = "netroled")]
#[command(author = "netrole contributors")]
#[command(version)]
#[command(about = "Assigns and applies network roles to discovered interfaces", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the device operating mode (air, ground)
    #[arg(short, long)]
    mode: Option<DeviceMode>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(&args);

    info!("Starting Network Role Daemon (netroled)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Check if running as root
    #[cfg(target_os = "linux")]
    {
        let uid = unsafe { libc::getuid() };
        if uid != 0 {
            warn!("Not running as root - network configuration commands may fail");
        }
    }

    let mut config = match NetroleConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default configuration: {}", e);
            NetroleConfig::default()
        }
    };

    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    let provisioner = Provisioner::new(
        config,
        Arc::new(SystemCommandRunner::new()),
        Arc::new(LogReporter::new()),
    );

    let summary = provisioner.run_cycle().await;

    if summary.failed > 0 || !summary.persisted {
        warn!(
            "Cycle degraded: {} of {} interface(s) failed, persisted={}",
            summary.failed, summary.discovered, summary.persisted
        );
    }

    // Degraded cycles are still success; partial connectivity beats none,
    // and the next boot re-attempts everything.
}

/// Initialize logging based on command-line arguments
fn init_logging(args: &Args) {
    let log_level = if args.verbose {
        "debug"
    } else {
        &args.log_level
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("netroled={},libnetrole={}", log_level, log_level))
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}
