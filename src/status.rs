//! Operator-facing status reporting
//!
//! Leveled events for operator visibility. Reporting never affects control
//! flow; a reporter that drops everything is a valid implementation.

use std::fmt;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Emergency,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Info => write!(f, "info"),
            StatusLevel::Warning => write!(f, "warning"),
            StatusLevel::Emergency => write!(f, "emergency"),
        }
    }
}

pub trait StatusReporter: Send + Sync {
    fn report(&self, level: StatusLevel, message: &str);
}

/// Reporter backed by the tracing subscriber
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for LogReporter {
    fn report(&self, level: StatusLevel, message: &str) {
        match level {
            StatusLevel::Info => info!("{}", message),
            StatusLevel::Warning => warn!("{}", message),
            StatusLevel::Emergency => error!("{}", message),
        }
    }
}
