//! Error types for netrole

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum NetroleError {
    /// IO error
    Io(io::Error),
    /// Hardware manifest missing or unreadable
    ManifestUnavailable(String),
    /// Hardware manifest present but not parseable
    ManifestMalformed(String),
    /// Settings file could not be written
    Persistence(String),
    /// OS network-configuration command failed
    CommandFailed { cmd: String },
    /// Invalid parameter
    InvalidParameter(String),
    /// Parse error
    ParseError(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for NetroleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetroleError::Io(e) => write!(f, "IO error: {}", e),
            NetroleError::ManifestUnavailable(msg) => {
                write!(f, "Hardware manifest unavailable: {}", msg)
            }
            NetroleError::ManifestMalformed(msg) => {
                write!(f, "Hardware manifest malformed: {}", msg)
            }
            NetroleError::Persistence(msg) => write!(f, "Settings persistence failed: {}", msg),
            NetroleError::CommandFailed { cmd } => write!(f, "Command '{}' failed", cmd),
            NetroleError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            NetroleError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            NetroleError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for NetroleError {}

impl From<io::Error> for NetroleError {
    fn from(error: io::Error) -> Self {
        NetroleError::Io(error)
    }
}

impl From<serde_json::Error> for NetroleError {
    fn from(error: serde_json::Error) -> Self {
        NetroleError::ParseError(error.to_string())
    }
}

pub type NetroleResult<T> = Result<T, NetroleError>;
