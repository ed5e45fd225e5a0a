// rfr-common/src/model/policy.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RfrError};

/// Server-side rule for upgrading packages a run depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UpgradePolicy {
    /// Never upgrade, even if the client asks for it.
    #[default]
    Never,
    /// Upgrade when the installed version does not satisfy the requirement.
    Outdated,
    /// Upgrade on every run.
    Always,
}

impl UpgradePolicy {
    pub const VARIANTS: [&'static str; 3] = ["NEVER", "OUTDATED", "ALWAYS"];

    pub fn as_str(self) -> &'static str {
        match self {
            UpgradePolicy::Never => "NEVER",
            UpgradePolicy::Outdated => "OUTDATED",
            UpgradePolicy::Always => "ALWAYS",
        }
    }
}

impl FromStr for UpgradePolicy {
    type Err = RfrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NEVER" => Ok(UpgradePolicy::Never),
            "OUTDATED" => Ok(UpgradePolicy::Outdated),
            "ALWAYS" => Ok(UpgradePolicy::Always),
            _ => Err(RfrError::InvalidArgument(format!(
                "invalid upgrade policy '{s}' (expected one of {})",
                Self::VARIANTS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for UpgradePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log threshold handed to the remote test framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunLogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    None,
}

impl RunLogLevel {
    pub const VARIANTS: [&'static str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "NONE"];

    pub fn as_str(self) -> &'static str {
        match self {
            RunLogLevel::Trace => "TRACE",
            RunLogLevel::Debug => "DEBUG",
            RunLogLevel::Info => "INFO",
            RunLogLevel::Warn => "WARN",
            RunLogLevel::None => "NONE",
        }
    }
}

impl FromStr for RunLogLevel {
    type Err = RfrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(RunLogLevel::Trace),
            "DEBUG" => Ok(RunLogLevel::Debug),
            "INFO" => Ok(RunLogLevel::Info),
            "WARN" => Ok(RunLogLevel::Warn),
            "NONE" => Ok(RunLogLevel::None),
            _ => Err(RfrError::InvalidArgument(format!(
                "invalid log level '{s}' (expected one of {})",
                Self::VARIANTS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for RunLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
