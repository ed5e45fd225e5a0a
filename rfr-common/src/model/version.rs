// rfr-common/src/model/version.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RfrError};

/// Wrapper around semver::Version for installed and required package versions.
// Ordering is semver::Version's total order, so build metadata breaks ties: 1.0.0+local.1 > 1.0.0.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        semver::Version::parse(trimmed).map(Version).or_else(|_| {
            // Package indexes commonly publish "6.1" or "23" style versions.
            // Pad those to three components; anything else must already be semver.
            let parts: Vec<&str> = trimmed.split('.').collect();
            let padded = match parts.len() {
                1 => format!("{}.0.0", parts[0]),
                2 => format!("{}.{}.0", parts[0], parts[1]),
                _ => trimmed.to_string(),
            };
            semver::Version::parse(&padded).map(Version).map_err(|e| {
                RfrError::ParseFailure(
                    "version",
                    format!("Failed to parse version '{s}' (tried '{padded}'): {e}"),
                )
            })
        })
    }

    pub fn as_semver(&self) -> &semver::Version {
        &self.0
    }
}

impl FromStr for Version {
    type Err = RfrError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<semver::Version> for Version {
    fn from(version: semver::Version) -> Self {
        Version(version)
    }
}

impl From<Version> for semver::Version {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Version::from_str(&s).map_err(serde::de::Error::custom)
    }
}
