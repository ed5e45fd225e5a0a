// rfr-common/src/config.rs
use std::env;

use tracing::debug;

pub const DEFAULT_PYTHON: &str = "python3";
pub const DEFAULT_PACKAGE_INDEX_URL: &str = "https://pypi.org/pypi";

pub const PYTHON_ENV_VAR: &str = "RFR_PYTHON";
pub const PACKAGE_INDEX_ENV_VAR: &str = "RFR_PYPI_URL";
pub const LOG_ENV_VAR: &str = "RFR_LOG";

/// Settings taken from the process environment rather than the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub python: String,
    pub package_index_url: String,
}

impl Environment {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from an arbitrary key lookup. Unset or empty values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_or = |key: &str, default: &str| {
            lookup(key).filter(|s| !s.trim().is_empty()).unwrap_or_else(|| {
                debug!("{} not set or empty, falling back to default: {}", key, default);
                default.to_string()
            })
        };

        let python = value_or(PYTHON_ENV_VAR, DEFAULT_PYTHON);
        let package_index_url = value_or(PACKAGE_INDEX_ENV_VAR, DEFAULT_PACKAGE_INDEX_URL)
            .trim_end_matches('/')
            .to_string();

        debug!(
            "Environment loaded: python='{}', package index='{}'",
            python, package_index_url
        );
        Self {
            python,
            package_index_url,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            package_index_url: DEFAULT_PACKAGE_INDEX_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn unset_values_use_defaults() {
        let env = Environment::from_lookup(|_| None);
        assert_eq!(env, Environment::default());
    }

    #[test]
    fn empty_values_use_defaults() {
        let env = Environment::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(env, Environment::default());
    }

    #[test]
    fn overrides_are_applied_and_index_url_is_trimmed() {
        let vars: HashMap<&str, &str> = [
            (PYTHON_ENV_VAR, "/usr/local/bin/python3.12"),
            (PACKAGE_INDEX_ENV_VAR, "https://mirror.example.org/pypi/"),
        ]
        .into_iter()
        .collect();
        let env = Environment::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(env.python, "/usr/local/bin/python3.12");
        assert_eq!(env.package_index_url, "https://mirror.example.org/pypi");
    }
}
