// rfr-core/src/check/provider.rs
use rfr_common::config::Environment;
use rfr_common::error::Result;
use rfr_net::PypiClient;
use tracing::debug;

use crate::check::installed::query_installed_version;

/// Source of installed/latest version facts for a named package.
///
/// Implementations never fail: anything that cannot be answered is `None`.
pub trait DependencyMetadataProvider {
    fn resolve_installed(&self, name: &str) -> Option<String>;
    fn resolve_latest(&self, name: &str) -> Option<String>;
}

impl<P: DependencyMetadataProvider + ?Sized> DependencyMetadataProvider for &P {
    fn resolve_installed(&self, name: &str) -> Option<String> {
        (**self).resolve_installed(name)
    }

    fn resolve_latest(&self, name: &str) -> Option<String> {
        (**self).resolve_latest(name)
    }
}

/// Installed versions come from `pip show`, latest versions from the package index.
#[derive(Debug, Clone)]
pub struct PipMetadataProvider {
    python: String,
    index: PypiClient,
}

impl PipMetadataProvider {
    pub fn new(env: &Environment) -> Result<Self> {
        Ok(Self {
            python: env.python.clone(),
            index: PypiClient::new(&env.package_index_url)?,
        })
    }
}

impl DependencyMetadataProvider for PipMetadataProvider {
    fn resolve_installed(&self, name: &str) -> Option<String> {
        match query_installed_version(&self.python, name) {
            Ok(Some(version)) => {
                debug!("Installed version of '{}': {}", name, version);
                Some(version)
            }
            Ok(None) => {
                debug!("Package '{}' is not installed", name);
                None
            }
            Err(e) => {
                debug!("Installed version lookup failed: {}", e);
                None
            }
        }
    }

    fn resolve_latest(&self, name: &str) -> Option<String> {
        match self.index.fetch_latest_version(name) {
            Ok(version) => {
                debug!("Latest version of '{}': {}", name, version);
                Some(version)
            }
            Err(e) => {
                debug!("Latest version lookup failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingProvider;

    #[test]
    fn unreachable_sources_resolve_to_none() {
        let env = Environment {
            python: "/nonexistent/python-for-rfr-tests".to_string(),
            package_index_url: "http://127.0.0.1:9/pypi".to_string(),
        };
        let provider = PipMetadataProvider::new(&env).unwrap();
        assert_eq!(provider.resolve_installed("robotframework"), None);
        assert_eq!(provider.resolve_latest("robotframework"), None);
    }

    #[test]
    fn invalid_index_url_fails_construction() {
        let env = Environment {
            python: "python3".to_string(),
            package_index_url: "pypi.org".to_string(),
        };
        assert!(PipMetadataProvider::new(&env).is_err());
    }

    #[test]
    fn references_forward_to_the_provider() {
        fn lookup_both<P: DependencyMetadataProvider>(provider: P) -> (Option<String>, Option<String>) {
            (provider.resolve_installed("pkg"), provider.resolve_latest("pkg"))
        }

        let provider = RecordingProvider::new(Some("1.0.0"), Some("2.0.0"));
        let (installed, latest) = lookup_both(&provider);
        assert_eq!(installed.as_deref(), Some("1.0.0"));
        assert_eq!(latest.as_deref(), Some("2.0.0"));
        assert_eq!(provider.calls(), vec!["installed:pkg", "latest:pkg"]);
    }
}
