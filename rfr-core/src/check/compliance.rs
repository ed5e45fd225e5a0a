// rfr-core/src/check/compliance.rs
//! Classifies whether an installed package satisfies a declared requirement.
//!
//! Every lookup or parse failure degrades to [`Compliance::Indeterminate`];
//! the only error that escapes is an invalid operator or package name.
use std::fmt;

use rfr_common::error::Result;
use rfr_common::logging::LogContext;
use rfr_common::model::{PackageRequirement, TargetSpec, Version};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::check::provider::DependencyMetadataProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compliance {
    Satisfied,
    Violated,
    /// Compliance could not be confirmed (lookup or parse failure).
    Indeterminate,
}

impl fmt::Display for Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compliance::Satisfied => f.write_str("satisfied"),
            Compliance::Violated => f.write_str("violated"),
            Compliance::Indeterminate => f.write_str("indeterminate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyStatus {
    pub installed_version: Option<Version>,
    pub resolved_target: Option<Version>,
    pub compliance: Compliance,
}

impl DependencyStatus {
    fn indeterminate(installed_version: Option<Version>, resolved_target: Option<Version>) -> Self {
        Self {
            installed_version,
            resolved_target,
            compliance: Compliance::Indeterminate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComplianceEvaluator<P> {
    provider: P,
    log: LogContext,
}

impl<P: DependencyMetadataProvider> ComplianceEvaluator<P> {
    pub fn new(provider: P, log: LogContext) -> Self {
        Self { provider, log }
    }

    pub fn log(&self) -> &LogContext {
        &self.log
    }

    /// Validates `operator` before touching the provider, then classifies.
    pub fn evaluate(&self, name: &str, operator: &str, target: &str) -> Result<DependencyStatus> {
        let requirement = PackageRequirement::new(name, operator, target)?;
        Ok(self.evaluate_requirement(&requirement))
    }

    pub fn evaluate_requirement(&self, requirement: &PackageRequirement) -> DependencyStatus {
        self.log.scope(|| self.classify(requirement))
    }

    fn classify(&self, requirement: &PackageRequirement) -> DependencyStatus {
        let name = requirement.name();

        let Some(installed_raw) = self.provider.resolve_installed(name) else {
            info!("Package '{}': installed version unknown, compliance indeterminate", name);
            return DependencyStatus::indeterminate(None, None);
        };

        let target_raw = match requirement.target() {
            TargetSpec::Latest => match self.provider.resolve_latest(name) {
                Some(latest) => latest,
                None => {
                    info!("Package '{}': latest version unavailable, compliance indeterminate", name);
                    return DependencyStatus::indeterminate(parse_logged(name, &installed_raw), None);
                }
            },
            TargetSpec::Literal(literal) => literal.clone(),
        };

        let (installed, target) = match (
            parse_logged(name, &installed_raw),
            parse_logged(name, &target_raw),
        ) {
            (Some(installed), Some(target)) => (installed, target),
            (installed, target) => {
                info!("Package '{}': version not parsable, compliance indeterminate", name);
                return DependencyStatus::indeterminate(installed, target);
            }
        };

        let operator = requirement.operator();
        let compliance = if operator.apply(&installed, &target) {
            Compliance::Satisfied
        } else {
            Compliance::Violated
        };
        info!(
            "Package '{}' comparison: installed '{}' {} required '{}' = {}",
            name, installed, operator, target, compliance
        );

        DependencyStatus {
            installed_version: Some(installed),
            resolved_target: Some(target),
            compliance,
        }
    }
}

fn parse_logged(name: &str, raw: &str) -> Option<Version> {
    Version::parse(raw)
        .map_err(|e| debug!("Package '{}': {}", name, e))
        .ok()
}
