// rfr-core/src/upgrade/plan.rs
use rfr_common::model::{PackageRequirement, UpgradePolicy};
use serde::Serialize;
use tracing::{debug, info};

use crate::check::{Compliance, ComplianceEvaluator, DependencyMetadataProvider, DependencyStatus};
use crate::upgrade::policy::decide;

#[derive(Debug, Clone, Serialize)]
pub struct UpgradeDecision {
    pub requirement: PackageRequirement,
    pub status: DependencyStatus,
    pub upgrade: bool,
}

/// Evaluates every requirement of one run, in order, and decides for each
/// whether an upgrade should be attempted.
pub fn plan_upgrades<P: DependencyMetadataProvider>(
    evaluator: &ComplianceEvaluator<P>,
    policy: UpgradePolicy,
    client_enforces: bool,
    requirements: &[PackageRequirement],
) -> Vec<UpgradeDecision> {
    requirements
        .iter()
        .map(|requirement| {
            let status = evaluator.evaluate_requirement(requirement);
            let upgrade = decide(policy, client_enforces, &status);
            evaluator.log().scope(|| {
                if status.compliance == Compliance::Indeterminate {
                    info!(
                        "Compliance of '{}' could not be determined (policy {}, client enforcement {})",
                        requirement, policy, client_enforces
                    );
                }
                debug!(
                    "Upgrade decision for '{}': {} (compliance {})",
                    requirement,
                    if upgrade { "upgrade" } else { "keep" },
                    status.compliance
                );
            });
            UpgradeDecision {
                requirement: requirement.clone(),
                status,
                upgrade,
            }
        })
        .collect()
}
