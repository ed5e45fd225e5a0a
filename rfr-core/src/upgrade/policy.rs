// rfr-core/src/upgrade/policy.rs
use rfr_common::model::UpgradePolicy;

use crate::check::{Compliance, DependencyStatus};

/// Merges the server policy, the client's enforcement request and the
/// compliance result into a single "upgrade this package" answer.
///
/// A server `NEVER` always wins; after that the client flag forces an upgrade.
/// Under `OUTDATED` an indeterminate result counts as out of date.
pub fn decide(policy: UpgradePolicy, client_enforces: bool, status: &DependencyStatus) -> bool {
    match policy {
        UpgradePolicy::Never => false,
        _ if client_enforces => true,
        UpgradePolicy::Always => true,
        UpgradePolicy::Outdated => status.compliance != Compliance::Satisfied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(compliance: Compliance) -> DependencyStatus {
        DependencyStatus {
            installed_version: None,
            resolved_target: None,
            compliance,
        }
    }

    const ALL_RESULTS: [Compliance; 3] = [
        Compliance::Satisfied,
        Compliance::Violated,
        Compliance::Indeterminate,
    ];

    #[test]
    fn never_vetoes_client_enforcement() {
        assert!(!decide(UpgradePolicy::Never, true, &status(Compliance::Violated)));
        for result in ALL_RESULTS {
            for enforce in [false, true] {
                assert!(!decide(UpgradePolicy::Never, enforce, &status(result)));
            }
        }
    }

    #[test]
    fn client_enforcement_forces_upgrade_when_allowed() {
        for result in ALL_RESULTS {
            assert!(decide(UpgradePolicy::Outdated, true, &status(result)));
            assert!(decide(UpgradePolicy::Always, true, &status(result)));
        }
    }

    #[test]
    fn always_upgrades_even_when_satisfied() {
        assert!(decide(UpgradePolicy::Always, false, &status(Compliance::Satisfied)));
    }

    #[test]
    fn outdated_upgrades_only_when_not_satisfied() {
        assert!(!decide(UpgradePolicy::Outdated, false, &status(Compliance::Satisfied)));
        assert!(decide(UpgradePolicy::Outdated, false, &status(Compliance::Violated)));
        assert!(decide(UpgradePolicy::Outdated, false, &status(Compliance::Indeterminate)));
    }
}
