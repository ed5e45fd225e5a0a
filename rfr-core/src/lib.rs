// rfr-core/src/lib.rs
pub mod check;
pub mod upgrade;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types for easier use by the binaries
pub use check::{
    Compliance, ComplianceEvaluator, DependencyMetadataProvider, DependencyStatus,
    PipMetadataProvider,
};
pub use upgrade::{decide, plan_upgrades, UpgradeDecision};
