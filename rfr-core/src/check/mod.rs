pub mod compliance;
pub mod installed;
pub mod provider;

pub use compliance::{Compliance, ComplianceEvaluator, DependencyStatus};
pub use provider::{DependencyMetadataProvider, PipMetadataProvider};
