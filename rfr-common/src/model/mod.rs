// rfr-common/src/model/mod.rs
pub mod policy;
pub mod requirement;
pub mod version;

pub use policy::{RunLogLevel, UpgradePolicy};
pub use requirement::{CompareOperator, PackageRequirement, TargetSpec};
pub use version::Version;
