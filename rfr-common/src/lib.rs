// rfr-common/src/lib.rs
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

// Re-export key types
pub use config::Environment;
pub use error::{Result, RfrError};
pub use logging::LogContext;
pub use model::{CompareOperator, PackageRequirement, RunLogLevel, TargetSpec, UpgradePolicy, Version};
