// rfr-core/src/upgrade/mod.rs
pub mod plan;
pub mod policy;

pub use plan::{plan_upgrades, UpgradeDecision};
pub use policy::decide;
