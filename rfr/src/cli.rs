// rfr/src/cli.rs
//! Command-line resolution for the client and server binaries.
use std::path::PathBuf;

use clap::error::ErrorKind;
use rfr_aio::is_directory;
use rfr_common::error::RfrError;
use rfr_common::model::{PackageRequirement, RunLogLevel, UpgradePolicy};

pub mod client;
pub mod server;

pub use client::ClientConfig;
pub use server::ServerConfig;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8111;
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASS: &str = "admin";
pub const DEFAULT_LOG_LEVEL: &str = "WARN";

/// Help and version output are not failures; everything else clap rejects is
/// an invalid argument.
pub(crate) fn from_clap_error(err: clap::Error) -> RfrError {
    let rendered = err.render().to_string().trim_end().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => RfrError::HelpRequested(rendered),
        _ => RfrError::InvalidArgument(rendered.trim_start_matches("error: ").to_string()),
    }
}

pub(crate) fn parse_run_log_level(s: &str) -> Result<RunLogLevel, String> {
    s.parse().map_err(|e: RfrError| e.to_string())
}

pub(crate) fn parse_upgrade_policy(s: &str) -> Result<UpgradePolicy, String> {
    s.parse().map_err(|e: RfrError| e.to_string())
}

pub(crate) fn parse_requirement(s: &str) -> Result<PackageRequirement, String> {
    s.parse().map_err(|e: RfrError| e.to_string())
}

pub(crate) fn existing_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if is_directory(&path) {
        Ok(path)
    } else {
        Err(format!("Value '{s}' is not a valid input directory"))
    }
}
