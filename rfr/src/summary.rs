// rfr/src/summary.rs
//! What the binaries hand to the transport layer once startup succeeded.
use std::path::PathBuf;

use rfr_aio::{create_dir_all, resolve_output_path};
use rfr_common::error::Result;
use rfr_common::model::{RunLogLevel, UpgradePolicy};
use rfr_core::UpgradeDecision;
use serde::Serialize;
use tracing::debug;

use crate::cli::{ClientConfig, ServerConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ClientPlan {
    /// Only probe the server.
    TestConnection { host: String, port: u16, user: String },
    Run(RunRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRequest {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub log_level: RunLogLevel,
    pub suites: Vec<String>,
    pub tests: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub extensions: Vec<String>,
    pub input_dirs: Vec<PathBuf>,
    pub output_file: PathBuf,
    pub log_file: PathBuf,
    pub report_file: PathBuf,
    pub client_enforces_upgrade: bool,
    pub debug: bool,
}

impl ClientPlan {
    /// Resolves artifact paths against the output directory, creating it if needed.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        if config.test_connection() {
            return Ok(ClientPlan::TestConnection {
                host: config.host().to_string(),
                port: config.port(),
                user: config.user().to_string(),
            });
        }

        let output_dir = config.output_dir();
        if !output_dir.is_dir() {
            create_dir_all(output_dir)?;
        }
        let output_file = resolve_output_path(config.output_file(), output_dir)?;
        let log_file = resolve_output_path(config.log_file(), output_dir)?;
        let report_file = resolve_output_path(config.report_file(), output_dir)?;
        debug!(
            "Run artifacts: output {}, log {}, report {}",
            output_file.display(),
            log_file.display(),
            report_file.display()
        );

        Ok(ClientPlan::Run(RunRequest {
            host: config.host().to_string(),
            port: config.port(),
            user: config.user().to_string(),
            log_level: config.log_level(),
            suites: config.suites().to_vec(),
            tests: config.tests().to_vec(),
            includes: config.includes().to_vec(),
            excludes: config.excludes().to_vec(),
            extensions: config.extensions().to_vec(),
            input_dirs: config.input_dirs().to_vec(),
            output_file,
            log_file,
            report_file,
            client_enforces_upgrade: config.client_enforces_upgrade(),
            debug: config.debug(),
        }))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerStartup {
    pub host: String,
    pub port: u16,
    pub log_level: RunLogLevel,
    pub upgrade_policy: UpgradePolicy,
    pub preflight: Vec<UpgradeDecision>,
}

impl ServerStartup {
    pub fn new(config: &ServerConfig, preflight: Vec<UpgradeDecision>) -> Self {
        Self {
            host: config.host().to_string(),
            port: config.port(),
            log_level: config.log_level(),
            upgrade_policy: config.upgrade_policy(),
            preflight,
        }
    }
}
