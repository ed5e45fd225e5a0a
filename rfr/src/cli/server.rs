// rfr/src/cli/server.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};
use rfr_common::error::{Result, RfrError};
use rfr_common::logging::LogContext;
use rfr_common::model::{PackageRequirement, RunLogLevel, UpgradePolicy};
use tracing::debug;

use super::{
    from_clap_error, parse_requirement, parse_run_log_level, parse_upgrade_policy, DEFAULT_HOST,
    DEFAULT_LOG_LEVEL, DEFAULT_PASS, DEFAULT_PORT, DEFAULT_USER,
};

#[derive(Parser, Debug)]
#[command(name = "rfr-server", version, about = "Execute test suites submitted by rfr clients")]
struct ServerArgs {
    /// Address to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// User name for basic authentication
    #[arg(long, default_value = DEFAULT_USER)]
    user: String,

    /// Password for basic authentication
    #[arg(long = "pass", default_value = DEFAULT_PASS)]
    pass: String,

    /// TLS private key
    #[arg(long, default_value = "privkey.pem")]
    keyfile: PathBuf,

    /// TLS certificate
    #[arg(long, default_value = "cacert.pem")]
    certfile: PathBuf,

    /// Log threshold for remote runs: TRACE, DEBUG, INFO, WARN or NONE
    #[arg(long, value_parser = parse_run_log_level, default_value = DEFAULT_LOG_LEVEL)]
    log_level: RunLogLevel,

    /// Upgrade packages a run depends on: NEVER (even if the client asks),
    /// OUTDATED (only when the requirement is not met) or ALWAYS
    #[arg(long, value_parser = parse_upgrade_policy, default_value = "NEVER")]
    upgrade_server_packages: UpgradePolicy,

    /// Package requirement to check at startup, e.g. 'robotframework>=6.1' (repeatable)
    #[arg(long = "require", value_name = "REQUIREMENT", value_parser = parse_requirement, action = ArgAction::Append)]
    requirements: Vec<PackageRequirement>,

    /// Debug logging; keep run workspaces after execution
    #[arg(long)]
    debug: bool,
}

/// Resolved server settings. Built once from the command line, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
    user: String,
    password: String,
    keyfile: PathBuf,
    certfile: PathBuf,
    log_level: RunLogLevel,
    upgrade_policy: UpgradePolicy,
    requirements: Vec<PackageRequirement>,
    debug: bool,
}

impl ServerConfig {
    /// Parses a full argument list (program name first). Nothing is returned
    /// unless every option validates.
    pub fn from_args<I, T>(args: I, log: &LogContext) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        log.scope(|| {
            let parsed = ServerArgs::try_parse_from(args).map_err(from_clap_error)?;
            let config = Self::from(parsed);
            debug!(
                "Server configuration resolved: bind {}:{}, upgrade policy {}, {} startup requirement(s)",
                config.host,
                config.port,
                config.upgrade_policy,
                config.requirements.len()
            );
            Ok(config)
        })
    }

    pub fn usage() -> String {
        ServerArgs::command().render_usage().to_string()
    }

    /// Both TLS files must exist before the server may report ready.
    pub fn verify_tls_material(&self) -> Result<()> {
        for (label, path) in [("key file", &self.keyfile), ("certificate file", &self.certfile)] {
            if !path.is_file() {
                return Err(RfrError::Config(format!(
                    "TLS {label} '{}' does not exist or is not a file",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn keyfile(&self) -> &Path {
        &self.keyfile
    }

    pub fn certfile(&self) -> &Path {
        &self.certfile
    }

    pub fn log_level(&self) -> RunLogLevel {
        self.log_level
    }

    pub fn upgrade_policy(&self) -> UpgradePolicy {
        self.upgrade_policy
    }

    pub fn requirements(&self) -> &[PackageRequirement] {
        &self.requirements
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            user: args.user,
            password: args.pass,
            keyfile: args.keyfile,
            certfile: args.certfile,
            log_level: args.log_level,
            upgrade_policy: args.upgrade_server_packages,
            requirements: args.requirements,
            debug: args.debug,
        }
    }
}
