// rfr/src/bin/rfr-server.rs
use std::process;

use colored::Colorize;
use rfr::cli::ServerConfig;
use rfr::summary::ServerStartup;
use rfr::{exit_codes, report_startup_error};
use rfr_common::config::Environment;
use rfr_common::error::Result;
use rfr_common::logging::LogContext;
use rfr_core::{plan_upgrades, ComplianceEvaluator, PipMetadataProvider};
use tracing::{debug, error, info};

fn main() {
    let bootstrap = LogContext::bootstrap();
    let config = match ServerConfig::from_args(std::env::args_os(), &bootstrap) {
        Ok(config) => config,
        Err(e) => process::exit(report_startup_error(&e, &ServerConfig::usage())),
    };

    let log = LogContext::for_debug(config.debug());
    if let Err(e) = log.scope(|| run(&config, &log)) {
        log.scope(|| error!("Server startup failed: {:#}", e));
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(exit_codes::for_error(&e));
    }
}

fn run(config: &ServerConfig, log: &LogContext) -> Result<()> {
    config.verify_tls_material()?;
    debug!(
        "TLS material present: key {}, certificate {}",
        config.keyfile().display(),
        config.certfile().display()
    );

    let preflight = if config.requirements().is_empty() {
        Vec::new()
    } else {
        let env = Environment::load();
        let provider = PipMetadataProvider::new(&env)?;
        let evaluator = ComplianceEvaluator::new(provider, log.clone());
        // Server-side preflight: no client is involved, so nothing is enforced.
        plan_upgrades(&evaluator, config.upgrade_policy(), false, config.requirements())
    };

    for decision in &preflight {
        info!(
            "Startup requirement '{}': {} ({})",
            decision.requirement,
            decision.status.compliance,
            if decision.upgrade {
                "upgrade would be attempted"
            } else {
                "no upgrade"
            }
        );
    }

    let startup = ServerStartup::new(config, preflight);
    println!("{}", serde_json::to_string_pretty(&startup)?);
    info!(
        "Server configuration for {}:{} is valid (upgrade policy {})",
        config.host(),
        config.port(),
        config.upgrade_policy()
    );
    Ok(())
}
