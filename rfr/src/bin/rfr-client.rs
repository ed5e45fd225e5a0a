// rfr/src/bin/rfr-client.rs
use std::process;

use colored::Colorize;
use rfr::cli::ClientConfig;
use rfr::summary::ClientPlan;
use rfr::{exit_codes, report_startup_error};
use rfr_common::error::Result;
use rfr_common::logging::LogContext;
use tracing::{debug, error, info};

fn main() {
    let bootstrap = LogContext::bootstrap();
    let config = match ClientConfig::from_args(std::env::args_os(), &bootstrap) {
        Ok(config) => config,
        Err(e) => process::exit(report_startup_error(&e, &ClientConfig::usage())),
    };

    let log = LogContext::for_debug(config.debug());
    if let Err(e) = log.scope(|| run(&config)) {
        log.scope(|| error!("Client startup failed: {:#}", e));
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(exit_codes::for_error(&e));
    }
}

fn run(config: &ClientConfig) -> Result<()> {
    let plan = ClientPlan::from_config(config)?;
    match &plan {
        ClientPlan::TestConnection { host, port, .. } => {
            info!("Connection test requested for {}:{}", host, port);
        }
        ClientPlan::Run(request) => {
            info!(
                "Run prepared for {}:{} with {} input dir(s); server package upgrade {}",
                request.host,
                request.port,
                request.input_dirs.len(),
                if request.client_enforces_upgrade {
                    "enforced by client"
                } else {
                    "left to server policy"
                }
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&plan)?);
    debug!("Client startup completed.");
    Ok(())
}
