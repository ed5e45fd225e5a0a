// rfr/src/lib.rs
pub mod cli;
pub mod exit_codes;
pub mod summary;

use colored::Colorize;
use rfr_common::error::RfrError;

/// Prints a startup error the way both binaries report it and returns the
/// exit status to use.
pub fn report_startup_error(err: &RfrError, usage: &str) -> i32 {
    match err {
        RfrError::HelpRequested(text) => println!("{text}"),
        RfrError::InvalidArgument(_) => {
            eprintln!("{}: {}", "Error".red().bold(), err);
            if !err.to_string().contains("Usage:") {
                eprintln!("{usage}");
            }
        }
        _ => eprintln!("{}: {:#}", "Error".red().bold(), err),
    }
    exit_codes::for_error(err)
}
