// rfr-core/src/check/installed.rs
use std::process::Command;

use rfr_common::error::{Result, RfrError};
use tracing::debug;

/// Asks pip which version of `name` is installed for `python`.
///
/// `Ok(None)` means pip ran but does not know the package.
pub fn query_installed_version(python: &str, name: &str) -> Result<Option<String>> {
    debug!("Running '{} -m pip show {}'", python, name);
    let output = Command::new(python)
        .args(["-m", "pip", "show", name])
        .output()
        .map_err(|e| {
            RfrError::LookupFailure(name.to_string(), format!("failed to run {python}: {e}"))
        })?;

    if !output.status.success() {
        debug!(
            "pip show for '{}' exited with {}: {}",
            name,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Ok(None);
    }

    Ok(version_from_pip_show(&String::from_utf8_lossy(&output.stdout)))
}

/// Picks the `Version:` field out of `pip show` output.
pub fn version_from_pip_show(output: &str) -> Option<String> {
    output
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("version"))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
