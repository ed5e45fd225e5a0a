// rfr/src/cli/client.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};
use rfr_common::error::Result;
use rfr_common::logging::LogContext;
use rfr_common::model::RunLogLevel;
use tracing::debug;

use super::{
    existing_dir, from_clap_error, parse_run_log_level, DEFAULT_HOST, DEFAULT_LOG_LEVEL,
    DEFAULT_PASS, DEFAULT_PORT, DEFAULT_USER,
};

pub const DEFAULT_EXTENSIONS: [&str; 4] = ["robot", "txt", "text", "resource"];
pub const DEFAULT_INPUT_DIR: &str = ".";

#[derive(Parser, Debug)]
#[command(name = "rfr-client", version, about = "Submit test suites to a remote rfr server")]
struct ClientArgs {
    /// Only check that the server is reachable and accepts the credentials
    #[arg(long)]
    test_connection: bool,

    /// Host name or IP of the server
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port of the server
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    #[arg(long, default_value = DEFAULT_USER)]
    user: String,

    #[arg(long = "pass", default_value = DEFAULT_PASS)]
    pass: String,

    /// Log threshold for the remote run: TRACE, DEBUG, INFO, WARN or NONE
    #[arg(long, value_parser = parse_run_log_level, default_value = DEFAULT_LOG_LEVEL)]
    log_level: RunLogLevel,

    /// Select suites by name (repeatable)
    #[arg(long, num_args = 1.., action = ArgAction::Append)]
    suite: Option<Vec<String>>,

    /// Select tests by name (repeatable)
    #[arg(long, num_args = 1.., action = ArgAction::Append)]
    test: Option<Vec<String>>,

    /// Select tests by tag (repeatable)
    #[arg(long, num_args = 1.., action = ArgAction::Append)]
    include: Option<Vec<String>>,

    /// Skip tests by tag (repeatable)
    #[arg(long, num_args = 1.., action = ArgAction::Append)]
    exclude: Option<Vec<String>>,

    /// Parse only files with these extensions, without the leading dot
    /// [default: robot txt text resource]
    #[arg(long, num_args = 1.., action = ArgAction::Append)]
    extension: Option<Vec<String>>,

    /// Directory for the output artifacts; created if missing
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Directory containing the test suites (repeatable) [default: .]
    #[arg(long, num_args = 1.., action = ArgAction::Append, value_parser = existing_dir)]
    input_dir: Option<Vec<PathBuf>>,

    #[arg(long, default_value = "remote_output.xml")]
    output_file: PathBuf,

    #[arg(long, default_value = "remote_log.html")]
    log_file: PathBuf,

    #[arg(long, default_value = "remote_report.html")]
    report_file: PathBuf,

    /// Ask the server to upgrade the run's packages even if they are up to
    /// date. A server running with NEVER still refuses.
    #[arg(long)]
    client_enforces_server_package_upgrade: bool,

    /// Debug logging; keep the remote workspace after the run
    #[arg(long)]
    debug: bool,
}

/// Resolved client settings. Built once from the command line, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    port: u16,
    user: String,
    password: String,
    log_level: RunLogLevel,
    suites: Vec<String>,
    tests: Vec<String>,
    includes: Vec<String>,
    excludes: Vec<String>,
    extensions: Vec<String>,
    output_dir: PathBuf,
    input_dirs: Vec<PathBuf>,
    output_file: PathBuf,
    log_file: PathBuf,
    report_file: PathBuf,
    client_enforces_upgrade: bool,
    debug: bool,
    test_connection: bool,
}

impl ClientConfig {
    /// Parses a full argument list (program name first). Nothing is returned
    /// unless every option validates.
    pub fn from_args<I, T>(args: I, log: &LogContext) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        log.scope(|| {
            let parsed = ClientArgs::try_parse_from(args).map_err(from_clap_error)?;
            let config = Self::from(parsed);
            debug!(
                "Client configuration resolved: server {}:{}, {} input dir(s), extensions {:?}",
                config.host,
                config.port,
                config.input_dirs.len(),
                config.extensions
            );
            Ok(config)
        })
    }

    pub fn usage() -> String {
        ClientArgs::command().render_usage().to_string()
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

    pub fn log_level(&self) -> RunLogLevel {
        self.log_level
    }

    pub fn suites(&self) -> &[String] {
        &self.suites
    }

    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn input_dirs(&self) -> &[PathBuf] {
        &self.input_dirs
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn report_file(&self) -> &Path {
        &self.report_file
    }

    pub fn client_enforces_upgrade(&self) -> bool {
        self.client_enforces_upgrade
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn test_connection(&self) -> bool {
        self.test_connection
    }
}

impl From<ClientArgs> for ClientConfig {
    fn from(args: ClientArgs) -> Self {
        // Defaults only replace options that never appeared on the command line.
        let extensions = args
            .extension
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect());
        let input_dirs = args
            .input_dir
            .unwrap_or_else(|| vec![PathBuf::from(DEFAULT_INPUT_DIR)]);

        Self {
            host: args.host,
            port: args.port,
            user: args.user,
            password: args.pass,
            log_level: args.log_level,
            suites: args.suite.unwrap_or_default(),
            tests: args.test.unwrap_or_default(),
            includes: args.include.unwrap_or_default(),
            excludes: args.exclude.unwrap_or_default(),
            extensions,
            output_dir: args.output_dir,
            input_dirs,
            output_file: args.output_file,
            log_file: args.log_file,
            report_file: args.report_file,
            client_enforces_upgrade: args.client_enforces_server_package_upgrade,
            debug: args.debug,
            test_connection: args.test_connection,
        }
    }
}

#[cfg(test)]
mod tests {
    use rfr_common::error::RfrError;

    use super::*;

    fn resolve(args: &[&str]) -> Result<ClientConfig> {
        let argv = std::iter::once("rfr-client").chain(args.iter().copied());
        ClientConfig::from_args(argv, &LogContext::silent())
    }

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.host(), "localhost");
        assert_eq!(config.port(), 8111);
        assert_eq!(config.user(), "admin");
        assert_eq!(config.password(), "admin");
        assert_eq!(config.log_level(), RunLogLevel::Warn);
        assert!(config.suites().is_empty());
        assert!(config.tests().is_empty());
        assert!(config.includes().is_empty());
        assert!(config.excludes().is_empty());
        assert_eq!(config.extensions(), ["robot", "txt", "text", "resource"]);
        assert_eq!(config.output_dir(), Path::new("."));
        assert_eq!(config.input_dirs(), [PathBuf::from(".")]);
        assert_eq!(config.output_file(), Path::new("remote_output.xml"));
        assert_eq!(config.log_file(), Path::new("remote_log.html"));
        assert_eq!(config.report_file(), Path::new("remote_report.html"));
        assert!(!config.client_enforces_upgrade());
        assert!(!config.debug());
        assert!(!config.test_connection());
    }

    #[test]
    fn repeated_extensions_accumulate_in_order() {
        let config = resolve(&["--extension", "py", "--extension", "robot"]).unwrap();
        assert_eq!(config.extensions(), ["py", "robot"]);
    }

    #[test]
    fn empty_extension_value_suppresses_default() {
        let config = resolve(&["--extension", ""]).unwrap();
        assert_eq!(config.extensions(), [""]);
    }

    #[test]
    fn filters_accept_several_values_per_flag_and_keep_duplicates() {
        let config = resolve(&[
            "--suite", "Login", "Checkout", "--include", "smoke", "--suite", "Login",
            "--exclude", "slow", "--test", "Valid*",
        ])
        .unwrap();
        assert_eq!(config.suites(), ["Login", "Checkout", "Login"]);
        assert_eq!(config.includes(), ["smoke"]);
        assert_eq!(config.excludes(), ["slow"]);
        assert_eq!(config.tests(), ["Valid*"]);
    }

    #[test]
    fn input_dirs_accumulate_when_all_exist() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let a = first.path().to_str().unwrap();
        let b = second.path().to_str().unwrap();

        let config = resolve(&["--input-dir", a, "--input-dir", b, a]).unwrap();
        assert_eq!(
            config.input_dirs(),
            [first.path().to_path_buf(), second.path().to_path_buf(), first.path().to_path_buf()]
        );
    }

    #[test]
    fn missing_input_dir_aborts_regardless_of_position() {
        let dir = tempfile::tempdir().unwrap();
        let valid = dir.path().to_str().unwrap();
        let cases: [&[&str]; 3] = [
            &["--input-dir", "/does/not/exist", "--debug", "--input-dir", valid],
            &["--debug", "--input-dir", valid, "--port", "9000", "--input-dir", "/does/not/exist"],
            &["--input-dir", valid, "/does/not/exist", "--extension", "robot"],
        ];
        for args in cases {
            let err = resolve(args).unwrap_err();
            assert!(
                matches!(err, RfrError::InvalidArgument(ref m) if m.contains("/does/not/exist")),
                "{args:?}: {err}"
            );
        }
    }

    #[test]
    fn malformed_port_is_invalid_argument() {
        for port in ["80x", "70000", "-1", ""] {
            let err = resolve(&["--port", port]).unwrap_err();
            assert!(matches!(err, RfrError::InvalidArgument(_)), "{port}");
        }
    }

    #[test]
    fn log_level_is_case_insensitive_and_validated() {
        assert_eq!(resolve(&["--log-level", "trace"]).unwrap().log_level(), RunLogLevel::Trace);
        assert_eq!(resolve(&["--log-level", "NONE"]).unwrap().log_level(), RunLogLevel::None);
        assert!(matches!(
            resolve(&["--log-level", "loud"]).unwrap_err(),
            RfrError::InvalidArgument(_)
        ));
    }

    #[test]
    fn switches_take_no_value() {
        let config = resolve(&[
            "--client-enforces-server-package-upgrade",
            "--debug",
            "--test-connection",
        ])
        .unwrap();
        assert!(config.client_enforces_upgrade());
        assert!(config.debug());
        assert!(config.test_connection());

        assert!(resolve(&["--debug=yes"]).is_err());
    }

    #[test]
    fn unknown_option_is_invalid_argument() {
        assert!(matches!(
            resolve(&["--colour"]).unwrap_err(),
            RfrError::InvalidArgument(_)
        ));
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = resolve(&["--help"]).unwrap_err();
        assert!(matches!(err, RfrError::HelpRequested(ref h) if h.contains("--input-dir")));
    }

    #[test]
    fn usage_mentions_binary_name() {
        assert!(ClientConfig::usage().contains("rfr-client"));
    }
}
