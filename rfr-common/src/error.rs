use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RfrError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Help or version output produced by the argument parser. Not a failure.
    #[error("{0}")]
    HelpRequested(String),

    #[error("Lookup failed for '{0}': {1}")]
    LookupFailure(String, String),

    #[error("Parsing Error in {0}: {1}")]
    ParseFailure(&'static str, String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),
}

impl RfrError {
    /// True for errors raised while resolving command-line input.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, RfrError::InvalidArgument(_))
    }
}

impl From<std::io::Error> for RfrError {
    fn from(err: std::io::Error) -> Self {
        RfrError::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for RfrError {
    fn from(err: serde_json::Error) -> Self {
        RfrError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, RfrError>;
