use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Application-wide error type for the syft-report CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to launch scanner '{binary}': {source}")]
    ScannerLaunch {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("Scanner exited with {status}: {stderr}")]
    ScannerFailed { status: ExitStatus, stderr: String },

    #[error("Failed to parse scanner JSON output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write spreadsheet: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}
