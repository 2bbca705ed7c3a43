use std::process::{Command, Stdio};

use crate::config::Config;
use crate::error::AppError;
use crate::progress::Spinner;

/// Raw stdout captured from a successful scanner run.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub stdout: String,
}

pub struct Scanner {
    binary: String,
}

impl Scanner {
    pub fn new(config: &Config) -> Self {
        Self { binary: config.scanner.clone() }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run `<scanner> <image-id> -o json` and block until it exits.
    pub fn scan(&self, image_id: &str) -> Result<ScanOutput, AppError> {
        let spinner = Spinner::start(&format!("Processing image with {}: ", self.binary));
        let result = Command::new(&self.binary)
            .args([image_id, "-o", "json"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();
        spinner.finish();

        let output = result.map_err(|source| AppError::ScannerLaunch {
            binary: self.binary.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() { "no error output".to_string() } else { stderr };
            return Err(AppError::ScannerFailed { status: output.status, stderr });
        }

        Ok(ScanOutput { stdout: String::from_utf8_lossy(&output.stdout).into_owned() })
    }
}
