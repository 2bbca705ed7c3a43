use std::fs;
use std::path::PathBuf;

use dirs_next as dirs;
use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_SCANNER: &str = "syft";
pub const DEFAULT_OUTPUT_DIR: &str = "Output";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scanner binary, either a name resolved through `PATH` or an absolute path.
    pub scanner: String,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self { scanner: DEFAULT_SCANNER.to_string(), output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR) }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let path = config_file_path()?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(contents)?;
        if config.scanner.trim().is_empty() {
            return Err(AppError::config("'scanner' must not be empty"));
        }
        Ok(config)
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("syft-report").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.scanner, "syft");
        assert_eq!(config.output_dir, PathBuf::from("Output"));
    }

    #[test]
    fn keys_override_defaults_independently() {
        let config = Config::from_toml("scanner = \"/opt/bin/syft\"\n").unwrap();
        assert_eq!(config.scanner, "/opt/bin/syft");
        assert_eq!(config.output_dir, PathBuf::from("Output"));

        let config = Config::from_toml("output_dir = \"reports\"\n").unwrap();
        assert_eq!(config.scanner, "syft");
        assert_eq!(config.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn blank_scanner_is_rejected() {
        let err = Config::from_toml("scanner = \"  \"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::from_toml("scanner = ").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }
}
