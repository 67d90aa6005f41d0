use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Terminal gift idea generator.
#[derive(Debug, Parser)]
#[command(name = "giftster", version)]
pub struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the gift service base URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u32>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Read the config file, apply flag overrides, then validate.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.service.base_url = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.service.timeout_seconds = timeout;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
