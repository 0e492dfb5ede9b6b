use std::{env, error::Error, path::PathBuf};

use dotenv::dotenv;

const LOG_CONFIG_VAR: &str = "HEALTHPI_LOG_CONFIG";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_config: PathBuf,
}

impl Config {
    /// Reads settings from the environment, including a `.env` file if present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_config: lookup(LOG_CONFIG_VAR)
                .filter(|path| !path.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned())
                .into(),
        }
    }

    /// Stdout belongs to the user, so without a logging configuration
    /// nothing is logged.
    pub fn init_logging(&self) -> Result<bool, Box<dyn Error>> {
        if !self.log_config.is_file() {
            return Ok(false);
        }
        log4rs::init_file(&self.log_config, Default::default())?;
        Ok(true)
    }
}
