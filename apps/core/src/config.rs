//! Runtime configuration read from the environment (and `.env` when present).

use std::env;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const ENV_CHAIN_MENUS: &str = "KETOSCOUT_CHAIN_MENUS";
pub const ENV_DATABASE_URL: &str = "KETOSCOUT_DATABASE_URL";
pub const ENV_LOG_FORMAT: &str = "KETOSCOUT_LOG_FORMAT";

/// Bundled catalog, resolved against the crate directory.
const DEFAULT_CHAIN_MENUS: &str = "data/chain-menus.json";

fn default_chain_menus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CHAIN_MENUS)
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub chain_menus_path: PathBuf,
    /// Signal persistence is enabled only when this is set.
    pub database_url: Option<String>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load `.env` if present, then read configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_current_env()
    }

    /// Read configuration from the process environment only.
    pub fn from_current_env() -> Result<Self, AppError> {
        let chain_menus_path = env::var(ENV_CHAIN_MENUS)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_chain_menus_path());

        let database_url = env::var(ENV_DATABASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty());

        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => LogFormat::parse(&raw)?,
            Err(_) => LogFormat::Pretty,
        };

        Ok(Self {
            chain_menus_path,
            database_url,
            log_format,
        })
    }
}
