// ⚙️ Configuration - environment for the CLI and server
//
//   RENT_BIND_ADDR  server listen address (default 0.0.0.0:3000)
//   RENT_AS_OF      fixed evaluation date, YYYY-MM-DD (default: today)
//   RUST_LOG        log filter (default: info)

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    pub as_of: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            as_of: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(addr) = lookup("RENT_BIND_ADDR").filter(|a| !a.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }

        if let Some(raw) = lookup("RENT_AS_OF").filter(|d| !d.trim().is_empty()) {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .with_context(|| format!("RENT_AS_OF is not a YYYY-MM-DD date: {:?}", raw))?;
            config.as_of = Some(date);
        }

        Ok(config)
    }

    /// Evaluation date: the configured override, else the local wall clock
    pub fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Install the global tracing subscriber, honouring RUST_LOG
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
