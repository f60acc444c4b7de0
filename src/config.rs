use anyhow::Context;
use serde::Deserialize;

use crate::window::DEFAULT_DAYS;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backfill: BackfillConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackfillConfig {
    /// Number of days to backfill, ending today (UTC).
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Reads the file named by CONFIG_FILE; defaults when the variable is unset.
    pub fn load() -> anyhow::Result<Self> {
        let Ok(path) = std::env::var("CONFIG_FILE") else {
            return Ok(Self::default());
        };
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.backfill.days > 0,
            "backfill.days must be > 0, got {}",
            self.backfill.days
        );
        anyhow::ensure!(
            !self.logging.level.trim().is_empty(),
            "logging.level must be non-empty"
        );
        Ok(())
    }
}
