mod defaults;
mod providers;

#[cfg(test)]
mod tests;

pub use providers::*;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::PolyglotError;
use defaults::*;

/// Top-level Polyglot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for daily-rotated log files. Empty = stdout only.
    #[serde(default)]
    pub log_dir: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            log_dir: String::new(),
        }
    }
}

/// Discord bot config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bot_token: String::new(),
        }
    }
}

/// Dedup window, invoker policy and filter threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// How long a (message, trigger) pair stays reserved.
    #[serde(default = "default_cache_duration")]
    pub cache_duration_secs: u64,
    /// Hard per-attempt timeout for the provider call.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Retries after the first attempt (2 = up to 3 attempts).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Minimum length, in characters, of translatable text.
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
    /// Fixed delay between attempts.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// How often the background task purges expired cache entries.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            cache_duration_secs: default_cache_duration(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            min_text_length: default_min_text_length(),
            retry_backoff_ms: default_retry_backoff_ms(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

impl TranslationConfig {
    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// HTTP status API configuration -- uptime monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

impl Config {
    /// Apply environment overrides on top of file values.
    ///
    /// `DISCORD_BOT_TOKEN`, `GOOGLE_TRANSLATE_API_KEY` and `PORT` are honored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_BOT_TOKEN").filter(|v| !v.trim().is_empty()) {
            self.discord.bot_token = token.trim().to_string();
        }
        if let Some(key) = lookup("GOOGLE_TRANSLATE_API_KEY").filter(|v| !v.trim().is_empty()) {
            self.provider.google_cloud.api_key = key.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(p) => self.api.port = p,
                Err(e) => warn!("ignoring invalid PORT '{port}': {e}"),
            }
        }
    }

    /// Reject settings that would make the bot misbehave silently.
    pub fn validate(&self) -> Result<(), PolyglotError> {
        let t = &self.translation;
        if t.timeout_ms == 0 {
            return Err(PolyglotError::Config(
                "translation.timeout_ms must be greater than 0".into(),
            ));
        }
        if t.cache_duration_secs == 0 {
            return Err(PolyglotError::Config(
                "translation.cache_duration_secs must be greater than 0".into(),
            ));
        }
        if t.min_text_length == 0 {
            return Err(PolyglotError::Config(
                "translation.min_text_length must be greater than 0".into(),
            ));
        }
        if t.sweep_interval_secs == 0 {
            return Err(PolyglotError::Config(
                "translation.sweep_interval_secs must be greater than 0".into(),
            ));
        }
        match self.provider.default.as_str() {
            "google-web" | "google-cloud" => Ok(()),
            other => Err(PolyglotError::Config(format!(
                "unsupported provider: {other}"
            ))),
        }
    }
}

/// Parse configuration from TOML text. No environment overrides.
pub fn parse(content: &str) -> Result<Config, PolyglotError> {
    toml::from_str(content)
        .map_err(|e| PolyglotError::Config(format!("failed to parse config: {e}")))
}

/// Load configuration from a TOML file, then apply environment overrides.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, PolyglotError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PolyglotError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        parse(&content)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Config::default()
    };

    config.apply_env_overrides(|name| std::env::var(name).ok());
    Ok(config)
}
