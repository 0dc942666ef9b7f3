//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then shared
//! read-only with every handler through [`crate::state::AppState`].
//!
//! Secrets are usually kept in an env-style file (default `.env`, or the path
//! given by `--env-file` / `ENV_FILE`) which `main.rs` loads via `dotenvy`
//! before calling [`load_from_env`]. Variables already present in the process
//! environment take precedence over the file.
//!
//! ## Required Variables
//!
//! - `API_TOKEN` - secret callers must send in the `token` body field
//! - `JOKE_API_KEY` - key for the joke API (`Authorization` header)
//! - `RAPIDAPI_KEY` - when `WEATHER_PROVIDER=meteosource`
//! - `VISUAL_CROSSING_API_KEY` - when `WEATHER_PROVIDER=visual_crossing`
//!
//! ## Optional Variables
//!
//! - `WEATHER_PROVIDER` - `meteosource` or `visual_crossing` (default: `meteosource`)
//! - `JOKE_API_BASE_URL` - (default: `https://v6.rsa-api.xyz`)
//! - `RAPIDAPI_HOST` - (default: `ai-weather-by-meteosource.p.rapidapi.com`)
//! - `METEOSOURCE_BASE_URL` - (default: `https://ai-weather-by-meteosource.p.rapidapi.com`)
//! - `VISUAL_CROSSING_BASE_URL` - Visual Crossing timeline endpoint
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use url::Url;

pub const DEFAULT_JOKE_API_BASE_URL: &str = "https://v6.rsa-api.xyz";
pub const DEFAULT_RAPIDAPI_HOST: &str = "ai-weather-by-meteosource.p.rapidapi.com";
pub const DEFAULT_METEOSOURCE_BASE_URL: &str = "https://ai-weather-by-meteosource.p.rapidapi.com";
pub const DEFAULT_VISUAL_CROSSING_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// Which third-party weather API a deployment is wired to.
///
/// The choice also fixes the weather route and the response envelope, see
/// [`crate::domain::EnvelopeStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherProviderKind {
    Meteosource,
    VisualCrossing,
}

impl FromStr for WeatherProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meteosource" => Ok(Self::Meteosource),
            "visual_crossing" | "visualcrossing" => Ok(Self::VisualCrossing),
            other => anyhow::bail!(
                "WEATHER_PROVIDER must be 'meteosource' or 'visual_crossing', got '{}'",
                other
            ),
        }
    }
}

impl fmt::Display for WeatherProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meteosource => f.write_str("meteosource"),
            Self::VisualCrossing => f.write_str("visual_crossing"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Secret callers must present in the request body.
    pub api_token: String,

    // ── Joke upstream ───────────────────────────────────────────────────────
    pub joke_api_base_url: String,
    pub joke_api_key: String,

    // ── Weather upstream ────────────────────────────────────────────────────
    pub weather_provider: WeatherProviderKind,
    /// RapidAPI key for Meteosource. Empty when another provider is used.
    pub rapidapi_key: String,
    pub rapidapi_host: String,
    pub meteosource_base_url: String,
    /// Visual Crossing key. Empty when another provider is used.
    pub visual_crossing_api_key: String,
    pub visual_crossing_base_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required secret is missing or `WEATHER_PROVIDER`
    /// is not recognized.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let api_token = env::var("API_TOKEN").context("API_TOKEN must be set")?;
        let joke_api_key = env::var("JOKE_API_KEY").context("JOKE_API_KEY must be set")?;
        let joke_api_base_url = env::var("JOKE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_JOKE_API_BASE_URL.to_string());

        let weather_provider = env::var("WEATHER_PROVIDER")
            .map(|v| v.parse::<WeatherProviderKind>())
            .unwrap_or(Ok(WeatherProviderKind::Meteosource))?;

        let (rapidapi_key, visual_crossing_api_key) = match weather_provider {
            WeatherProviderKind::Meteosource => (
                env::var("RAPIDAPI_KEY")
                    .context("RAPIDAPI_KEY must be set when WEATHER_PROVIDER=meteosource")?,
                env::var("VISUAL_CROSSING_API_KEY").unwrap_or_default(),
            ),
            WeatherProviderKind::VisualCrossing => (
                env::var("RAPIDAPI_KEY").unwrap_or_default(),
                env::var("VISUAL_CROSSING_API_KEY").context(
                    "VISUAL_CROSSING_API_KEY must be set when WEATHER_PROVIDER=visual_crossing",
                )?,
            ),
        };

        let rapidapi_host =
            env::var("RAPIDAPI_HOST").unwrap_or_else(|_| DEFAULT_RAPIDAPI_HOST.to_string());
        let meteosource_base_url = env::var("METEOSOURCE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_METEOSOURCE_BASE_URL.to_string());
        let visual_crossing_base_url = env::var("VISUAL_CROSSING_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_VISUAL_CROSSING_BASE_URL.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            api_token,
            joke_api_base_url,
            joke_api_key,
            weather_provider,
            rapidapi_key,
            rapidapi_host,
            meteosource_base_url,
            visual_crossing_api_key,
            visual_crossing_base_url,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a secret needed by the selected providers is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - an upstream base URL is not an absolute `http(s)` URL
    pub fn validate(&self) -> Result<()> {
        if self.api_token.is_empty() {
            anyhow::bail!("API_TOKEN must not be empty");
        }

        if self.joke_api_key.is_empty() {
            anyhow::bail!("JOKE_API_KEY must not be empty");
        }

        match self.weather_provider {
            WeatherProviderKind::Meteosource if self.rapidapi_key.is_empty() => {
                anyhow::bail!("RAPIDAPI_KEY must not be empty");
            }
            WeatherProviderKind::VisualCrossing if self.visual_crossing_api_key.is_empty() => {
                anyhow::bail!("VISUAL_CROSSING_API_KEY must not be empty");
            }
            _ => {}
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_base_url("JOKE_API_BASE_URL", &self.joke_api_base_url)?;
        match self.weather_provider {
            WeatherProviderKind::Meteosource => {
                validate_base_url("METEOSOURCE_BASE_URL", &self.meteosource_base_url)?
            }
            WeatherProviderKind::VisualCrossing => {
                validate_base_url("VISUAL_CROSSING_BASE_URL", &self.visual_crossing_base_url)?
            }
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  API token: {}", mask_secret(&self.api_token));
        tracing::info!("  Joke API: {}", self.joke_api_base_url);
        tracing::info!("  Weather provider: {}", self.weather_provider);
        match self.weather_provider {
            WeatherProviderKind::Meteosource => {
                tracing::info!("  Weather API: {}", self.meteosource_base_url)
            }
            WeatherProviderKind::VisualCrossing => {
                tracing::info!("  Weather API: {}", self.visual_crossing_base_url)
            }
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("api_token", &mask_secret(&self.api_token))
            .field("joke_api_base_url", &self.joke_api_base_url)
            .field("joke_api_key", &mask_secret(&self.joke_api_key))
            .field("weather_provider", &self.weather_provider)
            .field("rapidapi_key", &mask_secret(&self.rapidapi_key))
            .field("rapidapi_host", &self.rapidapi_host)
            .field("meteosource_base_url", &self.meteosource_base_url)
            .field(
                "visual_crossing_api_key",
                &mask_secret(&self.visual_crossing_api_key),
            )
            .field("visual_crossing_base_url", &self.visual_crossing_base_url)
            .finish()
    }
}

fn validate_base_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL", name))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!(
            "{} must start with 'http://' or 'https://', got '{}'",
            name,
            value
        );
    }

    Ok(())
}

/// Masks a secret for logging, keeping at most the first two characters.
///
/// - `"supersecret"` → `"su***"`
/// - `"ab"` → `"***"`
/// - `""` → `"<unset>"`
fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<unset>".to_string();
    }

    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(2).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::from_path()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
