use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Inline key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(alias = "apikeyenv", default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(alias = "baseurl", default = "default_base_url")]
    pub base_url: String,
    /// Unset means the upstream call may take as long as it likes.
    #[serde(alias = "timeoutsecs", default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(alias = "radiuskm", default = "default_radius_km")]
    pub radius_km: f64,
    #[serde(alias = "placecount", default = "default_place_count")]
    pub place_count: u32,
    /// Ask for exactly `place_count` places instead of "up to".
    #[serde(alias = "exactcount", default = "default_exact_count")]
    pub exact_count: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            radius_km: default_radius_km(),
            place_count: default_place_count(),
            exact_count: default_exact_count(),
        }
    }
}

fn default_port() -> String {
    "3001".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_region() -> String {
    "Seoul".to_string()
}

fn default_radius_km() -> f64 {
    2.0
}

fn default_place_count() -> u32 {
    10
}

fn default_exact_count() -> bool {
    true
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config = Self::from_yaml(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;
        config.validate()?;

        Ok(config)
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub fn from_file_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recommend.place_count == 0 {
            return Err(ConfigError::InvalidValue(
                "recommend.place_count must be at least 1".to_string(),
            ));
        }
        if !(self.recommend.radius_km.is_finite() && self.recommend.radius_km > 0.0) {
            return Err(ConfigError::InvalidValue(
                "recommend.radius_km must be a positive number".to_string(),
            ));
        }
        Ok(())
    }

    /// Find the Gemini API key, either inline or via the configured
    /// environment variable. Empty values count as missing.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.gemini.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }

        lookup(&self.gemini.api_key_env)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingCredential(self.gemini.api_key_env.clone()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Missing API key: set gemini.api_key or the {0} environment variable")]
    MissingCredential(String),
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
