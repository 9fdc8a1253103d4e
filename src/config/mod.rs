use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Default Gemini API base; tests point this at a local stub.
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for analysis output.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    #[serde(default = "GeminiConfig::from_env")]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key for the generateContent endpoint. Absence is not a startup
    /// error: the analyze handler reports it as a misconfiguration per
    /// request, so the service can come up before the key is mounted.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        GeminiConfig {
            api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_base: env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let common = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(AppConfig {
            common,
            gemini: GeminiConfig::from_env(),
        })
    }
}
