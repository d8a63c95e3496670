// src/settings.rs
use bevy::prelude::*;
use thiserror::Error;

/// Environment variable holding the Gemini API key. A local `.env` file is
/// honored via dotenvy.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable GEMINI_API_KEY is not set")]
    MissingApiKey,
}

/// The API credential for this process, loaded once at startup.
#[derive(Resource, Debug, Clone)]
pub struct SessionApiKey(pub String);

/// Loads the API key from the environment. Missing or blank keys are a
/// fatal configuration error; the caller aborts before the app is built.
pub fn load_api_key() -> Result<String, ConfigError> {
    let _ = dotenvy::dotenv();
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}
