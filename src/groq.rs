//! Groq client configuration with sensible defaults.
//!
//! Groq exposes an OpenAI-compatible chat completions API, so the standard
//! async-openai client is pointed at the Groq endpoint.

use crate::error::{Result, TldwError};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Groq's OpenAI-compatible API base.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Environment variable holding the Groq API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default timeout for Groq API requests (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Create a Groq client with configured timeout.
///
/// Reads the API key from `GROQ_API_KEY`; fails if it is missing or empty.
pub fn create_client() -> Result<Client<OpenAIConfig>> {
    create_client_with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

/// Create a Groq client with a custom timeout.
pub fn create_client_with_timeout(timeout: Duration) -> Result<Client<OpenAIConfig>> {
    let api_key = api_key()?;

    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| TldwError::Groq(format!("Failed to create HTTP client: {}", e)))?;

    let config = OpenAIConfig::new()
        .with_api_base(GROQ_API_BASE)
        .with_api_key(api_key);

    Ok(Client::with_config(config).with_http_client(http_client))
}

/// Read the Groq API key from the environment.
pub fn api_key() -> Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(TldwError::Config(format!(
            "{} not set. Set it with: export {}='gsk_...'",
            API_KEY_ENV, API_KEY_ENV
        ))),
    }
}

/// Check if the Groq API key is configured.
pub fn is_api_key_configured() -> bool {
    api_key().is_ok()
}
