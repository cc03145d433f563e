//! Configuration for the synthesis client

use serde::{Deserialize, Serialize};

/// Synthesis client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Language tag sent with every request (e.g., "en", "pt-BR")
    pub language: String,

    /// Top-level domain of the translate host ("com" -> translate.google.com)
    pub tld: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Full endpoint override, for mirrors and test servers
    pub endpoint: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            tld: "com".to_string(),
            timeout_secs: 30,
            endpoint: None,
        }
    }
}

impl SpeechConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.language.is_empty() {
            return Err("Language tag cannot be empty".to_string());
        }

        if self.language.len() > 32 {
            return Err("Language tag too long (max 32 chars)".to_string());
        }

        // Basic format check: should be like "en" or "pt-BR"
        if !self.language.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err("Language tag contains invalid characters (only alphanumeric and '-' allowed)".to_string());
        }

        if self.tld.len() < 2 || self.tld.len() > 12 {
            return Err("Host TLD must be 2-12 characters".to_string());
        }

        if !self.tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err("Host TLD must be alphabetic".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.timeout_secs > 300 {
            return Err("Timeout too large (max 300 seconds)".to_string());
        }

        if let Some(ref endpoint) = self.endpoint {
            if endpoint.is_empty() {
                return Err("Endpoint override cannot be empty".to_string());
            }

            if endpoint.len() > 2048 {
                return Err("Endpoint URL too long (max 2048 chars)".to_string());
            }

            if endpoint.chars().any(|c| c == '\0' || c.is_control()) {
                return Err("Endpoint contains invalid characters".to_string());
            }

            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err("Endpoint must start with http:// or https://".to_string());
            }
        }

        Ok(())
    }
}
