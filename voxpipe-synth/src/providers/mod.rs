//! Speech synthesis providers

pub mod google;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::SpeechError;

/// Options passed to a provider for one synthesis call
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOptions {
    /// Language tag (e.g., "en", "pt-BR")
    pub language: String,

    /// Synthesize at reduced speaking rate
    pub slow: bool,
}

impl SynthesisOptions {
    pub fn new(language: impl Into<String>, slow: bool) -> Self {
        Self {
            language: language.into(),
            slow,
        }
    }
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            slow: false,
        }
    }
}

/// Trait for speech synthesis backends
///
/// Implementations turn text into encoded audio. The handler only
/// depends on this trait, so tests can swap in scripted providers.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize text into audio bytes (MP3)
    async fn synthesize(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<Bytes, SpeechError>;

    /// Human-readable provider name, used in logs
    fn name(&self) -> &str;
}
