//! Request handling: one JSON request in, one audio payload out

use std::io::{Read, Write};
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info};

use crate::error::SpeechError;
use crate::providers::{SpeechProvider, SynthesisOptions};
use crate::request::SpeechRequest;

/// Orchestrates parsing and synthesis for a single request
pub struct SpeechRequestHandler {
    provider: Arc<dyn SpeechProvider>,
    language: String,
}

impl SpeechRequestHandler {
    /// Create a handler that speaks through the given provider
    pub fn new(provider: Arc<dyn SpeechProvider>, language: impl Into<String>) -> Self {
        Self {
            provider,
            language: language.into(),
        }
    }

    /// Parse one request and synthesize it
    ///
    /// The provider is invoked even for empty text. Whether that is an
    /// error is the provider's call, not the handler's.
    pub async fn handle(&self, input: &[u8]) -> Result<Bytes, SpeechError> {
        let request = SpeechRequest::from_slice(input)?;

        let options = SynthesisOptions::new(self.language.clone(), request.slow_mode());
        debug!(
            "Handling request: {} chars, speed {}, slow {}",
            request.text.chars().count(),
            request.speed,
            options.slow
        );

        let audio = self.provider.synthesize(&request.text, &options).await?;
        info!("Synthesized {} bytes via {}", audio.len(), self.provider.name());

        Ok(audio)
    }

    /// Read a request off `reader`, write the audio to `writer`
    ///
    /// Reads to end of stream first, the request is a single JSON
    /// document. Returns the number of audio bytes written. The writer
    /// is flushed before returning.
    pub async fn run<R: Read, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<usize, SpeechError> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;

        let audio = self.handle(&input).await?;

        writer.write_all(&audio)?;
        writer.flush()?;

        Ok(audio.len())
    }
}
