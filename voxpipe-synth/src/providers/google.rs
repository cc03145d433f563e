//! Google Translate TTS provider
//!
//! Speaks through the undocumented `batchexecute` RPC that the
//! translate.google.com listen button uses. One RPC call returns at
//! most a short clip, so longer text is split into parts of up to
//! [`MAX_PART_CHARS`] characters and the resulting MP3 fragments are
//! concatenated. MP3 frames are self-contained, so plain concatenation
//! plays back correctly.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::config::SpeechConfig;
use crate::error::SpeechError;

use super::{SpeechProvider, SynthesisOptions};

/// RPC route on the translate host
const TRANSLATE_RPC_PATH: &str = "_/TranslateWebserverUi/data/batchexecute";

/// RPC id of the text-to-speech call
const TRANSLATE_RPC_ID: &str = "jQ1olc";

/// Longest text the RPC reliably synthesizes in one call
pub const MAX_PART_CHARS: usize = 100;

/// Upper bound on request text size
const MAX_TEXT_BYTES: usize = 100_000;

/// The endpoint rejects non-browser user agents
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Speech provider backed by Google Translate
pub struct GoogleTranslateTts {
    client: Client,
    endpoint: String,
    referer: String,
}

impl GoogleTranslateTts {
    /// Create a provider from configuration
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Config)?;

        let endpoint = match &config.endpoint {
            Some(override_url) => {
                let url = Url::parse(override_url)
                    .map_err(|e| SpeechError::Config(format!("Invalid endpoint URL: {}", e)))?;
                match url.scheme() {
                    "http" | "https" => {}
                    scheme => {
                        return Err(SpeechError::Config(format!(
                            "Unsupported URL scheme: {}. Only http:// and https:// are allowed.",
                            scheme
                        )));
                    }
                }
                override_url.trim_end_matches('/').to_string()
            }
            None => format!(
                "https://translate.google.{}/{}",
                config.tld, TRANSLATE_RPC_PATH
            ),
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SpeechError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        let referer = format!("http://translate.google.{}/", config.tld);

        Ok(Self {
            client,
            endpoint,
            referer,
        })
    }

    /// URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_part(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<Bytes, SpeechError> {
        let body = package_rpc(text, &options.language, options.slow);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Referer", self.referer.as_str())
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .body(body)
            .send()
            .await
            .map_err(|e| SpeechError::Provider(format!("TTS request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            // Limit error text size, the endpoint can return whole HTML pages
            let error_text = response
                .text()
                .await
                .map(|s| {
                    if s.len() > 1000 {
                        let truncated: String = s.chars().take(1000).collect();
                        format!("{}...", truncated)
                    } else {
                        s
                    }
                })
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SpeechError::Provider(format!(
                "TTS endpoint error ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::Provider(format!("Failed to read TTS response: {}", e)))?;

        let encoded = extract_audio(&body)
            .ok_or_else(|| SpeechError::Provider("No audio data in response".to_string()))?;

        let decoded = general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| SpeechError::Provider(format!("Failed to decode base64 audio: {}", e)))?;

        Ok(Bytes::from(decoded))
    }
}

#[async_trait]
impl SpeechProvider for GoogleTranslateTts {
    async fn synthesize(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<Bytes, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::Provider("No text to synthesize".to_string()));
        }

        if text.len() > MAX_TEXT_BYTES {
            return Err(SpeechError::Provider("Text too long (max 100KB)".to_string()));
        }

        if text.contains('\0') {
            return Err(SpeechError::Provider(
                "Text contains null bytes".to_string(),
            ));
        }

        let parts = split_text(text, MAX_PART_CHARS);
        if parts.is_empty() {
            return Err(SpeechError::Provider("No text to synthesize".to_string()));
        }

        debug!(
            "Synthesizing {} part(s) (language: {}, slow: {})",
            parts.len(),
            options.language,
            options.slow
        );

        let mut audio = Vec::new();
        for (index, part) in parts.iter().enumerate() {
            let bytes = self.fetch_part(part, options).await?;
            debug!("Part {}/{}: {} bytes", index + 1, parts.len(), bytes.len());
            audio.extend_from_slice(&bytes);
        }

        Ok(Bytes::from(audio))
    }

    fn name(&self) -> &str {
        "Google Translate TTS"
    }
}

/// Split text into parts of at most `max_chars` characters
///
/// Prefers sentence boundaries, then whitespace, and only hard-cuts
/// when a single word exceeds the limit. Parts are trimmed and empty
/// parts dropped.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    const BREAKS: [char; 5] = ['.', '!', '?', ';', '\n'];

    // First pass: cut after sentence punctuation followed by whitespace
    // or end of input. Punctuation stays with its sentence.
    let mut sentences: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if BREAKS.contains(&c) {
            let at_boundary = match chars.peek() {
                None => true,
                Some((_, next)) => next.is_whitespace(),
            };
            if at_boundary {
                let end = i + c.len_utf8();
                sentences.push(&text[start..end]);
                start = end;
            }
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    // Second pass: wrap sentences still over the limit at whitespace
    let mut parts = Vec::new();
    for sentence in sentences {
        let mut rest = sentence.trim();
        while rest.chars().count() > max_chars {
            let boundary = rest
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let cut = rest[..boundary]
                .rfind(char::is_whitespace)
                .filter(|&i| i > 0)
                .unwrap_or(boundary);
            parts.push(rest[..cut].trim().to_string());
            rest = rest[cut..].trim_start();
        }
        if !rest.is_empty() {
            parts.push(rest.to_string());
        }
    }

    parts.retain(|p| !p.is_empty());
    parts
}

/// Build the form body for one TTS call
///
/// The RPC wraps its real parameters in a JSON string inside an outer
/// JSON envelope. Slow mode is encoded as `true`, normal mode as
/// `null`.
pub fn package_rpc(text: &str, language: &str, slow: bool) -> String {
    let speed = if slow { Value::Bool(true) } else { Value::Null };
    let parameter = json!([text, language, speed, "null"]);
    let envelope = json!([[[TRANSLATE_RPC_ID, parameter.to_string(), Value::Null, "generic"]]]);

    format!("f.req={}&", urlencoding::encode(&envelope.to_string()))
}

/// Pull the base64 audio payload out of a batchexecute response
///
/// The response is a protocol preamble followed by JSON-ish lines. The
/// line carrying our RPC id holds the payload between escaped quote
/// delimiters.
pub fn extract_audio(body: &str) -> Option<&str> {
    for line in body.lines() {
        if let Some(at) = line.find(TRANSLATE_RPC_ID) {
            let after = &line[at + TRANSLATE_RPC_ID.len()..];
            if let Some(open) = after.find("[\\\"") {
                let clip = &after[open + 3..];
                if let Some(close) = clip.find("\\\"]") {
                    return Some(&clip[..close]);
                }
            }
        }
    }
    None
}
