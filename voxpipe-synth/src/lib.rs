//! voxpipe-synth: speech synthesis over standard streams
//!
//! Turns one JSON speech request into one MP3 payload:
//! - Request parsing with lenient speed coercion and slow-mode derivation
//! - Pluggable synthesis providers behind the `SpeechProvider` trait
//! - A Google Translate TTS client as the default provider
//! - Handler orchestration suitable for stdin/stdout or in-memory streams

pub mod error;
pub mod config;
pub mod request;
pub mod providers;
pub mod handler;

pub use error::SpeechError;
pub use config::SpeechConfig;
pub use request::{SpeechRequest, DEFAULT_SPEED, SLOW_SPEED_THRESHOLD};
pub use providers::{SpeechProvider, SynthesisOptions};
pub use providers::google::GoogleTranslateTts;
pub use handler::SpeechRequestHandler;
