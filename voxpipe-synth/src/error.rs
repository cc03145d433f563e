//! Error types for voxpipe-synth

use thiserror::Error;

/// Speech synthesis errors
///
/// Every variant renders as a single line so the binary can print it
/// verbatim after the `Error: ` prefix.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
