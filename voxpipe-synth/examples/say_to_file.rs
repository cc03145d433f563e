//! Synthesize a sentence into an MP3 file
//!
//! Usage: cargo run --example say_to_file -- some words to speak

use std::sync::Arc;

use voxpipe_synth::{GoogleTranslateTts, SpeechConfig, SpeechRequestHandler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        "Hello from voxpipe.".to_string()
    } else {
        args.join(" ")
    };

    let config = SpeechConfig::default();
    let provider = Arc::new(GoogleTranslateTts::new(&config)?);
    let handler = SpeechRequestHandler::new(provider, config.language.clone());

    let request = serde_json::json!({ "text": text }).to_string();

    match handler.handle(request.as_bytes()).await {
        Ok(audio) => {
            std::fs::write("out.mp3", &audio)?;
            println!("Wrote {} bytes to out.mp3", audio.len());
        }
        Err(e) => {
            eprintln!("Synthesis failed: {}", e);
        }
    }

    Ok(())
}
