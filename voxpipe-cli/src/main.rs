// voxpipe Command Line Interface
// Reads one JSON speech request from stdin and writes MP3 audio to stdout

use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use voxpipe_synth::{GoogleTranslateTts, SpeechConfig, SpeechRequestHandler};

#[derive(Parser)]
#[command(name = "voxpipe")]
#[command(about = "Pipe JSON speech requests to synthesized MP3 audio", long_about = None)]
#[command(version)]
struct Cli {
    /// Language tag for synthesis (e.g. en, pt-BR)
    #[arg(long, default_value = "en")]
    language: String,

    /// Top-level domain of the translate host
    #[arg(long, default_value = "com")]
    tld: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Full endpoint override, for mirrors and test servers
    #[arg(long)]
    endpoint: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("Request failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SpeechConfig {
        language: cli.language,
        tld: cli.tld,
        timeout_secs: cli.timeout,
        endpoint: cli.endpoint,
    };

    let provider = Arc::new(GoogleTranslateTts::new(&config)?);
    let handler = SpeechRequestHandler::new(provider, config.language.clone());

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    handler.run(&mut stdin, &mut stdout).await?;

    Ok(())
}

// Logs go to stderr only, stdout carries the audio stream
fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}
