use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use txtread::{App, Config, Document};

#[derive(Parser)]
#[command(name = "txtread")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to read
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Nothing is written to disk until the document is known to be readable
    let document = Document::open(&cli.file)?;

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {e:#}; using default configuration");
            Config::default()
        }
    };
    config.ensure_dirs()?;
    init_logging(&config);
    tracing::info!(path = %cli.file.display(), lines = document.len(), "session started");

    let mut app = App::new(config, document)?;
    app.run()
}

/// Log to a file in the data directory; the terminal belongs to the UI
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "txtread=info".into());

    let file = config
        .log_path()
        .ok()
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

    let registry = tracing_subscriber::registry().with(filter);
    match file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .init(),
    }
}
