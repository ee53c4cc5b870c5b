//! unibot: answer one fulfillment event read from a file or stdin.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unibot_lib::{build_dispatcher, handle_json, Config};

#[derive(Parser, Debug)]
#[command(name = "unibot")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Pretty-print the response JSON
    #[arg(long)]
    pretty: bool,

    /// Event JSON file (reads stdin when omitted)
    event: Option<String>,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));

    // stdout carries the response only
    if config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, source) = match &args.config {
        Some(path) => {
            dotenv::dotenv().ok();
            let mut config = Config::from_file(path)
                .with_context(|| format!("loading config from {}", path))?;
            config.apply_overrides(|key| std::env::var(key).ok())?;
            (config, Some(PathBuf::from(path)))
        }
        None => (Config::load()?, Config::locate()),
    };

    init_logging(&config);
    match source {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let raw = match &args.event {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading event from {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading event from stdin")?;
            buf
        }
    };

    let dispatcher = build_dispatcher(&config).await?;
    let response = handle_json(&dispatcher, &raw).await;

    let out = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", out);

    Ok(())
}
