mod api;
mod config;
mod extract;
mod lyrics;
mod service;
mod title;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use service::{LyricsOutcome, Services};
use title::{TitleNormalizer, TitleOverrides};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "melodia", version, about = "Audio stream and lyrics lookup service")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Override the configured listen host.
        #[arg(long)]
        host: Option<String>,
        /// Override the configured listen port.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Search videos and print JSON to stdout (headless).
    Search { query: String },
    /// Resolve the best audio stream of a video and print JSON (headless).
    Audio { video_id: String },
    /// Look up lyrics for a raw video title and print JSON (headless).
    Lyrics { title: String },
    /// Show how a raw title is split into artist and song.
    CleanTitle { title: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                cfg.server.host = host;
            }
            if let Some(port) = port {
                cfg.server.port = port;
            }
            let services = Services::from_config(&cfg)?;
            api::run(&cfg.server, services).await?;
        }
        Command::Search { query } => {
            let services = Services::from_config(&cfg)?;
            let videos = services.search.search(&query).await?;
            print_json(&serde_json::json!({ "videos": videos }))?;
        }
        Command::Audio { video_id } => {
            let services = Services::from_config(&cfg)?;
            let audio = services.audio.resolve_audio(&video_id).await?;
            print_json(&audio)?;
        }
        Command::Lyrics { title } => {
            let services = Services::from_config(&cfg)?;
            match services.lyrics.resolve_lyrics(&title).await? {
                LyricsOutcome::Found(found) => {
                    print_json(&found)?;
                }
                LyricsOutcome::NotFound(nf) => {
                    print_json(&nf)?;
                }
            }
        }
        Command::CleanTitle { title } => {
            let normalizer =
                TitleNormalizer::new(TitleOverrides::new(cfg.lyrics.overrides.clone()));
            print_json(&normalizer.normalize(&title))?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
