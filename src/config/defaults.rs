use super::{Config, LyricsConfig, LyricsProvider, ServerConfig, YtdlpConfig};
use crate::lyrics::{GeniusClient, LrclibClient};
use crate::title::TitleOverrides;
use std::path::PathBuf;

pub fn defaults() -> Config {
    Config {
        server: server(),
        ytdlp: ytdlp(),
        lyrics: lyrics(),
    }
}

pub fn server() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 5002,
    }
}

pub fn ytdlp() -> YtdlpConfig {
    YtdlpConfig {
        binary: PathBuf::from("yt-dlp"),
        search_results: 5,
        socket_timeout_secs: 15,
        cookies: None,
        cookies_from_browser: None,
    }
}

pub fn lyrics() -> LyricsConfig {
    LyricsConfig {
        provider: LyricsProvider::Genius,
        genius_token: None,
        genius_api_base: GeniusClient::DEFAULT_API_BASE.to_string(),
        lrclib_api_base: LrclibClient::DEFAULT_BASE_URL.to_string(),
        timeout_secs: 10,
        overrides: TitleOverrides::builtin(),
    }
}
