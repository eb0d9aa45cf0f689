//! Lyrics providers
//!
//! This module provides:
//! - Genius API client (search + lyrics page extraction)
//! - LRCLIB API client as an alternative provider
//! - `LyricsClient`, the configured provider behind one type

pub mod genius;
pub mod lrclib;

pub use genius::GeniusClient;
pub use lrclib::LrclibClient;

use crate::config::{LyricsConfig, LyricsProvider};
use std::future::Future;

/// A provider match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub lyrics: String,
    pub artist: String,
    pub title: String,
}

pub trait LyricsBackend: Send + Sync {
    /// Name reported as the `source` of found lyrics.
    fn source(&self) -> &'static str;

    /// Look up a song, optionally narrowed by artist. `Ok(None)` means the
    /// provider had no match.
    fn search_song(
        &self,
        song: &str,
        artist: Option<&str>,
    ) -> impl Future<Output = anyhow::Result<Option<SongRecord>>> + Send;
}

/// The provider selected in config.
#[derive(Debug, Clone)]
pub enum LyricsClient {
    Genius(GeniusClient),
    Lrclib(LrclibClient),
}

impl LyricsClient {
    pub fn from_config(cfg: &LyricsConfig) -> anyhow::Result<Self> {
        Ok(match cfg.provider {
            LyricsProvider::Genius => {
                if cfg.genius_token.is_none() {
                    tracing::warn!("no Genius access token configured; lyrics lookups will fail");
                }
                Self::Genius(GeniusClient::new(
                    cfg.genius_token.clone(),
                    &cfg.genius_api_base,
                    cfg.timeout_secs,
                )?)
            }
            LyricsProvider::Lrclib => {
                Self::Lrclib(LrclibClient::new(&cfg.lrclib_api_base, cfg.timeout_secs)?)
            }
        })
    }
}

impl LyricsBackend for LyricsClient {
    fn source(&self) -> &'static str {
        match self {
            Self::Genius(c) => c.source(),
            Self::Lrclib(c) => c.source(),
        }
    }

    async fn search_song(
        &self,
        song: &str,
        artist: Option<&str>,
    ) -> anyhow::Result<Option<SongRecord>> {
        match self {
            Self::Genius(c) => c.search_song(song, artist).await,
            Self::Lrclib(c) => c.search_song(song, artist).await,
        }
    }
}
