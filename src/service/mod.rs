//! Request-level operations
//!
//! Each service owns its backend handle and turns backend results into the
//! output contract: search results, a resolved audio stream, or lyrics.

pub mod audio;
pub mod error;
pub mod lyrics;
pub mod search;

#[cfg(test)]
pub mod fakes;

pub use audio::AudioService;
pub use error::ServiceError;
pub use lyrics::{LyricsOutcome, LyricsService};
pub use search::SearchService;

use crate::config::Config;
use crate::extract::{ExtractionBackend, YtDlp};
use crate::lyrics::{LyricsBackend, LyricsClient};
use crate::title::{TitleNormalizer, TitleOverrides};

/// All services sharing one extraction backend.
#[derive(Debug, Clone)]
pub struct Services<E, L> {
    pub search: SearchService<E>,
    pub audio: AudioService<E>,
    pub lyrics: LyricsService<L>,
}

impl<E: ExtractionBackend + Clone, L: LyricsBackend> Services<E, L> {
    pub fn new(extractor: E, lyrics: L, normalizer: TitleNormalizer, max_results: usize) -> Self {
        Self {
            search: SearchService::new(extractor.clone(), max_results),
            audio: AudioService::new(extractor),
            lyrics: LyricsService::new(lyrics, normalizer),
        }
    }
}

impl Services<YtDlp, LyricsClient> {
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let normalizer = TitleNormalizer::new(TitleOverrides::new(cfg.lyrics.overrides.clone()));
        Ok(Self::new(
            YtDlp::new(&cfg.ytdlp),
            LyricsClient::from_config(&cfg.lyrics)?,
            normalizer,
            cfg.ytdlp.search_results.max(1),
        ))
    }
}
