use super::error::{Result, ServiceError};
use crate::lyrics::{LyricsBackend, SongRecord};
use crate::title::{NormalizedTitle, TitleNormalizer};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LyricsFound {
    /// Non-blank lines in provider order; never empty.
    pub lines: Vec<String>,
    pub title: String,
    pub artist: Option<String>,
    pub source: String,
}

impl LyricsFound {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LyricsNotFound {
    pub title: String,
    pub artist: Option<String>,
    pub diagnostic: String,
}

/// Lyrics lookups end in one of these; "not found" is an expected outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsOutcome {
    Found(LyricsFound),
    NotFound(LyricsNotFound),
}

#[derive(Debug, Clone)]
pub struct LyricsService<L> {
    backend: L,
    normalizer: TitleNormalizer,
}

impl<L: LyricsBackend> LyricsService<L> {
    pub fn new(backend: L, normalizer: TitleNormalizer) -> Self {
        Self {
            backend,
            normalizer,
        }
    }

    /// Normalize `raw_title`, then ask the backend with the guessed artist and,
    /// if that finds nothing, once more without it.
    pub async fn resolve_lyrics(&self, raw_title: &str) -> Result<LyricsOutcome> {
        if raw_title.trim().is_empty() {
            return Err(ServiceError::InvalidRequest("No title provided".to_string()));
        }

        let title = self.normalizer.normalize(raw_title);
        tracing::info!(
            artist = title.artist.as_deref().unwrap_or("None"),
            song = %title.song,
            "cleaned title"
        );

        if title.song.is_empty() {
            return Ok(LyricsOutcome::NotFound(not_found(title)));
        }

        match self.lookup(&title).await {
            Ok(Some(found)) => Ok(LyricsOutcome::Found(found)),
            Ok(None) => Ok(LyricsOutcome::NotFound(not_found(title))),
            Err(e) => {
                tracing::error!(
                    song = %title.song,
                    error = %format!("{e:#}"),
                    "lyrics backend error"
                );
                Ok(LyricsOutcome::NotFound(not_found(title)))
            }
        }
    }

    async fn lookup(&self, title: &NormalizedTitle) -> anyhow::Result<Option<LyricsFound>> {
        if let Some(artist) = title.artist.as_deref() {
            if let Some(found) = self.attempt(title, Some(artist)).await? {
                return Ok(Some(found));
            }
            tracing::info!(song = %title.song, "no match with artist, retrying without");
        }
        self.attempt(title, None).await
    }

    async fn attempt(
        &self,
        title: &NormalizedTitle,
        artist: Option<&str>,
    ) -> anyhow::Result<Option<LyricsFound>> {
        tracing::info!(
            song = %title.song,
            artist = artist.unwrap_or("None"),
            "searching for lyrics"
        );
        let record = self.backend.search_song(&title.song, artist).await?;
        Ok(record.and_then(|r| self.found(title, r)))
    }

    fn found(&self, title: &NormalizedTitle, record: SongRecord) -> Option<LyricsFound> {
        let lines = clean_lyrics(&record.lyrics);
        if lines.is_empty() {
            tracing::warn!(matched = %record.title, "match had no lyrics text");
            return None;
        }
        tracing::debug!(matched = %record.title, lines = lines.len(), "lyrics found");
        let artist = title
            .artist
            .clone()
            .or(Some(record.artist))
            .filter(|a| !a.is_empty());
        Some(LyricsFound {
            lines,
            title: title.song.clone(),
            artist,
            source: self.backend.source().to_string(),
        })
    }
}

/// Keep only non-blank lines, in order.
pub fn clean_lyrics(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn not_found(title: NormalizedTitle) -> LyricsNotFound {
    let diagnostic = format!(
        "Searched for: {} by {}",
        title.song,
        title.artist.as_deref().unwrap_or("None")
    );
    LyricsNotFound {
        title: title.song,
        artist: title.artist,
        diagnostic,
    }
}
