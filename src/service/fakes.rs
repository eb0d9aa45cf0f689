//! In-memory backends for tests.

use crate::extract::{ExtractionBackend, RawEntry, VideoInfo};
use crate::lyrics::{LyricsBackend, SongRecord};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct FakeExtractor {
    pub entries: Vec<RawEntry>,
    pub video: VideoInfo,
    pub error: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeExtractor {
    pub fn failing(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ExtractionBackend for FakeExtractor {
    async fn search(&self, query: &str, max_results: usize) -> anyhow::Result<Vec<RawEntry>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search:{max_results}:{query}"));
        if let Some(e) = &self.error {
            anyhow::bail!("{e}");
        }
        Ok(self.entries.clone())
    }

    async fn resolve(&self, url: &str) -> anyhow::Result<VideoInfo> {
        self.calls.lock().unwrap().push(format!("resolve:{url}"));
        if let Some(e) = &self.error {
            anyhow::bail!("{e}");
        }
        Ok(self.video.clone())
    }
}

/// Answers scripted in call order; once exhausted every call finds nothing.
#[derive(Debug, Clone, Default)]
pub struct FakeLyrics {
    answers: Arc<Mutex<VecDeque<Result<Option<SongRecord>, String>>>>,
    pub calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl FakeLyrics {
    pub fn answering(answers: Vec<Result<Option<SongRecord>, String>>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into())),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl LyricsBackend for FakeLyrics {
    fn source(&self) -> &'static str {
        "genius"
    }

    async fn search_song(
        &self,
        song: &str,
        artist: Option<&str>,
    ) -> anyhow::Result<Option<SongRecord>> {
        self.calls
            .lock()
            .unwrap()
            .push((song.to_string(), artist.map(str::to_string)));
        let answer = self.answers.lock().unwrap().pop_front();
        match answer {
            Some(Ok(found)) => Ok(found),
            Some(Err(e)) => anyhow::bail!("{e}"),
            None => Ok(None),
        }
    }
}

pub fn record(lyrics: &str, artist: &str) -> SongRecord {
    SongRecord {
        lyrics: lyrics.to_string(),
        artist: artist.to_string(),
        title: "whatever".to_string(),
    }
}
