//! Video metadata extraction
//!
//! The extraction backend turns a search query or a watch URL into structured
//! metadata. Nothing here downloads media; only metadata and stream URLs.

pub mod format;
pub mod models;
pub mod ytdlp;

pub use format::select_best_audio;
pub use models::{AudioResolution, RawEntry, SearchResultEntry, StreamFormat, VideoInfo};
pub use ytdlp::YtDlp;

use std::future::Future;

pub trait ExtractionBackend: Send + Sync {
    /// Search for at most `max_results` entries, provider order.
    fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> impl Future<Output = anyhow::Result<Vec<RawEntry>>> + Send;

    /// Resolve a single video (watch URL or id) to its metadata and formats.
    fn resolve(&self, url: &str) -> impl Future<Output = anyhow::Result<VideoInfo>> + Send;
}

pub fn watch_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/watch?v={}",
        urlencoding::encode(video_id)
    )
}
