use super::error::{Result, ServiceError};
use crate::extract::{self, AudioResolution, ExtractionBackend};

#[derive(Debug, Clone)]
pub struct AudioService<E> {
    backend: E,
}

impl<E: ExtractionBackend> AudioService<E> {
    pub fn new(backend: E) -> Self {
        Self { backend }
    }

    /// Resolve a video id to its best audio-only stream.
    pub async fn resolve_audio(&self, video_id: &str) -> Result<AudioResolution> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "No video id provided".to_string(),
            ));
        }

        tracing::info!(video_id, "resolving audio url");
        let info = self
            .backend
            .resolve(&extract::watch_url(video_id))
            .await
            .map_err(|e| ServiceError::backend("resolve-audio", e))?;

        let selected = extract::select_best_audio(&info.formats).map_err(|e| {
            tracing::warn!(video_id, formats = info.formats.len(), "{e}");
            ServiceError::NotFound(e.to_string())
        })?;
        tracing::debug!(
            video_id = info.id.as_deref().unwrap_or(video_id),
            format_id = selected.format.format_id.as_deref().unwrap_or("?"),
            abr = ?selected.format.abr,
            "selected audio format"
        );

        Ok(AudioResolution {
            url: selected.url.to_string(),
            title: info.title.clone().unwrap_or_default(),
            thumbnail: info.thumbnail.clone().filter(|t| !t.is_empty()),
        })
    }
}
