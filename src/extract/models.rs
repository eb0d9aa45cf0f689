use serde::{Deserialize, Serialize};

/// One search hit as reported by yt-dlp in flat-playlist mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<Vec<Thumbnail>>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    /// Seconds; yt-dlp reports this as a float for some extractors.
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

/// One candidate stream of a video.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StreamFormat {
    #[serde(default)]
    pub format_id: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Average audio bitrate in kbit/s. Informational only.
    #[serde(default)]
    pub abr: Option<f64>,
}

impl StreamFormat {
    /// An audio codec is present and there is no video track.
    ///
    /// A missing `acodec` is not `"none"`, so it counts as audio; a missing
    /// `vcodec` is not `"none"`, so it disqualifies the format.
    pub fn is_audio_only(&self) -> bool {
        self.acodec.as_deref() != Some("none") && self.vcodec.as_deref() == Some("none")
    }
}

/// Top-level metadata of a single resolved video.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub formats: Vec<StreamFormat>,
}

/// Search output: one entry per result, provider order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultEntry {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub channel: String,
    pub duration: u64,
}

impl SearchResultEntry {
    pub fn from_raw(entry: RawEntry) -> Self {
        let thumbnail = entry
            .thumbnails
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|t| t.url.as_deref())
            .find(|u| !u.is_empty())
            .map(str::to_string)
            .or_else(|| entry.thumbnail.filter(|t| !t.is_empty()));

        Self {
            id: entry.id.unwrap_or_default(),
            title: entry.title.unwrap_or_default(),
            thumbnail,
            channel: entry.channel.unwrap_or_default(),
            duration: entry
                .duration
                .filter(|d| d.is_finite() && *d > 0.0)
                .map(|d| d.round() as u64)
                .unwrap_or(0),
        }
    }
}

/// The chosen audio stream plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioResolution {
    pub url: String,
    pub title: String,
    pub thumbnail: Option<String>,
}
