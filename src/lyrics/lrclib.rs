//! LRCLIB API client
//!
//! LRCLIB is a free lyrics API without authentication. Plain lyrics are
//! preferred; synced (LRC) lyrics are reduced to their text.
//! API Documentation: https://lrclib.net/docs

use super::{LyricsBackend, SongRecord};
use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static LRC_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\[[^\]]*\])+\s*").unwrap());

/// LRCLIB API response
#[derive(Debug, Deserialize, Clone)]
pub struct LrclibResponse {
    #[serde(rename = "trackName")]
    track_name: String,
    #[serde(rename = "artistName")]
    artist_name: String,
    #[serde(rename = "plainLyrics")]
    plain_lyrics: Option<String>,
    #[serde(rename = "syncedLyrics")]
    synced_lyrics: Option<String>,
}

impl LrclibResponse {
    fn into_record(self) -> Option<SongRecord> {
        let lyrics = match (self.plain_lyrics, self.synced_lyrics) {
            (Some(plain), _) if !plain.trim().is_empty() => plain,
            (_, Some(synced)) if !synced.trim().is_empty() => strip_timestamps(&synced),
            _ => return None,
        };
        Some(SongRecord {
            lyrics,
            artist: self.artist_name,
            title: self.track_name,
        })
    }
}

/// LRCLIB API client
#[derive(Debug, Clone)]
pub struct LrclibClient {
    client: reqwest::Client,
    base_url: String,
}

impl LrclibClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://lrclib.net/api";
    const USER_AGENT: &'static str = concat!("melodia/", env!("CARGO_PKG_VERSION"));

    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .context("build lrclib http client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get lyrics with exact match
    async fn get_exact(
        &self,
        track_name: &str,
        artist_name: &str,
    ) -> anyhow::Result<Option<LrclibResponse>> {
        let url = format!(
            "{}/get?track_name={}&artist_name={}",
            self.base_url,
            urlencoding::encode(track_name),
            urlencoding::encode(artist_name)
        );

        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            let lyrics: LrclibResponse = response.json().await?;
            Ok(Some(lyrics))
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            anyhow::bail!("LRCLIB API error: {}", response.status());
        }
    }

    /// Search for lyrics; `query` is a ready-made `key=value` parameter.
    async fn search(&self, query: &str) -> anyhow::Result<Option<LrclibResponse>> {
        let url = format!("{}/search?{}", self.base_url, query);

        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            let results: Vec<LrclibResponse> = response.json().await?;

            // First result that carries any lyrics at all
            Ok(results.into_iter().find(|r| {
                r.plain_lyrics.as_deref().is_some_and(|l| !l.trim().is_empty())
                    || r.synced_lyrics.as_deref().is_some_and(|l| !l.trim().is_empty())
            }))
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            anyhow::bail!("LRCLIB search error: {}", response.status());
        }
    }
}

impl LyricsBackend for LrclibClient {
    fn source(&self) -> &'static str {
        "lrclib"
    }

    async fn search_song(
        &self,
        song: &str,
        artist: Option<&str>,
    ) -> anyhow::Result<Option<SongRecord>> {
        let query = match artist {
            Some(artist) => {
                // An exact hit without lyrics (e.g. instrumental) still falls
                // through to the search.
                let exact = self.get_exact(song, artist).await?;
                if let Some(record) = exact.and_then(LrclibResponse::into_record) {
                    return Ok(Some(record));
                }
                format!("q={}", urlencoding::encode(&format!("{song} {artist}")))
            }
            None => format!("track_name={}", urlencoding::encode(song)),
        };
        let found = self.search(&query).await?;
        Ok(found.and_then(LrclibResponse::into_record))
    }
}

/// Drop leading `[mm:ss.xx]` tags from each line of synced lyrics.
fn strip_timestamps(synced: &str) -> String {
    synced
        .lines()
        .map(|l| LRC_TAG.replace(l.trim(), "").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(plain: Option<&str>, synced: Option<&str>) -> LrclibResponse {
        LrclibResponse {
            track_name: "Song".to_string(),
            artist_name: "Artist".to_string(),
            plain_lyrics: plain.map(str::to_string),
            synced_lyrics: synced.map(str::to_string),
        }
    }

    #[test]
    fn test_strip_timestamps() {
        let lrc = "[00:12.34]First line\n[00:15.00][01:15.00] Second line\nplain";
        assert_eq!(strip_timestamps(lrc), "First line\nSecond line\nplain");
    }

    #[test]
    fn test_prefers_plain_lyrics() {
        let rec = response(Some("plain text"), Some("[00:01.00]synced"))
            .into_record()
            .unwrap();
        assert_eq!(rec.lyrics, "plain text");
        assert_eq!(rec.artist, "Artist");
    }

    #[test]
    fn test_synced_only() {
        let rec = response(Some("  "), Some("[00:01.00]synced"))
            .into_record()
            .unwrap();
        assert_eq!(rec.lyrics, "synced");
    }

    #[test]
    fn test_instrumental_has_no_record() {
        assert!(response(None, None).into_record().is_none());
    }

    #[test]
    fn test_parse_response() {
        let raw = r#"{"id":1,"trackName":"Hello","artistName":"Adele","albumName":"25","duration":295.0,"instrumental":false,"plainLyrics":"Hello, it's me","syncedLyrics":null}"#;
        let r: LrclibResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(r.into_record().unwrap().title, "Hello");
    }

    /// Serve `/get` and `/search` on an ephemeral local port.
    async fn serve(get: serde_json::Value, search: serde_json::Value) -> String {
        use axum::extract::RawQuery;
        use axum::routing::get as route_get;
        use axum::{Json, Router};

        let app = Router::new()
            .route("/get", route_get(move || async move { Json(get) }))
            .route(
                "/search",
                route_get(move |RawQuery(query): RawQuery| async move {
                    // Only the free-text query of the fallback gets results.
                    match query.as_deref() {
                        Some(q) if q.starts_with("q=") => Json(search),
                        _ => Json(serde_json::json!([])),
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_exact_hit_without_lyrics_falls_back_to_search() {
        let base = serve(
            serde_json::json!({
                "trackName": "Song",
                "artistName": "Artist",
                "instrumental": true,
                "plainLyrics": null,
                "syncedLyrics": null
            }),
            serde_json::json!([{
                "trackName": "Song (Live)",
                "artistName": "Artist",
                "plainLyrics": "Sung line",
                "syncedLyrics": null
            }]),
        )
        .await;

        let client = LrclibClient::new(&base, 5).unwrap();
        let rec = client
            .search_song("Song", Some("Artist"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(rec.lyrics, "Sung line");
        assert_eq!(rec.title, "Song (Live)");
    }

    #[tokio::test]
    async fn test_exact_hit_with_lyrics_skips_search() {
        let base = serve(
            serde_json::json!({
                "trackName": "Song",
                "artistName": "Artist",
                "plainLyrics": "Exact line",
                "syncedLyrics": null
            }),
            serde_json::json!([{
                "trackName": "Other",
                "artistName": "Artist",
                "plainLyrics": "Search line",
                "syncedLyrics": null
            }]),
        )
        .await;

        let client = LrclibClient::new(&base, 5).unwrap();
        let rec = client
            .search_song("Song", Some("Artist"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(rec.lyrics, "Exact line");
    }
}
