//! Genius API client
//!
//! Genius does not return lyrics through its API. A search gives song hits
//! with a page URL; the lyrics are then read from that page's lyrics
//! containers.
//! API Documentation: https://docs.genius.com

use super::{LyricsBackend, SongRecord};
use anyhow::Context;
use scraper::{ElementRef, Html, Node, Selector};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "type", default)]
    kind: String,
    result: HitResult,
}

#[derive(Debug, Deserialize)]
struct HitResult {
    title: String,
    url: String,
    primary_artist: PrimaryArtist,
}

#[derive(Debug, Deserialize)]
struct PrimaryArtist {
    name: String,
}

#[derive(Debug, Clone)]
pub struct GeniusClient {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GeniusClient {
    pub const DEFAULT_API_BASE: &'static str = "https://api.genius.com";
    const USER_AGENT: &'static str = concat!("melodia/", env!("CARGO_PKG_VERSION"));

    pub fn new(token: Option<String>, api_base: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .context("build genius http client")?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn search(&self, query: &str) -> anyhow::Result<Vec<Hit>> {
        let token = self
            .token
            .as_deref()
            .context("Genius access token not configured")?;
        let url = format!("{}/search?q={}", self.api_base, urlencoding::encode(query));

        let envelope: SearchEnvelope = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .context("send genius search request")?
            .error_for_status()
            .context("genius search http status")?
            .json()
            .await
            .context("parse genius search json")?;
        Ok(envelope.response.hits)
    }

    async fn fetch_page(&self, url: &str) -> anyhow::Result<String> {
        self.client
            .get(url)
            .send()
            .await
            .context("fetch genius lyrics page")?
            .error_for_status()
            .context("genius lyrics page http status")?
            .text()
            .await
            .context("read genius lyrics page")
    }
}

impl LyricsBackend for GeniusClient {
    fn source(&self) -> &'static str {
        "genius"
    }

    async fn search_song(
        &self,
        song: &str,
        artist: Option<&str>,
    ) -> anyhow::Result<Option<SongRecord>> {
        let query = match artist {
            Some(a) => format!("{song} {a}"),
            None => song.to_string(),
        };
        let hits = self.search(&query).await?;
        let Some(hit) = pick_hit(hits, song) else {
            return Ok(None);
        };

        let html = self.fetch_page(&hit.url).await?;
        let Some(lyrics) = extract_lyrics(&html) else {
            tracing::warn!(url = %hit.url, "genius page had no lyrics containers");
            return Ok(None);
        };

        Ok(Some(SongRecord {
            lyrics,
            artist: hit.primary_artist.name,
            title: hit.title,
        }))
    }
}

/// Prefer the song hit whose title matches the searched song, else the first
/// song hit.
fn pick_hit(hits: Vec<Hit>, song: &str) -> Option<HitResult> {
    let wanted = song.trim().to_lowercase();
    let mut songs = hits.into_iter().filter(|h| h.kind == "song").map(|h| h.result);
    let first = songs.next()?;
    if first.title.trim().to_lowercase() == wanted {
        return Some(first);
    }
    Some(
        songs
            .find(|r| r.title.trim().to_lowercase() == wanted)
            .unwrap_or(first),
    )
}

/// Concatenate all lyrics containers of a Genius song page. `<br>` becomes a
/// newline; annotation chrome marked as excluded is skipped.
fn extract_lyrics(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(r#"div[data-lyrics-container="true"]"#).ok()?;

    let mut out = String::new();
    let mut found = false;
    for container in doc.select(&selector) {
        found = true;
        collect_text(container, &mut out);
        out.push('\n');
    }

    let out = out.trim_end().to_string();
    (found && !out.trim().is_empty()).then_some(out)
}

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) if e.name() == "br" => out.push('\n'),
            Node::Element(e) if e.attr("data-exclude-from-selection") == Some("true") => {}
            Node::Element(_) => {
                if let Some(inner) = ElementRef::wrap(child) {
                    collect_text(inner, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(kind: &str, title: &str) -> Hit {
        Hit {
            kind: kind.to_string(),
            result: HitResult {
                title: title.to_string(),
                url: format!("https://genius.com/{}", title.replace(' ', "-")),
                primary_artist: PrimaryArtist {
                    name: "Artist".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_pick_hit_prefers_title_match() {
        let hits = vec![
            hit("song", "Tum Hi Ho (Remix)"),
            hit("song", "tum hi ho"),
            hit("song", "Other"),
        ];
        assert_eq!(pick_hit(hits, "Tum Hi Ho").unwrap().title, "tum hi ho");
    }

    #[test]
    fn test_pick_hit_falls_back_to_first_song() {
        let hits = vec![hit("artist", "Someone"), hit("song", "A"), hit("song", "B")];
        assert_eq!(pick_hit(hits, "Zzz").unwrap().title, "A");
    }

    #[test]
    fn test_pick_hit_none_without_songs() {
        assert!(pick_hit(vec![hit("album", "X")], "X").is_none());
        assert!(pick_hit(Vec::new(), "X").is_none());
    }

    #[test]
    fn test_parse_search_envelope() {
        let raw = r#"{"meta":{"status":200},"response":{"hits":[
            {"index":"song","type":"song","result":{"id":1,"title":"Hello","url":"https://genius.com/Adele-hello-lyrics","primary_artist":{"id":2,"name":"Adele"}}}
        ]}}"#;
        let env: SearchEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(env.response.hits.len(), 1);
        assert_eq!(env.response.hits[0].result.primary_artist.name, "Adele");
    }

    #[test]
    fn test_extract_lyrics() {
        let html = r#"<html><body>
            <div data-lyrics-container="true">[Verse 1]<br>Hello, it's me<br><a href="/x"><span>I was wondering</span></a><br><div data-exclude-from-selection="true">Embed</div></div>
            <div class="other">not lyrics</div>
            <div data-lyrics-container="true">[Chorus]<br>Hello from the other side</div>
        </body></html>"#;
        let lyrics = extract_lyrics(html).unwrap();
        assert_eq!(
            lyrics,
            "[Verse 1]\nHello, it's me\nI was wondering\n\n[Chorus]\nHello from the other side"
        );
    }

    #[test]
    fn test_extract_lyrics_missing_container() {
        assert!(extract_lyrics("<html><body><p>nothing</p></body></html>").is_none());
        assert!(extract_lyrics(r#"<div data-lyrics-container="true">  </div>"#).is_none());
    }
}
