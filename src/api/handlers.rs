use super::AppState;
use crate::extract::{AudioResolution, ExtractionBackend, SearchResultEntry};
use crate::lyrics::LyricsBackend;
use crate::service::{LyricsOutcome, ServiceError};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::BackendFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub videos: Vec<SearchResultEntry>,
}

pub async fn search<E, L>(
    State(state): State<AppState<E, L>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ServiceError>
where
    E: ExtractionBackend,
    L: LyricsBackend,
{
    let query = params.query.unwrap_or_default();
    let videos = state.search.search(&query).await?;
    Ok(Json(SearchResponse { videos }))
}

pub async fn audio_url<E, L>(
    State(state): State<AppState<E, L>>,
    Path(video_id): Path<String>,
) -> Result<Json<AudioResolution>, ServiceError>
where
    E: ExtractionBackend,
    L: LyricsBackend,
{
    Ok(Json(state.audio.resolve_audio(&video_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct LyricsParams {
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LyricsResponse {
    pub lyrics: String,
    pub title: String,
    pub artist: Option<String>,
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct LyricsNotFoundResponse {
    pub error: &'static str,
    pub title: String,
    pub artist: Option<String>,
    pub cleaned_search: String,
}

pub async fn lyrics<E, L>(
    State(state): State<AppState<E, L>>,
    Query(params): Query<LyricsParams>,
) -> Result<Response, ServiceError>
where
    E: ExtractionBackend,
    L: LyricsBackend,
{
    let title = params.title.unwrap_or_default();
    let response = match state.lyrics.resolve_lyrics(&title).await? {
        LyricsOutcome::Found(found) => Json(LyricsResponse {
            lyrics: found.text(),
            title: found.title,
            artist: found.artist,
            source: found.source,
        })
        .into_response(),
        LyricsOutcome::NotFound(nf) => (
            StatusCode::NOT_FOUND,
            Json(LyricsNotFoundResponse {
                error: "Lyrics not found",
                title: nf.title,
                artist: nf.artist,
                cleaned_search: nf.diagnostic,
            }),
        )
            .into_response(),
    };
    Ok(response)
}
