//! HTTP server setup and routing

use super::{handlers, AppState};
use crate::config::ServerConfig;
use crate::extract::ExtractionBackend;
use crate::lyrics::LyricsBackend;
use crate::service::Services;
use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router<E, L>(services: Services<E, L>) -> Router
where
    E: ExtractionBackend + 'static,
    L: LyricsBackend + 'static,
{
    let state: AppState<E, L> = Arc::new(services);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/search", get(handlers::search::<E, L>))
        .route("/get-audio-url/:video_id", get(handlers::audio_url::<E, L>))
        .route("/lyrics", get(handlers::lyrics::<E, L>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Browser clients call this from another origin.
        .layer(CorsLayer::permissive())
}

/// Serve until Ctrl-C.
pub async fn run<E, L>(cfg: &ServerConfig, services: Services<E, L>) -> anyhow::Result<()>
where
    E: ExtractionBackend + 'static,
    L: LyricsBackend + 'static,
{
    let addr = format!("{}:{}", cfg.host, cfg.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!("Starting HTTP server on {}", addr);

    axum::serve(listener, router(services))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await
        .context("http server")?;
    Ok(())
}
