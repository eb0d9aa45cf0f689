use super::models::{RawEntry, VideoInfo};
use super::ExtractionBackend;
use crate::config::YtdlpConfig;
use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use tokio::process::Command;

/// Extraction backend driving the `yt-dlp` executable in metadata-only mode.
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: PathBuf,
    socket_timeout_secs: u64,
    cookies: Option<PathBuf>,
    cookies_from_browser: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchPlaylist {
    #[serde(default)]
    entries: Option<Vec<RawEntry>>,
}

impl YtDlp {
    pub fn new(cfg: &YtdlpConfig) -> Self {
        Self {
            binary: cfg.binary.clone(),
            socket_timeout_secs: cfg.socket_timeout_secs,
            cookies: cfg.cookies.clone(),
            cookies_from_browser: cfg.cookies_from_browser.clone(),
        }
    }

    fn base_args(&self) -> Vec<String> {
        let mut args: Vec<String> = [
            "--dump-single-json",
            "--skip-download",
            "--no-warnings",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        if self.socket_timeout_secs > 0 {
            args.push("--socket-timeout".to_string());
            args.push(self.socket_timeout_secs.to_string());
        }

        // Prefer browser cookies when configured (no manual export needed).
        if let Some(browser) = &self.cookies_from_browser {
            args.push("--cookies-from-browser".to_string());
            args.push(browser.clone());
        } else if let Some(cookies) = &self.cookies {
            args.push("--cookies".to_string());
            args.push(cookies.display().to_string());
        }
        args
    }

    async fn run(&self, extra: &[String]) -> anyhow::Result<Vec<u8>> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(self.base_args()).args(extra).kill_on_drop(true);
        tracing::debug!(binary = %self.binary.display(), args = ?extra, "running yt-dlp");

        let out = cmd
            .output()
            .await
            .with_context(|| format!("run {}", self.binary.display()))?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            anyhow::bail!("yt-dlp failed: {}", stderr.trim());
        }
        Ok(out.stdout)
    }
}

impl ExtractionBackend for YtDlp {
    async fn search(&self, query: &str, max_results: usize) -> anyhow::Result<Vec<RawEntry>> {
        let args = vec![
            "--flat-playlist".to_string(),
            format!("ytsearch{max_results}:{query}"),
        ];
        let stdout = self.run(&args).await?;
        parse_search_output(&stdout)
    }

    async fn resolve(&self, url: &str) -> anyhow::Result<VideoInfo> {
        let args = vec!["--no-playlist".to_string(), url.to_string()];
        let stdout = self.run(&args).await?;
        parse_video_output(&stdout)
    }
}

fn parse_search_output(stdout: &[u8]) -> anyhow::Result<Vec<RawEntry>> {
    let playlist: SearchPlaylist =
        serde_json::from_slice(stdout).context("parse yt-dlp search json")?;
    Ok(playlist.entries.unwrap_or_default())
}

fn parse_video_output(stdout: &[u8]) -> anyhow::Result<VideoInfo> {
    serde_json::from_slice(stdout).context("parse yt-dlp video json")
}
