use crate::title::TitleOverride;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

/// Environment variable that overrides `lyrics.genius_token`.
pub const GENIUS_TOKEN_ENV: &str = "GENIUS_ACCESS_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ytdlp: YtdlpConfig,
    pub lyrics: LyricsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YtdlpConfig {
    /// yt-dlp executable (name on PATH or absolute path).
    pub binary: PathBuf,
    /// Number of results requested per search.
    pub search_results: usize,
    /// Passed as `--socket-timeout`; 0 leaves yt-dlp's default.
    pub socket_timeout_secs: u64,
    /// Path to a Netscape cookie file.
    pub cookies: Option<PathBuf>,
    /// Use yt-dlp `--cookies-from-browser` (e.g. "chrome", "firefox", "brave").
    pub cookies_from_browser: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LyricsProvider {
    Genius,
    Lrclib,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsConfig {
    pub provider: LyricsProvider,
    /// Genius API access token (https://genius.com/api-clients).
    pub genius_token: Option<String>,
    pub genius_api_base: String,
    pub lrclib_api_base: String,
    pub timeout_secs: u64,
    /// Applied after title normalization; first match wins.
    pub overrides: Vec<TitleOverride>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        defaults::server()
    }
}

impl Default for YtdlpConfig {
    fn default() -> Self {
        defaults::ytdlp()
    }
}

impl Default for LyricsConfig {
    fn default() -> Self {
        defaults::lyrics()
    }
}

impl Config {
    /// Secrets from the environment take precedence over the file.
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(GENIUS_TOKEN_ENV) {
            self.apply_genius_token(token);
        }
    }

    fn apply_genius_token(&mut self, token: String) {
        let token = token.trim();
        if !token.is_empty() {
            self.lyrics.genius_token = Some(token.to_string());
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "melodia", "melodia").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    let mut cfg = if path.exists() {
        let raw =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        parse(&raw).with_context(|| format!("parse {}", path.display()))?
    } else {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let cfg = defaults::defaults();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&path, fs::Permissions::from_mode(0o600));
        }
        tracing::info!(path = %path.display(), "wrote default config");
        cfg
    };

    cfg.apply_env();
    Ok(cfg)
}

fn parse(raw: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str::<Config>(raw)?)
}
