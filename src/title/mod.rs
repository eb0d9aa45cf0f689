//! Title normalization
//!
//! Video titles are noisy: decorative prefixes, bracketed annotations, pipe
//! suffixes, featured-artist lists. This module reduces a raw title to a
//! best-guess `(artist, song)` pair suitable for a lyrics lookup.
//!
//! Cleanup runs in a fixed order and each step sees the output of the previous
//! one: prefixes, brackets, pipe, comma, separator split, whitespace, overrides.

pub mod overrides;

pub use overrides::{TitleOverride, TitleOverrides};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Decorative fragments removed wherever they occur.
const DECORATIVE_PREFIXES: &[&str] = &[
    "Exclusive:",
    "Official:",
    "Full Video Song",
    "Full Song",
    "Video:",
];

/// Artist/song separators in priority order.
const SEPARATORS: &[&str] = &[" - ", " – ", " by ", ": "];

static BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());
static PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Best-guess split of a raw title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTitle {
    pub artist: Option<String>,
    pub song: String,
}

#[derive(Debug, Clone, Default)]
pub struct TitleNormalizer {
    overrides: TitleOverrides,
}

impl TitleNormalizer {
    pub fn new(overrides: TitleOverrides) -> Self {
        Self { overrides }
    }

    /// Normalize a raw title. Never fails; the worst case is the trimmed input
    /// as `song` with no artist.
    pub fn normalize(&self, raw: &str) -> NormalizedTitle {
        let cleaned = clean_title(raw);
        self.overrides.apply(cleaned)
    }
}

/// Steps 1-6 of normalization, without the override table.
pub fn clean_title(raw: &str) -> NormalizedTitle {
    let mut title = raw.to_string();
    for prefix in DECORATIVE_PREFIXES {
        title = title.replace(prefix, "");
    }

    let title = BRACKETS.replace_all(&title, "");
    let title = PARENS.replace_all(&title, "");

    let title = title.split('|').next().unwrap_or_default();
    let title = title.split(',').next().unwrap_or_default();

    // Only the segment between the first and second separator is the song.
    let (artist, song) = match SEPARATORS.iter().find(|sep| title.contains(**sep)) {
        Some(sep) => {
            let mut parts = title.split(*sep);
            let artist = parts.next().unwrap_or_default();
            (Some(artist), parts.next().unwrap_or_default())
        }
        None => (None, title),
    };

    NormalizedTitle {
        artist: artist.map(collapse_whitespace).filter(|a| !a.is_empty()),
        song: collapse_whitespace(song),
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
