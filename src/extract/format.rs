//! Audio stream selection
//!
//! Provider order is treated as preference order: the first m4a audio-only
//! stream wins, otherwise the first audio-only stream of any container.
//! No bitrate comparison is done.

use super::StreamFormat;

const PREFERRED_EXT: &str = "m4a";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("No audio format found")]
    NoAudioFormat,
    #[error("Could not get audio URL")]
    MissingUrl,
}

/// The chosen stream and its (non-empty) URL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selected<'a> {
    pub format: &'a StreamFormat,
    pub url: &'a str,
}

pub fn select_best_audio(formats: &[StreamFormat]) -> Result<Selected<'_>, FormatError> {
    let audio: Vec<&StreamFormat> = formats.iter().filter(|f| f.is_audio_only()).collect();

    let best = audio
        .iter()
        .find(|f| f.ext.as_deref() == Some(PREFERRED_EXT))
        .or_else(|| audio.first())
        .copied()
        .ok_or(FormatError::NoAudioFormat)?;

    let url = best
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(FormatError::MissingUrl)?;

    Ok(Selected { format: best, url })
}
