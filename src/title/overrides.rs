use super::NormalizedTitle;
use serde::{Deserialize, Serialize};

/// Replace the normalized title when the song contains `contains`
/// (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleOverride {
    pub contains: String,
    pub artist: String,
    pub song: String,
}

/// Ordered override rules; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleOverrides {
    rules: Vec<TitleOverride>,
}

impl TitleOverrides {
    pub fn new(rules: Vec<TitleOverride>) -> Self {
        Self { rules }
    }

    /// Rules shipped in the default config.
    pub fn builtin() -> Vec<TitleOverride> {
        vec![TitleOverride {
            contains: "love dose".to_string(),
            artist: "Yo Yo Honey Singh".to_string(),
            song: "Love Dose".to_string(),
        }]
    }

    pub fn apply(&self, title: NormalizedTitle) -> NormalizedTitle {
        let song = title.song.to_lowercase();
        let hit = self
            .rules
            .iter()
            .filter(|r| !r.contains.trim().is_empty())
            .find(|r| song.contains(&r.contains.to_lowercase()));

        match hit {
            Some(rule) => {
                tracing::debug!(contains = %rule.contains, "title override applied");
                NormalizedTitle {
                    artist: Some(rule.artist.clone()),
                    song: rule.song.clone(),
                }
            }
            None => title,
        }
    }
}

impl Default for TitleOverrides {
    fn default() -> Self {
        Self::new(Self::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(artist: Option<&str>, song: &str) -> NormalizedTitle {
        NormalizedTitle {
            artist: artist.map(str::to_string),
            song: song.to_string(),
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        let out = TitleOverrides::default().apply(title(Some("DJ"), "LOVE DOSE (remix)"));
        assert_eq!(out, title(Some("Yo Yo Honey Singh"), "Love Dose"));
    }

    #[test]
    fn test_no_match_passes_through() {
        let t = title(Some("Adele"), "Hello");
        assert_eq!(TitleOverrides::default().apply(t.clone()), t);
    }

    #[test]
    fn test_first_rule_wins() {
        let overrides = TitleOverrides::new(vec![
            TitleOverride {
                contains: "hello".to_string(),
                artist: "First".to_string(),
                song: "One".to_string(),
            },
            TitleOverride {
                contains: "hello world".to_string(),
                artist: "Second".to_string(),
                song: "Two".to_string(),
            },
        ]);
        assert_eq!(
            overrides.apply(title(None, "Hello World")),
            title(Some("First"), "One")
        );
    }

    #[test]
    fn test_blank_rule_never_matches() {
        let overrides = TitleOverrides::new(vec![TitleOverride {
            contains: "  ".to_string(),
            artist: "X".to_string(),
            song: "Y".to_string(),
        }]);
        let t = title(None, "Anything");
        assert_eq!(overrides.apply(t.clone()), t);
    }
}
