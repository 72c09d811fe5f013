// src/modules/site/application/domain/embed.rs

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;
use utoipa::ToSchema;

static YOUTUBE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// Third-party iframe content. Anything not loadable becomes a static placeholder
/// so the rest of the page still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EmbedState {
    Ready { url: String },
    Placeholder { text: String },
}

impl EmbedState {
    /// Accepts absolute HTTPS URLs only.
    pub fn from_url(url: Option<&str>, placeholder: impl Into<String>) -> Self {
        match url.map(str::trim).and_then(|u| Url::parse(u).ok()) {
            Some(parsed) if parsed.scheme() == "https" && parsed.host_str().is_some() => {
                EmbedState::Ready {
                    url: parsed.to_string(),
                }
            }
            _ => EmbedState::Placeholder {
                text: placeholder.into(),
            },
        }
    }

    pub fn youtube(video_id: Option<&str>, placeholder: impl Into<String>) -> Self {
        let url = video_id.and_then(youtube_embed_url);
        Self::from_url(url.as_deref(), placeholder)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, EmbedState::Ready { .. })
    }
}

/// Muted, looping background player for the hero banner.
pub fn youtube_embed_url(video_id: &str) -> Option<String> {
    let id = video_id.trim();
    if !YOUTUBE_ID_REGEX.is_match(id) {
        return None;
    }

    Some(format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}\
         &controls=0&showinfo=0&rel=0&modestbranding=1&playsinline=1&enablejsapi=1"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_url_is_ready() {
        let embed = EmbedState::from_url(
            Some("https://www.google.com/maps/embed?pb=abc"),
            "Map unavailable",
        );
        assert!(embed.is_ready());
    }

    #[test]
    fn missing_or_insecure_url_degrades_to_placeholder() {
        for url in [None, Some(""), Some("http://maps.example.com"), Some("not a url")] {
            assert_eq!(
                EmbedState::from_url(url, "Map unavailable"),
                EmbedState::Placeholder {
                    text: "Map unavailable".to_string()
                }
            );
        }
    }

    #[test]
    fn youtube_id_builds_looping_embed() {
        let url = youtube_embed_url("vcu2xyCyqps").unwrap();
        assert!(url.starts_with("https://www.youtube.com/embed/vcu2xyCyqps?autoplay=1&mute=1&loop=1"));
        assert!(url.contains("playlist=vcu2xyCyqps"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn malformed_youtube_id_is_placeholder() {
        assert!(youtube_embed_url("short").is_none());
        assert!(!EmbedState::youtube(Some("bad id with spaces"), "Video unavailable").is_ready());
        assert!(!EmbedState::youtube(None, "Video unavailable").is_ready());
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(EmbedState::Placeholder {
            text: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json["state"], "placeholder");
    }
}
