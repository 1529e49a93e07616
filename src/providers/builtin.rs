//! Built-in provider table
//!
//! Order matters only for priority: the registry returns the first entry
//! whose pattern matches. The domains below do not overlap.

use crate::providers::models::Provider;
use crate::utils::error::Result;

// Ids are ASCII; the regex crate's \d and \w would also accept other scripts.
const YOUTUBE_ID: &str = "[a-zA-Z0-9_-]{11}";

/// Compile the built-in providers in priority order
pub fn builtin_providers() -> Result<Vec<Provider>> {
    Ok(vec![youtube()?, vimeo()?, dailymotion()?, twitch_clip()?, twitch_video()?])
}

fn youtube() -> Result<Provider> {
    let patterns = [
        format!(r"youtube\.com/watch\?v=({YOUTUBE_ID})"),
        format!(r"youtu\.be/({YOUTUBE_ID})"),
        format!(r"youtube\.com/embed/({YOUTUBE_ID})"),
        format!(r"youtube\.com/v/({YOUTUBE_ID})"),
        format!(r"youtube\.com/shorts/({YOUTUBE_ID})"),
    ];
    Ok(
        Provider::new("youtube", "YouTube", &patterns, "https://www.youtube.com/embed/{id}")?
            .with_thumbnail("https://img.youtube.com/vi/{id}/hqdefault.jpg")
            .with_color("#FF0000"),
    )
}

fn vimeo() -> Result<Provider> {
    // Vimeo thumbnails need an API round-trip
    Ok(Provider::new(
        "vimeo",
        "Vimeo",
        &[
            r"vimeo\.com/([0-9]+)",
            r"vimeo\.com/video/([0-9]+)",
            r"player\.vimeo\.com/video/([0-9]+)",
        ],
        "https://player.vimeo.com/video/{id}",
    )?
    .with_color("#1AB7EA"))
}

fn dailymotion() -> Result<Provider> {
    Ok(Provider::new(
        "dailymotion",
        "Dailymotion",
        &[r"dailymotion\.com/video/([a-zA-Z0-9]+)", r"dai\.ly/([a-zA-Z0-9]+)"],
        "https://www.dailymotion.com/embed/video/{id}",
    )?
    .with_thumbnail("https://www.dailymotion.com/thumbnail/video/{id}")
    .with_color("#0066DC"))
}

fn twitch_clip() -> Result<Provider> {
    Ok(Provider::new(
        "twitch-clip",
        "Twitch",
        &[r"clips\.twitch\.tv/([a-zA-Z0-9_-]+)", r"twitch\.tv/[a-zA-Z0-9_]+/clip/([a-zA-Z0-9_-]+)"],
        "https://clips.twitch.tv/embed?clip={id}&parent={host}",
    )?
    .with_color("#9146FF"))
}

fn twitch_video() -> Result<Provider> {
    Ok(Provider::new(
        "twitch-video",
        "Twitch",
        &[r"twitch\.tv/videos/([0-9]+)"],
        "https://player.twitch.tv/?video={id}&parent={host}",
    )?
    .with_color("#9146FF"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_compiles_in_order() {
        let providers = builtin_providers().expect("builtin providers compile");
        let keys: Vec<&str> = providers.iter().map(Provider::key).collect();
        assert_eq!(
            keys,
            ["youtube", "vimeo", "dailymotion", "twitch-clip", "twitch-video"]
        );
    }

    #[test]
    fn twitch_entries_share_a_name() {
        let providers = builtin_providers().expect("builtin providers compile");
        let twitch: Vec<&Provider> = providers.iter().filter(|p| p.name() == "Twitch").collect();
        assert_eq!(twitch.len(), 2);
        assert_ne!(twitch[0], twitch[1]);
    }

    #[test]
    fn non_ascii_digits_are_not_ids() {
        let registry = crate::providers::ProviderRegistry::new(
            builtin_providers().expect("builtin providers compile"),
        )
        .expect("registry");
        for input in [
            "https://vimeo.com/\u{661}\u{662}\u{663}",
            "https://www.twitch.tv/videos/\u{967}\u{968}",
            "https://www.twitch.tv/\u{e9}t\u{e9}/clip/x",
        ] {
            assert!(!registry.is_video_url(input), "{input}");
        }
    }

    #[test]
    fn only_twitch_builders_depend_on_host() {
        for provider in builtin_providers().expect("builtin providers compile") {
            let expects_host = provider.key().starts_with("twitch");
            assert_eq!(provider.embed_url().uses_host(), expects_host, "{}", provider.key());
        }
    }
}
