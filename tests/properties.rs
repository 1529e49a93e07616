//! Property-based checks of the detection laws.
//!
//! Laws tested:
//! A - Consistency: is_video_url(x) == detect(x).is_some()
//! B - Idempotence: detect(x) == detect(x) for the same context
//! C - Match shape: a match has a non-empty id and a non-empty embed URL
//! D - Embedded links: a YouTube link is found anywhere inside surrounding text

use proptest::prelude::*;
use vidlink::{detect_video_provider, is_video_url, EmbedContext};

fn ctx() -> EmbedContext {
    EmbedContext::new("journal.example.com")
}

fn url_like() -> impl Strategy<Value = String> {
    let hosts = prop::sample::select(vec![
        "https://youtu.be/",
        "https://www.youtube.com/watch?v=",
        "https://vimeo.com/",
        "https://dai.ly/",
        "https://clips.twitch.tv/",
        "https://www.twitch.tv/videos/",
        "https://example.com/",
    ]);
    (hosts, "[a-zA-Z0-9_-]{0,16}").prop_map(|(host, tail)| format!("{host}{tail}"))
}

proptest! {
    #[test]
    fn consistency_on_arbitrary_text(input in ".*") {
        prop_assert_eq!(is_video_url(&input), detect_video_provider(&input, &ctx()).is_some());
    }

    #[test]
    fn consistency_on_url_like_input(input in url_like()) {
        prop_assert_eq!(is_video_url(&input), detect_video_provider(&input, &ctx()).is_some());
    }

    #[test]
    fn detection_is_idempotent(input in url_like()) {
        prop_assert_eq!(detect_video_provider(&input, &ctx()), detect_video_provider(&input, &ctx()));
    }

    #[test]
    fn matches_are_well_formed(input in url_like()) {
        if let Some(m) = detect_video_provider(&input, &ctx()) {
            prop_assert!(!m.video_id.is_empty());
            prop_assert!(!m.embed_url.is_empty());
            prop_assert!(m.embed_url.contains(&m.video_id));
            prop_assert!(input.contains(&m.video_id));
        }
    }

    #[test]
    fn youtube_link_found_inside_text(
        prefix in "[a-z ]{0,20}",
        id in "[a-zA-Z0-9_-]{11}",
        suffix in "( [a-z ]{0,20})?",
    ) {
        let input = format!("{prefix}https://youtu.be/{id}{suffix}");
        let m = detect_video_provider(&input, &ctx());
        prop_assert!(m.is_some());
        let m = m.unwrap();
        prop_assert_eq!(m.provider.key(), "youtube");
        prop_assert_eq!(m.video_id, id);
    }
}
