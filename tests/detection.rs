//! Detection behaviour of the built-in registry, without touching the network.

use vidlink::{
    detect_video_provider, is_video_url, CustomProvider, EmbedContext, ProviderRegistry,
    UrlTemplate, VidlinkError,
};

fn ctx() -> EmbedContext {
    EmbedContext::new("journal.example.com")
}

#[test]
fn youtube_url_shapes() {
    let inputs = [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/dQw4w9WgXcQ",
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "https://www.youtube.com/v/dQw4w9WgXcQ",
        "https://youtube.com/shorts/dQw4w9WgXcQ?feature=share",
        "Check https://youtu.be/dQw4w9WgXcQ out",
    ];
    for input in inputs {
        let m = detect_video_provider(input, &ctx()).unwrap_or_else(|| panic!("no match: {input}"));
        assert_eq!(m.provider.name(), "YouTube", "{input}");
        assert_eq!(m.video_id, "dQw4w9WgXcQ", "{input}");
        assert_eq!(m.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(
            m.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }
}

#[test]
fn youtube_id_is_eleven_characters() {
    let m = detect_video_provider("https://youtu.be/dQw4w9WgXcQextra", &ctx()).expect("match");
    assert_eq!(m.video_id, "dQw4w9WgXcQ");
    assert!(detect_video_provider("https://youtu.be/short", &ctx()).is_none());
}

#[test]
fn vimeo_has_no_thumbnail() {
    let m = detect_video_provider("https://vimeo.com/76979871", &ctx()).expect("match");
    assert_eq!(m.provider.name(), "Vimeo");
    assert_eq!(m.video_id, "76979871");
    assert_eq!(m.embed_url, "https://player.vimeo.com/video/76979871");
    assert!(m.thumbnail_url.is_none());

    let player = detect_video_provider("https://player.vimeo.com/video/76979871", &ctx()).expect("match");
    assert_eq!(player.video_id, "76979871");
}

#[test]
fn dailymotion_short_and_long_links() {
    let m = detect_video_provider("https://dai.ly/x7tgad0", &ctx()).expect("match");
    assert_eq!(m.provider.name(), "Dailymotion");
    assert_eq!(m.video_id, "x7tgad0");
    assert_eq!(m.embed_url, "https://www.dailymotion.com/embed/video/x7tgad0");

    let long = detect_video_provider("https://www.dailymotion.com/video/x7tgad0", &ctx()).expect("match");
    assert_eq!(long.video_id, "x7tgad0");
}

#[test]
fn twitch_clip_embed_carries_parent_host() {
    let m = detect_video_provider("https://clips.twitch.tv/FunnyClipName", &ctx()).expect("match");
    assert_eq!(m.provider.name(), "Twitch");
    assert_eq!(m.video_id, "FunnyClipName");
    assert!(m
        .embed_url
        .starts_with("https://clips.twitch.tv/embed?clip=FunnyClipName&parent="));
    assert!(m.embed_url.ends_with("journal.example.com"));

    let channel = detect_video_provider("https://www.twitch.tv/somestreamer/clip/Other-Clip_1", &ctx())
        .expect("match");
    assert_eq!(channel.provider.key(), "twitch-clip");
    assert_eq!(channel.video_id, "Other-Clip_1");
}

#[test]
fn twitch_video_is_a_separate_entry() {
    let m = detect_video_provider("https://www.twitch.tv/videos/123456", &ctx()).expect("match");
    assert_eq!(m.provider.name(), "Twitch");
    assert_eq!(m.provider.key(), "twitch-video");
    assert_eq!(
        m.embed_url,
        "https://player.twitch.tv/?video=123456&parent=journal.example.com"
    );

    let clip = detect_video_provider("https://clips.twitch.tv/FunnyClipName", &ctx()).expect("match");
    assert_eq!(clip.provider.name(), m.provider.name());
    assert_ne!(clip.provider, m.provider);
}

#[test]
fn host_only_changes_twitch_urls() {
    let a = EmbedContext::new("a.example");
    let b = EmbedContext::new("b.example");

    let yt_a = detect_video_provider("https://youtu.be/dQw4w9WgXcQ", &a).expect("match");
    let yt_b = detect_video_provider("https://youtu.be/dQw4w9WgXcQ", &b).expect("match");
    assert_eq!(yt_a, yt_b);

    let tw_a = detect_video_provider("https://www.twitch.tv/videos/1", &a).expect("match");
    let tw_b = detect_video_provider("https://www.twitch.tv/videos/1", &b).expect("match");
    assert_ne!(tw_a.embed_url, tw_b.embed_url);
}

#[test]
fn non_video_inputs() {
    for input in [
        "",
        "hello world",
        "https://example.com/page",
        "https://vimeo.com/channels/staffpicks",
        "youtube",
    ] {
        assert!(detect_video_provider(input, &ctx()).is_none(), "{input}");
        assert!(!is_video_url(input), "{input}");
    }
}

#[test]
fn detection_is_repeatable() {
    let input = "https://clips.twitch.tv/FunnyClipName";
    assert_eq!(
        detect_video_provider(input, &ctx()),
        detect_video_provider(input, &ctx())
    );
}

#[test]
fn configured_providers_come_after_builtins() {
    let custom = vec![
        CustomProvider {
            key: "peertube".to_string(),
            name: "PeerTube".to_string(),
            patterns: vec![r"framatube\.org/w/([a-zA-Z0-9]+)".to_string()],
            embed_url: UrlTemplate::new("https://framatube.org/videos/embed/{id}"),
            thumbnail_url: None,
            color: None,
        },
        CustomProvider {
            key: "anything-youtube".to_string(),
            name: "Shadow".to_string(),
            patterns: vec![r"youtu\.be/(\w+)".to_string()],
            embed_url: UrlTemplate::new("https://shadow.example/{id}"),
            thumbnail_url: None,
            color: None,
        },
    ];
    let registry = ProviderRegistry::with_custom(&custom).expect("registry");
    assert_eq!(registry.len(), 7);

    let peertube = registry
        .detect("https://framatube.org/w/kkGMgK9ZtnKfYAgnEtQxbv", &ctx())
        .expect("match");
    assert_eq!(peertube.embed_url, "https://framatube.org/videos/embed/kkGMgK9ZtnKfYAgnEtQxbv");

    let yt = registry.detect("https://youtu.be/dQw4w9WgXcQ", &ctx()).expect("match");
    assert_eq!(yt.provider.key(), "youtube");
}

#[test]
fn configured_provider_errors() {
    let base = CustomProvider {
        key: "custom".to_string(),
        name: "Custom".to_string(),
        patterns: vec![r"custom\.tv/(\d+)".to_string()],
        embed_url: UrlTemplate::new("https://custom.tv/embed/{id}"),
        thumbnail_url: None,
        color: None,
    };

    let duplicate = CustomProvider {
        key: "vimeo".to_string(),
        ..base.clone()
    };
    assert!(matches!(
        ProviderRegistry::with_custom(&[duplicate]),
        Err(VidlinkError::DuplicateProvider(_))
    ));

    let no_group = CustomProvider {
        patterns: vec![r"custom\.tv/\d+".to_string()],
        ..base.clone()
    };
    assert!(matches!(
        ProviderRegistry::with_custom(&[no_group]),
        Err(VidlinkError::MissingCaptureGroup { .. })
    ));

    let bad_regex = CustomProvider {
        patterns: vec![r"custom\.tv/(\d+".to_string()],
        ..base
    };
    assert!(matches!(
        ProviderRegistry::with_custom(&[bad_regex]),
        Err(VidlinkError::InvalidPattern { .. })
    ));
}
