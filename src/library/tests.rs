use super::*;

fn track(title: &str) -> Track {
    Track {
        title: title.into(),
        artist: "SoundHelix".into(),
        album: "Demo Album".into(),
        duration: Some(30.0),
        preview: format!("https://www.soundhelix.com/examples/mp3/{title}.mp3"),
        link: format!("https://www.soundhelix.com/examples/mp3/{title}.mp3"),
        album_cover: Some("https://picsum.photos/seed/1/256".into()),
    }
}

#[test]
fn track_wire_format_is_camel_case() {
    let json = r#"{
        "title": "Song 1",
        "artist": "SoundHelix",
        "album": "Demo Album",
        "duration": 30,
        "preview": "https://example.com/1.mp3",
        "link": "https://example.com/1",
        "albumCover": "https://example.com/1.jpg"
    }"#;
    let t: Track = serde_json::from_str(json).unwrap();
    assert_eq!(t.album_cover.as_deref(), Some("https://example.com/1.jpg"));
    assert_eq!(t.length(), Some(std::time::Duration::from_secs(30)));

    let back = serde_json::to_value(&t).unwrap();
    assert!(back.get("albumCover").is_some());
    assert!(back.get("album_cover").is_none());
}

#[test]
fn track_without_preview_is_rejected_by_serde() {
    let json = r#"{"title":"x","artist":"y","album":"z","link":"https://example.com"}"#;
    assert!(serde_json::from_str::<Track>(json).is_err());
}

#[test]
fn validate_accepts_http_and_file_previews() {
    assert!(validate_track(&track("ok")).is_ok());

    let mut local = track("local");
    local.preview = "file:///tmp/music/local.mp3".into();
    assert!(validate_track(&local).is_ok());
}

#[test]
fn validate_rejects_bad_locators_and_durations() {
    let mut t = track("bad");
    t.preview = "not a uri".into();
    assert!(matches!(
        validate_track(&t),
        Err(crate::error::Error::InvalidTrack { field: "preview", .. })
    ));

    let mut t = track("ftp");
    t.preview = "ftp://example.com/a.mp3".into();
    assert!(validate_track(&t).is_err());

    let mut t = track("cover");
    t.album_cover = Some("::".into());
    assert!(validate_track(&t).is_err());

    let mut t = track("neg");
    t.duration = Some(-1.0);
    assert!(validate_track(&t).is_err());

    let mut t = track("nan");
    t.duration = Some(f64::NAN);
    assert!(validate_track(&t).is_err());
}

#[test]
fn validate_tracks_fails_on_any_bad_entry() {
    let mut bad = track("bad");
    bad.link = "".into();
    assert!(validate_tracks(&[track("a"), bad, track("c")]).is_err());
    assert!(validate_tracks(&[]).is_ok());
}

#[test]
fn format_duration_renders_minutes_and_seconds() {
    assert_eq!(format_duration(Some(30.0)), "0:30");
    assert_eq!(format_duration(Some(185.9)), "3:05");
    assert_eq!(format_duration(None), "");
    assert_eq!(format_duration(Some(0.0)), "");
}

#[test]
fn render_songs_handles_empty_list() {
    let lines = render_songs(&[], &DisplayOptions::default());
    assert_eq!(lines, vec!["No songs to display".to_string()]);
}

#[test]
fn render_songs_respects_flags_and_size() {
    let songs: Vec<Song> = [track("a"), track("b")].iter().map(Song::from).collect();

    let opts = DisplayOptions {
        show_duration: false,
        show_link: false,
        size: DisplaySize::Small,
        heading: Some("Results".into()),
    };
    let lines = render_songs(&songs, &opts);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Results");
    assert_eq!(lines[1], " 0. a - SoundHelix");

    let opts = DisplayOptions {
        size: DisplaySize::Large,
        ..DisplayOptions::default()
    };
    let lines = render_songs(&songs[..1], &opts);
    assert!(lines[0].contains("0:30"));
    assert!(lines[0].contains("https://www.soundhelix.com/examples/mp3/a.mp3"));
    assert!(lines.iter().any(|l| l.contains("cover:")));
}

#[test]
fn durations_past_duration_max_are_refused() {
    let mut t = track("huge");
    t.duration = Some(1e300);
    assert!(matches!(
        validate_track(&t),
        Err(crate::error::Error::InvalidTrack { field: "duration", .. })
    ));
    assert_eq!(t.length(), None);

    t.duration = Some(f64::MAX);
    assert!(validate_track(&t).is_err());
    assert_eq!(t.length(), None);

    t.duration = Some(f64::INFINITY);
    assert_eq!(t.length(), None);

    // Long but representable lengths are fine.
    t.duration = Some(86_400.0 * 365.0);
    assert!(validate_track(&t).is_ok());
    assert!(t.length().is_some());
}
