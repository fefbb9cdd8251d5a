use std::time::Duration;

use super::mock::MockBackend;
use super::*;
use crate::library::Track;
use crate::playlist::{EndOfTrack, PlaylistState, TransportAction};

const FALLBACK: Duration = Duration::from_secs(30);

fn t(title: &str) -> Track {
    Track {
        title: title.into(),
        artist: "Artist".into(),
        album: "Album".into(),
        duration: None,
        preview: format!("https://cdn.example.com/{title}.mp3"),
        link: format!("https://example.com/{title}"),
        album_cover: None,
    }
}

fn src(title: &str) -> String {
    format!("https://cdn.example.com/{title}.mp3")
}

fn driver() -> PlaybackDriver<MockBackend> {
    PlaybackDriver::new(MockBackend::new(), FALLBACK)
}

#[test]
fn empty_playlist_keeps_driver_idle() {
    let mut d = driver();
    assert_eq!(d.sync(&PlaylistState::new()), SyncOutcome::Settled);
    assert_eq!(d.state(), DriverState::Idle);
    assert!(d.backend().log().is_empty());
}

#[test]
fn loading_a_track_opens_one_paused_voice() {
    let mut d = driver();
    let mut track = t("a");
    track.duration = Some(42.0);
    let s = PlaylistState::with_tracks(vec![track], 0, false);

    d.sync(&s);
    assert_eq!(d.state(), DriverState::Paused);
    assert_eq!(d.bound_source(), Some(src("a").as_str()));
    assert_eq!(d.info().duration, Duration::from_secs(42));
    assert_eq!(d.info().elapsed, Duration::ZERO);
    assert_eq!(d.backend().live(), 1);
    assert_eq!(d.backend().log(), vec![format!("open {}", src("a"))]);
}

#[test]
fn play_flag_starts_and_pauses_without_reopening() {
    let mut d = driver();
    let mut s = PlaylistState::with_tracks(vec![t("a")], 0, false);
    d.sync(&s);

    s.apply_transport(TransportAction::Play);
    d.sync(&s);
    assert_eq!(d.state(), DriverState::Playing);

    s.apply_transport(TransportAction::Pause);
    d.sync(&s);
    assert_eq!(d.state(), DriverState::Paused);

    assert_eq!(
        d.backend().log(),
        vec![
            format!("open {}", src("a")),
            format!("play {}", src("a")),
            format!("pause {}", src("a")),
        ]
    );
    assert_eq!(d.backend().live(), 1);
}

#[test]
fn changing_track_releases_old_voice_first() {
    let mut d = driver();
    let mut s = PlaylistState::with_tracks(vec![t("a"), t("b")], 0, true);
    d.sync(&s);
    d.backend().clear_log();

    s.apply_transport(TransportAction::Next);
    d.sync(&s);
    assert_eq!(
        d.backend().log(),
        vec![
            format!("stop {}", src("a")),
            format!("open {}", src("b")),
            format!("play {}", src("b")),
        ]
    );
    assert_eq!(d.backend().live(), 1);
    assert_eq!(d.info().index, Some(1));
}

#[test]
fn removing_current_track_rebinds_even_with_same_source() {
    let mut d = driver();
    // Two entries share a source; removing the current one must still
    // discard the handle and start over from zero.
    let mut s = PlaylistState::with_tracks(vec![t("a"), t("a")], 1, true);
    d.sync(&s);
    d.backend().clear_log();

    s.remove_at(1);
    d.sync(&s);
    assert_eq!(
        d.backend().log(),
        vec![format!("stop {}", src("a")), format!("open {}", src("a"))]
    );
    assert_eq!(d.state(), DriverState::Paused);
}

#[test]
fn removing_track_before_current_keeps_voice() {
    let mut d = driver();
    let mut s = PlaylistState::with_tracks(vec![t("a"), t("b")], 1, true);
    d.sync(&s);
    d.backend().clear_log();

    s.remove_at(0);
    d.sync(&s);
    assert!(d.backend().log().is_empty());
    assert_eq!(d.info().index, Some(0));
    assert_eq!(d.state(), DriverState::Playing);
}

#[test]
fn clearing_goes_idle_and_releases() {
    let mut d = driver();
    let mut s = PlaylistState::with_tracks(vec![t("a")], 0, true);
    d.sync(&s);

    s.clear();
    d.sync(&s);
    assert_eq!(d.state(), DriverState::Idle);
    assert_eq!(d.backend().live(), 0);
    assert_eq!(d.info().index, None);
}

#[test]
fn start_failure_is_contained() {
    let mut d = driver();
    d.backend().refuse(&src("a"));
    let s = PlaylistState::with_tracks(vec![t("a")], 0, true);

    assert_eq!(d.sync(&s), SyncOutcome::StartFailed);
    assert_eq!(d.state(), DriverState::Paused);
    assert!(!d.info().playing);
}

#[test]
fn voice_events_update_info_and_report_end() {
    let mut d = driver();
    let mut s = PlaylistState::with_tracks(vec![t("only")], 0, true);
    d.sync(&s);

    d.backend().emit(VoiceEvent::Loaded {
        duration: Some(Duration::from_secs(29)),
    });
    d.backend().emit(VoiceEvent::Progress {
        elapsed: Duration::from_secs(3),
    });
    assert_eq!(d.poll(), PollOutcome::Quiet);
    assert_eq!(d.info().duration, Duration::from_secs(29));
    assert_eq!(d.info().elapsed, Duration::from_secs(3));

    d.backend().emit(VoiceEvent::Ended);
    assert_eq!(d.poll(), PollOutcome::Ended);

    s.finish_current(EndOfTrack::Stop);
    d.sync(&s);
    assert_eq!(d.state(), DriverState::Paused);
    assert_eq!(d.info().elapsed, Duration::ZERO);
    assert_eq!(d.backend().live(), 1);
}

#[test]
fn dropping_the_driver_releases_the_voice() {
    let backend = MockBackend::new();
    {
        let mut d = PlaybackDriver::new(backend.clone(), FALLBACK);
        d.sync(&PlaylistState::with_tracks(vec![t("a")], 0, true));
        assert_eq!(backend.live(), 1);
    }
    assert_eq!(backend.live(), 0);
}

#[test]
fn silent_voice_reports_length_then_ends() {
    let mut backend = SilentBackend::new(Duration::ZERO);
    let mut v = backend.open("https://cdn.example.com/x.mp3");

    assert_eq!(
        v.poll(),
        vec![VoiceEvent::Loaded {
            duration: Some(Duration::ZERO)
        }]
    );

    v.play().unwrap();
    let events = v.poll();
    assert!(events.contains(&VoiceEvent::Ended));
    assert!(v.poll().is_empty());
}

#[test]
fn silent_voice_does_not_advance_while_paused() {
    let mut backend = SilentBackend::new(Duration::from_secs(60));
    let mut v = backend.open("https://cdn.example.com/x.mp3");
    v.poll();
    assert!(v.poll().is_empty());

    v.play().unwrap();
    v.pause();
    assert!(v.poll().is_empty());
}

#[test]
fn late_load_failure_leaves_driver_paused() {
    let mut d = driver();
    let s = PlaylistState::with_tracks(vec![t("a")], 0, true);
    d.sync(&s);
    assert_eq!(d.state(), DriverState::Playing);

    d.backend().emit(VoiceEvent::Failed {
        reason: "HTTP 404".into(),
    });
    assert_eq!(d.poll(), PollOutcome::Failed);
    assert_eq!(d.state(), DriverState::Paused);
    assert!(!d.info().playing);
    assert_eq!(d.backend().live(), 1);
}
