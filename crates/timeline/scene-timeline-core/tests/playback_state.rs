use scene_timeline_core::{create_timeline, Playback, PlaybackStatus, Tick, TimelineError};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn play_pause_stop_cycle() {
    let tl = create_timeline("p").seek(3.0);
    assert_eq!(tl.playback().status, PlaybackStatus::Stopped);

    let tl = tl.play();
    assert!(tl.is_playing());
    assert_eq!(tl.current_time(), 3.0);

    let tl = tl.pause();
    assert_eq!(tl.playback().status, PlaybackStatus::Paused);
    assert_eq!(tl.current_time(), 3.0);

    let tl = tl.stop();
    assert_eq!(tl.playback().status, PlaybackStatus::Stopped);
    assert_eq!(tl.current_time(), 0.0);
}

#[test]
fn pause_when_not_playing_is_a_no_op() {
    let tl = create_timeline("p");
    assert_eq!(tl.pause().playback(), tl.playback());
}

#[test]
fn ticks_scale_by_rate() {
    let tl = create_timeline("p").with_playback_rate(2.0).unwrap().play();
    let (tl, tick) = tl.tick(0.5);
    assert_eq!(tick, Tick::Advanced);
    assert!(approx(tl.current_time(), 1.0));
}

#[test]
fn idle_ticks_change_nothing() {
    let tl = create_timeline("p").seek(2.0);
    let (next, tick) = tl.tick(1.0);
    assert_eq!(tick, Tick::Idle);
    assert_eq!(next.current_time(), 2.0);
}

#[test]
fn looping_wraps_past_the_end() {
    let tl = create_timeline("p").with_loop(true).seek(9.0).play();
    let (tl, tick) = tl.tick(2.0);
    assert_eq!(tick, Tick::Looped);
    assert!(approx(tl.current_time(), 1.0));
    assert!(tl.is_playing());
}

#[test]
fn non_looping_stops_at_the_end() {
    let tl = create_timeline("p").seek(9.0).play();
    let (tl, tick) = tl.tick(2.0);
    assert_eq!(tick, Tick::Ended);
    assert_eq!(tl.current_time(), 10.0);
    assert_eq!(tl.playback().status, PlaybackStatus::Paused);

    // Further ticks do nothing until playback is restarted.
    let (tl, tick) = tl.tick(1.0);
    assert_eq!(tick, Tick::Idle);
    assert_eq!(tl.current_time(), 10.0);
}

#[test]
fn landing_exactly_on_duration_counts_as_end() {
    let tl = create_timeline("p").seek(9.5).play();
    let (tl, tick) = tl.tick(0.5);
    assert_eq!(tick, Tick::Ended);
    assert_eq!(tl.current_time(), 10.0);

    let looping = create_timeline("p").with_loop(true).seek(9.5).play();
    let (looping, tick) = looping.tick(0.5);
    assert_eq!(tick, Tick::Looped);
    assert_eq!(looping.current_time(), 0.0);
}

#[test]
fn bad_deltas_count_as_zero() {
    let tl = create_timeline("p").seek(1.0).play();
    for dt in [-1.0, f64::NAN, f64::INFINITY] {
        let (next, tick) = tl.tick(dt);
        assert_eq!(tick, Tick::Advanced);
        assert_eq!(next.current_time(), 1.0);
    }
}

#[test]
fn seek_clamps_into_range() {
    let tl = create_timeline("p");
    assert_eq!(tl.seek(-2.0).current_time(), 0.0);
    assert_eq!(tl.seek(25.0).current_time(), 10.0);
    assert_eq!(tl.seek(f64::NAN).current_time(), 0.0);
    assert_eq!(tl.seek(4.5).current_time(), 4.5);
}

#[test]
fn seek_keeps_status() {
    let tl = create_timeline("p").play().seek(4.0);
    assert!(tl.is_playing());
}

#[test]
fn rates_must_be_positive() {
    let tl = create_timeline("p");
    for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            tl.with_playback_rate(rate),
            Err(TimelineError::InvalidPlaybackRate { .. })
        ));
    }
    assert!(Playback::new(0.5, false).is_ok());
    assert!(Playback::new(0.0, false).is_err());
}

#[test]
fn playback_json_shape() {
    let p = Playback::default().play();
    let json = serde_json::to_value(p).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "status": "playing",
            "currentTime": 0.0,
            "playbackRate": 1.0,
            "loop": false
        })
    );
}
