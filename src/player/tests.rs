use super::*;
use std::thread;
use std::time::Duration;

#[test]
fn silent_player_clock_runs_only_while_playing() {
    let mut p = SilentPlayer::new();
    assert_eq!(p.position(), Duration::ZERO);

    // Nothing loaded: play is ignored.
    p.play();
    thread::sleep(Duration::from_millis(5));
    assert_eq!(p.position(), Duration::ZERO);

    p.load("focus1.wav").unwrap();
    p.play();
    thread::sleep(Duration::from_millis(20));
    p.pause();
    let paused_at = p.position();
    assert!(paused_at >= Duration::from_millis(20));

    thread::sleep(Duration::from_millis(10));
    assert_eq!(p.position(), paused_at);

    p.stop();
    assert_eq!(p.position(), Duration::ZERO);
    assert!(p.poll_event().is_none());
}

#[test]
fn boxed_player_forwards_calls() {
    let mut p: Box<dyn MediaPlayer> = Box::new(SilentPlayer::new());
    p.load("relax1.wav").unwrap();
    p.play();
    p.stop();
    assert_eq!(p.position(), Duration::ZERO);
}

#[test]
fn load_error_messages_name_the_resource() {
    let e = LoadError::NotFound("sleep2.wav".into());
    assert_eq!(e.to_string(), "no audio file found for `sleep2.wav`");

    let e = LoadError::Decode {
        path: "/tmp/x.wav".into(),
        reason: "unrecognized format".into(),
    };
    assert_eq!(e.to_string(), "failed to decode /tmp/x.wav: unrecognized format");
}
