// Integration tests for the interview session lifecycle
//
// These tests drive the tick task on a paused tokio clock, so a
// "second" of recording costs no wall-clock time.

use interview_dashboard::scores::EmotionScores;
use interview_dashboard::session::{InterviewSession, SessionConfig, SessionState};
use std::time::Duration;
use tokio::time::sleep;

fn seeded(seed: u64) -> SessionConfig {
    SessionConfig {
        session_id: "test-interview".to_string(),
        seed: Some(seed),
        ..SessionConfig::default()
    }
}

fn in_range(scores: &EmotionScores) -> bool {
    [scores.confidence, scores.enthusiasm, scores.stress, scores.positivity]
        .iter()
        .all(|v| (0.0..=100.0).contains(v))
}

#[tokio::test(start_paused = true)]
async fn test_recording_ticks_once_per_second() {
    let session = InterviewSession::new(seeded(1));

    session.start().await;
    sleep(Duration::from_millis(3500)).await;

    let snapshot = session.snapshot().await;
    assert!(snapshot.is_recording);
    assert_eq!(snapshot.duration_secs, 3);
    assert_eq!(snapshot.history_len, 3);

    let elapsed: Vec<u64> = session.history().await.iter().map(|p| p.elapsed_secs).collect();
    assert_eq!(elapsed, vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn test_no_tick_fires_after_stop() {
    let session = InterviewSession::new(seeded(2));

    session.start().await;
    sleep(Duration::from_millis(2500)).await;
    let stopped = session.stop().await;
    let scores_at_stop = session.current_scores().await;

    sleep(Duration::from_secs(10)).await;

    let snapshot = session.snapshot().await;
    assert!(!stopped.is_recording);
    assert_eq!(snapshot.duration_secs, 2);
    assert_eq!(snapshot.history_len, 2);
    assert_eq!(session.current_scores().await, scores_at_stop);
}

#[tokio::test(start_paused = true)]
async fn test_restart_keeps_accumulating_duration() {
    let session = InterviewSession::new(seeded(3));

    session.start().await;
    sleep(Duration::from_millis(3500)).await;
    session.stop().await;

    session.start().await;
    sleep(Duration::from_millis(2500)).await;
    session.stop().await;

    let elapsed: Vec<u64> = session.history().await.iter().map(|p| p.elapsed_secs).collect();
    assert_eq!(session.snapshot().await.duration_secs, 5);
    assert_eq!(elapsed, vec![1, 2, 3, 4, 5]);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_ticker() {
    let session = InterviewSession::new(seeded(4));

    session.start().await;
    sleep(Duration::from_millis(1500)).await;
    session.shutdown().await;
    sleep(Duration::from_secs(5)).await;

    let snapshot = session.snapshot().await;
    assert!(!snapshot.is_recording);
    assert_eq!(snapshot.duration_secs, 1);
}

#[tokio::test]
async fn test_tick_while_idle_has_no_effect() {
    let session = InterviewSession::new(seeded(5));

    assert!(session.tick().await.is_none());

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.duration_secs, 0);
    assert_eq!(snapshot.current_scores, EmotionScores::zero());
    assert!(session.history().await.is_empty());
}

#[tokio::test]
async fn test_stop_while_idle_is_noop() {
    let session = InterviewSession::new(seeded(6));

    let snapshot = session.stop().await;

    assert!(!snapshot.is_recording);
    assert_eq!(snapshot.duration_secs, 0);
}

#[tokio::test]
async fn test_start_seeds_baseline_scores() {
    for seed in 0..200 {
        let session = InterviewSession::new(seeded(seed));
        let snapshot = session.start().await;
        let scores = snapshot.current_scores;

        assert!((50.0..70.0).contains(&scores.confidence));
        assert!((40.0..70.0).contains(&scores.enthusiasm));
        assert!((20.0..35.0).contains(&scores.stress));
        assert!((60.0..85.0).contains(&scores.positivity));
        assert_eq!(snapshot.duration_secs, 0);
        assert!(snapshot.started_at.is_some());

        session.shutdown().await;
    }
}

#[test]
fn test_history_keeps_most_recent_sixty() {
    let mut state = SessionState::new(&seeded(7));
    state.start();

    let mut appended = Vec::new();
    for _ in 0..150 {
        let point = state.tick().expect("recording session should tick");
        appended.push(point);
        assert!(state.history().len() <= 60);
    }

    let retained = state.history().to_vec();
    assert_eq!(retained.len(), 60);
    assert_eq!(retained, appended[90..].to_vec());
}

#[test]
fn test_scores_stay_bounded_over_long_run() {
    let mut state = SessionState::new(&seeded(8));
    state.start();

    for _ in 0..5000 {
        let previous = state.current_scores();
        let point = state.tick().expect("recording session should tick");

        assert!(in_range(&point.scores));
        assert!((point.scores.confidence - previous.confidence).abs() <= 5.0);
        assert!((point.scores.enthusiasm - previous.enthusiasm).abs() <= 4.0);
        assert!((point.scores.stress - previous.stress).abs() <= 6.0);
        assert!((point.scores.positivity - previous.positivity).abs() <= 3.0);
    }
}

#[test]
fn test_same_seed_same_walk() {
    let mut a = SessionState::new(&seeded(9));
    let mut b = SessionState::new(&seeded(9));
    a.start();
    b.start();

    for _ in 0..20 {
        assert_eq!(a.tick(), b.tick());
    }
}

#[test]
fn test_overall_score_is_derived_from_current_scores() {
    let mut state = SessionState::new(&seeded(10));
    state.start();
    state.tick();

    assert_eq!(state.overall_score(), state.current_scores().overall());
    assert_eq!(state.snapshot().overall_score, state.overall_score());
}
