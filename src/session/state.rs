use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::SessionConfig;
use super::history::{HistoryPoint, HistoryWindow};
use super::stats::SessionSnapshot;
use crate::feedback::{self, FeedbackItem};
use crate::scores::{EmotionScores, ScoreGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingPhase {
    Idle,
    Recording,
}

/// Session state machine, without any scheduling
///
/// `InterviewSession` wraps this with the tick task; tests and the headless
/// simulator drive it directly.
#[derive(Debug)]
pub struct SessionState {
    session_id: String,
    phase: RecordingPhase,
    duration_secs: u64,
    current_scores: EmotionScores,
    history: HistoryWindow,
    started_at: Option<DateTime<Utc>>,
    reset_duration_on_start: bool,
    generator: ScoreGenerator,
    rng: StdRng,
}

impl SessionState {
    pub fn new(config: &SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            session_id: config.session_id.clone(),
            phase: RecordingPhase::Idle,
            duration_secs: 0,
            current_scores: EmotionScores::zero(),
            history: HistoryWindow::new(config.history_capacity),
            started_at: None,
            reset_duration_on_start: config.reset_duration_on_start,
            generator: ScoreGenerator::default(),
            rng,
        }
    }

    /// Idle -> Recording. Returns false if already recording.
    ///
    /// Reseeds the current scores with baseline values. Duration and history
    /// carry over unless `reset_duration_on_start` is set, in which case both
    /// are cleared so the timeline stays ordered.
    pub fn start(&mut self) -> bool {
        if self.is_recording() {
            return false;
        }

        if self.reset_duration_on_start {
            self.duration_secs = 0;
            self.history = HistoryWindow::new(self.history.capacity());
        }

        self.current_scores = self.generator.baseline(&mut self.rng);
        self.phase = RecordingPhase::Recording;
        self.started_at = Some(Utc::now());
        true
    }

    /// Recording -> Idle. Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_recording() {
            return false;
        }
        self.phase = RecordingPhase::Idle;
        true
    }

    /// Advance one sample. No-op while idle.
    pub fn tick(&mut self) -> Option<HistoryPoint> {
        if !self.is_recording() {
            return None;
        }

        let next = self.generator.next_scores(&self.current_scores, &mut self.rng);
        self.duration_secs += 1;

        let point = HistoryPoint {
            elapsed_secs: self.duration_secs,
            scores: next,
        };
        self.history.push(point);
        self.current_scores = next;

        debug!(
            "Tick {} for {}: overall {}",
            self.duration_secs,
            self.session_id,
            next.overall()
        );

        Some(point)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn phase(&self) -> RecordingPhase {
        self.phase
    }

    pub fn is_recording(&self) -> bool {
        self.phase == RecordingPhase::Recording
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn current_scores(&self) -> EmotionScores {
        self.current_scores
    }

    pub fn history(&self) -> &HistoryWindow {
        &self.history
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn overall_score(&self) -> u8 {
        self.current_scores.overall()
    }

    pub fn feedback(&self) -> Vec<FeedbackItem> {
        feedback::evaluate(&self.current_scores)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id.clone(),
            is_recording: self.is_recording(),
            started_at: self.started_at,
            duration_secs: self.duration_secs,
            current_scores: self.current_scores,
            overall_score: self.overall_score(),
            history_len: self.history.len(),
        }
    }
}
