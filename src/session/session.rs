use super::config::SessionConfig;
use super::history::HistoryPoint;
use super::state::SessionState;
use super::stats::SessionSnapshot;
use crate::feedback::FeedbackItem;
use crate::scores::EmotionScores;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{info, warn};

/// An interview session that owns its state machine and the tick task
pub struct InterviewSession {
    /// Session configuration
    config: SessionConfig,

    /// Lifecycle, scores and history
    state: Arc<Mutex<SessionState>>,

    /// Handle for the periodic tick task, present while recording
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl InterviewSession {
    /// Create a new idle session
    pub fn new(config: SessionConfig) -> Self {
        info!("Creating interview session: {}", config.session_id);

        let state = SessionState::new(&config);

        Self {
            config,
            state: Arc::new(Mutex::new(state)),
            ticker: Mutex::new(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.config.session_id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Start recording
    ///
    /// Reseeds the scores and schedules a tick every `tick_interval`.
    pub async fn start(&self) -> SessionSnapshot {
        let mut state = self.state.lock().await;

        if !state.start() {
            warn!("Recording already started");
            return state.snapshot();
        }

        info!("Starting recording: {}", self.config.session_id);

        // Still holding the state lock: a concurrent stop() cannot slip in
        // between the transition and the ticker being stored.
        let mut ticker = self.ticker.lock().await;
        if let Some(stale) = ticker.take() {
            stale.abort();
        }
        *ticker = Some(self.spawn_ticker());

        state.snapshot()
    }

    /// Stop recording
    ///
    /// The tick task is cancelled before this returns; no further tick takes
    /// effect. Duration and history are kept.
    pub async fn stop(&self) -> SessionSnapshot {
        let mut state = self.state.lock().await;

        if !state.stop() {
            warn!("Recording not active");
            return state.snapshot();
        }

        if let Some(task) = self.ticker.lock().await.take() {
            task.abort();
        }

        info!(
            "Recording stopped: {} ({}s elapsed)",
            self.config.session_id,
            state.duration_secs()
        );

        state.snapshot()
    }

    /// Advance one sample immediately. No-op while idle.
    pub async fn tick(&self) -> Option<HistoryPoint> {
        self.state.lock().await.tick()
    }

    /// Stop recording (if active) as part of dashboard teardown
    pub async fn shutdown(&self) {
        if self.is_recording().await {
            self.stop().await;
        } else if let Some(task) = self.ticker.lock().await.take() {
            task.abort();
        }
        info!("Interview session shut down: {}", self.config.session_id);
    }

    pub async fn is_recording(&self) -> bool {
        self.state.lock().await.is_recording()
    }

    /// Get current session status
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn current_scores(&self) -> EmotionScores {
        self.state.lock().await.current_scores()
    }

    /// History window, oldest first
    pub async fn history(&self) -> Vec<HistoryPoint> {
        self.state.lock().await.history().to_vec()
    }

    pub async fn feedback(&self) -> Vec<FeedbackItem> {
        self.state.lock().await.feedback()
    }

    /// Run a closure against the locked state
    pub async fn with_state<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        let state = self.state.lock().await;
        f(&state)
    }

    fn spawn_ticker(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let period = self.config.tick_interval.max(Duration::from_millis(1));

        tokio::spawn(async move {
            // First sample lands one full period after start
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                if state.lock().await.tick().is_none() {
                    break;
                }
            }
        })
    }
}

impl Drop for InterviewSession {
    fn drop(&mut self) {
        if let Some(task) = self.ticker.get_mut().take() {
            task.abort();
        }
    }
}
