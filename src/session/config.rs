use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of samples kept for the timeline (one minute at one tick per second)
pub const DEFAULT_HISTORY_CAPACITY: usize = 60;

/// Configuration for an interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "interview-5f0c...")
    pub session_id: String,

    /// Time between score samples while recording
    /// Default: 1 second
    pub tick_interval: Duration,

    /// Maximum number of samples kept in the history window
    pub history_capacity: usize,

    /// Reset the elapsed clock whenever a new recording starts
    /// Default: false (the clock keeps accumulating across recordings)
    pub reset_duration_on_start: bool,

    /// Seed for the score random walk; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("interview-{}", uuid::Uuid::new_v4()),
            tick_interval: Duration::from_secs(1),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            reset_duration_on_start: false,
            seed: None,
        }
    }
}
