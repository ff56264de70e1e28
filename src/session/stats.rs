use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scores::EmotionScores;

/// Point-in-time status of an interview session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,

    /// Whether recording is currently active
    pub is_recording: bool,

    /// When the most recent recording started
    pub started_at: Option<DateTime<Utc>>,

    /// Elapsed recording time in seconds
    pub duration_secs: u64,

    /// Latest sampled scores
    pub current_scores: EmotionScores,

    pub overall_score: u8,

    /// Number of samples in the history window
    pub history_len: usize,
}
