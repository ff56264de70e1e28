use serde::{Deserialize, Serialize};

/// Lowest value any emotion score can take
pub const SCORE_MIN: f64 = 0.0;

/// Highest value any emotion score can take
pub const SCORE_MAX: f64 = 100.0;

/// Simulated emotion scores for a single sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    /// How assertive the candidate appears (0-100)
    pub confidence: f64,

    /// How engaged the candidate appears (0-100)
    pub enthusiasm: f64,

    /// Detected stress level (0-100, higher is worse)
    pub stress: f64,

    /// Overall positive energy (0-100)
    pub positivity: f64,
}

impl EmotionScores {
    pub fn new(confidence: f64, enthusiasm: f64, stress: f64, positivity: f64) -> Self {
        Self {
            confidence,
            enthusiasm,
            stress,
            positivity,
        }
    }

    /// All scores at zero, the state of a freshly mounted dashboard
    pub fn zero() -> Self {
        Self::default()
    }

    /// Clamp every field into [0, 100]
    pub fn clamp(self) -> Self {
        Self {
            confidence: clamp_score(self.confidence),
            enthusiasm: clamp_score(self.enthusiasm),
            stress: clamp_score(self.stress),
            positivity: clamp_score(self.positivity),
        }
    }

    /// Combined score where stress counts against the candidate
    pub fn overall(&self) -> u8 {
        overall_score(self)
    }
}

/// round((confidence + enthusiasm + positivity + (100 - stress)) / 4)
pub fn overall_score(scores: &EmotionScores) -> u8 {
    let sum = scores.confidence + scores.enthusiasm + scores.positivity + (SCORE_MAX - scores.stress);
    (sum / 4.0).round().clamp(SCORE_MIN, SCORE_MAX) as u8
}

fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return SCORE_MIN;
    }
    value.clamp(SCORE_MIN, SCORE_MAX)
}
