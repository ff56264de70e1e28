//! Emotion scores and the random-walk generator that drives them

mod generator;
mod types;

pub use generator::{PerturbationBounds, ScoreGenerator};
pub use types::{overall_score, EmotionScores, SCORE_MAX, SCORE_MIN};
