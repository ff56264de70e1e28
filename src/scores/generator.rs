use rand::Rng;

use super::types::EmotionScores;

/// Maximum per-tick change for each dimension
///
/// Each tick draws a uniform offset from `[-bound, bound)` per field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationBounds {
    pub confidence: f64,
    pub enthusiasm: f64,
    pub stress: f64,
    pub positivity: f64,
}

impl Default for PerturbationBounds {
    fn default() -> Self {
        Self {
            confidence: 5.0,
            enthusiasm: 4.0,
            stress: 6.0,
            positivity: 3.0,
        }
    }
}

/// Random-walk score generator
///
/// Holds no state of its own: the caller passes in the previous scores and
/// the random source, so the same generator can serve any session.
#[derive(Debug, Clone, Default)]
pub struct ScoreGenerator {
    bounds: PerturbationBounds,
}

impl ScoreGenerator {
    pub fn new(bounds: PerturbationBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &PerturbationBounds {
        &self.bounds
    }

    /// Produce the next sample from the previous one
    pub fn next_scores<R: Rng + ?Sized>(&self, previous: &EmotionScores, rng: &mut R) -> EmotionScores {
        EmotionScores {
            confidence: previous.confidence + perturb(rng, self.bounds.confidence),
            enthusiasm: previous.enthusiasm + perturb(rng, self.bounds.enthusiasm),
            stress: previous.stress + perturb(rng, self.bounds.stress),
            positivity: previous.positivity + perturb(rng, self.bounds.positivity),
        }
        .clamp()
    }

    /// Seed values assigned when a recording starts
    pub fn baseline<R: Rng + ?Sized>(&self, rng: &mut R) -> EmotionScores {
        EmotionScores {
            confidence: rng.gen_range(50.0..70.0),
            enthusiasm: rng.gen_range(40.0..70.0),
            stress: rng.gen_range(20.0..35.0),
            positivity: rng.gen_range(60.0..85.0),
        }
    }
}

fn perturb<R: Rng + ?Sized>(rng: &mut R, bound: f64) -> f64 {
    if bound <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-bound..bound)
}
