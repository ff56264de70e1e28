use serde::Serialize;

use super::dashboard::DeviceState;
use crate::feedback::{FeedbackItem, EMPTY_STATE_MESSAGE};
use crate::scores::EmotionScores;
use crate::session::HistoryPoint;

/// Colour band for a score card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLevel {
    Good,
    Fair,
    Poor,
}

impl ScoreLevel {
    /// Inverted cards (stress) treat low values as good
    pub fn for_score(score: f64, inverted: bool) -> Self {
        let normalized = if inverted { 100.0 - score } else { score };
        if normalized >= 70.0 {
            ScoreLevel::Good
        } else if normalized >= 50.0 {
            ScoreLevel::Fair
        } else {
            ScoreLevel::Poor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub title: &'static str,
    pub score: u8,
    pub inverted: bool,
    pub level: ScoreLevel,
}

impl ScoreCard {
    fn new(title: &'static str, score: f64, inverted: bool) -> Self {
        Self {
            title,
            score: round_score(score),
            inverted,
            level: ScoreLevel::for_score(score, inverted),
        }
    }
}

/// One timeline sample, rounded for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time: u64,
    pub label: String,
    pub confidence: u8,
    pub enthusiasm: u8,
    pub stress: u8,
    pub positivity: u8,
}

impl From<&HistoryPoint> for ChartPoint {
    fn from(point: &HistoryPoint) -> Self {
        Self {
            time: point.elapsed_secs,
            label: format_timeline_label(point.elapsed_secs),
            confidence: round_score(point.scores.confidence),
            enthusiasm: round_score(point.scores.enthusiasm),
            stress: round_score(point.scores.stress),
            positivity: round_score(point.scores.positivity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoPanel {
    pub stream_bound: bool,
    pub camera_enabled: bool,
    pub microphone_enabled: bool,
}

/// Everything the dashboard shows, derived from session state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// "LIVE" or "STANDBY"
    pub status: &'static str,
    /// MM:SS
    pub elapsed: String,
    pub score_cards: Vec<ScoreCard>,
    pub overall_score: u8,
    pub timeline: Vec<ChartPoint>,
    pub feedback: Vec<FeedbackItem>,
    pub empty_message: Option<&'static str>,
    pub live_analysis_active: bool,
    pub export_enabled: bool,
    pub video: VideoPanel,
}

impl DashboardView {
    pub fn render<'a>(
        is_recording: bool,
        duration_secs: u64,
        scores: &EmotionScores,
        history: impl IntoIterator<Item = &'a HistoryPoint>,
        feedback: Vec<FeedbackItem>,
        devices: DeviceState,
    ) -> Self {
        let empty_message = feedback.is_empty().then_some(EMPTY_STATE_MESSAGE);

        Self {
            status: if is_recording { "LIVE" } else { "STANDBY" },
            elapsed: format_clock(duration_secs),
            score_cards: vec![
                ScoreCard::new("Confidence", scores.confidence, false),
                ScoreCard::new("Enthusiasm", scores.enthusiasm, false),
                ScoreCard::new("Stress", scores.stress, true),
                ScoreCard::new("Positivity", scores.positivity, false),
            ],
            overall_score: scores.overall(),
            timeline: history.into_iter().map(ChartPoint::from).collect(),
            feedback,
            empty_message,
            live_analysis_active: is_recording,
            export_enabled: !is_recording,
            video: VideoPanel {
                stream_bound: devices.stream_bound,
                camera_enabled: devices.camera_enabled,
                microphone_enabled: devices.microphone_enabled,
            },
        }
    }
}

/// Header clock: zero-padded `MM:SS`
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Chart axis: `M:SS`
pub fn format_timeline_label(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn round_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devices() -> DeviceState {
        DeviceState {
            camera_enabled: true,
            microphone_enabled: true,
            stream_bound: false,
        }
    }

    #[test]
    fn test_clock_formats() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_timeline_label(75), "1:15");
        assert_eq!(format_timeline_label(9), "0:09");
    }

    #[test]
    fn test_stress_card_is_inverted() {
        assert_eq!(ScoreLevel::for_score(20.0, true), ScoreLevel::Good);
        assert_eq!(ScoreLevel::for_score(45.0, true), ScoreLevel::Fair);
        assert_eq!(ScoreLevel::for_score(80.0, true), ScoreLevel::Poor);
        assert_eq!(ScoreLevel::for_score(20.0, false), ScoreLevel::Poor);
    }

    #[test]
    fn test_idle_view_shows_empty_state() {
        let view = DashboardView::render(
            false,
            0,
            &EmotionScores::zero(),
            std::iter::empty(),
            Vec::new(),
            devices(),
        );

        assert_eq!(view.status, "STANDBY");
        assert_eq!(view.elapsed, "00:00");
        assert_eq!(view.empty_message, Some(EMPTY_STATE_MESSAGE));
        assert!(view.export_enabled);
        assert!(!view.live_analysis_active);
    }

    #[test]
    fn test_timeline_rounds_values() {
        let history = [HistoryPoint {
            elapsed_secs: 61,
            scores: EmotionScores::new(55.4, 55.5, 20.49, 99.9),
        }];

        let view = DashboardView::render(
            true,
            61,
            &history[0].scores,
            history.iter(),
            Vec::new(),
            devices(),
        );

        let point = &view.timeline[0];
        assert_eq!(view.status, "LIVE");
        assert_eq!(point.label, "1:01");
        assert_eq!(
            (point.confidence, point.enthusiasm, point.stress, point.positivity),
            (55, 56, 20, 100)
        );
        assert!(!view.export_enabled);
    }
}
