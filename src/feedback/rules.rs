use serde::{Deserialize, Serialize};

use crate::scores::EmotionScores;

/// Shown in place of the list when no rule fires
pub const EMPTY_STATE_MESSAGE: &str = "Start your interview to receive real-time feedback";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Issue,
    Strength,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackPriority {
    High,
    Medium,
    Low,
}

/// A single piece of feedback shown in the feedback panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub category: FeedbackCategory,
    pub priority: FeedbackPriority,
    pub message: String,
}

struct Rule {
    applies: fn(&EmotionScores) -> bool,
    category: FeedbackCategory,
    priority: FeedbackPriority,
    message: &'static str,
}

// Display order
const RULES: &[Rule] = &[
    Rule {
        applies: |s| s.confidence < 40.0,
        category: FeedbackCategory::Issue,
        priority: FeedbackPriority::High,
        message: "Low confidence detected. Try speaking more assertively.",
    },
    Rule {
        applies: |s| s.confidence > 75.0,
        category: FeedbackCategory::Strength,
        priority: FeedbackPriority::Low,
        message: "Great confidence level! Keep it up.",
    },
    Rule {
        applies: |s| s.enthusiasm < 35.0,
        category: FeedbackCategory::Suggestion,
        priority: FeedbackPriority::Medium,
        message: "Consider showing more enthusiasm in your responses.",
    },
    Rule {
        applies: |s| s.stress > 70.0,
        category: FeedbackCategory::Issue,
        priority: FeedbackPriority::High,
        message: "High stress levels detected. Take deep breaths.",
    },
    Rule {
        applies: |s| s.positivity > 70.0,
        category: FeedbackCategory::Strength,
        priority: FeedbackPriority::Low,
        message: "Excellent positive energy!",
    },
    Rule {
        applies: |s| s.confidence > 60.0 && s.enthusiasm > 60.0 && s.stress < 40.0,
        category: FeedbackCategory::Strength,
        priority: FeedbackPriority::Low,
        message: "Strong overall performance across all metrics.",
    },
];

/// Evaluate every rule against the scores, in display order
pub fn evaluate(scores: &EmotionScores) -> Vec<FeedbackItem> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(scores))
        .map(|rule| FeedbackItem {
            category: rule.category,
            priority: rule.priority,
            message: rule.message.to_string(),
        })
        .collect()
}

/// Just the message strings, as written into exported reports
pub fn messages(items: &[FeedbackItem]) -> Vec<String> {
    items.iter().map(|item| item.message.clone()).collect()
}
