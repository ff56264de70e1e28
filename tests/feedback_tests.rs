// Tests for the feedback rule engine

use interview_dashboard::feedback::{evaluate, messages, FeedbackCategory, FeedbackPriority};
use interview_dashboard::scores::EmotionScores;

#[test]
fn test_strong_candidate_gets_three_strengths_in_order() {
    let scores = EmotionScores::new(80.0, 65.0, 20.0, 75.0);

    let items = evaluate(&scores);

    assert_eq!(
        messages(&items),
        vec![
            "Great confidence level! Keep it up.",
            "Excellent positive energy!",
            "Strong overall performance across all metrics.",
        ]
    );
    assert!(items
        .iter()
        .all(|i| i.category == FeedbackCategory::Strength && i.priority == FeedbackPriority::Low));
}

#[test]
fn test_struggling_candidate_gets_issues_and_suggestion() {
    let scores = EmotionScores::new(30.0, 20.0, 80.0, 50.0);

    let items = evaluate(&scores);
    let tags: Vec<_> = items.iter().map(|i| (i.category, i.priority)).collect();

    assert_eq!(
        tags,
        vec![
            (FeedbackCategory::Issue, FeedbackPriority::High),
            (FeedbackCategory::Suggestion, FeedbackPriority::Medium),
            (FeedbackCategory::Issue, FeedbackPriority::High),
        ]
    );
    assert_eq!(items[0].message, "Low confidence detected. Try speaking more assertively.");
    assert_eq!(items[2].message, "High stress levels detected. Take deep breaths.");
}

#[test]
fn test_neutral_scores_produce_no_feedback() {
    assert!(evaluate(&EmotionScores::new(50.0, 50.0, 50.0, 50.0)).is_empty());
}

#[test]
fn test_thresholds_are_strict() {
    // Exactly on each threshold: nothing fires
    let scores = EmotionScores::new(40.0, 35.0, 70.0, 70.0);
    assert!(evaluate(&scores).is_empty());

    let scores = EmotionScores::new(75.0, 60.0, 40.0, 50.0);
    assert!(evaluate(&scores).is_empty());
}

#[test]
fn test_evaluate_is_pure() {
    let scores = EmotionScores::new(10.0, 90.0, 90.0, 90.0);
    assert_eq!(evaluate(&scores), evaluate(&scores));
}

#[test]
fn test_feedback_serializes_lowercase_tags() {
    let items = evaluate(&EmotionScores::new(30.0, 50.0, 50.0, 50.0));
    let json = serde_json::to_value(&items).unwrap();

    assert_eq!(json[0]["category"], "issue");
    assert_eq!(json[0]["priority"], "high");
}
