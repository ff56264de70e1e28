//! Feedback rules derived from the current emotion scores
//!
//! Feedback is never stored: call [`evaluate`] whenever the scores change.

mod rules;

pub use rules::{evaluate, messages, FeedbackCategory, FeedbackItem, FeedbackPriority, EMPTY_STATE_MESSAGE};
