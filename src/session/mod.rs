//! Interview session management
//!
//! This module provides the `InterviewSession` abstraction that manages:
//! - The Idle/Recording lifecycle
//! - The one-second tick task that advances the scores
//! - The bounded history window that drives the timeline chart
//! - Session snapshots for status reporting

mod config;
mod history;
mod session;
mod state;
mod stats;

pub use config::{SessionConfig, DEFAULT_HISTORY_CAPACITY};
pub use history::{HistoryPoint, HistoryWindow};
pub use session::InterviewSession;
pub use state::{RecordingPhase, SessionState};
pub use stats::SessionSnapshot;
