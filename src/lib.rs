pub mod config;
pub mod dashboard;
pub mod error;
pub mod feedback;
pub mod http;
pub mod media;
pub mod report;
pub mod scores;
pub mod session;

pub use config::Config;
pub use dashboard::{Dashboard, DashboardView, DeviceState, ExportedReport};
pub use error::DashboardError;
pub use feedback::{FeedbackCategory, FeedbackItem, FeedbackPriority};
pub use http::{create_router, AppState};
pub use media::{MediaConstraints, MediaSource, MediaStream, MediaTrack, TrackKind};
pub use report::{AnalysisReport, ReportExporter};
pub use scores::{overall_score, EmotionScores, ScoreGenerator};
pub use session::{HistoryPoint, InterviewSession, SessionConfig, SessionSnapshot, SessionState};
