//! Error types for dashboard controls

use thiserror::Error;

/// Errors surfaced by dashboard controls
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Report export is disabled while recording")]
    RecordingActive,

    #[error("Failed to export report: {0}")]
    Export(#[source] anyhow::Error),
}
