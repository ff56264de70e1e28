use super::state::AppState;
use crate::dashboard::{DashboardView, DeviceState};
use crate::error::DashboardError;
use crate::feedback::FeedbackItem;
use crate::session::{HistoryPoint, SessionSnapshot};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SaveReportResponse {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match &self {
            DashboardError::RecordingActive => {
                warn!("Rejected report export: recording in progress");
                error_response(StatusCode::CONFLICT, self.to_string())
            }
            DashboardError::Export(e) => {
                error!("Failed to export report: {:#}", e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", self))
            }
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /dashboard
/// Rendered dashboard view
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    Json(state.dashboard.view().await)
}

/// POST /session/start
/// Start recording
pub async fn start_recording(State(state): State<AppState>) -> Json<SessionSnapshot> {
    info!("Start requested");
    Json(state.dashboard.start_recording().await)
}

/// POST /session/stop
/// Stop recording
pub async fn stop_recording(State(state): State<AppState>) -> Json<SessionSnapshot> {
    info!("Stop requested");
    Json(state.dashboard.stop_recording().await)
}

/// GET /session
/// Get session status
pub async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.dashboard.session().snapshot().await)
}

/// GET /session/history
/// Get the history window, oldest first
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<HistoryPoint>> {
    Json(state.dashboard.session().history().await)
}

/// GET /feedback
/// Get feedback for the current scores
pub async fn get_feedback(State(state): State<AppState>) -> Json<Vec<FeedbackItem>> {
    Json(state.dashboard.session().feedback().await)
}

/// GET /devices
pub async fn get_devices(State(state): State<AppState>) -> Json<DeviceState> {
    Json(state.dashboard.devices().await)
}

/// POST /devices/camera/toggle
pub async fn toggle_camera(State(state): State<AppState>) -> Json<DeviceState> {
    Json(state.dashboard.toggle_camera().await)
}

/// POST /devices/microphone/toggle
pub async fn toggle_microphone(State(state): State<AppState>) -> Json<DeviceState> {
    Json(state.dashboard.toggle_microphone().await)
}

/// GET /report
/// Download the analysis report as a JSON attachment
pub async fn download_report(State(state): State<AppState>) -> Response {
    let exported = match state.dashboard.export_report().await {
        Ok(exported) => exported,
        Err(e) => return e.into_response(),
    };

    let body = match exported.report.to_json() {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to serialize report: {:#}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e));
        }
    };

    info!("Serving report download: {}", exported.file_name);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", exported.file_name),
            ),
        ],
        body,
    )
        .into_response()
}

/// POST /report/export
/// Save the analysis report to the export directory
pub async fn save_report(State(state): State<AppState>) -> Response {
    match state.dashboard.save_report().await {
        Ok(path) => (
            StatusCode::OK,
            Json(SaveReportResponse {
                path: path.display().to_string(),
                message: "Report saved".to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
