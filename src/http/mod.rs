//! HTTP render surface for the dashboard
//!
//! This module exposes the on-screen controls and the rendered view:
//! - GET /dashboard - Rendered dashboard view
//! - POST /session/start, POST /session/stop - Recording control
//! - GET /session, GET /session/history - Session status and timeline
//! - GET /feedback - Current feedback items
//! - POST /devices/camera/toggle, POST /devices/microphone/toggle - Device toggles
//! - GET /report - Download the analysis report
//! - POST /report/export - Save the analysis report to disk
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
