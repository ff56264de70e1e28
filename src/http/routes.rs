use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    let router = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Rendered view
        .route("/dashboard", get(handlers::get_dashboard))
        // Recording control
        .route("/session/start", post(handlers::start_recording))
        .route("/session/stop", post(handlers::stop_recording))
        // Session queries
        .route("/session", get(handlers::get_session))
        .route("/session/history", get(handlers::get_history))
        .route("/feedback", get(handlers::get_feedback))
        // Device toggles
        .route("/devices", get(handlers::get_devices))
        .route("/devices/camera/toggle", post(handlers::toggle_camera))
        .route(
            "/devices/microphone/toggle",
            post(handlers::toggle_microphone),
        )
        // Report export
        .route("/report", get(handlers::download_report))
        .route("/report/export", post(handlers::save_report));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
