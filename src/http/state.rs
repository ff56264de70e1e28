use crate::dashboard::Dashboard;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The mounted dashboard
    pub dashboard: Arc<Dashboard>,

    /// Static assets served at `/`, if any
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self {
            dashboard,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(static_dir.into());
        self
    }
}
