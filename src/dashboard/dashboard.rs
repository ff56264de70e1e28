use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{error, info};

use super::view::DashboardView;
use crate::error::DashboardError;
use crate::feedback;
use crate::media::{MediaConstraints, MediaSource, MediaStream, TrackKind};
use crate::report::{AnalysisReport, ReportExporter};
use crate::session::{InterviewSession, SessionConfig, SessionSnapshot};

/// Camera/microphone toggles and whether a stream is bound to the video panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    pub camera_enabled: bool,
    pub microphone_enabled: bool,
    pub stream_bound: bool,
}

/// A generated report together with its download file name
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub file_name: String,
    pub report: AnalysisReport,
}

/// The interview dashboard
///
/// Dropping the dashboard cancels the tick task and releases the media
/// stream; `unmount` does the same explicitly.
pub struct Dashboard {
    session: InterviewSession,
    media: Mutex<Option<MediaStream>>,
    camera_enabled: AtomicBool,
    microphone_enabled: AtomicBool,
    exporter: ReportExporter,
}

impl Dashboard {
    /// Create the session and try once to acquire camera and microphone
    ///
    /// Acquisition failure is logged and the dashboard runs without video.
    pub async fn mount(
        session_config: SessionConfig,
        media_source: &dyn MediaSource,
        exporter: ReportExporter,
    ) -> Self {
        let session = InterviewSession::new(session_config);

        let media = match media_source.acquire(MediaConstraints::default()).await {
            Ok(stream) => {
                info!(
                    "Bound {} media stream to video panel ({} tracks)",
                    media_source.name(),
                    stream.tracks().len()
                );
                Some(stream)
            }
            Err(e) => {
                error!("Error accessing camera: {:#}", e);
                None
            }
        };

        info!("Dashboard mounted for session {}", session.id());

        Self {
            session,
            media: Mutex::new(media),
            camera_enabled: AtomicBool::new(true),
            microphone_enabled: AtomicBool::new(true),
            exporter,
        }
    }

    /// Stop recording and release the media stream
    pub async fn unmount(&self) {
        self.session.shutdown().await;

        if let Some(stream) = self.media.lock().await.take() {
            stream.release();
        }

        info!("Dashboard unmounted for session {}", self.session.id());
    }

    pub fn session(&self) -> &InterviewSession {
        &self.session
    }

    pub async fn start_recording(&self) -> SessionSnapshot {
        self.session.start().await
    }

    pub async fn stop_recording(&self) -> SessionSnapshot {
        self.session.stop().await
    }

    pub async fn toggle_camera(&self) -> DeviceState {
        let enabled = !self.camera_enabled.fetch_xor(true, Ordering::SeqCst);
        self.apply_track_state(TrackKind::Video, enabled).await;
        info!("Camera {}", if enabled { "enabled" } else { "disabled" });
        self.devices().await
    }

    pub async fn toggle_microphone(&self) -> DeviceState {
        let enabled = !self.microphone_enabled.fetch_xor(true, Ordering::SeqCst);
        self.apply_track_state(TrackKind::Audio, enabled).await;
        info!("Microphone {}", if enabled { "enabled" } else { "disabled" });
        self.devices().await
    }

    pub async fn devices(&self) -> DeviceState {
        DeviceState {
            camera_enabled: self.camera_enabled.load(Ordering::SeqCst),
            microphone_enabled: self.microphone_enabled.load(Ordering::SeqCst),
            stream_bound: self.media.lock().await.is_some(),
        }
    }

    /// Build the analysis report for download
    ///
    /// Disabled while recording.
    pub async fn export_report(&self) -> Result<ExportedReport, DashboardError> {
        let scores = self
            .session
            .with_state(|state| (!state.is_recording()).then(|| state.current_scores()))
            .await
            .ok_or(DashboardError::RecordingActive)?;

        let report = AnalysisReport::generate(scores);

        Ok(ExportedReport {
            file_name: report.file_name(),
            report,
        })
    }

    /// Build the analysis report and save it to the export directory
    pub async fn save_report(&self) -> Result<PathBuf, DashboardError> {
        let exported = self.export_report().await?;
        self.exporter
            .export(&exported.report)
            .map_err(DashboardError::Export)
    }

    /// Render the current state
    pub async fn view(&self) -> DashboardView {
        let devices = self.devices().await;

        self.session
            .with_state(|state| {
                let scores = state.current_scores();
                DashboardView::render(
                    state.is_recording(),
                    state.duration_secs(),
                    &scores,
                    state.history().iter(),
                    feedback::evaluate(&scores),
                    devices,
                )
            })
            .await
    }

    async fn apply_track_state(&self, kind: TrackKind, enabled: bool) {
        if let Some(stream) = self.media.lock().await.as_ref() {
            stream.set_enabled(kind, enabled);
        }
    }
}
