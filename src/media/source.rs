use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use super::stream::{MediaStream, MediaTrack, TrackKind};

/// Which devices to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaConstraints {
    pub video: bool,
    pub audio: bool,
}

impl Default for MediaConstraints {
    fn default() -> Self {
        Self {
            video: true,
            audio: true,
        }
    }
}

/// Camera/microphone provider
///
/// Implementations:
/// - Local: device nodes on this machine (e.g. /dev/video0)
/// - Synthetic: always succeeds, for demos and tests
/// - Unavailable: always fails, the dashboard runs without video
#[async_trait::async_trait]
pub trait MediaSource: Send + Sync {
    /// Acquire a stream with the requested tracks
    async fn acquire(&self, constraints: MediaConstraints) -> Result<MediaStream>;

    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Opens the configured device nodes on the local machine
pub struct LocalDeviceSource {
    video_device: PathBuf,
    audio_device: PathBuf,
}

impl LocalDeviceSource {
    pub fn new(video_device: impl Into<PathBuf>, audio_device: impl Into<PathBuf>) -> Self {
        Self {
            video_device: video_device.into(),
            audio_device: audio_device.into(),
        }
    }
}

#[async_trait::async_trait]
impl MediaSource for LocalDeviceSource {
    async fn acquire(&self, constraints: MediaConstraints) -> Result<MediaStream> {
        let mut tracks = Vec::new();

        if constraints.video {
            if !tokio::fs::try_exists(&self.video_device).await? {
                bail!("Camera not found: {}", self.video_device.display());
            }
            tracks.push(MediaTrack::new(
                TrackKind::Video,
                self.video_device.display().to_string(),
            ));
        }

        if constraints.audio {
            if !tokio::fs::try_exists(&self.audio_device).await? {
                bail!("Microphone not found: {}", self.audio_device.display());
            }
            tracks.push(MediaTrack::new(
                TrackKind::Audio,
                self.audio_device.display().to_string(),
            ));
        }

        info!("Acquired {} local media tracks", tracks.len());

        Ok(MediaStream::new(tracks))
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Produces labelled tracks without touching any hardware
#[derive(Debug, Default)]
pub struct SyntheticMediaSource;

#[async_trait::async_trait]
impl MediaSource for SyntheticMediaSource {
    async fn acquire(&self, constraints: MediaConstraints) -> Result<MediaStream> {
        let mut tracks = Vec::new();
        if constraints.video {
            tracks.push(MediaTrack::new(TrackKind::Video, "synthetic camera"));
        }
        if constraints.audio {
            tracks.push(MediaTrack::new(TrackKind::Audio, "synthetic microphone"));
        }
        Ok(MediaStream::new(tracks))
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}

/// Always fails to acquire, e.g. when permission is denied
#[derive(Debug)]
pub struct UnavailableMediaSource {
    reason: String,
}

impl UnavailableMediaSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableMediaSource {
    fn default() -> Self {
        Self::new("no media devices available")
    }
}

#[async_trait::async_trait]
impl MediaSource for UnavailableMediaSource {
    async fn acquire(&self, _constraints: MediaConstraints) -> Result<MediaStream> {
        bail!("{}", self.reason)
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// Media source type, as named in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaSourceKind {
    Local,
    Synthetic,
    None,
}

/// Media source factory
pub struct MediaSourceFactory;

impl MediaSourceFactory {
    pub fn create(
        kind: MediaSourceKind,
        video_device: impl Into<PathBuf>,
        audio_device: impl Into<PathBuf>,
    ) -> Box<dyn MediaSource> {
        match kind {
            MediaSourceKind::Local => Box::new(LocalDeviceSource::new(video_device, audio_device)),
            MediaSourceKind::Synthetic => Box::new(SyntheticMediaSource),
            MediaSourceKind::None => Box::new(UnavailableMediaSource::new("media disabled in configuration")),
        }
    }
}
