use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::media::{MediaSource, MediaSourceFactory, MediaSourceKind};
use crate::session::{SessionConfig, DEFAULT_HISTORY_CAPACITY};

/// Prefix for environment overrides, e.g. `INTERVIEW__SERVICE__HTTP__PORT=9000`
pub const ENV_PREFIX: &str = "INTERVIEW";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub session: SessionSettings,
    pub media: MediaConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Directory holding the dashboard page
    pub static_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionSettings {
    pub tick_interval_ms: u64,
    pub history_capacity: usize,
    pub reset_duration_on_start: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct MediaConfig {
    pub source: MediaSourceKind,
    pub video_device: String,
    pub audio_device: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Where saved reports go; `~` is expanded
    pub output_dir: String,
}

impl Config {
    /// Load built-in defaults, then `path` (if present), then environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "interview-dashboard")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8080)?
            .set_default("service.http.static_dir", "static")?
            .set_default("session.tick_interval_ms", 1000)?
            .set_default("session.history_capacity", DEFAULT_HISTORY_CAPACITY as i64)?
            .set_default("session.reset_duration_on_start", false)?
            .set_default("media.source", "local")?
            .set_default("media.video_device", "/dev/video0")?
            .set_default("media.audio_device", "/dev/snd")?
            .set_default("report.output_dir", "reports")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        Ok(settings.try_deserialize()?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service.http.bind, self.service.http.port)
    }
}

impl SessionSettings {
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            history_capacity: self.history_capacity,
            reset_duration_on_start: self.reset_duration_on_start,
            seed: self.seed,
            ..SessionConfig::default()
        }
    }
}

impl MediaConfig {
    pub fn create_source(&self) -> Box<dyn MediaSource> {
        MediaSourceFactory::create(self.source, &self.video_device, &self.audio_device)
    }
}

impl ReportConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output_dir).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent");

        let cfg = Config::load(path.to_str().unwrap()).unwrap();

        assert_eq!(cfg.service.http.port, 8080);
        assert_eq!(cfg.session.tick_interval_ms, 1000);
        assert_eq!(cfg.session.history_capacity, 60);
        assert!(!cfg.session.reset_duration_on_start);
        assert_eq!(cfg.session.seed, None);
        assert_eq!(cfg.media.source, MediaSourceKind::Local);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(
            &path,
            "[session]\nhistory_capacity = 30\nseed = 9\n\n[media]\nsource = \"synthetic\"\n",
        )
        .unwrap();

        let cfg = Config::load(path.to_str().unwrap()).unwrap();
        let session = cfg.session.to_session_config();

        assert_eq!(session.history_capacity, 30);
        assert_eq!(session.seed, Some(9));
        assert_eq!(session.tick_interval, Duration::from_secs(1));
        assert_eq!(cfg.media.source, MediaSourceKind::Synthetic);
    }

    #[test]
    fn test_output_path_keeps_plain_paths() {
        let report = ReportConfig {
            output_dir: "var/reports".to_string(),
        };
        assert_eq!(report.output_path(), PathBuf::from("var/reports"));
    }
}
