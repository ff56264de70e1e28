use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::feedback::{self, FeedbackItem};
use crate::scores::EmotionScores;

/// Exported interview analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// When the report was generated
    pub timestamp: DateTime<Utc>,

    pub scores: EmotionScores,

    /// Feedback messages, in display order
    pub feedback: Vec<String>,

    pub overall_score: u8,
}

impl AnalysisReport {
    pub fn new(scores: EmotionScores, feedback: &[FeedbackItem], timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            scores,
            feedback: feedback::messages(feedback),
            overall_score: scores.overall(),
        }
    }

    /// Build a report for the given scores, stamped with the current time
    pub fn generate(scores: EmotionScores) -> Self {
        let items = feedback::evaluate(&scores);
        Self::new(scores, &items, Utc::now())
    }

    /// `interview-analysis-<YYYY-MM-DD>.json`
    pub fn file_name(&self) -> String {
        report_file_name(&self.timestamp)
    }

    /// Pretty-printed JSON body
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize analysis report")
    }
}

pub fn report_file_name(timestamp: &DateTime<Utc>) -> String {
    format!("interview-analysis-{}.json", timestamp.format("%Y-%m-%d"))
}

/// Writes reports into a directory
#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_dir: PathBuf,
}

impl ReportExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save the report, replacing any report already exported the same day
    pub fn export(&self, report: &AnalysisReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create report directory: {:?}", self.output_dir)
        })?;

        let path = self.output_dir.join(report.file_name());
        let body = report.to_json()?;

        fs::write(&path, body).with_context(|| format!("Failed to write report: {:?}", path))?;

        info!(
            "Exported analysis report to {} (overall score {})",
            path.display(),
            report.overall_score
        );

        Ok(path)
    }
}
