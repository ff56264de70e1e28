//! Analysis report export
//!
//! A report is a snapshot of the current scores and feedback, saved as a
//! pretty-printed JSON file named after the export date.

mod export;

pub use export::{report_file_name, AnalysisReport, ReportExporter};
