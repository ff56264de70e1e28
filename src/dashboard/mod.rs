//! Dashboard lifecycle, on-screen controls and the rendered view
//!
//! The dashboard owns one interview session and at most one media stream.
//! Everything it renders is derived from those on demand.

mod dashboard;
mod view;

pub use dashboard::{Dashboard, DeviceState, ExportedReport};
pub use view::{
    format_clock, format_timeline_label, ChartPoint, DashboardView, ScoreCard, ScoreLevel,
    VideoPanel,
};
