//! Chart-ready trend models and summary tables from statistics history.
//!
//! Consumes the JSON payloads of the statistics history endpoints and
//! produces render-ready chart models (point series, least-squares trend
//! overlay, colors), per-group summary rows with stable sorting, and
//! per-slot chart lifecycle management with request sequencing.

pub mod chart;
pub mod cli;
pub mod config;
pub mod export;
pub mod history;
pub mod palette;
pub mod registry;
pub mod summary;
pub mod trend;
pub mod workspace;

pub use chart::{build_combined, build_single_series, ChartDataset, ChartModel, XAxisKind};
pub use cli::Args;
pub use config::{SettingsManager, StatisticsSettings};
pub use export::{excel_form_fields, ExportSettings};
pub use history::{DataPoint, HistoryRequest, SeriesHistory, TrendDirection, TrendInfo};
pub use palette::{border_width, colors_for, group_color, icon_for, ColorSet};
pub use registry::{ChartHandle, ChartRegistry, RequestToken};
pub use summary::{build_rows, sort_rows, SortDirection, SortKey, SummaryTable, TableRow};
pub use trend::{compute_trend, linear_fit};
pub use workspace::{ChartOutcome, ChartWorkspace};

/// Application name used for the config directory and other app-specific
/// paths.
pub const APP_NAME: &str = "trendview";
