//! Form payload for `POST /statistics/export/excel`.
//!
//! The endpoint takes two form fields, both JSON-encoded: `statisticsData`
//! (the comparison rows) and `settings` (alert thresholds). If encoding
//! fails the field falls back to an empty JSON placeholder so the request
//! still round-trips instead of aborting silently.

use serde::{Deserialize, Serialize};

use crate::summary::TableRow;

/// Alert thresholds sent along with an Excel export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    pub warning_threshold: f64,
    pub critical_threshold: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            warning_threshold: 10.0,
            critical_threshold: 20.0,
        }
    }
}

/// Form fields for the Excel export request, in submission order.
pub fn excel_form_fields(
    rows: &[TableRow],
    settings: &ExportSettings,
) -> Vec<(&'static str, String)> {
    let data = serde_json::to_string(rows).unwrap_or_else(|err| {
        eprintln!("Warning: could not encode statistics data for export: {}", err);
        "[]".to_string()
    });
    let settings = serde_json::to_string(settings).unwrap_or_else(|err| {
        eprintln!("Warning: could not encode export settings: {}", err);
        "{}".to_string()
    });
    vec![("statisticsData", data), ("settings", settings)]
}
