//! Assemble chart-ready models from history payloads: point series, OLS
//! trend overlay, and colors, in a shape the charting engine consumes
//! directly.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::history::SeriesHistory;
use crate::palette;
use crate::trend::compute_trend;

/// How x values map to the axis: category charts index points and carry
/// formatted labels; combined charts use epoch milliseconds so series with
/// different point counts align on a shared time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum XAxisKind {
    Category,
    TimeMs,
}

/// One renderable series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    /// (x, y) pairs; x is the point index or epoch ms per `XAxisKind`.
    pub points: Vec<(f64, f64)>,
    pub border_color: &'static str,
    pub point_color: &'static str,
    pub fill_color: &'static str,
    pub border_width: u32,
    pub dashed: bool,
}

/// Render-ready model for one slot. Derived data only; rebuilt from the raw
/// payload on every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartModel {
    pub slot_id: String,
    pub x_axis: XAxisKind,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

fn format_label(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y %H:%M").to_string()
}

/// Build a single-series chart: the metric's values on a category axis plus
/// a dashed trend overlay. None when the payload has no points.
pub fn build_single_series(slot_id: &str, history: &SeriesHistory) -> Option<ChartModel> {
    if history.data_points.is_empty() {
        return None;
    }

    let labels: Vec<String> = history.data_points.iter().map(|p| format_label(&p.date)).collect();
    let values = history.values();
    let trend = compute_trend(&values);
    let colors = palette::colors_for(history.trend_info.direction);
    let width = palette::border_width(history.trend_info.direction);

    let data = ChartDataset {
        label: history.metric_name.clone(),
        points: values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect(),
        border_color: colors.border,
        point_color: colors.point,
        fill_color: colors.fill,
        border_width: width,
        dashed: false,
    };
    let overlay = ChartDataset {
        label: "Trend".to_string(),
        points: trend
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect(),
        border_color: colors.trend_line,
        point_color: colors.trend_line,
        fill_color: "transparent",
        border_width: 1,
        dashed: true,
    };

    Some(ChartModel {
        slot_id: slot_id.to_string(),
        x_axis: XAxisKind::Category,
        labels,
        datasets: vec![data, overlay],
    })
}

/// Build a combined chart: one dataset per group on a shared time axis,
/// palette color by group index, heavier lines for strong trends. Groups
/// with no points are skipped; None when nothing remains.
pub fn build_combined(slot_id: &str, histories: &[SeriesHistory]) -> Option<ChartModel> {
    let mut datasets = Vec::with_capacity(histories.len());
    for (index, history) in histories.iter().enumerate() {
        if history.data_points.is_empty() {
            continue;
        }
        let color = palette::group_color(index);
        datasets.push(ChartDataset {
            label: history.group_value.clone(),
            points: history
                .data_points
                .iter()
                .map(|p| (p.date.timestamp_millis() as f64, p.value))
                .collect(),
            border_color: color,
            point_color: color,
            fill_color: "transparent",
            border_width: palette::border_width(history.trend_info.direction),
            dashed: false,
        });
    }

    if datasets.is_empty() {
        return None;
    }

    Some(ChartModel {
        slot_id: slot_id.to_string(),
        x_axis: XAxisKind::TimeMs,
        labels: Vec::new(),
        datasets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{DataPoint, TrendDirection, TrendInfo};
    use chrono::TimeZone;

    fn point(day: u32, value: f64) -> DataPoint {
        DataPoint {
            date: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
            value,
            export_session_id: None,
            operation_name: format!("op{}", day),
        }
    }

    fn series(group: &str, direction: TrendDirection, values: &[f64]) -> SeriesHistory {
        SeriesHistory {
            group_value: group.to_string(),
            metric_name: "Price".to_string(),
            trend_info: TrendInfo {
                direction,
                ..TrendInfo::default()
            },
            data_points: values
                .iter()
                .enumerate()
                .map(|(i, &v)| point(i as u32 + 1, v))
                .collect(),
        }
    }

    #[test]
    fn single_series_has_data_and_trend_overlay() {
        let history = series("A", TrendDirection::Growth, &[10.0, 20.0]);
        let model = build_single_series("slot-1", &history).unwrap();

        assert_eq!(model.slot_id, "slot-1");
        assert_eq!(model.x_axis, XAxisKind::Category);
        assert_eq!(model.labels.len(), 2);
        assert_eq!(model.datasets.len(), 2);

        let data = &model.datasets[0];
        assert_eq!(data.points, vec![(0.0, 10.0), (1.0, 20.0)]);
        assert_eq!(data.border_color, palette::colors_for(TrendDirection::Growth).border);
        assert!(!data.dashed);

        // Exact linear input: the trend overlay reproduces the data, ascending.
        let overlay = &model.datasets[1];
        assert!(overlay.dashed);
        assert!((overlay.points[0].1 - 10.0).abs() < 1e-9);
        assert!((overlay.points[1].1 - 20.0).abs() < 1e-9);
        assert!(overlay.points[1].1 > overlay.points[0].1);
    }

    #[test]
    fn empty_payload_yields_none() {
        let history = series("A", TrendDirection::Stable, &[]);
        assert!(build_single_series("slot-1", &history).is_none());
    }

    #[test]
    fn combined_aligns_groups_on_time_axis() {
        let groups = [
            series("A", TrendDirection::Growth, &[1.0, 2.0, 3.0]),
            series("B", TrendDirection::StrongDecline, &[9.0, 8.0]),
        ];
        let model = build_combined("slot-all", &groups).unwrap();

        assert_eq!(model.x_axis, XAxisKind::TimeMs);
        assert_eq!(model.datasets.len(), 2);
        assert_eq!(model.datasets[0].points.len(), 3);
        assert_eq!(model.datasets[1].points.len(), 2);
        // Same day, same x regardless of group.
        assert_eq!(model.datasets[0].points[0].0, model.datasets[1].points[0].0);
        // Palette by group index; strong decline draws heavier.
        assert_eq!(model.datasets[0].border_color, palette::group_color(0));
        assert_eq!(model.datasets[1].border_color, palette::group_color(1));
        assert_eq!(model.datasets[1].border_width, 3);
        assert_eq!(model.datasets[0].border_width, 2);
    }

    #[test]
    fn combined_skips_empty_groups() {
        let groups = [
            series("A", TrendDirection::Stable, &[]),
            series("B", TrendDirection::Stable, &[5.0, 5.0]),
        ];
        let model = build_combined("slot-all", &groups).unwrap();
        assert_eq!(model.datasets.len(), 1);
        assert_eq!(model.datasets[0].label, "B");
        // Color keeps the original group index so redraws stay stable.
        assert_eq!(model.datasets[0].border_color, palette::group_color(1));

        let empty = [series("A", TrendDirection::Stable, &[])];
        assert!(build_combined("slot-all", &empty).is_none());
    }

    #[test]
    fn build_is_deterministic() {
        let history = series("A", TrendDirection::Decline, &[5.0, 4.0, 3.5]);
        let first = build_single_series("s", &history).unwrap();
        let second = build_single_series("s", &history).unwrap();
        assert_eq!(first, second);
    }
}
