//! Wire data model for the statistics history endpoints.
//!
//! Mirrors the JSON served by `GET /statistics/history` (one series) and
//! `GET /statistics/history/all-groups` (array of series). The payload is
//! produced upstream; this module only deserializes and carries it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical trend label computed upstream from a metric's recent history.
///
/// An unrecognized string deserializes as `Stable`, so downstream color and
/// sort lookups are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    StrongGrowth,
    Growth,
    Decline,
    StrongDecline,
    #[default]
    #[serde(other)]
    Stable,
}

impl TrendDirection {
    /// Rank for sorting: STRONG_GROWTH=5 down to STRONG_DECLINE=1.
    pub fn rank(&self) -> u8 {
        match self {
            TrendDirection::StrongGrowth => 5,
            TrendDirection::Growth => 4,
            TrendDirection::Stable => 3,
            TrendDirection::Decline => 2,
            TrendDirection::StrongDecline => 1,
        }
    }

    /// Whether this is one of the two "strong" variants (drawn heavier).
    pub fn is_strong(&self) -> bool {
        matches!(
            self,
            TrendDirection::StrongGrowth | TrendDirection::StrongDecline
        )
    }

    /// Parse a direction label, falling back to `Stable` for anything
    /// unrecognized. Never fails.
    pub fn parse(label: &str) -> Self {
        match label {
            "STRONG_GROWTH" => TrendDirection::StrongGrowth,
            "GROWTH" => TrendDirection::Growth,
            "DECLINE" => TrendDirection::Decline,
            "STRONG_DECLINE" => TrendDirection::StrongDecline,
            _ => TrendDirection::Stable,
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrendDirection::StrongGrowth => "STRONG_GROWTH",
            TrendDirection::Growth => "GROWTH",
            TrendDirection::Stable => "STABLE",
            TrendDirection::Decline => "DECLINE",
            TrendDirection::StrongDecline => "STRONG_DECLINE",
        };
        write!(f, "{}", s)
    }
}

/// One historical observation of a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_session_id: Option<i64>,
    #[serde(default)]
    pub operation_name: String,
}

/// Trend summary computed upstream (direction, regression quality, change).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendInfo {
    #[serde(default)]
    pub direction: TrendDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub change_percentage: f64,
    #[serde(default)]
    pub description: String,
}

/// History of one metric for one group: the unit the chart and table
/// builders consume. Points are ordered by date ascending (upstream
/// contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesHistory {
    pub group_value: String,
    pub metric_name: String,
    #[serde(default)]
    pub trend_info: TrendInfo,
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
}

impl SeriesHistory {
    /// Point values in order, for trend estimation and table statistics.
    pub fn values(&self) -> Vec<f64> {
        self.data_points.iter().map(|p| p.value).collect()
    }
}

/// Query parameters of the history endpoints. The crate does no HTTP; this
/// renders the pairs a caller appends to its request URL.
#[derive(Debug, Clone)]
pub struct HistoryRequest {
    pub template_id: i64,
    /// None requests all groups (`/statistics/history/all-groups`).
    pub group_value: Option<String>,
    pub metric_name: String,
    pub limit: usize,
    pub filter_field: Option<(String, String)>,
}

impl HistoryRequest {
    pub fn new(template_id: i64, metric_name: impl Into<String>) -> Self {
        Self {
            template_id,
            group_value: None,
            metric_name: metric_name.into(),
            limit: 50,
            filter_field: None,
        }
    }

    pub fn with_group(mut self, group_value: impl Into<String>) -> Self {
        self.group_value = Some(group_value.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_field = Some((name.into(), value.into()));
        self
    }

    /// Endpoint path: per-group history or the all-groups variant.
    pub fn path(&self) -> &'static str {
        if self.group_value.is_some() {
            "/statistics/history"
        } else {
            "/statistics/history/all-groups"
        }
    }

    /// Query pairs in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("templateId", self.template_id.to_string())];
        if let Some(group) = &self.group_value {
            pairs.push(("groupValue", group.clone()));
        }
        pairs.push(("metricName", self.metric_name.clone()));
        pairs.push(("limit", self.limit.to_string()));
        if let Some((name, value)) = &self.filter_field {
            pairs.push(("filterFieldName", name.clone()));
            pairs.push(("filterFieldValue", value.clone()));
        }
        pairs
    }
}
