//! Per-group summary rows and re-sortable table state for the comparison
//! view shown next to the charts.

use serde::Serialize;

use crate::history::{SeriesHistory, TrendDirection};

/// One comparison-table row, derived from a series history. Re-derivable at
/// any time; never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub group_label: String,
    pub direction: TrendDirection,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub change_percentage: f64,
}

impl TableRow {
    /// Derive a row from one series. A series with no points still gets a
    /// row (zeros) so the group stays visible in the table. The change
    /// percentage is carried verbatim from the upstream trend info.
    pub fn from_history(history: &SeriesHistory) -> Self {
        let values = history.values();
        let (min, max, mean) = if values.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (min, max, mean)
        };
        Self {
            group_label: history.group_value.clone(),
            direction: history.trend_info.direction,
            min,
            max,
            mean,
            change_percentage: history.trend_info.change_percentage,
        }
    }
}

/// Derive one row per series, in payload order.
pub fn build_rows(histories: &[SeriesHistory]) -> Vec<TableRow> {
    histories.iter().map(TableRow::from_history).collect()
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    GroupLabel,
    TrendDirection,
    Min,
    Max,
    Mean,
    ChangePercentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

fn compare(a: &TableRow, b: &TableRow, key: SortKey) -> std::cmp::Ordering {
    match key {
        // Case-insensitive, with the raw label as tiebreak so the order is
        // deterministic across labels differing only by case.
        SortKey::GroupLabel => a
            .group_label
            .to_lowercase()
            .cmp(&b.group_label.to_lowercase())
            .then_with(|| a.group_label.cmp(&b.group_label)),
        SortKey::TrendDirection => a.direction.rank().cmp(&b.direction.rank()),
        SortKey::Min => a.min.total_cmp(&b.min),
        SortKey::Max => a.max.total_cmp(&b.max),
        SortKey::Mean => a.mean.total_cmp(&b.mean),
        SortKey::ChangePercentage => a.change_percentage.total_cmp(&b.change_percentage),
    }
}

/// Sort rows stably by one key: rows with equal keys keep their original
/// relative order.
pub fn sort_rows(rows: &mut [TableRow], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Comparison table with its current sort state. Clicking the same column
/// again flips the direction; a new column resets to ascending.
#[derive(Debug, Default)]
pub struct SummaryTable {
    rows: Vec<TableRow>,
    sort: Option<(SortKey, SortDirection)>,
}

impl SummaryTable {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows, sort: None }
    }

    pub fn from_histories(histories: &[SeriesHistory]) -> Self {
        Self::new(build_rows(histories))
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn sort_state(&self) -> Option<(SortKey, SortDirection)> {
        self.sort
    }

    /// Apply a column sort and return the direction that was used.
    pub fn sort_by(&mut self, key: SortKey) -> SortDirection {
        let direction = match self.sort {
            Some((current, direction)) if current == key => direction.toggled(),
            _ => SortDirection::Ascending,
        };
        sort_rows(&mut self.rows, key, direction);
        self.sort = Some((key, direction));
        direction
    }

    /// Re-apply the current sort, e.g. after rows were re-derived. Sorting
    /// an already-sorted table leaves the order unchanged.
    pub fn resort(&mut self) {
        if let Some((key, direction)) = self.sort {
            sort_rows(&mut self.rows, key, direction);
        }
    }

    /// Replace the rows (fresh payload) and keep the current sort applied.
    pub fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.resort();
    }
}
