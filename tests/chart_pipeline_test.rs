use trendview::{ChartOutcome, ChartWorkspace, SeriesHistory, TrendDirection, XAxisKind};

fn single_payload() -> SeriesHistory {
    let json = r#"{
        "groupValue": "A",
        "metricName": "Price",
        "trendInfo": {"direction": "GROWTH", "description": "up", "changePercentage": 12.5},
        "dataPoints": [
            {"date": "2025-01-01T00:00:00Z", "value": 10, "operationName": "op1"},
            {"date": "2025-01-02T00:00:00Z", "value": 20, "operationName": "op2"}
        ]
    }"#;
    serde_json::from_str(json).unwrap()
}

#[test]
fn payload_to_chart_model_end_to_end() {
    let history = single_payload();
    assert_eq!(history.trend_info.direction, TrendDirection::Growth);

    let mut workspace = ChartWorkspace::new();
    workspace.declare_slot("chart-A");
    let token = workspace.begin_fetch("chart-A");
    let outcome = workspace.render_single("chart-A", token, &history);
    assert_eq!(outcome, ChartOutcome::Ready);

    let model = workspace.chart("chart-A").unwrap();
    assert_eq!(model.x_axis, XAxisKind::Category);
    assert_eq!(model.labels.len(), 2);

    let data = &model.datasets[0];
    assert_eq!(data.points[0].1, 10.0);
    assert_eq!(data.points[1].1, 20.0);
    // GROWTH color set on the data series.
    assert_eq!(
        data.border_color,
        trendview::colors_for(TrendDirection::Growth).border
    );

    // Two-point ascending trend overlay.
    let overlay = &model.datasets[1];
    assert_eq!(overlay.points.len(), 2);
    assert!(overlay.points[1].1 > overlay.points[0].1);
}

#[test]
fn empty_payload_is_no_data_not_a_panic() {
    let json = r#"{"groupValue": "A", "metricName": "Price", "dataPoints": []}"#;
    let history: SeriesHistory = serde_json::from_str(json).unwrap();

    let mut workspace = ChartWorkspace::new();
    workspace.declare_slot("chart-A");
    let token = workspace.begin_fetch("chart-A");
    assert_eq!(
        workspace.render_single("chart-A", token, &history),
        ChartOutcome::NoData
    );
    assert!(workspace.chart("chart-A").is_none());
}

#[test]
fn redraw_keeps_exactly_one_chart_per_slot() {
    let history = single_payload();
    let mut workspace = ChartWorkspace::new();
    workspace.declare_slot("chart-A");

    for _ in 0..3 {
        let token = workspace.begin_fetch("chart-A");
        assert!(workspace.render_single("chart-A", token, &history).is_ready());
        assert_eq!(workspace.live_charts(), 1);
    }
}

#[test]
fn late_stale_response_does_not_overwrite_newer_chart() {
    let first = single_payload();
    let mut second = single_payload();
    second.data_points[0].value = 100.0;
    second.data_points[1].value = 200.0;

    let mut workspace = ChartWorkspace::new();
    workspace.declare_slot("chart-A");

    let older = workspace.begin_fetch("chart-A");
    let newer = workspace.begin_fetch("chart-A");

    assert!(workspace.render_single("chart-A", newer, &second).is_ready());
    assert_eq!(
        workspace.render_single("chart-A", older, &first),
        ChartOutcome::Stale
    );
    assert_eq!(
        workspace.chart("chart-A").unwrap().datasets[0].points[0].1,
        100.0
    );
}

#[test]
fn all_groups_payload_builds_combined_chart() {
    let json = r#"[
        {
            "groupValue": "A",
            "metricName": "Price",
            "trendInfo": {"direction": "STRONG_GROWTH", "changePercentage": 15.0},
            "dataPoints": [
                {"date": "2025-01-01T00:00:00Z", "value": 10},
                {"date": "2025-01-02T00:00:00Z", "value": 12},
                {"date": "2025-01-03T00:00:00Z", "value": 14}
            ]
        },
        {
            "groupValue": "B",
            "metricName": "Price",
            "trendInfo": {"direction": "STABLE", "changePercentage": 0.5},
            "dataPoints": [
                {"date": "2025-01-02T00:00:00Z", "value": 7},
                {"date": "2025-01-03T00:00:00Z", "value": 7}
            ]
        }
    ]"#;
    let histories: Vec<SeriesHistory> = serde_json::from_str(json).unwrap();

    let mut workspace = ChartWorkspace::new();
    workspace.declare_slot("price-combined");
    let token = workspace.begin_fetch("price-combined");
    assert!(workspace
        .render_combined("price-combined", token, &histories)
        .is_ready());

    let model = workspace.chart("price-combined").unwrap();
    assert_eq!(model.x_axis, XAxisKind::TimeMs);
    assert_eq!(model.datasets.len(), 2);
    // Different point counts, shared time axis: B's first point lands on
    // the same x as A's second.
    assert_eq!(model.datasets[0].points[1].0, model.datasets[1].points[0].0);
    // Strong growth draws heavier than stable.
    assert!(model.datasets[0].border_width > model.datasets[1].border_width);
}

#[test]
fn per_metric_teardown_spares_other_metrics() {
    let history = single_payload();
    let mut workspace = ChartWorkspace::new();
    for slot in ["price-group-A", "price-group-B", "volume-group-A"] {
        workspace.declare_slot(slot);
        let token = workspace.begin_fetch(slot);
        assert!(workspace.render_single(slot, token, &history).is_ready());
    }

    assert_eq!(workspace.dispose_charts_by_prefix("price-"), 2);
    assert_eq!(workspace.live_charts(), 1);
    assert!(workspace.chart("volume-group-A").is_some());
}
