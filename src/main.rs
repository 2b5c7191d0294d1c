use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use trendview::{
    excel_form_fields, icon_for, sort_rows, Args, ChartOutcome, ChartWorkspace, ExportSettings,
    SeriesHistory, SettingsManager, SortDirection, SummaryTable,
};

/// Parse a payload file holding either one series object or an array of
/// them (the per-group and all-groups endpoint shapes).
fn load_histories(contents: &str) -> Result<Vec<SeriesHistory>> {
    if let Ok(many) = serde_json::from_str::<Vec<SeriesHistory>>(contents) {
        return Ok(many);
    }
    let one: SeriesHistory = serde_json::from_str(contents)
        .map_err(|e| eyre!("Payload is neither a series nor an array of series: {}", e))?;
    Ok(vec![one])
}

fn print_report(histories: &[SeriesHistory], table: &SummaryTable, settings_limit: usize) {
    println!(
        "{} series (fetch limit {})",
        histories.len(),
        settings_limit
    );
    println!(
        "{:<20} {:>5} {:>12} {:>12} {:>12} {:>10}",
        "Group", "Trend", "Min", "Max", "Mean", "Change %"
    );
    for row in table.rows() {
        println!(
            "{:<20} {:>5} {:>12.2} {:>12.2} {:>12.2} {:>+10.2}",
            row.group_label,
            icon_for(row.direction),
            row.min,
            row.max,
            row.mean,
            row.change_percentage
        );
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let settings = match SettingsManager::new(trendview::APP_NAME) {
        Ok(manager) => manager.load()?,
        Err(e) => {
            eprintln!("Warning: using default settings: {}", e);
            trendview::StatisticsSettings::default()
        }
    };

    let contents = std::fs::read_to_string(&args.path)?;
    let histories = load_histories(&contents)?;

    let mut workspace = ChartWorkspace::new();
    workspace.declare_slot(args.slot.clone());
    let token = workspace.begin_fetch(&args.slot);
    let outcome = if args.combined {
        workspace.render_combined(&args.slot, token, &histories)
    } else {
        match histories.first() {
            Some(first) => workspace.render_single(&args.slot, token, first),
            None => ChartOutcome::NoData,
        }
    };

    let mut table = SummaryTable::from_histories(&histories);
    if let Some(key) = args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let mut rows = table.rows().to_vec();
        sort_rows(&mut rows, key, direction);
        table = SummaryTable::new(rows);
    }

    match outcome {
        ChartOutcome::Ready => {
            let model = workspace
                .chart(&args.slot)
                .ok_or_else(|| eyre!("Chart missing after successful render"))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(model)?);
            } else {
                print_report(&histories, &table, settings.max_operations);
                println!(
                    "Chart '{}': {} dataset(s), {} label(s)",
                    model.slot_id,
                    model.datasets.len(),
                    model.labels.len()
                );
                let fields = excel_form_fields(table.rows(), &ExportSettings::default());
                println!("Export payload: {} form field(s)", fields.len());
            }
        }
        ChartOutcome::NoData => println!("No data available for '{}'", args.slot),
        ChartOutcome::MissingSlot => println!("Slot '{}' is not available", args.slot),
        ChartOutcome::Stale => println!("A newer request owns slot '{}'", args.slot),
    }

    Ok(())
}
